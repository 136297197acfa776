use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::config::SpeedSetting;

/// Draws the one-line HUD: current score, session best, and speed preset.
pub fn render_hud(
    frame: &mut Frame<'_>,
    area: Rect,
    score: u32,
    best_score: u32,
    speed: SpeedSetting,
) {
    let line = Line::from(vec![
        Span::styled(
            format!(" Score {score} "),
            Style::new().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("│ Best {best_score} "),
            Style::new().fg(Color::Yellow),
        ),
        Span::styled(
            format!("│ Speed {} ", speed.name()),
            Style::new().fg(Color::DarkGray),
        ),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}
