use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::config::{SpeedSetting, GLYPH_FOOD, GLYPH_SNAKE};
use crate::game::GameState;
use crate::grid::{Cell, Grid};
use crate::ui::hud::render_hud;

/// Terminal rows reserved above the play area for the HUD.
pub const HUD_ROWS: u16 = 1;

/// Renders the full game frame from immutable state.
///
/// ratatui redraws from a clean buffer each frame, so the previous frame is
/// implicitly cleared before the snake and food are drawn.
pub fn render(frame: &mut Frame<'_>, state: &GameState, speed: SpeedSetting, best_score: u32) {
    let [hud_area, play_area] =
        Layout::vertical([Constraint::Length(HUD_ROWS), Constraint::Min(0)]).areas(frame.area());

    render_hud(frame, hud_area, state.score, best_score, speed);

    let block = Block::bordered().border_style(Style::new().fg(Color::Green));
    let inner = block.inner(play_area);
    frame.render_widget(block, play_area);

    render_food(frame, inner, state);
    render_snake(frame, inner, state);
}

fn render_food(frame: &mut Frame<'_>, inner: Rect, state: &GameState) {
    let Some((x, y)) = cell_to_screen(inner, &state.grid(), state.food.cell()) else {
        return;
    };

    frame
        .buffer_mut()
        .set_string(x, y, GLYPH_FOOD, Style::new().fg(Color::Red));
}

fn render_snake(frame: &mut Frame<'_>, inner: Rect, state: &GameState) {
    let head = state.snake.head();
    let grid = state.grid();

    let buffer = frame.buffer_mut();
    for cell in state.snake.cells() {
        let Some((x, y)) = cell_to_screen(inner, &grid, *cell) else {
            continue;
        };

        let style = if *cell == head {
            Style::new().fg(Color::White).add_modifier(Modifier::BOLD)
        } else {
            Style::new().fg(Color::Green)
        };
        buffer.set_string(x, y, GLYPH_SNAKE, style);
    }
}

/// Maps a grid cell to its terminal position inside `inner` via the grid's
/// pixel origin. Cells that fall outside the visible area (for example
/// after the terminal shrank mid-run) are skipped.
fn cell_to_screen(inner: Rect, grid: &Grid, cell: Cell) -> Option<(u16, u16)> {
    if !grid.contains_cell(cell) {
        return None;
    }

    let (px, py) = grid.cell_to_pixel(cell);
    let x = inner.x.saturating_add(u16::try_from(px).ok()?);
    let y = inner.y.saturating_add(u16::try_from(py).ok()?);
    if x >= inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}
