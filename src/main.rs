use std::error::Error;
use std::fs::File;
use std::io;
use std::panic;

use clap::Parser;
use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use log::{info, LevelFilter};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use simplelog::{Config, WriteLogger};

use gridsnake::config::{SpeedSetting, LOG_FILE_NAME, MENU_POLL_INTERVAL};
use gridsnake::input::{poll_input, GameInput};
use gridsnake::runtime::{self, AppTerminal, RunOutcome};
use gridsnake::ui::menu;

#[derive(Debug, Parser)]
#[command(version, about = "Grid-based terminal snake game")]
struct Cli {
    /// Speed preset: fast, normal, or slow. Unknown values fall back to
    /// normal.
    #[arg(long, default_value = "normal")]
    speed: String,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    WriteLogger::init(
        LevelFilter::Info,
        Config::default(),
        File::create(LOG_FILE_NAME)?,
    )?;
    info!(
        "starting {} v{}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    );

    install_panic_hook();

    let mut terminal = setup_terminal()?;
    let result = run(&mut terminal, SpeedSetting::from_name(&cli.speed));
    cleanup_terminal()?;

    result.map_err(Into::into)
}

/// Outer menu loop: pick a speed, play a run, come back to the menu with
/// the updated session best until the player quits.
fn run(terminal: &mut AppTerminal, mut speed: SpeedSetting) -> io::Result<()> {
    let mut best_score = 0;

    loop {
        terminal.draw(|frame| {
            let area = frame.area();
            menu::render_start_menu(frame, area, speed, best_score);
        })?;

        let Some(input) = poll_input(MENU_POLL_INTERVAL)? else {
            continue;
        };
        match input {
            GameInput::Quit => break,
            GameInput::Speed(setting) => speed = setting,
            GameInput::Confirm => {
                let report = runtime::run_game(terminal, speed, best_score)?;
                info!("run resolved: {} (score {})", report.outcome, report.score);
                best_score = best_score.max(report.score);
                if report.outcome == RunOutcome::Quit {
                    break;
                }
            }
            GameInput::Direction(_) => {}
        }
    }

    Ok(())
}

fn setup_terminal() -> io::Result<AppTerminal> {
    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, Hide)?;

    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

fn cleanup_terminal() -> io::Result<()> {
    disable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, Show, LeaveAlternateScreen)?;

    Ok(())
}

fn install_panic_hook() {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        restore_terminal_after_panic();
        default_hook(panic_info);
    }));
}

fn restore_terminal_after_panic() {
    let _ = disable_raw_mode();

    let mut stdout = io::stdout();
    let _ = execute!(stdout, Show, LeaveAlternateScreen);
}
