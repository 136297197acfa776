use std::fmt;
use std::io;
use std::thread;
use std::time::Instant;

use log::info;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use crate::config::{
    SpeedSetting, CELL_SIZE, GAME_OVER_GRACE, INPUT_POLL_INTERVAL, MIN_GRID_COLUMNS, MIN_GRID_ROWS,
};
use crate::game::{GameState, GameStatus};
use crate::grid::{Grid, GridError};
use crate::input::{poll_input, DirectionSlot, GameInput};
use crate::renderer;
use crate::ui::menu;

/// Concrete terminal type used by the runtime.
pub type AppTerminal = Terminal<CrosstermBackend<io::Stdout>>;

/// How a run ended.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum RunOutcome {
    /// The snake collided and the run played out to its terminal status.
    GameOver,
    /// The player quit mid-run.
    Quit,
}

impl fmt::Display for RunOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GameOver => f.write_str("game over"),
            Self::Quit => f.write_str("quit"),
        }
    }
}

/// Terminal result of one run.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct RunReport {
    pub outcome: RunOutcome,
    pub score: u32,
}

/// Drives one complete run: tick at the preset interval, render after every
/// tick, resolve once the state reaches game over.
///
/// The requested-direction mailbox is created fresh here, so input from a
/// previous run never leaks into a new one. Input polling writes the latest
/// direction into the slot (last write wins) and the state reads it once
/// per tick.
pub fn run_game(
    terminal: &mut AppTerminal,
    speed: SpeedSetting,
    session_best: u32,
) -> io::Result<RunReport> {
    let size = terminal.size()?;
    let grid = grid_for_surface(size.width, size.height).map_err(io::Error::other)?;
    info!(
        "run started: speed {}, grid {}x{}",
        speed.name(),
        grid.columns(),
        grid.rows(),
    );

    let mut state = GameState::start(grid);
    let mut slot = DirectionSlot::new();
    let interval = speed.tick_interval();
    let mut last_tick = Instant::now();

    loop {
        let best = session_best.max(state.score);
        terminal.draw(|frame| renderer::render(frame, &state, speed, best))?;

        if state.status == GameStatus::GameOver {
            let score = state.score;
            terminal.draw(|frame| {
                let area = frame.area();
                renderer::render(frame, &state, speed, best);
                menu::render_game_over(frame, area, score, best);
            })?;
            // Let the final frame sit before resolving back to the menu.
            thread::sleep(GAME_OVER_GRACE);
            info!("run finished: score {score}");
            return Ok(RunReport {
                outcome: RunOutcome::GameOver,
                score,
            });
        }

        if let Some(input) = poll_input(INPUT_POLL_INTERVAL)? {
            match input {
                GameInput::Quit => {
                    info!("run aborted by player at score {}", state.score);
                    return Ok(RunReport {
                        outcome: RunOutcome::Quit,
                        score: state.score,
                    });
                }
                GameInput::Direction(direction) => slot.set(direction),
                GameInput::Speed(_) | GameInput::Confirm => {}
            }
        }

        if last_tick.elapsed() >= interval {
            state.tick(slot.get());
            last_tick = Instant::now();
        }
    }
}

/// Builds the play grid the display surface dictates: the terminal area
/// minus the HUD line and the play-area border.
fn grid_for_surface(width: u16, height: u16) -> Result<Grid, GridError> {
    let surface_width = width.saturating_sub(2);
    let surface_height = height.saturating_sub(renderer::HUD_ROWS + 2);
    let grid = Grid::new(surface_width, surface_height, CELL_SIZE)?;

    if grid.columns() < MIN_GRID_COLUMNS || grid.rows() < MIN_GRID_ROWS {
        return Err(GridError::SurfaceTooSmall {
            columns: grid.columns(),
            rows: grid.rows(),
        });
    }
    Ok(grid)
}
