use std::fmt;

use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::food::Food;
use crate::grid::Grid;
use crate::input::Direction;
use crate::snake::Snake;

/// Current high-level gameplay status.
///
/// `Start` lasts until the first tick that applies a direction input;
/// `GameOver` is terminal for the state, a new run builds a fresh one.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Start,
    Playing,
    GameOver,
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Start => "start",
            Self::Playing => "playing",
            Self::GameOver => "game over",
        };
        f.write_str(name)
    }
}

/// Complete mutable game state for one run.
///
/// Owns the snake and the food; the grid is copied out to the renderer as a
/// read-only value.
#[derive(Debug, Clone)]
pub struct GameState {
    pub snake: Snake,
    pub food: Food,
    pub score: u32,
    pub status: GameStatus,
    grid: Grid,
    rng: StdRng,
}

impl GameState {
    /// Creates the starting state for a run with an entropy-seeded RNG.
    #[must_use]
    pub fn start(grid: Grid) -> Self {
        Self::with_seed(grid, rand::random())
    }

    /// Creates a deterministic state for tests and reproducible runs.
    #[must_use]
    pub fn with_seed(grid: Grid, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let snake = Snake::new(&grid);
        let food = Food::place(&mut rng, &grid, &snake);

        Self {
            snake,
            food,
            score: 0,
            status: GameStatus::Start,
            grid,
            rng,
        }
    }

    /// Advances the simulation by one tick with the latest requested
    /// direction, or `None` while no input has arrived yet.
    pub fn tick(&mut self, requested: Option<Direction>) {
        if self.status == GameStatus::GameOver {
            return;
        }

        self.snake.advance(requested);

        if self.snake.collided() {
            info!("run over at score {}", self.score);
            self.status = GameStatus::GameOver;
            return;
        }

        if self.status == GameStatus::Start && requested.is_some() {
            self.status = GameStatus::Playing;
        }

        if self.snake.head() == self.food.cell() {
            self.score += 1;
            debug!("food eaten, score {}", self.score);
            self.snake.request_growth();
            self.food = Food::place(&mut self.rng, &self.grid, &self.snake);
        }
    }

    /// Returns the grid this run plays on.
    #[must_use]
    pub fn grid(&self) -> Grid {
        self.grid
    }
}

#[cfg(test)]
mod tests {
    use crate::food::Food;
    use crate::grid::{Cell, Grid};
    use crate::input::Direction;
    use crate::snake::Snake;

    use super::{GameState, GameStatus};

    fn grid() -> Grid {
        Grid::new(10, 10, 1).expect("test grid should build")
    }

    #[test]
    fn fresh_state_starts_clean() {
        let state = GameState::with_seed(grid(), 1);

        assert_eq!(state.status, GameStatus::Start);
        assert_eq!(state.score, 0);
        assert_eq!(state.snake.len(), 6);
        assert!(!state.snake.occupies(state.food.cell()));
    }

    #[test]
    fn ticking_without_input_keeps_the_start_status() {
        let mut state = GameState::with_seed(grid(), 1);
        let head = state.snake.head();

        state.tick(None);
        state.tick(None);

        assert_eq!(state.status, GameStatus::Start);
        assert_eq!(state.snake.head(), head);
    }

    #[test]
    fn first_applied_direction_starts_play() {
        let mut state = GameState::with_seed(grid(), 1);

        state.tick(Some(Direction::Down));

        assert_eq!(state.status, GameStatus::Playing);
    }

    #[test]
    fn eating_scores_grows_and_replaces_the_food() {
        let mut state = GameState::with_seed(grid(), 4);
        state.snake = Snake::from_cells(
            vec![Cell { column: 1, row: 5 }, Cell { column: 2, row: 5 }],
            Direction::Right,
            &grid(),
        );
        state.food = Food::at(Cell { column: 3, row: 5 });

        state.tick(Some(Direction::Right));
        assert_eq!(state.score, 1);
        assert_eq!(state.snake.len(), 2);
        assert_ne!(state.food.cell(), Cell { column: 3, row: 5 });
        assert!(!state.snake.occupies(state.food.cell()));

        // Growth lands on the tick after the food was eaten.
        state.tick(Some(Direction::Right));
        assert_eq!(state.snake.len(), 3);
    }

    #[test]
    fn wall_collision_ends_the_run() {
        let mut state = GameState::with_seed(grid(), 5);
        state.snake = Snake::from_cells(
            vec![Cell { column: 1, row: 2 }, Cell { column: 0, row: 2 }],
            Direction::Left,
            &grid(),
        );

        state.tick(Some(Direction::Left));

        assert_eq!(state.status, GameStatus::GameOver);
        assert!(state.snake.collided());
        assert_eq!(state.snake.head(), Cell { column: 0, row: 2 });
    }

    #[test]
    fn game_over_is_terminal() {
        let mut state = GameState::with_seed(grid(), 5);
        state.snake = Snake::from_cells(
            vec![Cell { column: 1, row: 2 }, Cell { column: 0, row: 2 }],
            Direction::Left,
            &grid(),
        );

        state.tick(Some(Direction::Left));
        let score = state.score;

        state.tick(Some(Direction::Down));
        assert_eq!(state.status, GameStatus::GameOver);
        assert_eq!(state.score, score);
        assert_eq!(state.snake.head(), Cell { column: 0, row: 2 });
    }

    #[test]
    fn status_names_match_their_display_form() {
        assert_eq!(GameStatus::Start.to_string(), "start");
        assert_eq!(GameStatus::Playing.to_string(), "playing");
        assert_eq!(GameStatus::GameOver.to_string(), "game over");
    }
}
