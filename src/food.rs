use log::debug;
use rand::Rng;

use crate::grid::{Cell, Grid};
use crate::snake::Snake;

/// Random draws attempted before falling back to a full-board scan.
const MAX_SAMPLE_ATTEMPTS: u32 = 128;

/// The single food item active on the board.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Food {
    cell: Cell,
}

impl Food {
    /// Creates a food at `cell` without any occupancy check.
    #[must_use]
    pub fn at(cell: Cell) -> Self {
        Self { cell }
    }

    /// Returns the occupied cell.
    #[must_use]
    pub fn cell(self) -> Cell {
        self.cell
    }

    /// Places a food uniformly at random on a cell the snake does not
    /// occupy.
    ///
    /// Rejection sampling with a fixed attempt cap; when the board is dense
    /// enough to exhaust the cap, the free cells are enumerated instead so
    /// placement always terminates.
    ///
    /// # Panics
    ///
    /// Panics when every cell is occupied. Under normal play the board is
    /// large relative to the body, so this indicates a broken caller.
    #[must_use]
    pub fn place<R: Rng + ?Sized>(rng: &mut R, grid: &Grid, snake: &Snake) -> Self {
        for _ in 0..MAX_SAMPLE_ATTEMPTS {
            let cell = Cell {
                column: rng.gen_range(0..i32::from(grid.columns())),
                row: rng.gen_range(0..i32::from(grid.rows())),
            };
            if !snake.occupies(cell) {
                return Self { cell };
            }
        }

        debug!("food sampling exhausted {MAX_SAMPLE_ATTEMPTS} attempts, scanning for free cells");
        let candidates: Vec<Cell> = grid.cells().filter(|cell| !snake.occupies(*cell)).collect();
        assert!(
            !candidates.is_empty(),
            "food placement: no free cells on a {}x{} grid",
            grid.columns(),
            grid.rows(),
        );

        Self {
            cell: candidates[rng.gen_range(0..candidates.len())],
        }
    }
}
