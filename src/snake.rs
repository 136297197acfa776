use std::collections::VecDeque;

use log::info;

use crate::config::{INITIAL_SNAKE_LENGTH, INITIAL_SNAKE_ROW};
use crate::grid::{contains, Cell, Grid};
use crate::input::Direction;

/// The player-controlled body on the grid.
///
/// The body is an ordered cell sequence, oldest tail cell first and head
/// last, with no duplicate cells while alive. It mutates only through
/// [`Snake::advance`], once per tick.
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Cell>,
    heading: Direction,
    pending_growth: bool,
    collided: bool,
    columns: u16,
    rows: u16,
}

impl Snake {
    /// Creates the starting snake for `grid`: a vertical body of
    /// [`INITIAL_SNAKE_LENGTH`] cells at the horizontal-center column,
    /// topmost segment on [`INITIAL_SNAKE_ROW`], head at the bottom end,
    /// heading down.
    #[must_use]
    pub fn new(grid: &Grid) -> Self {
        debug_assert!(
            grid.rows() > INITIAL_SNAKE_ROW + INITIAL_SNAKE_LENGTH,
            "grid too short for the starting snake",
        );

        let column = i32::from(grid.columns() / 2);
        let body = (0..INITIAL_SNAKE_LENGTH)
            .map(|offset| Cell {
                column,
                row: i32::from(INITIAL_SNAKE_ROW + offset),
            })
            .collect();

        Self {
            body,
            heading: Direction::Down,
            pending_growth: false,
            collided: false,
            columns: grid.columns(),
            rows: grid.rows(),
        }
    }

    /// Creates a snake from explicit cells (tail first, head last), bounded
    /// by `grid`.
    #[must_use]
    pub fn from_cells(cells: Vec<Cell>, heading: Direction, grid: &Grid) -> Self {
        Self {
            body: VecDeque::from(cells),
            heading,
            pending_growth: false,
            collided: false,
            columns: grid.columns(),
            rows: grid.rows(),
        }
    }

    /// Applies one movement tick.
    ///
    /// With no requested direction the snake holds still; movement begins
    /// with the first direction input and the caller re-supplies the last
    /// request every tick after that. A request that directly reverses the
    /// current heading snaps back to the heading instead of folding the
    /// body onto itself.
    ///
    /// On collision the proposed body is not committed, so the pre-move
    /// position remains for rendering the final frame.
    pub fn advance(&mut self, requested: Option<Direction>) {
        let Some(requested) = requested else {
            return;
        };

        if requested != self.heading.opposite() {
            self.heading = requested;
        }

        let new_head = self.head().step(self.heading);

        let mut proposed = self.body.clone();
        proposed.push_back(new_head);
        if self.pending_growth {
            self.pending_growth = false;
        } else {
            let _ = proposed.pop_front();
        }

        if self.detect_collision(new_head) {
            self.collided = true;
            return;
        }
        self.body = proposed;
    }

    /// Collision rule for a proposed head: off the board, or on any cell of
    /// the current body except the oldest tail cell, which vacates this
    /// tick and is legal to enter.
    fn detect_collision(&self, new_head: Cell) -> bool {
        if self.out_of_bounds(new_head) {
            info!(
                "snake hit the wall at ({}, {})",
                new_head.column, new_head.row
            );
            return true;
        }

        if contains(new_head, self.body.iter().skip(1)) {
            info!("snake collided with itself");
            return true;
        }
        false
    }

    fn out_of_bounds(&self, cell: Cell) -> bool {
        cell.column < 0
            || cell.row < 0
            || cell.column >= i32::from(self.columns)
            || cell.row >= i32::from(self.rows)
    }

    /// Queues growth for the next movement tick. Idempotent.
    pub fn request_growth(&mut self) {
        self.pending_growth = true;
    }

    /// Returns the current head cell.
    #[must_use]
    pub fn head(&self) -> Cell {
        *self
            .body
            .back()
            .expect("snake body must always contain at least one cell")
    }

    /// Returns true if any body cell occupies `cell`.
    #[must_use]
    pub fn occupies(&self, cell: Cell) -> bool {
        contains(cell, &self.body)
    }

    /// Returns current body length.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true when there are no body cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Returns the current heading.
    #[must_use]
    pub fn heading(&self) -> Direction {
        self.heading
    }

    /// Returns true once the snake has hit a wall or itself.
    #[must_use]
    pub fn collided(&self) -> bool {
        self.collided
    }

    /// Iterates over body cells from tail to head.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.body.iter()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use crate::grid::{Cell, Grid};
    use crate::input::Direction;

    use super::Snake;

    fn grid(columns: u16, rows: u16) -> Grid {
        Grid::new(columns, rows, 1).expect("test grid should build")
    }

    #[test]
    fn starting_snake_is_centered_with_head_at_the_bottom_end() {
        let snake = Snake::new(&grid(10, 10));

        assert_eq!(snake.len(), 6);
        assert_eq!(snake.heading(), Direction::Down);
        assert_eq!(snake.head(), Cell { column: 5, row: 6 });
        assert!(snake.occupies(Cell { column: 5, row: 1 }));
        assert!(!snake.occupies(Cell { column: 5, row: 7 }));
    }

    #[test]
    fn snake_holds_still_without_a_direction_request() {
        let mut snake = Snake::new(&grid(10, 10));
        let head = snake.head();

        snake.advance(None);

        assert_eq!(snake.head(), head);
        assert_eq!(snake.len(), 6);
        assert!(!snake.collided());
    }

    #[test]
    fn snake_moves_one_cell_per_tick() {
        let mut snake = Snake::new(&grid(10, 10));

        snake.advance(Some(Direction::Down));

        assert_eq!(snake.head(), Cell { column: 5, row: 7 });
        assert_eq!(snake.len(), 6);
        assert!(!snake.occupies(Cell { column: 5, row: 1 }));
    }

    #[test]
    fn reversal_request_snaps_back_to_the_current_heading() {
        let mut snake = Snake::new(&grid(10, 10));

        snake.advance(Some(Direction::Up));

        // Heading stays down and the head still advances along it.
        assert_eq!(snake.heading(), Direction::Down);
        assert_eq!(snake.head(), Cell { column: 5, row: 7 });
    }

    #[test]
    fn growth_keeps_the_tail_for_one_tick() {
        let mut snake = Snake::new(&grid(10, 12));

        snake.request_growth();
        snake.request_growth(); // idempotent
        snake.advance(Some(Direction::Down));
        assert_eq!(snake.len(), 7);
        assert!(snake.occupies(Cell { column: 5, row: 1 }));

        // The flag was consumed; the next tick moves the tail again.
        snake.advance(Some(Direction::Down));
        assert_eq!(snake.len(), 7);
        assert!(!snake.occupies(Cell { column: 5, row: 1 }));
    }

    #[test]
    fn wall_collision_leaves_the_body_uncommitted() {
        let board = grid(10, 10);
        let mut snake = Snake::from_cells(
            vec![Cell { column: 1, row: 2 }, Cell { column: 0, row: 2 }],
            Direction::Left,
            &board,
        );

        snake.advance(Some(Direction::Left));

        assert!(snake.collided());
        assert_eq!(snake.head(), Cell { column: 0, row: 2 });
        assert_eq!(snake.len(), 2);
    }

    #[test]
    fn self_collision_is_detected() {
        let board = grid(10, 10);
        // Hook shape: turning left runs the head into a mid-body cell.
        let mut snake = Snake::from_cells(
            vec![
                Cell { column: 2, row: 4 },
                Cell { column: 2, row: 3 },
                Cell { column: 2, row: 2 },
                Cell { column: 3, row: 2 },
                Cell { column: 3, row: 3 },
            ],
            Direction::Down,
            &board,
        );

        snake.advance(Some(Direction::Left));

        assert!(snake.collided());
        assert_eq!(snake.head(), Cell { column: 3, row: 3 });
        assert_eq!(snake.len(), 5);
    }

    #[test]
    fn moving_into_the_vacating_tail_cell_is_legal() {
        let board = grid(10, 10);
        // A 2x2 loop: the head steps into the cell the tail leaves this tick.
        let mut snake = Snake::from_cells(
            vec![
                Cell { column: 1, row: 1 },
                Cell { column: 2, row: 1 },
                Cell { column: 2, row: 2 },
                Cell { column: 1, row: 2 },
            ],
            Direction::Left,
            &board,
        );

        snake.advance(Some(Direction::Up));

        assert!(!snake.collided());
        assert_eq!(snake.head(), Cell { column: 1, row: 1 });
        assert_eq!(snake.len(), 4);
    }

    #[test]
    fn body_cells_stay_unique_while_alive() {
        let mut snake = Snake::new(&grid(12, 12));
        let moves = [
            Direction::Down,
            Direction::Down,
            Direction::Right,
            Direction::Right,
            Direction::Up,
            Direction::Right,
        ];

        for direction in moves {
            snake.request_growth();
            snake.advance(Some(direction));
            assert!(!snake.collided());

            let unique: HashSet<_> = snake.cells().copied().collect();
            assert_eq!(unique.len(), snake.len());
        }
        assert_eq!(snake.len(), 12);
    }
}
