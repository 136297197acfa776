use thiserror::Error;

use crate::input::Direction;

/// Grid position in logical cell coordinates.
///
/// Components are signed so that a proposed head one step past the board
/// edge is representable; whether a cell is actually on the board is a
/// [`Grid`] question.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Cell {
    pub column: i32,
    pub row: i32,
}

impl Cell {
    /// Returns the neighboring cell one step in `direction`.
    #[must_use]
    pub fn step(self, direction: Direction) -> Self {
        match direction {
            Direction::Up => Self {
                column: self.column,
                row: self.row - 1,
            },
            Direction::Down => Self {
                column: self.column,
                row: self.row + 1,
            },
            Direction::Left => Self {
                column: self.column - 1,
                row: self.row,
            },
            Direction::Right => Self {
                column: self.column + 1,
                row: self.row,
            },
        }
    }
}

/// Returns true iff `target` equals some element of `cells` by value.
pub fn contains<'a, I>(target: Cell, cells: I) -> bool
where
    I: IntoIterator<Item = &'a Cell>,
{
    cells.into_iter().any(|cell| *cell == target)
}

/// Grid construction failures, surfaced before a run starts.
#[derive(Debug, Error, Eq, PartialEq)]
pub enum GridError {
    #[error("cell size must be positive")]
    ZeroCellSize,
    #[error("surface {width}x{height} px yields an empty grid at cell size {cell_size}")]
    DegenerateSurface {
        width: u16,
        height: u16,
        cell_size: u16,
    },
    #[error("grid {columns}x{rows} is below the playable minimum")]
    SurfaceTooSmall { columns: u16, rows: u16 },
}

/// Partition of a pixel surface into fixed-size cells.
///
/// Immutable after creation. The cell↔pixel mapping is computed rather than
/// tabulated; both directions are O(1).
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Grid {
    columns: u16,
    rows: u16,
    cell_size: u16,
}

impl Grid {
    /// Partitions a `surface_width` × `surface_height` pixel surface into
    /// `cell_size`-sized cells, discarding any remainder at the far edges.
    pub fn new(surface_width: u16, surface_height: u16, cell_size: u16) -> Result<Self, GridError> {
        if cell_size == 0 {
            return Err(GridError::ZeroCellSize);
        }

        let columns = surface_width / cell_size;
        let rows = surface_height / cell_size;
        if columns == 0 || rows == 0 {
            return Err(GridError::DegenerateSurface {
                width: surface_width,
                height: surface_height,
                cell_size,
            });
        }

        Ok(Self {
            columns,
            rows,
            cell_size,
        })
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn columns(&self) -> u16 {
        self.columns
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn rows(&self) -> u16 {
        self.rows
    }

    /// Returns true when `cell` lies on the board.
    #[must_use]
    pub fn contains_cell(&self, cell: Cell) -> bool {
        cell.column >= 0
            && cell.row >= 0
            && cell.column < i32::from(self.columns)
            && cell.row < i32::from(self.rows)
    }

    /// Returns the pixel origin of `cell`.
    ///
    /// # Panics
    ///
    /// Panics when `cell` is outside the grid; callers must only map cells
    /// they know to be on the board.
    #[must_use]
    pub fn cell_to_pixel(&self, cell: Cell) -> (u32, u32) {
        assert!(
            self.contains_cell(cell),
            "cell ({}, {}) outside {}x{} grid",
            cell.column,
            cell.row,
            self.columns,
            self.rows,
        );

        let size = u32::from(self.cell_size);
        (cell.column as u32 * size, cell.row as u32 * size)
    }

    /// Returns the cell whose area covers the pixel at (`x`, `y`).
    #[must_use]
    pub fn pixel_to_cell(&self, x: u32, y: u32) -> Cell {
        let size = u32::from(self.cell_size);
        Cell {
            column: (x / size) as i32,
            row: (y / size) as i32,
        }
    }

    /// Iterates over every cell of the grid, row by row.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..i32::from(self.rows)).flat_map(move |row| {
            (0..i32::from(self.columns)).map(move |column| Cell { column, row })
        })
    }
}
