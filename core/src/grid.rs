//! The 4x4 grid of tile values and the predicates evaluated on it.

use crate::{BOARD_SIZE, MAX_TILE, WIN_TILE};

/// Tile values in row-major order. Empty cells are 0, tiles hold their
/// value (2, 4, 8, ...).
pub type Grid = [[u32; BOARD_SIZE]; BOARD_SIZE];

/// A grid with no tiles.
pub const EMPTY_GRID: Grid = [[0; BOARD_SIZE]; BOARD_SIZE];

/// Errors produced while parsing a grid from text.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("expected 4 rows, found {0}")]
    RowCount(usize),
    #[error("row {row}: expected 4 cells, found {found}")]
    ColumnCount { row: usize, found: usize },
    #[error("cell ({row}, {col}): '{text}' is not a number")]
    InvalidNumber { row: usize, col: usize, text: String },
    #[error("cell ({row}, {col}): {value} is not a tile value")]
    NotATile { row: usize, col: usize, value: u32 },
    #[error("cell ({row}, {col}): {value} is above the largest tile 131072")]
    TileTooLarge { row: usize, col: usize, value: u32 },
}

/// Coordinates of every empty cell, in row-major order.
pub fn empty_cells(grid: &Grid) -> Vec<(usize, usize)> {
    let mut cells = Vec::with_capacity(BOARD_SIZE * BOARD_SIZE);
    for (row, line) in grid.iter().enumerate() {
        for (col, &value) in line.iter().enumerate() {
            if value == 0 {
                cells.push((row, col));
            }
        }
    }
    cells
}

/// True iff no cell is empty and no two adjacent cells hold equal values.
pub fn is_game_over(grid: &Grid) -> bool {
    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            let value = grid[row][col];
            if value == 0 {
                return false;
            }
            if col + 1 < BOARD_SIZE && grid[row][col + 1] == value {
                return false;
            }
            if row + 1 < BOARD_SIZE && grid[row + 1][col] == value {
                return false;
            }
        }
    }
    true
}

/// True iff any cell has reached [`WIN_TILE`].
pub fn has_winning_tile(grid: &Grid) -> bool {
    grid.iter().flatten().any(|&v| v >= WIN_TILE)
}

/// Parse a grid written as four `/`-separated rows of comma-separated cells,
/// e.g. `0,2,0,0/0,0,0,2/0,0,0,0/0,0,0,0`.
pub fn parse_grid(text: &str) -> Result<Grid, GridError> {
    let rows: Vec<&str> = text.trim().split('/').collect();
    if rows.len() != BOARD_SIZE {
        return Err(GridError::RowCount(rows.len()));
    }

    let mut grid = EMPTY_GRID;
    for (row, line) in rows.iter().enumerate() {
        let cells: Vec<&str> = line.split(',').map(str::trim).collect();
        if cells.len() != BOARD_SIZE {
            return Err(GridError::ColumnCount {
                row,
                found: cells.len(),
            });
        }
        for (col, text) in cells.iter().enumerate() {
            let value: u32 = text.parse().map_err(|_| GridError::InvalidNumber {
                row,
                col,
                text: text.to_string(),
            })?;
            if value == 1 || (value != 0 && !value.is_power_of_two()) {
                return Err(GridError::NotATile { row, col, value });
            }
            if value > MAX_TILE {
                return Err(GridError::TileTooLarge { row, col, value });
            }
            grid[row][col] = value;
        }
    }
    Ok(grid)
}
