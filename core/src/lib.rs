//! # 2048 Game-State Engine with Undo
//!
//! A pure Rust implementation of the 2048 game logic on a fixed 4x4 board,
//! with a seedable PRNG for reproducible tile spawns and a bounded history
//! of past positions for one-step-at-a-time undo.
//!
//! The crate is split into:
//! - [`Board`]: the grid, the score and the four move/merge operations
//! - [`History`]: a fixed-capacity buffer of [`Snapshot`]s
//! - [`Game`]: the orchestrator a front-end drives with commands
//! - [`Transition`]: a read-only view used to animate a move
//!
//! ## Example
//!
//! ```rust
//! use rewind_2048_core::{Direction, Game};
//!
//! let mut game = Game::new(42);
//! let outcome = game.shift(Direction::Left);
//! println!("Score: {}, Moved: {}", game.score(), outcome.moved);
//! if game.undo() {
//!     println!("Back to score {}", game.score());
//! }
//! ```

mod board;
mod game;
mod grid;
mod history;
mod transition;

pub use board::Board;
pub use game::{Game, MoveOutcome};
pub use grid::{
    empty_cells, has_winning_tile, is_game_over, parse_grid, Grid, GridError, EMPTY_GRID,
};
pub use history::{History, Snapshot};
pub use transition::{Sprite, TileMotion, Transition};

/// Side length of the board.
pub const BOARD_SIZE: usize = 4;

/// Smallest tile value that counts as a win.
pub const WIN_TILE: u32 = 2048;

/// Largest tile reachable in play on a 4x4 board, and the largest value
/// accepted by [`parse_grid`]. Any board built from such tiles merges
/// without overflowing a `u32`.
pub const MAX_TILE: u32 = 1 << 17;

/// Maximum number of snapshots kept for undo.
pub const HISTORY_CAPACITY: usize = 6;

/// Length of a slide animation, in frames (0.1 s at 60 fps).
pub const DEFAULT_TRANSITION_FRAMES: u32 = 6;

/// The four possible move directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Direction {
    Up = 0,
    Down = 1,
    Left = 2,
    Right = 3,
}

impl Direction {
    /// Get all four directions.
    pub fn all() -> [Direction; 4] {
        [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ]
    }

    /// Cell coordinates of line `index`, ordered from the edge tiles slide
    /// towards to the opposite edge.
    ///
    /// Rows are lines for horizontal moves, columns for vertical ones.
    pub(crate) fn line(self, index: usize) -> [(usize, usize); BOARD_SIZE] {
        let mut cells = [(0, 0); BOARD_SIZE];
        for (k, cell) in cells.iter_mut().enumerate() {
            let far = BOARD_SIZE - 1 - k;
            *cell = match self {
                Direction::Left => (index, k),
                Direction::Right => (index, far),
                Direction::Up => (k, index),
                Direction::Down => (far, index),
            };
        }
        cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_all() {
        let all = Direction::all();
        assert_eq!(all.len(), 4);
        assert_eq!(all[0], Direction::Up);
        assert_eq!(all[1], Direction::Down);
        assert_eq!(all[2], Direction::Left);
        assert_eq!(all[3], Direction::Right);
    }

    #[test]
    fn test_line_starts_at_near_edge() {
        assert_eq!(Direction::Left.line(1), [(1, 0), (1, 1), (1, 2), (1, 3)]);
        assert_eq!(Direction::Right.line(1), [(1, 3), (1, 2), (1, 1), (1, 0)]);
        assert_eq!(Direction::Up.line(2), [(0, 2), (1, 2), (2, 2), (3, 2)]);
        assert_eq!(Direction::Down.line(2), [(3, 2), (2, 2), (1, 2), (0, 2)]);
    }

    #[test]
    fn test_lines_cover_board_once() {
        for dir in Direction::all() {
            let mut seen = [[false; BOARD_SIZE]; BOARD_SIZE];
            for index in 0..BOARD_SIZE {
                for (row, col) in dir.line(index) {
                    assert!(!seen[row][col], "{:?} visits ({row}, {col}) twice", dir);
                    seen[row][col] = true;
                }
            }
            assert!(seen.iter().flatten().all(|&v| v));
        }
    }
}
