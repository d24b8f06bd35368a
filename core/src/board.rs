//! The board engine: grid, score, moves and tile spawning.

use log::debug;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::grid::{empty_cells, has_winning_tile, is_game_over, Grid, EMPTY_GRID};
use crate::history::Snapshot;
use crate::{Direction, BOARD_SIZE};

/// The board engine.
///
/// Owns the 4x4 grid and the cumulative score. Moves mutate both in place;
/// the game-over and win flags are evaluated on demand by the caller through
/// [`Board::check_game_over`] and [`Board::check_win`].
#[derive(Clone)]
pub struct Board {
    grid: Grid,
    score: u32,
    rng: SmallRng,
}

impl Board {
    /// Create a board with the given seed and two starting tiles.
    pub fn new(seed: u64) -> Self {
        let mut board = Self::with_grid(EMPTY_GRID, 0, seed);
        board.reset();
        board
    }

    /// Create a board over an explicit grid and score. No tiles are spawned.
    pub fn with_grid(grid: Grid, score: u32, seed: u64) -> Self {
        Board {
            grid,
            score,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Clear the grid and score, then spawn two tiles.
    ///
    /// The random stream is not reseeded, so consecutive resets produce
    /// different openings.
    pub fn reset(&mut self) {
        self.grid = EMPTY_GRID;
        self.score = 0;
        self.spawn_tile();
        self.spawn_tile();
    }

    /// Move every tile left. Returns whether the board changed.
    pub fn move_left(&mut self) -> bool {
        self.shift(Direction::Left)
    }

    /// Move every tile right. Returns whether the board changed.
    pub fn move_right(&mut self) -> bool {
        self.shift(Direction::Right)
    }

    /// Move every tile up. Returns whether the board changed.
    pub fn move_up(&mut self) -> bool {
        self.shift(Direction::Up)
    }

    /// Move every tile down. Returns whether the board changed.
    pub fn move_down(&mut self) -> bool {
        self.shift(Direction::Down)
    }

    /// Slide and merge every line towards `direction`.
    ///
    /// Returns whether any tile changed place or value. Merged values are
    /// added to the score. No tile is spawned.
    pub fn shift(&mut self, direction: Direction) -> bool {
        let (moved, reward) = Self::apply_move_to_grid(&mut self.grid, direction);
        self.score += reward;
        moved
    }

    /// Spawn a tile in a uniformly chosen empty cell.
    /// 90% chance of 2, 10% chance of 4.
    ///
    /// Returns the cell that received the tile, or `None` when the board is
    /// full (in which case nothing happens).
    pub fn spawn_tile(&mut self) -> Option<(usize, usize)> {
        let empty = empty_cells(&self.grid);
        if empty.is_empty() {
            return None;
        }

        let (row, col) = empty[self.rng.gen_range(0..empty.len())];
        let value = if self.rng.gen::<f32>() < 0.9 { 2 } else { 4 };
        self.grid[row][col] = value;
        debug!("spawned {value} at ({row}, {col})");
        Some((row, col))
    }

    /// True iff no empty cell remains and no adjacent pair is equal.
    pub fn check_game_over(&self) -> bool {
        is_game_over(&self.grid)
    }

    /// True iff any cell holds 2048 or more.
    pub fn check_win(&self) -> bool {
        has_winning_tile(&self.grid)
    }

    /// Replace grid and score with the contents of `snapshot`.
    pub fn restore(&mut self, snapshot: &Snapshot) {
        self.grid = snapshot.grid;
        self.score = snapshot.score;
    }

    /// Get a reference to the grid, row-major.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Get the current score.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Get the maximum tile value on the board.
    pub fn max_tile(&self) -> u32 {
        self.grid.iter().flatten().copied().max().unwrap_or(0)
    }

    /// Get the number of empty cells on the board.
    pub fn empty_count(&self) -> usize {
        self.grid.iter().flatten().filter(|&&v| v == 0).count()
    }

    // -------------------------------------------------------------------------
    // Private methods
    // -------------------------------------------------------------------------

    /// Apply a move to a grid, returning whether it changed and the reward.
    fn apply_move_to_grid(grid: &mut Grid, direction: Direction) -> (bool, u32) {
        let mut moved = false;
        let mut total_reward = 0;

        for index in 0..BOARD_SIZE {
            let cells = direction.line(index);
            let mut line = cells.map(|(row, col)| grid[row][col]);
            let before = line;
            total_reward += Self::compress_and_merge(&mut line);
            moved |= line != before;
            for (&(row, col), &value) in cells.iter().zip(line.iter()) {
                grid[row][col] = value;
            }
        }

        (moved, total_reward)
    }

    /// Compress and merge a line of 4 tiles (moving towards index 0).
    /// Returns the points earned from merges.
    ///
    /// 1. Compress: move all non-zero values to the front
    /// 2. Merge: combine adjacent equal values, each tile at most once
    /// 3. Compress again
    fn compress_and_merge(line: &mut [u32; BOARD_SIZE]) -> u32 {
        Self::compress(line);

        let mut reward = 0;
        for i in 0..BOARD_SIZE - 1 {
            if line[i] != 0 && line[i] == line[i + 1] {
                line[i] *= 2;
                reward += line[i];
                line[i + 1] = 0;
            }
        }

        Self::compress(line);

        reward
    }

    /// Compress a line by moving all non-zero values to the front.
    fn compress(line: &mut [u32; BOARD_SIZE]) {
        let mut write_idx = 0;
        for read_idx in 0..BOARD_SIZE {
            if line[read_idx] != 0 {
                if write_idx != read_idx {
                    line[write_idx] = line[read_idx];
                    line[read_idx] = 0;
                }
                write_idx += 1;
            }
        }
    }
}

impl std::fmt::Debug for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Board {{ score: {} }}", self.score)?;
        for row in &self.grid {
            for &val in row {
                if val == 0 {
                    write!(f, "    .")?;
                } else {
                    write!(f, "{:5}", val)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Score: {}", self.score)?;
        writeln!(f, "+------+------+------+------+")?;
        for row in &self.grid {
            write!(f, "|")?;
            for &val in row {
                if val == 0 {
                    write!(f, "      |")?;
                } else {
                    write!(f, "{:^6}|", val)?;
                }
            }
            writeln!(f)?;
            writeln!(f, "+------+------+------+------+")?;
        }
        Ok(())
    }
}

// =============================================================================
// Tests
// =============================================================================
