//! Slide animation between two consecutive positions.
//!
//! A [`Transition`] is derived from the grid as it was before a move and the
//! move's direction. It only describes where each tile travels; it never
//! touches the game, so a front-end can drop it at any frame.

use crate::grid::Grid;
use crate::{Direction, BOARD_SIZE};

/// Where one pre-move tile travels during a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileMotion {
    pub value: u32,
    pub from: (usize, usize),
    pub to: (usize, usize),
    /// The tile ends up combined with another one at `to`.
    pub merged: bool,
}

/// A tile drawn at a fractional cell position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sprite {
    pub value: u32,
    pub row: f32,
    pub col: f32,
}

/// Read-only description of one animated move.
#[derive(Debug, Clone)]
pub struct Transition {
    motions: Vec<TileMotion>,
    frames: u32,
}

impl Transition {
    /// Plan the motions of every tile of `before` when moved towards
    /// `direction`, played over `frames` frames.
    ///
    /// The spawned tile is not part of the transition; it appears with the
    /// final position.
    pub fn new(before: &Grid, direction: Direction, frames: u32) -> Self {
        let mut motions = Vec::with_capacity(BOARD_SIZE * BOARD_SIZE);

        for index in 0..BOARD_SIZE {
            let cells = direction.line(index);
            let tiles: Vec<(u32, usize)> = cells
                .iter()
                .enumerate()
                .filter_map(|(k, &(row, col))| {
                    let value = before[row][col];
                    (value != 0).then_some((value, k))
                })
                .collect();

            let mut dest = 0;
            let mut i = 0;
            while i < tiles.len() {
                let (value, origin) = tiles[i];
                let pair = tiles.get(i + 1).filter(|&&(next, _)| next == value);
                motions.push(TileMotion {
                    value,
                    from: cells[origin],
                    to: cells[dest],
                    merged: pair.is_some(),
                });
                if let Some(&(_, partner)) = pair {
                    motions.push(TileMotion {
                        value,
                        from: cells[partner],
                        to: cells[dest],
                        merged: true,
                    });
                    i += 2;
                } else {
                    i += 1;
                }
                dest += 1;
            }
        }

        Transition { motions, frames }
    }

    pub fn motions(&self) -> &[TileMotion] {
        &self.motions
    }

    pub fn frames(&self) -> u32 {
        self.frames
    }

    /// Fraction of the slide completed at `frame`, in `0.0..=1.0`.
    pub fn progress(&self, frame: u32) -> f32 {
        if self.frames == 0 {
            return 1.0;
        }
        (frame as f32 / self.frames as f32).min(1.0)
    }

    pub fn is_finished(&self, frame: u32) -> bool {
        frame >= self.frames
    }

    /// Tile positions at `frame`, interpolated linearly from start to end.
    pub fn sprites(&self, frame: u32) -> Vec<Sprite> {
        let t = self.progress(frame);
        let lerp = |a: usize, b: usize| a as f32 + (b as f32 - a as f32) * t;
        self.motions
            .iter()
            .map(|m| Sprite {
                value: m.value,
                row: lerp(m.from.0, m.to.0),
                col: lerp(m.from.1, m.to.1),
            })
            .collect()
    }
}
