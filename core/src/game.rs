//! The game orchestrator: one board plus its undo history.

use log::debug;

use crate::board::Board;
use crate::grid::Grid;
use crate::history::History;
use crate::Direction;

/// Result of a move command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Whether the board changed (and a new tile was spawned).
    pub moved: bool,
    /// Points earned from merges in this move.
    pub gained: u32,
}

/// A running game.
///
/// The newest history snapshot always mirrors the position on the board, so
/// undo drops it and restores the one beneath.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    history: History,
    over: bool,
    won: bool,
}

impl Game {
    /// Start a new game with the given seed.
    pub fn new(seed: u64) -> Self {
        Self::from_board(Board::new(seed))
    }

    /// Start a game from an existing board position.
    pub fn from_board(board: Board) -> Self {
        let mut game = Game {
            board,
            history: History::new(),
            over: false,
            won: false,
        };
        game.record_start();
        game
    }

    /// Throw away the current game and deal a fresh board.
    pub fn reset(&mut self) {
        self.board.reset();
        self.record_start();
        debug!("game reset");
    }

    /// Move every tile towards `direction`.
    ///
    /// When the board changes and the game is still running, a tile is
    /// spawned, the new position is recorded and the win/game-over flags are
    /// re-evaluated. A finished game ignores moves.
    pub fn shift(&mut self, direction: Direction) -> MoveOutcome {
        let score_before = self.board.score();
        let moved = self.board.shift(direction);
        let gained = self.board.score() - score_before;

        if moved && !self.over {
            self.board.spawn_tile();
            self.history.append(self.board.grid(), self.board.score());
            self.won = self.board.check_win();
            self.over = self.board.check_game_over();
            debug!(
                "{:?}: +{gained}, score {}, over={}",
                direction,
                self.board.score(),
                self.over
            );
        }

        MoveOutcome { moved, gained }
    }

    /// Step back one move. Returns `false` when there is nothing to undo.
    ///
    /// The newest snapshot (the position on the board) is dropped and the
    /// one beneath it is restored and kept as the new newest. The history
    /// therefore shrinks by exactly one snapshot per undo, including when it
    /// was full, and at most `HISTORY_CAPACITY - 1` moves can be undone.
    pub fn undo(&mut self) -> bool {
        if self.history.len() < 2 {
            return false;
        }
        self.history.pop_newest();
        let Some(snapshot) = self.history.peek_newest() else {
            return false;
        };
        self.board.restore(snapshot);
        self.over = false;
        self.won = self.board.check_win();
        debug!(
            "undo to score {}, {} step(s) left",
            self.board.score(),
            self.undo_available()
        );
        true
    }

    /// Get a reference to the current grid.
    pub fn grid(&self) -> &Grid {
        self.board.grid()
    }

    /// Get the current score.
    pub fn score(&self) -> u32 {
        self.board.score()
    }

    /// Check if the game is over (no move can change the board).
    pub fn is_over(&self) -> bool {
        self.over
    }

    /// Check if a 2048 tile is on the board.
    pub fn has_won(&self) -> bool {
        self.won
    }

    /// Number of moves that can currently be undone.
    pub fn undo_available(&self) -> usize {
        self.history.len().saturating_sub(1)
    }

    /// Get the underlying board engine.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get the undo history, oldest snapshot first.
    pub fn history(&self) -> &History {
        &self.history
    }

    fn record_start(&mut self) {
        self.history.clear();
        self.history.append(self.board.grid(), self.board.score());
        self.won = self.board.check_win();
        self.over = self.board.check_game_over();
    }
}

impl std::fmt::Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.board)
    }
}

// =============================================================================
// Tests
// =============================================================================
