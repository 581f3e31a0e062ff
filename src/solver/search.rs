//! Exhaustive minimax search with optional alpha-beta cutoffs
//!
//! Scores are expressed from O's point of view (see [`Player::is_maximizer`]):
//! O maximizes, X minimizes. Only terminal evaluation produces a number; every
//! other score is a propagated maximum or minimum of child scores.

use std::ops::{Deref, DerefMut};

use serde::{Deserialize, Serialize};

use crate::tictactoe::{Board, Cell, Player};

/// Game-theoretic value of a position: -1 (X wins), 0 (draw), +1 (O wins)
pub type Score = i8;

/// Initial lower bound, below every reachable score
pub const LOWER_SENTINEL: Score = -2;

/// Initial upper bound, above every reachable score
pub const UPPER_SENTINEL: Score = 2;

/// Counters collected while searching
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Positions visited, leaves included
    pub nodes: u64,
    /// Times sibling enumeration stopped early
    pub cutoffs: u64,
}

/// A provisional mark on a borrowed board.
///
/// The mark is removed when the probe is dropped, so the board is restored
/// on every exit path from the probing scope.
pub(crate) struct Probe<'a> {
    board: &'a mut Board,
    position: usize,
}

impl<'a> Probe<'a> {
    pub(crate) fn place(board: &'a mut Board, position: usize, player: Player) -> Self {
        debug_assert!(
            board.is_empty(position),
            "search probed occupied cell {position} on {}",
            board.encode()
        );
        board.set_unchecked(position, player.to_cell());
        Probe { board, position }
    }
}

impl Deref for Probe<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for Probe<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for Probe<'_> {
    fn drop(&mut self) {
        self.board.set_unchecked(self.position, Cell::Empty);
    }
}

/// Reusable search state: the pruning switch and accumulated statistics
#[derive(Debug, Clone)]
pub struct Search {
    pruning: bool,
    stats: SearchStats,
}

impl Search {
    pub fn new(pruning: bool) -> Self {
        Self {
            pruning,
            stats: SearchStats::default(),
        }
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Value of `board` with `depth` plies left to explore.
    ///
    /// `maximizing` is true when O is to move. `lower` is the score O can
    /// already guarantee, `upper` the score X can already guarantee. The board
    /// is returned to its original contents before this returns.
    pub fn run(
        &mut self,
        board: &mut Board,
        depth: usize,
        mut lower: Score,
        mut upper: Score,
        maximizing: bool,
    ) -> Score {
        self.stats.nodes += 1;

        let score = board.evaluate();
        if depth == 0 || score != 0 || board.is_draw() {
            return score;
        }

        let mover = if maximizing { Player::O } else { Player::X };
        let mut best = if maximizing {
            LOWER_SENTINEL
        } else {
            UPPER_SENTINEL
        };

        for position in board.available_moves() {
            let value = {
                let mut probe = Probe::place(board, position, mover);
                self.run(&mut probe, depth - 1, lower, upper, !maximizing)
            };

            if maximizing {
                best = best.max(value);
                lower = lower.max(value);
            } else {
                best = best.min(value);
                upper = upper.min(value);
            }

            if self.pruning && upper <= lower {
                self.stats.cutoffs += 1;
                break;
            }
        }

        best
    }
}

/// Alpha-beta value of a position.
///
/// Convenience wrapper around [`Search::run`] with pruning enabled.
pub fn search(
    board: &mut Board,
    depth: usize,
    lower: Score,
    upper: Score,
    maximizing: bool,
) -> Score {
    Search::new(true).run(board, depth, lower, upper, maximizing)
}
