//! Best-move selection on top of the exhaustive search

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use super::search::{LOWER_SENTINEL, Probe, Score, Search, SearchStats, UPPER_SENTINEL};
use crate::tictactoe::{Board, Player};

/// Search settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Stop enumerating siblings once the bounds cross. Disabling this runs
    /// plain minimax; scores and chosen moves are the same either way.
    pub pruning: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { pruning: true }
    }
}

/// Value of playing one candidate move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveScore {
    pub position: usize,
    pub score: Score,
}

/// Full result of evaluating every candidate for one mover
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analysis {
    pub mover: Player,
    /// One entry per empty cell, ascending by position
    pub scores: Vec<MoveScore>,
    /// First candidate with the best score for the mover
    pub best: Option<MoveScore>,
    pub stats: SearchStats,
}

impl Analysis {
    /// Game value under optimal play, if any move exists
    pub fn value(&self) -> Option<Score> {
        self.best.map(|m| m.score)
    }

    /// Every candidate that achieves the best score, ascending
    pub fn optimal_moves(&self) -> Vec<usize> {
        match self.best {
            Some(best) => self
                .scores
                .iter()
                .filter(|m| m.score == best.score)
                .map(|m| m.position)
                .collect(),
            None => Vec::new(),
        }
    }
}

/// Exact tic-tac-toe solver.
///
/// Stateless apart from its configuration: every query searches a private
/// copy of the caller's board, so answers depend only on the board and mover.
///
/// # Examples
///
/// ```
/// use noughts::{solver::Solver, tictactoe::{Board, Player}};
///
/// // O must block X's diagonal.
/// let board = Board::from_string("X.O.X....").unwrap();
/// assert_eq!(Solver::new().best_move(&board, Player::O), Some(8));
///
/// // A full board has no move.
/// let full = Board::from_string("XOXXOOOXX").unwrap();
/// assert_eq!(Solver::new().best_move(&full, Player::X), None);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Solver {
    config: SearchConfig,
}

impl Solver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SearchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> SearchConfig {
        self.config
    }

    /// Score every empty cell for `mover` and pick the best one.
    ///
    /// O takes the maximum score, X the minimum. Ties go to the lowest index.
    /// Each candidate is searched to the end of the game from the opponent's
    /// perspective with fresh sentinel bounds.
    #[instrument(level = "debug", skip(self, board), fields(board = %board.encode()))]
    pub fn analyze(&self, board: &Board, mover: Player) -> Analysis {
        let mut work = *board;
        let mut search = Search::new(self.config.pruning);
        let opponent_maximizes = mover.opponent().is_maximizer();

        let mut scores = Vec::with_capacity(work.empty_count());
        for position in work.available_moves() {
            let score = {
                let mut probe = Probe::place(&mut work, position, mover);
                let depth = probe.empty_count();
                search.run(
                    &mut probe,
                    depth,
                    LOWER_SENTINEL,
                    UPPER_SENTINEL,
                    opponent_maximizes,
                )
            };
            scores.push(MoveScore { position, score });
        }

        let best = select_best(&scores, mover);
        let stats = search.stats();
        debug!(
            nodes = stats.nodes,
            cutoffs = stats.cutoffs,
            best = ?best,
            "search complete"
        );

        Analysis {
            mover,
            scores,
            best,
            stats,
        }
    }

    /// Recommended cell for `mover`, or `None` when the board is full.
    pub fn best_move(&self, board: &Board, mover: Player) -> Option<usize> {
        self.analyze(board, mover).best.map(|m| m.position)
    }
}

/// First candidate with the mover's preferred score
fn select_best(scores: &[MoveScore], mover: Player) -> Option<MoveScore> {
    let mut best: Option<MoveScore> = None;
    for &candidate in scores {
        let improves = match best {
            None => true,
            Some(current) if mover.is_maximizer() => candidate.score > current.score,
            Some(current) => candidate.score < current.score,
        };
        if improves {
            best = Some(candidate);
        }
    }
    best
}

/// [`Solver::best_move`] with the default configuration
pub fn best_move(board: &Board, mover: Player) -> Option<usize> {
    Solver::new().best_move(board, mover)
}
