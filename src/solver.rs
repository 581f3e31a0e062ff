//! Exact solver: exhaustive game-tree search and move selection

pub mod policy;
pub mod search;

pub use policy::{Analysis, MoveScore, SearchConfig, Solver, best_move};
pub use search::{LOWER_SENTINEL, Score, Search, SearchStats, UPPER_SENTINEL, search};
