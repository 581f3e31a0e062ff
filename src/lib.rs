//! Exact tic-tac-toe solver
//!
//! This crate provides:
//! - A 3×3 board model with win, draw and legality checks
//! - Exhaustive minimax search with alpha-beta cutoffs
//! - A stateless solver that recommends optimal moves
//! - Game sessions, match series against baseline agents, and a CLI

pub mod cli;
pub mod error;
pub mod pipeline;
pub mod ports;
pub mod solver;
pub mod tictactoe;

pub use error::{Error, Result};
pub use solver::{Analysis, MoveScore, SearchConfig, Solver, best_move};
pub use tictactoe::{Board, Cell, Game, GameStatus, Player};
