//! Tic-Tac-Toe board, rules and game sessions

pub mod board;
pub mod game;
pub mod lines;
pub mod validation;

pub use board::{BOARD_CELLS, Board, Cell, PieceCount, Player};
pub use game::{Game, GameStatus, Move, TurnReport};
pub use lines::{Line, LineAnalyzer, WINNING_LINES};
