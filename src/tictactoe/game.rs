//! Game sessions shared by every front end
//!
//! A [`Game`] owns one board, tracks whose turn it is and refuses further
//! placements once the game is decided. The solver itself is stateless; this
//! module is where the per-game state machine lives.

use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use super::board::{BOARD_CELLS, Board, Player};
use crate::solver::Solver;

/// A move in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub position: usize,
    pub player: Player,
}

/// Where a game stands after the latest placement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    Won(Player),
    Draw,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// Status line shown to a human playing `human` against the solver
    pub fn message(self, human: Player) -> String {
        match self {
            GameStatus::Won(player) if player == human => "You win!".to_string(),
            GameStatus::Won(_) => "Computer wins!".to_string(),
            GameStatus::Draw => "It's a draw!".to_string(),
            GameStatus::InProgress => format!("Your turn ({human})"),
        }
    }
}

/// Outcome of one human move followed by the solver's reply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnReport {
    pub human: usize,
    /// `None` when the human's move ended the game
    pub reply: Option<usize>,
    pub status: GameStatus,
}

/// A game in progress with its move history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    to_move: Player,
    moves: Vec<Move>,
    status: GameStatus,
}

impl Game {
    /// Empty board, X to move
    pub fn new() -> Self {
        Self::with_first_player(Player::X)
    }

    pub fn with_first_player(first: Player) -> Self {
        Game {
            board: Board::new(),
            to_move: first,
            moves: Vec::new(),
            status: GameStatus::InProgress,
        }
    }

    /// Continue from a board reconstructed from an external representation.
    ///
    /// The side to move is inferred from the piece counts with X moving
    /// first. The history starts empty.
    ///
    /// # Errors
    ///
    /// Returns error if the board is not a legal X-first position.
    pub fn resume(board: Board) -> Result<Self, crate::Error> {
        board.validate_x_first()?;
        let to_move = board.side_to_move()?;
        Ok(Game {
            board,
            to_move,
            moves: Vec::new(),
            status: board.status(),
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn to_move(&self) -> Player {
        self.to_move
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// Place the side-to-move's mark and advance the turn.
    ///
    /// # Errors
    ///
    /// - [`crate::Error::GameOver`] once the game is decided
    /// - [`crate::Error::InvalidPosition`] for an index outside 0-8
    /// - [`crate::Error::CellOccupied`] for a taken cell
    pub fn play(&mut self, position: usize) -> Result<GameStatus, crate::Error> {
        if self.is_over() {
            return Err(crate::Error::GameOver);
        }
        if position >= BOARD_CELLS {
            return Err(crate::Error::InvalidPosition { position });
        }

        let player = self.to_move;
        self.board.place(position, player)?;
        self.moves.push(Move { position, player });
        self.to_move = player.opponent();
        self.status = self.board.status();

        if self.status.is_terminal() {
            info!(board = %self.board.encode(), status = ?self.status, "game finished");
        }

        Ok(self.status)
    }

    /// Let the solver play the side to move.
    ///
    /// Returns the chosen cell, or `None` if the game was already decided.
    pub fn reply(&mut self, solver: &Solver) -> Result<Option<usize>, crate::Error> {
        if self.is_over() {
            return Ok(None);
        }
        let Some(position) = solver.best_move(&self.board, self.to_move) else {
            return Err(crate::Error::NoValidMoves);
        };
        self.play(position)?;
        Ok(Some(position))
    }

    /// Apply a human move, then let the solver answer unless the game ended.
    #[instrument(level = "debug", skip(self, solver), fields(board = %self.board.encode()))]
    pub fn play_turn(
        &mut self,
        position: usize,
        solver: &Solver,
    ) -> Result<TurnReport, crate::Error> {
        let status = self.play(position)?;
        let reply = if status.is_terminal() {
            None
        } else {
            self.reply(solver)?
        };

        Ok(TurnReport {
            human: position,
            reply,
            status: self.status,
        })
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_alternation() {
        let mut game = Game::new();
        assert_eq!(game.to_move(), Player::X);

        game.play(0).unwrap();
        assert_eq!(game.to_move(), Player::O);

        game.play(1).unwrap();
        assert_eq!(game.to_move(), Player::X);
        assert_eq!(
            game.moves(),
            &[
                Move {
                    position: 0,
                    player: Player::X
                },
                Move {
                    position: 1,
                    player: Player::O
                }
            ]
        );
    }

    #[test]
    fn test_rejects_moves_after_win() {
        let mut game = Game::new();
        for pos in [0, 3, 1, 4] {
            game.play(pos).unwrap();
        }
        assert_eq!(game.play(2).unwrap(), GameStatus::Won(Player::X));
        assert!(matches!(game.play(8), Err(crate::Error::GameOver)));
        assert_eq!(game.reply(&Solver::new()).unwrap(), None);
    }

    #[test]
    fn test_rejects_occupied_and_out_of_range() {
        let mut game = Game::new();
        game.play(4).unwrap();
        assert!(matches!(
            game.play(4),
            Err(crate::Error::CellOccupied { position: 4 })
        ));
        assert!(matches!(
            game.play(12),
            Err(crate::Error::InvalidPosition { position: 12 })
        ));
        assert_eq!(game.to_move(), Player::O);
    }

    #[test]
    fn test_play_turn_blocks() {
        let mut game = Game::resume(Board::from_string("X.O......").unwrap()).unwrap();
        let report = game.play_turn(4, &Solver::new()).unwrap();
        assert_eq!(report.reply, Some(8));
        assert_eq!(report.status, GameStatus::InProgress);
        assert_eq!(game.board().encode(), "X.O.X...O");
    }

    #[test]
    fn test_play_turn_without_reply_when_human_wins() {
        let mut game = Game::resume(Board::from_string("XX.OO....").unwrap()).unwrap();
        let report = game.play_turn(2, &Solver::new()).unwrap();
        assert_eq!(report.reply, None);
        assert_eq!(report.status, GameStatus::Won(Player::X));
        assert_eq!(report.status.message(Player::X), "You win!");
    }

    #[test]
    fn test_resume_rejects_illegal_board() {
        assert!(Game::resume(Board::from_string("OO.......").unwrap()).is_err());
        assert!(matches!(
            Game::resume(Board::from_string("XXXOO.O..").unwrap()),
            Err(crate::Error::ConflictingWinners { .. })
        ));
    }

    #[test]
    fn test_status_messages() {
        assert_eq!(GameStatus::Won(Player::O).message(Player::X), "Computer wins!");
        assert_eq!(GameStatus::Draw.message(Player::X), "It's a draw!");
        assert_eq!(GameStatus::InProgress.message(Player::X), "Your turn (X)");
    }
}
