//! Legality checks for caller-supplied boards
//!
//! The solver trusts its input. Front ends that reconstruct a board from an
//! external representation call [`Board::validate`] first so that impossible
//! positions are rejected instead of being searched.

use super::{
    board::{Board, Player},
    lines::LineAnalyzer,
};

impl Board {
    /// Check that the board could arise from legal play by either opener.
    ///
    /// # Errors
    ///
    /// - [`crate::Error::InvalidPieceCounts`] when one side is ahead by more than one mark
    /// - [`crate::Error::ConflictingWinners`] when both sides hold a line, when the
    ///   winner did not move last, or when a side holds two lines that no single
    ///   move could complete together
    pub fn validate(&self) -> Result<(), crate::Error> {
        let count = self.piece_count();
        if count.x.abs_diff(count.o) > 1 {
            return Err(crate::Error::InvalidPieceCounts {
                x_count: count.x,
                o_count: count.o,
            });
        }

        let conflict = || crate::Error::ConflictingWinners {
            board: self.encode(),
        };

        let x_wins = self.has_won(Player::X);
        let o_wins = self.has_won(Player::O);

        if x_wins && o_wins {
            return Err(conflict());
        }

        // The winner moved last, so the winner cannot be behind on marks.
        if x_wins && count.x < count.o {
            return Err(conflict());
        }
        if o_wins && count.o < count.x {
            return Err(conflict());
        }

        for player in [Player::X, Player::O] {
            if !self.winning_lines_share_cell(player) {
                return Err(conflict());
            }
        }

        Ok(())
    }

    /// Check that the board could arise from a game X opened.
    ///
    /// On top of [`Board::validate`], the winner must have made the last
    /// move: X holds one more mark than O after an X win, the same number
    /// after an O win.
    ///
    /// # Errors
    ///
    /// - [`crate::Error::InvalidPieceCounts`] when O is ahead or X is ahead by more than one
    /// - [`crate::Error::ConflictingWinners`] when the winner did not move last
    pub fn validate_x_first(&self) -> Result<(), crate::Error> {
        self.validate()?;
        let to_move = self.side_to_move()?;

        let last_mover = to_move.opponent();
        match self.winner() {
            Some(winner) if winner != last_mover => Err(crate::Error::ConflictingWinners {
                board: self.encode(),
            }),
            _ => Ok(()),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Check if all winning lines for a player share at least one cell.
    /// Two lines can only be completed by one move through a common cell.
    pub fn winning_lines_share_cell(&self, player: Player) -> bool {
        let lines = LineAnalyzer::completed_lines(self.cells(), player);
        if lines.len() < 2 {
            return true;
        }

        (0..9).any(|pos| lines.iter().all(|line| line.contains(&pos)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_opening_boards_are_valid() {
        assert!(Board::new().is_valid());
        assert!(Board::from_string("....X....").unwrap().is_valid());
        assert!(Board::from_string("O........").unwrap().is_valid());
    }

    #[test]
    fn test_rejects_large_piece_difference() {
        let err = Board::from_string("XXX......").unwrap().validate().unwrap_err();
        assert!(matches!(
            err,
            crate::Error::InvalidPieceCounts {
                x_count: 3,
                o_count: 0
            }
        ));
    }

    #[test]
    fn test_rejects_both_winners() {
        let board = Board::from_string("XXXOOO...").unwrap();
        assert!(matches!(
            board.validate(),
            Err(crate::Error::ConflictingWinners { .. })
        ));
    }

    #[test]
    fn test_rejects_winner_behind_on_marks() {
        // O holds the top row but X has one more mark than O.
        let board = Board::from_string("OOOXX.XX.").unwrap();
        assert!(!board.is_valid());
    }

    #[test]
    fn test_double_line_through_shared_cell_is_valid() {
        // XXX
        // XOO
        // XOO
        let board = Board::from_string("XXXXOOXOO").unwrap();
        assert!(board.winning_lines_share_cell(Player::X));
        assert!(board.is_valid());
    }

    #[test]
    fn test_x_first_requires_winner_to_move_last() {
        // X completed the top row but O has as many marks.
        let board = Board::from_string("XXXOO.O..").unwrap();
        assert!(board.is_valid());
        assert!(matches!(
            board.validate_x_first(),
            Err(crate::Error::ConflictingWinners { .. })
        ));

        // O completed the middle row with X a mark ahead.
        let board = Board::from_string("XX.OOOX.X").unwrap();
        assert!(board.validate_x_first().is_err());

        assert!(Board::from_string("XXXOO....").unwrap().validate_x_first().is_ok());
        assert!(Board::from_string("XX.OOOX..").unwrap().validate_x_first().is_ok());
    }

    #[test]
    fn test_x_first_rejects_o_ahead() {
        let board = Board::from_string("O........").unwrap();
        assert!(matches!(
            board.validate_x_first(),
            Err(crate::Error::InvalidPieceCounts {
                x_count: 0,
                o_count: 1
            })
        ));
    }

    #[test]
    fn test_parallel_double_line_is_invalid() {
        // XXX
        // OO.
        // XXX
        let board = Board::from_string("XXXOO.XXX").unwrap();
        assert!(!board.winning_lines_share_cell(Player::X));
        assert!(!board.is_valid());
    }
}
