//! Agent port - anything that picks a move for a board
//!
//! The solver and the baseline opponents are adapters of this port, which
//! lets the match pipeline pit any two of them against each other.

use crate::{
    Result,
    tictactoe::{Board, Player},
};

/// Move selection interface shared by the solver and baseline opponents
///
/// # Examples
///
/// ```no_run
/// use noughts::{
///     ports::Agent,
///     tictactoe::{Board, Player},
/// };
///
/// fn opening<A: Agent>(agent: &mut A) -> noughts::Result<usize> {
///     agent.select_move(&Board::new(), Player::X)
/// }
/// ```
pub trait Agent: Send {
    /// Select a cell (0-8) for `mover` to play on `board`.
    ///
    /// # Errors
    ///
    /// Returns an error if the board has no empty cell.
    fn select_move(&mut self, board: &Board, mover: Player) -> Result<usize>;

    /// Name used in summaries and logs.
    fn name(&self) -> &str;
}
