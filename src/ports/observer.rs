//! Observer port - hooks into a running match series
//!
//! Observers collect progress and metrics without coupling the series runner
//! to a particular output format.

use crate::{
    Result,
    tictactoe::{Board, GameStatus, Move, Player},
};

/// Observer trait for monitoring a series of games
///
/// The methods are called in the following order:
/// 1. `on_series_start(total_games)` - Once at the beginning
/// 2. For each game:
///    - `on_move(...)` - For each placement
///    - `on_game_end(...)`
/// 3. `on_series_end()` - Once at the end
///
/// # Examples
///
/// ```no_run
/// use noughts::{
///     ports::Observer,
///     tictactoe::{GameStatus, Move, Player},
/// };
///
/// struct DrawCounter {
///     draws: usize,
/// }
///
/// impl Observer for DrawCounter {
///     fn on_game_end(
///         &mut self,
///         _game_num: usize,
///         _tracked_side: Player,
///         status: GameStatus,
///         _moves: &[Move],
///     ) -> noughts::Result<()> {
///         if status == GameStatus::Draw {
///             self.draws += 1;
///         }
///         Ok(())
///     }
/// }
/// ```
pub trait Observer: Send {
    /// Called once before the first game.
    fn on_series_start(&mut self, _total_games: usize) -> Result<()> {
        Ok(())
    }

    /// Called after every placement, while the game is running.
    ///
    /// `board` already holds the new mark.
    fn on_move(&mut self, _game_num: usize, _board: &Board, _mv: Move) -> Result<()> {
        Ok(())
    }

    /// Called when a game reaches a terminal state.
    ///
    /// * `game_num` - 1-based index of the completed game
    /// * `tracked_side` - Side played by the agent the series is evaluating
    /// * `status` - Terminal status of the game
    /// * `moves` - Full move list
    fn on_game_end(
        &mut self,
        _game_num: usize,
        _tracked_side: Player,
        _status: GameStatus,
        _moves: &[Move],
    ) -> Result<()> {
        Ok(())
    }

    /// Called once after the last game.
    fn on_series_end(&mut self) -> Result<()> {
        Ok(())
    }
}
