//! Match series: one tracked agent against an opponent over many games

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{
    Result,
    ports::{Agent, Observer},
    tictactoe::{Game, GameStatus, Move, Player},
};

/// Which side(s) the tracked agent plays in a series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SideSchedule {
    X,
    O,
    /// Alternate, starting as X
    Both,
}

impl SideSchedule {
    /// Side for the 0-based game index
    pub fn side_for(self, game_index: usize) -> Player {
        match self {
            SideSchedule::X => Player::X,
            SideSchedule::O => Player::O,
            SideSchedule::Both if game_index.is_multiple_of(2) => Player::X,
            SideSchedule::Both => Player::O,
        }
    }
}

/// Series configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeriesConfig {
    /// Number of games
    pub num_games: usize,

    /// Side(s) played by the tracked agent
    pub tracked_side: SideSchedule,

    /// Which player opens each game
    pub first_player: Player,
}

impl Default for SeriesConfig {
    fn default() -> Self {
        Self {
            num_games: 100,
            tracked_side: SideSchedule::Both,
            first_player: Player::X,
        }
    }
}

/// A finished game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub moves: Vec<Move>,
    pub status: GameStatus,
}

/// Play one game to completion between the X and O agents.
pub fn play_game(
    x_agent: &mut dyn Agent,
    o_agent: &mut dyn Agent,
    first_player: Player,
) -> Result<GameRecord> {
    play_observed(x_agent, o_agent, first_player, 0, &mut [])
}

/// Play one game, notifying observers after each placement.
fn play_observed(
    x_agent: &mut dyn Agent,
    o_agent: &mut dyn Agent,
    first_player: Player,
    game_num: usize,
    observers: &mut [&mut dyn Observer],
) -> Result<GameRecord> {
    let mut game = Game::with_first_player(first_player);

    while !game.is_over() {
        let mover = game.to_move();
        let agent: &mut dyn Agent = match mover {
            Player::X => &mut *x_agent,
            Player::O => &mut *o_agent,
        };
        let position = agent.select_move(game.board(), mover)?;
        debug!(agent = agent.name(), ?mover, position, "move selected");
        game.play(position)?;

        let mv = Move {
            position,
            player: mover,
        };
        for observer in observers.iter_mut() {
            observer.on_move(game_num, game.board(), mv)?;
        }
    }

    Ok(GameRecord {
        moves: game.moves().to_vec(),
        status: game.status(),
    })
}

/// Runs a configured series and feeds every observer
///
/// Observers are borrowed so callers can read their state afterwards.
pub struct Series<'a> {
    config: SeriesConfig,
    observers: Vec<&'a mut dyn Observer>,
}

impl<'a> Series<'a> {
    /// Create a new series
    pub fn new(config: SeriesConfig) -> Self {
        Self {
            config,
            observers: Vec::new(),
        }
    }

    /// Add an observer to the series
    pub fn with_observer(mut self, observer: &'a mut dyn Observer) -> Self {
        self.observers.push(observer);
        self
    }

    /// Play every game; returns the records in order.
    pub fn run(
        &mut self,
        tracked: &mut dyn Agent,
        opponent: &mut dyn Agent,
    ) -> Result<Vec<GameRecord>> {
        info!(
            tracked = tracked.name(),
            opponent = opponent.name(),
            games = self.config.num_games,
            "starting series"
        );

        for observer in self.observers.iter_mut() {
            observer.on_series_start(self.config.num_games)?;
        }

        let mut records = Vec::with_capacity(self.config.num_games);
        for game_index in 0..self.config.num_games {
            let tracked_side = self.config.tracked_side.side_for(game_index);
            let game_num = game_index + 1;
            let first = self.config.first_player;
            let record = match tracked_side {
                Player::X => {
                    play_observed(tracked, opponent, first, game_num, &mut self.observers)?
                }
                Player::O => {
                    play_observed(opponent, tracked, first, game_num, &mut self.observers)?
                }
            };

            for observer in self.observers.iter_mut() {
                observer.on_game_end(game_num, tracked_side, record.status, &record.moves)?;
            }
            records.push(record);
        }

        for observer in self.observers.iter_mut() {
            observer.on_series_end()?;
        }

        Ok(records)
    }
}
