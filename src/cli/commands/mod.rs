//! Subcommands of the `noughts` binary

pub mod best_move;
pub mod evaluate;
pub mod play;
pub mod self_play;

use anyhow::{Result, anyhow};
use clap::ValueEnum;

use crate::tictactoe::Player;

/// Player selector accepted on the command line
#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum PlayerArg {
    X,
    O,
}

impl From<PlayerArg> for Player {
    fn from(arg: PlayerArg) -> Self {
        match arg {
            PlayerArg::X => Player::X,
            PlayerArg::O => Player::O,
        }
    }
}

/// Parse a human-entered cell index
pub(crate) fn parse_cell(input: &str) -> Result<usize> {
    let trimmed = input.trim();
    let position: usize = trimmed
        .parse()
        .map_err(|_| anyhow!("'{trimmed}' is not a cell number (expected 0-8)"))?;
    if position > 8 {
        return Err(anyhow!("cell {position} is out of range (expected 0-8)"));
    }
    Ok(position)
}
