//! self-play command - the solver against itself from an empty board

use anyhow::Result;
use clap::Parser;

use super::PlayerArg;
use crate::{
    cli::{Settings, output},
    pipeline::{SolverAgent, play_game},
    tictactoe::{Board, GameStatus, Player},
};

#[derive(Parser, Debug)]
#[command(about = "Let the solver play both sides")]
pub struct SelfPlayArgs {
    /// Which side opens the game
    #[arg(long, value_enum, default_value = "x")]
    pub first: PlayerArg,
}

pub fn execute(args: SelfPlayArgs, settings: &Settings) -> Result<()> {
    let first = Player::from(args.first);
    let mut x_agent = SolverAgent::with_config("Solver (X)".to_string(), settings.search);
    let mut o_agent = SolverAgent::with_config("Solver (O)".to_string(), settings.search);

    let record = play_game(&mut x_agent, &mut o_agent, first)?;

    output::print_section("Self-play");
    let mut board = Board::new();
    for (ply, mv) in record.moves.iter().enumerate() {
        board.place(mv.position, mv.player)?;
        println!("{:>2}. {} -> {}", ply + 1, mv.player, mv.position);
    }
    println!();
    output::print_board(&board);

    let verdict = match record.status {
        GameStatus::Won(winner) => format!("{winner} wins"),
        GameStatus::Draw => "draw".to_string(),
        GameStatus::InProgress => "unfinished".to_string(),
    };
    output::print_kv("Outcome", &verdict);

    Ok(())
}
