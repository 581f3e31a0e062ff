//! best-move command - ask the solver for one position

use anyhow::{Context, Result};
use clap::Parser;

use super::PlayerArg;
use crate::{
    cli::{Settings, output},
    solver::Solver,
    tictactoe::{Board, Player},
};

#[derive(Parser, Debug)]
#[command(about = "Compute the optimal move for a board")]
pub struct BestMoveArgs {
    /// Nine cells, row-major: X, O, and '.' or ' ' for empty (e.g. "X...X...O")
    pub board: String,

    /// Side to move (inferred from the piece counts when omitted)
    #[arg(long, value_enum)]
    pub mover: Option<PlayerArg>,

    /// Run plain minimax without alpha-beta cutoffs
    #[arg(long)]
    pub no_pruning: bool,

    /// Show the score of every candidate and search statistics
    #[arg(long)]
    pub scores: bool,
}

pub fn execute(args: BestMoveArgs, settings: &Settings) -> Result<()> {
    let board = Board::from_string(&args.board)
        .with_context(|| format!("could not parse board '{}'", args.board))?;
    board.validate().context("board is not a legal position")?;

    let mover = match args.mover {
        Some(mover) => Player::from(mover),
        None => board
            .side_to_move()
            .context("cannot infer the side to move; pass --mover")?,
    };

    let mut config = settings.search;
    if args.no_pruning {
        config.pruning = false;
    }
    let solver = Solver::with_config(config);

    output::print_board(&board);
    output::print_kv("Status", &format!("{:?}", board.status()));
    output::print_kv("Mover", &mover.to_string());

    if let Some(winner) = board.winner() {
        println!("\nGame already won by {winner}; no move to compute.");
        return Ok(());
    }

    let analysis = solver.analyze(&board, mover);
    match analysis.best {
        Some(best) => println!(
            "\nBest move for {mover}: {} (row {}, col {}), value {:+}",
            best.position,
            best.position / 3,
            best.position % 3,
            best.score
        ),
        None => println!("\nNo move available: the board is full."),
    }

    if args.scores {
        output::print_analysis(&analysis);
    }

    Ok(())
}
