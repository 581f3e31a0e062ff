//! noughts CLI - exact tic-tac-toe solver
//!
//! This CLI provides a unified interface for:
//! - Querying the best move for a position
//! - Playing interactively against the solver
//! - Watching the solver play itself
//! - Evaluating the solver against baseline opponents

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use noughts::cli::{Settings, commands};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "noughts")]
#[command(version, about = "Exact tic-tac-toe solver", long_about = None)]
struct Cli {
    /// Settings file (JSON)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log search details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Recommend a move for a board
    BestMove(commands::best_move::BestMoveArgs),

    /// Play against the solver on the terminal
    Play(commands::play::PlayArgs),

    /// Let the solver play both sides
    SelfPlay(commands::self_play::SelfPlayArgs),

    /// Evaluate the solver against a baseline opponent
    Evaluate(commands::evaluate::EvaluateArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = Settings::load_or_default(cli.config.as_deref())?;
    init_tracing(cli.verbose || settings.common.verbose);

    match cli.command {
        Commands::BestMove(args) => commands::best_move::execute(args, &settings),
        Commands::Play(args) => commands::play::execute(args, &settings),
        Commands::SelfPlay(args) => commands::self_play::execute(args, &settings),
        Commands::Evaluate(args) => commands::evaluate::execute(args, &settings),
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "noughts=debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}
