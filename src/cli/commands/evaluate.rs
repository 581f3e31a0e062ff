//! Evaluate command - the solver against a baseline opponent

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use rand::random;

use crate::{
    cli::{
        Settings,
        config::OpponentKind,
        output::{self, format_number},
    },
    pipeline::{
        Agent, DefensiveAgent, MetricsObserver, ProgressObserver, RandomAgent, Series,
        SeriesConfig, SideSchedule, SolverAgent,
    },
    tictactoe::Player,
};

/// Side(s) the solver plays
#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum SidesArg {
    X,
    O,
    Both,
}

impl From<SidesArg> for SideSchedule {
    fn from(arg: SidesArg) -> Self {
        match arg {
            SidesArg::X => SideSchedule::X,
            SidesArg::O => SideSchedule::O,
            SidesArg::Both => SideSchedule::Both,
        }
    }
}

#[derive(Parser, Debug)]
#[command(about = "Evaluate the solver against a baseline opponent")]
pub struct EvaluateArgs {
    /// Opponent to evaluate against
    #[arg(long, short = 'o', value_enum)]
    pub opponent: Option<OpponentKind>,

    /// Number of evaluation games
    #[arg(long, short = 'g')]
    pub games: Option<usize>,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Side(s) played by the solver
    #[arg(long, value_enum)]
    pub solver_plays: Option<SidesArg>,

    /// Hide the progress bar
    #[arg(long)]
    pub no_progress: bool,

    /// Export the summary to a JSON file
    #[arg(long)]
    pub export: Option<PathBuf>,
}

pub fn execute(args: EvaluateArgs, settings: &Settings) -> Result<()> {
    let evaluation = &settings.evaluation;
    let games = args.games.unwrap_or(evaluation.games);
    let opponent_kind = args.opponent.unwrap_or(evaluation.opponent);
    let schedule = args
        .solver_plays
        .map(SideSchedule::from)
        .unwrap_or(evaluation.solver_plays);
    let seed = args.seed.or(evaluation.seed).unwrap_or_else(random);
    let show_progress = settings.common.progress && !args.no_progress;

    let mut solver = SolverAgent::with_config("Solver".to_string(), settings.search);
    let mut opponent: Box<dyn Agent> = match opponent_kind {
        OpponentKind::Random => Box::new(RandomAgent::with_seed("Random".to_string(), seed)),
        OpponentKind::Defensive => {
            Box::new(DefensiveAgent::with_seed("Defensive".to_string(), seed))
        }
    };

    let games_text = format_number(games);
    let schedule_text = format!("{schedule:?}");
    let seed_text = seed.to_string();
    let pruning_text = settings.search.pruning.to_string();

    output::print_section("Evaluation");
    output::print_stats_table(&[
        ("Opponent", opponent.name()),
        ("Games", games_text.as_str()),
        ("Solver plays", schedule_text.as_str()),
        ("Seed", seed_text.as_str()),
        ("Pruning", pruning_text.as_str()),
    ]);

    let config = SeriesConfig {
        num_games: games,
        tracked_side: schedule,
        first_player: Player::X,
    };

    let mut metrics = MetricsObserver::new();
    let mut progress = ProgressObserver::new();
    let mut series = Series::new(config).with_observer(&mut metrics);
    if show_progress {
        series = series.with_observer(&mut progress);
    }
    series.run(&mut solver, opponent.as_mut())?;
    drop(series);

    let summary = metrics.summary();
    output::print_subsection("Results (solver's perspective)");
    output::print_kv(
        "Wins",
        &format!("{} ({:.1}%)", summary.wins, summary.win_rate * 100.0),
    );
    output::print_kv(
        "Draws",
        &format!("{} ({:.1}%)", summary.draws, summary.draw_rate * 100.0),
    );
    output::print_kv(
        "Losses",
        &format!("{} ({:.1}%)", summary.losses, summary.loss_rate * 100.0),
    );
    output::print_kv(
        "Avg game length",
        &format!("{:.2} moves", summary.avg_game_length),
    );

    if let Some(path) = &args.export {
        summary
            .save(path)
            .with_context(|| format!("failed to export summary to {}", path.display()))?;
        println!("\nSummary exported to: {}", path.display());
    }

    Ok(())
}
