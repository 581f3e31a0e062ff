//! Seeded series of the solver against baseline opponents

use noughts::{
    GameStatus, Player,
    pipeline::{
        Agent, DefensiveAgent, MetricsObserver, MetricsSummary, RandomAgent, Series, SeriesConfig,
        SideSchedule, SolverAgent, play_game,
    },
};
use tempfile::tempdir;

fn run_series(
    opponent: &mut dyn Agent,
    schedule: SideSchedule,
    games: usize,
) -> (Vec<noughts::pipeline::GameRecord>, MetricsSummary) {
    let config = SeriesConfig {
        num_games: games,
        tracked_side: schedule,
        first_player: Player::X,
    };
    let mut solver = SolverAgent::new("solver".to_string());
    let mut metrics = MetricsObserver::new();
    let records = Series::new(config)
        .with_observer(&mut metrics)
        .run(&mut solver, opponent)
        .unwrap();
    (records, metrics.summary())
}

#[test]
fn solver_never_loses_to_random_play() {
    for seed in [1, 7, 42] {
        let mut random = RandomAgent::with_seed("random".to_string(), seed);
        let (records, summary) = run_series(&mut random, SideSchedule::Both, 40);
        assert_eq!(records.len(), 40);
        assert_eq!(summary.total_games, 40);
        assert_eq!(summary.losses, 0, "seed {seed}");
        assert!(summary.wins > 0, "seed {seed}");
    }
}

#[test]
fn solver_never_loses_to_defensive_play() {
    for schedule in [SideSchedule::X, SideSchedule::O] {
        let mut defensive = DefensiveAgent::with_seed("defensive".to_string(), 3);
        let (_, summary) = run_series(&mut defensive, schedule, 20);
        assert_eq!(summary.losses, 0, "{schedule:?}");
        assert_eq!(summary.wins + summary.draws, 20);
    }
}

#[test]
fn seeded_series_are_reproducible() {
    let mut first = RandomAgent::with_seed("random".to_string(), 99);
    let mut second = RandomAgent::with_seed("random".to_string(), 99);
    let (a, _) = run_series(&mut first, SideSchedule::Both, 10);
    let (b, _) = run_series(&mut second, SideSchedule::Both, 10);
    assert_eq!(a, b);
}

#[test]
fn defensive_agent_blocks_the_solver() {
    let mut solver = SolverAgent::new("solver".to_string());
    let mut defensive = DefensiveAgent::with_seed("defensive".to_string(), 5);
    let record = play_game(&mut solver, &mut defensive, Player::X).unwrap();
    assert_ne!(record.status, GameStatus::Won(Player::O));
    assert!(record.moves.len() >= 5);
}

#[test]
fn summary_export_roundtrip() {
    let mut random = RandomAgent::with_seed("random".to_string(), 8);
    let (_, summary) = run_series(&mut random, SideSchedule::O, 12);

    let dir = tempdir().unwrap();
    let path = dir.path().join("summary.json");
    summary.save(&path).unwrap();
    let loaded = MetricsSummary::load(&path).unwrap();
    assert_eq!(loaded, summary);
    assert!((loaded.win_rate + loaded.draw_rate + loaded.loss_rate - 1.0).abs() < 1e-9);
}
