//! Settings documents on disk

use std::fs;

use noughts::{
    Error,
    cli::{
        Settings,
        config::{EvaluationConfig, OpponentKind},
    },
    pipeline::SideSchedule,
};
use tempfile::tempdir;

#[test]
fn saved_settings_load_back() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("noughts.json");

    let mut settings = Settings::default();
    settings.search.pruning = false;
    settings.common.progress = false;
    settings.evaluation = EvaluationConfig {
        games: 250,
        opponent: OpponentKind::Defensive,
        solver_plays: SideSchedule::O,
        seed: Some(17),
    };
    settings.save(&path).unwrap();

    assert_eq!(Settings::load(&path).unwrap(), settings);
}

#[test]
fn absent_path_gives_defaults() {
    assert_eq!(Settings::load_or_default(None).unwrap(), Settings::default());
}

#[test]
fn partial_file_fills_in_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("partial.json");
    fs::write(&path, r#"{ "search": { "pruning": false } }"#).unwrap();

    let settings = Settings::load_or_default(Some(&path)).unwrap();
    assert!(!settings.search.pruning);
    assert_eq!(settings.evaluation, EvaluationConfig::default());
}

#[test]
fn malformed_file_is_a_serialization_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "{ not json").unwrap();

    assert!(matches!(Settings::load(&path), Err(Error::Serialization(_))));
}
