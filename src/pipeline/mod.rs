//! Match pipeline: agent adapters, observers and the series runner
//!
//! Used by the `evaluate` and `self-play` commands to pit the solver
//! against itself or against baseline opponents.

pub mod agents;
pub mod observers;
pub mod series;

pub use agents::{DefensiveAgent, RandomAgent, SolverAgent};
pub use observers::{MetricsObserver, MetricsSummary, ProgressObserver};
pub use series::{GameRecord, Series, SeriesConfig, SideSchedule, play_game};

pub use crate::ports::{Agent, Observer};
