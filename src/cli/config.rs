//! Settings file shared across CLI commands
//!
//! Settings are read from an optional JSON file. Every field has a default,
//! so a partial file (or none at all) is valid. Command-line flags override
//! whatever the file provides.

use std::{fs, path::Path};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::{pipeline::SideSchedule, solver::SearchConfig};

/// Top-level settings document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub common: CommonConfig,
    pub search: SearchConfig,
    pub evaluation: EvaluationConfig,
}

impl Settings {
    /// Load settings from a JSON file
    pub fn load(path: &Path) -> crate::Result<Self> {
        let contents = fs::read_to_string(path).map_err(|source| crate::Error::Io {
            operation: format!("read settings file {}", path.display()),
            source,
        })?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Load from `path` when given, defaults otherwise
    pub fn load_or_default(path: Option<&Path>) -> crate::Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Write settings as pretty-printed JSON
    pub fn save(&self, path: &Path) -> crate::Result<()> {
        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents).map_err(|source| crate::Error::Io {
            operation: format!("write settings file {}", path.display()),
            source,
        })
    }
}

/// Common configuration shared across commands
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommonConfig {
    /// Whether to show progress bars
    pub progress: bool,

    /// Verbose output
    pub verbose: bool,
}

impl Default for CommonConfig {
    fn default() -> Self {
        Self {
            progress: true,
            verbose: false,
        }
    }
}

/// Baseline opponents available to `evaluate`
#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpponentKind {
    /// Uniformly random legal moves
    Random,
    /// Wins or blocks when possible, random otherwise
    Defensive,
}

/// Evaluation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluationConfig {
    /// Number of evaluation games
    pub games: usize,

    /// Opponent type
    pub opponent: OpponentKind,

    /// Side(s) played by the solver
    pub solver_plays: SideSchedule,

    /// Random seed for reproducibility
    pub seed: Option<u64>,
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self {
            games: 100,
            opponent: OpponentKind::Random,
            solver_plays: SideSchedule::Both,
            seed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_document_uses_defaults() {
        let settings: Settings =
            serde_json::from_str(r#"{"evaluation": {"games": 12, "opponent": "defensive"}}"#)
                .unwrap();
        assert_eq!(settings.evaluation.games, 12);
        assert_eq!(settings.evaluation.opponent, OpponentKind::Defensive);
        assert_eq!(settings.evaluation.solver_plays, SideSchedule::Both);
        assert!(settings.search.pruning);
        assert!(settings.common.progress);
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = Settings::load(Path::new("/nonexistent/noughts.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/noughts.json"));
    }
}
