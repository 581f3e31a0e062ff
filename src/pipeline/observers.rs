//! Observer adapters for match series

use indicatif::{ProgressBar, ProgressStyle};
use serde::{Deserialize, Serialize};

use crate::{
    Result,
    ports::Observer,
    tictactoe::{GameStatus, Move, Player},
};

/// Progress bar observer - shows series progress on stderr
pub struct ProgressObserver {
    progress_bar: Option<ProgressBar>,
    wins: usize,
    draws: usize,
    losses: usize,
}

impl ProgressObserver {
    /// Create a new progress observer
    pub fn new() -> Self {
        Self {
            progress_bar: None,
            wins: 0,
            draws: 0,
            losses: 0,
        }
    }

    fn tally(&self) -> String {
        format!("{} D:{} L:{}", self.wins, self.draws, self.losses)
    }
}

impl Default for ProgressObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl Observer for ProgressObserver {
    fn on_series_start(&mut self, total_games: usize) -> Result<()> {
        let pb = ProgressBar::new(total_games as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} games (W:{msg})")
                .map_err(|e| crate::Error::ProgressBarTemplate {
                    message: e.to_string(),
                })?
                .progress_chars("=>-"),
        );
        self.progress_bar = Some(pb);
        Ok(())
    }

    fn on_game_end(
        &mut self,
        game_num: usize,
        tracked_side: Player,
        status: GameStatus,
        _moves: &[Move],
    ) -> Result<()> {
        match status {
            GameStatus::Won(winner) if winner == tracked_side => self.wins += 1,
            GameStatus::Won(_) => self.losses += 1,
            GameStatus::Draw => self.draws += 1,
            GameStatus::InProgress => return Err(crate::Error::UnfinishedGame { game_num }),
        }

        if let Some(pb) = &self.progress_bar {
            pb.set_position(game_num as u64);
            pb.set_message(self.tally());
        }
        Ok(())
    }

    fn on_series_end(&mut self) -> Result<()> {
        if let Some(pb) = &self.progress_bar {
            pb.finish_with_message(self.tally());
        }
        Ok(())
    }
}

/// Metrics observer - tracks results from the tracked agent's perspective
#[derive(Debug, Default)]
pub struct MetricsObserver {
    wins: usize,
    draws: usize,
    losses: usize,
    move_counts: Vec<usize>,
}

impl MetricsObserver {
    /// Create a new metrics observer
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total_games(&self) -> usize {
        self.move_counts.len()
    }

    /// Get metrics summary
    pub fn summary(&self) -> MetricsSummary {
        MetricsSummary::new(self.wins, self.draws, self.losses, &self.move_counts)
    }
}

impl Observer for MetricsObserver {
    fn on_game_end(
        &mut self,
        game_num: usize,
        tracked_side: Player,
        status: GameStatus,
        moves: &[Move],
    ) -> Result<()> {
        match status {
            GameStatus::Won(winner) if winner == tracked_side => self.wins += 1,
            GameStatus::Won(_) => self.losses += 1,
            GameStatus::Draw => self.draws += 1,
            GameStatus::InProgress => return Err(crate::Error::UnfinishedGame { game_num }),
        }
        self.move_counts.push(moves.len());
        Ok(())
    }
}

/// Summary of a series from the tracked agent's perspective
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsSummary {
    pub total_games: usize,
    pub wins: usize,
    pub draws: usize,
    pub losses: usize,
    pub win_rate: f64,
    pub draw_rate: f64,
    pub loss_rate: f64,
    pub avg_game_length: f64,
}

impl MetricsSummary {
    pub fn new(wins: usize, draws: usize, losses: usize, move_counts: &[usize]) -> Self {
        let total_games = wins + draws + losses;
        let rate = |n: usize| {
            if total_games == 0 {
                0.0
            } else {
                n as f64 / total_games as f64
            }
        };
        let avg_game_length = if move_counts.is_empty() {
            0.0
        } else {
            move_counts.iter().sum::<usize>() as f64 / move_counts.len() as f64
        };

        Self {
            total_games,
            wins,
            draws,
            losses,
            win_rate: rate(wins),
            draw_rate: rate(draws),
            loss_rate: rate(losses),
            avg_game_length,
        }
    }

    /// Save summary to a JSON file
    pub fn save<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        let file = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    /// Load summary from a JSON file
    pub fn load<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        let summary = serde_json::from_reader(file)?;
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_from_tracked_perspective() {
        let mut metrics = MetricsObserver::new();
        metrics
            .on_game_end(1, Player::O, GameStatus::Won(Player::O), &[])
            .unwrap();
        metrics
            .on_game_end(2, Player::O, GameStatus::Draw, &[])
            .unwrap();
        metrics
            .on_game_end(3, Player::X, GameStatus::Won(Player::O), &[])
            .unwrap();

        let summary = metrics.summary();
        assert_eq!(summary.total_games, 3);
        assert_eq!((summary.wins, summary.draws, summary.losses), (1, 1, 1));
        assert!((summary.win_rate - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_unfinished_game_is_rejected() {
        let mut metrics = MetricsObserver::new();
        assert!(matches!(
            metrics.on_game_end(4, Player::X, GameStatus::InProgress, &[]),
            Err(crate::Error::UnfinishedGame { game_num: 4 })
        ));
        assert_eq!(metrics.total_games(), 0);
        assert_eq!(metrics.summary().draws, 0);

        let mut progress = ProgressObserver::new();
        assert!(
            progress
                .on_game_end(1, Player::O, GameStatus::InProgress, &[])
                .is_err()
        );
    }

    #[test]
    fn test_empty_summary_has_zero_rates() {
        let summary = MetricsObserver::new().summary();
        assert_eq!(summary.total_games, 0);
        assert_eq!(summary.win_rate, 0.0);
        assert_eq!(summary.avg_game_length, 0.0);
    }
}
