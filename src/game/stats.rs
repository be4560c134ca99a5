//! Session statistics
//!
//! Counts games and wins for the current run; nothing is saved to disk.

use super::{Game, GameStatus};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// `guess_distribution[n]` counts games won on attempt `n`
    pub guess_distribution: Vec<usize>,
}

impl Statistics {
    /// Record a finished game; games still in progress are ignored
    pub fn record(&mut self, game: &Game) {
        match game.status() {
            GameStatus::InProgress => {}
            GameStatus::Lost => self.total_games += 1,
            GameStatus::Won => {
                self.total_games += 1;
                self.games_won += 1;

                let attempts = game.history().len();
                if self.guess_distribution.len() <= attempts {
                    self.guess_distribution.resize(attempts + 1, 0);
                }
                self.guess_distribution[attempts] += 1;
            }
        }
    }

    /// Percentage of games won, 0 when none were played
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}
