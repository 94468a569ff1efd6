//! Score tallies.

use serde::Serialize;

use crate::game::Outcome;

/// Snapshot of the session's cumulative counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Score {
    /// Rounds the player won.
    pub player_wins: u64,
    /// Rounds the computer won.
    pub computer_wins: u64,
    /// Rounds that ended in a tie.
    pub ties: u64,
}

impl Score {
    /// Total rounds counted by this snapshot.
    #[must_use]
    pub const fn rounds(&self) -> u64 {
        self.player_wins
            .saturating_add(self.computer_wins)
            .saturating_add(self.ties)
    }

    /// Count for a single outcome.
    #[must_use]
    pub const fn count(&self, outcome: Outcome) -> u64 {
        match outcome {
            Outcome::PlayerWin => self.player_wins,
            Outcome::ComputerWin => self.computer_wins,
            Outcome::Tie => self.ties,
        }
    }
}

/// The mutable score model.
///
/// Counters start at zero and only grow. There is no reset or decrement:
/// a new session starts from a new scoreboard.
#[derive(Debug, Clone, Copy, Default)]
pub struct Scoreboard {
    score: Score,
}

impl Scoreboard {
    /// Create a scoreboard with all counters at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the current counters.
    #[must_use]
    pub const fn current(&self) -> Score {
        self.score
    }

    /// Count one round with the given outcome.
    pub fn apply(&mut self, outcome: Outcome) {
        let counter = match outcome {
            Outcome::PlayerWin => &mut self.score.player_wins,
            Outcome::ComputerWin => &mut self.score.computer_wins,
            Outcome::Tie => &mut self.score.ties,
        };
        *counter = counter.saturating_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_zero() {
        let board = Scoreboard::new();
        assert_eq!(board.current(), Score::default());
        assert_eq!(board.current().rounds(), 0);
    }

    #[test]
    fn test_apply_increments_one_counter() {
        let mut board = Scoreboard::new();

        board.apply(Outcome::PlayerWin);
        assert_eq!(
            board.current(),
            Score {
                player_wins: 1,
                computer_wins: 0,
                ties: 0
            }
        );

        board.apply(Outcome::Tie);
        board.apply(Outcome::Tie);
        board.apply(Outcome::ComputerWin);
        let score = board.current();
        assert_eq!(score.count(Outcome::PlayerWin), 1);
        assert_eq!(score.count(Outcome::ComputerWin), 1);
        assert_eq!(score.count(Outcome::Tie), 2);
        assert_eq!(score.rounds(), 4);
    }

    #[test]
    fn test_rounds_saturates() {
        let score = Score {
            player_wins: u64::MAX,
            computer_wins: 1,
            ties: 1,
        };
        assert_eq!(score.rounds(), u64::MAX);

        let mut board = Scoreboard {
            score: Score {
                ties: u64::MAX,
                ..Score::default()
            },
        };
        board.apply(Outcome::Tie);
        board.apply(Outcome::PlayerWin);
        assert_eq!(board.current().ties, u64::MAX);
        assert_eq!(board.current().rounds(), u64::MAX);
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut board = Scoreboard::new();
        let before = board.current();
        board.apply(Outcome::ComputerWin);
        assert_eq!(before.computer_wins, 0);
        assert_eq!(board.current().computer_wins, 1);
    }
}
