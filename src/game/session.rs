//! Session controller.
//!
//! A session owns the scoreboard and a move source. Each call to
//! [`Session::play_round`] is a complete transaction: draw, resolve, count,
//! describe, notify. If the draw fails nothing is counted and nobody is
//! notified.

use serde::Serialize;

use crate::error::SourceError;
use crate::game::invariants::assert_transition;
use crate::game::{Move, MoveSource, Outcome, Score, Scoreboard, describe, resolve};

/// Everything observable about one resolved round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundRecord {
    /// The player's move.
    pub player: Move,
    /// The computer's move.
    pub computer: Move,
    /// Who won.
    pub outcome: Outcome,
    /// Text shown in the round log.
    pub description: String,
}

/// Receives each resolved round together with the updated score.
pub trait RoundListener {
    /// Called once per resolved round, in resolution order.
    fn on_round(&mut self, record: &RoundRecord, score: Score);
}

/// Append-only log of round descriptions plus the latest score.
///
/// This is what a shell needs to draw its log area and counter fields.
#[derive(Debug, Clone, Default)]
pub struct RoundLog {
    lines: Vec<String>,
    score: Score,
}

impl RoundLog {
    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Descriptions in resolution order.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Score after the most recent round.
    #[must_use]
    pub const fn score(&self) -> Score {
        self.score
    }
}

impl RoundListener for RoundLog {
    fn on_round(&mut self, record: &RoundRecord, score: Score) {
        self.lines.push(record.description.clone());
        self.score = score;
    }
}

/// A game session against the computer.
#[derive(Debug)]
pub struct Session<S> {
    source: S,
    scoreboard: Scoreboard,
}

impl<S: MoveSource> Session<S> {
    /// Start a session with a zeroed score.
    #[must_use]
    pub fn new(source: S) -> Self {
        Self {
            source,
            scoreboard: Scoreboard::new(),
        }
    }

    /// Play one round with the player's move.
    ///
    /// # Errors
    ///
    /// Returns an error if the move source fails. The score is unchanged
    /// and `listener` is not called.
    pub fn play_round<L>(
        &mut self,
        player: Move,
        listener: &mut L,
    ) -> Result<RoundRecord, SourceError>
    where
        L: RoundListener + ?Sized,
    {
        let computer = self.source.draw()?;
        let outcome = resolve(player, computer);

        let before = self.scoreboard.current();
        self.scoreboard.apply(outcome);
        let score = self.scoreboard.current();
        assert_transition(before, score, outcome);

        let record = RoundRecord {
            player,
            computer,
            outcome,
            description: describe(player, computer, outcome),
        };
        log::debug!(
            "round {}: {player} vs {computer} -> {outcome:?}",
            score.rounds()
        );

        listener.on_round(&record, score);
        Ok(record)
    }

    /// Current score snapshot.
    #[must_use]
    pub fn score(&self) -> Score {
        self.scoreboard.current()
    }

    /// Rounds resolved so far.
    #[must_use]
    pub fn rounds(&self) -> u64 {
        self.scoreboard.current().rounds()
    }
}
