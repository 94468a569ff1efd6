//! Output formatting utilities for CLI.

use roshambo::{RoundRecord, Score};
use serde::Serialize;

/// Counter labels, in display order.
pub(super) const PLAYER_WINS: &str = "Player Wins:";
pub(super) const COMPUTER_WINS: &str = "Computer Wins:";
pub(super) const TIES: &str = "Ties:";

/// JSON-serializable round line.
#[derive(Debug, Serialize)]
pub(super) struct JsonRound<'a> {
    /// Round number, starting at 1.
    pub(super) round: u64,
    /// The round itself.
    #[serde(flatten)]
    pub(super) record: &'a RoundRecord,
    /// Score after the round.
    pub(super) score: Score,
}

/// JSON-serializable session summary.
#[derive(Debug, Serialize)]
pub(super) struct JsonSummary {
    /// Rounds played.
    pub(super) rounds: u64,
    /// Final score.
    pub(super) score: Score,
}

impl JsonSummary {
    /// Create from a final score.
    pub(super) fn from_score(score: Score) -> Self {
        Self {
            rounds: score.rounds(),
            score,
        }
    }
}

/// The three counters on one line.
pub(super) fn format_stats(score: Score) -> String {
    format!(
        "{PLAYER_WINS} {}  {COMPUTER_WINS} {}  {TIES} {}",
        score.player_wins, score.computer_wins, score.ties
    )
}

/// A round as human-readable text: description, then the counters.
pub(super) fn format_round_text(record: &RoundRecord, score: Score) -> String {
    format!("{}\n{}\n", record.description, format_stats(score))
}

/// Final score as human-readable text.
pub(super) fn format_summary_text(score: Score) -> String {
    let mut output = String::new();

    output.push_str(&format!("Final score after {} rounds\n", score.rounds()));
    output.push_str(&format!("  {PLAYER_WINS} {}\n", score.player_wins));
    output.push_str(&format!("  {COMPUTER_WINS} {}\n", score.computer_wins));
    output.push_str(&format!("  {TIES} {}\n", score.ties));

    output
}
