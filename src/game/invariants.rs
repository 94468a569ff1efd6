//! Score invariants - sanity checks that detect bugs.
//!
//! Every resolved round must move the score by exactly one step. These
//! checks should NEVER fire for a score driven through [`Scoreboard::apply`];
//! if they do, the session is counting wrong.
//!
//! [`Scoreboard::apply`]: crate::game::Scoreboard::apply

use crate::game::{Outcome, Score};

/// Invariant violation error.
#[derive(Debug, Clone)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub message: String,
}

impl std::fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invariant violation: {}", self.message)
    }
}

impl std::error::Error for InvariantViolation {}

/// Check the transition of one round from `before` to `after`.
///
/// Returns a list of violations found, or empty if the round moved exactly
/// the counter for `outcome` up by one and left the other two alone.
#[must_use]
pub fn check_transition(before: Score, after: Score, outcome: Outcome) -> Vec<InvariantViolation> {
    let mut violations = Vec::new();

    for counted in [Outcome::PlayerWin, Outcome::ComputerWin, Outcome::Tie] {
        let old = before.count(counted);
        let new = after.count(counted);

        if new < old {
            violations.push(InvariantViolation {
                message: format!("{counted:?} count decreased from {old} to {new}"),
            });
            continue;
        }

        let expected = if counted == outcome { old.saturating_add(1) } else { old };
        if new != expected {
            violations.push(InvariantViolation {
                message: format!(
                    "{counted:?} count is {new}, expected {expected} after {outcome:?}"
                ),
            });
        }
    }

    if after.rounds() != before.rounds().saturating_add(1) {
        violations.push(InvariantViolation {
            message: format!(
                "Round total went from {} to {}, expected a single step",
                before.rounds(),
                after.rounds()
            ),
        });
    }

    violations
}

/// Assert a round transition is valid, panicking if it is not.
///
/// Only active in debug builds. No-op in release builds.
///
/// # Panics
///
/// Panics with detailed message if any invariant is violated.
#[cfg(debug_assertions)]
pub fn assert_transition(before: Score, after: Score, outcome: Outcome) {
    let violations = check_transition(before, after, outcome);
    if !violations.is_empty() {
        let messages: Vec<_> = violations.iter().map(|v| v.message.as_str()).collect();
        panic!("Score invariant violations:\n  - {}", messages.join("\n  - "));
    }
}

/// No-op in release builds.
#[cfg(not(debug_assertions))]
pub fn assert_transition(_before: Score, _after: Score, _outcome: Outcome) {}
