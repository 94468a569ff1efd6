//! Error types for the game core.

use std::fmt;

/// Failure of a [`MoveSource`](crate::MoveSource) to produce a computer move.
///
/// The random source never fails. Substituted sources may, and the session
/// leaves the score untouched when they do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceError {
    /// A scripted sequence has no moves left.
    Exhausted,
    /// The source failed for another reason.
    Failed(String),
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceError::Exhausted => write!(f, "move source exhausted"),
            SourceError::Failed(reason) => write!(f, "move source failed: {reason}"),
        }
    }
}

impl std::error::Error for SourceError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(SourceError::Exhausted.to_string(), "move source exhausted");
        assert_eq!(
            SourceError::Failed("entropy unavailable".into()).to_string(),
            "move source failed: entropy unavailable"
        );
    }
}
