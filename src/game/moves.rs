//! Moves and round outcomes.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// One of the three canonical choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Move {
    /// Breaks scissors.
    Rock,
    /// Covers rock.
    Paper,
    /// Cuts paper.
    Scissors,
}

impl Move {
    /// All moves in canonical order. A draw index `i` maps to `ALL[i]`.
    pub const ALL: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

    /// Move for a draw index in `0..3`.
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Move::Rock),
            1 => Some(Move::Paper),
            2 => Some(Move::Scissors),
            _ => None,
        }
    }

    /// Capitalized name shown to the player.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Move::Rock => "Rock",
            Move::Paper => "Paper",
            Move::Scissors => "Scissors",
        }
    }

    /// Verb used when this move wins a round.
    #[must_use]
    pub const fn verb(self) -> &'static str {
        match self {
            Move::Rock => "breaks",
            Move::Paper => "covers",
            Move::Scissors => "cuts",
        }
    }

    /// The move this one beats: rock → scissors → paper → rock.
    #[must_use]
    pub const fn victim(self) -> Self {
        match self {
            Move::Rock => Move::Scissors,
            Move::Paper => Move::Rock,
            Move::Scissors => Move::Paper,
        }
    }

    /// Whether this move beats `other`.
    #[must_use]
    pub fn beats(self, other: Move) -> bool {
        self.victim() == other
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when text does not name a move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseMoveError {
    /// The rejected input.
    pub input: String,
}

impl fmt::Display for ParseMoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown move: {:?}", self.input)
    }
}

impl std::error::Error for ParseMoveError {}

impl FromStr for Move {
    type Err = ParseMoveError;

    /// Accepts a label in any case, or the shorthands `r`, `p`, `s`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rock" | "r" => Ok(Move::Rock),
            "paper" | "p" => Ok(Move::Paper),
            "scissors" | "s" => Ok(Move::Scissors),
            _ => Err(ParseMoveError {
                input: s.to_string(),
            }),
        }
    }
}

/// Result of a round from the player's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// Player's move beats the computer's.
    PlayerWin,
    /// Computer's move beats the player's.
    ComputerWin,
    /// Both chose the same move.
    Tie,
}
