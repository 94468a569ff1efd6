//! CLI shells for Roshambo.

pub(crate) mod assets;
pub(crate) mod logging;
pub(crate) mod plain;
pub(crate) mod tui;

mod output;

use clap::ValueEnum;
use roshambo::{Move, SourceError};
use std::error::Error;
use std::fmt;

/// Output format for the plain shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// One JSON object per line.
    Json,
}

/// A player action coming out of a shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Action {
    /// Play a round with this move.
    Play(Move),
    /// End the session.
    Quit,
}

impl Action {
    /// Parse a typed command: a move name or shorthand, or `quit`/`q`.
    pub(crate) fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        if input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("q") {
            return Some(Action::Quit);
        }
        input.parse().ok().map(Action::Play)
    }
}

/// CLI error type.
#[derive(Debug)]
pub(crate) struct CliError {
    message: String,
}

impl CliError {
    /// Create a new CLI error.
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for CliError {}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        Self::new(e.to_string())
    }
}

impl From<SourceError> for CliError {
    fn from(e: SourceError) -> Self {
        Self::new(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::new(format!("JSON serialization failed: {e}"))
    }
}

impl From<log::SetLoggerError> for CliError {
    fn from(e: log::SetLoggerError) -> Self {
        Self::new(format!("Failed to initialize logging: {e}"))
    }
}
