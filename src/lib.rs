// Allow unwrap in tests (test code is not production)
#![cfg_attr(test, allow(clippy::unwrap_used))]
//! Roshambo: Rock Paper Scissors against a uniformly random opponent.
//!
//! The crate is the game core. Presentation shells live in the binary and
//! drive the core through [`Session`] and [`RoundListener`].
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │   Presentation shell (TUI / plain)  │
//! ├─────────────────────────────────────┤
//! │   Session controller + listeners    │
//! ├──────────────────┬──────────────────┤
//! │ Rules + Score    │  Move source     │
//! └──────────────────┴──────────────────┘
//! ```

pub mod error;
pub mod game;

pub use error::SourceError;

// Re-export key game types at crate root for convenience
pub use game::{
    Move, MoveSource, Outcome, RandomSource, RoundListener, RoundLog, RoundRecord, Score,
    Scoreboard, ScriptedSource, Session, describe, resolve,
};
