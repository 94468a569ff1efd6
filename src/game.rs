//! Game layer for Roshambo.
//!
//! Implements a session of rounds against the computer:
//! - Moves and outcomes
//! - Round resolution and the round description text
//! - Score tallies
//! - Move sources (random and scripted)
//! - The session controller that ties them together

mod invariants;
mod moves;
mod rules;
mod score;
mod session;
mod source;

pub use invariants::{InvariantViolation, assert_transition, check_transition};
pub use moves::{Move, Outcome, ParseMoveError};
pub use rules::{describe, resolve};
pub use score::{Score, Scoreboard};
pub use session::{RoundListener, RoundLog, RoundRecord, Session};
pub use source::{MoveSource, RandomSource, ScriptedSource};
