//! Sources of computer moves.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::SourceError;
use crate::game::Move;

/// Anything that can pick the computer's move for a round.
pub trait MoveSource {
    /// Draw the next computer move.
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot produce a move. The session
    /// does not count a round whose draw failed.
    fn draw(&mut self) -> Result<Move, SourceError>;
}

/// Uniform, independent draws from a single long-lived RNG.
#[derive(Debug, Clone)]
pub struct RandomSource {
    rng: StdRng,
}

impl RandomSource {
    /// Seed from operating-system entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Seed deterministically, for reproducible sessions.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl MoveSource for RandomSource {
    fn draw(&mut self) -> Result<Move, SourceError> {
        let index = self.rng.random_range(0..Move::ALL.len());
        Ok(Move::ALL[index])
    }
}

/// A fixed sequence of moves, replayed in order.
///
/// Fails with [`SourceError::Exhausted`] once every move has been drawn.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    moves: VecDeque<Move>,
}

impl ScriptedSource {
    /// Create a source that yields `moves` in order.
    #[must_use]
    pub fn new(moves: impl IntoIterator<Item = Move>) -> Self {
        Self {
            moves: moves.into_iter().collect(),
        }
    }

    /// Number of moves not yet drawn.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.moves.len()
    }
}

impl MoveSource for ScriptedSource {
    fn draw(&mut self) -> Result<Move, SourceError> {
        self.moves.pop_front().ok_or(SourceError::Exhausted)
    }
}
