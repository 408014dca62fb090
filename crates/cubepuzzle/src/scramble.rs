//! Random scramble generation.

use std::fmt;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha12Rng;

use crate::{Move, format_moves};

/// Number of moves in a scramble.
pub const DEFAULT_SCRAMBLE_LENGTH: usize = 25;

/// Sequence of random moves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scramble {
    /// Seed used to generate the scramble, or `None` if it came from a
    /// caller-provided RNG.
    pub seed: Option<u64>,
    /// Moves to apply, in order.
    pub moves: Vec<Move>,
}

impl fmt::Display for Scramble {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_moves(&self.moves))
    }
}

impl Scramble {
    /// Generates `len` moves uniformly at random, with replacement.
    ///
    /// Consecutive moves may cancel each other out.
    pub fn random(rng: &mut impl Rng, len: usize) -> Self {
        Self {
            seed: None,
            moves: random_moves(rng, len),
        }
    }

    /// Generates a reproducible scramble from a seed.
    pub fn from_seed(seed: u64, len: usize) -> Self {
        Self {
            seed: Some(seed),
            moves: random_moves(&mut ChaCha12Rng::seed_from_u64(seed), len),
        }
    }

    /// Returns the number of moves in the scramble.
    pub fn len(&self) -> usize {
        self.moves.len()
    }
    /// Returns whether the scramble has no moves.
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }
}

fn random_moves(rng: &mut impl Rng, len: usize) -> Vec<Move> {
    (0..len)
        .map(|_| Move::ALL[rng.random_range(0..Move::ALL.len())])
        .collect()
}
