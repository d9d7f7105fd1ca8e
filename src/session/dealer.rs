//! Random source for secrets.
//!
//! Uses ChaCha8: seeded dealers replay the same sequence of secrets, entropy
//! seeded dealers give every game an independent draw.

use crate::core::Secret;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Deals a fresh secret for every game.
#[derive(Clone, Debug)]
pub struct SecretDealer {
    inner: ChaCha8Rng,
}

impl SecretDealer {
    /// Dealer seeded from operating system entropy.
    pub fn from_entropy() -> Self {
        Self {
            inner: ChaCha8Rng::from_entropy(),
        }
    }

    /// Deterministic dealer: the same seed deals the same secrets.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Draw the next secret. Each draw is a new uniform permutation.
    pub fn deal(&mut self) -> Secret {
        Secret::random(&mut self.inner)
    }
}

impl Default for SecretDealer {
    fn default() -> Self {
        Self::from_entropy()
    }
}
