//! Positional scoring.

use crate::core::symbol::{Guess, Secret, SEQUENCE_LEN};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of positions where a guess agrees with the secret.
///
/// There is no credit for a right symbol in the wrong position; only exact
/// positional matches count.
///
/// # Example
///
/// ```rust
/// use cup_match::core::{parse_guess, Score, Secret, ALPHABET};
///
/// let secret = Secret::from_symbols(ALPHABET).unwrap();
/// let guess = parse_guess("abdc").unwrap();
/// assert_eq!(Score::compute(&secret, &guess).value(), 2);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub struct Score(u8);

impl Score {
    /// Score that solves the puzzle.
    pub const PERFECT: Score = Score(SEQUENCE_LEN as u8);

    pub fn compute(secret: &Secret, guess: &Guess) -> Self {
        let matches = secret
            .symbols()
            .iter()
            .zip(guess.symbols())
            .filter(|(s, g)| s == g)
            .count();
        Score(matches as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn is_perfect(self) -> bool {
        self == Self::PERFECT
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.0, SEQUENCE_LEN)
    }
}
