//! Symbols and the two arrangements built from them: the hidden secret
//! and the player's guess.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Number of positions in every arrangement.
pub const SEQUENCE_LEN: usize = 4;

/// One of the four symbols hidden under the cups.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Symbol {
    A,
    B,
    C,
    D,
}

/// The fixed alphabet, in canonical order.
pub const ALPHABET: [Symbol; SEQUENCE_LEN] = [Symbol::A, Symbol::B, Symbol::C, Symbol::D];

impl Symbol {
    /// Parse a symbol from a character, ignoring case.
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'A' => Some(Self::A),
            'B' => Some(Self::B),
            'C' => Some(Self::C),
            'D' => Some(Self::D),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Self::A => 'A',
            Self::B => 'B',
            Self::C => 'C',
            Self::D => 'D',
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

fn write_symbols(f: &mut fmt::Formatter<'_>, symbols: &[Symbol; SEQUENCE_LEN]) -> fmt::Result {
    for symbol in symbols {
        write!(f, "{symbol}")?;
    }
    Ok(())
}

/// The hidden permutation a player has to find.
///
/// Immutable once drawn. `Debug` is redacted so the secret never leaks
/// through logs. Deserializing rejects anything but a permutation.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "[Symbol; SEQUENCE_LEN]")]
pub struct Secret([Symbol; SEQUENCE_LEN]);

impl Secret {
    /// Draw a uniformly random permutation of the alphabet.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut symbols = ALPHABET;
        symbols.shuffle(rng);
        Self(symbols)
    }

    /// Build a secret from an explicit arrangement.
    ///
    /// Returns `None` unless `symbols` is a permutation of the alphabet.
    pub fn from_symbols(symbols: [Symbol; SEQUENCE_LEN]) -> Option<Self> {
        is_permutation(&symbols).then_some(Self(symbols))
    }

    pub fn symbols(&self) -> &[Symbol; SEQUENCE_LEN] {
        &self.0
    }
}

/// Arrangement that cannot be a secret.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("secret must use each of A, B, C, D exactly once, found {found}")]
pub struct NotAPermutation {
    pub found: String,
}

impl TryFrom<[Symbol; SEQUENCE_LEN]> for Secret {
    type Error = NotAPermutation;

    fn try_from(symbols: [Symbol; SEQUENCE_LEN]) -> Result<Self, Self::Error> {
        Self::from_symbols(symbols).ok_or_else(|| NotAPermutation {
            found: symbols.iter().map(|s| s.as_char()).collect(),
        })
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Secret(****)")
    }
}

/// A validated guess: always a permutation of the alphabet.
///
/// Construct one with [`crate::core::parse_guess`].
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Guess([Symbol; SEQUENCE_LEN]);

impl Guess {
    pub(crate) fn new_unchecked(symbols: [Symbol; SEQUENCE_LEN]) -> Self {
        Self(symbols)
    }

    pub fn symbols(&self) -> &[Symbol; SEQUENCE_LEN] {
        &self.0
    }
}

impl fmt::Display for Guess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_symbols(f, &self.0)
    }
}

impl From<&Secret> for Guess {
    fn from(secret: &Secret) -> Self {
        Self(secret.0)
    }
}

/// Every symbol of the alphabet appears exactly once.
pub fn is_permutation(symbols: &[Symbol]) -> bool {
    symbols.len() == SEQUENCE_LEN && ALPHABET.iter().all(|s| symbols.contains(s))
}

/// All 24 arrangements of the alphabet, in lexicographic order.
pub fn all_permutations() -> Vec<[Symbol; SEQUENCE_LEN]> {
    let mut out = Vec::with_capacity(24);
    for &a in &ALPHABET {
        for &b in &ALPHABET {
            for &c in &ALPHABET {
                for &d in &ALPHABET {
                    let candidate = [a, b, c, d];
                    if is_permutation(&candidate) {
                        out.push(candidate);
                    }
                }
            }
        }
    }
    out
}
