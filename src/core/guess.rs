//! Guess validation.
//!
//! Candidate text is checked with Stillwater's `Validation` so the player
//! sees every problem with their input at once instead of one per attempt.

use crate::core::symbol::{Guess, Symbol, ALPHABET, SEQUENCE_LEN};
use crate::error::GameError;
use std::collections::BTreeSet;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;

/// A single reason a candidate is not a permutation of the alphabet.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GuessViolation {
    #[error("expected {expected} symbols, found {found}")]
    WrongLength { expected: usize, found: usize },

    #[error("'{symbol}' at position {position} is not one of A, B, C, D")]
    UnknownSymbol { symbol: char, position: usize },

    #[error("'{symbol}' appears more than once")]
    DuplicateSymbol { symbol: Symbol },
}

type Checked = Validation<(), NonEmptyVec<GuessViolation>>;

fn check_length(chars: &[char]) -> Checked {
    if chars.len() == SEQUENCE_LEN {
        Validation::success(())
    } else {
        Validation::fail(GuessViolation::WrongLength {
            expected: SEQUENCE_LEN,
            found: chars.len(),
        })
    }
}

fn check_known(position: usize, c: char) -> Checked {
    match Symbol::from_char(c) {
        Some(_) => Validation::success(()),
        None => Validation::fail(GuessViolation::UnknownSymbol {
            symbol: c,
            position: position + 1,
        }),
    }
}

fn check_repeats(chars: &[char]) -> Vec<Checked> {
    let mut seen = BTreeSet::new();
    let mut reported = BTreeSet::new();
    let mut checks = Vec::new();
    for symbol in chars.iter().filter_map(|&c| Symbol::from_char(c)) {
        if !seen.insert(symbol) && reported.insert(symbol) {
            checks.push(Validation::fail(GuessViolation::DuplicateSymbol { symbol }));
        }
    }
    checks
}

/// Check candidate text against every rule, accumulating ALL violations.
///
/// ASCII whitespace is ignored and letters are case-insensitive.
pub fn validate_guess(candidate: &str) -> Result<Guess, Vec<GuessViolation>> {
    let chars: Vec<char> = candidate
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();

    let mut checks = vec![check_length(&chars)];
    checks.extend(chars.iter().enumerate().map(|(i, &c)| check_known(i, c)));
    checks.extend(check_repeats(&chars));

    match Validation::all_vec(checks) {
        Validation::Success(_) => {
            let mut symbols = ALPHABET;
            for (slot, &c) in symbols.iter_mut().zip(&chars) {
                // Every character was accepted by check_known above.
                if let Some(symbol) = Symbol::from_char(c) {
                    *slot = symbol;
                }
            }
            Ok(Guess::new_unchecked(symbols))
        }
        Validation::Failure(errors) => Err(errors.iter().cloned().collect()),
    }
}

/// Parse candidate text into a [`Guess`].
///
/// Fails with [`GameError::InvalidGuessFormat`] carrying every violation.
pub fn parse_guess(candidate: &str) -> Result<Guess, GameError> {
    validate_guess(candidate).map_err(|violations| GameError::InvalidGuessFormat { violations })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_any_permutation() {
        let guess = validate_guess("dcba").unwrap();
        assert_eq!(guess.to_string(), "DCBA");
    }

    #[test]
    fn ignores_whitespace_and_case() {
        let guess = validate_guess(" a B\td c ").unwrap();
        assert_eq!(guess.to_string(), "ABDC");
    }

    #[test]
    fn rejects_short_input() {
        let violations = validate_guess("abc").unwrap_err();
        assert_eq!(
            violations,
            vec![GuessViolation::WrongLength {
                expected: 4,
                found: 3
            }]
        );
    }

    #[test]
    fn rejects_empty_input() {
        let violations = validate_guess("").unwrap_err();
        assert!(violations
            .iter()
            .any(|v| matches!(v, GuessViolation::WrongLength { found: 0, .. })));
    }

    #[test]
    fn reports_unknown_symbols_with_position() {
        let violations = validate_guess("abcx").unwrap_err();
        assert_eq!(
            violations,
            vec![GuessViolation::UnknownSymbol {
                symbol: 'x',
                position: 4
            }]
        );
    }

    #[test]
    fn reports_each_duplicate_once() {
        let violations = validate_guess("aaab").unwrap_err();
        assert_eq!(
            violations,
            vec![GuessViolation::DuplicateSymbol { symbol: Symbol::A }]
        );
    }

    #[test]
    fn parse_guess_wraps_violations() {
        let err = parse_guess("abcx").unwrap_err();
        assert!(matches!(err, GameError::InvalidGuessFormat { ref violations } if violations.len() == 1));
    }

    #[test]
    fn accumulates_all_violations() {
        let violations = validate_guess("aaz").unwrap_err();

        let has_length = violations
            .iter()
            .any(|v| matches!(v, GuessViolation::WrongLength { .. }));
        let has_unknown = violations
            .iter()
            .any(|v| matches!(v, GuessViolation::UnknownSymbol { symbol: 'z', .. }));
        let has_duplicate = violations
            .iter()
            .any(|v| matches!(v, GuessViolation::DuplicateSymbol { .. }));

        assert_eq!(violations.len(), 3);
        assert!(has_length);
        assert!(has_unknown);
        assert!(has_duplicate);
    }
}
