//! Pure game core.
//!
//! This module contains the side-effect free part of the game:
//! - Symbols, secrets and guesses
//! - Guess validation that reports every violation at once
//! - Positional scoring
//! - Immutable guess history
//! - The game phase via the `State` trait
//!
//! Nothing here performs I/O.

mod guess;
mod history;
mod score;
mod state;
mod symbol;

pub use guess::{parse_guess, validate_guess, GuessViolation};
pub use history::{GuessHistory, HistoryEntry};
pub use score::Score;
pub use state::{GamePhase, State};
pub use symbol::{
    all_permutations, is_permutation, Guess, NotAPermutation, Secret, Symbol, ALPHABET,
    SEQUENCE_LEN,
};
