//! Cup Match: the four-cup sequence matching game
//!
//! Four symbols hide in a secret order. The player guesses orders and is
//! told how many positions are right, until the guess matches exactly.
//!
//! The crate follows a "pure core, imperative shell" split. Scoring,
//! validation and history are pure functions; a [`Session`] applies them
//! one explicit transition at a time; recording results and keeping
//! sessions between interactions happen at the edges.
//!
//! # Core Concepts
//!
//! - **Session**: one game, `AwaitingGuess` until solved, `Solved` after
//! - **Score**: count of positions where guess and secret agree
//! - **ResultRecorder**: appends a solved game to a results table, once
//! - **GameShell**: turns user actions into session calls and replies
//!
//! # Example
//!
//! ```rust
//! use cup_match::core::{GamePhase, Secret, ALPHABET};
//! use cup_match::Session;
//!
//! let mut session = Session::with_secret(Secret::from_symbols(ALPHABET).unwrap());
//!
//! assert_eq!(session.submit_guess("abdc").unwrap().score.value(), 2);
//! assert_eq!(session.submit_guess("dcba").unwrap().score.value(), 0);
//!
//! let outcome = session.submit_guess("abcd").unwrap();
//! assert_eq!(outcome.phase, GamePhase::Solved);
//! assert!(session.submit_guess("abcd").is_err());
//! ```

pub mod checkpoint;
pub mod config;
pub mod core;
pub mod error;
pub mod logging;
pub mod record;
pub mod session;
pub mod shell;

// Re-export commonly used types
pub use config::GameConfig;
pub use crate::core::{GamePhase, Score, State};
pub use error::GameError;
pub use record::{ResultRecord, ResultRecorder, ResultStore};
pub use session::{GuessOutcome, Session, SessionSnapshot};
pub use shell::{Action, GameShell, Notice, Reply};
