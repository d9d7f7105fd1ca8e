//! Guess history.
//!
//! History is immutable: `record` returns a new history with the entry
//! added, newest first.

use crate::core::score::Score;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Record of a single scored guess.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// 1-based attempt number within the game
    pub attempt: u32,
    /// Canonical upper-case text of the guess
    pub guess: String,
    /// How many positions matched
    pub score: Score,
    /// When the guess was scored
    pub submitted_at: DateTime<Utc>,
}

/// Scored guesses of one game, newest first.
///
/// # Example
///
/// ```rust
/// use cup_match::core::{GuessHistory, HistoryEntry, Score};
/// use chrono::Utc;
///
/// let history = GuessHistory::new();
/// let history = history.record(HistoryEntry {
///     attempt: 1,
///     guess: "ABDC".to_string(),
///     score: Score::PERFECT,
///     submitted_at: Utc::now(),
/// });
///
/// assert_eq!(history.len(), 1);
/// assert!(history.is_solved());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GuessHistory {
    entries: Vec<HistoryEntry>,
}

impl GuessHistory {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Record an entry, returning a new history.
    ///
    /// The existing history is left untouched; the entry is placed in front.
    pub fn record(&self, entry: HistoryEntry) -> Self {
        let mut entries = Vec::with_capacity(self.entries.len() + 1);
        entries.push(entry);
        entries.extend(self.entries.iter().cloned());
        Self { entries }
    }

    /// All entries, newest first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.first()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Highest score reached so far.
    pub fn best_score(&self) -> Option<Score> {
        self.entries.iter().map(|e| e.score).max()
    }

    /// True iff some entry found the secret.
    pub fn is_solved(&self) -> bool {
        self.entries.iter().any(|e| e.score.is_perfect())
    }
}
