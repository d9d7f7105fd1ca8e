//! The session state machine.

use crate::core::{
    parse_guess, GamePhase, GuessHistory, HistoryEntry, Score, Secret, State,
};
use crate::error::GameError;
use crate::session::dealer::SecretDealer;
use crate::session::snapshot::SessionSnapshot;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

/// Result of a successfully scored guess.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GuessOutcome {
    /// Attempt number the guess was recorded under
    pub attempt: u32,
    pub score: Score,
    /// Phase after the guess was applied
    pub phase: GamePhase,
}

impl GuessOutcome {
    pub fn solved(&self) -> bool {
        self.phase.is_final()
    }
}

/// One player's game.
///
/// A session is owned by whoever handles the current user action and is
/// mutated synchronously. Between interactions it can be checkpointed; the
/// dealer is not part of the checkpoint and restarts from entropy.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Session {
    id: Uuid,
    secret: Secret,
    phase: GamePhase,
    attempt_count: u32,
    history: GuessHistory,
    recorded: bool,
    started_at: DateTime<Utc>,
    solved_at: Option<DateTime<Utc>>,
    #[serde(skip)]
    dealer: SecretDealer,
}

impl Session {
    /// Start a game with a secret drawn from operating system entropy.
    pub fn new() -> Self {
        Self::with_dealer(SecretDealer::from_entropy())
    }

    /// Start a game whose secrets come from a deterministic stream.
    pub fn seeded(seed: u64) -> Self {
        Self::with_dealer(SecretDealer::seeded(seed))
    }

    /// Start a game with a known secret. Later resets draw from entropy.
    pub fn with_secret(secret: Secret) -> Self {
        Self::fresh(secret, SecretDealer::from_entropy())
    }

    fn with_dealer(mut dealer: SecretDealer) -> Self {
        let secret = dealer.deal();
        Self::fresh(secret, dealer)
    }

    fn fresh(secret: Secret, dealer: SecretDealer) -> Self {
        Self {
            id: Uuid::new_v4(),
            secret,
            phase: GamePhase::AwaitingGuess,
            attempt_count: 0,
            history: GuessHistory::new(),
            recorded: false,
            started_at: Utc::now(),
            solved_at: None,
            dealer,
        }
    }

    /// Submit a guess.
    ///
    /// Fails without touching the session when the game is already solved
    /// or when the text is not a permutation of the alphabet.
    pub fn submit_guess(&mut self, candidate: &str) -> Result<GuessOutcome, GameError> {
        if !self.phase.accepts_guesses() {
            return Err(GameError::GuessRejected {
                phase: self.phase.name().to_string(),
            });
        }

        let guess = parse_guess(candidate)?;
        let score = Score::compute(&self.secret, &guess);
        let now = Utc::now();

        self.attempt_count += 1;
        self.history = self.history.record(HistoryEntry {
            attempt: self.attempt_count,
            guess: guess.to_string(),
            score,
            submitted_at: now,
        });

        if score.is_perfect() {
            self.phase = GamePhase::Solved;
            self.solved_at = Some(now);
            info!(game = %self.id, attempts = self.attempt_count, "Secret found");
        } else {
            debug!(game = %self.id, attempt = self.attempt_count, %score, "Guess scored");
        }

        Ok(GuessOutcome {
            attempt: self.attempt_count,
            score,
            phase: self.phase,
        })
    }

    /// Start over with a freshly drawn secret.
    pub fn reset(&mut self) {
        let previous = self.id;
        self.secret = self.dealer.deal();
        self.id = Uuid::new_v4();
        self.phase = GamePhase::AwaitingGuess;
        self.attempt_count = 0;
        self.history = GuessHistory::new();
        self.recorded = false;
        self.started_at = Utc::now();
        self.solved_at = None;
        info!(previous = %previous, game = %self.id, "Game reset");
    }

    /// Render-able view of the session. Never includes the secret.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            id: self.id,
            phase: self.phase,
            solved: self.is_solved(),
            attempt_count: self.attempt_count,
            history: self.history.entries().to_vec(),
            recorded: self.recorded,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_solved(&self) -> bool {
        self.phase == GamePhase::Solved
    }

    pub fn attempt_count(&self) -> u32 {
        self.attempt_count
    }

    pub fn history(&self) -> &GuessHistory {
        &self.history
    }

    /// Whether a result has already been recorded for this game.
    pub fn is_recorded(&self) -> bool {
        self.recorded
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn solved_at(&self) -> Option<DateTime<Utc>> {
        self.solved_at
    }

    pub(crate) fn mark_recorded(&mut self) {
        self.recorded = true;
    }

    #[cfg(test)]
    pub(crate) fn secret(&self) -> &Secret {
        &self.secret
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
