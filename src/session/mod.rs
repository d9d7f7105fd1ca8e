//! Game sessions.
//!
//! A session wraps the pure core with the little state a game needs: the
//! secret, the attempt counter, the guess history and the recorded flag.
//! Every transition is an explicit method call; the caller decides when to
//! redraw from a [`SessionSnapshot`].

mod dealer;
mod machine;
mod snapshot;

pub use dealer::SecretDealer;
pub use machine::{GuessOutcome, Session};
pub use snapshot::SessionSnapshot;
