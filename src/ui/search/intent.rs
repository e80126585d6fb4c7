use crate::catalog::Creature;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum SearchIntent {
    /// The input was emptied; drop any result or error and show the
    /// welcome panel again.
    Cleared,
    /// The quiet interval elapsed and a lookup was issued for `term`.
    LookupStarted { term: String },
    /// The current lookup resolved successfully.
    LookupSucceeded { creature: Creature },
    /// The current lookup failed; `message` is already user-facing.
    LookupFailed { message: String },
}

impl Intent for SearchIntent {}
