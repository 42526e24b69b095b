//! Session configuration.
//!
//! Each puzzle type has its own default number of valid attempts. The hard
//! cap on total attempts is global but injectable so tests can run with a
//! smaller one.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::attempts::AttemptBudget;
use crate::errors::PuzzleError;

/// Hard cap on turns per session, malformed replies included.
pub const HARD_CAP_MAX_ATTEMPTS: u32 = 10;

/// Upper bound a transport responder should wait for one reply.
pub const RESPONSE_TIMEOUT: Duration = Duration::from_secs(30);

/// Default valid attempts for a Wordle session.
pub const WORDLE_MAX_ATTEMPTS: u32 = 6;

/// Default valid attempts for a Connections session.
pub const CONNECTIONS_MAX_ATTEMPTS: u32 = 4;

/// Attempt limits for one play session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Valid (rule-evaluated) attempts allowed.
    pub max_attempts: u32,

    /// Total turns allowed, malformed replies included.
    pub hard_cap: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::for_wordle()
    }
}

impl SessionConfig {
    /// Defaults for a Wordle session (6 valid attempts).
    #[must_use]
    pub fn for_wordle() -> Self {
        Self {
            max_attempts: WORDLE_MAX_ATTEMPTS,
            hard_cap: HARD_CAP_MAX_ATTEMPTS,
        }
    }

    /// Defaults for a Connections session (4 valid attempts).
    #[must_use]
    pub fn for_connections() -> Self {
        Self {
            max_attempts: CONNECTIONS_MAX_ATTEMPTS,
            hard_cap: HARD_CAP_MAX_ATTEMPTS,
        }
    }

    /// Set the number of valid attempts.
    #[must_use]
    pub fn with_max_attempts(mut self, max: u32) -> Self {
        self.max_attempts = max;
        self
    }

    /// Set the hard cap on total attempts.
    #[must_use]
    pub fn with_hard_cap(mut self, cap: u32) -> Self {
        self.hard_cap = cap;
        self
    }

    /// Build a fresh attempt budget from these limits.
    ///
    /// Both limits must be non-zero; a config read from JSON is not checked
    /// until here.
    pub fn budget(&self) -> Result<AttemptBudget, PuzzleError> {
        if self.max_attempts == 0 || self.hard_cap == 0 {
            return Err(PuzzleError::InvalidConfig {
                max_attempts: self.max_attempts,
                hard_cap: self.hard_cap,
            });
        }
        Ok(AttemptBudget::with_hard_cap(self.max_attempts, self.hard_cap))
    }
}
