//! Attempt accounting shared by every puzzle engine.
//!
//! Two counters are tracked:
//! - **valid attempts**: guesses the rules engine evaluated and charged for
//! - **total attempts**: turns taken, including malformed replies
//!
//! A session is exhausted once either counter reaches its limit. The hard cap
//! on total attempts bounds every session, no matter how many replies fail
//! to parse.

use serde::{Deserialize, Serialize};

use super::config::HARD_CAP_MAX_ATTEMPTS;

/// Valid/total attempt counters with their limits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttemptBudget {
    valid: u32,
    total: u32,
    max_valid: u32,
    hard_cap: u32,
}

impl AttemptBudget {
    /// Create a budget with the default hard cap.
    #[must_use]
    pub fn new(max_valid: u32) -> Self {
        Self::with_hard_cap(max_valid, HARD_CAP_MAX_ATTEMPTS)
    }

    /// Create a budget with an explicit hard cap on total attempts.
    #[must_use]
    pub fn with_hard_cap(max_valid: u32, hard_cap: u32) -> Self {
        assert!(max_valid > 0, "Must allow at least 1 valid attempt");
        assert!(hard_cap > 0, "Hard cap must be at least 1");

        Self {
            valid: 0,
            total: 0,
            max_valid,
            hard_cap,
        }
    }

    /// Zero both counters, keeping the limits.
    pub fn reset(&mut self) {
        self.valid = 0;
        self.total = 0;
    }

    /// Charge one evaluated guess.
    ///
    /// A valid attempt always belongs to a turn, so the total is raised
    /// alongside when a caller charges without opening a turn first.
    pub fn record_valid(&mut self) {
        self.valid += 1;
        if self.total < self.valid {
            self.total = self.valid;
        }
    }

    /// Spend one turn.
    pub fn record_turn(&mut self) {
        self.total += 1;
    }

    /// Number of evaluated guesses so far.
    #[must_use]
    pub fn valid(&self) -> u32 {
        self.valid
    }

    /// Number of turns taken so far.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.total
    }

    /// Puzzle-specific limit on valid attempts.
    #[must_use]
    pub fn max_valid(&self) -> u32 {
        self.max_valid
    }

    /// Global limit on total attempts.
    #[must_use]
    pub fn hard_cap(&self) -> u32 {
        self.hard_cap
    }

    /// Valid attempts left before the puzzle limit.
    #[must_use]
    pub fn remaining(&self) -> u32 {
        self.max_valid.saturating_sub(self.valid)
    }

    /// Has either limit been reached?
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.valid >= self.max_valid || self.total >= self.hard_cap
    }
}
