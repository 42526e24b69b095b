//! Puzzle engine trait for game implementations.
//!
//! Puzzles implement `PuzzleEngine` to define their rules:
//! - What counts as a well-formed guess
//! - How a guess is evaluated
//! - When the puzzle is over
//!
//! Attempt accounting is not reimplemented per puzzle; each engine embeds an
//! `AttemptBudget` and exposes it through `budget` / `budget_mut`.

use serde::{Deserialize, Serialize};

use crate::core::AttemptBudget;
use crate::errors::ValidationError;

/// Score of a finished session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Score {
    /// Puzzle solved within the budget.
    Win,
    /// Budget exhausted without solving.
    Loss,
}

impl Score {
    /// Numeric score as persisted: 1 for a win, 0 for a loss.
    #[must_use]
    pub const fn value(self) -> u8 {
        match self {
            Score::Win => 1,
            Score::Loss => 0,
        }
    }

    /// Check if the session was won.
    #[must_use]
    pub const fn is_win(self) -> bool {
        matches!(self, Score::Win)
    }
}

/// Puzzle engine trait.
///
/// ## Implementation Notes
///
/// - `reset`: Clear mutable puzzle state and the attempt counters, but keep
///   static content (lexicon, categories)
/// - `guess`: Reject malformed input with `ValidationError` without charging
///   a valid attempt
/// - `is_over`: Default is budget exhaustion; puzzles with a win condition
///   that ends play early extend it
pub trait PuzzleEngine {
    /// Structured guess accepted by the rules.
    type Guess: ?Sized;

    /// Result of evaluating a guess.
    type Outcome;

    /// Restore the puzzle to its initial state.
    fn reset(&mut self);

    /// Evaluate a guess.
    fn guess(&mut self, guess: &Self::Guess) -> Result<Self::Outcome, ValidationError>;

    /// Attempt counters.
    fn budget(&self) -> &AttemptBudget;

    /// Mutable attempt counters.
    fn budget_mut(&mut self) -> &mut AttemptBudget;

    /// Check if play must stop.
    fn is_over(&self) -> bool {
        self.budget().is_exhausted()
    }

    // === Convenience Methods ===

    /// Spend one turn.
    fn start_turn(&mut self) {
        self.budget_mut().record_turn();
    }

    /// Valid attempts left before the puzzle limit.
    fn remaining_attempts(&self) -> u32 {
        self.budget().remaining()
    }
}
