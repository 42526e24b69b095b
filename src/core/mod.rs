//! Core types shared by every puzzle: attempt accounting, session
//! configuration, and deterministic randomness.

pub mod attempts;
pub mod config;
pub mod rng;

pub use attempts::AttemptBudget;
pub use config::{
    SessionConfig, CONNECTIONS_MAX_ATTEMPTS, HARD_CAP_MAX_ATTEMPTS, RESPONSE_TIMEOUT,
    WORDLE_MAX_ATTEMPTS,
};
pub use rng::PuzzleRng;
