//! # puzzle-bench
//!
//! Word-puzzle engines for benchmarking chat models.
//!
//! ## Design Principles
//!
//! 1. **Engines Know Rules, Drivers Know Conversation**: a `PuzzleEngine`
//!    validates and scores guesses. A `SessionDriver` turns that into a
//!    chat and never interprets puzzle rules itself.
//!
//! 2. **Every Session Ends**: malformed replies spend a turn, and a hard
//!    cap bounds the total number of turns.
//!
//! 3. **Deterministic Replay**: puzzle selection is seeded, and a
//!    `ScriptedResponder` replays a saved transcript turn for turn.
//!
//! ## Modules
//!
//! - `core`: Attempt budgets, session configuration, RNG
//! - `rules`: PuzzleEngine trait and scoring
//! - `games`: Wordle and Connections engines
//! - `session`: Drivers, prompts, responders, records
//! - `errors`: Error types

pub mod core;
pub mod errors;
pub mod games;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    AttemptBudget, PuzzleRng, SessionConfig, HARD_CAP_MAX_ATTEMPTS, RESPONSE_TIMEOUT,
};

pub use crate::errors::{
    ParseError, PuzzleError, ResponderError, SessionError, TemplateError, TurnError,
    ValidationError,
};

pub use crate::games::connections::{Category, ConnectionsGame, GroupOutcome};
pub use crate::games::wordle::{evaluate as evaluate_guess, LetterFeedback, Lexicon, WordleGame};

pub use crate::rules::{PuzzleEngine, Score};

pub use crate::session::{
    ConnectionsSession, DailyPuzzle, Message, PuzzleKind, Responder, Role, ScriptedResponder,
    SessionDriver, SessionRecord, TemplateStore, Transcript, WordleSession,
};
