//! Error types for puzzle engines and play sessions.
//!
//! Errors split along the recovery line:
//! - `ValidationError` and `ParseError` are turn-level. The session driver
//!   narrates them back to the model and spends the turn.
//! - `ResponderError` and `TemplateError` are session-level. They abort
//!   the session and surface as `SessionError`.
//!
//! The `Display` output of turn-level errors is shown to the model verbatim,
//! so those messages are written as instructions.

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

// ---------------------------------------------------------------------------
// Turn-level errors
// ---------------------------------------------------------------------------

/// A guess the rules engine refused to evaluate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("The word must contain only letters. You provided: {word}")]
    NotAlphabetic { word: String },

    #[error("The word must be {expected} letters long. The word {word} is {len} letters long")]
    WrongLength {
        word: String,
        len: usize,
        expected: usize,
    },

    #[error("The word {word} is not in the dictionary of valid words")]
    NotInLexicon { word: String },

    #[error("You already guessed that word")]
    AlreadyGuessed { word: String },

    #[error("You must guess exactly {expected} words, you provided {count}: {words}")]
    WrongGroupSize {
        count: usize,
        expected: usize,
        words: String,
    },

    #[error("You already found the category {category}")]
    CategoryAlreadyFound { category: String },
}

/// The assistant reply did not contain a `Guess:` line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "Couldn't parse your response.\n\
     Please make sure to provide the response using the following format:\n\
     Guess: YOUR_GUESS_HERE"
)]
pub struct ParseError;

/// Recoverable failure of a single turn.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TurnError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

// ---------------------------------------------------------------------------
// Session-level errors
// ---------------------------------------------------------------------------

/// Failure of the external chat responder.
#[derive(Debug, Error)]
pub enum ResponderError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("responder returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("no response within {}s", after.as_secs())]
    Timeout { after: Duration },

    #[error("scripted responder ran out of replies after {served} turns")]
    Exhausted { served: usize },
}

/// Failure to render a prompt template.
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Template kind {0} not found")]
    UnknownKind(String),

    #[error("template {kind} requires parameter {param}")]
    MissingParam { kind: String, param: String },

    #[error("template {kind} has an unbalanced brace at byte {offset}")]
    Malformed { kind: String, offset: usize },

    #[error("failed to read templates from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A session that could not be played to a score.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Responder(#[from] ResponderError),

    #[error(transparent)]
    Template(#[from] TemplateError),

    #[error("failed to encode transcript: {0}")]
    Encode(#[from] serde_json::Error),
}

// ---------------------------------------------------------------------------
// Construction errors
// ---------------------------------------------------------------------------

/// Puzzle content that cannot form a playable game.
#[derive(Debug, Error)]
pub enum PuzzleError {
    #[error("invalid target word: {0}")]
    InvalidTarget(#[source] ValidationError),

    #[error("You must provide exactly {expected} categories, got {count}")]
    CategoryCount { count: usize, expected: usize },

    #[error("Each category must have exactly {expected} words, {category} has {count}")]
    CategorySize {
        category: String,
        count: usize,
        expected: usize,
    },

    #[error("session limits must be at least 1, got max_attempts={max_attempts} hard_cap={hard_cap}")]
    InvalidConfig { max_attempts: u32, hard_cap: u32 },

    #[error("lexicon is empty")]
    EmptyLexicon,

    #[error("invalid {puzzle} content: {source}")]
    Content {
        puzzle: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to read lexicon from {path}: {source}")]
    Lexicon {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
