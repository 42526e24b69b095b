//! Chat sessions that put a puzzle engine in front of a model.
//!
//! A session driver owns one engine and one transcript. Each turn it
//! renders a prompt, asks the `Responder` for a reply, parses the
//! `Guess:` line and narrates the engine's verdict back. Records and
//! summaries turn finished sessions into benchmark results.

pub mod connections;
pub mod daily;
pub mod driver;
pub mod parse;
pub mod prompts;
pub mod record;
pub mod responder;
pub mod transcript;
pub mod wordle;

pub use connections::ConnectionsSession;
pub use daily::DailyPuzzle;
pub use driver::{PuzzleKind, SessionDriver};
pub use parse::{extract_guess, parse_group_guess, parse_word_guess, GUESS_MARKER};
pub use prompts::{kinds, TemplateParams, TemplateStore};
pub use record::{
    evaluate, record_session, records_to_json, summarize, ModelSummary, PuzzleSummary,
    SessionRecord,
};
pub use responder::{Responder, ScriptedResponder};
pub use transcript::{Message, Role, Transcript};
pub use wordle::WordleSession;
