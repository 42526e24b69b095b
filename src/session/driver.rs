//! Session driver trait and the conversation both drivers share.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::prompts::{TemplateParams, TemplateStore};
use super::responder::Responder;
use super::transcript::{Message, Role, Transcript};
use crate::errors::{ResponderError, SessionError, TemplateError};
use crate::rules::Score;

/// Which puzzle a session plays.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PuzzleKind {
    Wordle,
    Connections,
}

impl PuzzleKind {
    /// Every puzzle kind, in reporting order.
    pub const ALL: [PuzzleKind; 2] = [PuzzleKind::Wordle, PuzzleKind::Connections];

    /// Lowercase name as persisted.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            PuzzleKind::Wordle => "wordle",
            PuzzleKind::Connections => "connections",
        }
    }
}

impl fmt::Display for PuzzleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Plays one puzzle against a responder, turn by turn.
///
/// ## Implementation Notes
///
/// - `play` resets the engine and transcript first, so a driver can be
///   replayed
/// - Turn-level failures (parse, validation) are narrated and never
///   returned; only responder and template failures end `play` early
/// - Every session ends within the engine's hard cap of turns
pub trait SessionDriver {
    /// The puzzle being played.
    fn puzzle(&self) -> PuzzleKind;

    /// Play a full session and score it.
    fn play(&mut self, responder: &mut dyn Responder) -> Result<Score, SessionError>;

    /// Messages exchanged so far.
    fn transcript(&self) -> &Transcript;

    /// Turns taken, malformed replies included.
    fn total_attempts(&self) -> u32;

    /// Maximum turns a session may take.
    fn hard_cap(&self) -> u32;
}

/// Templates plus the transcript they are rendered into.
#[derive(Clone, Debug)]
pub(crate) struct Conversation {
    templates: TemplateStore,
    transcript: Transcript,
}

impl Conversation {
    pub(crate) fn new(templates: TemplateStore) -> Self {
        Self {
            templates,
            transcript: Transcript::new(),
        }
    }

    pub(crate) fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub(crate) fn restart(&mut self) {
        self.transcript.clear();
    }

    /// Render a template and append it.
    pub(crate) fn say(
        &mut self,
        role: Role,
        kind: &str,
        params: &TemplateParams,
    ) -> Result<(), TemplateError> {
        let content = self.templates.render(kind, params)?;
        self.transcript.push(Message::new(role, content));
        Ok(())
    }

    /// Narrate to the model.
    pub(crate) fn narrate(&mut self, kind: &str, params: &TemplateParams) -> Result<(), TemplateError> {
        self.say(Role::User, kind, params)
    }

    /// Ask the responder for the next reply and append it.
    ///
    /// Returns the reply text.
    pub(crate) fn ask(&mut self, responder: &mut dyn Responder) -> Result<String, ResponderError> {
        let reply = responder.respond(self.transcript.messages())?;
        let content = reply.content.clone();
        self.transcript.push(reply);
        Ok(content)
    }
}
