//! The chat model behind a session.
//!
//! A `Responder` takes the full transcript and returns the assistant's next
//! message. Transport implementations own their timeout (see
//! `RESPONSE_TIMEOUT`) and report transport or non-2xx failures as
//! `ResponderError`; the driver never retries.

use std::collections::VecDeque;

use super::transcript::{Message, Role};
use crate::errors::ResponderError;

/// Produces the assistant's reply to a transcript.
pub trait Responder {
    /// Reply to the conversation so far.
    fn respond(&mut self, transcript: &[Message]) -> Result<Message, ResponderError>;
}

impl<F> Responder for F
where
    F: FnMut(&[Message]) -> Result<Message, ResponderError>,
{
    fn respond(&mut self, transcript: &[Message]) -> Result<Message, ResponderError> {
        self(transcript)
    }
}

/// Replays canned replies in order.
///
/// Useful for tests and for re-scoring saved transcripts. Fails with
/// `ResponderError::Exhausted` once the script runs out.
///
/// ```
/// use puzzle_bench::session::{Responder, ScriptedResponder};
///
/// let mut responder = ScriptedResponder::new(["Guess: crane"]);
/// let reply = responder.respond(&[]).unwrap();
///
/// assert_eq!(reply.content, "Guess: crane");
/// assert!(responder.respond(&[]).is_err());
/// ```
#[derive(Clone, Debug, Default)]
pub struct ScriptedResponder {
    replies: VecDeque<String>,
    served: usize,
}

impl ScriptedResponder {
    /// Create a responder from replies in the order they are served.
    pub fn new<I, S>(replies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            replies: replies.into_iter().map(Into::into).collect(),
            served: 0,
        }
    }

    /// Build a script from the assistant turns of a saved transcript.
    pub fn replay(transcript: &[Message]) -> Self {
        Self::new(
            transcript
                .iter()
                .filter(|m| m.role == Role::Assistant)
                .map(|m| m.content.clone()),
        )
    }

    /// Queue another reply.
    pub fn push(&mut self, reply: impl Into<String>) {
        self.replies.push_back(reply.into());
    }

    /// Number of replies served so far.
    #[must_use]
    pub fn served(&self) -> usize {
        self.served
    }

    /// Number of replies left.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.replies.len()
    }
}

impl Responder for ScriptedResponder {
    fn respond(&mut self, _transcript: &[Message]) -> Result<Message, ResponderError> {
        let reply = self.replies.pop_front().ok_or(ResponderError::Exhausted {
            served: self.served,
        })?;
        self.served += 1;
        Ok(Message::assistant(reply))
    }
}
