//! Wordle session: one target word, positional feedback after each guess.

use tracing::{debug, info, warn};

use super::driver::{Conversation, PuzzleKind, SessionDriver};
use super::parse::parse_word_guess;
use super::prompts::{kinds, TemplateParams, TemplateStore};
use super::responder::Responder;
use super::transcript::{Role, Transcript};
use crate::errors::{SessionError, TurnError};
use crate::games::wordle::{feedback_lines, Feedback, WordleGame};
use crate::rules::{PuzzleEngine, Score};

/// Drives a `WordleGame` through a chat conversation.
#[derive(Clone, Debug)]
pub struct WordleSession {
    engine: WordleGame,
    conversation: Conversation,
}

impl WordleSession {
    /// Create a session over an engine with the given prompts.
    pub fn new(engine: WordleGame, templates: TemplateStore) -> Self {
        Self {
            engine,
            conversation: Conversation::new(templates),
        }
    }

    /// Create a session with the built-in Wordle prompts.
    pub fn with_default_prompts(engine: WordleGame) -> Self {
        Self::new(engine, TemplateStore::wordle())
    }

    /// The underlying engine.
    #[must_use]
    pub fn engine(&self) -> &WordleGame {
        &self.engine
    }

    /// Parse a reply and submit it to the engine.
    fn take_turn(&mut self, reply: &str) -> Result<(String, Feedback), TurnError> {
        let guess = parse_word_guess(reply)?;
        let feedback = self.engine.guess(&guess)?;
        Ok((guess, feedback))
    }
}

impl SessionDriver for WordleSession {
    fn puzzle(&self) -> PuzzleKind {
        PuzzleKind::Wordle
    }

    fn play(&mut self, responder: &mut dyn Responder) -> Result<Score, SessionError> {
        self.engine.reset();
        self.conversation.restart();

        let max_attempts = self.engine.budget().max_valid();
        info!(puzzle = %self.puzzle(), max_attempts, "session started");

        self.conversation.say(
            Role::System,
            kinds::SYSTEM,
            &TemplateParams::new().with("max_attempts", max_attempts),
        )?;

        while !self.engine.is_over() {
            self.conversation.narrate(
                kinds::USER_PROMPT,
                &TemplateParams::new().with("remaining_attempts", self.engine.remaining_attempts()),
            )?;
            self.engine.start_turn();

            let reply = self.conversation.ask(responder)?;
            let (guess, feedback) = match self.take_turn(&reply) {
                Ok(turn) => turn,
                Err(err) => {
                    warn!(turn = self.engine.budget().total(), error = %err, "guess rejected");
                    self.conversation.narrate(
                        kinds::USER_ERROR,
                        &TemplateParams::new().with("error", &err),
                    )?;
                    continue;
                }
            };
            debug!(turn = self.engine.budget().total(), %guess, "guess accepted");

            if self.engine.is_solved(&guess) {
                self.conversation.narrate(
                    kinds::USER_WIN,
                    &TemplateParams::new().with("word", &guess),
                )?;
                info!(
                    puzzle = %self.puzzle(),
                    attempts = self.engine.budget().total(),
                    "session won"
                );
                return Ok(Score::Win);
            }

            self.conversation.narrate(
                kinds::USER_INCORRECT_GUESS,
                &TemplateParams::new()
                    .with("guess", &guess)
                    .with("feedback", feedback_lines(&feedback)?),
            )?;
        }

        self.conversation.narrate(
            kinds::USER_LOSE,
            &TemplateParams::new().with("word", self.engine.target()),
        )?;
        info!(
            puzzle = %self.puzzle(),
            attempts = self.engine.budget().total(),
            "session lost"
        );
        Ok(Score::Loss)
    }

    fn transcript(&self) -> &Transcript {
        self.conversation.transcript()
    }

    fn total_attempts(&self) -> u32 {
        self.engine.budget().total()
    }

    fn hard_cap(&self) -> u32 {
        self.engine.budget().hard_cap()
    }
}
