//! Connections session: group guesses until all four categories are found.

use tracing::{debug, info, warn};

use super::driver::{Conversation, PuzzleKind, SessionDriver};
use super::parse::parse_group_guess;
use super::prompts::{kinds, TemplateParams, TemplateStore};
use super::responder::Responder;
use super::transcript::{Role, Transcript};
use crate::errors::{SessionError, TurnError};
use crate::games::connections::{join_words, ConnectionsGame, GroupGuess, GroupOutcome};
use crate::rules::{PuzzleEngine, Score};

/// Drives a `ConnectionsGame` through a chat conversation.
#[derive(Clone, Debug)]
pub struct ConnectionsSession {
    engine: ConnectionsGame,
    conversation: Conversation,
}

impl ConnectionsSession {
    /// Create a session over an engine with the given prompts.
    pub fn new(engine: ConnectionsGame, templates: TemplateStore) -> Self {
        Self {
            engine,
            conversation: Conversation::new(templates),
        }
    }

    /// Create a session with the built-in Connections prompts.
    pub fn with_default_prompts(engine: ConnectionsGame) -> Self {
        Self::new(engine, TemplateStore::connections())
    }

    /// The underlying engine.
    #[must_use]
    pub fn engine(&self) -> &ConnectionsGame {
        &self.engine
    }

    /// One `- name: words` line per category, in insertion order.
    #[must_use]
    pub fn category_listing(&self) -> String {
        self.engine
            .categories()
            .map(|c| format!("- {}: {}", c.name, c.words.join(", ")))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn take_turn(&mut self, reply: &str) -> Result<(GroupGuess, GroupOutcome), TurnError> {
        let words = parse_group_guess(reply)?;
        let outcome = self.engine.guess(&words)?;
        Ok((words, outcome))
    }
}

impl SessionDriver for ConnectionsSession {
    fn puzzle(&self) -> PuzzleKind {
        PuzzleKind::Connections
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
            let words = self.engine.remaining_words().collect::<Vec<_>>().join(", ");
            self.conversation.narrate(
                kinds::USER_PROMPT,
                &TemplateParams::new()
                    .with("remaining_attempts", self.engine.remaining_attempts())
                    .with("words", words),
            )?;
            self.engine.start_turn();

            let reply = self.conversation.ask(responder)?;
            let (guess, outcome) = match self.take_turn(&reply) {
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

            let words = join_words(&guess);
            debug!(turn = self.engine.budget().total(), %words, ?outcome, "guess evaluated");

            match &outcome {
                GroupOutcome::Match { category } => self.conversation.narrate(
                    kinds::USER_CORRECT_GUESS,
                    &TemplateParams::new()
                        .with("words", &words)
                        .with("category", category),
                )?,
                GroupOutcome::NearMiss => self.conversation.narrate(
                    kinds::USER_OFFBYONE_GUESS,
                    &TemplateParams::new().with("words", &words),
                )?,
                GroupOutcome::Miss => self.conversation.narrate(
                    kinds::USER_INCORRECT_GUESS,
                    &TemplateParams::new().with("words", &words),
                )?,
            }

            if self.engine.all_categories_guessed() {
                self.conversation.narrate(
                    kinds::USER_WIN,
                    &TemplateParams::new().with("categories", self.category_listing()),
                )?;
                info!(
                    puzzle = %self.puzzle(),
                    attempts = self.engine.budget().total(),
                    "session won"
                );
                return Ok(Score::Win);
            }
        }

        self.conversation.narrate(
            kinds::USER_LOSE,
            &TemplateParams::new().with("categories", self.category_listing()),
        )?;
        info!(
            puzzle = %self.puzzle(),
            attempts = self.engine.budget().total(),
            found = self.engine.guessed_categories(),
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
