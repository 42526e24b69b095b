//! Daily puzzle job description.
//!
//! A job names the puzzle kind, its content, and the date it is played
//! for:
//!
//! ```json
//! {"puzzle": "wordle", "content": "crane", "date": "2024-08-05"}
//! {"puzzle": "connections",
//!  "content": {"Fruits": ["apple", "banana", "cherry", "date"], ...},
//!  "date": "2024-08-05"}
//! ```
//!
//! Connections categories keep the order they appear in the JSON object.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::connections::ConnectionsSession;
use super::driver::{PuzzleKind, SessionDriver};
use super::prompts::TemplateStore;
use super::wordle::WordleSession;
use crate::core::{PuzzleRng, SessionConfig};
use crate::errors::PuzzleError;
use crate::games::connections::{Category, ConnectionsGame};
use crate::games::wordle::{Lexicon, WordleGame, WORD_LENGTH};

/// One puzzle to play with every model on a given date.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DailyPuzzle {
    pub puzzle: PuzzleKind,
    pub content: Value,
    pub date: String,
}

impl DailyPuzzle {
    /// A Wordle job for `word`.
    pub fn wordle(word: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            puzzle: PuzzleKind::Wordle,
            content: Value::String(word.into()),
            date: date.into(),
        }
    }

    /// A Wordle job with a target drawn from the lexicon for `date`.
    ///
    /// The same seed and date always pick the same word.
    pub fn random_wordle(
        lexicon: &Lexicon,
        seed: u64,
        date: impl Into<String>,
    ) -> Result<Self, PuzzleError> {
        let date = date.into();
        let mut rng = PuzzleRng::new(seed).for_context(&date);
        let word = lexicon.random_word(WORD_LENGTH, &mut rng)?;
        Ok(Self::wordle(word, date))
    }

    /// A Connections job for `categories`, in order.
    pub fn connections(categories: &[Category], date: impl Into<String>) -> Self {
        let content: Map<String, Value> = categories
            .iter()
            .map(|c| {
                let words = c.words.iter().cloned().map(Value::String).collect();
                (c.name.clone(), Value::Array(words))
            })
            .collect();

        Self {
            puzzle: PuzzleKind::Connections,
            content: Value::Object(content),
            date: date.into(),
        }
    }

    /// Parse a list of jobs.
    pub fn parse_list(json: &str) -> Result<Vec<Self>, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// The Wordle target in the content.
    pub fn target_word(&self) -> Result<String, PuzzleError> {
        serde_json::from_value(self.content.clone()).map_err(|source| PuzzleError::Content {
            puzzle: PuzzleKind::Wordle.as_str(),
            source,
        })
    }

    /// The Connections categories in the content, in order.
    pub fn categories(&self) -> Result<Vec<Category>, PuzzleError> {
        let to_error = |source| PuzzleError::Content {
            puzzle: PuzzleKind::Connections.as_str(),
            source,
        };

        let map: Map<String, Value> = serde_json::from_value(self.content.clone()).map_err(to_error)?;
        map.into_iter()
            .map(|(name, words)| {
                let words: Vec<String> = serde_json::from_value(words).map_err(to_error)?;
                Ok(Category::new(name, words))
            })
            .collect()
    }

    /// Build a fresh driver with default limits and built-in prompts.
    pub fn driver(&self, lexicon: &Arc<Lexicon>) -> Result<Box<dyn SessionDriver>, PuzzleError> {
        self.driver_with(lexicon, None)
    }

    /// Build a fresh driver, rendering prompts from `templates` when given.
    pub fn driver_with(
        &self,
        lexicon: &Arc<Lexicon>,
        templates: Option<&TemplateStore>,
    ) -> Result<Box<dyn SessionDriver>, PuzzleError> {
        match self.puzzle {
            PuzzleKind::Wordle => {
                let engine = WordleGame::new(
                    &self.target_word()?,
                    Arc::clone(lexicon),
                    SessionConfig::for_wordle(),
                )?;
                let templates = templates.cloned().unwrap_or_else(TemplateStore::wordle);
                Ok(Box::new(WordleSession::new(engine, templates)))
            }
            PuzzleKind::Connections => {
                let engine = ConnectionsGame::new(self.categories()?, SessionConfig::for_connections())?;
                let templates = templates.cloned().unwrap_or_else(TemplateStore::connections);
                Ok(Box::new(ConnectionsSession::new(engine, templates)))
            }
        }
    }
}
