//! Wordle rules: guess validation and positional feedback.

use std::sync::Arc;

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::lexicon::Lexicon;
use crate::core::{AttemptBudget, SessionConfig};
use crate::errors::{PuzzleError, ValidationError};
use crate::rules::PuzzleEngine;

/// Length of every target and guess.
pub const WORD_LENGTH: usize = 5;

/// Feedback for one position of a guess.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LetterFeedback {
    /// 0-based position in the word.
    pub index: usize,
    /// The guessed letter.
    pub letter: char,
    /// Letter matches the target at this position.
    pub is_in_correct_position: bool,
    /// Letter is in the target (always true when in the correct position).
    pub is_in_word: bool,
}

/// Per-position feedback for a whole guess.
pub type Feedback = SmallVec<[LetterFeedback; WORD_LENGTH]>;

/// Normalize a raw guess: trim, lowercase, drop inner spaces.
#[must_use]
pub fn normalize(word: &str) -> String {
    word.trim().to_lowercase().replace(' ', "")
}

/// Compute positional feedback for `guess` against `target`.
///
/// Exact matches are assigned first and consume the target's letter counts;
/// remaining letters are marked in-word only while the count for that
/// letter stays positive. A letter is never reported more often than it
/// occurs in the target.
#[must_use]
pub fn evaluate(target: &str, guess: &str) -> Feedback {
    let target: SmallVec<[char; WORD_LENGTH]> = target.chars().collect();

    let mut remaining: FxHashMap<char, u32> = FxHashMap::default();
    for &letter in &target {
        *remaining.entry(letter).or_insert(0) += 1;
    }

    let mut feedback: Feedback = guess
        .chars()
        .enumerate()
        .map(|(index, letter)| {
            let exact = target.get(index) == Some(&letter);
            if exact {
                if let Some(count) = remaining.get_mut(&letter) {
                    *count -= 1;
                }
            }
            LetterFeedback {
                index,
                letter,
                is_in_correct_position: exact,
                is_in_word: exact,
            }
        })
        .collect();

    for entry in feedback.iter_mut().filter(|f| !f.is_in_correct_position) {
        if let Some(count) = remaining.get_mut(&entry.letter) {
            if *count > 0 {
                *count -= 1;
                entry.is_in_word = true;
            }
        }
    }

    feedback
}

/// Serialize feedback as one JSON record per line.
pub fn feedback_lines(feedback: &[LetterFeedback]) -> Result<String, serde_json::Error> {
    let lines = feedback
        .iter()
        .map(serde_json::to_string)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(lines.join("\n"))
}

/// A single Wordle puzzle.
///
/// Static content (target, lexicon) survives `reset`; the guessed-word set
/// and attempt counters do not.
#[derive(Clone, Debug)]
pub struct WordleGame {
    target: String,
    lexicon: Arc<Lexicon>,
    guessed: FxHashSet<String>,
    budget: AttemptBudget,
}

impl WordleGame {
    /// Create a puzzle for `target`.
    ///
    /// The target is normalized and must itself be a valid guess.
    pub fn new(
        target: &str,
        lexicon: Arc<Lexicon>,
        config: SessionConfig,
    ) -> Result<Self, PuzzleError> {
        let budget = config.budget()?;
        let target = normalize(target);
        validate_word(&target, &lexicon).map_err(PuzzleError::InvalidTarget)?;

        Ok(Self {
            target,
            lexicon,
            guessed: FxHashSet::default(),
            budget,
        })
    }

    /// The word to find.
    #[must_use]
    pub fn target(&self) -> &str {
        &self.target
    }

    /// The admissible word list.
    #[must_use]
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Check if a candidate, once normalized, is the target.
    #[must_use]
    pub fn is_solved(&self, candidate: &str) -> bool {
        normalize(candidate) == self.target
    }

    /// Check if a normalized word was already accepted this session.
    #[must_use]
    pub fn was_guessed(&self, word: &str) -> bool {
        self.guessed.contains(word)
    }
}

/// Check that a normalized word is alphabetic, the right length, and admissible.
fn validate_word(word: &str, lexicon: &Lexicon) -> Result<(), ValidationError> {
    if word.is_empty() || !word.chars().all(char::is_alphabetic) {
        return Err(ValidationError::NotAlphabetic {
            word: word.to_string(),
        });
    }

    let len = word.chars().count();
    if len != WORD_LENGTH {
        return Err(ValidationError::WrongLength {
            word: word.to_string(),
            len,
            expected: WORD_LENGTH,
        });
    }

    if !lexicon.contains(word) {
        return Err(ValidationError::NotInLexicon {
            word: word.to_string(),
        });
    }

    Ok(())
}

impl PuzzleEngine for WordleGame {
    type Guess = str;
    type Outcome = Feedback;

    fn reset(&mut self) {
        self.budget.reset();
        self.guessed.clear();
    }

    fn guess(&mut self, candidate: &str) -> Result<Feedback, ValidationError> {
        let word = normalize(candidate);
        validate_word(&word, &self.lexicon)?;

        if self.guessed.contains(&word) {
            return Err(ValidationError::AlreadyGuessed { word });
        }

        let feedback = evaluate(&self.target, &word);
        self.guessed.insert(word);
        self.budget.record_valid();

        Ok(feedback)
    }

    fn budget(&self) -> &AttemptBudget {
        &self.budget
    }

    fn budget_mut(&mut self) -> &mut AttemptBudget {
        &mut self.budget
    }
}
