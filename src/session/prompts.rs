//! Prompt templates keyed by kind.
//!
//! Templates use `{name}` placeholders; `{{` and `}}` produce literal
//! braces. Whitespace inside a placeholder is ignored, so `{ name }` reads
//! the `name` parameter. Rendering fails if the kind is unknown or a
//! placeholder has no matching parameter. Extra parameters are ignored.
//!
//! ```
//! use puzzle_bench::session::{TemplateParams, TemplateStore};
//!
//! let mut store = TemplateStore::new();
//! store.insert("greeting", "You have {n} tries.\n");
//!
//! let text = store.render("greeting", &TemplateParams::new().with("n", 6)).unwrap();
//! assert_eq!(text, "You have 6 tries.");
//! ```

use std::fmt::Display;
use std::fs;
use std::path::Path;

use rustc_hash::FxHashMap;

use crate::errors::TemplateError;

/// Template kinds emitted by the session drivers.
pub mod kinds {
    pub const SYSTEM: &str = "system";
    pub const USER_PROMPT: &str = "user_prompt";
    pub const USER_ERROR: &str = "user_error";
    pub const USER_WIN: &str = "user_win";
    pub const USER_LOSE: &str = "user_lose";
    pub const USER_INCORRECT_GUESS: &str = "user_incorrect_guess";
    pub const USER_CORRECT_GUESS: &str = "user_correct_guess";
    pub const USER_OFFBYONE_GUESS: &str = "user_offbyone_guess";
}

/// Named values substituted into a template.
#[derive(Clone, Debug, Default)]
pub struct TemplateParams {
    values: FxHashMap<&'static str, String>,
}

impl TemplateParams {
    /// Create an empty parameter set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parameter.
    #[must_use]
    pub fn with(mut self, name: &'static str, value: impl Display) -> Self {
        self.values.insert(name, value.to_string());
        self
    }

    /// Look up a parameter.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }
}

/// Map from template kind to template text.
#[derive(Clone, Debug, Default)]
pub struct TemplateStore {
    templates: FxHashMap<String, String>,
}

impl TemplateStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load every file in `dir`; the file stem is the kind.
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self, TemplateError> {
        let dir = dir.as_ref();
        let to_error = |source| TemplateError::Io {
            path: dir.to_path_buf(),
            source,
        };

        let mut store = Self::new();
        for entry in fs::read_dir(dir).map_err(to_error)? {
            let path = entry.map_err(to_error)?.path();
            if !path.is_file() {
                continue;
            }
            let Some(kind) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            let text = fs::read_to_string(&path).map_err(|source| TemplateError::Io {
                path: path.clone(),
                source,
            })?;
            store.insert(kind, text);
        }

        tracing::debug!(dir = %dir.display(), kinds = store.len(), "loaded prompt templates");
        Ok(store)
    }

    /// Built-in prompts for Wordle sessions.
    #[must_use]
    pub fn wordle() -> Self {
        Self::from_pairs(WORDLE_TEMPLATES)
    }

    /// Built-in prompts for Connections sessions.
    #[must_use]
    pub fn connections() -> Self {
        Self::from_pairs(CONNECTIONS_TEMPLATES)
    }

    fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        let mut store = Self::new();
        for (kind, text) in pairs {
            store.insert(*kind, *text);
        }
        store
    }

    /// Add or replace a template.
    pub fn insert(&mut self, kind: impl Into<String>, text: impl Into<String>) {
        self.templates.insert(kind.into(), text.into());
    }

    /// Check if a kind is known.
    #[must_use]
    pub fn contains(&self, kind: &str) -> bool {
        self.templates.contains_key(kind)
    }

    /// Get the number of templates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Check if the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Render a template, trimming surrounding whitespace.
    pub fn render(&self, kind: &str, params: &TemplateParams) -> Result<String, TemplateError> {
        let template = self
            .templates
            .get(kind)
            .ok_or_else(|| TemplateError::UnknownKind(kind.to_string()))?;

        let mut out = String::with_capacity(template.len());
        let mut chars = template.char_indices().peekable();

        while let Some((offset, c)) = chars.next() {
            match c {
                '{' if chars.peek().map(|&(_, n)| n) == Some('{') => {
                    chars.next();
                    out.push('{');
                }
                '}' if chars.peek().map(|&(_, n)| n) == Some('}') => {
                    chars.next();
                    out.push('}');
                }
                '{' => {
                    let mut name = String::new();
                    let mut closed = false;
                    for (_, n) in chars.by_ref() {
                        if n == '}' {
                            closed = true;
                            break;
                        }
                        name.push(n);
                    }
                    if !closed {
                        return Err(TemplateError::Malformed {
                            kind: kind.to_string(),
                            offset,
                        });
                    }
                    let value = params.get(name.trim()).ok_or_else(|| TemplateError::MissingParam {
                        kind: kind.to_string(),
                        param: name.trim().to_string(),
                    })?;
                    out.push_str(value);
                }
                '}' => {
                    return Err(TemplateError::Malformed {
                        kind: kind.to_string(),
                        offset,
                    });
                }
                _ => out.push(c),
            }
        }

        Ok(out.trim().to_string())
    }
}

const WORDLE_TEMPLATES: &[(&str, &str)] = &[
    (
        kinds::SYSTEM,
        "You are playing Wordle. Find the hidden five-letter English word in at most {max_attempts} guesses.

After each guess you receive feedback for every letter: whether it is in the correct position, and whether it appears in the word at all.
Every guess must be a valid five-letter word that you have not guessed before.

Think step by step if it helps, then finish your reply with a single line in this exact format:
Guess: YOUR_GUESS_HERE",
    ),
    (
        kinds::USER_PROMPT,
        "You have {remaining_attempts} guesses left. What is your next guess?",
    ),
    (kinds::USER_ERROR, "{error}"),
    (
        kinds::USER_WIN,
        "Congratulations! The word was {word}. You solved the puzzle.",
    ),
    (
        kinds::USER_INCORRECT_GUESS,
        "{guess} is not the word. Feedback per letter:
{feedback}",
    ),
    (
        kinds::USER_LOSE,
        "You are out of guesses. The word was {word}.",
    ),
];

const CONNECTIONS_TEMPLATES: &[(&str, &str)] = &[
    (
        kinds::SYSTEM,
        "You are playing Connections. Sixteen words hide four categories of four words each.

Guess one category at a time by naming its four words. A correct group is removed from the board. You may make at most {max_attempts} mistakes; correct groups do not count as mistakes.
If three of your four words belong to the same category you will be told you are one away.

Think step by step if it helps, then finish your reply with a single line in this exact format:
Guess: WORD1, WORD2, WORD3, WORD4",
    ),
    (
        kinds::USER_PROMPT,
        "You have {remaining_attempts} mistakes left. Remaining words: {words}
What is your next group?",
    ),
    (kinds::USER_ERROR, "{error}"),
    (
        kinds::USER_CORRECT_GUESS,
        "Correct! {words} are the category {category}.",
    ),
    (
        kinds::USER_OFFBYONE_GUESS,
        "{words} is one away from a category.",
    ),
    (
        kinds::USER_INCORRECT_GUESS,
        "{words} is not a category.",
    ),
    (
        kinds::USER_WIN,
        "Congratulations! You found every category:
{categories}",
    ),
    (
        kinds::USER_LOSE,
        "You are out of attempts. The categories were:
{categories}",
    ),
];
