//! Admissible word list for Wordle.
//!
//! Loaded once from a newline-delimited source (one word per line) and
//! shared between sessions behind an `Arc`.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use rustc_hash::FxHashSet;

use crate::core::PuzzleRng;
use crate::errors::PuzzleError;

/// Set of admissible guess words.
///
/// ## Example
///
/// ```
/// use puzzle_bench::games::wordle::Lexicon;
///
/// let lexicon = Lexicon::from_words(["Crane", " slate ", ""]);
///
/// assert_eq!(lexicon.len(), 2);
/// assert!(lexicon.contains("crane"));
/// assert!(lexicon.contains("slate"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct Lexicon {
    words: FxHashSet<String>,
}

impl Lexicon {
    /// Create a new empty lexicon.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a lexicon from words, trimming and lowercasing each.
    ///
    /// Blank entries are skipped.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut lexicon = Self::new();
        for word in words {
            lexicon.insert(word.as_ref());
        }
        lexicon
    }

    /// Read a newline-delimited word list.
    pub fn from_reader<R: BufRead>(reader: R) -> std::io::Result<Self> {
        let mut lexicon = Self::new();
        for line in reader.lines() {
            lexicon.insert(&line?);
        }
        Ok(lexicon)
    }

    /// Read a newline-delimited word list from a file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, PuzzleError> {
        let path = path.as_ref();
        let to_error = |source| PuzzleError::Lexicon {
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).map_err(to_error)?;
        let lexicon = Self::from_reader(BufReader::new(file)).map_err(to_error)?;
        tracing::debug!(path = %path.display(), words = lexicon.len(), "loaded lexicon");
        Ok(lexicon)
    }

    /// Add a word. Returns false if it was blank or already present.
    pub fn insert(&mut self, word: &str) -> bool {
        let word = word.trim();
        if word.is_empty() {
            return false;
        }
        self.words.insert(word.to_lowercase())
    }

    /// Check if a normalized word is admissible.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Get the number of words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the lexicon is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over all words in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Pick a random word of the given length.
    ///
    /// Candidates are sorted before sampling so the choice depends only on
    /// the RNG state, not on hash order.
    pub fn random_word(&self, len: usize, rng: &mut PuzzleRng) -> Result<String, PuzzleError> {
        let mut candidates: Vec<&str> = self
            .iter()
            .filter(|w| w.chars().count() == len && w.chars().all(char::is_alphabetic))
            .collect();
        candidates.sort_unstable();

        rng.choose(&candidates)
            .map(|w| (*w).to_string())
            .ok_or(PuzzleError::EmptyLexicon)
    }
}
