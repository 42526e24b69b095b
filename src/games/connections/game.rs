//! Connections rules: group validation, exact/near-miss matching.

use std::collections::BTreeSet;

use im::OrdSet;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::core::{AttemptBudget, SessionConfig};
use crate::errors::{PuzzleError, ValidationError};
use crate::rules::PuzzleEngine;

/// Number of categories in a puzzle.
pub const CATEGORY_COUNT: usize = 4;

/// Number of words in each category and in each guess.
pub const GROUP_SIZE: usize = 4;

/// A guessed group of words. Set semantics: duplicates collapse.
pub type GroupGuess = BTreeSet<String>;

/// A named category and its words, in the order they were given.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub words: Vec<String>,
}

impl Category {
    /// Create a category. Words are trimmed and lowercased; repeats are dropped.
    pub fn new<I, S>(name: impl Into<String>, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = FxHashSet::default();
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| seen.insert(w.clone()))
            .collect();

        Self {
            name: name.into(),
            words,
        }
    }
}

/// Result of evaluating one group guess.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GroupOutcome {
    /// The guess is exactly this category.
    Match { category: String },
    /// The guess is one word away from a category.
    NearMiss,
    /// Neither.
    Miss,
}

impl GroupOutcome {
    /// Name of the matched category, if any.
    #[must_use]
    pub fn matched_category(&self) -> Option<&str> {
        match self {
            GroupOutcome::Match { category } => Some(category),
            _ => None,
        }
    }

    /// Check if the guess was one word off.
    #[must_use]
    pub fn is_near_miss(&self) -> bool {
        matches!(self, GroupOutcome::NearMiss)
    }
}

#[derive(Clone, Debug)]
struct CategorySlot {
    category: Category,
    members: FxHashSet<String>,
    found: bool,
}

/// A single Connections puzzle.
///
/// Categories keep their insertion order; matching scans them in that order
/// and stops at the first exact or near-miss hit.
#[derive(Clone, Debug)]
pub struct ConnectionsGame {
    slots: Vec<CategorySlot>,
    all_words: OrdSet<String>,
    remaining_words: OrdSet<String>,
    guessed_categories: usize,
    budget: AttemptBudget,
}

impl ConnectionsGame {
    /// Create a puzzle from exactly four categories of exactly four words.
    ///
    /// Words are normalized here as well as in `Category::new`, since
    /// deserialized categories skip the constructor. Words shared between
    /// categories are allowed.
    pub fn new(categories: Vec<Category>, config: SessionConfig) -> Result<Self, PuzzleError> {
        let budget = config.budget()?;

        if categories.len() != CATEGORY_COUNT {
            return Err(PuzzleError::CategoryCount {
                count: categories.len(),
                expected: CATEGORY_COUNT,
            });
        }

        let mut slots = Vec::with_capacity(CATEGORY_COUNT);
        for Category { name, words } in categories {
            let category = Category::new(name, words);
            let members: FxHashSet<String> = category.words.iter().cloned().collect();
            if members.len() != GROUP_SIZE {
                return Err(PuzzleError::CategorySize {
                    category: category.name,
                    count: members.len(),
                    expected: GROUP_SIZE,
                });
            }
            slots.push(CategorySlot {
                category,
                members,
                found: false,
            });
        }

        let all_words: OrdSet<String> = slots
            .iter()
            .flat_map(|s| s.category.words.iter().cloned())
            .collect();

        Ok(Self {
            slots,
            remaining_words: all_words.clone(),
            all_words,
            guessed_categories: 0,
            budget,
        })
    }

    /// Categories in insertion order.
    pub fn categories(&self) -> impl Iterator<Item = &Category> {
        self.slots.iter().map(|s| &s.category)
    }

    /// Words not yet placed in a found category, sorted.
    pub fn remaining_words(&self) -> impl Iterator<Item = &str> {
        self.remaining_words.iter().map(String::as_str)
    }

    /// Number of words not yet placed.
    #[must_use]
    pub fn remaining_count(&self) -> usize {
        self.remaining_words.len()
    }

    /// Number of categories found so far.
    #[must_use]
    pub fn guessed_categories(&self) -> usize {
        self.guessed_categories
    }

    /// Check if every category has been found.
    #[must_use]
    pub fn all_categories_guessed(&self) -> bool {
        self.guessed_categories == CATEGORY_COUNT
    }
}

impl PuzzleEngine for ConnectionsGame {
    type Guess = GroupGuess;
    type Outcome = GroupOutcome;

    fn reset(&mut self) {
        self.budget.reset();
        self.guessed_categories = 0;
        self.remaining_words = self.all_words.clone();
        for slot in &mut self.slots {
            slot.found = false;
        }
    }

    fn guess(&mut self, words: &GroupGuess) -> Result<GroupOutcome, ValidationError> {
        if words.len() != GROUP_SIZE {
            return Err(ValidationError::WrongGroupSize {
                count: words.len(),
                expected: GROUP_SIZE,
                words: join_words(words),
            });
        }

        for slot in &mut self.slots {
            if slot.members.len() == words.len() && words.iter().all(|w| slot.members.contains(w)) {
                if slot.found {
                    return Err(ValidationError::CategoryAlreadyFound {
                        category: slot.category.name.clone(),
                    });
                }

                slot.found = true;
                self.guessed_categories += 1;
                for word in words {
                    self.remaining_words.remove(word);
                }
                return Ok(GroupOutcome::Match {
                    category: slot.category.name.clone(),
                });
            }

            let missing = slot.members.iter().filter(|w| !words.contains(*w)).count();
            if missing == 1 {
                self.budget.record_valid();
                return Ok(GroupOutcome::NearMiss);
            }
        }

        self.budget.record_valid();
        Ok(GroupOutcome::Miss)
    }

    fn budget(&self) -> &AttemptBudget {
        &self.budget
    }

    fn budget_mut(&mut self) -> &mut AttemptBudget {
        &mut self.budget
    }

    fn is_over(&self) -> bool {
        self.budget.is_exhausted() || self.all_categories_guessed()
    }
}

/// Join words with `", "` in set order.
pub(crate) fn join_words<'a>(words: impl IntoIterator<Item = &'a String>) -> String {
    words
        .into_iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn categories() -> Vec<Category> {
        vec![
            Category::new("Fruits", ["a", "b", "c", "d"]),
            Category::new("Colors", ["e", "f", "g", "h"]),
            Category::new("Animals", ["i", "j", "k", "l"]),
            Category::new("Planets", ["m", "n", "o", "p"]),
        ]
    }

    fn game() -> ConnectionsGame {
        ConnectionsGame::new(categories(), SessionConfig::for_connections()).unwrap()
    }

    fn group(words: &[&str]) -> GroupGuess {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_category_normalizes_words() {
        let category = Category::new("Trees", [" Oak", "ELM", "ash ", "oak", "Fir"]);
        assert_eq!(category.words, vec!["oak", "elm", "ash", "fir"]);
    }

    #[test]
    fn test_new_normalizes_deserialized_categories() {
        let json = r#"[
            {"name": "Fruits", "words": ["Apple", " Banana", "CHERRY", "Date"]},
            {"name": "Colors", "words": ["red", "green", "blue", "yellow"]},
            {"name": "Animals", "words": ["cat", "dog", "horse", "sheep"]},
            {"name": "Planets", "words": ["mars", "venus", "earth", "saturn"]}
        ]"#;
        let cats: Vec<Category> = serde_json::from_str(json).unwrap();
        let mut game = ConnectionsGame::new(cats, SessionConfig::for_connections()).unwrap();

        assert_eq!(
            game.categories().next().unwrap().words,
            vec!["apple", "banana", "cherry", "date"]
        );
        let outcome = game.guess(&group(&["apple", "banana", "cherry", "date"])).unwrap();
        assert_eq!(outcome.matched_category(), Some("Fruits"));
    }

    #[test]
    fn test_new_rejects_case_duplicates_from_json() {
        let mut cats = categories();
        cats[0] = serde_json::from_str(r#"{"name": "Dup", "words": ["Oak", "oak", "elm", "ash"]}"#)
            .unwrap();
        let err = ConnectionsGame::new(cats, SessionConfig::for_connections()).unwrap_err();
        assert!(matches!(err, PuzzleError::CategorySize { count: 3, .. }));
    }

    #[test]
    fn test_new_rejects_zero_limits() {
        let config: SessionConfig =
            serde_json::from_str(r#"{"max_attempts": 4, "hard_cap": 0}"#).unwrap();
        let err = ConnectionsGame::new(categories(), config).unwrap_err();
        assert!(matches!(err, PuzzleError::InvalidConfig { hard_cap: 0, .. }));
    }

    #[test]
    fn test_new_rejects_wrong_category_count() {
        let mut three = categories();
        three.pop();
        let err = ConnectionsGame::new(three, SessionConfig::for_connections()).unwrap_err();
        assert!(matches!(err, PuzzleError::CategoryCount { count: 3, .. }));
    }

    #[test]
    fn test_new_rejects_wrong_category_size() {
        let mut cats = categories();
        cats[2] = Category::new("Animals", ["i", "j", "k"]);
        let err = ConnectionsGame::new(cats, SessionConfig::for_connections()).unwrap_err();
        assert!(matches!(
            err,
            PuzzleError::CategorySize { ref category, count: 3, .. } if category.as_str() == "Animals"
        ));
    }

    #[test]
    fn test_shared_words_allowed() {
        let mut cats = categories();
        cats[1] = Category::new("Colors", ["a", "f", "g", "h"]);
        let game = ConnectionsGame::new(cats, SessionConfig::for_connections()).unwrap();
        assert_eq!(game.remaining_count(), 15);
    }

    #[test]
    fn test_exact_match_is_free() {
        let mut game = game();
        let outcome = game.guess(&group(&["d", "c", "b", "a"])).unwrap();

        assert_eq!(outcome.matched_category(), Some("Fruits"));
        assert!(!outcome.is_near_miss());
        assert_eq!(game.budget().valid(), 0);
        assert_eq!(game.guessed_categories(), 1);
        assert_eq!(game.remaining_count(), 12);
        assert!(game.remaining_words().all(|w| !["a", "b", "c", "d"].contains(&w)));
    }

    #[test]
    fn test_near_miss() {
        let mut game = game();
        let outcome = game.guess(&group(&["a", "b", "c", "e"])).unwrap();

        assert_eq!(outcome, GroupOutcome::NearMiss);
        assert_eq!(outcome.matched_category(), None);
        assert_eq!(game.budget().valid(), 1);
        assert_eq!(game.remaining_count(), 16);
    }

    #[test]
    fn test_miss() {
        let mut game = game();
        let outcome = game.guess(&group(&["a", "b", "e", "f"])).unwrap();

        assert_eq!(outcome, GroupOutcome::Miss);
        assert_eq!(game.budget().valid(), 1);
    }

    #[test]
    fn test_first_match_wins() {
        // Shares three words with both Fruits and Colors; Fruits comes first.
        let cats = vec![
            Category::new("Fruits", ["a", "b", "c", "d"]),
            Category::new("Colors", ["a", "b", "c", "h"]),
            Category::new("Animals", ["i", "j", "k", "l"]),
            Category::new("Planets", ["m", "n", "o", "p"]),
        ];
        let mut game = ConnectionsGame::new(cats, SessionConfig::for_connections()).unwrap();

        // Near-miss for Fruits short-circuits before the exact Colors check.
        let outcome = game.guess(&group(&["a", "b", "c", "h"])).unwrap();
        assert_eq!(outcome, GroupOutcome::NearMiss);
        assert_eq!(game.guessed_categories(), 0);
    }

    #[test]
    fn test_wrong_group_size() {
        let mut game = game();
        let err = game.guess(&group(&["a", "b", "c"])).unwrap_err();

        assert_eq!(
            err,
            ValidationError::WrongGroupSize {
                count: 3,
                expected: 4,
                words: "a, b, c".to_string(),
            }
        );
        assert_eq!(game.budget().valid(), 0);
    }

    #[test]
    fn test_found_category_cannot_score_twice() {
        let mut game = game();
        game.guess(&group(&["a", "b", "c", "d"])).unwrap();

        let err = game.guess(&group(&["a", "b", "c", "d"])).unwrap_err();
        assert!(matches!(err, ValidationError::CategoryAlreadyFound { .. }));
        assert_eq!(game.guessed_categories(), 1);
        assert_eq!(game.budget().valid(), 0);
    }

    #[test]
    fn test_all_categories_ends_game() {
        let mut game = game();
        for words in [["a", "b", "c", "d"], ["e", "f", "g", "h"], ["i", "j", "k", "l"]] {
            game.guess(&group(&words)).unwrap();
            assert!(!game.is_over());
        }

        game.guess(&group(&["m", "n", "o", "p"])).unwrap();
        assert!(game.all_categories_guessed());
        assert!(game.is_over());
        assert_eq!(game.remaining_count(), 0);
    }

    #[test]
    fn test_budget_ends_game() {
        let mut game = game();
        for _ in 0..4 {
            assert!(!game.is_over());
            game.guess(&group(&["a", "e", "i", "m"])).unwrap();
        }
        assert!(game.is_over());
        assert!(!game.all_categories_guessed());
    }

    #[test]
    fn test_reset() {
        let mut game = game();
        game.guess(&group(&["a", "b", "c", "d"])).unwrap();
        game.guess(&group(&["a", "e", "i", "m"])).unwrap();

        game.reset();

        assert_eq!(game.guessed_categories(), 0);
        assert_eq!(game.remaining_count(), 16);
        assert_eq!(game.budget().valid(), 0);
        assert!(game.guess(&group(&["a", "b", "c", "d"])).is_ok());
    }

    #[test]
    fn test_remaining_words_sorted() {
        let game = game();
        let words: Vec<_> = game.remaining_words().collect();
        let mut sorted = words.clone();
        sorted.sort_unstable();
        assert_eq!(words, sorted);
    }
}
