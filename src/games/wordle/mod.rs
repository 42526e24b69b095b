//! Wordle: find a five-letter word.
//!
//! - Every guess must be an admissible five-letter word not guessed before
//! - Each accepted guess costs one valid attempt and yields per-position
//!   feedback (correct position / elsewhere in the word / absent)
//! - The puzzle is won by guessing the target

mod game;
mod lexicon;

pub use game::{
    evaluate, feedback_lines, normalize, Feedback, LetterFeedback, WordleGame, WORD_LENGTH,
};
pub use lexicon::Lexicon;
