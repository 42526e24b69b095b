//! Connections: sort sixteen words into four hidden categories.
//!
//! - Each guess names exactly four words
//! - An exact category is free; anything else costs one valid attempt
//! - A guess one word away from a category is reported as a near-miss
//! - The puzzle is won when all four categories are found

mod game;

pub(crate) use game::join_words;
pub use game::{
    Category, ConnectionsGame, GroupGuess, GroupOutcome, CATEGORY_COUNT, GROUP_SIZE,
};
