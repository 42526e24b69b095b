//! Puzzle implementations.

pub mod connections;
pub mod wordle;
