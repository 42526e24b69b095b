//! Puzzle engine trait for game implementations.
//!
//! Puzzles implement `PuzzleEngine` to define:
//! - How guesses are validated and evaluated
//! - How attempts are charged
//! - When play stops
//!
//! Session drivers call into `PuzzleEngine` but never interpret
//! puzzle-specific rules directly.

pub mod engine;

pub use engine::{PuzzleEngine, Score};
