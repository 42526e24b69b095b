//! Extracting guesses from free-form model replies.
//!
//! Models may reason at length before answering; only the text following
//! the first `Guess:` marker, up to the end of that line, is read.

use crate::errors::ParseError;
use crate::games::connections::GroupGuess;

/// Marker preceding the answer in a reply. Case-sensitive.
pub const GUESS_MARKER: &str = "Guess:";

/// Text after the first marker, up to the end of its line.
pub fn extract_guess(reply: &str) -> Result<&str, ParseError> {
    let start = reply.find(GUESS_MARKER).ok_or(ParseError)? + GUESS_MARKER.len();
    let rest = &reply[start..];
    Ok(match rest.find('\n') {
        Some(end) => &rest[..end],
        None => rest,
    })
}

/// Parse a single word: trimmed, lowercased, without spaces or double quotes.
pub fn parse_word_guess(reply: &str) -> Result<String, ParseError> {
    let raw = extract_guess(reply)?;
    Ok(raw
        .trim()
        .to_lowercase()
        .chars()
        .filter(|&c| c != ' ' && c != '"')
        .collect())
}

/// Parse a comma-separated group of words into a set.
///
/// Repeated words collapse; the size is left for the engine to check.
pub fn parse_group_guess(reply: &str) -> Result<GroupGuess, ParseError> {
    let raw = extract_guess(reply)?;
    Ok(raw.split(',').map(|w| w.trim().to_lowercase()).collect())
}
