//! Session records and per-model summaries.
//!
//! A record is what a benchmark run persists per model and puzzle. Sessions
//! that fail outright still produce a record: a loss at the hard cap with
//! an empty transcript.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::daily::DailyPuzzle;
use super::driver::{PuzzleKind, SessionDriver};
use super::prompts::TemplateStore;
use super::responder::Responder;
use crate::errors::{PuzzleError, SessionError};
use crate::games::wordle::Lexicon;

/// Outcome of one model playing one puzzle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub model_id: String,
    pub puzzle: PuzzleKind,
    /// 1 for a win, 0 otherwise.
    pub result: u8,
    /// JSON array of the transcript messages.
    pub messages: String,
    pub date: String,
    pub attempts: u32,
}

impl SessionRecord {
    /// Record substituted when a session could not be played.
    pub fn failed(model_id: &str, puzzle: PuzzleKind, date: &str, hard_cap: u32) -> Self {
        Self {
            model_id: model_id.to_string(),
            puzzle,
            result: 0,
            messages: "[]".to_string(),
            date: date.to_string(),
            attempts: hard_cap,
        }
    }

    #[must_use]
    pub fn is_win(&self) -> bool {
        self.result == 1
    }
}

/// Play one session and record it, falling back to a failed record on error.
pub fn record_session(
    driver: &mut dyn SessionDriver,
    responder: &mut dyn Responder,
    model_id: &str,
    date: &str,
) -> SessionRecord {
    let puzzle = driver.puzzle();
    let played = driver.play(responder).and_then(|score| {
        let messages = driver.transcript().to_json()?;
        Ok((score, messages))
    });

    match played {
        Ok((score, messages)) => {
            info!(model_id, %puzzle, score = score.value(), attempts = driver.total_attempts(), "session recorded");
            SessionRecord {
                model_id: model_id.to_string(),
                puzzle,
                result: score.value(),
                messages,
                date: date.to_string(),
                attempts: driver.total_attempts(),
            }
        }
        Err(err) => {
            warn!(model_id, %puzzle, error = %err, "session failed, recording a loss");
            SessionRecord::failed(model_id, puzzle, date, driver.hard_cap())
        }
    }
}

/// Play `daily` once per model, in order.
///
/// `responder_for` builds the responder for a model id. Each model gets a
/// fresh driver. Only puzzle construction errors are returned; session
/// failures become failed records.
pub fn evaluate<M, R, F>(
    daily: &DailyPuzzle,
    models: &[M],
    lexicon: &Arc<Lexicon>,
    templates: Option<&TemplateStore>,
    mut responder_for: F,
) -> Result<Vec<SessionRecord>, PuzzleError>
where
    M: AsRef<str>,
    R: Responder,
    F: FnMut(&str) -> R,
{
    let mut records = Vec::with_capacity(models.len());

    for model in models {
        let model_id = model.as_ref();
        let mut driver = daily.driver_with(lexicon, templates)?;
        let mut responder = responder_for(model_id);
        records.push(record_session(driver.as_mut(), &mut responder, model_id, &daily.date));
    }

    Ok(records)
}

/// Aggregate for one puzzle kind.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PuzzleSummary {
    pub count: usize,
    /// Mean result, 0.0 to 1.0.
    pub score: f64,
    pub avg_attempts: f64,
}

/// Aggregate for one model across puzzle kinds.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ModelSummary {
    pub model_id: String,
    /// Mean of the per-puzzle scores over every puzzle kind.
    pub average_score: f64,
    pub puzzles: BTreeMap<PuzzleKind, PuzzleSummary>,
}

#[derive(Default)]
struct Tally {
    count: usize,
    wins: u32,
    attempts: u64,
}

/// Summarize records per model, sorted by model id.
///
/// Every puzzle kind appears in each summary. Kinds a model never played
/// count as zero toward its average score.
pub fn summarize(records: &[SessionRecord]) -> Vec<ModelSummary> {
    let mut tallies: BTreeMap<&str, BTreeMap<PuzzleKind, Tally>> = BTreeMap::new();

    for record in records {
        let tally = tallies
            .entry(record.model_id.as_str())
            .or_default()
            .entry(record.puzzle)
            .or_default();
        tally.count += 1;
        tally.wins += u32::from(record.result);
        tally.attempts += u64::from(record.attempts);
    }

    tallies
        .into_iter()
        .map(|(model_id, per_puzzle)| {
            let puzzles: BTreeMap<_, _> = PuzzleKind::ALL
                .iter()
                .map(|kind| {
                    let summary = per_puzzle
                        .get(kind)
                        .filter(|t| t.count > 0)
                        .map(|t| PuzzleSummary {
                            count: t.count,
                            score: f64::from(t.wins) / t.count as f64,
                            avg_attempts: t.attempts as f64 / t.count as f64,
                        })
                        .unwrap_or_default();
                    (*kind, summary)
                })
                .collect();

            let average_score =
                puzzles.values().map(|s| s.score).sum::<f64>() / PuzzleKind::ALL.len() as f64;

            ModelSummary {
                model_id: model_id.to_string(),
                average_score,
                puzzles,
            }
        })
        .collect()
}

/// Serialize records as a JSON array.
pub fn records_to_json(records: &[SessionRecord]) -> Result<String, SessionError> {
    Ok(serde_json::to_string(records)?)
}
