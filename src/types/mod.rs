//! Types shared between the tokenizer, stop list and extractor.

pub mod error;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

pub use error::{AkeError, AkeResult};

/// Character substituted for every stop-word match before splitting.
///
/// Never survives word tokenization, which only keeps ASCII letters.
pub const DEFAULT_SEPARATOR: char = '|';

/// Word → `(degree + frequency) / frequency`.
pub type WordScores = HashMap<String, f64>;

/// Phrase → accumulated sum of its word scores.
pub type PhraseScores = HashMap<String, f64>;

/// A single ranked keyphrase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Keyword {
    pub phrase: String,
    pub score: f64,
}

/// Parameters for a ranked extraction run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalyseParams {
    /// Minimum phrase score to include (default: 0.0, i.e. everything).
    pub min_score: f64,
    /// Maximum number of ranked results. `None` = unbounded.
    pub max_results: Option<usize>,
}

impl Default for AnalyseParams {
    fn default() -> Self {
        Self {
            min_score: 0.0,
            max_results: None,
        }
    }
}
