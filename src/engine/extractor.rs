//! RAKE scoring: candidate phrases, word degree/frequency, phrase scores.

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::types::{AkeResult, AnalyseParams, Keyword, PhraseScores, WordScores};

use super::stop_list::StopWordSet;
use super::tokenizer;

/// Keyword extraction engine over a borrowed, read-only stop list.
#[derive(Debug, Clone, Copy)]
pub struct Extractor<'a> {
    stop_list: &'a StopWordSet,
}

impl<'a> Extractor<'a> {
    pub fn new(stop_list: &'a StopWordSet) -> Self {
        Self { stop_list }
    }

    pub fn stop_list(&self) -> &'a StopWordSet {
        self.stop_list
    }

    /// Candidate phrases: every sentence split on stop-words, in text order.
    ///
    /// Repeated phrases are kept; each occurrence counts when scoring.
    pub fn get_phrases(&self, text: &str) -> AkeResult<Vec<String>> {
        let sentences = tokenizer::sentences(text);
        let mut phrases = Vec::new();
        for sentence in &sentences {
            phrases.extend(self.stop_list.split(sentence)?);
        }
        log::trace!(
            "get_phrases: {} sentences -> {} phrases",
            sentences.len(),
            phrases.len()
        );
        Ok(phrases)
    }

    /// Score every word as `(degree + frequency) / frequency`.
    pub fn score_words<S: AsRef<str>>(&self, phrases: &[S]) -> WordScores {
        // word -> (frequency, degree)
        let mut stats: HashMap<String, (f64, f64)> = HashMap::new();

        for phrase in phrases {
            let words = tokenizer::words(phrase.as_ref());
            let degree = words.len().saturating_sub(1) as f64;
            for word in words {
                let entry = stats.entry(word).or_insert((0.0, 0.0));
                entry.0 += 1.0;
                entry.1 += degree;
            }
        }

        log::trace!("score_words: {} distinct words", stats.len());

        stats
            .into_iter()
            .map(|(word, (frequency, degree))| (word, (degree + frequency) / frequency))
            .collect()
    }

    /// Sum word scores per phrase, accumulating across repeated phrases.
    pub fn score_phrases<S: AsRef<str>>(&self, phrases: &[S]) -> PhraseScores {
        let word_scores = self.score_words(phrases);
        let mut scores = PhraseScores::new();

        for phrase in phrases {
            let phrase = phrase.as_ref();
            let words = tokenizer::words(phrase);
            // Fragments without letters ("42") never become keys.
            if words.is_empty() {
                continue;
            }
            let sum: f64 = words.iter().filter_map(|word| word_scores.get(word)).sum();
            *scores.entry(phrase.to_string()).or_insert(0.0) += sum;
        }

        scores
    }

    /// Score all phrases in `text`, keeping those with score >= `min_score`.
    pub fn analyse(&self, text: &str, min_score: f64) -> AkeResult<PhraseScores> {
        let phrases = self.get_phrases(text)?;
        let mut scores = self.score_phrases(&phrases);
        scores.retain(|_, score| *score >= min_score);
        Ok(scores)
    }

    /// [`analyse`](Self::analyse), ranked by descending score.
    ///
    /// Ties are broken by phrase so the order is stable across runs.
    pub fn rank(&self, text: &str, params: &AnalyseParams) -> AkeResult<Vec<Keyword>> {
        let scores = self.analyse(text, params.min_score)?;

        let mut ranked: Vec<Keyword> = scores
            .into_iter()
            .map(|(phrase, score)| Keyword { phrase, score })
            .collect();

        ranked.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.phrase.cmp(&b.phrase))
        });
        if let Some(max) = params.max_results {
            ranked.truncate(max);
        }

        Ok(ranked)
    }
}
