//! Rapid automatic keyword extraction.
//!
//! Text is cut into sentences, sentences into candidate phrases around
//! stop-words, and every phrase is scored from the frequency and degree
//! (co-occurrence breadth) of its words.
//!
//! ```no_run
//! use autoke::{Extractor, StopWordSet};
//!
//! let stop_list = StopWordSet::from_file("stoplist.txt")?;
//! let extractor = Extractor::new(&stop_list);
//! for (phrase, score) in extractor.analyse("Some text to analyse.", 2.0)? {
//!     println!("{score}\t{phrase}");
//! }
//! # Ok::<(), autoke::AkeError>(())
//! ```

pub mod config;
pub mod engine;
pub mod types;

pub use config::ExtractorConfig;
pub use engine::tokenizer;
pub use engine::{Extractor, StopWordSet};
pub use types::{
    AkeError, AkeResult, AnalyseParams, Keyword, PhraseScores, WordScores, DEFAULT_SEPARATOR,
};
