//! The extraction engine: tokenizer, stop list and RAKE scoring.

pub mod extractor;
pub mod stop_list;
pub mod tokenizer;

pub use extractor::Extractor;
pub use stop_list::StopWordSet;
