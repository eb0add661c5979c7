//! Error types shared by every component of the extractor.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading stop lists, compiling matchers or reading config.
#[derive(Debug, Error)]
pub enum AkeError {
    /// A stop-word source or config file could not be opened or read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A matcher was requested from an empty stop-word vocabulary.
    #[error("no words loaded")]
    NoWordsLoaded,

    /// The vocabulary could not be compiled into a matcher.
    #[error("invalid stop-word pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// A configuration file failed to parse or holds invalid values.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl AkeError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AkeError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type AkeResult<T> = Result<T, AkeError>;
