//! TOML configuration for an extraction run.
//!
//! ```toml
//! stop_list = "stoplist.txt"
//! stop_words = ["etc", "via"]
//! min_score = 2.0
//! max_results = 10
//! ```

use std::fs::read_to_string;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::engine::StopWordSet;
use crate::types::{AkeError, AkeResult, AnalyseParams};

/// Settings read from a config file; every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExtractorConfig {
    /// Stop-word file, one word per line.
    pub stop_list: Option<PathBuf>,

    /// Extra stop-words added after `stop_list` is loaded.
    pub stop_words: Vec<String>,

    /// Minimum phrase score to report.
    pub min_score: f64,

    /// Maximum number of ranked phrases to report.
    pub max_results: Option<usize>,
}

impl ExtractorConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> AkeResult<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| AkeError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read a config file. A relative `stop_list` is resolved against the
    /// directory holding the config file.
    pub fn from_file(path: impl AsRef<Path>) -> AkeResult<Self> {
        let path = path.as_ref();
        let content = read_to_string(path).map_err(|e| AkeError::io(path, e))?;
        let mut config = Self::from_toml_str(&content)?;

        if let (Some(stop_list), Some(dir)) = (config.stop_list.as_mut(), path.parent()) {
            if stop_list.is_relative() {
                *stop_list = dir.join(&*stop_list);
            }
        }

        log::debug!("loaded config from {}: {:?}", path.display(), config);
        Ok(config)
    }

    fn validate(&self) -> AkeResult<()> {
        if !self.min_score.is_finite() || self.min_score < 0.0 {
            return Err(AkeError::Config(format!(
                "min_score must be a non-negative number, got {}",
                self.min_score
            )));
        }
        if self.max_results == Some(0) {
            return Err(AkeError::Config("max_results must be at least 1".to_string()));
        }
        Ok(())
    }

    /// Load `stop_list` (if set), then add the inline `stop_words`.
    pub fn build_stop_list(&self) -> AkeResult<StopWordSet> {
        let mut stop_list = match &self.stop_list {
            Some(path) => StopWordSet::from_file(path)?,
            None => StopWordSet::new(),
        };
        for word in &self.stop_words {
            stop_list.add(word);
        }
        Ok(stop_list)
    }

    pub fn analyse_params(&self) -> AnalyseParams {
        AnalyseParams {
            min_score: self.min_score,
            max_results: self.max_results,
        }
    }
}
