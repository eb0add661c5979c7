//! Stop-word vocabulary and whole-word splitting.
//!
//! The vocabulary is compiled into a single case-insensitive regex of
//! boundary-anchored, escaped literals. The compiled matcher is cached and
//! dropped on every mutation, so `split` always reflects the current words.

use std::collections::HashSet;
use std::fmt::Display;
use std::fs;
use std::io::BufRead;
use std::path::Path;
use std::sync::OnceLock;

use regex::{NoExpand, Regex, RegexBuilder};

use crate::types::{AkeError, AkeResult, DEFAULT_SEPARATOR};

use super::tokenizer::normalize_list;

/// A list of words that act as phrase boundaries.
#[derive(Debug, Default)]
pub struct StopWordSet {
    /// Lowercase, trimmed, non-empty words in insertion order.
    words: Vec<String>,
    /// Matcher for `words`; reset on every mutation.
    matcher: OnceLock<Regex>,
}

impl StopWordSet {
    /// Create an empty stop list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a stop list from an in-memory word list.
    pub fn from_words<I>(words: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut set = Self::new();
        for word in words {
            set.add(word.as_ref());
        }
        set
    }

    /// Create a stop list pre-loaded from a line-oriented file.
    pub fn from_file(path: impl AsRef<Path>) -> AkeResult<Self> {
        let mut set = Self::new();
        set.load(path)?;
        Ok(set)
    }

    /// Add a word. Blank input is ignored.
    pub fn add(&mut self, word: &str) {
        let word = normalize(word);
        if word.is_empty() {
            return;
        }
        self.words.push(word);
        self.matcher = OnceLock::new();
    }

    /// Add the string form of any displayable value.
    pub fn add_display<T: Display + ?Sized>(&mut self, value: &T) {
        self.add(&value.to_string());
    }

    /// Case- and whitespace-insensitive membership test.
    pub fn has(&self, word: &str) -> bool {
        let word = normalize(word);
        self.words.iter().any(|w| *w == word)
    }

    /// Membership test on the string form of any displayable value.
    pub fn has_display<T: Display + ?Sized>(&self, value: &T) -> bool {
        self.has(&value.to_string())
    }

    /// Load one stop-word per line from `path`, skipping blank lines.
    ///
    /// The file is read completely before any word is added, so a failed
    /// read leaves the vocabulary untouched. Returns the number of words added.
    pub fn load(&mut self, path: impl AsRef<Path>) -> AkeResult<usize> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| AkeError::io(path, e))?;
        let added = self.extend_lines(contents.lines());
        log::debug!(
            "loaded {} stop words from {} ({} total)",
            added,
            path.display(),
            self.words.len()
        );
        Ok(added)
    }

    /// Load one stop-word per line from any buffered reader.
    ///
    /// Like [`load`](Self::load), nothing is added unless every line was read.
    pub fn load_reader<R: BufRead>(&mut self, reader: R) -> std::io::Result<usize> {
        let lines = reader.lines().collect::<std::io::Result<Vec<String>>>()?;
        Ok(self.extend_lines(lines.iter().map(String::as_str)))
    }

    fn extend_lines<'a>(&mut self, lines: impl Iterator<Item = &'a str>) -> usize {
        let before = self.words.len();
        for line in lines.filter(|line| !line.trim().is_empty()) {
            self.add(line);
        }
        self.words.len() - before
    }

    /// Compile a fresh case-insensitive whole-word matcher for the vocabulary.
    pub fn build_matcher(&self) -> AkeResult<Regex> {
        if self.words.is_empty() {
            return Err(AkeError::NoWordsLoaded);
        }

        let mut seen = HashSet::new();
        let alternation = self
            .words
            .iter()
            .filter(|word| seen.insert(word.as_str()))
            .map(|word| regex::escape(word))
            .collect::<Vec<_>>()
            .join("|");

        log::debug!("compiling stop-word matcher for {} words", seen.len());

        let matcher = RegexBuilder::new(&format!(r"\b(?:{alternation})\b"))
            .case_insensitive(true)
            .build()?;
        Ok(matcher)
    }

    /// The cached matcher, compiled on first use after a mutation.
    pub fn matcher(&self) -> AkeResult<&Regex> {
        if let Some(matcher) = self.matcher.get() {
            return Ok(matcher);
        }
        let built = self.build_matcher()?;
        Ok(self.matcher.get_or_init(|| built))
    }

    /// Split `text` into normalized fragments around whole-word stop-words.
    pub fn split(&self, text: &str) -> AkeResult<Vec<String>> {
        let matcher = self.matcher()?;
        let mut buf = [0u8; 4];
        let separator: &str = DEFAULT_SEPARATOR.encode_utf8(&mut buf);
        let replaced = matcher.replace_all(text, NoExpand(separator));
        Ok(normalize_list(replaced.split(DEFAULT_SEPARATOR)))
    }

    /// Stored words in insertion order, duplicates included.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

fn normalize(word: &str) -> String {
    word.trim().to_lowercase()
}
