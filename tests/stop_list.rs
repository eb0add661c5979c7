//! StopWordSet tests: membership, loading, matcher preconditions and splitting.

use std::io::Write;
use std::path::Path;

use autoke::{AkeError, StopWordSet};

fn stoplist_path() -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/data/stoplist.txt")
}

// ==================== Membership ====================

#[test]
fn test_add_then_has() {
    let mut set = StopWordSet::new();
    set.add("test");
    assert!(set.has("test"));
}

#[test]
fn test_has_not() {
    let set = StopWordSet::new();
    assert!(!set.has("test"));
}

#[test]
fn test_membership_ignores_case_and_whitespace() {
    let mut set = StopWordSet::new();
    set.add("  The\n");
    assert!(set.has("the"));
    assert!(set.has("THE"));
    assert!(set.has(" tHe "));
    assert_eq!(set.words().collect::<Vec<_>>(), vec!["the"]);
}

#[test]
fn test_display_values_are_converted() {
    let mut set = StopWordSet::new();
    set.add_display(&42);
    assert!(set.has_display(&42));
    assert!(set.has("42"));
    assert!(!set.has_display(&4.2));
}

// ==================== Loading ====================

#[test]
fn test_load_reference_file() {
    let mut set = StopWordSet::new();
    let added = set.load(stoplist_path()).unwrap();
    assert_eq!(added, set.len());
    assert!(set.has("the"));
    assert!(set.has("through"));
    assert!(!set.has("can"));
    assert!(!set.has(""));
}

#[test]
fn test_load_skips_blank_lines_and_normalizes() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "Alpha\n\n   \n  beta  \r\nGAMMA").unwrap();

    let set = StopWordSet::from_file(file.path()).unwrap();
    assert_eq!(set.words().collect::<Vec<_>>(), vec!["alpha", "beta", "gamma"]);
}

#[test]
fn test_load_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("invalid-file.txt");

    let mut set = StopWordSet::from_words(["keep"]);
    let err = set.load(&missing).unwrap_err();

    match err {
        AkeError::Io { path, source } => {
            assert_eq!(path, missing);
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("expected Io error, got {other:?}"),
    }
    // Prior vocabulary is untouched.
    assert_eq!(set.words().collect::<Vec<_>>(), vec!["keep"]);
    assert_eq!(set.split("we keep going").unwrap(), vec!["we", "going"]);
}

// ==================== Matcher ====================

#[test]
fn test_empty_vocabulary_is_precondition_error() {
    let set = StopWordSet::new();
    assert!(matches!(set.build_matcher(), Err(AkeError::NoWordsLoaded)));
    assert!(matches!(set.split("anything"), Err(AkeError::NoWordsLoaded)));
    assert_eq!(AkeError::NoWordsLoaded.to_string(), "no words loaded");
}

#[test]
fn test_matcher_is_case_insensitive() {
    let set = StopWordSet::from_words(["the"]);
    let matcher = set.build_matcher().unwrap();
    assert!(matcher.is_match("THE end"));
    assert!(!matcher.is_match("theory"));
}

// ==================== Split ====================

#[test]
fn test_split_on_stop_word() {
    let mut set = StopWordSet::new();
    set.add("word2");
    assert_eq!(set.split("word1 word2 word3").unwrap(), vec!["word1", "word3"]);
}

#[test]
fn test_split_respects_word_boundaries() {
    let set = StopWordSet::from_words(["an"]);
    assert_eq!(
        set.split("an apple and an answer").unwrap(),
        vec!["apple and", "answer"]
    );
}

#[test]
fn test_split_only_stop_words_is_empty() {
    let set = StopWordSet::from_words(["of", "the"]);
    assert!(set.split("Of the of THE").unwrap().is_empty());
    assert!(set.split("").unwrap().is_empty());
}

#[test]
fn test_split_normalizes_fragments() {
    let set = StopWordSet::from_words(["and"]);
    assert_eq!(
        set.split("  Salt AND Pepper ").unwrap(),
        vec!["salt", "pepper"]
    );
}
