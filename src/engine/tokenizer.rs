//! Stateless text segmentation shared by the stop list and the extractor.

/// Characters that end or separate sentences.
const SENTENCE_DELIMITERS: &[char] = &['.', '!', '?', ',', ';', ':', '\''];

/// Trim and lowercase every fragment, dropping the ones left empty.
///
/// Callers holding non-string values convert them first (`.to_string()`).
pub fn normalize_list<I>(items: I) -> Vec<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    items
        .into_iter()
        .map(|item| item.as_ref().trim().to_lowercase())
        .filter(|item| !item.is_empty())
        .collect()
}

/// Split text into normalized sentences on `. ! ? , ; : '`.
pub fn sentences(text: &str) -> Vec<String> {
    normalize_list(text.split(SENTENCE_DELIMITERS))
}

/// Split a fragment into lowercase words made only of ASCII letters.
///
/// Digits, punctuation and whitespace are all delimiters.
pub fn words(fragment: &str) -> Vec<String> {
    normalize_list(fragment.split(|c: char| !c.is_ascii_alphabetic()))
}
