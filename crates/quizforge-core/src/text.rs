//! Sentence segmentation and whole-word keyword matching.

use std::sync::LazyLock;

use regex::{NoExpand, Regex, RegexBuilder};

use crate::error::Result;
use crate::model::Sentence;

/// Marker that replaces a masked keyword in a prompt.
pub const BLANK: &str = "____";

/// Sentence-terminal punctuation followed by whitespace. The punctuation
/// mark itself belongs to the preceding sentence.
static SENTENCE_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]\s+").expect("valid sentence boundary regex"));

/// Collapse every whitespace run to a single space and trim both ends.
pub fn normalize_space(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Split `text` into sentences, in source order.
///
/// Fragments shorter than [`crate::model::MIN_SENTENCE_CHARS`] are dropped.
pub fn segment(text: &str) -> Vec<Sentence> {
    let normalized = normalize_space(text);
    let mut sentences = Vec::new();
    let mut start = 0;

    for m in SENTENCE_BOUNDARY.find_iter(&normalized) {
        // The punctuation is a single ASCII byte.
        let end = m.start() + 1;
        sentences.extend(Sentence::new(&normalized[start..end]));
        start = m.end();
    }
    sentences.extend(Sentence::new(&normalized[start..]));

    tracing::debug!(count = sentences.len(), "segmented text");
    sentences
}

/// A case-insensitive, whole-word pattern for a single keyword.
#[derive(Debug, Clone)]
pub struct WordPattern {
    word: String,
    regex: Regex,
}

impl WordPattern {
    pub fn new(word: &str) -> Result<Self> {
        let regex = RegexBuilder::new(&format!(r"\b{}\b", regex::escape(word)))
            .case_insensitive(true)
            .build()?;
        Ok(Self {
            word: word.to_string(),
            regex,
        })
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn is_match(&self, haystack: &str) -> bool {
        self.regex.is_match(haystack)
    }

    /// Replace every whole-word occurrence with `blank`, keeping punctuation.
    pub fn mask(&self, haystack: &str, blank: &str) -> String {
        self.regex.replace_all(haystack, NoExpand(blank)).into_owned()
    }
}

/// Return the first sentence containing the pattern's word.
pub fn find_sentence<'a, I>(sentences: I, pattern: &WordPattern) -> Option<&'a Sentence>
where
    I: IntoIterator<Item = &'a Sentence>,
{
    sentences
        .into_iter()
        .find(|sentence| pattern.is_match(sentence.as_str()))
}
