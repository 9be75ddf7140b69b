//! Core data model types for quizforge.
//!
//! Sentences and keywords are validated at construction, questions are a
//! closed sum type, and a quiz is an immutable ordered list of questions.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::text::normalize_space;

/// Minimum number of characters a fragment needs to count as a sentence.
pub const MIN_SENTENCE_CHARS: usize = 20;

/// Minimum number of characters a keyword needs to be usable.
pub const MIN_KEYWORD_CHARS: usize = 3;

/// A whitespace-normalized sentence of the source text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Sentence(String);

impl Sentence {
    /// Normalize `raw` and keep it only if it is long enough to be a sentence.
    pub fn new(raw: &str) -> Option<Self> {
        let normalized = normalize_space(raw);
        if normalized.chars().count() < MIN_SENTENCE_CHARS {
            return None;
        }
        Some(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Sentence {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Sentence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A normalized, lower-cased keyword.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Keyword(String);

impl Keyword {
    /// Normalize `raw`; returns `None` for entries shorter than three characters.
    pub fn new(raw: &str) -> Option<Self> {
        let normalized = normalize_space(raw).to_lowercase();
        if normalized.chars().count() < MIN_KEYWORD_CHARS {
            return None;
        }
        Some(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in characters, used as the informativeness proxy.
    pub fn char_len(&self) -> usize {
        self.0.chars().count()
    }
}

impl AsRef<str> for Keyword {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single quiz question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Question {
    /// Fill-in-the-blank multiple choice question.
    Mcq {
        /// Source sentence with the keyword replaced by a blank marker.
        prompt: String,
        /// Candidate answers, in display order.
        choices: Vec<String>,
        /// Index of the correct answer in `choices`.
        correct_index: usize,
        explanation: String,
    },
    /// Statement to be judged true or false against the source text.
    TrueFalse {
        statement: String,
        is_true: bool,
        explanation: String,
    },
}

impl Question {
    /// Short machine-readable kind, matching the serialized `type` tag.
    pub fn kind(&self) -> &'static str {
        match self {
            Question::Mcq { .. } => "mcq",
            Question::TrueFalse { .. } => "true_false",
        }
    }

    /// The text shown to the quiz taker.
    pub fn text(&self) -> &str {
        match self {
            Question::Mcq { prompt, .. } => prompt,
            Question::TrueFalse { statement, .. } => statement,
        }
    }

    pub fn explanation(&self) -> &str {
        match self {
            Question::Mcq { explanation, .. } | Question::TrueFalse { explanation, .. } => {
                explanation
            }
        }
    }

    /// The correct answer rendered as text.
    pub fn answer_text(&self) -> String {
        match self {
            Question::Mcq {
                choices,
                correct_index,
                ..
            } => choices.get(*correct_index).cloned().unwrap_or_default(),
            Question::TrueFalse { is_true, .. } => {
                if *is_true {
                    "Vrai".to_string()
                } else {
                    "Faux".to_string()
                }
            }
        }
    }
}

/// An ordered, immutable list of questions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quiz {
    questions: Vec<Question>,
}

impl Quiz {
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Question> {
        self.questions.iter()
    }

    /// Number of multiple choice questions.
    pub fn mcq_count(&self) -> usize {
        self.questions
            .iter()
            .filter(|q| matches!(q, Question::Mcq { .. }))
            .count()
    }

    pub fn into_questions(self) -> Vec<Question> {
        self.questions
    }
}

impl<'a> IntoIterator for &'a Quiz {
    type Item = &'a Question;
    type IntoIter = std::slice::Iter<'a, Question>;

    fn into_iter(self) -> Self::IntoIter {
        self.questions.iter()
    }
}
