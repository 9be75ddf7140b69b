//! Quiz orchestrator.
//!
//! Composes segmentation, keyword matching and the question builders into a
//! fixed-length, reproducible quiz. Each call seeds its own random generator,
//! so concurrent calls never influence each other.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::builder::{build_mcq, build_true_false, DEFAULT_CHOICE_COUNT};
use crate::error::{QuizError, Result};
use crate::model::{Keyword, Quiz, Sentence};
use crate::negation::{FrenchNegation, NegationTransformer};
use crate::text::{find_sentence, segment, WordPattern};

/// Seed used when none is configured.
pub const DEFAULT_SEED: u64 = 42;

/// Configuration for the quiz engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Seed for choice and sentence shuffling, re-applied on every call.
    pub seed: u64,
    /// Number of choices per multiple choice question.
    pub choice_count: usize,
    /// Question count used by callers that do not ask for one.
    pub default_question_count: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            choice_count: DEFAULT_CHOICE_COUNT,
            default_question_count: 5,
        }
    }
}

impl EngineConfig {
    /// Reject configurations that cannot produce valid questions.
    pub fn validate(&self) -> Result<()> {
        if self.choice_count < 2 {
            return Err(QuizError::InvalidConfig(format!(
                "choice_count must be at least 2, got {}",
                self.choice_count
            )));
        }
        Ok(())
    }
}

/// The quiz generation engine.
pub struct QuizEngine {
    config: EngineConfig,
    negation: Box<dyn NegationTransformer>,
}

impl QuizEngine {
    /// Create an engine with the French negation rules.
    pub fn new(config: EngineConfig) -> Result<Self> {
        Self::with_negation(config, Box::new(FrenchNegation))
    }

    /// Create an engine with a custom negation rule set.
    pub fn with_negation(
        config: EngineConfig,
        negation: Box<dyn NegationTransformer>,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, negation })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Generate up to `count` questions from `text`.
    ///
    /// Multiple choice questions come first, one per keyword (longest
    /// keywords first) that still has an unused sentence containing it.
    /// True/false questions drawn from the remaining sentences fill the rest.
    /// A quiz shorter than `count` is returned when the text runs out of
    /// usable sentences.
    pub fn generate<S: AsRef<str>>(
        &self,
        text: &str,
        keywords: &[S],
        count: usize,
    ) -> Result<Quiz> {
        let mut rng = StdRng::seed_from_u64(self.config.seed);

        let sentences = segment(text);
        let keywords = rank_keywords(keywords);
        let pool: Vec<&str> = keywords.iter().map(Keyword::as_str).collect();

        let mut used: HashSet<Sentence> = HashSet::new();
        let mut questions = Vec::with_capacity(count.min(sentences.len()));

        for keyword in &keywords {
            if questions.len() >= count {
                break;
            }

            let pattern = WordPattern::new(keyword.as_str())?;
            let unused = sentences.iter().filter(|s| !used.contains(*s));
            let Some(sentence) = find_sentence(unused, &pattern) else {
                tracing::debug!(%keyword, "no unused sentence contains keyword");
                continue;
            };

            questions.push(build_mcq(
                sentence,
                &pattern,
                &pool,
                self.config.choice_count,
                &mut rng,
            ));
            used.insert(sentence.clone());
        }

        let mcq_count = questions.len();
        let missing = count.saturating_sub(mcq_count);
        if missing > 0 {
            questions.extend(build_true_false(
                &sentences,
                missing,
                &mut used,
                self.negation.as_ref(),
                &mut rng,
            ));
        }

        tracing::info!(
            sentences = sentences.len(),
            keywords = keywords.len(),
            mcq = mcq_count,
            true_false = questions.len() - mcq_count,
            requested = count,
            "generated quiz"
        );

        Ok(Quiz::new(questions))
    }
}

impl Default for QuizEngine {
    fn default() -> Self {
        Self {
            config: EngineConfig::default(),
            negation: Box::new(FrenchNegation),
        }
    }
}

impl std::fmt::Debug for QuizEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QuizEngine")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Normalize, de-duplicate and order keywords by descending length.
///
/// Entries shorter than three characters are dropped. Keywords of equal
/// length keep their input order.
pub fn rank_keywords<S: AsRef<str>>(keywords: &[S]) -> Vec<Keyword> {
    let mut seen = HashSet::new();
    let mut ranked: Vec<Keyword> = keywords
        .iter()
        .filter_map(|raw| Keyword::new(raw.as_ref()))
        .filter(|kw| seen.insert(kw.clone()))
        .collect();
    ranked.sort_by(|a, b| b.char_len().cmp(&a.char_len()));
    ranked
}

/// Generate a quiz with the default engine.
///
/// A negative `count` is rejected with [`QuizError::InvalidCount`].
pub fn generate_quiz<S: AsRef<str>>(text: &str, keywords: &[S], count: i64) -> Result<Quiz> {
    QuizEngine::default().generate(text, keywords, checked_count(count)?)
}

/// Convert a caller-supplied question count, rejecting negative values.
pub fn checked_count(count: i64) -> Result<usize> {
    usize::try_from(count).map_err(|_| QuizError::InvalidCount(count))
}
