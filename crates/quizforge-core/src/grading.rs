//! Scoring of submitted answers against a generated quiz.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::{Question, Quiz};

/// One answer as submitted by a quiz taker.
///
/// `selected_index` answers multiple choice questions, `selected_bool`
/// answers true/false questions. A missing `selected_bool` counts as `false`.
///
/// Indices are signed: a negative entry still parses, and [`grade`] skips
/// or marks it wrong.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmittedAnswer {
    #[serde(default)]
    pub q_index: Option<i64>,
    #[serde(default)]
    pub selected_index: Option<i64>,
    #[serde(default)]
    pub selected_bool: Option<bool>,
}

impl SubmittedAnswer {
    pub fn choice(q_index: usize, selected_index: usize) -> Self {
        Self {
            q_index: i64::try_from(q_index).ok(),
            selected_index: i64::try_from(selected_index).ok(),
            selected_bool: None,
        }
    }

    pub fn boolean(q_index: usize, selected: bool) -> Self {
        Self {
            q_index: i64::try_from(q_index).ok(),
            selected_index: None,
            selected_bool: Some(selected),
        }
    }

    /// The question index, if it can address a question at all.
    fn question_index(&self) -> Option<usize> {
        self.q_index.and_then(|i| usize::try_from(i).ok())
    }

    /// The selected choice, if it can address a choice at all.
    fn choice_index(&self) -> Option<usize> {
        self.selected_index.and_then(|i| usize::try_from(i).ok())
    }
}

/// A graded answer, with enough context to explain the verdict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GradedAnswer {
    Mcq {
        q_index: usize,
        question: String,
        choices: Vec<String>,
        selected_index: Option<i64>,
        correct_index: usize,
        is_correct: bool,
        explanation: String,
    },
    TrueFalse {
        q_index: usize,
        statement: String,
        selected_bool: bool,
        correct_bool: bool,
        is_correct: bool,
        explanation: String,
    },
}

impl GradedAnswer {
    pub fn q_index(&self) -> usize {
        match self {
            GradedAnswer::Mcq { q_index, .. } | GradedAnswer::TrueFalse { q_index, .. } => {
                *q_index
            }
        }
    }

    pub fn is_correct(&self) -> bool {
        match self {
            GradedAnswer::Mcq { is_correct, .. } | GradedAnswer::TrueFalse { is_correct, .. } => {
                *is_correct
            }
        }
    }
}

/// The outcome of grading one answer sheet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradeReport {
    /// Unique report identifier.
    pub id: Uuid,
    /// When the sheet was graded.
    pub graded_at: DateTime<Utc>,
    /// Number of correct answers.
    pub score: usize,
    /// Number of questions in the quiz, answered or not.
    pub total: usize,
    /// Graded answers, in submission order.
    pub answers: Vec<GradedAnswer>,
}

impl GradeReport {
    /// Score as a percentage of the quiz length (0 for an empty quiz).
    pub fn percentage(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.score as f64 / self.total as f64 * 100.0
    }

    /// Save the report as JSON to a file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize report")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        Ok(())
    }

    /// Load a report from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read report from {}", path.display()))?;
        serde_json::from_str(&content).context("failed to parse report JSON")
    }
}

/// Grade `answers` against `quiz`.
///
/// Answers without a question index, with a negative one, pointing outside
/// the quiz, or repeating an already graded question are ignored. A negative
/// `selected_index` is graded as a wrong choice.
pub fn grade(quiz: &Quiz, answers: &[SubmittedAnswer]) -> GradeReport {
    let mut graded = Vec::new();
    let mut seen = HashSet::new();

    for answer in answers {
        let Some(q_index) = answer.question_index() else {
            if let Some(raw) = answer.q_index {
                tracing::debug!(q_index = raw, "negative question index, skipping");
            }
            continue;
        };
        let Some(question) = quiz.get(q_index) else {
            tracing::debug!(q_index, total = quiz.len(), "answer outside the quiz, skipping");
            continue;
        };
        if !seen.insert(q_index) {
            tracing::debug!(q_index, "duplicate answer, skipping");
            continue;
        }
        graded.push(grade_one(q_index, question, answer));
    }

    let score = graded.iter().filter(|a| a.is_correct()).count();
    GradeReport {
        id: Uuid::new_v4(),
        graded_at: Utc::now(),
        score,
        total: quiz.len(),
        answers: graded,
    }
}

fn grade_one(q_index: usize, question: &Question, answer: &SubmittedAnswer) -> GradedAnswer {
    match question {
        Question::Mcq {
            prompt,
            choices,
            correct_index,
            explanation,
        } => GradedAnswer::Mcq {
            q_index,
            question: prompt.clone(),
            choices: choices.clone(),
            selected_index: answer.selected_index,
            correct_index: *correct_index,
            is_correct: answer.choice_index() == Some(*correct_index),
            explanation: explanation.clone(),
        },
        Question::TrueFalse {
            statement,
            is_true,
            explanation,
        } => {
            let selected = answer.selected_bool.unwrap_or(false);
            GradedAnswer::TrueFalse {
                q_index,
                statement: statement.clone(),
                selected_bool: selected,
                correct_bool: *is_true,
                is_correct: selected == *is_true,
                explanation: explanation.clone(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_quiz() -> Quiz {
        Quiz::new(vec![
            Question::Mcq {
                prompt: "Complète la phrase : « Le ____ dort sur le tapis. »".into(),
                choices: vec!["chien".into(), "chat".into(), "cha1".into(), "cha2".into()],
                correct_index: 1,
                explanation: "Le mot manquant est « chat ».".into(),
            },
            Question::TrueFalse {
                statement: "Il ne pleut jamais ici.".into(),
                is_true: true,
                explanation: "Vrai.".into(),
            },
            Question::TrueFalse {
                statement: "Le chien aboie ne dans pas le jardin.".into(),
                is_true: false,
                explanation: "Faux.".into(),
            },
        ])
    }

    #[test]
    fn scores_correct_answers() {
        let quiz = sample_quiz();
        let report = grade(
            &quiz,
            &[
                SubmittedAnswer::choice(0, 1),
                SubmittedAnswer::boolean(1, true),
                SubmittedAnswer::boolean(2, true),
            ],
        );
        assert_eq!(report.score, 2);
        assert_eq!(report.total, 3);
        assert_eq!(report.answers.len(), 3);
        assert!(report.answers[0].is_correct());
        assert!(!report.answers[2].is_correct());
        assert!((report.percentage() - 66.666).abs() < 0.01);
    }

    #[test]
    fn skips_invalid_indices_and_duplicates() {
        let quiz = sample_quiz();
        let report = grade(
            &quiz,
            &[
                SubmittedAnswer::default(),
                SubmittedAnswer::choice(7, 0),
                SubmittedAnswer::choice(0, 1),
                SubmittedAnswer::choice(0, 1),
            ],
        );
        assert_eq!(report.answers.len(), 1);
        assert_eq!(report.answers[0].q_index(), 0);
        assert_eq!(report.score, 1);
    }

    #[test]
    fn missing_bool_counts_as_false() {
        let quiz = sample_quiz();
        let answer = SubmittedAnswer {
            q_index: Some(2),
            ..SubmittedAnswer::default()
        };
        let report = grade(&quiz, &[answer]);
        assert_eq!(report.score, 1);
        match &report.answers[0] {
            GradedAnswer::TrueFalse { selected_bool, .. } => assert!(!selected_bool),
            other => panic!("expected true/false, got {other:?}"),
        }
    }

    #[test]
    fn mcq_without_selection_is_wrong() {
        let quiz = sample_quiz();
        let answer = SubmittedAnswer {
            q_index: Some(0),
            selected_bool: Some(true),
            ..SubmittedAnswer::default()
        };
        let report = grade(&quiz, &[answer]);
        assert_eq!(report.score, 0);
        assert!(!report.answers[0].is_correct());
    }

    #[test]
    fn negative_indices_do_not_reject_the_sheet() {
        let json = r#"[
            {"q_index": -1, "selected_index": 0},
            {"q_index": 0, "selected_index": -3},
            {"q_index": 1, "selected_bool": true}
        ]"#;
        let answers: Vec<SubmittedAnswer> = serde_json::from_str(json).unwrap();
        assert_eq!(answers[0].q_index, Some(-1));

        let report = grade(&sample_quiz(), &answers);
        assert_eq!(report.answers.len(), 2);
        assert_eq!(report.answers[0].q_index(), 0);
        assert!(!report.answers[0].is_correct());
        match &report.answers[0] {
            GradedAnswer::Mcq { selected_index, .. } => assert_eq!(*selected_index, Some(-3)),
            other => panic!("expected mcq, got {other:?}"),
        }
        assert!(report.answers[1].is_correct());
        assert_eq!(report.score, 1);
    }

    #[test]
    fn empty_quiz_percentage_is_zero() {
        let report = grade(&Quiz::default(), &[SubmittedAnswer::choice(0, 0)]);
        assert_eq!(report.total, 0);
        assert!(report.answers.is_empty());
        assert_eq!(report.percentage(), 0.0);
    }

    #[test]
    fn submitted_answers_parse_from_json() {
        let json = r#"[{"q_index": 0, "selected_index": 1}, {"q_index": 1, "selected_bool": false}, {}]"#;
        let answers: Vec<SubmittedAnswer> = serde_json::from_str(json).unwrap();
        assert_eq!(answers[0], SubmittedAnswer::choice(0, 1));
        assert_eq!(answers[1], SubmittedAnswer::boolean(1, false));
        assert_eq!(answers[2], SubmittedAnswer::default());
    }

    #[test]
    fn report_json_persistence() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("report.json");
        let report = grade(&sample_quiz(), &[SubmittedAnswer::choice(0, 1)]);
        report.save_json(&path).unwrap();

        let loaded = GradeReport::load_json(&path).unwrap();
        assert_eq!(loaded.id, report.id);
        assert_eq!(loaded.score, 1);
        assert_eq!(loaded.answers, report.answers);
    }
}
