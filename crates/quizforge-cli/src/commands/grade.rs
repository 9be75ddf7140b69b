//! The `quizforge grade` command.

use std::path::PathBuf;

use anyhow::{Context, Result};

use quizforge_core::grading::{grade, GradedAnswer, SubmittedAnswer};
use quizforge_core::Quiz;

pub fn execute(quiz_path: PathBuf, answers_path: PathBuf, output: Option<PathBuf>) -> Result<()> {
    let quiz: Quiz = read_json(&quiz_path, "quiz")?;
    let answers: Vec<SubmittedAnswer> = read_json(&answers_path, "answers")?;

    let report = grade(&quiz, &answers);

    println!(
        "Score: {}/{} ({:.1}%)",
        report.score,
        report.total,
        report.percentage()
    );
    for answer in &report.answers {
        let verdict = if answer.is_correct() { "OK" } else { "WRONG" };
        match answer {
            GradedAnswer::Mcq {
                q_index,
                choices,
                selected_index,
                correct_index,
                ..
            } => {
                let selected = selected_index
                    .and_then(|i| usize::try_from(i).ok())
                    .and_then(|i| choices.get(i))
                    .map_or("-", String::as_str);
                let correct = choices.get(*correct_index).map_or("-", String::as_str);
                println!("  [{q_index}] {verdict}: chose '{selected}', answer '{correct}'");
            }
            GradedAnswer::TrueFalse {
                q_index,
                selected_bool,
                correct_bool,
                explanation,
                ..
            } => {
                println!(
                    "  [{q_index}] {verdict}: chose {}, answer {} ({explanation})",
                    vrai_faux(*selected_bool),
                    vrai_faux(*correct_bool)
                );
            }
        }
    }

    let unanswered = report.total - report.answers.len();
    if unanswered > 0 {
        println!("  {unanswered} question(s) without an answer");
    }

    if let Some(path) = output {
        report.save_json(&path)?;
        println!("Report saved to {}", path.display());
    }

    Ok(())
}

fn read_json<T: serde::de::DeserializeOwned>(path: &std::path::Path, what: &str) -> Result<T> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {what} from {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("failed to parse {what} JSON from {}", path.display()))
}

fn vrai_faux(value: bool) -> &'static str {
    if value {
        "Vrai"
    } else {
        "Faux"
    }
}
