//! The `quizforge generate` command.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use comfy_table::{Cell, Table};

use quizforge_core::model::Question;
use quizforge_core::{checked_count, Quiz, QuizEngine};

use crate::config::load_config_from;

#[allow(clippy::too_many_arguments)]
pub fn execute(
    text_path: PathBuf,
    keywords: Option<String>,
    keywords_file: Option<PathBuf>,
    count: Option<i64>,
    seed: Option<u64>,
    format: Option<String>,
    output: Option<PathBuf>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let mut config = load_config_from(config_path.as_deref())?;
    if let Some(seed) = seed {
        config.engine.seed = seed;
    }
    let format = format.unwrap_or_else(|| config.format.clone());
    anyhow::ensure!(
        matches!(format.as_str(), "json" | "table"),
        "unknown format '{format}', expected json or table"
    );

    let count = match count {
        Some(n) => checked_count(n)?,
        None => config.engine.default_question_count,
    };

    let text = std::fs::read_to_string(&text_path)
        .with_context(|| format!("failed to read text from {}", text_path.display()))?;
    let keywords = collect_keywords(keywords.as_deref(), keywords_file.as_deref())?;
    if keywords.is_empty() {
        tracing::warn!("no keywords given, the quiz will only hold true/false questions");
    }

    let engine = QuizEngine::new(config.engine)?;
    let quiz = engine.generate(&text, &keywords, count)?;

    if quiz.len() < count {
        eprintln!(
            "Only {} of {count} questions could be generated from {}",
            quiz.len(),
            text_path.display()
        );
    }

    let rendered = match format.as_str() {
        "table" => render_table(&quiz),
        _ => serde_json::to_string_pretty(&quiz)?,
    };

    match output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, rendered)
                .with_context(|| format!("failed to write quiz to {}", path.display()))?;
            println!(
                "Saved {} questions ({} multiple choice) to {}",
                quiz.len(),
                quiz.mcq_count(),
                path.display()
            );
        }
        None => println!("{rendered}"),
    }

    Ok(())
}

/// Merge keywords from `--keywords` (comma-separated) and `--keywords-file`
/// (one per line, `#` starts a comment).
fn collect_keywords(inline: Option<&str>, file: Option<&Path>) -> Result<Vec<String>> {
    let mut keywords: Vec<String> = inline
        .into_iter()
        .flat_map(|s| s.split(','))
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(String::from)
        .collect();

    if let Some(path) = file {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read keywords from {}", path.display()))?;
        keywords.extend(
            content
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#'))
                .map(String::from),
        );
    }

    Ok(keywords)
}

fn render_table(quiz: &Quiz) -> String {
    let mut table = Table::new();
    table.set_header(vec!["#", "Type", "Question", "Choices", "Answer"]);

    for (i, question) in quiz.iter().enumerate() {
        let choices = match question {
            Question::Mcq { choices, .. } => choices
                .iter()
                .enumerate()
                .map(|(j, c)| format!("{}) {c}", choice_label(j)))
                .collect::<Vec<_>>()
                .join("\n"),
            Question::TrueFalse { .. } => "Vrai / Faux".to_string(),
        };
        table.add_row(vec![
            Cell::new(i),
            Cell::new(question.kind()),
            Cell::new(question.text()),
            Cell::new(choices),
            Cell::new(question.answer_text()),
        ]);
    }

    table.to_string()
}

fn choice_label(index: usize) -> char {
    u8::try_from(index)
        .ok()
        .and_then(|i| b'A'.checked_add(i))
        .filter(u8::is_ascii_uppercase)
        .map_or('?', char::from)
}
