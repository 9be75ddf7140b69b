//! The `quizforge inspect` command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use comfy_table::{Cell, Table};

use quizforge_core::text::segment;
use quizforge_core::{FrenchNegation, NegationTransformer};

pub fn execute(text_path: PathBuf) -> Result<()> {
    let text = std::fs::read_to_string(&text_path)
        .with_context(|| format!("failed to read text from {}", text_path.display()))?;

    let sentences = segment(&text);
    if sentences.is_empty() {
        println!(
            "No usable sentences in {} (sentences need at least 20 characters).",
            text_path.display()
        );
        return Ok(());
    }

    let rules = FrenchNegation::new();
    let mut table = Table::new();
    table.set_header(vec!["#", "Chars", "Negation", "Sentence"]);

    for (i, sentence) in sentences.iter().enumerate() {
        let negated = if rules.contains_negation(sentence.as_str()) {
            "yes"
        } else {
            "no"
        };
        table.add_row(vec![
            Cell::new(i),
            Cell::new(sentence.as_str().chars().count()),
            Cell::new(negated),
            Cell::new(sentence.as_str()),
        ]);
    }

    println!("{table}");
    println!("\n{} sentences", sentences.len());

    Ok(())
}
