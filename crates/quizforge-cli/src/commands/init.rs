//! The `quizforge init` command.

use std::path::Path;

use anyhow::Result;

pub fn execute() -> Result<()> {
    write_if_missing(Path::new("quizforge.toml"), SAMPLE_CONFIG)?;

    std::fs::create_dir_all("samples")?;
    write_if_missing(Path::new("samples/example.txt"), EXAMPLE_TEXT)?;
    write_if_missing(Path::new("samples/example.keywords"), EXAMPLE_KEYWORDS)?;

    println!("\nNext steps:");
    println!("  1. Run: quizforge inspect --text samples/example.txt");
    println!(
        "  2. Run: quizforge generate --text samples/example.txt --keywords-file samples/example.keywords --output quiz.json"
    );
    println!("  3. Run: quizforge grade --quiz quiz.json --answers answers.json");

    Ok(())
}

fn write_if_missing(path: &Path, content: &str) -> Result<()> {
    if path.exists() {
        println!("{} already exists, skipping.", path.display());
    } else {
        std::fs::write(path, content)?;
        println!("Created {}", path.display());
    }
    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# quizforge configuration

# Output format for `quizforge generate`: json or table
format = "json"

[engine]
seed = 42
choice_count = 4
default_question_count = 5
"#;

const EXAMPLE_TEXT: &str = r#"La photosynthèse est le processus par lequel les plantes produisent leur propre nourriture. Elle se déroule principalement dans les feuilles, au sein des chloroplastes. La chlorophylle est le pigment vert qui capte l'énergie lumineuse.

Les racines absorbent l'eau et les sels minéraux présents dans le sol. Le dioxyde de carbone entre dans la feuille par de petites ouvertures appelées stomates. Grâce à la lumière, la plante transforme l'eau et le dioxyde de carbone en glucose. L'oxygène est rejeté dans l'atmosphère comme sous-produit.

Le glucose sera ensuite stocké sous forme d'amidon. Une plante privée de lumière ne peut jamais réaliser la photosynthèse. La respiration cellulaire a lieu de jour comme de nuit.
"#;

const EXAMPLE_KEYWORDS: &str = r#"# Un mot-clé par ligne
photosynthèse
chlorophylle
stomates
glucose
amidon
racines
oxygène
"#;
