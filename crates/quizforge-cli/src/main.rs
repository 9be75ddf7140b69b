//! quizforge CLI — generate and grade quizzes from document text.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;
mod config;

#[derive(Parser)]
#[command(
    name = "quizforge",
    version,
    about = "Rule-based quiz generation from French documents"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a quiz from a text file
    Generate {
        /// Path to the source text (UTF-8)
        #[arg(long)]
        text: PathBuf,

        /// Keywords, comma-separated (e.g. "photosynthèse,chlorophylle")
        #[arg(long)]
        keywords: Option<String>,

        /// File with one keyword per line
        #[arg(long)]
        keywords_file: Option<PathBuf>,

        /// Number of questions (default from config)
        #[arg(long, allow_negative_numbers = true)]
        count: Option<i64>,

        /// Random seed (overrides config and QUIZFORGE_SEED)
        #[arg(long)]
        seed: Option<u64>,

        /// Output format: json, table
        #[arg(long)]
        format: Option<String>,

        /// Write the quiz to this file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Show how a text is split into sentences
    Inspect {
        /// Path to the source text (UTF-8)
        #[arg(long)]
        text: PathBuf,
    },

    /// Grade an answer sheet against a generated quiz
    Grade {
        /// Quiz JSON produced by `quizforge generate`
        #[arg(long)]
        quiz: PathBuf,

        /// Answers JSON: a list of {q_index, selected_index | selected_bool}
        #[arg(long)]
        answers: PathBuf,

        /// Save the grade report as JSON
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Create a starter config and sample text
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("quizforge=info".parse().expect("valid directive")),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate {
            text,
            keywords,
            keywords_file,
            count,
            seed,
            format,
            output,
            config,
        } => commands::generate::execute(
            text,
            keywords,
            keywords_file,
            count,
            seed,
            format,
            output,
            config,
        ),
        Commands::Inspect { text } => commands::inspect::execute(text),
        Commands::Grade {
            quiz,
            answers,
            output,
        } => commands::grade::execute(quiz, answers, output),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
