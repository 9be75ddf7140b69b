//! quizforge-core — Rule-based quiz generation engine.
//!
//! Turns document text and a keyword list into a reproducible set of
//! fill-in-the-blank and true/false questions using lexical heuristics only,
//! and grades answer sheets against the result.

pub mod builder;
pub mod distractor;
pub mod engine;
pub mod error;
pub mod grading;
pub mod model;
pub mod negation;
pub mod text;

pub use engine::{checked_count, generate_quiz, EngineConfig, QuizEngine};
pub use error::QuizError;
pub use model::{Keyword, Question, Quiz, Sentence};
pub use negation::{FrenchNegation, NegationTransformer};
