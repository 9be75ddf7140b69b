//! Question builders: fill-in-the-blank MCQs and true/false statements.

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::distractor::{pad_with_fillers, pick_distractors};
use crate::model::{Question, Sentence};
use crate::negation::{NegationTransformer, NEGATION_TAG};
use crate::text::{WordPattern, BLANK};

/// Default number of choices per multiple choice question.
pub const DEFAULT_CHOICE_COUNT: usize = 4;

const TRUE_EXPLANATION: &str = "Énoncé identique à une phrase du texte → Vrai.";
const FALSE_EXPLANATION: &str =
    "La phrase contient une négation/inversion du sens par rapport au texte → Faux.";

// ---------------------------------------------------------------------------
// Multiple choice
// ---------------------------------------------------------------------------

/// Build a fill-in-the-blank question for the pattern's keyword.
///
/// `pool` supplies distractor candidates; any shortfall is filled with
/// synthetic variants of the keyword. Choice order comes from `rng`.
pub fn build_mcq<S, R>(
    sentence: &Sentence,
    keyword: &WordPattern,
    pool: &[S],
    choice_count: usize,
    rng: &mut R,
) -> Question
where
    S: AsRef<str>,
    R: Rng + ?Sized,
{
    let word = keyword.word();
    let masked = keyword.mask(sentence.as_str(), BLANK);

    let wanted = choice_count.saturating_sub(1);
    let mut distractors = pick_distractors(word, pool, wanted);
    if distractors.len() < wanted {
        tracing::debug!(
            keyword = word,
            found = distractors.len(),
            wanted,
            "padding distractors with fillers"
        );
        pad_with_fillers(word, &mut distractors, wanted);
    }

    let mut choices = distractors;
    choices.push(word.to_string());
    choices.shuffle(rng);
    // Fillers and distractors never equal the keyword, so this finds exactly one entry.
    let correct_index = choices
        .iter()
        .position(|choice| choice == word)
        .unwrap_or_default();

    Question::Mcq {
        prompt: format!("Complète la phrase : « {masked} »"),
        choices,
        correct_index,
        explanation: format!(
            "Le mot manquant est « {word} » tel qu'il apparaît dans le texte d'origine."
        ),
    }
}

// ---------------------------------------------------------------------------
// True / false
// ---------------------------------------------------------------------------

/// Build up to `need` true/false questions from sentences not yet in `used`.
///
/// The remaining sentences are shuffled with `rng` and consumed in order.
/// Even positions yield the sentence verbatim (true), odd positions a
/// negated version (false) that never equals any sentence in `sentences`.
/// Every consumed sentence is added to `used`.
pub fn build_true_false<R>(
    sentences: &[Sentence],
    need: usize,
    used: &mut HashSet<Sentence>,
    negation: &dyn NegationTransformer,
    rng: &mut R,
) -> Vec<Question>
where
    R: Rng + ?Sized,
{
    let sources: HashSet<&str> = sentences.iter().map(Sentence::as_str).collect();

    let mut seen = HashSet::new();
    let mut pool: Vec<&Sentence> = sentences
        .iter()
        .filter(|s| !used.contains(*s) && seen.insert(s.as_str()))
        .collect();
    pool.shuffle(rng);

    let mut out = Vec::with_capacity(need.min(pool.len()));
    for sentence in pool {
        if out.len() >= need {
            break;
        }

        let question = if out.len() % 2 == 0 {
            Question::TrueFalse {
                statement: sentence.as_str().to_string(),
                is_true: true,
                explanation: TRUE_EXPLANATION.to_string(),
            }
        } else {
            Question::TrueFalse {
                statement: falsify(sentence, &sources, negation),
                is_true: false,
                explanation: FALSE_EXPLANATION.to_string(),
            }
        };
        out.push(question);
        used.insert(sentence.clone());
    }

    out
}

/// Negate `sentence` so that the result matches none of `sources`.
pub fn falsify(
    sentence: &Sentence,
    sources: &HashSet<&str>,
    negation: &dyn NegationTransformer,
) -> String {
    let mut statement = negation.inject_negation(sentence.as_str());
    if sources.contains(statement.as_str()) {
        statement = negation.deny(sentence.as_str());
    }
    while sources.contains(statement.as_str()) {
        statement = format!("{statement} {NEGATION_TAG}");
    }
    statement
}
