//! Heuristic negation of affirmative sentences.
//!
//! The rules are lexical, not grammatical: the output is only guaranteed to
//! differ from the input, and may read awkwardly or keep a true meaning.
//! Other languages plug in by implementing [`NegationTransformer`].

use std::sync::LazyLock;

use regex::{Regex, RegexSet};

use crate::text::normalize_space;

/// Turns affirmative statements into negated ones.
pub trait NegationTransformer: Send + Sync {
    /// Returns `true` if the sentence already carries a negation marker.
    fn contains_negation(&self, sentence: &str) -> bool;

    /// Produce a negated reading of `sentence`.
    ///
    /// Sentences that are already negative are returned unchanged (after
    /// whitespace normalization).
    fn inject_negation(&self, sentence: &str) -> String;

    /// Wrap `sentence` in an explicit denial clause.
    fn deny(&self, sentence: &str) -> String;
}

// ---------------------------------------------------------------------------
// French rule table
// ---------------------------------------------------------------------------

static NEGATION_MARKERS: LazyLock<RegexSet> = LazyLock::new(|| {
    RegexSet::new([
        r"(?i)\bne\b.*\bpas\b",
        r"(?i)\bn['’][^ ]+\b.*\bpas\b",
        r"(?i)\bjamais\b",
        r"(?i)\baucun(e|s)?\b",
        r"(?i)\bplus\b",
        r"(?i)\bsans\b",
    ])
    .expect("valid negation marker regexes")
});

/// Auxiliaries tried in order; the first pattern with a match wins.
static AUXILIARIES: LazyLock<[Regex; 2]> = LazyLock::new(|| {
    [
        Regex::new(r"(?i)\b(est|sont|était|étaient|sera|seront)\b")
            .expect("valid auxiliary regex"),
        Regex::new(r"(?i)\b(a|ont|avait|avaient|aura|auront)\b").expect("valid auxiliary regex"),
    ]
});

static NE_THEN_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bne\s+(\S+)\b").expect("valid ne-word regex"));

const DENIAL_PREFIX: &str = "Il n'est pas vrai que";
const DENIAL_OPENINGS: [&str; 2] = ["il n'est pas vrai que", "ce n'est pas vrai que"];

/// Tag appended to a statement that must be told apart from a source sentence.
pub const NEGATION_TAG: &str = "(négation)";

/// Negation rules for French: `ne … pas` around common auxiliaries, with an
/// "Il n'est pas vrai que …" fallback.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrenchNegation;

impl FrenchNegation {
    pub fn new() -> Self {
        Self
    }

    fn insert_around_auxiliary(sentence: &str) -> Option<String> {
        let aux = AUXILIARIES
            .iter()
            .find_map(|pattern| pattern.find(sentence))?;

        let with_ne = format!(
            "{} ne{}",
            &sentence[..aux.end()],
            &sentence[aux.end()..]
        );
        Some(
            NE_THEN_WORD
                .replacen(&with_ne, 1, "ne ${1} pas")
                .into_owned(),
        )
    }
}

impl NegationTransformer for FrenchNegation {
    fn contains_negation(&self, sentence: &str) -> bool {
        let padded = format!(" {} ", normalize_space(sentence).to_lowercase());
        NEGATION_MARKERS.is_match(&padded)
    }

    fn inject_negation(&self, sentence: &str) -> String {
        let s = normalize_space(sentence);

        if self.contains_negation(&s) {
            return s;
        }

        if let Some(negated) = Self::insert_around_auxiliary(&s) {
            return negated;
        }

        self.deny(&s)
    }

    fn deny(&self, sentence: &str) -> String {
        let s = normalize_space(sentence);
        let lower = s.to_lowercase();
        if DENIAL_OPENINGS.iter().any(|opening| lower.starts_with(opening)) {
            return format!("{s} {NEGATION_TAG}");
        }
        format!("{DENIAL_PREFIX} {}", lowercase_first(&s))
    }
}

fn lowercase_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_negation_markers() {
        let fr = FrenchNegation::new();
        assert!(fr.contains_negation("Il ne pleut jamais ici."));
        assert!(fr.contains_negation("Le chat ne dort pas sur le tapis."));
        assert!(fr.contains_negation("Il n'a pas faim ce matin."));
        assert!(fr.contains_negation("Il n’a pas faim ce matin."));
        assert!(fr.contains_negation("Aucune réponse ne convient."));
        assert!(fr.contains_negation("Ils partent sans bagages."));
        assert!(fr.contains_negation("Il JAMAIS ne viendra."));
    }

    #[test]
    fn ignores_affirmative_sentences() {
        let fr = FrenchNegation::new();
        assert!(!fr.contains_negation("Le chat dort sur le tapis."));
        assert!(!fr.contains_negation("Le pas de la porte est glissant."));
        assert!(!fr.contains_negation("Le sansonnet chante le matin."));
    }

    #[test]
    fn plus_counts_as_negation() {
        // Known false positive of the lexical rules.
        let fr = FrenchNegation::new();
        assert!(fr.contains_negation("Il y a de plus en plus de voitures."));
    }

    #[test]
    fn already_negative_sentence_is_unchanged() {
        let fr = FrenchNegation::new();
        assert_eq!(
            fr.inject_negation("Il  ne pleut\njamais ici."),
            "Il ne pleut jamais ici."
        );
    }

    #[test]
    fn injects_around_first_auxiliary() {
        let fr = FrenchNegation::new();
        assert_eq!(
            fr.inject_negation("Le ciel est bleu en été."),
            "Le ciel est ne bleu pas en été."
        );
        assert_eq!(
            fr.inject_negation("Les plantes ont besoin de lumière."),
            "Les plantes ont ne besoin pas de lumière."
        );
    }

    #[test]
    fn auxiliary_patterns_are_tried_in_order() {
        let fr = FrenchNegation::new();
        // "a" appears first, but the être forms are tried before avoir.
        assert_eq!(
            fr.inject_negation("Marie a dit que le ciel est bleu."),
            "Marie a dit que le ciel est ne bleu pas."
        );
    }

    #[test]
    fn auxiliary_match_is_case_insensitive() {
        let fr = FrenchNegation::new();
        let negated = fr.inject_negation("Cette méthode SERA utile demain matin.");
        assert_eq!(negated, "Cette méthode SERA ne utile pas demain matin.");
    }

    #[test]
    fn falls_back_to_denial_clause() {
        let fr = FrenchNegation::new();
        assert_eq!(
            fr.inject_negation("Le chat dort sur le tapis."),
            "Il n'est pas vrai que le chat dort sur le tapis."
        );
    }

    #[test]
    fn deny_lowercases_first_letter_only() {
        let fr = FrenchNegation::new();
        assert_eq!(
            fr.deny("Émile Zola écrit Germinal."),
            "Il n'est pas vrai que émile Zola écrit Germinal."
        );
    }

    #[test]
    fn deny_of_a_denial_appends_tag() {
        let fr = FrenchNegation::new();
        let once = fr.deny("Le chat dort sur le tapis.");
        let twice = fr.deny(&once);
        assert_eq!(twice, format!("{once} (négation)"));
        assert_ne!(once, twice);
    }

    #[test]
    fn negated_output_differs_from_input() {
        let fr = FrenchNegation::new();
        for s in [
            "Le soleil est une étoile.",
            "Les abeilles ont des ailes.",
            "Paris accueille les jeux.",
            "Le moteur aura besoin d'huile.",
        ] {
            assert_ne!(fr.inject_negation(s), s);
        }
    }
}
