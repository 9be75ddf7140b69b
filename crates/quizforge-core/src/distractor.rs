//! Distractor selection for multiple choice questions.

use std::collections::HashSet;

use crate::model::MIN_KEYWORD_CHARS;

/// Pick up to `k` plausible wrong answers for `keyword` from `pool`.
///
/// Candidates are kept in pool order. A candidate is accepted when it is not
/// the keyword itself, not a duplicate of an earlier pick (both compared
/// case-insensitively), at least three characters long, and its length is
/// within `max(2, len(keyword) / 3)` characters of the keyword's.
pub fn pick_distractors<S: AsRef<str>>(keyword: &str, pool: &[S], k: usize) -> Vec<String> {
    let mut chosen = Vec::new();
    if k == 0 {
        return chosen;
    }

    let key_lower = keyword.to_lowercase();
    let key_len = keyword.chars().count();
    let tolerance = length_tolerance(key_len);
    let mut seen = HashSet::new();

    for candidate in pool {
        let candidate = candidate.as_ref().trim();
        let len = candidate.chars().count();
        let lower = candidate.to_lowercase();

        if len < MIN_KEYWORD_CHARS || lower == key_lower || seen.contains(&lower) {
            continue;
        }
        if len.abs_diff(key_len) <= tolerance {
            seen.insert(lower);
            chosen.push(candidate.to_string());
            if chosen.len() >= k {
                break;
            }
        }
    }

    chosen
}

/// Append synthetic fillers (`<prefix>1`, `<prefix>2`, ...) until
/// `distractors` holds `target` entries.
///
/// The prefix is the first `max(3, len / 2)` characters of the keyword.
/// Fillers that collide case-insensitively with the keyword or an existing
/// entry are skipped.
pub fn pad_with_fillers(keyword: &str, distractors: &mut Vec<String>, target: usize) {
    let key_lower = keyword.to_lowercase();
    let prefix: String = keyword
        .chars()
        .take(MIN_KEYWORD_CHARS.max(keyword.chars().count() / 2))
        .collect();

    let mut taken: HashSet<String> = distractors.iter().map(|d| d.to_lowercase()).collect();
    let mut suffix = 1usize;
    while distractors.len() < target {
        let filler = format!("{prefix}{suffix}");
        let lower = filler.to_lowercase();
        if lower != key_lower && taken.insert(lower) {
            distractors.push(filler);
        }
        suffix += 1;
    }
}

fn length_tolerance(key_len: usize) -> usize {
    2.max(key_len / 3)
}
