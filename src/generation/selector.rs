//! # Word Selection
//!
//! Turns a theme's raw pools into the words used by one attempt: drop words
//! that cannot be laid out well, drop words that look too much like an earlier
//! pick, then sample the requested counts.

use super::{AttemptFailure, Difficulty, WordPool};
use crate::{config, Theme};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::{HashMap, HashSet};

/// Words chosen for one generation attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectedWords {
    pub target_words: Vec<String>,
    pub distractor_words: Vec<String>,
}

/// Uppercases and trims a raw theme word.
pub fn normalize_word(raw: &str) -> String {
    raw.trim().to_uppercase()
}

/// Checks a normalized word: 3 to 6 letters, only `A`-`Z`, and no letter
/// repeated more than twice.
///
/// # Examples
///
/// ```
/// use snakeword::is_valid_word;
///
/// assert!(is_valid_word("SHEEP"));
/// assert!(!is_valid_word("CHEESE")); // three E's
/// assert!(!is_valid_word("OX"));
/// assert!(!is_valid_word("ICE-CREAM"));
/// ```
pub fn is_valid_word(word: &str) -> bool {
    let len = word.chars().count();
    if !(config::MIN_WORD_LENGTH..=config::MAX_WORD_LENGTH).contains(&len) {
        return false;
    }
    if !word.chars().all(|c| c.is_ascii_uppercase()) {
        return false;
    }

    let mut counts: HashMap<char, usize> = HashMap::new();
    for c in word.chars() {
        *counts.entry(c).or_insert(0) += 1;
    }
    counts.values().all(|&n| n <= config::MAX_LETTER_REPEATS)
}

/// Number of distinct letters two words have in common.
pub fn shared_letter_count(a: &str, b: &str) -> usize {
    let a: HashSet<char> = a.chars().collect();
    let b: HashSet<char> = b.chars().collect();
    a.intersection(&b).count()
}

/// Normalized, valid words of `pool` that the difficulty allows.
pub fn eligible_words(pool: &[String], difficulty: Difficulty, kind: WordPool) -> Vec<String> {
    pool.iter()
        .map(|raw| normalize_word(raw))
        .filter(|word| is_valid_word(word))
        .filter(|word| {
            let len = word.chars().count();
            match kind {
                WordPool::Target => difficulty.allows_target_length(len),
                WordPool::Distractor => difficulty.allows_distractor_length(len),
            }
        })
        .collect()
}

/// Walks targets then distractors in order, keeping a word only if it shares
/// at most `threshold` distinct letters with every word kept so far. Exact
/// repeats of a kept word are dropped as well.
pub fn remove_conflicting_words(
    targets: Vec<String>,
    distractors: Vec<String>,
    threshold: usize,
) -> (Vec<String>, Vec<String>) {
    let mut accepted: Vec<String> = Vec::new();
    let mut kept_targets = Vec::new();
    let mut kept_distractors = Vec::new();

    let combined = targets
        .into_iter()
        .map(|w| (w, WordPool::Target))
        .chain(distractors.into_iter().map(|w| (w, WordPool::Distractor)));

    for (word, pool) in combined {
        let conflicts = accepted
            .iter()
            .any(|kept| kept == &word || shared_letter_count(kept, &word) > threshold);
        if conflicts {
            continue;
        }

        accepted.push(word.clone());
        match pool {
            WordPool::Target => kept_targets.push(word),
            WordPool::Distractor => kept_distractors.push(word),
        }
    }

    (kept_targets, kept_distractors)
}

/// Filters the theme's pools for `difficulty` and randomly samples
/// `target_count` targets and `distractor_count` distractors.
///
/// Fails with [`AttemptFailure::InsufficientWords`] when either filtered pool
/// is smaller than requested.
pub fn select_words<R: Rng>(
    theme: &Theme,
    difficulty: Difficulty,
    target_count: usize,
    distractor_count: usize,
    rng: &mut R,
) -> Result<SelectedWords, AttemptFailure> {
    let targets = eligible_words(&theme.target_words, difficulty, WordPool::Target);
    let distractors = eligible_words(&theme.distractor_words, difficulty, WordPool::Distractor);

    let (mut targets, mut distractors) =
        remove_conflicting_words(targets, distractors, difficulty.conflict_threshold());

    if targets.len() < target_count {
        return Err(AttemptFailure::InsufficientWords {
            pool: WordPool::Target,
            required: target_count,
            available: targets.len(),
        });
    }
    if distractors.len() < distractor_count {
        return Err(AttemptFailure::InsufficientWords {
            pool: WordPool::Distractor,
            required: distractor_count,
            available: distractors.len(),
        });
    }

    targets.shuffle(rng);
    distractors.shuffle(rng);
    targets.truncate(target_count);
    distractors.truncate(distractor_count);

    Ok(SelectedWords {
        target_words: targets,
        distractor_words: distractors,
    })
}
