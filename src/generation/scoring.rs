//! # Candidate Scoring
//!
//! Heuristic quality score used to pick the best of several attempts.

use crate::{config, GeneratedPuzzle};
use std::collections::HashSet;

/// Points per placed target word
pub const TARGET_WORD_POINTS: i64 = 30;

/// Points per placed distractor word
pub const DISTRACTOR_WORD_POINTS: i64 = 20;

/// Total placed words needed for the distribution bonus
pub const FULL_SET_WORDS: usize = 5;

/// Bonus for placing at least [`FULL_SET_WORDS`] words
pub const FULL_SET_BONUS: i64 = 20;

/// Penalty per failed placement
pub const FAILED_PLACEMENT_PENALTY: i64 = 5;

/// Points per distinct orientation in use
pub const ORIENTATION_VARIETY_POINTS: i64 = 5;

/// Scores a candidate puzzle. Never negative.
///
/// ```text
/// 30 × targets + 20 × distractors
///   + 20 if at least 5 words were placed
///   − 5 × failed placements
///   + 5 × distinct orientations
/// ```
pub fn score_candidate(candidate: &GeneratedPuzzle) -> u32 {
    let mut score = candidate.target_words.len() as i64 * TARGET_WORD_POINTS
        + candidate.distractor_words.len() as i64 * DISTRACTOR_WORD_POINTS;

    if candidate.total_words() >= FULL_SET_WORDS {
        score += FULL_SET_BONUS;
    }

    score -= candidate.generation_stats.failed_placements as i64 * FAILED_PLACEMENT_PENALTY;

    let orientations: HashSet<_> = candidate.all_words().map(|word| word.orientation).collect();
    score += orientations.len() as i64 * ORIENTATION_VARIETY_POINTS;

    score.max(0) as u32
}

/// Whether a score is high enough to stop searching.
pub fn is_good_enough(score: u32) -> bool {
    score >= config::GOOD_ENOUGH_SCORE
}
