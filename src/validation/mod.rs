//! # Validation Module
//!
//! Structural checks on finished puzzles. Problems are returned as data in a
//! [`ValidationReport`]; nothing here fails with an error.
//!
//! Reachability analysis for the snake lives in [`solvability`] and is
//! advisory only.

pub mod solvability;

pub use solvability::*;

use crate::{config, GeneratedPuzzle, Grid, Orientation, Position, Word};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Outcome of [`validate_puzzle_completeness`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    /// True iff `errors` is empty
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationReport {
    fn from_findings(errors: Vec<String>, warnings: Vec<String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
            warnings,
        }
    }
}

/// Checks grid shape, letters, word counts, every word's placement and the
/// letters shared between words.
///
/// # Examples
///
/// ```
/// use snakeword::{generate_puzzle, validate_puzzle_completeness};
/// use snakeword::{GenerationOptions, ThemeRegistry};
///
/// let registry = ThemeRegistry::builtin();
/// let theme = registry.get("Nature").unwrap();
/// let puzzle = generate_puzzle(theme, &GenerationOptions::for_testing(3)).unwrap();
/// let report = validate_puzzle_completeness(&puzzle);
/// assert!(report.is_valid, "{:?}", report.errors);
/// ```
pub fn validate_puzzle_completeness(puzzle: &GeneratedPuzzle) -> ValidationReport {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    let size = puzzle.grid_size();
    if size == 0 {
        errors.push("Grid is empty".to_string());
        return ValidationReport::from_findings(errors, warnings);
    }

    errors.extend(validate_grid_cells(&puzzle.grid));

    if puzzle.target_words.len() < config::MIN_TARGET_WORDS {
        errors.push(format!(
            "Puzzle must have at least {} target words",
            config::MIN_TARGET_WORDS
        ));
    }
    if puzzle.distractor_words.len() < config::MIN_DISTRACTOR_WORDS {
        errors.push(format!(
            "Puzzle must have at least {} distractor words",
            config::MIN_DISTRACTOR_WORDS
        ));
    }

    for word in puzzle.all_words() {
        let (word_errors, word_warnings) = validate_word_placement(&puzzle.grid, word);
        if !word_errors.is_empty() {
            errors.push(format!("Word \"{}\": {}", word.text, word_errors.join(", ")));
        }
        warnings.extend(word_warnings);
    }

    let words: Vec<&Word> = puzzle.all_words().collect();
    let (overlap_errors, overlap_warnings) = validate_word_overlaps(&words);
    errors.extend(overlap_errors);
    warnings.extend(overlap_warnings);

    let stats = &puzzle.generation_stats;
    if stats.failed_placements > config::FAILED_PLACEMENT_WARNING_THRESHOLD {
        warnings.push(
            "High number of failed word placements - consider adjusting word selection".to_string(),
        );
    }
    if stats.attempts > config::ATTEMPT_WARNING_THRESHOLD {
        warnings.push(
            "Required many generation attempts - puzzle may be difficult to generate consistently"
                .to_string(),
        );
    }

    ValidationReport::from_findings(errors, warnings)
}

/// Row lengths and per-cell letters.
fn validate_grid_cells(grid: &Grid) -> Vec<String> {
    let size = grid.size();
    let mut errors = Vec::new();

    for (y, row) in grid.rows().iter().enumerate() {
        if row.len() != size {
            errors.push(format!("Row {} has {} cells, expected {}", y, row.len(), size));
        }

        for (x, cell) in row.iter().enumerate() {
            let pos = Position::new(x as i32, y as i32);
            match cell.letter {
                None => errors.push(format!("Empty letter at position {}", pos)),
                Some(letter) if !letter.is_ascii_uppercase() => {
                    errors.push(format!("Invalid letter '{}' at position {}", letter, pos))
                }
                Some(_) => {}
            }
        }
    }

    errors
}

/// Errors and warnings for one word's placement on `grid`.
pub fn validate_word_placement(grid: &Grid, word: &Word) -> (Vec<String>, Vec<String>) {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    if word.positions.is_empty() {
        errors.push("Word has no positions".to_string());
        return (errors, warnings);
    }

    if word.positions.len() != word.len() {
        errors.push(format!(
            "Position count ({}) doesn't match word length ({})",
            word.positions.len(),
            word.len()
        ));
    }

    for (pos, expected) in word.positions.iter().zip(word.text.chars()) {
        if !grid.is_valid_position(*pos) {
            errors.push(format!("Position {} is out of bounds", pos));
            continue;
        }

        let Some(cell) = grid.get(*pos) else {
            errors.push(format!("No cell found at position {}", pos));
            continue;
        };

        if cell.letter != Some(expected) {
            let found = cell.letter.map_or_else(|| "empty".to_string(), |c| c.to_string());
            errors.push(format!(
                "Letter mismatch at {}: expected \"{}\", found \"{}\"",
                pos, expected, found
            ));
        }

        if !cell.is_part_of_word {
            warnings.push(format!("Cell at {} not marked as part of word", pos));
        }
    }

    errors.extend(validate_word_orientation(word));

    (errors, warnings)
}

/// Checks that the positions form one straight line in the recorded
/// orientation.
pub fn validate_word_orientation(word: &Word) -> Vec<String> {
    let mut errors = Vec::new();
    if word.positions.len() < 2 {
        return errors;
    }

    let delta = word.positions[1] - word.positions[0];
    let Some(expected) = Orientation::from_delta(delta) else {
        errors.push("Word positions are not aligned horizontally or vertically".to_string());
        return errors;
    };

    if word.orientation != expected {
        errors.push(format!(
            "Orientation mismatch: expected \"{}\", got \"{}\"",
            expected, word.orientation
        ));
    }

    let straight = word
        .positions
        .windows(2)
        .all(|pair| pair[1] - pair[0] == delta);
    if !straight {
        errors.push("Word positions do not form a straight line".to_string());
    }

    errors
}

/// Cells claimed by more than one word: differing letters are errors, the
/// same letter is a warning.
pub fn validate_word_overlaps(words: &[&Word]) -> (Vec<String>, Vec<String>) {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    let mut claims: BTreeMap<Position, Vec<(&str, Option<char>)>> = BTreeMap::new();
    for word in words {
        for (i, pos) in word.positions.iter().enumerate() {
            claims
                .entry(*pos)
                .or_default()
                .push((word.text.as_str(), word.letter(i)));
        }
    }

    for (pos, claimants) in claims.iter().filter(|(_, c)| c.len() > 1) {
        let texts: Vec<&str> = claimants.iter().map(|(text, _)| *text).collect();
        let letters: BTreeSet<Option<char>> = claimants.iter().map(|(_, letter)| *letter).collect();

        if letters.len() > 1 {
            errors.push(format!(
                "Letter conflict at {} between words: {}",
                pos,
                texts.join(", ")
            ));
        } else {
            warnings.push(format!("Words overlap at {}: {}", pos, texts.join(", ")));
        }
    }

    (errors, warnings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{generate_fallback_puzzle_with_rng, seeded_rng, ThemeRegistry};

    /// Animals fallback: CAT, DOG, BIRD on rows 1, 3, 5 and TREE, ROCK on rows 0, 2
    fn sample_puzzle() -> GeneratedPuzzle {
        let registry = ThemeRegistry::builtin();
        let theme = registry.get("Animals").unwrap();
        generate_fallback_puzzle_with_rng(theme, &mut seeded_rng(1)).unwrap()
    }

    fn has(messages: &[String], needle: &str) -> bool {
        messages.iter().any(|m| m.contains(needle))
    }

    #[test]
    fn test_valid_puzzle_passes() {
        let report = validate_puzzle_completeness(&sample_puzzle());
        assert!(report.is_valid, "{:?}", report.errors);
        assert!(report.errors.is_empty());
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn test_empty_grid() {
        let mut puzzle = sample_puzzle();
        puzzle.grid = Grid::from_rows(Vec::new());
        let report = validate_puzzle_completeness(&puzzle);
        assert!(!report.is_valid);
        assert_eq!(report.errors, vec!["Grid is empty".to_string()]);
    }

    #[test]
    fn test_ragged_row() {
        let mut puzzle = sample_puzzle();
        puzzle.grid.rows_mut()[4].pop();
        let report = validate_puzzle_completeness(&puzzle);
        assert!(!report.is_valid);
        assert!(has(&report.errors, "Row 4 has 5 cells, expected 6"));
    }

    #[test]
    fn test_empty_and_invalid_letters() {
        let mut puzzle = sample_puzzle();
        puzzle.grid.get_mut(Position::new(0, 4)).unwrap().letter = None;
        puzzle.grid.get_mut(Position::new(5, 4)).unwrap().letter = Some('q');
        let report = validate_puzzle_completeness(&puzzle);
        assert!(!report.is_valid);
        assert!(has(&report.errors, "Empty letter at position (0, 4)"));
        assert!(has(&report.errors, "Invalid letter 'q' at position (5, 4)"));
    }

    #[test]
    fn test_minimum_word_counts() {
        let mut puzzle = sample_puzzle();
        puzzle.target_words.pop();
        puzzle.distractor_words.pop();
        let report = validate_puzzle_completeness(&puzzle);
        assert!(!report.is_valid);
        assert!(has(&report.errors, "at least 3 target words"));
        assert!(has(&report.errors, "at least 2 distractor words"));
    }

    #[test]
    fn test_letter_mismatch() {
        let mut puzzle = sample_puzzle();
        // 'A' of CAT
        puzzle.grid.get_mut(Position::new(2, 1)).unwrap().letter = Some('Z');
        let report = validate_puzzle_completeness(&puzzle);
        assert!(!report.is_valid);
        assert!(has(
            &report.errors,
            "Word \"CAT\": Letter mismatch at (2, 1): expected \"A\", found \"Z\""
        ));
    }

    #[test]
    fn test_orientation_mismatch() {
        let mut puzzle = sample_puzzle();
        puzzle.target_words[0].orientation = Orientation::TopToBottom;
        let report = validate_puzzle_completeness(&puzzle);
        assert!(!report.is_valid);
        assert!(has(
            &report.errors,
            "Orientation mismatch: expected \"horizontal-lr\", got \"vertical-tb\""
        ));
    }

    #[test]
    fn test_bent_word() {
        let mut word = Word::new("CAT", true);
        word.positions = vec![Position::new(0, 0), Position::new(1, 0), Position::new(1, 1)];
        let errors = validate_word_orientation(&word);
        assert_eq!(errors, vec!["Word positions do not form a straight line".to_string()]);

        word.positions = vec![Position::new(0, 0), Position::new(1, 1), Position::new(2, 2)];
        let errors = validate_word_orientation(&word);
        assert_eq!(
            errors,
            vec!["Word positions are not aligned horizontally or vertically".to_string()]
        );
    }

    #[test]
    fn test_position_count_and_bounds() {
        let mut puzzle = sample_puzzle();
        puzzle.target_words[1].positions.pop();
        puzzle.target_words[2].positions[3] = Position::new(6, 5);
        let report = validate_puzzle_completeness(&puzzle);
        assert!(!report.is_valid);
        assert!(has(
            &report.errors,
            "Position count (2) doesn't match word length (3)"
        ));
        assert!(has(&report.errors, "Position (6, 5) is out of bounds"));
    }

    #[test]
    fn test_unplaced_word() {
        let mut puzzle = sample_puzzle();
        puzzle.distractor_words[0].positions.clear();
        let report = validate_puzzle_completeness(&puzzle);
        assert!(has(&report.errors, "Word \"TREE\": Word has no positions"));
    }

    #[test]
    fn test_unmarked_cell_warning() {
        let mut puzzle = sample_puzzle();
        puzzle.grid.get_mut(Position::new(1, 3)).unwrap().is_part_of_word = false;
        let report = validate_puzzle_completeness(&puzzle);
        assert!(report.is_valid);
        assert!(has(&report.warnings, "Cell at (1, 3) not marked as part of word"));
    }

    #[test]
    fn test_same_letter_overlap_is_warning() {
        let mut puzzle = sample_puzzle();
        let mut twin = puzzle.target_words[0].clone();
        twin.id = crate::new_word_id();
        puzzle.target_words.push(twin);

        let report = validate_puzzle_completeness(&puzzle);
        assert!(report.is_valid, "{:?}", report.errors);
        assert!(has(&report.warnings, "Words overlap at (1, 1): CAT, CAT"));
        assert_eq!(report.warnings.len(), 3);
    }

    #[test]
    fn test_conflicting_overlap_is_error() {
        let cat = {
            let mut word = Word::new("CAT", true);
            word.positions = vec![Position::new(1, 1), Position::new(2, 1), Position::new(3, 1)];
            word
        };
        let tac = {
            let mut word = Word::new("TAC", true);
            word.positions = cat.positions.clone();
            word
        };

        let (errors, warnings) = validate_word_overlaps(&[&cat, &tac]);
        assert_eq!(
            errors,
            vec![
                "Letter conflict at (1, 1) between words: CAT, TAC".to_string(),
                "Letter conflict at (3, 1) between words: CAT, TAC".to_string(),
            ]
        );
        assert_eq!(warnings, vec!["Words overlap at (2, 1): CAT, TAC".to_string()]);
    }

    #[test]
    fn test_performance_warnings() {
        let mut puzzle = sample_puzzle();
        puzzle.generation_stats.failed_placements = 6;
        puzzle.generation_stats.attempts = 51;
        let report = validate_puzzle_completeness(&puzzle);
        assert!(report.is_valid);
        assert!(has(&report.warnings, "High number of failed word placements"));
        assert!(has(&report.warnings, "Required many generation attempts"));

        puzzle.generation_stats.failed_placements = 5;
        puzzle.generation_stats.attempts = 50;
        assert!(validate_puzzle_completeness(&puzzle).warnings.is_empty());
    }
}
