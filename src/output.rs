//! # Output
//!
//! Human-readable rendering and JSON export of generated puzzles.

use crate::{GeneratedPuzzle, SnakeWordResult, Word};
use std::fs;
use std::path::Path;

/// Renders the theme header, the letter grid and both word lists.
///
/// ```text
/// Theme: Animals (Living Creatures)
///
/// T R E E K N
/// ...
///
/// Targets: CAT (1, 1) horizontal-lr, ...
/// Distractors: TREE (1, 0) horizontal-lr, ...
/// ```
pub fn render_text(puzzle: &GeneratedPuzzle) -> String {
    format!(
        "Theme: {} ({})\n\n{}\nTargets: {}\nDistractors: {}\n",
        puzzle.theme.name,
        puzzle.theme.category,
        puzzle.grid,
        describe_words(&puzzle.target_words),
        describe_words(&puzzle.distractor_words)
    )
}

fn describe_words(words: &[Word]) -> String {
    words
        .iter()
        .map(|word| match word.start() {
            Some(start) => format!("{} {} {}", word.text, start, word.orientation),
            None => format!("{} (unplaced)", word.text),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Serializes a puzzle to pretty-printed JSON in its camelCase wire shape.
pub fn to_json(puzzle: &GeneratedPuzzle) -> SnakeWordResult<String> {
    Ok(serde_json::to_string_pretty(puzzle)?)
}

/// Writes [`to_json`] output to `path`.
pub fn write_json(puzzle: &GeneratedPuzzle, path: &Path) -> SnakeWordResult<()> {
    let json = to_json(puzzle)?;
    fs::write(path, json)?;
    Ok(())
}

/// Reads a puzzle previously written with [`write_json`].
pub fn read_json(path: &Path) -> SnakeWordResult<GeneratedPuzzle> {
    let json = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&json)?)
}
