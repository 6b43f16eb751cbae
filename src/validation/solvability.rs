//! # Solvability Analysis
//!
//! Advisory checks on whether the snake can reach every target word. The
//! snake starts at the origin and moves between 4-neighbours. Grids carry no
//! obstacles today, so reachability only fails when a caller supplies blocked
//! cells.

use crate::{GeneratedPuzzle, Position, Word};
use pathfinding::prelude::bfs;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Outcome of [`validate_advanced_solvability`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolvabilityReport {
    /// True iff no target word is unreachable
    pub is_solvable: bool,
    pub unreachable_words: Vec<Word>,
    pub pathing_issues: Vec<String>,
    pub recommendations: Vec<String>,
}

/// Shortest 4-neighbour path from `start` to `target` on a `grid_size` grid,
/// never entering a `blocked` cell.
///
/// # Examples
///
/// ```
/// use snakeword::{find_path, Position};
/// use std::collections::HashSet;
///
/// let path = find_path(6, Position::new(0, 0), Position::new(2, 1), &HashSet::new()).unwrap();
/// assert_eq!(path.len(), 4);
/// ```
pub fn find_path(
    grid_size: usize,
    start: Position,
    target: Position,
    blocked: &HashSet<Position>,
) -> Option<Vec<Position>> {
    let size = grid_size as i32;
    let in_bounds = |pos: &Position| pos.x >= 0 && pos.y >= 0 && pos.x < size && pos.y < size;

    if !in_bounds(&start) || !in_bounds(&target) || blocked.contains(&target) {
        return None;
    }

    bfs(
        &start,
        |pos| {
            pos.cardinal_adjacent_positions()
                .into_iter()
                .filter(|next| in_bounds(next) && !blocked.contains(next))
                .collect::<Vec<_>>()
        },
        |pos| *pos == target,
    )
}

/// Reachability and flow analysis with an open grid.
pub fn validate_advanced_solvability(puzzle: &GeneratedPuzzle) -> SolvabilityReport {
    validate_advanced_solvability_with_obstacles(puzzle, &HashSet::new())
}

/// Reachability and flow analysis treating `blocked` cells as impassable.
pub fn validate_advanced_solvability_with_obstacles(
    puzzle: &GeneratedPuzzle,
    blocked: &HashSet<Position>,
) -> SolvabilityReport {
    let mut report = SolvabilityReport::default();
    let size = puzzle.grid_size();

    for word in &puzzle.target_words {
        if word.positions.is_empty() {
            report.unreachable_words.push(word.clone());
            report
                .pathing_issues
                .push(format!("Word \"{}\" has no positions", word.text));
            continue;
        }

        let (issues, warnings) = check_word_accessibility(size, word, blocked);
        if !issues.is_empty() {
            report.unreachable_words.push(word.clone());
            report
                .pathing_issues
                .push(format!("Word \"{}\": {}", word.text, issues.join(", ")));
        }
        if !warnings.is_empty() {
            report
                .recommendations
                .push(format!("Word \"{}\": {}", word.text, warnings.join(", ")));
        }
    }

    report.recommendations.extend(analyze_puzzle_flow(puzzle));
    report.is_solvable = report.unreachable_words.is_empty();
    report
}

/// Issues and warnings for the snake reaching and following one word.
fn check_word_accessibility(
    grid_size: usize,
    word: &Word,
    blocked: &HashSet<Position>,
) -> (Vec<String>, Vec<String>) {
    let mut issues = Vec::new();
    let mut warnings = Vec::new();

    let Some(first) = word.start() else {
        issues.push("No positions defined".to_string());
        return (issues, warnings);
    };

    let start = Position::origin();
    if find_path(grid_size, start, first, blocked).is_none() {
        issues.push("First letter not reachable from start position".to_string());
    }

    for (i, pair) in word.positions.windows(2).enumerate() {
        if pair[0].manhattan_distance(pair[1]) != 1 {
            issues.push(format!(
                "Letters at positions {} and {} are not adjacent",
                i,
                i + 1
            ));
        }
    }

    if start.manhattan_distance(first) > grid_size as u32 {
        warnings.push("Word is far from starting position".to_string());
    }

    (issues, warnings)
}

/// Distribution, orientation and length variety of the target words.
fn analyze_puzzle_flow(puzzle: &GeneratedPuzzle) -> Vec<String> {
    let mut recommendations = Vec::new();
    let targets = &puzzle.target_words;
    if targets.is_empty() {
        return recommendations;
    }

    let positions: Vec<Position> = targets
        .iter()
        .flat_map(|w| w.positions.iter().copied())
        .collect();
    if !positions.is_empty() {
        let count = positions.len() as f64;
        let avg_x = positions.iter().map(|p| p.x as f64).sum::<f64>() / count;
        let avg_y = positions.iter().map(|p| p.y as f64).sum::<f64>() / count;
        let center = puzzle.grid_size() as f64 / 2.0;

        if (avg_x - center).abs() > center * 0.8 || (avg_y - center).abs() > center * 0.8 {
            recommendations.push(
                "Words are clustered to one side - consider more even distribution".to_string(),
            );
        }
    }

    let orientations: HashSet<_> = targets.iter().map(|w| w.orientation).collect();
    if orientations.len() < 2 {
        recommendations
            .push("All words have same orientation - add variety for better gameplay".to_string());
    }

    let lengths = targets.iter().map(|w| w.len());
    let min = lengths.clone().min().unwrap_or(0);
    let max = lengths.max().unwrap_or(0);
    if max - min < 2 {
        recommendations.push(
            "Words have similar lengths - vary word lengths for better challenge".to_string(),
        );
    }

    recommendations
}
