//! # Word Placement
//!
//! Lays words onto the grid one at a time. Placement is greedy: a word that
//! cannot be fitted is dropped and nothing already placed is moved to make
//! room for it. Repeated full attempts in the generation loop make up for the
//! lack of backtracking.

use super::GenerationOptions;
use crate::{config, Grid, Orientation, Position, Word};
use rand::seq::SliceRandom;
use rand::Rng;

/// Places words on a grid using randomized orientations and start positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacementEngine {
    /// Random start positions tried per orientation before moving on
    pub attempts_per_orientation: usize,
    /// Whether a cell already holding the same letter may be reused
    pub allow_word_overlaps: bool,
}

impl PlacementEngine {
    /// Creates an engine with the default number of attempts.
    pub fn new(allow_word_overlaps: bool) -> Self {
        Self {
            attempts_per_orientation: config::PLACEMENT_ATTEMPTS_PER_ORIENTATION,
            allow_word_overlaps,
        }
    }

    /// Creates an engine configured from generation options.
    pub fn from_options(options: &GenerationOptions) -> Self {
        Self::new(options.allow_word_overlaps)
    }

    /// Tries to place `word` somewhere on the grid.
    ///
    /// Orientations are tried in random order, each with up to
    /// [`PlacementEngine::attempts_per_orientation`] random start positions.
    /// Returns false and leaves both the grid and the word untouched if no
    /// placement fits.
    pub fn try_place_word<R: Rng>(
        &self,
        grid: &mut Grid,
        word: &mut Word,
        rng: &mut R,
    ) -> bool {
        let mut orientations = Orientation::all();
        orientations.shuffle(rng);

        let len = word.len();
        for orientation in orientations {
            for _ in 0..self.attempts_per_orientation {
                let Some(start) = random_start_position(grid.size(), len, orientation, rng) else {
                    // Word is longer than the grid in this orientation
                    break;
                };

                if self.place_word_at(grid, word, start, orientation) {
                    return true;
                }
            }
        }

        false
    }

    /// Checks whether `text` fits at `start` going along `orientation`.
    ///
    /// Every covered cell must be in bounds and either empty or, when overlaps
    /// are allowed, already hold the same letter.
    pub fn can_place_word_at(
        &self,
        grid: &Grid,
        text: &str,
        start: Position,
        orientation: Orientation,
    ) -> bool {
        for (i, letter) in text.chars().enumerate() {
            let pos = start.step(orientation, i as i32);
            if !grid.is_valid_position(pos) {
                return false;
            }

            let Some(cell) = grid.get(pos) else {
                return false;
            };

            match cell.letter {
                None => continue,
                Some(existing) if self.allow_word_overlaps && existing == letter => continue,
                Some(_) => return false,
            }
        }

        true
    }

    /// Places `word` at `start` along `orientation` if it fits.
    ///
    /// On success every covered cell receives its letter, the part-of-word flag
    /// and the word's id, and the word records its positions and orientation.
    /// Returns false with no mutation otherwise.
    pub fn place_word_at(
        &self,
        grid: &mut Grid,
        word: &mut Word,
        start: Position,
        orientation: Orientation,
    ) -> bool {
        if !self.can_place_word_at(grid, &word.text, start, orientation) {
            return false;
        }

        let positions = word_positions(start, word.len(), orientation);
        for (pos, letter) in positions.iter().zip(word.text.chars()) {
            if let Some(cell) = grid.get_mut(*pos) {
                cell.letter = Some(letter);
                cell.is_part_of_word = true;
                cell.word_id = Some(word.id);
            }
        }

        word.positions = positions;
        word.orientation = orientation;
        true
    }
}

impl Default for PlacementEngine {
    fn default() -> Self {
        Self::new(false)
    }
}

/// Positions covered by a word of `len` letters starting at `start`.
///
/// # Examples
///
/// ```
/// use snakeword::{word_positions, Orientation, Position};
///
/// let positions = word_positions(Position::new(3, 0), 3, Orientation::RightToLeft);
/// assert_eq!(
///     positions,
///     vec![Position::new(3, 0), Position::new(2, 0), Position::new(1, 0)]
/// );
/// ```
pub fn word_positions(start: Position, len: usize, orientation: Orientation) -> Vec<Position> {
    (0..len as i32).map(|i| start.step(orientation, i)).collect()
}

/// Inclusive `(min, max)` start ranges for x and y such that a word of `len`
/// letters stays on a `grid_size` grid. None if the word cannot fit at all.
pub fn start_bounds(
    grid_size: usize,
    len: usize,
    orientation: Orientation,
) -> Option<((i32, i32), (i32, i32))> {
    if len == 0 || len > grid_size {
        return None;
    }

    let last = grid_size as i32 - 1;
    let span = len as i32 - 1;
    let full = (0, last);

    let bounds = match orientation {
        Orientation::LeftToRight => ((0, last - span), full),
        Orientation::RightToLeft => ((span, last), full),
        Orientation::TopToBottom => (full, (0, last - span)),
        Orientation::BottomToTop => (full, (span, last)),
    };
    Some(bounds)
}

/// Draws a random start position that keeps the whole word on the grid.
pub fn random_start_position<R: Rng>(
    grid_size: usize,
    len: usize,
    orientation: Orientation,
    rng: &mut R,
) -> Option<Position> {
    let ((min_x, max_x), (min_y, max_y)) = start_bounds(grid_size, len, orientation)?;
    let x = rng.gen_range(min_x..=max_x);
    let y = rng.gen_range(min_y..=max_y);
    Some(Position::new(x, y))
}
