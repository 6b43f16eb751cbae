//! # Puzzle Module
//!
//! The data model shared by generation, validation and output.
//!
//! - Grid coordinates and word orientations
//! - Letter cells and the square grid that holds them
//! - Placed words and the finished puzzle with its generation statistics
//!
//! Field names serialize in camelCase so that a [`GeneratedPuzzle`] is the wire
//! shape consumed by the gameplay and transport layers.

pub mod grid;
pub mod word;

pub use grid::*;
pub use word::*;

use crate::Theme;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents a 2D coordinate on the puzzle grid.
///
/// Coordinates are signed so that stepping off the grid while walking a word
/// is representable; [`Grid::is_valid_position`] decides what is in bounds.
///
/// # Examples
///
/// ```
/// use snakeword::Position;
///
/// let pos = Position::new(2, 3);
/// assert_eq!(pos.x, 2);
/// assert_eq!(pos.y, 3);
/// assert_eq!(pos.cardinal_adjacent_positions().len(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Creates a new position with the given coordinates.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the origin position (0, 0).
    pub fn origin() -> Self {
        Self::new(0, 0)
    }

    /// Calculates the Manhattan distance to another position.
    ///
    /// # Examples
    ///
    /// ```
    /// use snakeword::Position;
    ///
    /// let pos1 = Position::new(0, 0);
    /// let pos2 = Position::new(3, 4);
    /// assert_eq!(pos1.manhattan_distance(pos2), 7);
    /// ```
    pub fn manhattan_distance(self, other: Position) -> u32 {
        ((self.x - other.x).abs() + (self.y - other.y).abs()) as u32
    }

    /// Returns the 4 cardinal adjacent positions (no diagonals).
    pub fn cardinal_adjacent_positions(self) -> Vec<Position> {
        vec![
            Position::new(self.x, self.y - 1), // N
            Position::new(self.x - 1, self.y), // W
            Position::new(self.x + 1, self.y), // E
            Position::new(self.x, self.y + 1), // S
        ]
    }

    /// Returns the position `steps` cells further along `orientation`.
    pub fn step(self, orientation: Orientation, steps: i32) -> Position {
        let delta = orientation.to_delta();
        Position::new(self.x + delta.x * steps, self.y + delta.y * steps)
    }
}

impl std::ops::Add for Position {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl std::ops::Sub for Position {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Straight-line directions a word can be laid out in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Orientation {
    #[serde(rename = "horizontal-lr")]
    LeftToRight,
    #[serde(rename = "horizontal-rl")]
    RightToLeft,
    #[serde(rename = "vertical-tb")]
    TopToBottom,
    #[serde(rename = "vertical-bt")]
    BottomToTop,
}

impl Orientation {
    /// Converts an orientation to the delta between consecutive letters.
    ///
    /// # Examples
    ///
    /// ```
    /// use snakeword::{Orientation, Position};
    ///
    /// assert_eq!(Orientation::BottomToTop.to_delta(), Position::new(0, -1));
    /// ```
    pub fn to_delta(self) -> Position {
        match self {
            Orientation::LeftToRight => Position::new(1, 0),
            Orientation::RightToLeft => Position::new(-1, 0),
            Orientation::TopToBottom => Position::new(0, 1),
            Orientation::BottomToTop => Position::new(0, -1),
        }
    }

    /// Converts a delta between consecutive letters back to an orientation.
    ///
    /// Returns None unless the delta is one unit along exactly one axis.
    pub fn from_delta(delta: Position) -> Option<Orientation> {
        match (delta.x, delta.y) {
            (1, 0) => Some(Orientation::LeftToRight),
            (-1, 0) => Some(Orientation::RightToLeft),
            (0, 1) => Some(Orientation::TopToBottom),
            (0, -1) => Some(Orientation::BottomToTop),
            _ => None,
        }
    }

    /// Returns all 4 orientations.
    pub fn all() -> [Orientation; 4] {
        [
            Orientation::LeftToRight,
            Orientation::RightToLeft,
            Orientation::TopToBottom,
            Orientation::BottomToTop,
        ]
    }

    /// Wire name of this orientation.
    pub fn as_str(self) -> &'static str {
        match self {
            Orientation::LeftToRight => "horizontal-lr",
            Orientation::RightToLeft => "horizontal-rl",
            Orientation::TopToBottom => "vertical-tb",
            Orientation::BottomToTop => "vertical-bt",
        }
    }
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unique identifier for placed words.
pub type WordId = Uuid;

/// Creates a new unique word ID.
pub fn new_word_id() -> WordId {
    Uuid::new_v4()
}

/// Counters describing how a puzzle was produced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationStats {
    /// Full generation attempts used
    pub attempts: u32,
    /// Words successfully placed on the grid
    pub placed_words: u32,
    /// Words that could not be placed in any orientation
    pub failed_placements: u32,
    /// Cells written with a filler letter
    pub fill_letters: u32,
}

/// A finished puzzle: the filled grid, the placed words and how it was made.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedPuzzle {
    /// Row-major letter grid
    pub grid: Grid,
    /// Placed words the player must collect
    pub target_words: Vec<Word>,
    /// Placed decoy words
    pub distractor_words: Vec<Word>,
    /// Theme the words were drawn from
    pub theme: Theme,
    /// Generation statistics
    pub generation_stats: GenerationStats,
}

impl GeneratedPuzzle {
    /// Width and height of the grid.
    pub fn grid_size(&self) -> usize {
        self.grid.size()
    }

    /// Iterates over target words followed by distractor words.
    pub fn all_words(&self) -> impl Iterator<Item = &Word> {
        self.target_words.iter().chain(self.distractor_words.iter())
    }

    /// Total number of placed words.
    pub fn total_words(&self) -> usize {
        self.target_words.len() + self.distractor_words.len()
    }

    /// Finds a placed word by its identifier.
    pub fn find_word(&self, id: WordId) -> Option<&Word> {
        self.all_words().find(|word| word.id == id)
    }
}
