//! # Letter Grid
//!
//! Square grid of [`LetterCell`]s stored row-major (`rows[y][x]`).

use super::{Position, WordId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One slot of the puzzle grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LetterCell {
    /// Uppercase letter, or None while the cell is still empty
    pub letter: Option<char>,
    /// Where this cell sits on the grid
    pub position: Position,
    /// Whether some placed word covers this cell
    pub is_part_of_word: bool,
    /// Word that most recently claimed this cell
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word_id: Option<WordId>,
    /// Set by the gameplay engine once the letter is picked up
    #[serde(default)]
    pub is_collected: bool,
}

impl LetterCell {
    /// Creates an empty cell at `position`.
    pub fn empty(position: Position) -> Self {
        Self {
            letter: None,
            position,
            is_part_of_word: false,
            word_id: None,
            is_collected: false,
        }
    }

    /// Whether no letter has been written yet.
    pub fn is_empty(&self) -> bool {
        self.letter.is_none()
    }
}

/// Square letter grid.
///
/// Rows are kept as nested vectors so that malformed grids (for example ones
/// deserialized from a cache) can still be represented and reported on by the
/// validator instead of failing to load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Grid {
    rows: Vec<Vec<LetterCell>>,
}

impl Grid {
    /// Creates a `size` × `size` grid of empty cells.
    ///
    /// # Examples
    ///
    /// ```
    /// use snakeword::{Grid, Position};
    ///
    /// let grid = Grid::new(6);
    /// assert_eq!(grid.size(), 6);
    /// assert!(grid.get(Position::new(5, 5)).unwrap().is_empty());
    /// assert!(grid.get(Position::new(6, 0)).is_none());
    /// ```
    pub fn new(size: usize) -> Self {
        let rows = (0..size)
            .map(|y| {
                (0..size)
                    .map(|x| LetterCell::empty(Position::new(x as i32, y as i32)))
                    .collect()
            })
            .collect();
        Self { rows }
    }

    /// Wraps pre-built rows without checking their shape.
    pub fn from_rows(rows: Vec<Vec<LetterCell>>) -> Self {
        Self { rows }
    }

    /// Number of rows; equal to the width for well-formed grids.
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    /// Borrow the rows.
    pub fn rows(&self) -> &[Vec<LetterCell>] {
        &self.rows
    }

    /// Mutable access to the rows.
    pub fn rows_mut(&mut self) -> &mut Vec<Vec<LetterCell>> {
        &mut self.rows
    }

    /// Checks that `pos` lies within the square `size` × `size` bounds.
    pub fn is_valid_position(&self, pos: Position) -> bool {
        let size = self.size() as i32;
        pos.x >= 0 && pos.y >= 0 && pos.x < size && pos.y < size
    }

    /// Gets the cell at `pos`.
    pub fn get(&self, pos: Position) -> Option<&LetterCell> {
        if pos.x < 0 || pos.y < 0 {
            return None;
        }
        self.rows.get(pos.y as usize)?.get(pos.x as usize)
    }

    /// Gets the cell at `pos` mutably.
    pub fn get_mut(&mut self, pos: Position) -> Option<&mut LetterCell> {
        if pos.x < 0 || pos.y < 0 {
            return None;
        }
        self.rows.get_mut(pos.y as usize)?.get_mut(pos.x as usize)
    }

    /// Letter at `pos`, if the cell exists and is filled.
    pub fn letter_at(&self, pos: Position) -> Option<char> {
        self.get(pos).and_then(|cell| cell.letter)
    }

    /// Iterates over every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &LetterCell> {
        self.rows.iter().flat_map(|row| row.iter())
    }

    /// Iterates mutably over every cell in row-major order.
    pub fn cells_mut(&mut self) -> impl Iterator<Item = &mut LetterCell> {
        self.rows.iter_mut().flat_map(|row| row.iter_mut())
    }

    /// Number of cells still without a letter.
    pub fn empty_cell_count(&self) -> usize {
        self.cells().filter(|cell| cell.is_empty()).count()
    }

    /// Whether every cell holds a letter.
    pub fn is_full(&self) -> bool {
        self.empty_cell_count() == 0
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            let line: Vec<String> = row
                .iter()
                .map(|cell| cell.letter.unwrap_or('.').to_string())
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
