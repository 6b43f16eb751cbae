//! # Words
//!
//! A [`Word`] starts life unplaced (no positions) and is promoted to a placed
//! word when the placement engine assigns its positions and orientation.

use super::{new_word_id, Orientation, Position, WordId};
use serde::{Deserialize, Serialize};

/// A target or distractor word and where it sits on the grid.
///
/// `is_collected` and `collection_progress` belong to the gameplay engine;
/// generation initializes them and never touches them again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Word {
    pub id: WordId,
    pub text: String,
    pub positions: Vec<Position>,
    pub orientation: Orientation,
    pub is_target: bool,
    #[serde(default)]
    pub is_collected: bool,
    #[serde(default)]
    pub collection_progress: u32,
}

impl Word {
    /// Creates an unplaced word with a fresh identifier. Text is uppercased.
    ///
    /// # Examples
    ///
    /// ```
    /// use snakeword::Word;
    ///
    /// let word = Word::new("cat", true);
    /// assert_eq!(word.text, "CAT");
    /// assert!(!word.is_placed());
    /// ```
    pub fn new(text: &str, is_target: bool) -> Self {
        Self {
            id: new_word_id(),
            text: text.to_uppercase(),
            positions: Vec::new(),
            // Overwritten once the word is placed
            orientation: Orientation::LeftToRight,
            is_target,
            is_collected: false,
            collection_progress: 0,
        }
    }

    /// Number of letters.
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    /// Whether the text is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Letters of the word in order.
    pub fn letters(&self) -> Vec<char> {
        self.text.chars().collect()
    }

    /// Letter at `index`.
    pub fn letter(&self, index: usize) -> Option<char> {
        self.text.chars().nth(index)
    }

    /// Whether positions have been assigned.
    pub fn is_placed(&self) -> bool {
        !self.positions.is_empty()
    }

    /// Letter this word puts at `pos`, if it covers that cell.
    pub fn letter_at_position(&self, pos: Position) -> Option<char> {
        let index = self.positions.iter().position(|&p| p == pos)?;
        self.letter(index)
    }

    /// First cell of the word.
    pub fn start(&self) -> Option<Position> {
        self.positions.first().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_word_defaults() {
        let word = Word::new("Tiger", false);
        assert_eq!(word.text, "TIGER");
        assert_eq!(word.len(), 5);
        assert!(!word.is_target);
        assert!(!word.is_collected);
        assert_eq!(word.collection_progress, 0);
        assert!(word.positions.is_empty());
        assert_eq!(word.start(), None);
    }

    #[test]
    fn test_letters() {
        let word = Word::new("DOG", true);
        assert_eq!(word.letters(), vec!['D', 'O', 'G']);
        assert_eq!(word.letter(1), Some('O'));
        assert_eq!(word.letter(3), None);
    }

    #[test]
    fn test_letter_at_position() {
        let mut word = Word::new("DOG", true);
        word.positions = vec![Position::new(3, 0), Position::new(2, 0), Position::new(1, 0)];
        word.orientation = Orientation::RightToLeft;
        assert!(word.is_placed());
        assert_eq!(word.letter_at_position(Position::new(2, 0)), Some('O'));
        assert_eq!(word.letter_at_position(Position::new(0, 0)), None);
        assert_eq!(word.start(), Some(Position::new(3, 0)));
    }

    #[test]
    fn test_word_serialization_shape() {
        let word = Word::new("SUN", false);
        let value = serde_json::to_value(&word).unwrap();
        assert_eq!(value["text"], "SUN");
        assert_eq!(value["orientation"], "horizontal-lr");
        assert_eq!(value["isTarget"], false);
        assert_eq!(value["collectionProgress"], 0);
        assert!(value["id"].is_string());
    }
}
