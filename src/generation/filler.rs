//! # Filler Letters
//!
//! Writes a consonant into every cell no word covers. Vowels are never used
//! and letters already present in placed words are avoided where possible,
//! which makes accidental extra words less likely but does not rule them out.

use crate::{config, Grid, Word};
use rand::Rng;
use std::collections::HashSet;

/// Draws one consonant uniformly from [`config::FILLER_CONSONANTS`].
pub fn random_consonant<R: Rng>(rng: &mut R) -> char {
    let consonants = config::FILLER_CONSONANTS;
    consonants[rng.gen_range(0..consonants.len())]
}

/// Distinct letters used by `words`.
pub fn used_letters(words: &[Word]) -> HashSet<char> {
    words.iter().flat_map(|word| word.text.chars()).collect()
}

/// Picks a filler letter, redrawing while it collides with `avoid`.
///
/// At most [`config::MAX_FILL_DRAWS`] draws are made; the last draw is kept
/// even if it collides.
pub fn pick_filler_letter<R: Rng>(avoid: &HashSet<char>, rng: &mut R) -> char {
    let mut letter = random_consonant(rng);
    let mut draws = 1;
    while avoid.contains(&letter) && draws < config::MAX_FILL_DRAWS {
        letter = random_consonant(rng);
        draws += 1;
    }
    letter
}

/// Fills every empty cell of `grid` and returns how many cells were written.
pub fn fill_empty_cells<R: Rng>(
    grid: &mut Grid,
    placed_words: &[Word],
    rng: &mut R,
) -> u32 {
    let avoid = used_letters(placed_words);
    let mut filled = 0;

    for cell in grid.cells_mut() {
        if cell.is_empty() {
            cell.letter = Some(pick_filler_letter(&avoid, rng));
            filled += 1;
        }
    }

    filled
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{seeded_rng, Orientation, PlacementEngine, Position, SequenceRandom};

    const VOWELS: [char; 5] = ['A', 'E', 'I', 'O', 'U'];

    #[test]
    fn test_random_consonant_never_vowel() {
        let mut rng = seeded_rng(21);
        for _ in 0..500 {
            let c = random_consonant(&mut rng);
            assert!(c.is_ascii_uppercase());
            assert!(!VOWELS.contains(&c));
        }
    }

    #[test]
    fn test_used_letters() {
        let words = vec![Word::new("CAT", true), Word::new("TOP", false)];
        let letters = used_letters(&words);
        assert_eq!(letters.len(), 5);
        assert!(letters.contains(&'C'));
        assert!(letters.contains(&'P'));
    }

    #[test]
    fn test_pick_filler_avoids_used_letters() {
        // First draw lands on 'B' (index 0), second on 'Z' (last index)
        let mut rng = SequenceRandom::new(vec![0.0, 0.96]);
        let avoid: HashSet<char> = ['B'].into_iter().collect();
        assert_eq!(pick_filler_letter(&avoid, &mut rng), 'Z');
        assert_eq!(rng.draws(), 2);
    }

    #[test]
    fn test_pick_filler_gives_up_after_max_draws() {
        let mut rng = SequenceRandom::constant(0.0);
        let avoid: HashSet<char> = ['B'].into_iter().collect();
        assert_eq!(pick_filler_letter(&avoid, &mut rng), 'B');
        assert_eq!(rng.draws(), config::MAX_FILL_DRAWS);
    }

    #[test]
    fn test_fill_empty_cells_leaves_words_intact() {
        let engine = PlacementEngine::default();
        let mut grid = Grid::new(6);
        let mut word = Word::new("CAT", true);
        let start = Position::new(1, 1);
        assert!(engine.place_word_at(&mut grid, &mut word, start, Orientation::LeftToRight));

        let mut rng = seeded_rng(8);
        let filled = fill_empty_cells(&mut grid, std::slice::from_ref(&word), &mut rng);

        assert_eq!(filled, 33);
        assert!(grid.is_full());
        assert_eq!(grid.letter_at(Position::new(1, 1)), Some('C'));
        assert_eq!(grid.letter_at(Position::new(2, 1)), Some('A'));
        assert_eq!(grid.letter_at(Position::new(3, 1)), Some('T'));
        for cell in grid.cells().filter(|cell| !cell.is_part_of_word) {
            let letter = cell.letter.unwrap();
            assert!(!VOWELS.contains(&letter));
            assert!(cell.word_id.is_none());
        }
    }
}
