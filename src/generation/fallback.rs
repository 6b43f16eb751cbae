//! # Fallback Builder
//!
//! Deterministic layout used when the search finds nothing usable. Short words
//! are laid left to right starting at a fixed column, one word per row: every
//! odd row first, then every even row. The odd pass keeps words two rows apart;
//! once it wraps to the even rows, words land on rows adjacent to earlier ones
//! (rows 0 and 1 both hold words on a 6×6 grid). Only the filler letters are
//! random.

use super::{
    create_rng, fill_empty_cells, is_valid_word, normalize_word, GenerationOptions, Generator,
    PlacementEngine,
};
use crate::validation::validate_puzzle_completeness;
use crate::{
    config, GeneratedPuzzle, GenerationStats, Grid, Orientation, Position, SnakeWordError,
    SnakeWordResult, Theme, Word,
};
use log::{debug, info};
use rand::Rng;

/// Builds a simple fixed-layout puzzle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackGenerator {
    pub grid_size: usize,
}

impl FallbackGenerator {
    pub fn new(grid_size: usize) -> Self {
        Self { grid_size }
    }

    /// Row order of the layout: every odd row, then every even row.
    ///
    /// ```
    /// use snakeword::FallbackGenerator;
    ///
    /// assert_eq!(FallbackGenerator::new(6).layout_rows(), vec![1, 3, 5, 0, 2, 4]);
    /// ```
    pub fn layout_rows(&self) -> Vec<i32> {
        let size = self.grid_size as i32;
        (1..size).step_by(2).chain((0..size).step_by(2)).collect()
    }

    /// Builds the fallback puzzle for `theme`.
    ///
    /// Takes the first three short targets and first two short distractors in
    /// pool order. A word that does not fit is skipped without using up a row.
    /// Fails with [`SnakeWordError::FallbackFailed`] when the layout ends up
    /// with fewer than the minimum word counts.
    pub fn build<R: Rng>(
        &self,
        theme: &Theme,
        rng: &mut R,
    ) -> SnakeWordResult<GeneratedPuzzle> {
        let mut grid = Grid::new(self.grid_size);
        let engine = PlacementEngine::default();

        let targets = short_words(&theme.target_words, config::DEFAULT_TARGET_WORDS);
        let distractors = short_words(&theme.distractor_words, config::DEFAULT_DISTRACTOR_WORDS);

        let candidates = targets
            .iter()
            .map(|text| Word::new(text, true))
            .chain(distractors.iter().map(|text| Word::new(text, false)));

        let mut rows = self.layout_rows().into_iter().peekable();
        let mut placed = Vec::new();
        let mut skipped = 0;

        for mut word in candidates {
            let Some(&row) = rows.peek() else {
                skipped += 1;
                continue;
            };

            let start = Position::new(config::FALLBACK_START_COLUMN, row);
            if engine.place_word_at(&mut grid, &mut word, start, Orientation::LeftToRight) {
                rows.next();
                placed.push(word);
            } else {
                debug!("Fallback skipped '{}' at row {}", word.text, row);
                skipped += 1;
            }
        }

        let (target_words, distractor_words): (Vec<Word>, Vec<Word>) =
            placed.iter().cloned().partition(|word| word.is_target);

        if target_words.len() < config::MIN_TARGET_WORDS
            || distractor_words.len() < config::MIN_DISTRACTOR_WORDS
        {
            return Err(SnakeWordError::FallbackFailed {
                theme: theme.name.clone(),
                targets: target_words.len(),
                distractors: distractor_words.len(),
            });
        }

        let fill_letters = fill_empty_cells(&mut grid, &placed, rng);

        info!(
            "Built fallback puzzle for theme '{}' with {} words",
            theme.name,
            placed.len()
        );

        Ok(GeneratedPuzzle {
            grid,
            target_words,
            distractor_words,
            theme: theme.clone(),
            generation_stats: GenerationStats {
                attempts: 1,
                placed_words: placed.len() as u32,
                failed_placements: skipped,
                fill_letters,
            },
        })
    }
}

impl Default for FallbackGenerator {
    fn default() -> Self {
        Self::new(config::DEFAULT_GRID_SIZE)
    }
}

impl Generator<GeneratedPuzzle> for FallbackGenerator {
    fn generate<R: Rng>(
        &self,
        theme: &Theme,
        rng: &mut R,
    ) -> SnakeWordResult<GeneratedPuzzle> {
        self.build(theme, rng)
    }

    fn validate(&self, puzzle: &GeneratedPuzzle) -> SnakeWordResult<()> {
        let report = validate_puzzle_completeness(puzzle);
        if report.is_valid {
            Ok(())
        } else {
            Err(SnakeWordError::InvalidPuzzle(report.errors.join("; ")))
        }
    }

    fn generator_type(&self) -> &'static str {
        "FallbackGenerator"
    }
}

/// First `count` valid words of at most [`config::FALLBACK_MAX_WORD_LENGTH`]
/// letters, in pool order.
fn short_words(pool: &[String], count: usize) -> Vec<String> {
    pool.iter()
        .map(|raw| normalize_word(raw))
        .filter(|word| is_valid_word(word) && word.len() <= config::FALLBACK_MAX_WORD_LENGTH)
        .take(count)
        .collect()
}

/// Builds the default 6×6 fallback puzzle with an entropy-seeded filler.
pub fn generate_fallback_puzzle(theme: &Theme) -> SnakeWordResult<GeneratedPuzzle> {
    let mut rng = create_rng(&GenerationOptions::default());
    generate_fallback_puzzle_with_rng(theme, &mut rng)
}

/// Builds the default 6×6 fallback puzzle drawing filler letters from `rng`.
pub fn generate_fallback_puzzle_with_rng<R: Rng>(
    theme: &Theme,
    rng: &mut R,
) -> SnakeWordResult<GeneratedPuzzle> {
    FallbackGenerator::default().build(theme, rng)
}
