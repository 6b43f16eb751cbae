//! # Generation Loop
//!
//! Runs repeated independent attempts and keeps the best-scoring candidate.

use super::{
    create_rng, fill_empty_cells, is_good_enough, score_candidate, select_words, AttemptFailure,
    GenerationOptions, Generator, PlacementEngine, WordPool,
};
use crate::validation::validate_puzzle_completeness;
use crate::{
    GeneratedPuzzle, GenerationStats, Grid, SnakeWordError, SnakeWordResult, Theme, Word,
};
use log::{debug, info, warn};
use rand::seq::SliceRandom;
use rand::Rng;

/// Search-based puzzle generator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PuzzleGenerator {
    pub options: GenerationOptions,
}

impl PuzzleGenerator {
    /// Creates a generator with the given options.
    pub fn new(options: GenerationOptions) -> Self {
        Self { options }
    }
}

impl Generator<GeneratedPuzzle> for PuzzleGenerator {
    fn generate<R: Rng>(
        &self,
        theme: &Theme,
        rng: &mut R,
    ) -> SnakeWordResult<GeneratedPuzzle> {
        generate_puzzle_with_rng(theme, &self.options, rng)
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
        "PuzzleGenerator"
    }
}

/// Generates a puzzle for `theme`, seeding the random source from the options.
///
/// # Examples
///
/// ```
/// use snakeword::{generate_puzzle, GenerationOptions, ThemeRegistry};
///
/// let registry = ThemeRegistry::builtin();
/// let theme = registry.get("Animals").unwrap();
/// let puzzle = generate_puzzle(theme, &GenerationOptions::for_testing(42)).unwrap();
/// assert_eq!(puzzle.target_words.len(), 3);
/// assert_eq!(puzzle.distractor_words.len(), 2);
/// ```
pub fn generate_puzzle(
    theme: &Theme,
    options: &GenerationOptions,
) -> SnakeWordResult<GeneratedPuzzle> {
    let mut rng = create_rng(options);
    generate_puzzle_with_rng(theme, options, &mut rng)
}

/// Generates a puzzle for `theme` drawing all randomness from `rng`.
///
/// Makes up to `options.max_attempts` attempts. A failed attempt is logged and
/// skipped; a candidate replaces the best so far only with a strictly higher
/// score, and a good-enough score ends the search early. The returned puzzle
/// reports the number of attempts actually made.
pub fn generate_puzzle_with_rng<R: Rng>(
    theme: &Theme,
    options: &GenerationOptions,
    rng: &mut R,
) -> SnakeWordResult<GeneratedPuzzle> {
    options.validate()?;

    let mut best: Option<(u32, GeneratedPuzzle)> = None;
    let mut attempts = 0;

    while attempts < options.max_attempts {
        attempts += 1;

        match attempt_generation(theme, options, rng) {
            Ok(candidate) => {
                let score = score_candidate(&candidate);
                debug!(
                    "Attempt {} for theme '{}' scored {}",
                    attempts, theme.name, score
                );

                let improves = best.as_ref().map_or(true, |(best_score, _)| score > *best_score);
                if improves {
                    best = Some((score, candidate));
                }

                if is_good_enough(score) {
                    break;
                }
            }
            Err(failure) => {
                debug!(
                    "Attempt {} for theme '{}' failed: {}",
                    attempts, theme.name, failure
                );
            }
        }
    }

    let Some((score, mut puzzle)) = best else {
        warn!(
            "No usable puzzle for theme '{}' after {} attempts",
            theme.name, attempts
        );
        return Err(SnakeWordError::GenerationExhausted { attempts });
    };

    puzzle.generation_stats.attempts = attempts;
    info!(
        "Generated puzzle for theme '{}' in {} attempts (score {})",
        theme.name, attempts, score
    );
    Ok(puzzle)
}

/// Runs a single generation attempt on a fresh grid.
///
/// Selects words, places them in random order and fills the remaining cells.
/// The attempt is rejected if any requested target or distractor could not be
/// placed. `generation_stats.attempts` is left at zero for the caller to set.
pub fn attempt_generation<R: Rng>(
    theme: &Theme,
    options: &GenerationOptions,
    rng: &mut R,
) -> Result<GeneratedPuzzle, AttemptFailure> {
    let selected = select_words(
        theme,
        options.difficulty,
        options.target_word_count,
        options.distractor_word_count,
        rng,
    )?;

    let mut grid = Grid::new(options.grid_size);
    let engine = PlacementEngine::from_options(options);

    let mut words: Vec<Word> = selected
        .target_words
        .iter()
        .map(|text| Word::new(text, true))
        .chain(selected.distractor_words.iter().map(|text| Word::new(text, false)))
        .collect();
    words.shuffle(rng);

    let mut placed = Vec::with_capacity(words.len());
    let mut failed_placements = 0;
    for mut word in words {
        if engine.try_place_word(&mut grid, &mut word, rng) {
            placed.push(word);
        } else {
            failed_placements += 1;
        }
    }

    let placed_targets = placed.iter().filter(|word| word.is_target).count();
    if placed_targets < options.target_word_count {
        return Err(AttemptFailure::PlacementShortfall {
            pool: WordPool::Target,
            placed: placed_targets,
            required: options.target_word_count,
        });
    }

    let placed_distractors = placed.len() - placed_targets;
    if placed_distractors < options.distractor_word_count {
        return Err(AttemptFailure::PlacementShortfall {
            pool: WordPool::Distractor,
            placed: placed_distractors,
            required: options.distractor_word_count,
        });
    }

    let fill_letters = fill_empty_cells(&mut grid, &placed, rng);
    let placed_words = placed.len() as u32;
    let (target_words, distractor_words) = placed.into_iter().partition(|word| word.is_target);

    Ok(GeneratedPuzzle {
        grid,
        target_words,
        distractor_words,
        theme: theme.clone(),
        generation_stats: GenerationStats {
            attempts: 0,
            placed_words,
            failed_placements,
            fill_letters,
        },
    })
}
