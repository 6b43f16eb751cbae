//! # Generation Module
//!
//! Procedural puzzle generation: picking words from a theme, laying them onto
//! the grid, filling the gaps and choosing the best of several attempts.
//!
//! The pipeline for one attempt is
//! [`select_words`] → [`PlacementEngine::try_place_word`] → [`fill_empty_cells`],
//! scored by [`score_candidate`]. [`PuzzleGenerator`] repeats attempts and keeps
//! the best candidate; [`FallbackGenerator`] builds a simple deterministic
//! layout when the search comes up empty.

pub mod fallback;
pub mod filler;
pub mod placement;
pub mod scoring;
pub mod search;
pub mod selector;

pub use fallback::*;
pub use filler::*;
pub use placement::*;
pub use scoring::*;
pub use search::*;
pub use selector::*;

use crate::{config, entropy_rng, seeded_rng, SnakeWordError, SnakeWordResult, Theme};
use rand::rngs::StdRng;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Difficulty tier controlling which theme words are eligible.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Short words only
    Easy,
    /// No extra length filter
    #[default]
    Medium,
    /// Longer target words and a looser letter-conflict threshold
    Hard,
}

impl Difficulty {
    /// Returns all difficulty tiers.
    pub fn all() -> [Difficulty; 3] {
        [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard]
    }

    /// Lowercase name of this tier.
    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    /// Distinct letters two selected words may share before the later one is dropped.
    pub fn conflict_threshold(self) -> usize {
        match self {
            Difficulty::Easy | Difficulty::Medium => 2,
            Difficulty::Hard => 3,
        }
    }

    /// Whether a valid word of `len` letters may be used as a target.
    pub fn allows_target_length(self, len: usize) -> bool {
        match self {
            Difficulty::Easy => len <= 5,
            Difficulty::Medium => true,
            Difficulty::Hard => len >= 4,
        }
    }

    /// Whether a valid word of `len` letters may be used as a distractor.
    pub fn allows_distractor_length(self, len: usize) -> bool {
        match self {
            Difficulty::Easy => len <= 5,
            Difficulty::Medium | Difficulty::Hard => true,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = SnakeWordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(SnakeWordError::InvalidOptions(format!(
                "Invalid difficulty level \"{}\". Must be easy, medium, or hard",
                other
            ))),
        }
    }
}

/// Options for puzzle generation.
///
/// Missing fields fall back to their defaults when deserialized, so a partial
/// JSON object such as `{"difficulty": "hard"}` is a complete configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GenerationOptions {
    /// Grid width and height
    pub grid_size: usize,
    /// Target words to select and place
    pub target_word_count: usize,
    /// Distractor words to select and place
    pub distractor_word_count: usize,
    /// Difficulty tier
    pub difficulty: Difficulty,
    /// Upper bound on full generation attempts
    pub max_attempts: u32,
    /// Whether words may share a cell holding the same letter
    pub allow_word_overlaps: bool,
    /// Random seed for reproducible generation; entropy when absent
    pub seed: Option<u64>,
}

impl GenerationOptions {
    /// Creates the default options.
    ///
    /// # Examples
    ///
    /// ```
    /// use snakeword::{Difficulty, GenerationOptions};
    ///
    /// let options = GenerationOptions::new();
    /// assert_eq!(options.grid_size, 6);
    /// assert_eq!(options.target_word_count, 3);
    /// assert_eq!(options.distractor_word_count, 2);
    /// assert_eq!(options.difficulty, Difficulty::Medium);
    /// assert_eq!(options.max_attempts, 100);
    /// assert!(!options.allow_word_overlaps);
    /// ```
    pub fn new() -> Self {
        Self {
            grid_size: config::DEFAULT_GRID_SIZE,
            target_word_count: config::DEFAULT_TARGET_WORDS,
            distractor_word_count: config::DEFAULT_DISTRACTOR_WORDS,
            difficulty: Difficulty::Medium,
            max_attempts: config::DEFAULT_MAX_ATTEMPTS,
            allow_word_overlaps: false,
            seed: None,
        }
    }

    /// Creates seeded default options for reproducible tests.
    pub fn for_testing(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::new()
        }
    }

    /// Sets the difficulty tier.
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the attempt bound.
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Sets the grid size.
    pub fn with_grid_size(mut self, grid_size: usize) -> Self {
        self.grid_size = grid_size;
        self
    }

    /// Sets how many target and distractor words to place.
    pub fn with_word_counts(mut self, targets: usize, distractors: usize) -> Self {
        self.target_word_count = targets;
        self.distractor_word_count = distractors;
        self
    }

    /// Enables or disables same-letter overlaps.
    pub fn with_word_overlaps(mut self, allow: bool) -> Self {
        self.allow_word_overlaps = allow;
        self
    }

    /// Checks that the grid can hold at least one word and stays within the
    /// supported size.
    pub fn validate(&self) -> SnakeWordResult<()> {
        if self.grid_size < config::MIN_WORD_LENGTH || self.grid_size > config::MAX_GRID_SIZE {
            return Err(SnakeWordError::InvalidOptions(format!(
                "Grid size {} is outside {}..={}",
                self.grid_size,
                config::MIN_WORD_LENGTH,
                config::MAX_GRID_SIZE
            )));
        }
        Ok(())
    }
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Which pool a word was drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WordPool {
    Target,
    Distractor,
}

impl fmt::Display for WordPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WordPool::Target => f.write_str("target"),
            WordPool::Distractor => f.write_str("distractor"),
        }
    }
}

/// Why a single generation attempt produced no usable candidate.
///
/// These are expected outcomes: the attempt loop records them and moves on.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum AttemptFailure {
    /// The theme has too few eligible words for the requested count
    #[error("Not enough valid {pool} words: need {required}, have {available}")]
    InsufficientWords {
        pool: WordPool,
        required: usize,
        available: usize,
    },

    /// Too many words failed to find room on the grid
    #[error("Placed {placed} of {required} {pool} words")]
    PlacementShortfall {
        pool: WordPool,
        placed: usize,
        required: usize,
    },
}

/// Trait for puzzle generators.
///
/// Both the search-based generator and the fallback builder implement this
/// trait, so callers can swap one for the other behind the same interface.
pub trait Generator<T> {
    /// Generates content for `theme` using the provided random source.
    fn generate<R: Rng>(&self, theme: &Theme, rng: &mut R) -> SnakeWordResult<T>;

    /// Validates that the generated content meets requirements.
    fn validate(&self, content: &T) -> SnakeWordResult<()>;

    /// Gets the generator type name for logging and debugging.
    fn generator_type(&self) -> &'static str;
}

/// Creates the random source described by the options.
pub fn create_rng(options: &GenerationOptions) -> StdRng {
    match options.seed {
        Some(seed) => seeded_rng(seed),
        None => entropy_rng(),
    }
}
