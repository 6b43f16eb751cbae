//! # Snakeword Puzzle Engine
//!
//! Themed word-grid puzzle generation and validation for a grid-based
//! word-collecting game.
//!
//! ## Architecture Overview
//!
//! A puzzle is a square grid of letters with a handful of themed "target" words
//! and decoy "distractor" words laid out along straight lines. The engine is
//! split into a few cooperating pieces:
//!
//! - **Puzzle Model**: positions, orientations, cells, words and the finished puzzle
//! - **Themes**: a read-only registry of vocabulary pools
//! - **Generation**: word selection, placement search, filler letters, candidate
//!   scoring, the bounded attempt loop and a deterministic fallback builder
//! - **Validation**: structural checks plus advisory reachability analysis
//! - **Output**: text rendering and JSON export of the serialized puzzle shape
//!
//! Generation is generic over [`rand::Rng`], so callers can inject a seeded
//! [`rand::rngs::StdRng`] or a scripted [`SequenceRandom`] and get reproducible
//! puzzles.

pub mod generation;
pub mod output;
pub mod puzzle;
pub mod themes;
pub mod utils;
pub mod validation;

// Core module re-exports
pub use generation::*;
pub use puzzle::*;
pub use themes::*;
pub use utils::*;
pub use validation::*;

// Explicit re-exports for the primary entry points
pub use generation::{
    generate_fallback_puzzle, generate_fallback_puzzle_with_rng, generate_puzzle,
    generate_puzzle_with_rng, AttemptFailure, Difficulty, FallbackGenerator, GenerationOptions,
    Generator, PuzzleGenerator,
};

pub use validation::{
    validate_advanced_solvability, validate_puzzle_completeness, SolvabilityReport,
    ValidationReport,
};

/// Core error type for the Snakeword engine.
#[derive(thiserror::Error, Debug)]
pub enum SnakeWordError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// No theme is registered under the requested name
    #[error("Unknown theme \"{name}\". Available themes: {available}")]
    UnknownTheme { name: String, available: String },

    /// Theme data cannot be used for generation
    #[error("Invalid theme: {0}")]
    InvalidTheme(String),

    /// Generation options are out of range
    #[error("Invalid generation options: {0}")]
    InvalidOptions(String),

    /// Every attempt failed to produce a usable candidate
    #[error("Failed to generate puzzle after {attempts} attempts")]
    GenerationExhausted { attempts: u32 },

    /// The fallback builder could not place the minimum number of words
    #[error(
        "Fallback puzzle for theme \"{theme}\" placed {targets} target and {distractors} distractor words"
    )]
    FallbackFailed {
        theme: String,
        targets: usize,
        distractors: usize,
    },

    /// A finished puzzle failed completeness validation
    #[error("Invalid puzzle: {0}")]
    InvalidPuzzle(String),
}

/// Result type used throughout the Snakeword codebase.
pub type SnakeWordResult<T> = Result<T, SnakeWordError>;

/// Version information for the engine.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Engine configuration constants.
pub mod config {
    /// Default grid width and height in cells
    pub const DEFAULT_GRID_SIZE: usize = 6;

    /// Largest supported grid (one column per letter of the alphabet)
    pub const MAX_GRID_SIZE: usize = 26;

    /// Default number of target words per puzzle
    pub const DEFAULT_TARGET_WORDS: usize = 3;

    /// Default number of distractor words per puzzle
    pub const DEFAULT_DISTRACTOR_WORDS: usize = 2;

    /// Minimum target words a servable puzzle must contain
    pub const MIN_TARGET_WORDS: usize = 3;

    /// Minimum distractor words a servable puzzle must contain
    pub const MIN_DISTRACTOR_WORDS: usize = 2;

    /// Default bound on full generation attempts
    pub const DEFAULT_MAX_ATTEMPTS: u32 = 100;

    /// Shortest word accepted from a theme
    pub const MIN_WORD_LENGTH: usize = 3;

    /// Longest word accepted from a theme
    pub const MAX_WORD_LENGTH: usize = 6;

    /// Maximum occurrences of one letter within a word
    pub const MAX_LETTER_REPEATS: usize = 2;

    /// Random start positions tried per orientation
    pub const PLACEMENT_ATTEMPTS_PER_ORIENTATION: usize = 20;

    /// Draws allowed when picking a filler letter
    pub const MAX_FILL_DRAWS: usize = 10;

    /// Letters used to fill cells not covered by a word
    pub const FILLER_CONSONANTS: &[char] = &[
        'B', 'C', 'D', 'F', 'G', 'H', 'J', 'K', 'L', 'M', 'N', 'P', 'Q', 'R', 'S', 'T', 'V', 'W',
        'X', 'Y', 'Z',
    ];

    /// Candidate score at which the attempt loop stops early
    pub const GOOD_ENOUGH_SCORE: u32 = 100;

    /// Valid words each theme pool needs to be offered at random
    pub const MIN_VALID_WORDS_PER_POOL: usize = 5;

    /// Column where fallback words start
    pub const FALLBACK_START_COLUMN: i32 = 1;

    /// Longest word the fallback builder will place
    pub const FALLBACK_MAX_WORD_LENGTH: usize = 4;

    /// Failed placements above which validation warns
    pub const FAILED_PLACEMENT_WARNING_THRESHOLD: u32 = 5;

    /// Attempts above which validation warns
    pub const ATTEMPT_WARNING_THRESHOLD: u32 = 50;
}
