//! # Themes Module
//!
//! Vocabulary pools the generator draws words from.
//!
//! A [`ThemeRegistry`] is built once (from the built-in database or a JSON
//! file) and then only ever read. Generation borrows individual [`Theme`]s from
//! it, so any number of puzzles can be produced concurrently without
//! coordination.

pub mod builtin;

use crate::config;
use crate::generation::selector::{is_valid_word, normalize_word};
use crate::{SnakeWordError, SnakeWordResult};
use rand::seq::SliceRandom;
use rand::Rng;
use log::warn;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// A named vocabulary with target and distractor pools.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    /// Unique name used for lookups
    pub name: String,
    /// Display category
    pub category: String,
    /// Words the player must find
    pub target_words: Vec<String>,
    /// Decoy words
    pub distractor_words: Vec<String>,
}

impl Theme {
    /// Creates a theme from string slices.
    ///
    /// # Examples
    ///
    /// ```
    /// use snakeword::Theme;
    ///
    /// let theme = Theme::new("Tiny", "Test", &["CAT", "DOG"], &["SUN"]);
    /// assert_eq!(theme.target_words.len(), 2);
    /// assert_eq!(theme.distractor_words, vec!["SUN".to_string()]);
    /// ```
    pub fn new(name: &str, category: &str, targets: &[&str], distractors: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            category: category.to_string(),
            target_words: targets.iter().map(|w| w.to_string()).collect(),
            distractor_words: distractors.iter().map(|w| w.to_string()).collect(),
        }
    }

    /// Whether `text` appears in either pool (case-insensitive).
    pub fn contains_word(&self, text: &str) -> bool {
        self.target_words
            .iter()
            .chain(self.distractor_words.iter())
            .any(|w| w.eq_ignore_ascii_case(text))
    }
}

/// Outcome of theme-level checks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeValidation {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

/// Checks that a theme is fit to be offered for generation: both pools are
/// non-empty, each has enough valid words, and no word appears in both.
pub fn validate_theme(theme: &Theme) -> ThemeValidation {
    let mut errors = Vec::new();

    if theme.target_words.is_empty() {
        errors.push("Theme has no target words".to_string());
    }
    if theme.distractor_words.is_empty() {
        errors.push("Theme has no distractor words".to_string());
    }

    let valid_targets = theme
        .target_words
        .iter()
        .filter(|w| is_valid_word(&normalize_word(w)))
        .count();
    if valid_targets < config::MIN_VALID_WORDS_PER_POOL {
        errors.push(format!(
            "Theme has {} valid target words, needs at least {}",
            valid_targets,
            config::MIN_VALID_WORDS_PER_POOL
        ));
    }

    let valid_distractors = theme
        .distractor_words
        .iter()
        .filter(|w| is_valid_word(&normalize_word(w)))
        .count();
    if valid_distractors < config::MIN_VALID_WORDS_PER_POOL {
        errors.push(format!(
            "Theme has {} valid distractor words, needs at least {}",
            valid_distractors,
            config::MIN_VALID_WORDS_PER_POOL
        ));
    }

    let targets: HashSet<String> = theme
        .target_words
        .iter()
        .map(|w| normalize_word(w))
        .collect();
    for word in &theme.distractor_words {
        if targets.contains(&normalize_word(word)) {
            errors.push(format!(
                "Word \"{}\" appears in both target and distractor pools",
                word
            ));
        }
    }

    ThemeValidation {
        is_valid: errors.is_empty(),
        errors,
    }
}

/// Read-only lookup table of themes.
///
/// # Examples
///
/// ```
/// use snakeword::ThemeRegistry;
///
/// let registry = ThemeRegistry::builtin();
/// assert!(registry.get("Animals").is_some());
/// assert!(registry.get("Planets").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeRegistry {
    themes: Vec<Theme>,
}

impl ThemeRegistry {
    /// Builds a registry from themes, rejecting duplicate names.
    pub fn from_themes(themes: Vec<Theme>) -> SnakeWordResult<Self> {
        let mut seen = HashSet::new();
        for theme in &themes {
            if !seen.insert(theme.name.as_str()) {
                return Err(SnakeWordError::InvalidTheme(format!(
                    "Duplicate theme name \"{}\"",
                    theme.name
                )));
            }
        }
        Ok(Self { themes })
    }

    /// The built-in theme database.
    pub fn builtin() -> Self {
        Self {
            themes: builtin::builtin_themes(),
        }
    }

    /// Parses a JSON array of themes.
    pub fn from_json_str(json: &str) -> SnakeWordResult<Self> {
        let themes: Vec<Theme> = serde_json::from_str(json)?;
        Self::from_themes(themes)
    }

    /// Loads a JSON array of themes from a file.
    pub fn from_json_file(path: impl AsRef<Path>) -> SnakeWordResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Looks up a theme by exact name.
    pub fn get(&self, name: &str) -> Option<&Theme> {
        self.themes.iter().find(|theme| theme.name == name)
    }

    /// Looks up a theme by name, failing with the list of available names.
    pub fn require(&self, name: &str) -> SnakeWordResult<&Theme> {
        self.get(name).ok_or_else(|| SnakeWordError::UnknownTheme {
            name: name.to_string(),
            available: self.names().join(", "),
        })
    }

    /// Theme names in registration order.
    pub fn names(&self) -> Vec<&str> {
        self.themes.iter().map(|theme| theme.name.as_str()).collect()
    }

    /// All themes in registration order.
    pub fn themes(&self) -> &[Theme] {
        &self.themes
    }

    /// Number of registered themes.
    pub fn len(&self) -> usize {
        self.themes.len()
    }

    /// Whether the registry holds no themes.
    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }

    /// Picks any theme uniformly at random.
    pub fn random_theme<R: Rng>(&self, rng: &mut R) -> Option<&Theme> {
        self.themes.choose(rng)
    }

    /// Picks a theme at random among those passing [`validate_theme`].
    pub fn random_valid_theme<R: Rng>(&self, rng: &mut R) -> SnakeWordResult<&Theme> {
        let valid: Vec<&Theme> = self
            .themes
            .iter()
            .filter(|theme| {
                let validation = validate_theme(theme);
                if !validation.is_valid {
                    warn!(
                        "Skipping theme \"{}\": {}",
                        theme.name,
                        validation.errors.join("; ")
                    );
                }
                validation.is_valid
            })
            .collect();

        valid
            .choose(rng)
            .copied()
            .ok_or_else(|| SnakeWordError::InvalidTheme("No valid themes available".to_string()))
    }
}

impl Default for ThemeRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
