//! # Utilities Module
//!
//! Randomness plumbing shared by every generation stage.

pub mod rng;

pub use rng::*;
