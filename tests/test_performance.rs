//! Performance tests for puzzle generation and validation

use snakeword::{
    generate_fallback_puzzle_with_rng, generate_puzzle, seeded_rng, validate_advanced_solvability,
    validate_puzzle_completeness, Difficulty, GenerationOptions, SnakeWordResult, ThemeRegistry,
};
use std::time::Instant;

#[test]
fn test_generation_performance() -> SnakeWordResult<()> {
    let registry = ThemeRegistry::builtin();

    let start = Instant::now();
    let mut iterations = 0u32;
    let mut total_attempts = 0u32;

    for theme in registry.themes() {
        for difficulty in Difficulty::all() {
            for seed in 0..10 {
                let options = GenerationOptions::for_testing(seed).with_difficulty(difficulty);
                let puzzle = generate_puzzle(theme, &options)?;
                total_attempts += puzzle.generation_stats.attempts;
                iterations += 1;
            }
        }
    }

    let elapsed = start.elapsed();
    let avg_generation_time = elapsed / iterations;

    println!("Average generation time: {:?}", avg_generation_time);
    println!(
        "Average attempts per puzzle: {:.2}",
        total_attempts as f64 / iterations as f64
    );

    // Generation runs on request, so it has to feel instant
    assert!(
        avg_generation_time.as_millis() < 50,
        "Puzzle generation too slow: {:?}",
        avg_generation_time
    );

    Ok(())
}

#[test]
fn test_fallback_performance() -> SnakeWordResult<()> {
    let registry = ThemeRegistry::builtin();
    let theme = registry.require("Food")?;
    let mut rng = seeded_rng(7);

    let start = Instant::now();
    let iterations = 500;

    for _ in 0..iterations {
        let _puzzle = generate_fallback_puzzle_with_rng(theme, &mut rng)?;
    }

    let elapsed = start.elapsed();
    let avg_time = elapsed / iterations;

    println!("Average fallback build time: {:?}", avg_time);

    assert!(
        avg_time.as_millis() < 5,
        "Fallback build too slow: {:?}",
        avg_time
    );

    Ok(())
}

#[test]
fn test_validation_performance() -> SnakeWordResult<()> {
    let registry = ThemeRegistry::builtin();
    let theme = registry.require("Colors")?;
    let puzzle = generate_puzzle(theme, &GenerationOptions::for_testing(99))?;

    let start = Instant::now();
    let iterations = 500;

    for _ in 0..iterations {
        let completeness = validate_puzzle_completeness(&puzzle);
        let solvability = validate_advanced_solvability(&puzzle);
        assert!(completeness.is_valid);
        assert!(solvability.is_solvable);
    }

    let elapsed = start.elapsed();
    let avg_time = elapsed / iterations;

    println!("Average validation time: {:?}", avg_time);

    assert!(
        avg_time.as_millis() < 5,
        "Validation too slow: {:?}",
        avg_time
    );

    Ok(())
}
