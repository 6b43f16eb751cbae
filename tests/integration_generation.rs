//! End-to-end generation scenarios: the public entry points working together
//! on the built-in themes and on hand-made edge-case themes.

use snakeword::{
    generate_fallback_puzzle, generate_fallback_puzzle_with_rng, generate_puzzle, seeded_rng,
    validate_advanced_solvability, validate_puzzle_completeness, Difficulty, FallbackGenerator,
    GenerationOptions, Generator, Grid, Orientation, PlacementEngine, Position, PuzzleGenerator,
    SnakeWordError, SnakeWordResult, Theme, ThemeRegistry, Word,
};

#[test]
fn test_easy_animals_puzzle() -> SnakeWordResult<()> {
    let registry = ThemeRegistry::builtin();
    let theme = registry.require("Animals")?;

    for seed in 0..10 {
        let options = GenerationOptions::for_testing(seed)
            .with_difficulty(Difficulty::Easy)
            .with_grid_size(6)
            .with_word_counts(3, 2);
        let puzzle = generate_puzzle(theme, &options)?;

        assert_eq!(puzzle.target_words.len(), 3);
        assert_eq!(puzzle.distractor_words.len(), 2);
        for word in puzzle.all_words() {
            assert!(word.len() <= 5, "{} is too long for easy", word.text);
        }

        assert_eq!(puzzle.grid.size(), 6);
        for row in puzzle.grid.rows() {
            assert_eq!(row.len(), 6);
            for cell in row {
                let letter = cell.letter.expect("every cell is filled");
                assert!(letter.is_ascii_uppercase());
            }
        }
    }

    Ok(())
}

#[test]
fn test_place_cat_on_empty_grid() {
    let engine = PlacementEngine::default();
    let mut grid = Grid::new(6);
    let mut word = Word::new("CAT", true);

    let start = Position::new(1, 1);
    assert!(engine.place_word_at(&mut grid, &mut word, start, Orientation::LeftToRight));

    assert_eq!(
        word.positions,
        vec![Position::new(1, 1), Position::new(2, 1), Position::new(3, 1)]
    );
    let row = &grid.rows()[1];
    assert_eq!(row[1].letter, Some('C'));
    assert_eq!(row[2].letter, Some('A'));
    assert_eq!(row[3].letter, Some('T'));
    assert!(row[1..4].iter().all(|cell| cell.is_part_of_word));
}

#[test]
fn test_conflicting_cell_blocks_second_word() {
    let engine = PlacementEngine::default();
    let mut grid = Grid::new(6);

    let mut first = Word::new("BAT", true);
    let start = Position::new(1, 2);
    assert!(engine.place_word_at(&mut grid, &mut first, start, Orientation::LeftToRight));
    let before = grid.clone();

    let mut second = Word::new("ORE", true);
    let start = Position::new(2, 1);
    assert!(!engine.place_word_at(&mut grid, &mut second, start, Orientation::TopToBottom));
    assert_eq!(grid, before);
    assert!(!second.is_placed());
}

#[test]
fn test_zero_attempts_then_fallback() -> SnakeWordResult<()> {
    let registry = ThemeRegistry::builtin();
    let theme = registry.require("Animals")?;
    let options = GenerationOptions::for_testing(1).with_max_attempts(0);

    let err = generate_puzzle(theme, &options).unwrap_err();
    assert!(matches!(err, SnakeWordError::GenerationExhausted { attempts: 0 }));

    let fallback = generate_fallback_puzzle(theme)?;
    let report = validate_puzzle_completeness(&fallback);
    assert!(report.is_valid, "{:?}", report.errors);

    Ok(())
}

#[test]
fn test_starved_theme_still_gets_fallback() -> SnakeWordResult<()> {
    // Every word after CAT shares three letters with it, so selection starves
    let theme = Theme::new(
        "Anagrams",
        "Test",
        &["CAT", "ACT", "TACO"],
        &["COAT", "TACT"],
    );
    let options = GenerationOptions::for_testing(2).with_max_attempts(10);

    let err = generate_puzzle(&theme, &options).unwrap_err();
    assert!(matches!(err, SnakeWordError::GenerationExhausted { attempts: 10 }));

    let fallback = generate_fallback_puzzle_with_rng(&theme, &mut seeded_rng(2))?;
    assert_eq!(fallback.target_words.len(), 3);
    assert_eq!(fallback.distractor_words.len(), 2);
    assert!(validate_puzzle_completeness(&fallback).is_valid);

    Ok(())
}

#[test]
fn test_theme_without_valid_words_fails_everywhere() {
    let theme = Theme::new("Nonsense", "Test", &["X1", "A-B", "Q"], &["", "ZZZZZZZZ"]);
    let options = GenerationOptions::for_testing(3).with_max_attempts(5);

    assert!(matches!(
        generate_puzzle(&theme, &options),
        Err(SnakeWordError::GenerationExhausted { attempts: 5 })
    ));
    assert!(matches!(
        generate_fallback_puzzle(&theme),
        Err(SnakeWordError::FallbackFailed { .. })
    ));
}

#[test]
fn test_generated_words_come_from_theme() -> SnakeWordResult<()> {
    let registry = ThemeRegistry::builtin();

    for theme in registry.themes() {
        for seed in 0..20 {
            let puzzle = generate_puzzle(theme, &GenerationOptions::for_testing(seed))?;
            for word in &puzzle.target_words {
                assert!(
                    theme.target_words.contains(&word.text),
                    "{} is not a {} target",
                    word.text,
                    theme.name
                );
            }
            for word in &puzzle.distractor_words {
                assert!(
                    theme.distractor_words.contains(&word.text),
                    "{} is not a {} distractor",
                    word.text,
                    theme.name
                );
            }
        }
    }

    Ok(())
}

#[test]
fn test_hard_targets_are_long() -> SnakeWordResult<()> {
    let registry = ThemeRegistry::builtin();
    let options = GenerationOptions::for_testing(17).with_difficulty(Difficulty::Hard);

    for theme in registry.themes() {
        let puzzle = generate_puzzle(theme, &options)?;
        assert!(puzzle.target_words.iter().all(|w| w.len() >= 4));
    }

    Ok(())
}

#[test]
fn test_larger_grid_and_more_words() -> SnakeWordResult<()> {
    let registry = ThemeRegistry::builtin();
    let theme = registry.require("Nature")?;
    let options = GenerationOptions::for_testing(5)
        .with_grid_size(10)
        .with_word_counts(4, 3);

    let puzzle = generate_puzzle(theme, &options)?;
    assert_eq!(puzzle.grid_size(), 10);
    assert_eq!(puzzle.target_words.len(), 4);
    assert_eq!(puzzle.distractor_words.len(), 3);
    assert!(puzzle.grid.is_full());

    Ok(())
}

#[test]
fn test_generators_are_interchangeable() -> SnakeWordResult<()> {
    fn run<G: Generator<snakeword::GeneratedPuzzle>>(
        generator: &G,
        theme: &Theme,
    ) -> SnakeWordResult<()> {
        let mut rng = seeded_rng(21);
        let puzzle = generator.generate(theme, &mut rng)?;
        generator.validate(&puzzle)
    }

    let registry = ThemeRegistry::builtin();
    let theme = registry.require("Sports")?;
    run(&PuzzleGenerator::new(GenerationOptions::default()), theme)?;
    run(&FallbackGenerator::default(), theme)?;

    Ok(())
}

#[test]
fn test_generated_puzzles_are_solvable() -> SnakeWordResult<()> {
    let registry = ThemeRegistry::builtin();
    let mut rng = seeded_rng(33);

    for _ in 0..10 {
        let theme = registry.random_valid_theme(&mut rng)?;
        let puzzle = generate_puzzle(theme, &GenerationOptions::default())?;
        let report = validate_advanced_solvability(&puzzle);
        assert!(report.is_solvable, "{:?}", report.pathing_issues);
        assert!(report.unreachable_words.is_empty());
    }

    Ok(())
}

#[test]
fn test_unknown_theme_lists_available() {
    let registry = ThemeRegistry::builtin();
    let err = registry.require("Planets").unwrap_err();
    let message = err.to_string();
    assert!(message.contains("Planets"));
    assert!(message.contains("Animals, Colors, Food, Sports, Nature"));
}
