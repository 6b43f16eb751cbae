//! # Snakeword Main Entry Point
//!
//! Command-line front end: picks a theme, generates a puzzle (falling back to
//! the fixed layout when the search comes up empty), validates it and prints
//! or exports the result.

use clap::Parser;
use log::{error, info, warn};
use snakeword::{
    config, create_rng, generate_puzzle_with_rng, output, validate_advanced_solvability,
    validate_puzzle_completeness, Difficulty, FallbackGenerator, GeneratedPuzzle,
    GenerationOptions, SnakeWordError, SnakeWordResult, Theme, ThemeRegistry,
};
use rand::rngs::StdRng;
use std::path::PathBuf;

/// Command line arguments for the Snakeword puzzle generator.
#[derive(Parser, Debug)]
#[command(name = "snakeword")]
#[command(about = "Generates themed word-grid puzzles for the snake word game")]
#[command(version)]
struct Args {
    /// Theme name, or "random" for any valid theme
    #[arg(short, long, default_value = "random")]
    theme: String,

    /// Difficulty level (easy, medium, hard)
    #[arg(short, long, default_value = "medium")]
    difficulty: Difficulty,

    /// Random seed for reproducible puzzles
    #[arg(short, long)]
    seed: Option<u64>,

    /// Grid width and height
    #[arg(long, default_value_t = config::DEFAULT_GRID_SIZE)]
    grid_size: usize,

    /// Number of target words
    #[arg(long, default_value_t = config::DEFAULT_TARGET_WORDS)]
    targets: usize,

    /// Number of distractor words
    #[arg(long, default_value_t = config::DEFAULT_DISTRACTOR_WORDS)]
    distractors: usize,

    /// Maximum generation attempts
    #[arg(long, default_value_t = config::DEFAULT_MAX_ATTEMPTS)]
    max_attempts: u32,

    /// Let words share cells holding the same letter
    #[arg(long)]
    allow_overlaps: bool,

    /// JSON file of themes to use instead of the built-in set
    #[arg(long)]
    themes_file: Option<PathBuf>,

    /// Print the puzzle as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Write the puzzle as JSON to this path
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Fail instead of building the fallback layout
    #[arg(long)]
    no_fallback: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> SnakeWordResult<()> {
    let args = Args::parse();

    // Initialize logging
    initialize_logging(&args.log_level)?;

    info!("Starting Snakeword v{}", snakeword::VERSION);

    let result = run(&args);
    if let Err(e) = &result {
        error!("{}", e);
    }
    result
}

fn run(args: &Args) -> SnakeWordResult<()> {
    let registry = match &args.themes_file {
        Some(path) => {
            info!("Loading themes from {}", path.display());
            ThemeRegistry::from_json_file(path)?
        }
        None => ThemeRegistry::builtin(),
    };

    let options = GenerationOptions::new()
        .with_difficulty(args.difficulty)
        .with_grid_size(args.grid_size)
        .with_word_counts(args.targets, args.distractors)
        .with_max_attempts(args.max_attempts)
        .with_word_overlaps(args.allow_overlaps);
    let options = match args.seed {
        Some(seed) => options.with_seed(seed),
        None => options,
    };

    let mut rng = create_rng(&options);
    let theme = resolve_theme(&registry, &args.theme, &mut rng)?;
    info!(
        "Generating {} puzzle for theme '{}' ({})",
        options.difficulty, theme.name, theme.category
    );

    let puzzle = generate(theme, &options, args.no_fallback, &mut rng)?;

    let report = validate_puzzle_completeness(&puzzle);
    for warning in &report.warnings {
        warn!("{}", warning);
    }
    if !report.is_valid {
        for err in &report.errors {
            error!("{}", err);
        }
        return Err(SnakeWordError::InvalidPuzzle(report.errors.join("; ")));
    }

    let solvability = validate_advanced_solvability(&puzzle);
    for issue in &solvability.pathing_issues {
        warn!("{}", issue);
    }
    for recommendation in &solvability.recommendations {
        info!("Recommendation: {}", recommendation);
    }

    if let Some(path) = &args.output {
        output::write_json(&puzzle, path)?;
        info!("Wrote puzzle to {}", path.display());
    } else if args.json {
        println!("{}", output::to_json(&puzzle)?);
    } else {
        print!("{}", output::render_text(&puzzle));
    }

    Ok(())
}

fn resolve_theme<'a>(
    registry: &'a ThemeRegistry,
    name: &str,
    rng: &mut StdRng,
) -> SnakeWordResult<&'a Theme> {
    if name.eq_ignore_ascii_case("random") {
        registry.random_valid_theme(rng)
    } else {
        registry.require(name)
    }
}

fn generate(
    theme: &Theme,
    options: &GenerationOptions,
    no_fallback: bool,
    rng: &mut StdRng,
) -> SnakeWordResult<GeneratedPuzzle> {
    match generate_puzzle_with_rng(theme, options, rng) {
        Err(SnakeWordError::GenerationExhausted { attempts }) if !no_fallback => {
            warn!(
                "Generation gave up after {} attempts, using fallback layout",
                attempts
            );
            FallbackGenerator::new(options.grid_size).build(theme, rng)
        }
        other => other,
    }
}

fn initialize_logging(log_level: &str) -> SnakeWordResult<()> {
    #[cfg(feature = "dev-tools")]
    {
        use tracing::Level;

        let level = match log_level.to_lowercase().as_str() {
            "error" => Level::ERROR,
            "warn" => Level::WARN,
            "info" => Level::INFO,
            "debug" => Level::DEBUG,
            "trace" => Level::TRACE,
            _ => Level::INFO,
        };

        tracing_subscriber::fmt()
            .with_max_level(level)
            .with_target(false)
            .try_init()
            .map_err(|e| {
                SnakeWordError::InvalidOptions(format!("Failed to initialize logging: {}", e))
            })?;
    }

    #[cfg(not(feature = "dev-tools"))]
    {
        use log::LevelFilter;

        let level = match log_level.to_lowercase().as_str() {
            "error" => LevelFilter::Error,
            "warn" => LevelFilter::Warn,
            "info" => LevelFilter::Info,
            "debug" => LevelFilter::Debug,
            "trace" => LevelFilter::Trace,
            _ => LevelFilter::Info,
        };

        env_logger::Builder::new()
            .filter_level(level)
            .format_target(false)
            .try_init()
            .map_err(|e| {
                SnakeWordError::InvalidOptions(format!("Failed to initialize logging: {}", e))
            })?;
    }

    Ok(())
}
