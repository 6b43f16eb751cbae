use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use snakeword::{
    generate_fallback_puzzle_with_rng, generate_puzzle_with_rng, seeded_rng,
    validate_advanced_solvability, validate_puzzle_completeness, Difficulty, GenerationOptions,
    ThemeRegistry,
};

fn bench_generate_puzzle(c: &mut Criterion) {
    let registry = ThemeRegistry::builtin();
    let mut group = c.benchmark_group("generate_puzzle");

    for difficulty in Difficulty::all() {
        let options = GenerationOptions::new().with_difficulty(difficulty);
        group.bench_with_input(
            BenchmarkId::from_parameter(difficulty),
            &options,
            |b, options| {
                let mut rng = seeded_rng(42);
                b.iter(|| {
                    for theme in registry.themes() {
                        black_box(generate_puzzle_with_rng(theme, options, &mut rng).ok());
                    }
                });
            },
        );
    }

    group.finish();
}

fn bench_fallback(c: &mut Criterion) {
    let registry = ThemeRegistry::builtin();
    let theme = &registry.themes()[0];
    let mut rng = seeded_rng(42);

    c.bench_function("generate_fallback_puzzle", |b| {
        b.iter(|| black_box(generate_fallback_puzzle_with_rng(theme, &mut rng).ok()));
    });
}

fn bench_validation(c: &mut Criterion) {
    let registry = ThemeRegistry::builtin();
    let theme = &registry.themes()[0];
    let mut rng = seeded_rng(42);
    let Ok(puzzle) = generate_puzzle_with_rng(theme, &GenerationOptions::new(), &mut rng) else {
        return;
    };

    c.bench_function("validate_puzzle_completeness", |b| {
        b.iter(|| black_box(validate_puzzle_completeness(black_box(&puzzle))));
    });
    c.bench_function("validate_advanced_solvability", |b| {
        b.iter(|| black_box(validate_advanced_solvability(black_box(&puzzle))));
    });
}

criterion_group!(benches, bench_generate_puzzle, bench_fallback, bench_validation);
criterion_main!(benches);
