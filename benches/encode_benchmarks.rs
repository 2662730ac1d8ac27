//! Criterion benchmarks for name encoding.
//!
//! Measures:
//! - Rule set loading and validation
//! - Language classification
//! - Single-name encoding per mode and match type
//! - Multi-word names with and without concatenation

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use libbmpm::prelude::*;

// ============================================================================
// Benchmark Fixtures
// ============================================================================

fn sample_names() -> Vec<&'static str> {
    vec![
        // Short names
        "Neil",
        "Smith",
        "Cohen",
        // Medium names
        "Kowalski",
        "Rodriguez",
        "Иванов",
        // Long names
        "Schwarzenegger",
        "Aleksandrovich",
    ]
}

fn multi_word_names() -> Vec<&'static str> {
    vec!["van Helsing", "d'Angelo", "Jean Paul", "de la Cruz", "Mendes Pereira"]
}

// ============================================================================
// Loading Benchmarks
// ============================================================================

fn bench_load_rules(c: &mut Criterion) {
    c.bench_function("load_bundled_rules", |b| {
        b.iter(|| RuleSet::load_bundled().unwrap())
    });
}

fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify");
    let encoder = BeiderMorse::new();
    let names = sample_names();

    group.throughput(Throughput::Elements(names.len() as u64));
    group.bench_function("sample_names", |b| {
        b.iter(|| {
            for name in &names {
                black_box(encoder.classify(black_box(name)));
            }
        })
    });
    group.finish();
}

// ============================================================================
// Encoding Benchmarks
// ============================================================================

fn bench_encode_modes(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");
    let names = sample_names();

    for mode in Mode::ALL {
        for match_type in [MatchType::Approx, MatchType::Exact] {
            let encoder = BeiderMorse::builder()
                .mode(mode)
                .match_type(match_type)
                .build()
                .unwrap();
            group.throughput(Throughput::Elements(names.len() as u64));
            group.bench_with_input(
                BenchmarkId::new(mode.tag(), match_type),
                &names,
                |b, names| {
                    b.iter(|| {
                        for name in names {
                            black_box(encoder.encode(black_box(name)));
                        }
                    })
                },
            );
        }
    }
    group.finish();
}

fn bench_multi_word(c: &mut Criterion) {
    let mut group = c.benchmark_group("multi_word");
    let names = multi_word_names();

    for concat in [true, false] {
        let encoder = BeiderMorse::builder().concat(concat).build().unwrap();
        group.bench_with_input(BenchmarkId::new("concat", concat), &names, |b, names| {
            b.iter(|| {
                for name in names {
                    black_box(encoder.encode(black_box(name)));
                }
            })
        });
    }
    group.finish();
}

fn bench_explicit_language(c: &mut Criterion) {
    let encoder = BeiderMorse::new();
    let mut group = c.benchmark_group("language_choice");

    for (label, language) in [("auto", ""), ("any", "any"), ("spanish", "spanish")] {
        group.bench_with_input(BenchmarkId::new("rodriguez", label), &language, |b, &language| {
            b.iter(|| black_box(encoder.encode_with(black_box("Rodriguez"), language, Mode::Generic)))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_load_rules,
    bench_classify,
    bench_encode_modes,
    bench_multi_word,
    bench_explicit_language
);
criterion_main!(benches);
