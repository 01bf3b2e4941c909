//! Criterion benchmarks for the round simulator and the policy search.

use blackjack_ga::ga::{Evolution, GaConfig};
use blackjack_ga::game::play_round;
use blackjack_ga::optimizer::{evaluate_fitness, BlackjackProblem};
use blackjack_ga::policy::PolicyTable;
use blackjack_ga::random::create_rng;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn bench_play_round(c: &mut Criterion) {
    let mut rng = create_rng(42);
    let mut table = PolicyTable::random(&mut rng);
    c.bench_function("play_round", |b| {
        b.iter(|| black_box(play_round(&mut table, &mut rng)))
    });
}

fn bench_evaluate_fitness(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate_fitness");
    let table = PolicyTable::random(&mut create_rng(7));

    for games in [100, 1000] {
        group.bench_with_input(BenchmarkId::from_parameter(games), &games, |b, &games| {
            let mut rng = create_rng(42);
            b.iter(|| black_box(evaluate_fitness(&table, games, &mut rng)))
        });
    }

    group.finish();
}

fn bench_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("ga_generation");
    group.sample_size(10);

    let problem = BlackjackProblem::default();
    for pop_size in [50, 100] {
        let config = GaConfig::default()
            .with_population_size(pop_size)
            .with_generations(1)
            .with_seed(42);
        group.bench_with_input(BenchmarkId::from_parameter(pop_size), &config, |b, config| {
            b.iter(|| {
                let mut evolution = Evolution::new(&problem, config.clone()).unwrap();
                black_box(evolution.step())
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_play_round, bench_evaluate_fitness, bench_generation);
criterion_main!(benches);
