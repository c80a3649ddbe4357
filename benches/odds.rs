#[macro_use]
extern crate criterion;
extern crate holdem_odds;

use criterion::{BenchmarkId, Criterion};
use holdem_odds::core::{Card, Hand};
use holdem_odds::holdem::{OddsCalculatorBuilder, estimate_parallel};
use rand::{SeedableRng, rngs::StdRng};

fn cards(s: &str) -> Vec<Card> {
    Hand::new_from_str(s).unwrap().into()
}

fn preflop_by_opponents(c: &mut Criterion) {
    let hole = cards("AhKh");
    let mut group = c.benchmark_group("1k preflop trials");
    for opponents in [1usize, 3, 8] {
        group.bench_with_input(
            BenchmarkId::from_parameter(opponents),
            &opponents,
            |b, &opponents| {
                let mut calc = OddsCalculatorBuilder::default()
                    .hole_cards(&hole)
                    .opponents(opponents)
                    .trials(1_000)
                    .rng(StdRng::seed_from_u64(420))
                    .build()
                    .unwrap();
                b.iter(|| calc.estimate())
            },
        );
    }
    group.finish();
}

fn flop_heads_up(c: &mut Criterion) {
    let hole = cards("9c8c");
    let board = cards("7c6d2h");
    let mut calc = OddsCalculatorBuilder::default()
        .hole_cards(&hole)
        .community_cards(&board)
        .opponents(1)
        .trials(1_000)
        .build()
        .unwrap();
    c.bench_function("1k flop trials heads up", |b| b.iter(|| calc.estimate()));
}

fn parallel_preflop(c: &mut Criterion) {
    let hole = cards("QsQd");
    let mut group = c.benchmark_group("parallel");
    group.sample_size(10);
    group.bench_function("100k preflop trials 3 opponents", |b| {
        b.iter(|| estimate_parallel(&hole, &[], 3, 100_000, 7))
    });
    group.finish();
}

criterion_group!(benches, preflop_by_opponents, flop_heads_up, parallel_preflop);
criterion_main!(benches);
