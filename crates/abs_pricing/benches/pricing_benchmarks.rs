//! Criterion benchmarks for the valuation engine.

use abs_pricing::{SimulationConfig, SwapValuationEngine};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_reference_run(c: &mut Criterion) {
    let engine = SwapValuationEngine::new(SimulationConfig::default()).unwrap();
    c.bench_function("swap_valuation_1000x60", |b| {
        b.iter(|| black_box(engine.run().unwrap()))
    });
}

fn bench_trial_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("swap_valuation_trials");
    for n_trials in [100usize, 1000, 10_000] {
        let config = SimulationConfig::builder()
            .n_trials(n_trials)
            .build()
            .unwrap();
        let engine = SwapValuationEngine::new(config).unwrap();
        group.bench_function(format!("{n_trials}_trials"), |b| {
            b.iter(|| black_box(engine.run().unwrap()))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_reference_run, bench_trial_scaling);
criterion_main!(benches);
