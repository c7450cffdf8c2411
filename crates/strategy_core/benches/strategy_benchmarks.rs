//! Criterion benchmarks for the strategy calculation pipeline.
//!
//! Measures grid generation, payoff evaluation and the full pipeline across
//! grid resolutions to characterise scaling behaviour.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use strategy_core::calculator::{compute_strategy_returns, CalculatorConfig, StrategyCalculator};
use strategy_core::grid::{generate_with, GridConfig};
use strategy_core::payoff::compute_payoff;
use strategy_core::types::{StrategyParameters, StrategyVariant};

fn params() -> StrategyParameters {
    StrategyParameters::new(105.0, 2.5, 100.0).with_contracts(3)
}

/// Benchmark grid generation and payoff evaluation separately.
fn bench_pipeline_stages(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline_stages");

    for points in [100, 1_000, 10_000] {
        let config = GridConfig::new(0.5, 1.5, points);

        group.bench_with_input(BenchmarkId::new("grid", points), &config, |b, config| {
            b.iter(|| generate_with(black_box(100.0), black_box(config)).unwrap());
        });

        let grid = generate_with(100.0, &config).unwrap();
        for variant in StrategyVariant::ALL {
            group.bench_with_input(
                BenchmarkId::new(format!("payoff_{}", variant.as_str()), points),
                &grid,
                |b, grid| {
                    b.iter(|| compute_payoff(black_box(variant), black_box(grid), &params()).unwrap());
                },
            );
        }
    }

    group.finish();
}

/// Benchmark the full calculation.
fn bench_full_calculation(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_calculation");

    group.bench_function("default_put", |b| {
        b.iter(|| {
            compute_strategy_returns(black_box(StrategyVariant::CashSecuredPut), params()).unwrap()
        });
    });

    let legacy = StrategyCalculator::new(CalculatorConfig {
        grid: GridConfig::legacy_for(StrategyVariant::CoveredCall),
        ..CalculatorConfig::default()
    })
    .unwrap();
    group.bench_function("legacy_call", |b| {
        b.iter(|| {
            legacy
                .compute(black_box(StrategyVariant::CoveredCall), &params())
                .unwrap()
        });
    });

    group.finish();
}

criterion_group!(benches, bench_pipeline_stages, bench_full_calculation);
criterion_main!(benches);
