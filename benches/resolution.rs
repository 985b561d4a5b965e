//! Benchmarks for configuration resolution and the check battery

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use eversight_config::{
    config::{environment_overrides, load_base_config, validate_schema},
    deep_merge, CompleteConfig, ConfigurationTester, EnvironmentConfigManager,
    SUPPORTED_ENVIRONMENTS,
};
use serde_json::json;
use std::hint::black_box;
use std::path::PathBuf;

fn load_fixture() -> CompleteConfig {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/base_config.json");
    load_base_config(&path).expect("benchmark fixture must load")
}

/// Deep merge over raw JSON trees of growing width
fn benchmark_deep_merge(c: &mut Criterion) {
    let mut group = c.benchmark_group("deep_merge");

    for width in [4usize, 32, 256].iter() {
        let target: serde_json::Value = (0..*width)
            .map(|i| (format!("key{}", i), json!({ "nested": { "value": i, "flag": true }, "list": [i, i + 1] })))
            .collect::<serde_json::Map<_, _>>()
            .into();
        let source: serde_json::Value = (0..*width)
            .step_by(2)
            .map(|i| (format!("key{}", i), json!({ "nested": { "value": i * 10 } })))
            .collect::<serde_json::Map<_, _>>()
            .into();

        group.bench_with_input(BenchmarkId::new("objects", width), width, |b, _| {
            b.iter(|| deep_merge(black_box(&target), black_box(&source)))
        });
    }

    group.finish();
}

/// Typed resolution of the fixture against every environment
fn benchmark_environment_resolution(c: &mut Criterion) {
    let mut group = c.benchmark_group("environment_resolution");
    let base = load_fixture();
    let manager = EnvironmentConfigManager::new();

    for environment in SUPPORTED_ENVIRONMENTS {
        group.bench_with_input(BenchmarkId::new("merge", environment), &environment, |b, env| {
            b.iter(|| manager.merge_environment_config(black_box(&base), env))
        });
    }

    group.bench_function("override_table", |b| {
        b.iter(|| {
            for environment in SUPPORTED_ENVIRONMENTS {
                black_box(environment_overrides(environment));
            }
        })
    });

    group.finish();
}

/// Schema validation and the full check battery
fn benchmark_checks(c: &mut Criterion) {
    let mut group = c.benchmark_group("checks");
    let resolved = EnvironmentConfigManager::new()
        .merge_environment_config(&load_fixture(), "production")
        .expect("production resolution must succeed");

    group.bench_function("validate_schema", |b| b.iter(|| validate_schema(black_box(&resolved))));

    let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
    let tester = ConfigurationTester::new();
    group.bench_function("test_configuration", |b| {
        b.iter(|| runtime.block_on(tester.test_configuration(black_box(&resolved))))
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_deep_merge,
    benchmark_environment_resolution,
    benchmark_checks
);
criterion_main!(benches);
