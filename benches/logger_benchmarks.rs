//! Criterion benchmarks for named_logger_system

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use named_logger_system::appenders::MemoryAppender;
use named_logger_system::core::caller::{self, CallerOverrides};
use named_logger_system::prelude::*;

// ============================================================================
// Registry Benchmarks
// ============================================================================

fn bench_registry(c: &mut Criterion) {
    let mut group = c.benchmark_group("registry");
    group.throughput(Throughput::Elements(1));

    let registry = Registry::with_appender(Box::new(MemoryAppender::new()));
    registry.create_or_get(LogLevel::Info, "hot");

    group.bench_function("create_or_get_existing", |b| {
        b.iter(|| {
            let handle = registry.create_or_get(LogLevel::Info, black_box("hot"));
            black_box(handle)
        });
    });

    group.bench_function("set_level", |b| {
        b.iter(|| {
            registry
                .set_level(black_box("hot"), LogLevel::Warn)
                .expect("registered prefix");
        });
    });

    group.finish();
}

// ============================================================================
// Emission Benchmarks
// ============================================================================

fn bench_emission(c: &mut Criterion) {
    let mut group = c.benchmark_group("emission");
    group.throughput(Throughput::Elements(1));

    let appender = MemoryAppender::new();
    let buffer = appender.buffer();
    let registry = Registry::with_appender(Box::new(appender));
    let logger = registry.create_or_get(LogLevel::Info, "bench");

    group.bench_function("suppressed", |b| {
        b.iter(|| {
            logger.debug(black_box("below threshold"));
        });
    });

    group.bench_function("emitted", |b| {
        b.iter(|| {
            logger.info(black_box("resolved and rendered"));
        });
        buffer.clear();
    });

    group.finish();
}

// ============================================================================
// Caller Resolution Benchmarks
// ============================================================================

fn bench_caller_resolution(c: &mut Criterion) {
    let mut group = c.benchmark_group("caller_resolution");
    group.throughput(Throughput::Elements(1));

    group.bench_function("resolve", |b| {
        let overrides = CallerOverrides::default();
        b.iter(|| {
            let info = caller::resolve(black_box(&overrides));
            black_box(info)
        });
    });

    group.bench_function("resolve_with_patterns", |b| {
        let overrides = CallerOverrides {
            fix_by_file: vec!["harness.rs".to_string()],
            fix_by_func: vec!["run_test".to_string()],
            extra_skip: 0,
        };
        b.iter(|| {
            let info = caller::resolve(black_box(&overrides));
            black_box(info)
        });
    });

    group.finish();
}

criterion_group!(benches, bench_registry, bench_emission, bench_caller_resolution);
criterion_main!(benches);
