//! Benchmark for function composition.
//!
//! Runs the same init -> increment -> sum pipeline over a linked list three
//! ways: as nested plain calls, through `compose_after`, and through
//! `compose_then`. The composed forms should cost the same as the plain one.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use functional::compose::{compose_after, compose_then, make_identity};
use std::collections::LinkedList;
use std::hint::black_box;

type List = LinkedList<u64>;

fn init(size: u64) -> impl Fn(List) -> List {
    move |mut list| {
        list.extend(0..size);
        list
    }
}

fn increment(list: List) -> List {
    list.into_iter().map(|value| value + 1).collect()
}

fn sum(list: List) -> u64 {
    list.into_iter().fold(1, |total, value| total + value)
}

// =============================================================================
// Pipeline Benchmarks
// =============================================================================

fn benchmark_pipeline(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("pipeline");

    for size in [1_000u64, 200_000] {
        group.bench_with_input(BenchmarkId::new("plain_call", size), &size, |bencher, &size| {
            let init = init(size);
            bencher.iter(|| black_box(sum(increment(init(List::new())))));
        });

        group.bench_with_input(BenchmarkId::new("compose_after", size), &size, |bencher, &size| {
            let composed = compose_after(
                sum,
                compose_after(increment, compose_after(init(size), make_identity::<List>())),
            );
            bencher.iter(|| black_box(composed(List::new())));
        });

        group.bench_with_input(BenchmarkId::new("compose_then", size), &size, |bencher, &size| {
            let composed = compose_then(
                compose_then(compose_then(make_identity::<List>(), init(size)), increment),
                sum,
            );
            bencher.iter(|| black_box(composed(List::new())));
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_pipeline);
criterion_main!(benches);
