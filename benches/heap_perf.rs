//! Heap and traversal benchmarks
//!
//! Measures D-ary heap push/pop throughput across branching factors and
//! Dijkstra on a grid graph.
//!
//! ```bash
//! cargo bench --bench heap_perf
//! ```

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use heapgraph::algorithms::{shortest_paths, ShortestPathAlgorithm};
use heapgraph::dary::{DaryHeap, HeapOrder};
use heapgraph::graph::AdjacencyList;

/// Deterministic pseudo-random keys (splitmix-style) so runs are comparable.
fn keys(count: usize) -> Vec<i64> {
    let mut state: u64 = 0x9e37_79b9_7f4a_7c15;
    (0..count)
        .map(|_| {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            (state >> 33) as i64
        })
        .collect()
}

fn bench_push_pop(c: &mut Criterion) {
    let input = keys(10_000);
    let mut group = c.benchmark_group("dary_push_pop");
    for arity in [2usize, 4, 8] {
        group.bench_with_input(BenchmarkId::from_parameter(arity), &arity, |b, &arity| {
            b.iter(|| {
                let mut heap = DaryHeap::new(HeapOrder::Min, arity).unwrap();
                for &key in &input {
                    heap.insert(key, key);
                }
                while let Ok(entry) = heap.extract() {
                    black_box(entry);
                }
            });
        });
    }
    group.finish();
}

fn bench_bulk_build(c: &mut Criterion) {
    let input = keys(10_000);
    c.bench_function("dary_bulk_build", |b| {
        b.iter(|| {
            let entries = input.iter().map(|&k| (k, k));
            black_box(DaryHeap::from_entries(entries, HeapOrder::Min, 4).unwrap())
        });
    });
}

fn bench_dijkstra_grid(c: &mut Criterion) {
    // 16x16 grid with varied weights.
    let side = 16i64;
    let mut graph: AdjacencyList<i64> = AdjacencyList::new();
    for x in 0..side {
        for y in 0..side {
            let here = format!("{x},{y}");
            if x + 1 < side {
                graph.add_undirected(here.clone(), format!("{},{y}", x + 1), 1 + (x + y) % 7);
            }
            if y + 1 < side {
                graph.add_undirected(here, format!("{x},{}", y + 1), 1 + (x * y) % 5);
            }
        }
    }
    let source = "0,0".to_string();

    c.bench_function("dijkstra_grid_16x16", |b| {
        b.iter(|| {
            black_box(
                shortest_paths(&graph, ShortestPathAlgorithm::Dijkstra, &source).unwrap(),
            )
        });
    });
}

criterion_group!(benches, bench_push_pop, bench_bulk_build, bench_dijkstra_grid);
criterion_main!(benches);
