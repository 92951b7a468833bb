//! Criterion benchmarks for core decomposition
//!
//! Validates that CSR construction and bucket peeling stay linear in V+E.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use kcore_stats::{core_numbers, parse_edge_list, CsrGraph};
use std::hint::black_box;

/// Generate scale-free graph (Barabási-Albert model approximation)
fn generate_scale_free_graph(num_nodes: usize, edges_per_node: usize) -> Vec<(i64, i64)> {
    let mut edges = Vec::new();
    let mut rng_state = 12345_u64; // Simple LCG for reproducibility

    for node in 0..num_nodes {
        for _ in 0..edges_per_node {
            rng_state = rng_state.wrapping_mul(1103515245).wrapping_add(12345);
            let target = (rng_state % num_nodes as u64) as i64;

            if target != node as i64 {
                edges.push((node as i64, target));
            }
        }
    }

    edges
}

/// Benchmark: CSR graph construction from labelled edges
fn bench_csr_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("csr_construction");

    for size in [1_000, 10_000, 100_000].iter() {
        let edges = generate_scale_free_graph(*size, 4);

        group.bench_with_input(BenchmarkId::new("from_edge_list", size), &edges, |b, edges| {
            b.iter(|| {
                let graph = CsrGraph::from_edge_list(black_box(edges)).unwrap();
                black_box(graph);
            });
        });
    }

    group.finish();
}

/// Benchmark: edge-list text parsing
fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_edge_list");

    for size in [1_000, 10_000, 100_000].iter() {
        let text: String = generate_scale_free_graph(*size, 4)
            .iter()
            .map(|(u, v)| format!("{u} {v}\n"))
            .collect();

        group.bench_with_input(BenchmarkId::new("text", size), &text, |b, text| {
            b.iter(|| black_box(parse_edge_list(black_box(text)).unwrap()));
        });
    }

    group.finish();
}

/// Benchmark: bucket-queue core decomposition
fn bench_core_numbers(c: &mut Criterion) {
    let mut group = c.benchmark_group("core_numbers");

    for size in [1_000, 10_000, 100_000].iter() {
        let edges = generate_scale_free_graph(*size, 4);
        let graph = CsrGraph::from_edge_list(&edges).unwrap();

        group.bench_with_input(BenchmarkId::new("peeling", size), &graph, |b, graph| {
            b.iter(|| black_box(core_numbers(black_box(graph))));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_csr_construction, bench_parse, bench_core_numbers);
criterion_main!(benches);
