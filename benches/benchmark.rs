use criterion::{black_box, criterion_group, criterion_main, Criterion};
use token_spectra::{compute_all, max_cut, max_matching, token_graph, Graph};

/// Complete graph on n nodes with deterministic dyadic weights
fn weighted_complete(n: usize) -> Graph {
    let edges: Vec<(usize, usize, f64)> = (0..n)
        .flat_map(|u| ((u + 1)..n).map(move |v| (u, v, ((u * n + v) % 7 + 1) as f64 / 4.0)))
        .collect();
    Graph::from_weighted_edges(n, &edges).unwrap()
}

/// Cycle on n nodes with alternating weights
fn weighted_cycle(n: usize) -> Graph {
    let edges: Vec<(usize, usize, f64)> = (0..n)
        .map(|u| (u, (u + 1) % n, if u % 2 == 0 { 2.0 } else { 0.5 }))
        .collect();
    Graph::from_weighted_edges(n, &edges).unwrap()
}

fn bench_matching(c: &mut Criterion) {
    let g = weighted_complete(12);
    c.bench_function("max_matching_k12", |b| {
        b.iter(|| max_matching(black_box(&g)))
    });
}

fn bench_cut(c: &mut Criterion) {
    let g = weighted_complete(14);
    c.bench_function("max_cut_k14", |b| b.iter(|| max_cut(black_box(&g)).unwrap()));
}

fn bench_token_graph(c: &mut Criterion) {
    let g = weighted_cycle(12);
    c.bench_function("token_graph_c12_k3", |b| {
        b.iter(|| token_graph(black_box(&g), 3).unwrap())
    });
}

fn bench_full_record(c: &mut Criterion) {
    let g = weighted_cycle(8);
    c.bench_function("compute_all_c8", |b| {
        b.iter(|| compute_all(black_box(&g)).unwrap())
    });
}

criterion_group!(
    benches,
    bench_matching,
    bench_cut,
    bench_token_graph,
    bench_full_record
);
criterion_main!(benches);
