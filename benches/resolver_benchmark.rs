use std::collections::{BTreeMap, LinkedList};

use adjacent::{degree, edges, find_vertex, num_edges, target_id, vertices, AdjacencyList};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

fn ring(n: usize, fanout: usize) -> Vec<Vec<usize>> {
    (0..n).map(|u| (1..=fanout).map(|k| (u + k) % n).collect()).collect()
}

/// Visits every edge, summing target ids.
fn sum_targets<G: AdjacencyList>(g: &G) -> usize
where
    G::VertexId: Into<u64>,
{
    let mut acc = 0u64;
    for u in g.vertices() {
        for e in g.edges(&u) {
            acc = acc.wrapping_add(g.target_id(&e).into());
        }
    }
    acc as usize
}

fn bench_traversal(c: &mut Criterion) {
    let mut group = c.benchmark_group("traversal");
    for &n in &[1_000usize, 10_000] {
        let g = ring(n, 8);
        let narrow: Vec<Vec<u32>> = g.iter().map(|l| l.iter().map(|&v| v as u32).collect()).collect();
        group.throughput(Throughput::Elements((n * 8) as u64));

        group.bench_with_input(BenchmarkId::new("hand_written", n), &g, |b, g| {
            b.iter(|| {
                let mut acc = 0usize;
                for list in g {
                    for &v in list {
                        acc = acc.wrapping_add(v);
                    }
                }
                black_box(acc)
            });
        });

        group.bench_with_input(BenchmarkId::new("resolved", n), &g, |b, g| {
            b.iter(|| {
                let mut acc = 0usize;
                for u in vertices(g) {
                    for e in edges(g, &u) {
                        acc = acc.wrapping_add(target_id(g, &e));
                    }
                }
                black_box(acc)
            });
        });

        group.bench_with_input(BenchmarkId::new("resolved_generic_u32", n), &narrow, |b, g| {
            b.iter(|| black_box(sum_targets(g)));
        });
    }
    group.finish();
}

fn bench_counts(c: &mut Criterion) {
    let mut group = c.benchmark_group("num_edges");
    let g = ring(10_000, 8);
    group.throughput(Throughput::Elements(g.len() as u64));

    group.bench_function("hand_written", |b| {
        b.iter(|| black_box(g.iter().map(Vec::len).sum::<usize>()));
    });
    group.bench_function("resolved", |b| b.iter(|| black_box(num_edges(&g))));
    group.finish();
}

fn bench_keyed(c: &mut Criterion) {
    let mut group = c.benchmark_group("keyed_lookup");
    let n = 4_096u32;
    let btree: BTreeMap<u32, Vec<u32>> = (0..n).map(|u| (u, vec![(u + 1) % n])).collect();
    let linked: Vec<LinkedList<u32>> = (0..n).map(|u| [(u + 1) % n, (u + 2) % n].into_iter().collect()).collect();
    group.throughput(Throughput::Elements(u64::from(n)));

    group.bench_function("btree_get", |b| {
        b.iter(|| {
            let mut acc = 0usize;
            for k in 0..n {
                acc += btree.get(&k).map_or(0, Vec::len);
            }
            black_box(acc)
        });
    });

    group.bench_function("btree_find_vertex_degree", |b| {
        b.iter(|| {
            let mut acc = 0usize;
            for k in 0..n {
                acc += degree(&btree, &find_vertex(&btree, &k));
            }
            black_box(acc)
        });
    });

    group.bench_function("linked_edges_degree", |b| {
        b.iter(|| black_box(vertices(&linked).map(|u| degree(&linked, &u)).sum::<usize>()));
    });
    group.finish();
}

criterion_group!(benches, bench_traversal, bench_counts, bench_keyed);
criterion_main!(benches);
