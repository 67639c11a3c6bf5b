//! `proptest` strategies for generating host graphs.
//!
//! Enabled by the `proptest` feature, for downstream crates that property-test
//! their own algorithms over the built-in hosts.

use std::collections::BTreeMap;

use proptest::collection::{btree_map, vec};
use proptest::prelude::*;

/// Index-addressed adjacency lists with up to `max_vertices` vertices and up
/// to `max_degree` edges per vertex. Every target is in range.
pub fn adjacency_list(max_vertices: usize, max_degree: usize) -> impl Strategy<Value = Vec<Vec<usize>>> {
    (1..=max_vertices.max(1)).prop_flat_map(move |n| vec(vec(0..n, 0..=max_degree), n))
}

/// Like [`adjacency_list`], with an `f64` weight on every edge.
pub fn weighted_adjacency_list(
    max_vertices: usize,
    max_degree: usize,
) -> impl Strategy<Value = Vec<Vec<(usize, f64)>>> {
    (1..=max_vertices.max(1))
        .prop_flat_map(move |n| vec(vec((0..n, -1.0e6..1.0e6f64), 0..=max_degree), n))
}

/// Key-addressed hosts over `u32` keys. Targets are drawn from the generated
/// key set, so every edge resolves.
pub fn keyed_adjacency(max_vertices: usize, max_degree: usize) -> impl Strategy<Value = BTreeMap<u32, Vec<u32>>> {
    btree_map(any::<u32>(), Just(()), 1..=max_vertices.max(1)).prop_flat_map(move |keys| {
        let keys: Vec<u32> = keys.into_keys().collect();
        let pick = proptest::sample::select(keys.clone());
        vec(vec(pick, 0..=max_degree), keys.len())
            .prop_map(move |lists| keys.iter().copied().zip(lists).collect::<BTreeMap<_, _>>())
    })
}
