//! Host profiles: a serializable summary of how a host is read.

use serde::{Deserialize, Serialize};

use crate::resolve::AdjacencyList;
use crate::shape::{EdgeShape, ShapeKind};
use crate::store::{AddressMode, EdgeElemOf, EdgeStore, EdgeStoreOf, FindStrategy, VertexStore};

/// What the resolver sees when it looks at a host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HostProfile {
    /// Addressing of the vertex store.
    pub addressing: AddressMode,
    /// Addressing of the per-vertex edge stores.
    pub edge_addressing: AddressMode,
    /// Classification of the vertex store's elements.
    pub vertex_shape: ShapeKind,
    /// Classification of the edge elements.
    pub edge_shape: ShapeKind,
    /// Resolved `num_vertices`.
    pub num_vertices: usize,
    /// Resolved `num_edges`.
    pub num_edges: usize,
    /// Resolved `num_partitions`.
    pub num_partitions: usize,
}

/// Profiles `g`. Counts go through the resolver, so overrides are honored.
pub fn profile<G: AdjacencyList>(g: &G) -> HostProfile {
    HostProfile {
        addressing: <G::Lookup as FindStrategy<G>>::MODE,
        edge_addressing: <EdgeStoreOf<G> as EdgeStore>::MODE,
        vertex_shape: <G as VertexStore>::SHAPE,
        edge_shape: <EdgeElemOf<G> as EdgeShape>::KIND,
        num_vertices: g.num_vertices(),
        num_edges: g.num_edges(),
        num_partitions: g.num_partitions(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{BTreeMap, LinkedList};

    #[test]
    fn vec_of_weighted_edges() {
        let g: Vec<Vec<(usize, f64)>> = vec![vec![(1, 0.5)], vec![(0, 2.0), (1, 1.0)]];
        let p = profile(&g);
        assert_eq!(p.addressing, AddressMode::Index);
        assert_eq!(p.edge_addressing, AddressMode::Index);
        assert_eq!(p.vertex_shape, ShapeKind::Scalar);
        assert_eq!(p.edge_shape, ShapeKind::PairLike);
        assert_eq!((p.num_vertices, p.num_edges, p.num_partitions), (2, 3, 1));
    }

    #[test]
    fn btree_of_linked_edges() {
        let g: BTreeMap<u32, LinkedList<u32>> = [
            (1, [2, 3].into_iter().collect()),
            (2, LinkedList::new()),
            (3, [1].into_iter().collect()),
        ]
        .into_iter()
        .collect();
        let p = profile(&g);
        assert_eq!(p.addressing, AddressMode::Cursor);
        assert_eq!(p.edge_addressing, AddressMode::Cursor);
        assert_eq!(p.vertex_shape, ShapeKind::AssociativeEntry);
        assert_eq!(p.edge_shape, ShapeKind::Scalar);
        assert_eq!(p.num_edges, 3);
    }

    #[test]
    fn serializes_to_json() {
        let g: Vec<Vec<u8>> = vec![vec![1], vec![]];
        let json = serde_json::to_string(&profile(&g)).unwrap();
        let back: HostProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(back, profile(&g));
        assert!(json.contains("\"addressing\":\"Index\""));
    }
}
