//! Value accessors.
//!
//! References returned here point into the host. The `_mut` forms write
//! through: after `*edge_value_mut(&mut g, &e) = w`, the host's own edge
//! element holds `w`.
//!
//! Edge values follow the element's shape: a pair yields its property, a
//! single-component tuple yields its id, and wider tuples yield a tuple of
//! references so each component can be read or written on its own.
//!
//! Cursor descriptors borrow the host, so on `BTreeMap`, `HashMap` or
//! `LinkedList` hosts they cannot be passed to a `_mut` accessor of the same
//! host. Those hosts write through ids instead:
//!
//! ```
//! use std::collections::BTreeMap;
//! use adjacent::{edge_address, edge_value_mut_at, edges, find_vertex, vertex_value_mut_by_id};
//!
//! let mut g: BTreeMap<u32, Vec<(u32, i32)>> = [(1, vec![(2, 0)]), (2, vec![])].into_iter().collect();
//! let at = edge_address(&g, &edges(&g, &find_vertex(&g, &1)).begin());
//! if let Some(w) = edge_value_mut_at(&mut g, &at) {
//!     *w = 9;
//! }
//! assert_eq!(g[&1], vec![(2, 9)]);
//!
//! if let Some(edges) = vertex_value_mut_by_id(&mut g, &2) {
//!     edges.push((1, -1));
//! }
//! assert_eq!(g[&2], vec![(1, -1)]);
//! ```

use crate::descriptor::EdgeAddress;
use crate::resolve::{defaults, AdjacencyList, GraphValue};
use crate::shape::{EdgeShape, VertexShape};
use crate::store::{
    EdgeElemOf, EdgeOf, EdgeStore, EdgeValueMutOf, EdgeValueOf, FindStrategy, VertexOf, VertexStore, VertexValueOf,
};

/// Resolved `vertex_value`.
#[inline(always)]
pub fn vertex_value<'g, G: AdjacencyList>(g: &'g G, u: &VertexOf<'g, G>) -> &'g VertexValueOf<G> {
    g.vertex_value(u)
}

/// Resolved `vertex_value_mut`.
///
/// # Panics
/// Panics if `u` is an end sentinel.
#[inline(always)]
pub fn vertex_value_mut<'a, 'g, G: AdjacencyList + 'g>(
    g: &'a mut G,
    u: &VertexOf<'g, G>,
) -> &'a mut VertexValueOf<G> {
    g.vertex_value_mut(u)
}

/// Resolved `edge_value`.
#[inline(always)]
pub fn edge_value<'g, G: AdjacencyList>(g: &'g G, e: &EdgeOf<'g, G>) -> EdgeValueOf<'g, G> {
    g.edge_value(e)
}

/// Resolved `edge_value_mut`.
///
/// # Panics
/// Panics if `e` is an end sentinel.
#[inline(always)]
pub fn edge_value_mut<'a, 'g, G: AdjacencyList + 'g>(g: &'a mut G, e: &EdgeOf<'g, G>) -> EdgeValueMutOf<'a, G> {
    g.edge_value_mut(e)
}

/// The value of the vertex with `id`, mutably; `None` if there is no such vertex.
///
/// Takes no descriptor, so it works on cursor hosts while nothing else borrows
/// them.
#[inline]
pub fn vertex_value_mut_by_id<'a, G: VertexStore>(
    g: &'a mut G,
    id: &G::VertexId,
) -> Option<&'a mut VertexValueOf<G>> {
    <G::Lookup as FindStrategy<G>>::find_mut(g, id).map(VertexShape::value_mut)
}

/// The borrow-free address of `e`: its source id and its ordinal among the
/// source's edges. An end sentinel gets the source's degree.
pub fn edge_address<'g, G: AdjacencyList>(g: &'g G, e: &EdgeOf<'g, G>) -> EdgeAddress<G::VertexId> {
    let ordinal = g.edges(e.source()).take_while(|x| x != e).count();
    EdgeAddress::new(g.vertex_id(e.source()), ordinal)
}

/// The value of the edge at `at`, mutably; `None` if the source vertex or the
/// ordinal does not exist.
pub fn edge_value_mut_at<'a, G: VertexStore>(
    g: &'a mut G,
    at: &EdgeAddress<G::VertexId>,
) -> Option<EdgeValueMutOf<'a, G>> {
    let source = <G::Lookup as FindStrategy<G>>::find_mut(g, at.source())?;
    let edge = source.edges_mut().nth_edge_mut(at.ordinal())?;
    Some(edge.property_of_mut())
}

/// The whole edge element `e` names, id included.
#[inline(always)]
pub fn edge_element<'g, G: VertexStore>(g: &'g G, e: &EdgeOf<'g, G>) -> &'g EdgeElemOf<G> {
    defaults::edge_element(g, e)
}

/// Resolved `graph_value`.
#[inline(always)]
pub fn graph_value<G: GraphValue + ?Sized>(g: &G) -> &G::Value {
    g.graph_value()
}

/// Resolved `graph_value_mut`.
#[inline(always)]
pub fn graph_value_mut<G: GraphValue + ?Sized>(g: &mut G) -> &mut G::Value {
    g.graph_value_mut()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolve::{edges, find_vertex, vertices};
    use std::collections::{BTreeMap, LinkedList};

    #[test]
    fn pair_vertex_value_writes_through() {
        let mut g: Vec<(Vec<usize>, &str)> = vec![(vec![1], "a"), (vec![], "b")];
        let u = vertices(&g).nth(1).unwrap();
        *vertex_value_mut(&mut g, &u) = "renamed";
        assert_eq!(g[1].1, "renamed");
        assert_eq!(*vertex_value(&g, &u), "renamed");
    }

    #[test]
    fn pair_edge_value_writes_through() {
        let mut g: Vec<Vec<(usize, i32)>> = vec![vec![(1, 10), (0, 20)], vec![]];
        let u = vertices(&g).begin();
        let e = edges(&g, &u).nth(1).unwrap();
        assert_eq!(*edge_value(&g, &e), 20);
        *edge_value_mut(&mut g, &e) += 5;
        assert_eq!(g[0][1], (0, 25));
        assert_eq!(edge_element(&g, &e), &(0, 25));
    }

    #[test]
    fn keyed_edge_values_read_in_place() {
        let g: BTreeMap<u8, Vec<(u8, char)>> = [(1, vec![(2, 'x')]), (2, vec![])].into_iter().collect();
        let u = vertices(&g).begin();
        let e = edges(&g, &u).begin();
        assert_eq!(*edge_value(&g, &e), 'x');
    }

    #[test]
    fn keyed_edges_write_through_their_address() {
        let mut g: BTreeMap<u32, Vec<(u32, i32)>> =
            [(1, vec![(2, 5), (3, 6)]), (2, vec![]), (3, vec![])].into_iter().collect();
        let at = {
            let u = find_vertex(&g, &1);
            let e = edges(&g, &u).nth(1).unwrap();
            edge_address(&g, &e)
        };
        assert_eq!(at, EdgeAddress::new(1, 1));
        *edge_value_mut_at(&mut g, &at).unwrap() = 9;
        assert_eq!(g[&1], vec![(2, 5), (3, 9)]);

        assert!(edge_value_mut_at(&mut g, &EdgeAddress::new(1, 2)).is_none());
        assert!(edge_value_mut_at(&mut g, &EdgeAddress::new(4, 0)).is_none());
    }

    #[test]
    fn keyed_vertex_values_write_by_id() {
        let mut g: BTreeMap<&str, (LinkedList<&str>, u8)> =
            [("a", (LinkedList::new(), 0)), ("b", (LinkedList::new(), 1))].into_iter().collect();
        *vertex_value_mut_by_id(&mut g, &"b").unwrap() += 4;
        assert_eq!(g["b"].1, 5);
        assert!(vertex_value_mut_by_id(&mut g, &"c").is_none());
    }

    #[test]
    fn end_sentinel_addresses_past_the_last_edge() {
        let g: Vec<LinkedList<usize>> = vec![[1usize, 0].into_iter().collect(), LinkedList::new()];
        let u = find_vertex(&g, &0);
        let at = edge_address(&g, &edges(&g, &u).end());
        assert_eq!(at.ordinal(), 2);
        assert_eq!(*at.source(), 0);
    }
}
