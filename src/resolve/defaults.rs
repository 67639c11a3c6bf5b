//! Generic defaults: each primitive expressed through the store adapters, the
//! shape recognizers and *other resolved* primitives.
//!
//! These are what [`FreeOps`](super::FreeOps) falls back to. They are public so
//! an override can delegate to the default after doing its own work.

use crate::descriptor::VertexDescriptor;
use crate::shape::{EdgeShape, VertexShape};
use crate::store::{
    EdgeElemOf, EdgeLocOf, EdgeOf, EdgeStore, EdgeValueMutOf, EdgeValueOf, FindStrategy, VertexOf,
    VertexStore, VertexValueOf,
};
use crate::view::{EdgeView, VertexView};

use super::AdjacencyList;

/// The whole vertex store as a descriptor view.
#[inline]
pub fn vertices<G: VertexStore + ?Sized>(g: &G) -> VertexView<G::Loc<'_>> {
    VertexView::new(g.first_vertex(), g.past_vertex())
}

/// `u`'s edge store as a descriptor view.
#[inline]
pub fn edges<'g, G: VertexStore + ?Sized>(
    g: &'g G,
    u: &VertexOf<'g, G>,
) -> EdgeView<EdgeLocOf<'g, G>, G::Loc<'g>> {
    let store = g.vertex_at(u.raw()).edges();
    EdgeView::new(store.first_edge(), store.past_edge(), u.clone())
}

/// The descriptor's offset, or the key under its cursor.
///
/// # Panics
/// Panics if an offset does not fit the host's id type.
#[inline]
pub fn vertex_id<'g, G: VertexStore + ?Sized>(g: &'g G, u: &VertexOf<'g, G>) -> G::VertexId {
    g.id_at(u.raw())
}

/// Lookup through the store's [`FindStrategy`]; misses yield the end sentinel.
#[inline]
pub fn find_vertex<'g, G: VertexStore + ?Sized>(g: &'g G, id: &G::VertexId) -> VertexOf<'g, G> {
    let loc = <G::Lookup as FindStrategy<G>>::find(g, id);
    #[cfg(feature = "tracing")]
    if loc == g.past_vertex() {
        tracing::trace!(?id, "find_vertex: no such vertex");
    }
    VertexDescriptor::new(loc)
}

/// The edge element `e` names.
///
/// # Panics
/// Panics if `e` is an end sentinel.
#[inline]
pub fn edge_element<'g, G: VertexStore + ?Sized>(g: &'g G, e: &EdgeOf<'g, G>) -> &'g EdgeElemOf<G> {
    g.vertex_at(e.source().raw()).edges().edge_at(e.raw())
}

/// Id component of the edge element, per its shape.
#[inline]
pub fn target_id<'g, G: VertexStore + ?Sized>(g: &'g G, e: &EdgeOf<'g, G>) -> G::VertexId {
    edge_element(g, e).id_of()
}

/// `find_vertex(g, target_id(g, e))`.
#[inline]
pub fn target<'g, G: AdjacencyList + ?Sized>(g: &'g G, e: &EdgeOf<'g, G>) -> VertexOf<'g, G> {
    g.find_vertex(&g.target_id(e))
}

/// The store's own count.
#[inline]
pub fn num_vertices<G: VertexStore + ?Sized>(g: &G) -> usize {
    g.vertex_count()
}

/// Sum of `degree` over all vertices.
///
/// Directed accounting: an undirected host that lists each edge under both
/// endpoints reports twice the number of undirected edges.
pub fn num_edges<G: AdjacencyList + ?Sized>(g: &G) -> usize {
    let total: usize = g.vertices().map(|u| g.degree(&u)).sum();
    #[cfg(feature = "tracing")]
    tracing::trace!(total, "num_edges: summed vertex degrees");
    total
}

/// Length of `edges(g, u)`; counted by walking only when the view is unsized.
#[inline]
pub fn degree<'g, G: AdjacencyList + ?Sized>(g: &'g G, u: &VertexOf<'g, G>) -> usize {
    let view = g.edges(u);
    match view.size_hint() {
        (lo, Some(hi)) if lo == hi => lo,
        _ => view.count(),
    }
}

/// The vertex element's value, per its shape.
#[inline]
pub fn vertex_value<'g, G: VertexStore + ?Sized>(g: &'g G, u: &VertexOf<'g, G>) -> &'g VertexValueOf<G> {
    g.vertex_at(u.raw()).value()
}

/// Mutable form of [`vertex_value`].
#[inline]
pub fn vertex_value_mut<'a, 'g, G: VertexStore + ?Sized>(
    g: &'a mut G,
    u: &VertexOf<'g, G>,
) -> &'a mut VertexValueOf<G>
where
    G: 'g,
{
    g.vertex_at_mut(u.raw()).value_mut()
}

/// The edge element's property portion, per its shape.
#[inline]
pub fn edge_value<'g, G: VertexStore + ?Sized>(g: &'g G, e: &EdgeOf<'g, G>) -> EdgeValueOf<'g, G> {
    edge_element(g, e).property_of()
}

/// Mutable form of [`edge_value`]; writes land in the host's edge store.
#[inline]
pub fn edge_value_mut<'a, 'g, G: VertexStore + ?Sized>(
    g: &'a mut G,
    e: &EdgeOf<'g, G>,
) -> EdgeValueMutOf<'a, G>
where
    G: 'g,
{
    g.vertex_at_mut(e.source().raw())
        .edges_mut()
        .edge_at_mut(e.raw())
        .property_of_mut()
}

/// Linear scan of `edges(g, u)` for a target id, stopping at the first hit.
#[inline]
pub fn contains_edge<'g, G: AdjacencyList + ?Sized>(
    g: &'g G,
    u: &VertexOf<'g, G>,
    vid: &G::VertexId,
) -> bool {
    g.edges(u).any(|e| g.target_id(&e) == *vid)
}

/// First edge of `u` whose target id is `vid`, or the edge view's end sentinel.
pub fn find_vertex_edge<'g, G: AdjacencyList + ?Sized>(
    g: &'g G,
    u: &VertexOf<'g, G>,
    vid: &G::VertexId,
) -> EdgeOf<'g, G> {
    let mut view = g.edges(u);
    let end = view.end();
    match view.find(|e| g.target_id(e) == *vid) {
        Some(e) => e,
        None => {
            #[cfg(feature = "tracing")]
            tracing::trace!(?vid, "find_vertex_edge: no such edge");
            end
        }
    }
}

/// Every vertex lives in partition 0.
#[inline(always)]
pub fn partition_id<'g, G: VertexStore + ?Sized>(_g: &'g G, _u: &VertexOf<'g, G>) -> usize {
    0
}

/// A single partition.
#[inline(always)]
pub fn num_partitions<G: VertexStore + ?Sized>(_g: &G) -> usize {
    1
}
