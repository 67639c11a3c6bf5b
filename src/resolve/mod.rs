//! The operation resolver.
//!
//! Every graph primitive resolves through three ranked tiers, fixed at compile
//! time with no runtime branching and no dynamic dispatch:
//!
//! 1. **Intrinsic override**: the host overrides the method on [`AdjacencyList`].
//! 2. **Registered free operation**: a free function wired into [`FreeOps`] for
//!    the host with [`register_ops!`](crate::register_ops).
//! 3. **Generic default**: the default bodies of [`FreeOps`], found in
//!    [`defaults`], built from other resolved primitives.
//!
//! The precedence is the trait layering itself: each `AdjacencyList` default
//! forwards to `FreeOps`, and each `FreeOps` default forwards to `defaults`. A
//! host overriding a method on `AdjacencyList` therefore shadows whatever it
//! registered, and anything it leaves alone falls through to the default.
//!
//! Two capabilities have no generic default and live in their own traits:
//! [`SourcedEdges`] (`source_id`, `source`) and [`GraphValue`]. Calling them on a
//! host that supplies neither tier does not build:
//!
//! ```compile_fail
//! use adjacent::graph_value;
//! let g: Vec<Vec<usize>> = vec![vec![1], vec![]];
//! let _ = graph_value(&g);
//! ```
//!
//! ```compile_fail
//! use adjacent::{edges, source_id, vertices};
//! let g: Vec<Vec<usize>> = vec![vec![1], vec![]];
//! let u = vertices(&g).begin();
//! let e = edges(&g, &u).begin();
//! let _ = source_id(&g, &e);
//! ```
//!
//! For those two traits an intrinsic impl and a registered impl are the same
//! trait impl, so a host can supply at most one of them.

use crate::store::{
    EdgeLocOf, EdgeOf, EdgeValueMutOf, EdgeValueOf, VertexOf, VertexStore, VertexValueOf,
};
use crate::view::{EdgeView, VertexView};

pub mod defaults;
mod macros;

/// The registered tier: free operations discoverable for a host.
///
/// Implemented by [`register_ops!`](crate::register_ops), which routes the named
/// operations to free functions. Every operation it does not name keeps the
/// generic default. The functions here take the graph as an explicit argument
/// so they never collide with [`AdjacencyList`] method syntax.
pub trait FreeOps: VertexStore {
    /// See [`AdjacencyList::vertices`].
    #[inline]
    fn vertices(g: &Self) -> VertexView<Self::Loc<'_>> {
        defaults::vertices(g)
    }

    /// See [`AdjacencyList::edges`].
    #[inline]
    fn edges<'g>(g: &'g Self, u: &VertexOf<'g, Self>) -> EdgeView<EdgeLocOf<'g, Self>, Self::Loc<'g>> {
        defaults::edges(g, u)
    }

    /// See [`AdjacencyList::vertex_id`].
    #[inline]
    fn vertex_id<'g>(g: &'g Self, u: &VertexOf<'g, Self>) -> Self::VertexId {
        defaults::vertex_id(g, u)
    }

    /// See [`AdjacencyList::find_vertex`].
    #[inline]
    fn find_vertex<'g>(g: &'g Self, id: &Self::VertexId) -> VertexOf<'g, Self> {
        defaults::find_vertex(g, id)
    }

    /// See [`AdjacencyList::target_id`].
    #[inline]
    fn target_id<'g>(g: &'g Self, e: &EdgeOf<'g, Self>) -> Self::VertexId {
        defaults::target_id(g, e)
    }

    /// See [`AdjacencyList::target`].
    #[inline]
    fn target<'g>(g: &'g Self, e: &EdgeOf<'g, Self>) -> VertexOf<'g, Self>
    where
        Self: AdjacencyList,
    {
        defaults::target(g, e)
    }

    /// See [`AdjacencyList::num_vertices`].
    #[inline]
    fn num_vertices(g: &Self) -> usize {
        defaults::num_vertices(g)
    }

    /// See [`AdjacencyList::num_edges`].
    #[inline]
    fn num_edges(g: &Self) -> usize
    where
        Self: AdjacencyList,
    {
        defaults::num_edges(g)
    }

    /// See [`AdjacencyList::degree`].
    #[inline]
    fn degree<'g>(g: &'g Self, u: &VertexOf<'g, Self>) -> usize
    where
        Self: AdjacencyList,
    {
        defaults::degree(g, u)
    }

    /// See [`AdjacencyList::vertex_value`].
    #[inline]
    fn vertex_value<'g>(g: &'g Self, u: &VertexOf<'g, Self>) -> &'g VertexValueOf<Self> {
        defaults::vertex_value(g, u)
    }

    /// See [`AdjacencyList::vertex_value_mut`].
    #[inline]
    fn vertex_value_mut<'a, 'g>(g: &'a mut Self, u: &VertexOf<'g, Self>) -> &'a mut VertexValueOf<Self>
    where
        Self: 'g,
    {
        defaults::vertex_value_mut(g, u)
    }

    /// See [`AdjacencyList::edge_value`].
    #[inline]
    fn edge_value<'g>(g: &'g Self, e: &EdgeOf<'g, Self>) -> EdgeValueOf<'g, Self> {
        defaults::edge_value(g, e)
    }

    /// See [`AdjacencyList::edge_value_mut`].
    #[inline]
    fn edge_value_mut<'a, 'g>(g: &'a mut Self, e: &EdgeOf<'g, Self>) -> EdgeValueMutOf<'a, Self>
    where
        Self: 'g,
    {
        defaults::edge_value_mut(g, e)
    }

    /// See [`AdjacencyList::contains_edge`].
    #[inline]
    fn contains_edge<'g>(g: &'g Self, u: &VertexOf<'g, Self>, vid: &Self::VertexId) -> bool
    where
        Self: AdjacencyList,
    {
        defaults::contains_edge(g, u, vid)
    }

    /// See [`AdjacencyList::find_vertex_edge`].
    #[inline]
    fn find_vertex_edge<'g>(g: &'g Self, u: &VertexOf<'g, Self>, vid: &Self::VertexId) -> EdgeOf<'g, Self>
    where
        Self: AdjacencyList,
    {
        defaults::find_vertex_edge(g, u, vid)
    }

    /// See [`AdjacencyList::partition_id`].
    #[inline]
    fn partition_id<'g>(g: &'g Self, u: &VertexOf<'g, Self>) -> usize {
        defaults::partition_id(g, u)
    }

    /// See [`AdjacencyList::num_partitions`].
    #[inline]
    fn num_partitions(g: &Self) -> usize {
        defaults::num_partitions(g)
    }
}

/// The resolved graph primitives, and the intrinsic-override tier.
///
/// Algorithms are written against this trait. Each method's default body
/// defers to [`FreeOps`]; override a method in the host's `impl` to supply it
/// intrinsically.
pub trait AdjacencyList: FreeOps {
    /// All vertices, in the host's iteration order.
    #[inline]
    fn vertices(&self) -> VertexView<Self::Loc<'_>> {
        <Self as FreeOps>::vertices(self)
    }

    /// The outgoing edges of `u`.
    #[inline]
    fn edges<'g>(&'g self, u: &VertexOf<'g, Self>) -> EdgeView<EdgeLocOf<'g, Self>, Self::Loc<'g>> {
        <Self as FreeOps>::edges(self, u)
    }

    /// Id of `u`: its offset, or its key.
    ///
    /// # Panics
    /// On index hosts, panics if `u`'s offset does not fit the id type, as in a
    /// `Vec<Vec<u8>>` holding more than 256 vertices. `vertices(g)` still yields
    /// such vertices; only naming them by id fails.
    #[inline]
    fn vertex_id<'g>(&'g self, u: &VertexOf<'g, Self>) -> Self::VertexId {
        <Self as FreeOps>::vertex_id(self, u)
    }

    /// Descriptor of the vertex with `id`; the vertex view's `end()` if absent.
    #[inline]
    fn find_vertex(&self, id: &Self::VertexId) -> VertexOf<'_, Self> {
        <Self as FreeOps>::find_vertex(self, id)
    }

    /// Id of the vertex `e` points at.
    #[inline]
    fn target_id<'g>(&'g self, e: &EdgeOf<'g, Self>) -> Self::VertexId {
        <Self as FreeOps>::target_id(self, e)
    }

    /// Descriptor of the vertex `e` points at.
    #[inline]
    fn target<'g>(&'g self, e: &EdgeOf<'g, Self>) -> VertexOf<'g, Self> {
        <Self as FreeOps>::target(self, e)
    }

    /// Number of vertices.
    #[inline]
    fn num_vertices(&self) -> usize {
        <Self as FreeOps>::num_vertices(self)
    }

    /// Number of edges, counted once per appearance in an edge store.
    #[inline]
    fn num_edges(&self) -> usize {
        <Self as FreeOps>::num_edges(self)
    }

    /// Out-degree of `u`.
    #[inline]
    fn degree<'g>(&'g self, u: &VertexOf<'g, Self>) -> usize {
        <Self as FreeOps>::degree(self, u)
    }

    /// The value stored for `u`.
    #[inline]
    fn vertex_value<'g>(&'g self, u: &VertexOf<'g, Self>) -> &'g VertexValueOf<Self> {
        <Self as FreeOps>::vertex_value(self, u)
    }

    /// The value stored for `u`, mutably.
    #[inline]
    fn vertex_value_mut<'a, 'g>(&'a mut self, u: &VertexOf<'g, Self>) -> &'a mut VertexValueOf<Self>
    where
        Self: 'g,
    {
        <Self as FreeOps>::vertex_value_mut(self, u)
    }

    /// The property portion of the edge `e` names.
    #[inline]
    fn edge_value<'g>(&'g self, e: &EdgeOf<'g, Self>) -> EdgeValueOf<'g, Self> {
        <Self as FreeOps>::edge_value(self, e)
    }

    /// The property portion of `e`, mutably; writes land in the host.
    #[inline]
    fn edge_value_mut<'a, 'g>(&'a mut self, e: &EdgeOf<'g, Self>) -> EdgeValueMutOf<'a, Self>
    where
        Self: 'g,
    {
        <Self as FreeOps>::edge_value_mut(self, e)
    }

    /// Whether `u` has an edge whose target id is `vid`.
    #[inline]
    fn contains_edge<'g>(&'g self, u: &VertexOf<'g, Self>, vid: &Self::VertexId) -> bool {
        <Self as FreeOps>::contains_edge(self, u, vid)
    }

    /// First edge of `u` targeting `vid`, or `edges(u).end()`.
    #[inline]
    fn find_vertex_edge<'g>(&'g self, u: &VertexOf<'g, Self>, vid: &Self::VertexId) -> EdgeOf<'g, Self> {
        <Self as FreeOps>::find_vertex_edge(self, u, vid)
    }

    /// Partition holding `u`.
    #[inline]
    fn partition_id<'g>(&'g self, u: &VertexOf<'g, Self>) -> usize {
        <Self as FreeOps>::partition_id(self, u)
    }

    /// Number of partitions.
    #[inline]
    fn num_partitions(&self) -> usize {
        <Self as FreeOps>::num_partitions(self)
    }
}

/// Edges that record the vertex they leave from.
///
/// There is no generic default: target-only adjacency cannot reconstruct a
/// source, so hosts implement this directly or through
/// [`register_ops!`](crate::register_ops).
pub trait SourcedEdges: AdjacencyList {
    /// Id of the vertex `e` leaves from.
    fn source_id<'g>(&'g self, e: &EdgeOf<'g, Self>) -> Self::VertexId;

    /// Descriptor of the vertex `e` leaves from.
    fn source<'g>(&'g self, e: &EdgeOf<'g, Self>) -> VertexOf<'g, Self>;
}

/// A value attached to the graph as a whole. No generic default.
pub trait GraphValue {
    /// The graph-level value.
    type Value: ?Sized;

    /// Borrows the graph value.
    fn graph_value(&self) -> &Self::Value;

    /// Mutably borrows the graph value.
    fn graph_value_mut(&mut self) -> &mut Self::Value;
}

impl<C> FreeOps for Vec<C> where Self: VertexStore {}
impl<C> AdjacencyList for Vec<C> where Self: VertexStore {}

impl<C> FreeOps for std::collections::VecDeque<C> where Self: VertexStore {}
impl<C> AdjacencyList for std::collections::VecDeque<C> where Self: VertexStore {}

impl<K, C> FreeOps for std::collections::BTreeMap<K, C> where Self: VertexStore {}
impl<K, C> AdjacencyList for std::collections::BTreeMap<K, C> where Self: VertexStore {}

impl<K, C, S> FreeOps for std::collections::HashMap<K, C, S> where Self: VertexStore {}
impl<K, C, S> AdjacencyList for std::collections::HashMap<K, C, S> where Self: VertexStore {}

// Entry points, callable as `adjacent::degree(&g, &u)` in the free-function style.

/// Resolved `vertices`.
#[inline(always)]
pub fn vertices<G: AdjacencyList>(g: &G) -> VertexView<G::Loc<'_>> {
    g.vertices()
}

/// Resolved `edges`.
#[inline(always)]
pub fn edges<'g, G: AdjacencyList>(g: &'g G, u: &VertexOf<'g, G>) -> EdgeView<EdgeLocOf<'g, G>, G::Loc<'g>> {
    g.edges(u)
}

/// Resolved `vertex_id`.
///
/// # Panics
/// On index hosts, panics if `u`'s offset does not fit the id type, as in a
/// `Vec<Vec<u8>>` holding more than 256 vertices. `vertices(g)` still yields
/// such vertices; only naming them by id fails.
#[inline(always)]
pub fn vertex_id<'g, G: AdjacencyList>(g: &'g G, u: &VertexOf<'g, G>) -> G::VertexId {
    g.vertex_id(u)
}

/// Resolved `find_vertex`.
#[inline(always)]
pub fn find_vertex<'g, G: AdjacencyList>(g: &'g G, id: &G::VertexId) -> VertexOf<'g, G> {
    g.find_vertex(id)
}

/// Resolved `target_id`.
#[inline(always)]
pub fn target_id<'g, G: AdjacencyList>(g: &'g G, e: &EdgeOf<'g, G>) -> G::VertexId {
    g.target_id(e)
}

/// Resolved `target`.
#[inline(always)]
pub fn target<'g, G: AdjacencyList>(g: &'g G, e: &EdgeOf<'g, G>) -> VertexOf<'g, G> {
    g.target(e)
}

/// Resolved `source_id`.
#[inline(always)]
pub fn source_id<'g, G: SourcedEdges>(g: &'g G, e: &EdgeOf<'g, G>) -> G::VertexId {
    g.source_id(e)
}

/// Resolved `source`.
#[inline(always)]
pub fn source<'g, G: SourcedEdges>(g: &'g G, e: &EdgeOf<'g, G>) -> VertexOf<'g, G> {
    g.source(e)
}

/// Resolved `num_vertices`.
#[inline(always)]
pub fn num_vertices<G: AdjacencyList>(g: &G) -> usize {
    g.num_vertices()
}

/// Resolved `num_edges`.
#[inline(always)]
pub fn num_edges<G: AdjacencyList>(g: &G) -> usize {
    g.num_edges()
}

/// Resolved `degree`.
#[inline(always)]
pub fn degree<'g, G: AdjacencyList>(g: &'g G, u: &VertexOf<'g, G>) -> usize {
    g.degree(u)
}

/// `degree` of the vertex with `id`; 0 when there is no such vertex.
pub fn degree_of<G: AdjacencyList>(g: &G, id: &G::VertexId) -> usize {
    let u = g.find_vertex(id);
    if u == g.vertices().end() {
        return 0;
    }
    g.degree(&u)
}

/// Resolved `contains_edge`.
#[inline(always)]
pub fn contains_edge<'g, G: AdjacencyList>(g: &'g G, u: &VertexOf<'g, G>, vid: &G::VertexId) -> bool {
    g.contains_edge(u, vid)
}

/// `contains_edge` addressed by ids; `false` when `uid` names no vertex.
pub fn contains_edge_by_id<G: AdjacencyList>(g: &G, uid: &G::VertexId, vid: &G::VertexId) -> bool {
    let u = g.find_vertex(uid);
    if u == g.vertices().end() {
        return false;
    }
    g.contains_edge(&u, vid)
}

/// Resolved `find_vertex_edge`.
#[inline(always)]
pub fn find_vertex_edge<'g, G: AdjacencyList>(
    g: &'g G,
    u: &VertexOf<'g, G>,
    vid: &G::VertexId,
) -> EdgeOf<'g, G> {
    g.find_vertex_edge(u, vid)
}

/// `find_vertex_edge` addressed by ids.
///
/// Returns `None` when `uid` names no vertex (there is no edge view to take
/// a sentinel from); otherwise the edge or `edges(u).end()`.
pub fn find_vertex_edge_by_id<'g, G: AdjacencyList>(
    g: &'g G,
    uid: &G::VertexId,
    vid: &G::VertexId,
) -> Option<EdgeOf<'g, G>> {
    let u = g.find_vertex(uid);
    if u == g.vertices().end() {
        return None;
    }
    Some(g.find_vertex_edge(&u, vid))
}

/// Resolved `partition_id`.
#[inline(always)]
pub fn partition_id<'g, G: AdjacencyList>(g: &'g G, u: &VertexOf<'g, G>) -> usize {
    g.partition_id(u)
}

/// Resolved `num_partitions`.
#[inline(always)]
pub fn num_partitions<G: AdjacencyList>(g: &G) -> usize {
    g.num_partitions()
}
