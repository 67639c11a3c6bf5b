//! Host container adapters: how an unmodified container is read as a graph.
//!
//! A host graph is a *vertex store* whose elements are vertex elements (see
//! [`VertexShape`]); each vertex element owns an *edge store*. The built-in
//! adapters cover:
//!
//! | Container | Role | Addressing |
//! |-----------|------|------------|
//! | `Vec<C>`, `VecDeque<C>` | vertex store | index (`usize`) |
//! | `BTreeMap<K, C>`, `HashMap<K, C, S>` | vertex store | cursor, keyed |
//! | `Vec<E>`, `VecDeque<E>` | edge store | index (`usize`) |
//! | `LinkedList<E>` | edge store | cursor |
//!
//! Nothing here needs the host to implement anything: the traits are
//! implemented on the standard containers themselves. Your own containers
//! implement [`VertexStore`] (plus [`IndexedStore`] or [`KeyedStore`]) and
//! [`EdgeStore`] the same way.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::descriptor::{EdgeDescriptor, Location, VertexDescriptor};
use crate::shape::{EdgeShape, ShapeKind, VertexShape};

mod edges;
mod indexed;
mod keyed;

pub use keyed::CountedRange;

/// How a store names its slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AddressMode {
    /// Integer offsets.
    Index,
    /// Opaque cursors over the store's iterator.
    Cursor,
}

/// A container holding one vertex's outgoing edges.
pub trait EdgeStore {
    /// Id type the edges point at.
    type Target: Clone + PartialEq + fmt::Debug;

    /// The stored edge element.
    type Edge: EdgeShape<Id = Self::Target>;

    /// Location of one edge slot.
    type Loc<'g>: Location
    where
        Self: 'g;

    /// Addressing of the edge slots.
    const MODE: AddressMode;

    /// Location of the first edge.
    fn first_edge(&self) -> Self::Loc<'_>;

    /// Past-the-end location.
    fn past_edge(&self) -> Self::Loc<'_>;

    /// Number of stored edges.
    fn edge_count(&self) -> usize;

    /// The edge at `loc`.
    ///
    /// # Panics
    /// Panics if `loc` is past the end.
    fn edge_at<'g>(&'g self, loc: &Self::Loc<'g>) -> &'g Self::Edge;

    /// The edge at `loc`, mutably.
    ///
    /// # Panics
    /// Panics if `loc` is past the end.
    fn edge_at_mut<'g>(&mut self, loc: &Self::Loc<'g>) -> &mut Self::Edge
    where
        Self: 'g;

    /// The edge at ordinal position `n`, mutably, or `None` past the end.
    ///
    /// Needs no location, so it works while nothing borrows the store.
    fn nth_edge_mut(&mut self, n: usize) -> Option<&mut Self::Edge>;
}

/// A container of vertex elements, read as the vertex set of a graph.
pub trait VertexStore {
    /// The stored vertex element.
    type Vertex: VertexShape<Target = Self::VertexId>;

    /// Vertex id type: the offset type for index stores, the key for keyed stores.
    type VertexId: Clone + PartialEq + fmt::Debug;

    /// Location of one vertex slot.
    type Loc<'g>: Location
    where
        Self: 'g;

    /// How `find_vertex` turns an id into a location when not overridden.
    type Lookup: FindStrategy<Self>;

    /// Classification of the store's top-level elements.
    const SHAPE: ShapeKind;

    /// Location of the first vertex.
    fn first_vertex(&self) -> Self::Loc<'_>;

    /// Past-the-end location.
    fn past_vertex(&self) -> Self::Loc<'_>;

    /// Number of vertices.
    fn vertex_count(&self) -> usize;

    /// Id of the vertex at `loc`.
    ///
    /// # Panics
    /// Panics if `loc` is past the end.
    fn id_at<'g>(&'g self, loc: &Self::Loc<'g>) -> Self::VertexId;

    /// The vertex element at `loc`.
    ///
    /// # Panics
    /// Panics if `loc` is past the end.
    fn vertex_at<'g>(&'g self, loc: &Self::Loc<'g>) -> &'g Self::Vertex;

    /// The vertex element at `loc`, mutably.
    ///
    /// # Panics
    /// Panics if `loc` is past the end.
    fn vertex_at_mut<'g>(&mut self, loc: &Self::Loc<'g>) -> &mut Self::Vertex
    where
        Self: 'g;
}

/// A vertex store addressable by integer offset.
pub trait IndexedStore: VertexStore {
    /// Offset named by `id`, if it is representable as one.
    fn offset_of(id: &Self::VertexId) -> Option<usize>;

    /// Location of the vertex at `offset`.
    fn loc_at(&self, offset: usize) -> Self::Loc<'_>;

    /// The vertex element at `offset`, mutably, or `None` out of range.
    fn vertex_by_offset_mut(&mut self, offset: usize) -> Option<&mut Self::Vertex>;
}

/// A vertex store that can seek a cursor to a key.
pub trait KeyedStore: VertexStore {
    /// Cursor positioned on `key`, or the end sentinel if absent.
    fn seek<'g>(&'g self, key: &Self::VertexId) -> Self::Loc<'g>;

    /// The vertex element stored under `key`, mutably.
    fn vertex_by_key_mut(&mut self, key: &Self::VertexId) -> Option<&mut Self::Vertex>;
}

/// The generic-default strategy behind `find_vertex`.
///
/// Selected per store through [`VertexStore::Lookup`]. There is deliberately no
/// strategy for cursor stores without a key: such a store cannot pick one, so
/// it must override `find_vertex` or fail to build.
pub trait FindStrategy<G: VertexStore + ?Sized> {
    /// Addressing mode this strategy serves.
    const MODE: AddressMode;

    /// Location of the vertex with `id`, or the past-the-end location.
    fn find<'g>(g: &'g G, id: &G::VertexId) -> G::Loc<'g>;

    /// The vertex element with `id`, mutably, or `None` if there is none.
    fn find_mut<'a>(g: &'a mut G, id: &G::VertexId) -> Option<&'a mut G::Vertex>;
}

/// Positional lookup: `find_vertex(g, id)` is offset `id` when in range.
#[derive(Debug, Clone, Copy)]
pub enum ByOffset {}

/// Keyed lookup through [`KeyedStore::seek`].
#[derive(Debug, Clone, Copy)]
pub enum ByKey {}

impl<G: IndexedStore + ?Sized> FindStrategy<G> for ByOffset {
    const MODE: AddressMode = AddressMode::Index;

    #[inline]
    fn find<'g>(g: &'g G, id: &G::VertexId) -> G::Loc<'g> {
        match G::offset_of(id) {
            Some(offset) if offset < g.vertex_count() => g.loc_at(offset),
            _ => g.past_vertex(),
        }
    }

    #[inline]
    fn find_mut<'a>(g: &'a mut G, id: &G::VertexId) -> Option<&'a mut G::Vertex> {
        g.vertex_by_offset_mut(G::offset_of(id)?)
    }
}

impl<G: KeyedStore + ?Sized> FindStrategy<G> for ByKey {
    const MODE: AddressMode = AddressMode::Cursor;

    #[inline]
    fn find<'g>(g: &'g G, id: &G::VertexId) -> G::Loc<'g> {
        g.seek(id)
    }

    #[inline]
    fn find_mut<'a>(g: &'a mut G, id: &G::VertexId) -> Option<&'a mut G::Vertex> {
        g.vertex_by_key_mut(id)
    }
}

/// Vertex descriptor type of graph `G`.
pub type VertexOf<'g, G> = VertexDescriptor<<G as VertexStore>::Loc<'g>>;

/// Edge store type of graph `G`'s vertices.
pub type EdgeStoreOf<G> = <<G as VertexStore>::Vertex as VertexShape>::Edges;

/// Edge location type of graph `G`.
pub type EdgeLocOf<'g, G> = <EdgeStoreOf<G> as EdgeStore>::Loc<'g>;

/// Edge descriptor type of graph `G`.
pub type EdgeOf<'g, G> = EdgeDescriptor<EdgeLocOf<'g, G>, <G as VertexStore>::Loc<'g>>;

/// Edge element type of graph `G`.
pub type EdgeElemOf<G> = <EdgeStoreOf<G> as EdgeStore>::Edge;

/// Vertex value type of graph `G`.
pub type VertexValueOf<G> = <<G as VertexStore>::Vertex as VertexShape>::Value;

/// Shared edge property type of graph `G`.
pub type EdgeValueOf<'g, G> = <EdgeElemOf<G> as EdgeShape>::Property<'g>;

/// Mutable edge property type of graph `G`.
pub type EdgeValueMutOf<'g, G> = <EdgeElemOf<G> as EdgeShape>::PropertyMut<'g>;
