//! Edge descriptors.

use super::location::Location;
use super::vertex::VertexDescriptor;

/// Names the slot an edge occupies in its source vertex's edge store.
///
/// Carries the edge location plus the descriptor of the vertex it came from.
/// Advancing moves only the edge location; the source never changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct EdgeDescriptor<EL, VL> {
    loc: EL,
    source: VertexDescriptor<VL>,
}

impl<EL, VL> EdgeDescriptor<EL, VL> {
    /// Builds a descriptor for the edge at `loc` owned by `source`.
    #[inline(always)]
    pub const fn new(loc: EL, source: VertexDescriptor<VL>) -> Self {
        Self { loc, source }
    }

    /// The edge's index or cursor within its edge store.
    #[inline(always)]
    pub const fn raw(&self) -> &EL {
        &self.loc
    }

    /// The vertex whose edge store holds this edge.
    #[inline(always)]
    pub const fn source(&self) -> &VertexDescriptor<VL> {
        &self.source
    }
}

impl<EL: Location, VL: Clone> EdgeDescriptor<EL, VL> {
    /// Pre-advance to the next edge of the same source.
    #[inline]
    pub fn advance(&mut self) -> &mut Self {
        self.loc.advance();
        self
    }

    /// Post-advance; returns the previous position.
    #[inline]
    pub fn post_advance(&mut self) -> Self {
        let prev = self.clone();
        self.loc.advance();
        prev
    }
}

impl<VL> EdgeDescriptor<usize, VL> {
    /// The edge's offset in its edge store.
    #[inline(always)]
    pub const fn index(&self) -> usize {
        self.loc
    }
}

/// An edge named by its source id and ordinal position among that source's
/// edges.
///
/// Borrows nothing, so it outlives the shared borrow a cursor descriptor holds
/// and can be handed to the id-addressed `_mut` accessors while the host is
/// borrowed mutably. Adding or removing edges of the source shifts ordinals.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct EdgeAddress<Id> {
    source: Id,
    ordinal: usize,
}

impl<Id> EdgeAddress<Id> {
    /// The `ordinal`-th edge of vertex `source`.
    #[inline(always)]
    pub const fn new(source: Id, ordinal: usize) -> Self {
        Self { source, ordinal }
    }

    /// Id of the vertex whose edge store holds the edge.
    #[inline(always)]
    pub const fn source(&self) -> &Id {
        &self.source
    }

    /// Position among the source's edges, counting from 0.
    #[inline(always)]
    pub const fn ordinal(&self) -> usize {
        self.ordinal
    }
}
