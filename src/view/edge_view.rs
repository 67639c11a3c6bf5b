//! Lazy edge-descriptor sequences over one vertex's edge store.

use core::iter::FusedIterator;

use crate::descriptor::{EdgeDescriptor, Location, SizedLocation, VertexDescriptor};

/// A forward-only view yielding an [`EdgeDescriptor`] per edge of one vertex.
///
/// Every yielded descriptor embeds a copy of the source vertex descriptor.
#[derive(Clone, Debug)]
pub struct EdgeView<EL, VL> {
    cursor: EL,
    past: EL,
    source: VertexDescriptor<VL>,
}

impl<EL: Location, VL: Clone> EdgeView<EL, VL> {
    /// A view over the edge slots `[first, past)` of `source`.
    #[inline(always)]
    pub fn new(first: EL, past: EL, source: VertexDescriptor<VL>) -> Self {
        Self {
            cursor: first,
            past,
            source,
        }
    }

    /// Descriptor of the next edge to be yielded.
    #[inline]
    pub fn begin(&self) -> EdgeDescriptor<EL, VL> {
        EdgeDescriptor::new(self.cursor.clone(), self.source.clone())
    }

    /// The end sentinel for this vertex's edges.
    #[inline]
    pub fn end(&self) -> EdgeDescriptor<EL, VL> {
        EdgeDescriptor::new(self.past.clone(), self.source.clone())
    }

    /// The vertex these edges leave from.
    #[inline(always)]
    pub fn source(&self) -> &VertexDescriptor<VL> {
        &self.source
    }
}

impl<EL: SizedLocation, VL: Clone> EdgeView<EL, VL> {
    /// Number of edges left.
    #[inline]
    pub fn size(&self) -> usize {
        self.cursor.distance(&self.past)
    }

    /// Returns `true` when no edges are left.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }
}

impl<EL: Location, VL: Clone> Iterator for EdgeView<EL, VL> {
    type Item = EdgeDescriptor<EL, VL>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor == self.past {
            return None;
        }
        let out = EdgeDescriptor::new(self.cursor.clone(), self.source.clone());
        self.cursor.advance();
        Some(out)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.cursor.steps_hint(&self.past)
    }
}

impl<EL: SizedLocation, VL: Clone> ExactSizeIterator for EdgeView<EL, VL> {}

impl<EL: Location, VL: Clone> FusedIterator for EdgeView<EL, VL> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::Cursor;
    use std::collections::LinkedList;

    #[test]
    fn index_edges_carry_source() {
        let view = EdgeView::new(0usize, 2, VertexDescriptor::new(7usize));
        assert_eq!(view.size(), 2);
        let edges: Vec<_> = view.collect();
        assert_eq!(edges.len(), 2);
        assert!(edges.iter().all(|e| e.source().index() == 7));
        assert_eq!(edges[1].index(), 1);
    }

    #[test]
    fn linked_edges_step_by_cursor() {
        let list: LinkedList<u16> = [3, 1, 4].into_iter().collect();
        let view = EdgeView::new(Cursor::new(list.iter()), Cursor::end(), VertexDescriptor::new(0usize));
        assert_eq!(view.size(), 3);
        let targets: Vec<u16> = view.map(|e| **e.raw().pointee()).collect();
        assert_eq!(targets, vec![3, 1, 4]);
    }

    #[test]
    fn cursor_sub_range_stops_at_its_bound() {
        let list: LinkedList<u16> = [1, 2, 3, 4].into_iter().collect();
        let first = Cursor::new(list.iter());
        let mut past = first.clone();
        past.advance();
        past.advance();
        let view = EdgeView::new(first, past, VertexDescriptor::new(0usize));
        assert_eq!(view.size(), 2);
        assert_eq!(view.len(), 2);
        assert_eq!(view.size_hint(), (2, Some(2)));
        let targets: Vec<u16> = view.map(|e| **e.raw().pointee()).collect();
        assert_eq!(targets, vec![1, 2]);
    }
}
