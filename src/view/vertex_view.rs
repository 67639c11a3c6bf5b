//! Lazy vertex-descriptor sequences.

use core::iter::FusedIterator;

use crate::descriptor::{Location, SizedLocation, VertexDescriptor};

/// A forward-only view yielding one [`VertexDescriptor`] per vertex slot.
///
/// The view holds two locations (the next slot and the end sentinel) and
/// synthesizes each descriptor while stepping; it never touches the host's
/// contents, and visits slots in the host's own iteration order.
#[derive(Clone, Debug)]
pub struct VertexView<L> {
    cursor: L,
    past: L,
}

impl<L: Location> VertexView<L> {
    /// A view over `[first, past)`.
    #[inline(always)]
    pub fn new(first: L, past: L) -> Self {
        Self {
            cursor: first,
            past,
        }
    }

    /// Descriptor of the next vertex to be yielded.
    #[inline]
    pub fn begin(&self) -> VertexDescriptor<L> {
        VertexDescriptor::new(self.cursor.clone())
    }

    /// The end sentinel; lookups that fail return a descriptor equal to this.
    #[inline]
    pub fn end(&self) -> VertexDescriptor<L> {
        VertexDescriptor::new(self.past.clone())
    }
}

impl<L: SizedLocation> VertexView<L> {
    /// Number of descriptors left.
    #[inline]
    pub fn size(&self) -> usize {
        self.cursor.distance(&self.past)
    }

    /// Returns `true` when nothing is left.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }
}

impl<L: Location> Iterator for VertexView<L> {
    type Item = VertexDescriptor<L>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor == self.past {
            return None;
        }
        let out = VertexDescriptor::new(self.cursor.clone());
        self.cursor.advance();
        Some(out)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.cursor.steps_hint(&self.past)
    }
}

impl<L: SizedLocation> ExactSizeIterator for VertexView<L> {}

impl<L: Location> FusedIterator for VertexView<L> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::{Cursor, DescriptorId};
    use std::collections::BTreeMap;

    #[test]
    fn index_view_is_sized_and_ordered() {
        let view = VertexView::new(0usize, 3);
        assert_eq!(view.size(), 3);
        assert_eq!(view.begin().index(), 0);
        assert_eq!(view.end().index(), 3);
        let ids: Vec<usize> = view.map(|v| v.id()).collect();
        assert_eq!(ids, vec![0, 1, 2]);
    }

    #[test]
    fn empty_view_yields_nothing() {
        let mut view = VertexView::new(4usize, 4);
        assert!(view.is_empty());
        assert!(view.next().is_none());
        assert!(view.next().is_none());
    }

    #[test]
    fn cursor_view_follows_key_order() {
        let map: BTreeMap<u32, ()> = [(30, ()), (10, ()), (20, ())].into_iter().collect();
        let view = VertexView::new(Cursor::new(map.iter()), Cursor::end());
        assert_eq!(view.size(), 3);
        let keys: Vec<u32> = view.map(|v| v.id()).collect();
        assert_eq!(keys, vec![10, 20, 30]);
    }
}
