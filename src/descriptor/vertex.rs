//! Vertex descriptors.

use super::location::{Cursor, Location};
use crate::shape::entry;

/// Names the slot a vertex occupies in its host container.
///
/// The payload is either a `usize` offset or a [`Cursor`]; the descriptor owns
/// nothing and is only meaningful against the container that produced it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct VertexDescriptor<L> {
    loc: L,
}

impl<L> VertexDescriptor<L> {
    /// Wraps a raw location.
    #[inline(always)]
    pub const fn new(loc: L) -> Self {
        Self { loc }
    }

    /// The underlying index or cursor.
    #[inline(always)]
    pub const fn raw(&self) -> &L {
        &self.loc
    }

    /// Unwraps the underlying index or cursor.
    #[inline(always)]
    pub fn into_raw(self) -> L {
        self.loc
    }
}

impl<L: Location> VertexDescriptor<L> {
    /// Pre-advance: moves to the next vertex slot and returns the moved descriptor.
    #[inline]
    pub fn advance(&mut self) -> &mut Self {
        self.loc.advance();
        self
    }

    /// Post-advance: moves to the next vertex slot and returns the previous position.
    #[inline]
    pub fn post_advance(&mut self) -> Self {
        let prev = self.clone();
        self.loc.advance();
        prev
    }
}

impl VertexDescriptor<usize> {
    /// The vertex's offset in its store.
    #[inline(always)]
    pub const fn index(&self) -> usize {
        self.loc
    }
}

/// The id a descriptor carries on its own, without consulting the graph.
pub trait DescriptorId {
    /// Id type: the offset for index stores, the key for keyed stores.
    type Id;

    /// Returns the id.
    fn id(&self) -> Self::Id;
}

impl DescriptorId for VertexDescriptor<usize> {
    type Id = usize;

    #[inline(always)]
    fn id(&self) -> usize {
        self.loc
    }
}

impl<'g, I, K, V> DescriptorId for VertexDescriptor<Cursor<I>>
where
    I: Iterator<Item = (&'g K, &'g V)>,
    K: Clone + 'g,
    V: 'g,
{
    type Id = K;

    /// Clones the key out of the entry under the cursor.
    ///
    /// # Panics
    /// Panics on the end sentinel.
    #[inline]
    fn id(&self) -> K {
        entry::key_of(self.loc.pointee()).clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn index_descriptor_advances() {
        let mut v = VertexDescriptor::new(0usize);
        let before = v.post_advance();
        assert_eq!(before.id(), 0);
        assert_eq!(v.id(), 1);
        v.advance().advance();
        assert_eq!(v.index(), 3);
        assert_eq!(*v.raw(), 3);
    }

    #[test]
    fn cursor_descriptor_reports_key() {
        let map: BTreeMap<i32, &str> = [(10, "a"), (20, "b")].into_iter().collect();
        let mut v = VertexDescriptor::new(Cursor::new(map.iter()));
        assert_eq!(v.id(), 10);
        v.advance();
        assert_eq!(v.id(), 20);
        v.advance();
        assert!(v.raw().is_end());
    }
}
