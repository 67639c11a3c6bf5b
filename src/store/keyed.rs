//! Keyed vertex stores: `BTreeMap<K, C>` and `HashMap<K, C, S>`.
//!
//! The vertex id is the entry key and the vertex element is the mapped value.
//! Slots are cursor-addressed; a descriptor borrows the map.

use core::fmt;
use core::hash::{BuildHasher, Hash};
use core::iter::FusedIterator;
use core::ops::Bound;
use std::collections::{btree_map, hash_map, BTreeMap, HashMap};

use super::{ByKey, KeyedStore, VertexStore};
use crate::descriptor::{Cursor, Location};
use crate::shape::{entry, ShapeKind, VertexShape};

/// Mutable access re-finds the entry by key; the cursor itself only reads.
#[inline]
fn entry_mut<'m, V>(found: Option<&'m mut V>) -> &'m mut V {
    match found {
        Some(value) => value,
        None => panic!("vertex cursor does not name an entry of this map"),
    }
}

/// A `BTreeMap` range that knows how many entries it has left.
///
/// A range opened at the first key carries the map's length. One opened by a
/// seek counts its tail the first time a size is asked for.
pub struct CountedRange<'g, K, C> {
    inner: btree_map::Range<'g, K, C>,
    left: Option<usize>,
}

impl<'g, K, C> CountedRange<'g, K, C> {
    fn whole(map: &'g BTreeMap<K, C>) -> Self
    where
        K: Ord,
    {
        Self {
            inner: map.range::<K, _>(..),
            left: Some(map.len()),
        }
    }

    fn tail(inner: btree_map::Range<'g, K, C>) -> Self {
        Self { inner, left: None }
    }

    fn remaining(&self) -> usize {
        match self.left {
            Some(n) => n,
            None => self.inner.clone().count(),
        }
    }
}

impl<K, C> Clone for CountedRange<'_, K, C> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            left: self.left,
        }
    }
}

impl<'g, K, C> Iterator for CountedRange<'g, K, C> {
    type Item = (&'g K, &'g C);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let item = self.inner.next()?;
        if let Some(n) = self.left.as_mut() {
            *n -= 1;
        }
        Some(item)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining();
        (n, Some(n))
    }
}

impl<K, C> ExactSizeIterator for CountedRange<'_, K, C> {}

impl<K, C> FusedIterator for CountedRange<'_, K, C> {}

impl<K, C> VertexStore for BTreeMap<K, C>
where
    K: Ord + Clone + fmt::Debug,
    C: VertexShape<Target = K>,
{
    type Vertex = C;
    type VertexId = K;
    type Loc<'g> = Cursor<CountedRange<'g, K, C>> where Self: 'g;
    type Lookup = ByKey;
    const SHAPE: ShapeKind = entry::KIND;

    #[inline]
    fn first_vertex(&self) -> Self::Loc<'_> {
        Cursor::new(CountedRange::whole(self))
    }

    #[inline(always)]
    fn past_vertex(&self) -> Self::Loc<'_> {
        Cursor::end()
    }

    #[inline(always)]
    fn vertex_count(&self) -> usize {
        self.len()
    }

    #[inline]
    fn id_at<'g>(&'g self, loc: &Self::Loc<'g>) -> K {
        entry::key_of(loc.pointee()).clone()
    }

    #[inline]
    fn vertex_at<'g>(&'g self, loc: &Self::Loc<'g>) -> &'g C {
        entry::mapped_of(loc.pointee())
    }

    fn vertex_at_mut<'g>(&mut self, loc: &Self::Loc<'g>) -> &mut C
    where
        Self: 'g,
    {
        let key = entry::key_of(loc.pointee()).clone();
        entry_mut(self.get_mut(&key))
    }
}

impl<K, C> KeyedStore for BTreeMap<K, C>
where
    K: Ord + Clone + fmt::Debug,
    C: VertexShape<Target = K>,
{
    /// A range starting at `key`, kept only if its first entry is `key` itself.
    fn seek<'g>(&'g self, key: &K) -> Self::Loc<'g> {
        let tail = self.range::<K, _>((Bound::Included(key), Bound::Unbounded));
        let cursor = Cursor::new(CountedRange::tail(tail));
        let hit = matches!(cursor.get(), Some((k, _)) if *k == key);
        if hit {
            cursor
        } else {
            Cursor::end()
        }
    }

    #[inline]
    fn vertex_by_key_mut(&mut self, key: &K) -> Option<&mut C> {
        self.get_mut(key)
    }
}

impl<K, C, S> VertexStore for HashMap<K, C, S>
where
    K: Eq + Hash + Clone + fmt::Debug,
    C: VertexShape<Target = K>,
    S: BuildHasher,
{
    type Vertex = C;
    type VertexId = K;
    type Loc<'g> = Cursor<hash_map::Iter<'g, K, C>> where Self: 'g;
    type Lookup = ByKey;
    const SHAPE: ShapeKind = entry::KIND;

    #[inline]
    fn first_vertex(&self) -> Self::Loc<'_> {
        Cursor::new(self.iter())
    }

    #[inline(always)]
    fn past_vertex(&self) -> Self::Loc<'_> {
        Cursor::end()
    }

    #[inline(always)]
    fn vertex_count(&self) -> usize {
        self.len()
    }

    #[inline]
    fn id_at<'g>(&'g self, loc: &Self::Loc<'g>) -> K {
        entry::key_of(loc.pointee()).clone()
    }

    #[inline]
    fn vertex_at<'g>(&'g self, loc: &Self::Loc<'g>) -> &'g C {
        entry::mapped_of(loc.pointee())
    }

    fn vertex_at_mut<'g>(&mut self, loc: &Self::Loc<'g>) -> &mut C
    where
        Self: 'g,
    {
        let key = entry::key_of(loc.pointee()).clone();
        entry_mut(self.get_mut(&key))
    }
}

impl<K, C, S> KeyedStore for HashMap<K, C, S>
where
    K: Eq + Hash + Clone + fmt::Debug,
    C: VertexShape<Target = K>,
    S: BuildHasher,
{
    /// Hash iteration order is the only order a cursor can follow, so a hit
    /// walks the iterator up to the key: O(V) per lookup. Misses are O(1).
    fn seek<'g>(&'g self, key: &K) -> Self::Loc<'g> {
        if !self.contains_key(key) {
            return Cursor::end();
        }
        let mut cursor = Cursor::new(self.iter());
        while let Some((k, _)) = cursor.get() {
            if *k == key {
                break;
            }
            cursor.advance();
        }
        cursor
    }

    #[inline]
    fn vertex_by_key_mut(&mut self, key: &K) -> Option<&mut C> {
        self.get_mut(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::SizedLocation;
    use crate::store::FindStrategy;

    fn sample() -> BTreeMap<i32, Vec<i32>> {
        [(10, vec![20, 30]), (20, vec![30]), (30, vec![])].into_iter().collect()
    }

    #[test]
    fn btree_first_vertex_is_smallest_key() {
        let g = sample();
        let first = g.first_vertex();
        assert_eq!(g.id_at(&first), 10);
        assert_eq!(g.vertex_at(&first), &vec![20, 30]);
        assert_eq!(<BTreeMap<i32, Vec<i32>> as VertexStore>::SHAPE, ShapeKind::AssociativeEntry);
    }

    #[test]
    fn btree_seek_hits_and_misses() {
        let g = sample();
        let hit = ByKey::find(&g, &20);
        assert_eq!(g.id_at(&hit), 20);
        assert!(ByKey::find(&g, &25).is_end());
        assert!(ByKey::find(&g, &999).is_end());
    }

    #[test]
    fn hash_seek_walks_to_key() {
        let g: HashMap<u64, Vec<u64>> =
            [(1, vec![2]), (2, vec![]), (3, vec![1])].into_iter().collect();
        for key in [1, 2, 3] {
            let loc = g.seek(&key);
            assert_eq!(g.id_at(&loc), key);
        }
        assert!(g.seek(&26).is_end());
    }

    #[test]
    fn btree_cursors_know_their_remaining_count() {
        let g = sample();
        let mut first = g.first_vertex();
        assert_eq!(first.distance(&g.past_vertex()), 3);
        first.advance();
        assert_eq!(first.distance(&g.past_vertex()), 2);
        // Sought cursors count their tail.
        let sought = g.seek(&20);
        assert_eq!(sought.distance(&g.past_vertex()), 2);
        assert_eq!(sought.steps_hint(&g.past_vertex()), (2, Some(2)));
    }

    #[test]
    fn keyed_lookup_finds_mutable_entries() {
        let mut g = sample();
        if let Some(edges) = ByKey::find_mut(&mut g, &20) {
            edges.push(10);
        }
        assert_eq!(g[&20], vec![30, 10]);
        assert!(ByKey::find_mut(&mut g, &25).is_none());

        let mut h: HashMap<u64, Vec<u64>> = [(1, vec![])].into_iter().collect();
        if let Some(edges) = h.vertex_by_key_mut(&1) {
            edges.push(1);
        }
        assert_eq!(h[&1], vec![1]);
    }

    #[test]
    fn btree_mutation_through_key() {
        let mut g = sample();
        let snapshot = g.clone();
        let loc = snapshot.seek(&30);
        g.vertex_at_mut(&loc).push(10);
        assert_eq!(g[&30], vec![10]);
    }
}
