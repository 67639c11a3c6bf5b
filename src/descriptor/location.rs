//! Locations: the raw payload carried by a descriptor.
//!
//! A location is either a plain `usize` offset (index-addressable stores) or a
//! [`Cursor`] over the store's own iterator (cursor-addressable stores such as
//! `BTreeMap` or `LinkedList`). Both kinds advance in place and compare equal
//! only when they name the same slot of the same container.

use core::fmt;

/// A position inside a host container that can step forward.
///
/// Comparing or advancing locations that came from different containers is
/// meaningless; the result is unspecified (but never unsafe).
pub trait Location: Clone + PartialEq {
    /// Moves to the next slot of the same container.
    fn advance(&mut self);

    /// Bounds on the number of steps from `self` to `past`.
    ///
    /// The default reports nothing, which is what unsized cursor stores get.
    #[inline]
    fn steps_hint(&self, past: &Self) -> (usize, Option<usize>) {
        let _ = past;
        (0, None)
    }
}

/// A location that can count the exact number of steps to another one.
///
/// Index locations subtract; cursors over exact-size iterators know their
/// distance to the end sentinel and walk to any nearer bound.
pub trait SizedLocation: Location {
    /// Exact number of steps from `self` to `past`.
    fn distance(&self, past: &Self) -> usize;
}

impl Location for usize {
    #[inline(always)]
    fn advance(&mut self) {
        *self += 1;
    }

    #[inline(always)]
    fn steps_hint(&self, past: &Self) -> (usize, Option<usize>) {
        let n = past.saturating_sub(*self);
        (n, Some(n))
    }
}

impl SizedLocation for usize {
    #[inline(always)]
    fn distance(&self, past: &Self) -> usize {
        past.saturating_sub(*self)
    }
}

/// Identity of the element a cursor currently points at.
///
/// Two cursors are at the same slot iff their pointees share an address.
pub trait Pointee {
    /// Address of the referenced element.
    fn address(&self) -> *const ();
}

impl<T: ?Sized> Pointee for &T {
    #[inline(always)]
    fn address(&self) -> *const () {
        core::ptr::from_ref::<T>(*self).cast()
    }
}

impl<T: ?Sized> Pointee for &mut T {
    #[inline(always)]
    fn address(&self) -> *const () {
        core::ptr::from_ref::<T>(&**self).cast()
    }
}

// Map entries are identified by their key slot.
impl<K, V> Pointee for (&K, &V) {
    #[inline(always)]
    fn address(&self) -> *const () {
        core::ptr::from_ref::<K>(self.0).cast()
    }
}

impl<K, V> Pointee for (&K, &mut V) {
    #[inline(always)]
    fn address(&self) -> *const () {
        core::ptr::from_ref::<K>(self.0).cast()
    }
}

/// An opaque cursor over a container's borrowing iterator.
///
/// Holds the current element plus the not-yet-visited tail of the iterator, so
/// advancing is a single `next()` and never touches the container itself. The
/// end sentinel holds neither and can be built without a container.
///
/// A cursor borrows its container for its whole life, which means the borrow
/// checker rejects any attempt to mutate or drop the host while one is alive.
pub struct Cursor<I: Iterator> {
    current: Option<I::Item>,
    rest: Option<I>,
}

impl<I: Iterator> Cursor<I> {
    /// Positions a cursor on the first element `iter` yields.
    ///
    /// An empty iterator produces the end sentinel.
    #[inline]
    pub fn new(mut iter: I) -> Self {
        match iter.next() {
            Some(item) => Self {
                current: Some(item),
                rest: Some(iter),
            },
            None => Self::end(),
        }
    }

    /// The past-the-end sentinel.
    #[inline(always)]
    pub const fn end() -> Self {
        Self {
            current: None,
            rest: None,
        }
    }

    /// The element under the cursor, or `None` at the end.
    #[inline(always)]
    pub fn get(&self) -> Option<&I::Item> {
        self.current.as_ref()
    }

    /// Returns `true` for the end sentinel.
    #[inline(always)]
    pub fn is_end(&self) -> bool {
        self.current.is_none()
    }

    /// The element under the cursor.
    ///
    /// # Panics
    /// Panics when called on the end sentinel.
    #[inline]
    pub fn pointee(&self) -> &I::Item {
        match &self.current {
            Some(item) => item,
            None => panic!("dereferenced an end-of-range cursor"),
        }
    }
}

impl<I> Clone for Cursor<I>
where
    I: Iterator + Clone,
    I::Item: Clone,
{
    #[inline]
    fn clone(&self) -> Self {
        Self {
            current: self.current.clone(),
            rest: self.rest.clone(),
        }
    }
}

impl<I> PartialEq for Cursor<I>
where
    I: Iterator,
    I::Item: Pointee,
{
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        match (&self.current, &other.current) {
            (None, None) => true,
            (Some(a), Some(b)) => a.address() == b.address(),
            _ => false,
        }
    }
}

impl<I> Eq for Cursor<I>
where
    I: Iterator,
    I::Item: Pointee,
{
}

impl<I> fmt::Debug for Cursor<I>
where
    I: Iterator,
    I::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.current {
            Some(item) => f.debug_tuple("Cursor").field(item).finish(),
            None => f.write_str("Cursor(end)"),
        }
    }
}

impl<I> Location for Cursor<I>
where
    I: Iterator + Clone,
    I::Item: Pointee + Clone,
{
    #[inline]
    fn advance(&mut self) {
        self.current = self.rest.as_mut().and_then(Iterator::next);
        if self.current.is_none() {
            self.rest = None;
        }
    }

    /// Up to the end sentinel this is the iterator's own hint; a nearer `past`
    /// is counted by walking.
    #[inline]
    fn steps_hint(&self, past: &Self) -> (usize, Option<usize>) {
        if !past.is_end() {
            let n = self.steps_to(past);
            return (n, Some(n));
        }
        match (&self.current, &self.rest) {
            (Some(_), Some(rest)) => {
                let (lo, hi) = rest.size_hint();
                (lo.saturating_add(1), hi.and_then(|h| h.checked_add(1)))
            }
            _ => (0, Some(0)),
        }
    }
}

impl<I> Cursor<I>
where
    I: Iterator + Clone,
    I::Item: Pointee + Clone,
{
    /// Steps a copy of `self` takes to reach `past`, or the end if `past` is
    /// never met.
    fn steps_to(&self, past: &Self) -> usize {
        let mut walk = self.clone();
        let mut steps = 0;
        while !walk.is_end() && walk != *past {
            walk.advance();
            steps += 1;
        }
        steps
    }
}

impl<I> SizedLocation for Cursor<I>
where
    I: ExactSizeIterator + Clone,
    I::Item: Pointee + Clone,
{
    /// O(1) up to the end sentinel; any other `past` is reached by walking.
    #[inline]
    fn distance(&self, past: &Self) -> usize {
        if !past.is_end() {
            return self.steps_to(past);
        }
        match (&self.current, &self.rest) {
            (Some(_), Some(rest)) => rest.len() + 1,
            _ => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{BTreeMap, LinkedList};

    #[test]
    fn index_locations_step_and_measure() {
        let mut loc = 2usize;
        loc.advance();
        assert_eq!(loc, 3);
        assert_eq!(loc.distance(&7), 4);
        assert_eq!(loc.steps_hint(&7), (4, Some(4)));
        assert_eq!(9usize.distance(&7), 0);
    }

    #[test]
    fn cursor_walks_linked_list_to_end() {
        let list: LinkedList<i32> = [4, 5, 6].into_iter().collect();
        let mut cursor = Cursor::new(list.iter());
        assert_eq!(cursor.get().copied(), Some(&4));
        assert_eq!(cursor.distance(&Cursor::end()), 3);

        cursor.advance();
        cursor.advance();
        assert_eq!(**cursor.pointee(), 6);
        cursor.advance();
        assert!(cursor.is_end());
        assert_eq!(cursor, Cursor::end());
        assert_eq!(cursor.distance(&Cursor::end()), 0);
    }

    #[test]
    fn cursor_measures_to_a_nearer_bound() {
        let list: LinkedList<i32> = [1, 2, 3, 4].into_iter().collect();
        let first = Cursor::new(list.iter());
        let mut past = first.clone();
        past.advance();
        past.advance();
        assert_eq!(first.distance(&past), 2);
        assert_eq!(first.steps_hint(&past), (2, Some(2)));
        assert_eq!(past.distance(&past), 0);
        assert_eq!(first.steps_hint(&Cursor::end()), (4, Some(4)));
    }

    #[test]
    fn cursor_equality_is_positional() {
        let list: LinkedList<i32> = [1, 1, 1].into_iter().collect();
        let first = Cursor::new(list.iter());
        let mut second = first.clone();
        assert_eq!(first, second);
        second.advance();
        // Equal values, different slots.
        assert_ne!(first, second);
    }

    #[test]
    fn cursor_over_empty_iterator_is_end() {
        let map: BTreeMap<u8, u8> = BTreeMap::new();
        let cursor = Cursor::new(map.iter());
        assert!(cursor.is_end());
        assert_eq!(cursor, Cursor::end());
    }

    #[test]
    #[should_panic(expected = "end-of-range cursor")]
    fn end_cursor_cannot_be_dereferenced() {
        let cursor: Cursor<std::slice::Iter<'_, u8>> = Cursor::end();
        let _ = cursor.pointee();
    }
}
