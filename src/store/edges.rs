//! Edge store adapters for the standard sequence containers.

use std::collections::{linked_list, LinkedList, VecDeque};

use super::{AddressMode, EdgeStore};
use crate::descriptor::{Cursor, SizedLocation};
use crate::shape::EdgeShape;

impl<E: EdgeShape> EdgeStore for Vec<E> {
    type Target = E::Id;
    type Edge = E;
    type Loc<'g> = usize where Self: 'g;
    const MODE: AddressMode = AddressMode::Index;

    #[inline(always)]
    fn first_edge(&self) -> usize {
        0
    }

    #[inline(always)]
    fn past_edge(&self) -> usize {
        self.len()
    }

    #[inline(always)]
    fn edge_count(&self) -> usize {
        self.len()
    }

    #[inline(always)]
    fn edge_at<'g>(&'g self, loc: &usize) -> &'g E {
        &self[*loc]
    }

    #[inline(always)]
    fn edge_at_mut<'g>(&mut self, loc: &usize) -> &mut E
    where
        Self: 'g,
    {
        &mut self[*loc]
    }
    #[inline]
    fn nth_edge_mut(&mut self, n: usize) -> Option<&mut E> {
        self.get_mut(n)
    }
}

impl<E: EdgeShape> EdgeStore for VecDeque<E> {
    type Target = E::Id;
    type Edge = E;
    type Loc<'g> = usize where Self: 'g;
    const MODE: AddressMode = AddressMode::Index;

    #[inline(always)]
    fn first_edge(&self) -> usize {
        0
    }

    #[inline(always)]
    fn past_edge(&self) -> usize {
        self.len()
    }

    #[inline(always)]
    fn edge_count(&self) -> usize {
        self.len()
    }

    #[inline(always)]
    fn edge_at<'g>(&'g self, loc: &usize) -> &'g E {
        &self[*loc]
    }

    #[inline(always)]
    fn edge_at_mut<'g>(&mut self, loc: &usize) -> &mut E
    where
        Self: 'g,
    {
        &mut self[*loc]
    }
    #[inline]
    fn nth_edge_mut(&mut self, n: usize) -> Option<&mut E> {
        self.get_mut(n)
    }
}

impl<E: EdgeShape> EdgeStore for LinkedList<E> {
    type Target = E::Id;
    type Edge = E;
    type Loc<'g> = Cursor<linked_list::Iter<'g, E>> where Self: 'g;
    const MODE: AddressMode = AddressMode::Cursor;

    #[inline]
    fn first_edge(&self) -> Self::Loc<'_> {
        Cursor::new(self.iter())
    }

    #[inline(always)]
    fn past_edge(&self) -> Self::Loc<'_> {
        Cursor::end()
    }

    #[inline(always)]
    fn edge_count(&self) -> usize {
        self.len()
    }

    #[inline]
    fn edge_at<'g>(&'g self, loc: &Self::Loc<'g>) -> &'g E {
        *loc.pointee()
    }

    /// Re-walks the list to the cursor's ordinal position.
    fn edge_at_mut<'g>(&mut self, loc: &Self::Loc<'g>) -> &mut E
    where
        Self: 'g,
    {
        let position = self.len() - loc.distance(&Cursor::end());
        match self.nth_edge_mut(position) {
            Some(edge) => edge,
            None => panic!("edge cursor is past the end of its list"),
        }
    }

    #[inline]
    fn nth_edge_mut(&mut self, n: usize) -> Option<&mut E> {
        self.iter_mut().nth(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::Location;

    #[test]
    fn vec_edges_are_indexed() {
        let mut edges = vec![(1usize, 0.5f32), (2, 1.5)];
        assert_eq!(<Vec<(usize, f32)> as EdgeStore>::MODE, AddressMode::Index);
        assert_eq!(edges.past_edge(), 2);
        assert_eq!(edges.edge_at(&1).0, 2);
        edges.edge_at_mut(&0).1 = 9.0;
        assert_eq!(edges[0].1, 9.0);
    }

    #[test]
    fn linked_edges_are_cursors() {
        let list: LinkedList<u32> = [5, 6, 7].into_iter().collect();
        let mut loc = list.first_edge();
        loc.advance();
        assert_eq!(*list.edge_at(&loc), 6);
        assert_eq!(list.edge_count(), 3);
    }

    #[test]
    fn linked_edge_mutation_finds_ordinal() {
        let list: LinkedList<u32> = [5, 6, 7].into_iter().collect();
        let mut other = list.clone();
        let mut loc = list.first_edge();
        loc.advance();
        loc.advance();
        // Ordinal 2 of a same-length list.
        *other.edge_at_mut(&loc) = 70;
        assert_eq!(other.into_iter().collect::<Vec<_>>(), vec![5, 6, 70]);
    }

    #[test]
    fn ordinal_mutation_needs_no_cursor() {
        let mut list: LinkedList<(u32, i8)> = [(1, 0), (2, 0)].into_iter().collect();
        if let Some(edge) = list.nth_edge_mut(1) {
            edge.1 = -3;
        }
        assert_eq!(list.back(), Some(&(2, -3)));
        assert!(list.nth_edge_mut(2).is_none());

        let mut deque: VecDeque<u32> = VecDeque::from(vec![4]);
        assert_eq!(deque.nth_edge_mut(0), Some(&mut 4));
    }
}
