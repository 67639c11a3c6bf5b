//! Index-addressable vertex stores: `Vec<C>` and `VecDeque<C>`.
//!
//! Vertex ids are offsets, expressed in whatever primitive integer type the
//! edges use for their targets (`Vec<Vec<u32>>` has `u32` ids).

use std::collections::VecDeque;

use num_traits::{NumCast, PrimInt, ToPrimitive};

use super::{ByOffset, IndexedStore, VertexStore};
use crate::shape::{ShapeKind, VertexShape};

/// Converts an offset into the id type.
///
/// # Panics
/// Panics if the offset does not fit `T`, which means the host holds more
/// vertices than its own id type can name.
#[inline]
fn offset_to_id<T: NumCast>(offset: usize) -> T {
    match <T as NumCast>::from(offset) {
        Some(id) => id,
        None => panic!("vertex offset {offset} does not fit the id type"),
    }
}

macro_rules! indexed_vertex_store {
    ($($store:ident),* $(,)?) => {
        $(
            impl<C> VertexStore for $store<C>
            where
                C: VertexShape,
                C::Target: PrimInt,
            {
                type Vertex = C;
                type VertexId = C::Target;
                type Loc<'g> = usize where Self: 'g;
                type Lookup = ByOffset;
                const SHAPE: ShapeKind = C::KIND;

                #[inline(always)]
                fn first_vertex(&self) -> usize {
                    0
                }

                #[inline(always)]
                fn past_vertex(&self) -> usize {
                    self.len()
                }

                #[inline(always)]
                fn vertex_count(&self) -> usize {
                    self.len()
                }

                #[inline]
                fn id_at<'g>(&'g self, loc: &usize) -> C::Target {
                    offset_to_id(*loc)
                }

                #[inline(always)]
                fn vertex_at<'g>(&'g self, loc: &usize) -> &'g C {
                    &self[*loc]
                }

                #[inline(always)]
                fn vertex_at_mut<'g>(&mut self, loc: &usize) -> &mut C
                where
                    Self: 'g,
                {
                    &mut self[*loc]
                }
            }

            impl<C> IndexedStore for $store<C>
            where
                C: VertexShape,
                C::Target: PrimInt,
            {
                #[inline]
                fn offset_of(id: &C::Target) -> Option<usize> {
                    id.to_usize()
                }

                #[inline(always)]
                fn loc_at(&self, offset: usize) -> usize {
                    offset
                }

                #[inline]
                fn vertex_by_offset_mut(&mut self, offset: usize) -> Option<&mut C> {
                    self.get_mut(offset)
                }
            }
        )*
    };
}

indexed_vertex_store!(Vec, VecDeque);
