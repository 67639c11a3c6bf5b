//! Vertex element shapes: where a vertex keeps its edges and its value.

use core::fmt;
use std::collections::{LinkedList, VecDeque};

use super::{EdgeShape, ShapeKind};
use crate::store::EdgeStore;

/// How a vertex element exposes its edge store and its value.
///
/// Two layouts are recognized:
/// - a bare edge store (`Vec<E>`, `VecDeque<E>`, `LinkedList<E>`): scalar, the
///   vertex has no separate property so its value is the edge store itself
/// - `(edges, property)`: pair-like, the value is the property
pub trait VertexShape {
    /// Id type of the targets its edges point at.
    type Target: Clone + PartialEq + fmt::Debug;

    /// The edge store.
    type Edges: EdgeStore<Target = Self::Target>;

    /// The vertex's value.
    type Value;

    /// Static classification.
    const KIND: ShapeKind;

    /// The vertex's edges.
    fn edges(&self) -> &Self::Edges;

    /// The vertex's edges, mutably.
    fn edges_mut(&mut self) -> &mut Self::Edges;

    /// The vertex's value.
    fn value(&self) -> &Self::Value;

    /// The vertex's value, mutably.
    fn value_mut(&mut self) -> &mut Self::Value;
}

macro_rules! bare_edge_store_vertex {
    ($($store:ident),* $(,)?) => {
        $(
            impl<E: EdgeShape> VertexShape for $store<E> {
                type Target = E::Id;
                type Edges = Self;
                type Value = Self;
                const KIND: ShapeKind = ShapeKind::Scalar;

                #[inline(always)]
                fn edges(&self) -> &Self {
                    self
                }

                #[inline(always)]
                fn edges_mut(&mut self) -> &mut Self {
                    self
                }

                #[inline(always)]
                fn value(&self) -> &Self {
                    self
                }

                #[inline(always)]
                fn value_mut(&mut self) -> &mut Self {
                    self
                }
            }
        )*
    };
}

bare_edge_store_vertex!(Vec, VecDeque, LinkedList);

impl<C: EdgeStore, P> VertexShape for (C, P) {
    type Target = C::Target;
    type Edges = C;
    type Value = P;
    const KIND: ShapeKind = ShapeKind::PairLike;

    #[inline(always)]
    fn edges(&self) -> &C {
        &self.0
    }

    #[inline(always)]
    fn edges_mut(&mut self) -> &mut C {
        &mut self.0
    }

    #[inline(always)]
    fn value(&self) -> &P {
        &self.1
    }

    #[inline(always)]
    fn value_mut(&mut self) -> &mut P {
        &mut self.1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_store_is_its_own_value() {
        let v: Vec<u32> = vec![1, 2];
        assert_eq!(<Vec<u32> as VertexShape>::KIND, ShapeKind::Scalar);
        assert!(core::ptr::eq(v.edges(), v.value()));
    }

    #[test]
    fn pair_vertex_splits_edges_and_value() {
        let mut v = (vec![3usize], "berlin");
        assert_eq!(<(Vec<usize>, &str) as VertexShape>::KIND, ShapeKind::PairLike);
        assert_eq!(v.edges(), &vec![3]);
        *v.value_mut() = "paris";
        assert_eq!(v.1, "paris");
    }
}
