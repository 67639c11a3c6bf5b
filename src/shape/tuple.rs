//! Pair-like and tuple-like edge elements.
//!
//! The first component is always the target id. What the property is depends
//! on how many components trail it:
//! - none: the id itself
//! - one: that component (pair-like)
//! - two or more: a tuple of references, one per trailing component

use core::fmt;

use super::{EdgeShape, ShapeKind};

impl<T> EdgeShape for (T,)
where
    T: Clone + PartialEq + fmt::Debug,
{
    type Id = T;
    type Property<'a> = &'a T where Self: 'a;
    type PropertyMut<'a> = &'a mut T where Self: 'a;
    const KIND: ShapeKind = ShapeKind::TupleLike { properties: 0 };

    #[inline(always)]
    fn id_of(&self) -> T {
        self.0.clone()
    }

    #[inline(always)]
    fn property_of(&self) -> &T {
        &self.0
    }

    #[inline(always)]
    fn property_of_mut(&mut self) -> &mut T {
        &mut self.0
    }
}

impl<T, P> EdgeShape for (T, P)
where
    T: Clone + PartialEq + fmt::Debug,
{
    type Id = T;
    type Property<'a> = &'a P where Self: 'a;
    type PropertyMut<'a> = &'a mut P where Self: 'a;
    const KIND: ShapeKind = ShapeKind::PairLike;

    #[inline(always)]
    fn id_of(&self) -> T {
        self.0.clone()
    }

    #[inline(always)]
    fn property_of(&self) -> &P {
        &self.1
    }

    #[inline(always)]
    fn property_of_mut(&mut self) -> &mut P {
        &mut self.1
    }
}

impl<T, A, B> EdgeShape for (T, A, B)
where
    T: Clone + PartialEq + fmt::Debug,
{
    type Id = T;
    type Property<'a> = (&'a A, &'a B) where Self: 'a;
    type PropertyMut<'a> = (&'a mut A, &'a mut B) where Self: 'a;
    const KIND: ShapeKind = ShapeKind::TupleLike { properties: 2 };

    #[inline(always)]
    fn id_of(&self) -> T {
        self.0.clone()
    }

    #[inline(always)]
    fn property_of(&self) -> (&A, &B) {
        (&self.1, &self.2)
    }

    #[inline(always)]
    fn property_of_mut(&mut self) -> (&mut A, &mut B) {
        (&mut self.1, &mut self.2)
    }
}

impl<T, A, B, C> EdgeShape for (T, A, B, C)
where
    T: Clone + PartialEq + fmt::Debug,
{
    type Id = T;
    type Property<'a> = (&'a A, &'a B, &'a C) where Self: 'a;
    type PropertyMut<'a> = (&'a mut A, &'a mut B, &'a mut C) where Self: 'a;
    const KIND: ShapeKind = ShapeKind::TupleLike { properties: 3 };

    #[inline(always)]
    fn id_of(&self) -> T {
        self.0.clone()
    }

    #[inline(always)]
    fn property_of(&self) -> (&A, &B, &C) {
        (&self.1, &self.2, &self.3)
    }

    #[inline(always)]
    fn property_of_mut(&mut self) -> (&mut A, &mut B, &mut C) {
        (&mut self.1, &mut self.2, &mut self.3)
    }
}

#[cfg(test)]
mod tests {
    use super::super::*;

    #[test]
    fn unary_tuple_property_is_the_id() {
        let edge = (4u8,);
        assert_eq!(id_of(&edge), 4);
        assert_eq!(*property_of(&edge), 4);
    }

    #[test]
    fn pair_property_is_second() {
        let mut edge = (1usize, "w");
        assert_eq!(id_of(&edge), 1);
        *property_of_mut(&mut edge) = "x";
        assert_eq!(edge.1, "x");
    }

    #[test]
    fn triple_bundle_mutates_per_component() {
        let mut edge = (2usize, 1.0f64, 'r');
        {
            let (weight, _color) = property_of_mut(&mut edge);
            *weight = 3.5;
        }
        assert_eq!(property_of(&edge), (&3.5, &'r'));
    }

    #[test]
    fn quad_bundle_holds_three_refs() {
        let edge = (0i32, 1u8, 2u16, 3u32);
        let (a, b, c) = property_of(&edge);
        assert_eq!((*a, *b, *c), (1, 2, 3));
    }
}
