//! Scalar edge elements: the value is the target id.

use super::{EdgeShape, ShapeKind};

macro_rules! scalar_shape {
    ($($t:ty),* $(,)?) => {
        $(
            impl EdgeShape for $t {
                type Id = $t;
                type Property<'a> = &'a $t where Self: 'a;
                type PropertyMut<'a> = &'a mut $t where Self: 'a;
                const KIND: ShapeKind = ShapeKind::Scalar;

                #[inline(always)]
                fn id_of(&self) -> $t {
                    *self
                }

                #[inline(always)]
                fn property_of(&self) -> &$t {
                    self
                }

                #[inline(always)]
                fn property_of_mut(&mut self) -> &mut $t {
                    self
                }
            }
        )*
    };
}

scalar_shape!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, char);

// String ids, for keyed hosts named by label.
impl<'s> EdgeShape for &'s str {
    type Id = &'s str;
    type Property<'a> = &'a &'s str where Self: 'a;
    type PropertyMut<'a> = &'a mut &'s str where Self: 'a;
    const KIND: ShapeKind = ShapeKind::Scalar;

    #[inline(always)]
    fn id_of(&self) -> &'s str {
        *self
    }

    #[inline(always)]
    fn property_of(&self) -> &&'s str {
        self
    }

    #[inline(always)]
    fn property_of_mut(&mut self) -> &mut &'s str {
        self
    }
}

impl EdgeShape for String {
    type Id = String;
    type Property<'a> = &'a String where Self: 'a;
    type PropertyMut<'a> = &'a mut String where Self: 'a;
    const KIND: ShapeKind = ShapeKind::Scalar;

    #[inline]
    fn id_of(&self) -> String {
        self.clone()
    }

    #[inline(always)]
    fn property_of(&self) -> &String {
        self
    }

    #[inline(always)]
    fn property_of_mut(&mut self) -> &mut String {
        self
    }
}
