//! Shape recognizers: static classification of host element layouts.
//!
//! Every element that can sit in an edge store implements [`EdgeShape`], which
//! fixes at compile time which part of the element is the target id and which
//! part is its property:
//!
//! | Element | Kind | id | property |
//! |---------|------|----|----------|
//! | primitive integer, `char`, `&str`, `String` | `Scalar` | itself | itself |
//! | `(T,)` | `TupleLike { properties: 0 }` | `.0` | `.0` |
//! | `(T, P)` | `PairLike` | `.0` | `.1` |
//! | `(T, A, B)` | `TupleLike { properties: 2 }` | `.0` | `(A, B)` |
//! | `(T, A, B, C)` | `TupleLike { properties: 3 }` | `.0` | `(A, B, C)` |
//! | your type | `Opaque` | your `id_of` | your `property_of` |
//!
//! A two-element tuple is always pair-like. Map entries are classified as
//! [`ShapeKind::AssociativeEntry`] only by the top-level keyed vertex stores
//! (see [`entry`]); a `(K, V)` sitting inside an edge store is just a pair.
//!
//! Vertex elements are classified separately by [`VertexShape`].

use core::fmt;

use serde::{Deserialize, Serialize};

pub mod entry;
mod scalar;
mod tuple;
pub mod vertex;

pub use vertex::VertexShape;

/// Layout classification of a host element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeKind {
    /// The element is itself the id.
    Scalar,
    /// First component is the id, second the property.
    PairLike,
    /// First component is the id, followed by `properties` property components.
    TupleLike {
        /// Number of trailing property components.
        properties: usize,
    },
    /// Key is the id, mapped value is the property bundle.
    AssociativeEntry,
    /// No recognized layout; extraction is supplied by the element type itself.
    Opaque,
}

/// Id and property extraction for an edge element.
///
/// Implement this for your own edge types to make them usable in edge stores;
/// set `KIND` to [`ShapeKind::Opaque`].
pub trait EdgeShape {
    /// The target id type.
    type Id: Clone + PartialEq + fmt::Debug;

    /// Shared view of the property portion.
    type Property<'a>
    where
        Self: 'a;

    /// Mutable view of the property portion.
    type PropertyMut<'a>
    where
        Self: 'a;

    /// Static classification of this element type.
    const KIND: ShapeKind;

    /// Extracts the target id.
    fn id_of(&self) -> Self::Id;

    /// Borrows the property portion.
    fn property_of(&self) -> Self::Property<'_>;

    /// Mutably borrows the property portion.
    fn property_of_mut(&mut self) -> Self::PropertyMut<'_>;
}

/// Classification of `E`.
#[inline(always)]
pub const fn classify<E: EdgeShape>() -> ShapeKind {
    E::KIND
}

/// Target id of `elem`.
#[inline(always)]
pub fn id_of<E: EdgeShape>(elem: &E) -> E::Id {
    elem.id_of()
}

/// Property portion of `elem`.
#[inline(always)]
pub fn property_of<E: EdgeShape>(elem: &E) -> E::Property<'_> {
    elem.property_of()
}

/// Mutable property portion of `elem`.
#[inline(always)]
pub fn property_of_mut<E: EdgeShape>(elem: &mut E) -> E::PropertyMut<'_> {
    elem.property_of_mut()
}
