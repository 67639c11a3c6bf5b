//! Associative entries: the `(key, mapped)` items of a keyed vertex store.
//!
//! Only recognized at the top level of `BTreeMap` / `HashMap` vertex stores.

use super::ShapeKind;

/// Classification reported by keyed vertex stores.
pub const KIND: ShapeKind = ShapeKind::AssociativeEntry;

/// The key (vertex id) of an entry.
#[inline(always)]
pub fn key_of<'g, K, V>(entry: &(&'g K, &'g V)) -> &'g K {
    entry.0
}

/// The mapped value (property bundle) of an entry.
#[inline(always)]
pub fn mapped_of<'g, K, V>(entry: &(&'g K, &'g V)) -> &'g V {
    entry.1
}
