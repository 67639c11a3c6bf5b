//! Descriptor views: lazy, forward-only sequences of descriptors.
//!
//! Views are the element type returned by `vertices` and `edges`. They step a
//! private location and never mutate the host. `size()` / `is_empty()` and
//! `ExactSizeIterator` exist only when the location can count the steps to the
//! view's bound (every index store, and cursor stores whose iterator is
//! exact-size).

pub mod edge_view;
pub mod vertex_view;

pub use edge_view::EdgeView;
pub use vertex_view::VertexView;
