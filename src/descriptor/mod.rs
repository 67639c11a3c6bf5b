//! Descriptors: non-owning handles naming where a vertex or edge lives.
//!
//! - `location`: the raw index / cursor payload and how it steps
//! - `vertex`: [`VertexDescriptor`]
//! - `edge`: [`EdgeDescriptor`], which embeds its source vertex descriptor,
//!   and the borrow-free [`EdgeAddress`]
//!
//! Descriptors are valid only while their host container is alive and
//! unchanged. Cursor descriptors borrow the host, so the compiler enforces
//! that; index descriptors do not, and a stale index either names a different
//! vertex or panics on the bounds check.

pub mod edge;
pub mod location;
pub mod vertex;

pub use edge::{EdgeAddress, EdgeDescriptor};
pub use location::{Cursor, Location, Pointee, SizedLocation};
pub use vertex::{DescriptorId, VertexDescriptor};
