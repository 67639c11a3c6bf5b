//! # `adjacent` - Graph Algorithms Over Unmodified Containers
//!
//! Generic graph algorithms usually demand that the graph implement their
//! interface. `adjacent` turns that around: a `Vec<Vec<usize>>`, a
//! `BTreeMap<&str, LinkedList<&str>>` or a `VecDeque<(Vec<(u32, f64)>, Label)>`
//! *is* a graph, as-is, and algorithms reach it through one resolved set of
//! primitives.
//!
//! ## Architecture
//!
//! 1. **Shape recognizers** ([`shape`]): compile-time classification of the
//!    host's elements (scalar, pair, tuple, map entry, opaque), fixing which
//!    part is a target id and which is a property.
//! 2. **Descriptors** ([`descriptor`]): [`VertexDescriptor`] and
//!    [`EdgeDescriptor`] name a storage location (an offset, or a [`Cursor`] over
//!    the container's own iterator) without owning anything.
//! 3. **Views** ([`view`]): lazy, forward-only descriptor sequences.
//! 4. **Resolver** ([`resolve`]): every primitive is resolved, at compile
//!    time, to an intrinsic override, a registered free operation or a generic
//!    default built from other primitives, in that order.
//! 5. **Values** ([`value`]): references into the host, with write-through
//!    `_mut` forms taking either a descriptor or, for hosts a descriptor
//!    borrows, a vertex id / [`EdgeAddress`].
//!
//! Host adapters live in [`store`]; [`profile`](mod@profile) and
//! [`validate`](mod@validate) are diagnostics built on the resolver.
//!
//! ## Example
//!
//! ```
//! use adjacent::{degree, edges, find_vertex, find_vertex_edge, num_vertices, target_id, vertices};
//!
//! let g: Vec<Vec<usize>> = vec![vec![1, 2], vec![2, 3], vec![3], vec![]];
//! assert_eq!(num_vertices(&g), 4);
//!
//! let u = find_vertex(&g, &0);
//! assert_eq!(degree(&g, &u), 2);
//! let first = edges(&g, &u).begin();
//! assert_eq!(target_id(&g, &first), 1);
//!
//! // Misses are the end sentinel of the matching view.
//! assert_eq!(find_vertex_edge(&g, &u, &3), edges(&g, &u).end());
//! assert_eq!(find_vertex(&g, &9), vertices(&g).end());
//! ```
//!
//! ## Cargo features
//!
//! - `tracing`: `trace!` events from the generic defaults and [`validate()`].
//! - `proptest`: strategies generating host graphs, in the `arbitrary` module.

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod descriptor;
pub mod profile;
pub mod resolve;
pub mod shape;
pub mod store;
pub mod validate;
pub mod value;
pub mod view;

#[cfg(feature = "proptest")]
pub mod arbitrary;

pub use descriptor::{Cursor, DescriptorId, EdgeAddress, EdgeDescriptor, Location, SizedLocation, VertexDescriptor};
pub use profile::{profile, HostProfile};
pub use resolve::{
    contains_edge, contains_edge_by_id, degree, degree_of, edges, find_vertex, find_vertex_edge,
    find_vertex_edge_by_id, num_edges, num_partitions, num_vertices, partition_id, source, source_id,
    target, target_id, vertex_id, vertices, AdjacencyList, FreeOps, GraphValue, SourcedEdges,
};
pub use shape::{EdgeShape, ShapeKind, VertexShape};
pub use store::{AddressMode, EdgeStore, VertexStore};
pub use validate::{validate, ValidationError};
pub use value::{
    edge_address, edge_element, edge_value, edge_value_mut, edge_value_mut_at, graph_value, graph_value_mut,
    vertex_value, vertex_value_mut, vertex_value_mut_by_id,
};
pub use view::{EdgeView, VertexView};

// Descriptors over index stores are as small as what they name.
const _: () = {
    use core::mem;

    assert!(mem::size_of::<VertexDescriptor<usize>>() == mem::size_of::<usize>());
    assert!(mem::size_of::<EdgeDescriptor<usize, usize>>() == 2 * mem::size_of::<usize>());
    assert!(mem::size_of::<Cursor<core::slice::Iter<'static, u32>>>() <= 4 * mem::size_of::<usize>());
};
