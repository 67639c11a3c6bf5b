//! Structural validation of a host.
//!
//! The resolver never checks that edge targets name real vertices; following a
//! dangling target just yields the end sentinel. [`validate`] is the explicit
//! check for callers that want one.

use core::fmt;

use crate::resolve::AdjacencyList;

/// A structural defect found by [`validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError<Id> {
    /// An edge of `source` targets an id that no vertex has.
    DanglingTarget {
        /// Id of the vertex owning the edge.
        source: Id,
        /// The unresolvable target id.
        target: Id,
    },
}

impl<Id: fmt::Debug> fmt::Display for ValidationError<Id> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DanglingTarget { source, target } => {
                write!(f, "edge {source:?} -> {target:?} targets no vertex")
            }
        }
    }
}

impl<Id: fmt::Debug> std::error::Error for ValidationError<Id> {}

/// Checks that every edge target resolves through `find_vertex`.
///
/// # Errors
/// Returns the first dangling `(source, target)` pair in vertex, then edge, order.
pub fn validate<G: AdjacencyList>(g: &G) -> Result<(), ValidationError<G::VertexId>> {
    let end = g.vertices().end();
    #[cfg(feature = "tracing")]
    let mut checked = 0usize;
    for u in g.vertices() {
        for e in g.edges(&u) {
            #[cfg(feature = "tracing")]
            {
                checked += 1;
            }
            if g.target(&e) == end {
                let err = ValidationError::DanglingTarget {
                    source: g.vertex_id(&u),
                    target: g.target_id(&e),
                };
                #[cfg(feature = "tracing")]
                tracing::trace!(%err, checked, "validate: dangling edge");
                return Err(err);
            }
        }
    }
    #[cfg(feature = "tracing")]
    tracing::trace!(checked, "validate: all edge targets resolve");
    Ok(())
}
