//! `register_ops!`: wiring free functions into the registered tier.

/// Registers free functions as a host's operations.
///
/// Three forms, one per resolver trait:
///
/// ```ignore
/// register_ops! {
///     impl FreeOps for MyGraph {
///         num_edges => my_num_edges,
///         degree => my_degree,
///     }
/// }
///
/// register_ops! {
///     impl GraphValue for MyGraph {
///         type Value = String;
///         graph_value => name,
///         graph_value_mut => name_mut,
///     }
/// }
///
/// register_ops! {
///     impl SourcedEdges for MyGraph {
///         source_id => edge_source_id,
///         source => edge_source,
///     }
/// }
/// ```
///
/// Generic hosts put their parameters in brackets after `impl` and their
/// bounds in brackets after `where`:
///
/// ```ignore
/// register_ops! {
///     impl [T: Clone] FreeOps for Wrapper<T> where [T: Default] { num_vertices => count }
/// }
/// ```
///
/// Each function takes the graph by reference as its first argument and
/// otherwise has the signature of the matching [`AdjacencyList`] method. The
/// `FreeOps` form leaves every operation it does not name at its generic
/// default. Naming an unknown operation is a compile error.
///
/// [`AdjacencyList`]: crate::AdjacencyList
#[macro_export]
macro_rules! register_ops {
    (
        impl $([$($gen:tt)*])? FreeOps for $host:ty $(where [$($bounds:tt)*])? {
            $($op:ident => $f:path),* $(,)?
        }
    ) => {
        impl $(<$($gen)*>)? $crate::FreeOps for $host $(where $($bounds)*)? {
            $($crate::register_ops!(@free $op $f);)*
        }
    };

    (
        impl $([$($gen:tt)*])? GraphValue for $host:ty $(where [$($bounds:tt)*])? {
            type Value = $value:ty;
            graph_value => $get:path,
            graph_value_mut => $get_mut:path $(,)?
        }
    ) => {
        impl $(<$($gen)*>)? $crate::GraphValue for $host $(where $($bounds)*)? {
            type Value = $value;

            #[inline]
            fn graph_value(&self) -> &Self::Value {
                $get(self)
            }

            #[inline]
            fn graph_value_mut(&mut self) -> &mut Self::Value {
                $get_mut(self)
            }
        }
    };

    (
        impl $([$($gen:tt)*])? SourcedEdges for $host:ty $(where [$($bounds:tt)*])? {
            source_id => $source_id:path,
            source => $source:path $(,)?
        }
    ) => {
        impl $(<$($gen)*>)? $crate::SourcedEdges for $host $(where $($bounds)*)? {
            #[inline]
            fn source_id<'g>(
                &'g self,
                e: &$crate::store::EdgeOf<'g, Self>,
            ) -> <Self as $crate::store::VertexStore>::VertexId {
                $source_id(self, e)
            }

            #[inline]
            fn source<'g>(
                &'g self,
                e: &$crate::store::EdgeOf<'g, Self>,
            ) -> $crate::store::VertexOf<'g, Self> {
                $source(self, e)
            }
        }
    };

    (@free vertices $f:path) => {
        #[inline]
        fn vertices(
            g: &Self,
        ) -> $crate::view::VertexView<<Self as $crate::store::VertexStore>::Loc<'_>> {
            $f(g)
        }
    };

    (@free edges $f:path) => {
        #[inline]
        fn edges<'g>(
            g: &'g Self,
            u: &$crate::store::VertexOf<'g, Self>,
        ) -> $crate::view::EdgeView<
            $crate::store::EdgeLocOf<'g, Self>,
            <Self as $crate::store::VertexStore>::Loc<'g>,
        > {
            $f(g, u)
        }
    };

    (@free vertex_id $f:path) => {
        #[inline]
        fn vertex_id<'g>(
            g: &'g Self,
            u: &$crate::store::VertexOf<'g, Self>,
        ) -> <Self as $crate::store::VertexStore>::VertexId {
            $f(g, u)
        }
    };

    (@free find_vertex $f:path) => {
        #[inline]
        fn find_vertex<'g>(
            g: &'g Self,
            id: &<Self as $crate::store::VertexStore>::VertexId,
        ) -> $crate::store::VertexOf<'g, Self> {
            $f(g, id)
        }
    };

    (@free target_id $f:path) => {
        #[inline]
        fn target_id<'g>(
            g: &'g Self,
            e: &$crate::store::EdgeOf<'g, Self>,
        ) -> <Self as $crate::store::VertexStore>::VertexId {
            $f(g, e)
        }
    };

    (@free target $f:path) => {
        #[inline]
        fn target<'g>(
            g: &'g Self,
            e: &$crate::store::EdgeOf<'g, Self>,
        ) -> $crate::store::VertexOf<'g, Self>
        where
            Self: $crate::AdjacencyList,
        {
            $f(g, e)
        }
    };

    (@free num_vertices $f:path) => {
        #[inline]
        fn num_vertices(g: &Self) -> usize {
            $f(g)
        }
    };

    (@free num_edges $f:path) => {
        #[inline]
        fn num_edges(g: &Self) -> usize
        where
            Self: $crate::AdjacencyList,
        {
            $f(g)
        }
    };

    (@free degree $f:path) => {
        #[inline]
        fn degree<'g>(g: &'g Self, u: &$crate::store::VertexOf<'g, Self>) -> usize
        where
            Self: $crate::AdjacencyList,
        {
            $f(g, u)
        }
    };

    (@free vertex_value $f:path) => {
        #[inline]
        fn vertex_value<'g>(
            g: &'g Self,
            u: &$crate::store::VertexOf<'g, Self>,
        ) -> &'g $crate::store::VertexValueOf<Self> {
            $f(g, u)
        }
    };

    (@free vertex_value_mut $f:path) => {
        #[inline]
        fn vertex_value_mut<'a, 'g>(
            g: &'a mut Self,
            u: &$crate::store::VertexOf<'g, Self>,
        ) -> &'a mut $crate::store::VertexValueOf<Self>
        where
            Self: 'g,
        {
            $f(g, u)
        }
    };

    (@free edge_value $f:path) => {
        #[inline]
        fn edge_value<'g>(
            g: &'g Self,
            e: &$crate::store::EdgeOf<'g, Self>,
        ) -> $crate::store::EdgeValueOf<'g, Self> {
            $f(g, e)
        }
    };

    (@free edge_value_mut $f:path) => {
        #[inline]
        fn edge_value_mut<'a, 'g>(
            g: &'a mut Self,
            e: &$crate::store::EdgeOf<'g, Self>,
        ) -> $crate::store::EdgeValueMutOf<'a, Self>
        where
            Self: 'g,
        {
            $f(g, e)
        }
    };

    (@free contains_edge $f:path) => {
        #[inline]
        fn contains_edge<'g>(
            g: &'g Self,
            u: &$crate::store::VertexOf<'g, Self>,
            vid: &<Self as $crate::store::VertexStore>::VertexId,
        ) -> bool
        where
            Self: $crate::AdjacencyList,
        {
            $f(g, u, vid)
        }
    };

    (@free find_vertex_edge $f:path) => {
        #[inline]
        fn find_vertex_edge<'g>(
            g: &'g Self,
            u: &$crate::store::VertexOf<'g, Self>,
            vid: &<Self as $crate::store::VertexStore>::VertexId,
        ) -> $crate::store::EdgeOf<'g, Self>
        where
            Self: $crate::AdjacencyList,
        {
            $f(g, u, vid)
        }
    };

    (@free partition_id $f:path) => {
        #[inline]
        fn partition_id<'g>(g: &'g Self, u: &$crate::store::VertexOf<'g, Self>) -> usize {
            $f(g, u)
        }
    };

    (@free num_partitions $f:path) => {
        #[inline]
        fn num_partitions(g: &Self) -> usize {
            $f(g)
        }
    };
}
