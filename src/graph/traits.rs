use std::fmt::Debug;

use crate::graph::weight::Weight;

/// Trait representing a read-only weighted directed graph
///
/// Vertices are the dense range `0..vertex_count()`. Shortest-path
/// algorithms only ever read through this trait, so a graph can be shared by
/// any number of sequential runs without being rebuilt.
pub trait Graph<W>: Debug
where
    W: Weight,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over the outgoing edges `(target, cost)` of a vertex,
    /// in insertion order
    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_>;

    /// Calls `f` with each outgoing edge `(target, cost)` of `vertex`, in
    /// insertion order, stopping at the first error.
    ///
    /// The default goes through `outgoing_edges`; graphs with contiguous
    /// adjacency storage override it to skip the boxed iterator.
    fn try_for_each_edge<E, F>(&self, vertex: usize, mut f: F) -> std::result::Result<(), E>
    where
        Self: Sized,
        F: FnMut(usize, W) -> std::result::Result<(), E>,
    {
        self.outgoing_edges(vertex).try_for_each(|(to, cost)| f(to, cost))
    }

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: usize) -> bool {
        vertex < self.vertex_count()
    }

    /// Returns true if there's an edge between the two vertices
    fn has_edge(&self, from: usize, to: usize) -> bool {
        self.get_edge_weight(from, to).is_some()
    }

    /// Gets the weight of the first edge `from -> to` if it exists
    fn get_edge_weight(&self, from: usize, to: usize) -> Option<W> {
        if !self.has_vertex(from) {
            return None;
        }
        self.outgoing_edges(from)
            .find(|&(target, _)| target == to)
            .map(|(_, weight)| weight)
    }
}
