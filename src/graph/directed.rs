use crate::graph::traits::Graph;
use crate::graph::weight::Weight;
use crate::{Error, Result};

/// An outgoing edge: destination vertex and its non-negative cost
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge<W> {
    pub to: usize,
    pub cost: W,
}

/// A directed graph implementation using adjacency lists
///
/// `adjacency[v]` holds the outgoing edges of `v` in insertion order. Parallel
/// edges and self-loops are allowed; only negative costs are rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectedGraph<W>
where
    W: Weight,
{
    adjacency: Vec<Vec<Edge<W>>>,
    edge_count: usize,
}

impl<W> Default for DirectedGraph<W>
where
    W: Weight,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<W> DirectedGraph<W>
where
    W: Weight,
{
    /// Creates a new empty directed graph
    pub fn new() -> Self {
        DirectedGraph {
            adjacency: Vec::new(),
            edge_count: 0,
        }
    }

    /// Creates a new directed graph with `vertices` isolated vertices
    pub fn with_vertices(vertices: usize) -> Self {
        DirectedGraph {
            adjacency: vec![Vec::new(); vertices],
            edge_count: 0,
        }
    }

    /// Builds a graph from `(from, to, cost)` triples
    pub fn from_edges(vertices: usize, edges: &[(usize, usize, W)]) -> Result<Self> {
        let mut graph = Self::with_vertices(vertices);
        for &(from, to, cost) in edges {
            graph.add_edge(from, to, cost)?;
        }
        Ok(graph)
    }

    /// Adds an isolated vertex and returns its ID
    pub fn add_vertex(&mut self) -> usize {
        self.adjacency.push(Vec::new());
        self.adjacency.len() - 1
    }

    /// Appends the edge `from -> to` to `from`'s adjacency list
    pub fn add_edge(&mut self, from: usize, to: usize, cost: W) -> Result<()> {
        if !self.has_vertex(from) {
            return Err(Error::InvalidVertex(from));
        }
        if !self.has_vertex(to) {
            return Err(Error::InvalidVertex(to));
        }
        if !cost.is_valid_cost() {
            return Err(Error::NegativeWeight { from, to });
        }

        self.adjacency[from].push(Edge { to, cost });
        self.edge_count += 1;
        Ok(())
    }

    /// Outgoing edges of `vertex` as a slice; empty for unknown vertices
    pub fn edges(&self, vertex: usize) -> &[Edge<W>] {
        match self.adjacency.get(vertex) {
            Some(edges) => edges,
            None => &[],
        }
    }

    /// Validate that the graph doesn't have negative weights
    pub fn validate_non_negative(&self) -> bool {
        self.adjacency
            .iter()
            .flatten()
            .all(|edge| edge.cost.is_valid_cost())
    }
}

impl<W> Graph<W> for DirectedGraph<W>
where
    W: Weight,
{
    fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        Box::new(self.edges(vertex).iter().map(|edge| (edge.to, edge.cost)))
    }

    fn try_for_each_edge<E, F>(&self, vertex: usize, mut f: F) -> std::result::Result<(), E>
    where
        Self: Sized,
        F: FnMut(usize, W) -> std::result::Result<(), E>,
    {
        self.edges(vertex).iter().try_for_each(|edge| f(edge.to, edge.cost))
    }
}
