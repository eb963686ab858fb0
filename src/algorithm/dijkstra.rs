use std::fmt;
use std::marker::PhantomData;

use log::debug;

use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::{FibonacciHeap, IndexedPriorityQueue, LazyBinaryHeap, LinearScanQueue};
use crate::graph::{Graph, Weight};
use crate::{Error, Result};

/// Dijkstra's algorithm, parameterized by the priority queue that backs it
///
/// The relaxation loop is the same for every queue: seed the source with
/// key zero, repeatedly extract the minimum vertex (which finalizes its
/// distance) and offer `distance + cost` to each neighbour through
/// `decrease_key`. Edge costs must be non-negative, which [`DirectedGraph`]
/// guarantees at construction.
///
/// [`DirectedGraph`]: crate::graph::DirectedGraph
pub struct Dijkstra<Q> {
    _queue: PhantomData<fn() -> Q>,
}

/// Dijkstra over the indexed Fibonacci heap
pub type FibonacciDijkstra<W> = Dijkstra<FibonacciHeap<W>>;

/// Dijkstra over a binary heap with lazy duplicate entries
pub type BinaryHeapDijkstra<W> = Dijkstra<LazyBinaryHeap<W>>;

/// Dijkstra with a linear scan for the minimum
pub type NaiveDijkstra<W> = Dijkstra<LinearScanQueue<W>>;

impl<Q> Dijkstra<Q> {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra {
            _queue: PhantomData,
        }
    }
}

impl<Q> Default for Dijkstra<Q> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Q> fmt::Debug for Dijkstra<Q> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dijkstra")
            .field("queue", &std::any::type_name::<Q>())
            .finish()
    }
}

impl<W, G, Q> ShortestPathAlgorithm<W, G> for Dijkstra<Q>
where
    W: Weight,
    G: Graph<W>,
    Q: IndexedPriorityQueue<W>,
{
    fn name(&self) -> &'static str {
        Q::NAME
    }

    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>> {
        if !graph.has_vertex(source) {
            return Err(Error::InvalidVertex(source));
        }

        let n = graph.vertex_count();
        let mut distances = vec![W::infinity(); n];
        let mut predecessors: Vec<Option<usize>> = vec![None; n];

        let mut queue = Q::with_capacity(n);
        queue.decrease_key(source, W::zero())?;

        let mut settled = 0_usize;
        let mut improvements = 0_usize;
        while !queue.is_empty() {
            let (u, dist_u) = queue.extract_min()?;
            distances[u] = dist_u;
            settled += 1;

            graph.try_for_each_edge(u, |v, cost| -> Result<()> {
                if queue.decrease_key(v, dist_u.relax_add(cost))? {
                    predecessors[v] = Some(u);
                    improvements += 1;
                }
                Ok(())
            })?;
        }

        debug!(
            "dijkstra/{}: settled {} of {} vertices with {} key improvements",
            Q::NAME,
            settled,
            n,
            improvements
        );

        Ok(ShortestPathResult {
            distances,
            predecessors,
            source,
        })
    }
}

fn distances_with<W, G, Q>(graph: &G, source: usize) -> Result<Vec<W>>
where
    W: Weight,
    G: Graph<W>,
    Q: IndexedPriorityQueue<W>,
{
    let algorithm = Dijkstra::<Q>::new();
    let result = ShortestPathAlgorithm::<W, G>::compute_shortest_paths(&algorithm, graph, source)?;
    Ok(result.distances)
}

/// Distances from `source` computed with the Fibonacci heap
pub fn dijkstra_fibonacci<W, G>(graph: &G, source: usize) -> Result<Vec<W>>
where
    W: Weight,
    G: Graph<W>,
{
    distances_with::<W, G, FibonacciHeap<W>>(graph, source)
}

/// Distances from `source` computed with the lazy binary heap
pub fn dijkstra_binary<W, G>(graph: &G, source: usize) -> Result<Vec<W>>
where
    W: Weight,
    G: Graph<W>,
{
    distances_with::<W, G, LazyBinaryHeap<W>>(graph, source)
}

/// Distances from `source` computed with the O(n^2) linear scan
pub fn dijkstra_naive<W, G>(graph: &G, source: usize) -> Result<Vec<W>>
where
    W: Weight,
    G: Graph<W>,
{
    distances_with::<W, G, LinearScanQueue<W>>(graph, source)
}
