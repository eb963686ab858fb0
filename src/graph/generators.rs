use crate::graph::DirectedGraph;
use crate::{Error, Result};
use rand::prelude::*;

/// Costs of the non-path edges count down from here, so every edge leaving
/// the `0 -> 1 -> 2 -> ...` chain is strictly worse than following it.
const LONG_EDGE_BASE: u64 = 1 << 32;

/// A generated graph together with the vertex to run SSSP from
#[derive(Debug, Clone)]
pub struct GeneratedGraph {
    pub graph: DirectedGraph<u64>,
    pub source: usize,
}

/// Generates the benchmark graph with `n` vertices and out-degree about `deg`.
///
/// Before relabeling the graph contains:
/// - a unit-cost path `0 -> 1 -> ... -> n-1`, which is the shortest-path tree,
/// - an expensive edge `0 -> v` for every `v >= 2`, so everything is reachable
///   from the source through several competing routes,
/// - edges `u -> v` for `u + 2 <= v <= u + deg` with large, distinct costs.
///
/// The edge list and the vertex numbering are then shuffled with a seeded
/// `StdRng`, so neither the adjacency order nor the vertex ids follow the
/// cache-friendly path order. The returned `source` is the image of vertex 0.
///
/// Every long edge consumes one value of the cost countdown, so the graph
/// holds at most about 2^32 of them; larger requests fail with
/// [`Error::GraphTooLarge`].
pub fn generate_benchmark_graph(n: usize, deg: usize, seed: u64) -> Result<GeneratedGraph> {
    // the source needs a vertex to live on
    if n == 0 {
        return Err(Error::InvalidVertex(0));
    }

    let mut edges = chain_edges(n, deg, LONG_EDGE_BASE)?;

    let mut rng = StdRng::seed_from_u64(seed);
    edges.shuffle(&mut rng);
    let mut map: Vec<usize> = (0..n).collect();
    map.shuffle(&mut rng);

    let mut graph = DirectedGraph::with_vertices(n);
    for &(u, v, cost) in &edges {
        graph.add_edge(map[u], map[v], cost)?;
    }

    Ok(GeneratedGraph {
        graph,
        source: map[0],
    })
}

/// Unshuffled edge list of the benchmark graph, long-edge costs counting
/// down from `base`
fn chain_edges(n: usize, deg: usize, base: u64) -> Result<Vec<(usize, usize, u64)>> {
    let exhausted = || Error::GraphTooLarge {
        vertices: n,
        degree: deg,
    };

    let mut edges = Vec::new();
    if n < 2 {
        return Ok(edges);
    }

    let mut next = base;
    edges.push((0, 1, 1));
    for v in 2..n {
        edges.push((0, v, next));
        next = next.checked_sub(1).ok_or_else(exhausted)?;
    }
    for u in 1..n - 1 {
        edges.push((u, u + 1, 1));
        let end = n.min(u.saturating_add(deg).saturating_add(1));
        for v in u + 2..end {
            let cost = next.checked_sub(u as u64).ok_or_else(exhausted)?;
            edges.push((u, v, cost));
            next = next.checked_sub(1).ok_or_else(exhausted)?;
        }
    }
    Ok(edges)
}

/// Generates a random directed graph with about `edge_factor * n` edges
/// and costs drawn uniformly from `0..=max_weight`. Self-loops are skipped,
/// parallel edges may occur. Not every vertex is reachable.
pub fn generate_random_graph(
    n: usize,
    edge_factor: usize,
    max_weight: u64,
    seed: u64,
) -> Result<DirectedGraph<u64>> {
    let mut graph = DirectedGraph::with_vertices(n);
    if n < 2 {
        return Ok(graph);
    }
    let mut rng = StdRng::seed_from_u64(seed);

    for _ in 0..n.saturating_mul(edge_factor) {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        if u != v {
            graph.add_edge(u, v, rng.gen_range(0..=max_weight))?;
        }
    }

    Ok(graph)
}

/// Generates a `width x height` grid with 4-connectivity in both directions
/// and random costs in `1..=max_weight`. Vertex `(x, y)` has id `y * width + x`.
pub fn generate_grid(
    width: usize,
    height: usize,
    max_weight: u64,
    seed: u64,
) -> Result<DirectedGraph<u64>> {
    let mut graph = DirectedGraph::with_vertices(width * height);
    let mut rng = StdRng::seed_from_u64(seed);
    let max_weight = max_weight.max(1);

    // Helper function to get vertex index from 2D coordinates
    let index = |x: usize, y: usize| -> usize { y * width + x };

    for y in 0..height {
        for x in 0..width {
            if x + 1 < width {
                graph.add_edge(index(x, y), index(x + 1, y), rng.gen_range(1..=max_weight))?;
                graph.add_edge(index(x + 1, y), index(x, y), rng.gen_range(1..=max_weight))?;
            }
            if y + 1 < height {
                graph.add_edge(index(x, y), index(x, y + 1), rng.gen_range(1..=max_weight))?;
                graph.add_edge(index(x, y + 1), index(x, y), rng.gen_range(1..=max_weight))?;
            }
        }
    }

    Ok(graph)
}
