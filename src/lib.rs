//! Fib SSSP - single-source shortest paths over an indexed Fibonacci heap
//!
//! The crate implements Dijkstra's algorithm once and binds it to three
//! interchangeable priority queues:
//!
//! - an arena-backed indexed Fibonacci heap (O(1) amortized decrease-key),
//! - a binary heap that emulates decrease-key with lazy duplicate entries,
//! - a linear scan over all vertices (O(N) extract-min, no auxiliary structure).
//!
//! A benchmark harness generates large shuffled graphs, checks that all three
//! bindings agree on every distance, and reports median wall-clock timings.

pub mod algorithm;
pub mod data_structures;
pub mod graph;
pub mod harness;

pub use algorithm::{
    dijkstra::{
        dijkstra_binary, dijkstra_fibonacci, dijkstra_naive, BinaryHeapDijkstra, Dijkstra,
        FibonacciDijkstra, NaiveDijkstra,
    },
    ShortestPathAlgorithm, ShortestPathResult,
};
pub use data_structures::{FibonacciHeap, IndexedPriorityQueue, LazyBinaryHeap, LinearScanQueue};
/// Re-export main types for convenient use
pub use graph::directed::{DirectedGraph, Edge};
pub use graph::weight::Weight;

use data_structures::fibonacci_heap::HeapViolation;

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid vertex ID: {0}")]
    InvalidVertex(usize),

    #[error("Negative edge weight: from {from} to {to}")]
    NegativeWeight { from: usize, to: usize },

    #[error("extract_min called on an empty priority queue")]
    EmptyHeap,

    #[error("Item {0} was already extracted and cannot be decreased")]
    AlreadyExtracted(usize),

    #[error("{algorithm} diverged from the reference distances at vertex {first_vertex}")]
    OutputMismatch {
        algorithm: &'static str,
        first_vertex: usize,
    },

    #[error("Benchmark graph with {vertices} vertices and degree {degree} exceeds the cost range")]
    GraphTooLarge { vertices: usize, degree: usize },

    #[error("Heap structure is corrupt: {0}")]
    HeapViolation(#[from] HeapViolation),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
