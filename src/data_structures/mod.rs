pub mod fibonacci_heap;
pub mod linear_scan;
pub mod priority_queue;
pub mod traits;

pub use fibonacci_heap::{FibonacciHeap, HeapStats, HeapViolation, NodeState};
pub use linear_scan::LinearScanQueue;
pub use priority_queue::LazyBinaryHeap;
pub use traits::IndexedPriorityQueue;
