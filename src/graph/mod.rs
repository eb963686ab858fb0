pub mod directed;
pub mod generators;
pub mod traits;
pub mod weight;

pub use directed::{DirectedGraph, Edge};
pub use traits::Graph;
pub use weight::Weight;
