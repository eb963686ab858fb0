use fib_sssp::algorithm::dijkstra::{BinaryHeapDijkstra, FibonacciDijkstra, NaiveDijkstra};
use fib_sssp::graph::Graph;
use fib_sssp::{DirectedGraph, ShortestPathAlgorithm};
use ordered_float::OrderedFloat;

type Cost = OrderedFloat<f64>;

fn main() -> fib_sssp::Result<()> {
    env_logger::init();

    // Create a simple directed graph
    let mut graph = DirectedGraph::new();
    for _ in 0..6 {
        graph.add_vertex();
    }

    graph.add_edge(0, 1, OrderedFloat(10.0))?;
    graph.add_edge(0, 2, OrderedFloat(5.0))?;
    graph.add_edge(1, 3, OrderedFloat(1.0))?;
    graph.add_edge(2, 1, OrderedFloat(3.0))?;
    graph.add_edge(2, 3, OrderedFloat(9.0))?;
    graph.add_edge(2, 4, OrderedFloat(2.0))?;
    graph.add_edge(3, 4, OrderedFloat(4.0))?;
    graph.add_edge(4, 0, OrderedFloat(7.0))?;
    graph.add_edge(4, 3, OrderedFloat(6.0))?;
    // vertex 5 has no incoming edges

    let source = 0;
    println!("Graph has {} vertices and {} edges", graph.vertex_count(), graph.edge_count());

    let algorithms: [&dyn ShortestPathAlgorithm<Cost, DirectedGraph<Cost>>; 3] = [
        &FibonacciDijkstra::<Cost>::new(),
        &BinaryHeapDijkstra::<Cost>::new(),
        &NaiveDijkstra::<Cost>::new(),
    ];

    for algorithm in algorithms {
        let result = algorithm.compute_shortest_paths(&graph, source)?;
        println!("\n{} results:", algorithm.name());
        for v in 0..graph.vertex_count() {
            match (result.distance(v), algorithm.get_path(&result, v)) {
                (Some(dist), Some(path)) => {
                    println!("Vertex {}: distance = {:.1}, path = {:?}", v, dist.into_inner(), path)
                }
                _ => println!("Vertex {}: unreachable", v),
            }
        }
    }

    Ok(())
}
