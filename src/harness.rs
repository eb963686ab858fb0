//! Benchmark harness comparing the three Dijkstra bindings
//!
//! A run generates the shuffled benchmark graph, computes reference distances
//! with the Fibonacci heap, then times every binding over several trials.
//! Each trial's output must equal the reference exactly; the first divergence
//! aborts the run with [`Error::OutputMismatch`].

use std::time::{Duration, Instant};

use log::{debug, info};

use crate::algorithm::dijkstra::{dijkstra_binary, dijkstra_fibonacci, dijkstra_naive};
use crate::graph::generators::{generate_benchmark_graph, GeneratedGraph};
use crate::graph::{DirectedGraph, Graph};
use crate::{Error, Result};

/// A distance solver over the benchmark graph
pub type Solver = fn(&DirectedGraph<u64>, usize) -> Result<Vec<u64>>;

const DEFAULT_TRIALS: usize = 15;
const DEFAULT_SEED: u64 = 91;

/// Parameters of one benchmark scenario
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchmarkConfig {
    /// Number of vertices
    pub vertices: usize,
    /// Target out-degree of the generated graph
    pub degree: usize,
    /// Timed runs per variant; the median is reported
    pub trials: usize,
    /// Whether to include the quadratic linear-scan variant
    pub run_naive: bool,
    /// Seed for the edge and vertex shuffles
    pub seed: u64,
}

impl BenchmarkConfig {
    pub fn new(vertices: usize, degree: usize) -> Self {
        BenchmarkConfig {
            vertices,
            degree,
            trials: DEFAULT_TRIALS,
            run_naive: false,
            seed: DEFAULT_SEED,
        }
    }

    pub fn with_trials(mut self, trials: usize) -> Self {
        self.trials = trials.max(1);
        self
    }

    pub fn with_naive(mut self, run_naive: bool) -> Self {
        self.run_naive = run_naive;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// The variants this scenario times, in report order
    pub fn variants(&self) -> Vec<(&'static str, Solver)> {
        let mut variants: Vec<(&'static str, Solver)> = vec![
            ("fibonacci", dijkstra_fibonacci::<u64, DirectedGraph<u64>> as Solver),
            ("binary", dijkstra_binary::<u64, DirectedGraph<u64>> as Solver),
        ];
        if self.run_naive {
            variants.push(("naive", dijkstra_naive::<u64, DirectedGraph<u64>> as Solver));
        }
        variants
    }
}

/// Sparse-and-large, medium-degree, and dense-enough-for-the-scan scenarios
pub fn default_scenarios() -> Vec<BenchmarkConfig> {
    vec![
        BenchmarkConfig::new(1_500_000, 3),
        BenchmarkConfig::new(500_000, 20),
        BenchmarkConfig::new(5_000, 5_000).with_naive(true),
    ]
}

/// Median timing of one variant
#[derive(Debug, Clone)]
pub struct VariantTiming {
    pub name: &'static str,
    pub median: Duration,
    /// All trial durations, sorted ascending
    pub samples: Vec<Duration>,
}

/// Outcome of a full scenario
#[derive(Debug, Clone)]
pub struct BenchmarkReport {
    pub vertices: usize,
    pub edges: usize,
    pub reachable: usize,
    pub timings: Vec<VariantTiming>,
}

impl BenchmarkReport {
    pub fn timing(&self, name: &str) -> Option<&VariantTiming> {
        self.timings.iter().find(|timing| timing.name == name)
    }
}

/// First vertex where `candidate` differs from `reference`
pub fn first_difference<W: PartialEq>(reference: &[W], candidate: &[W]) -> Option<usize> {
    match reference.iter().zip(candidate).position(|(a, b)| a != b) {
        Some(vertex) => Some(vertex),
        None if reference.len() != candidate.len() => Some(reference.len().min(candidate.len())),
        None => None,
    }
}

/// Fails with [`Error::OutputMismatch`] unless both distance arrays are identical
pub fn check_agreement<W: PartialEq>(
    algorithm: &'static str,
    reference: &[W],
    candidate: &[W],
) -> Result<()> {
    match first_difference(reference, candidate) {
        Some(first_vertex) => Err(Error::OutputMismatch {
            algorithm,
            first_vertex,
        }),
        None => Ok(()),
    }
}

/// Runs `run` `trials` times, checks every output against `reference` and
/// returns the median wall-clock duration.
pub fn time_median<W, F>(
    name: &'static str,
    trials: usize,
    reference: &[W],
    mut run: F,
) -> Result<VariantTiming>
where
    W: PartialEq,
    F: FnMut() -> Result<Vec<W>>,
{
    let mut samples = Vec::with_capacity(trials.max(1));
    for trial in 0..trials.max(1) {
        let start = Instant::now();
        let output = run()?;
        let elapsed = start.elapsed();
        check_agreement(name, reference, &output)?;
        debug!("{} trial {}: {:?}", name, trial, elapsed);
        samples.push(elapsed);
    }

    samples.sort_unstable();
    let median = samples[samples.len() / 2];
    Ok(VariantTiming {
        name,
        median,
        samples,
    })
}

/// Builds the scenario's graph
pub fn prepare(config: &BenchmarkConfig) -> Result<GeneratedGraph> {
    info!(
        "generating benchmark graph: {} vertices, degree {}, seed {}",
        config.vertices, config.degree, config.seed
    );
    generate_benchmark_graph(config.vertices, config.degree, config.seed)
}

/// Times every variant of `config` on an already generated graph
pub fn measure(config: &BenchmarkConfig, generated: &GeneratedGraph) -> Result<BenchmarkReport> {
    let graph = &generated.graph;
    let reference = dijkstra_fibonacci(graph, generated.source)?;
    let reachable = reference.iter().filter(|&&d| d != u64::MAX).count();

    let mut timings = Vec::new();
    for (name, solver) in config.variants() {
        info!("timing {} over {} trials", name, config.trials);
        let timing = time_median(name, config.trials, &reference, || {
            solver(graph, generated.source)
        })?;
        info!("{}: median {:?}", name, timing.median);
        timings.push(timing);
    }

    Ok(BenchmarkReport {
        vertices: graph.vertex_count(),
        edges: graph.edge_count(),
        reachable,
        timings,
    })
}

/// Generates the graph and times every variant
pub fn run_benchmark(config: &BenchmarkConfig) -> Result<BenchmarkReport> {
    let generated = prepare(config)?;
    measure(config, &generated)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn median_of_odd_trials() {
        let reference = vec![0_u64, 1, 2];
        let timing = time_median("fixed", 5, &reference, || Ok(vec![0, 1, 2])).unwrap();
        assert_eq!(timing.samples.len(), 5);
        assert!(timing.samples.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(timing.median, timing.samples[2]);
    }

    #[test]
    fn divergence_is_fatal() {
        let reference = vec![0_u64, 1, 2];
        let mut calls = 0;
        let result = time_median("broken", 4, &reference, || {
            calls += 1;
            Ok(vec![0, 1, 3])
        });
        assert!(matches!(
            result,
            Err(Error::OutputMismatch {
                algorithm: "broken",
                first_vertex: 2
            })
        ));
        assert_eq!(calls, 1);
    }

    #[test]
    fn length_mismatch_counts_as_divergence() {
        assert_eq!(first_difference(&[1, 2, 3], &[1, 2]), Some(2));
        assert_eq!(first_difference(&[1, 2], &[1, 2]), None);
        assert!(check_agreement("short", &[1_u64], &[]).is_err());
    }

    #[test]
    fn builder_defaults() {
        let config = BenchmarkConfig::new(10, 2);
        assert_eq!(config.trials, 15);
        assert_eq!(config.seed, 91);
        assert_eq!(config.variants().len(), 2);
        let config = config.with_naive(true).with_trials(0).with_seed(5);
        assert_eq!(config.trials, 1);
        assert_eq!(config.variants().len(), 3);
        assert_eq!(default_scenarios().len(), 3);
    }
}
