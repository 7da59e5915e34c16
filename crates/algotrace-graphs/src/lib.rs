//! Instrumented graph engines.
//!
//! [`dijkstra_instrumented`] and [`dsatur_instrumented`] run to completion
//! synchronously and return a result holding the final output, aggregate
//! counters, a step trace with full state snapshots, and the elapsed time.
//! Graphs are keyed by string labels; node order is declaration order.

pub mod dijkstra;
pub mod dsatur;
pub mod graph;
pub mod metrics;

pub use dijkstra::{
    dijkstra_instrumented, reconstruct_path, DijkstraResult, DijkstraStats, DijkstraStep,
};
pub use dsatur::{dsatur_instrumented, DsaturResult, DsaturStats, DsaturStep};
pub use graph::{Graph, GraphError, GraphOptions, WeightedEdge, WeightedGraph};
pub use metrics::{graph_metrics, GraphMetrics};
