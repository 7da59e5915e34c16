//! Single-source shortest paths with a recorded trace.
//!
//! The frontier is a binary heap ordered by `(distance, push sequence)`, so
//! among equal tentative distances the entry pushed first is extracted first.
//! Stale entries (nodes already visited) are skipped on extraction.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use algotrace_util::{Complexity, StepLog, Stopwatch};
use indexmap::IndexMap;
use serde::Serialize;

use crate::graph::{GraphError, GraphOptions, WeightedGraph};

pub const COMPLEXITY: Complexity = Complexity::new(
    "O(E log V)",
    "Each edge is relaxed at most once and every relaxation pushes onto a binary heap.",
);

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum DijkstraStep {
    #[serde(rename_all = "camelCase")]
    SelectNode {
        node: String,
        distance: f64,
        dist: IndexMap<String, f64>,
        prev: IndexMap<String, Option<String>>,
        visited: Vec<String>,
    },
    #[serde(rename_all = "camelCase")]
    RelaxEdge {
        from: String,
        to: String,
        new_dist: f64,
        dist: IndexMap<String, f64>,
        prev: IndexMap<String, Option<String>>,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DijkstraStats {
    pub relaxations: usize,
    pub visited_count: usize,
    /// Relaxation tests, one per edge to an unvisited neighbor.
    pub comparisons: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub complexity: Option<Complexity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DijkstraResult {
    /// `f64::INFINITY` for unreachable nodes.
    pub dist: IndexMap<String, f64>,
    pub prev: IndexMap<String, Option<String>>,
    pub steps: Vec<DijkstraStep>,
    /// `true` when `max_steps` cut the trace short.
    pub truncated: bool,
    pub stats: DijkstraStats,
    pub took_ms: f64,
}

#[derive(Debug, Clone, Copy)]
struct Frontier {
    dist: f64,
    seq: u64,
    node: usize,
}

// Reversed: `BinaryHeap` is a max-heap and we want the smallest (dist, seq).
impl Ord for Frontier {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .dist
            .total_cmp(&self.dist)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Frontier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Frontier {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Frontier {}

/// Runs Dijkstra from `source`.
///
/// An unknown source is reported in `stats.error`; every distance is then
/// infinite and no steps are recorded. Weights are assumed non-negative.
pub fn dijkstra_instrumented(
    graph: &WeightedGraph,
    source: &str,
    options: &GraphOptions,
) -> DijkstraResult {
    let mut dist: IndexMap<String, f64> = graph
        .nodes
        .iter()
        .map(|v| (v.clone(), f64::INFINITY))
        .collect();
    let mut prev: IndexMap<String, Option<String>> =
        graph.nodes.iter().map(|v| (v.clone(), None)).collect();
    let mut stats = DijkstraStats::default();

    let Some(s) = dist.get_index_of(source) else {
        let err = GraphError::UnknownSource(source.to_string());
        tracing::debug!(source, "dijkstra: {err}");
        stats.error = Some(err.to_string());
        return DijkstraResult {
            dist,
            prev,
            steps: Vec::new(),
            truncated: false,
            stats,
            took_ms: 0.0,
        };
    };

    let labels: Vec<String> = dist.keys().cloned().collect();
    let mut seen = vec![false; labels.len()];
    let mut order: Vec<usize> = Vec::new();
    let mut log = StepLog::new(options.record, options.max_steps);
    let watch = Stopwatch::start();

    dist[s] = 0.0;
    let mut seq = 0u64;
    let mut frontier = BinaryHeap::new();
    frontier.push(Frontier {
        dist: 0.0,
        seq,
        node: s,
    });

    while let Some(Frontier { dist: du, node: u, .. }) = frontier.pop() {
        if seen[u] {
            continue;
        }
        seen[u] = true;
        order.push(u);
        stats.visited_count += 1;

        log.push_with(|| DijkstraStep::SelectNode {
            node: labels[u].clone(),
            distance: du,
            dist: dist.clone(),
            prev: prev.clone(),
            visited: order.iter().map(|&i| labels[i].clone()).collect(),
        });

        for edge in graph.neighbors(&labels[u]) {
            let v = dist.get_index_of(edge.to.as_str());
            if v.is_some_and(|v| seen[v]) {
                continue;
            }
            stats.comparisons += 1;
            let Some(v) = v else {
                continue;
            };
            let alt = dist[u] + edge.weight;
            if alt < dist[v] {
                dist[v] = alt;
                prev[v] = Some(labels[u].clone());
                stats.relaxations += 1;
                log.push_with(|| DijkstraStep::RelaxEdge {
                    from: labels[u].clone(),
                    to: labels[v].clone(),
                    new_dist: alt,
                    dist: dist.clone(),
                    prev: prev.clone(),
                });
                seq += 1;
                frontier.push(Frontier {
                    dist: alt,
                    seq,
                    node: v,
                });
            }
        }
    }

    let took_ms = watch.elapsed_ms();
    stats.complexity = Some(COMPLEXITY);
    tracing::debug!(
        source,
        visited = stats.visited_count,
        relaxations = stats.relaxations,
        steps = log.len(),
        took_ms,
        "dijkstra finished"
    );

    DijkstraResult {
        dist,
        prev,
        truncated: log.is_truncated(),
        steps: log.into_steps(),
        stats,
        took_ms,
    }
}

/// Walks `prev` back from `target` and returns `[source, …, target]`.
///
/// Empty when `target` is unreachable or either endpoint is missing from
/// `prev`.
pub fn reconstruct_path(
    prev: &IndexMap<String, Option<String>>,
    source: &str,
    target: &str,
) -> Vec<String> {
    if !prev.contains_key(source) || !prev.contains_key(target) {
        return Vec::new();
    }
    let mut path = Vec::new();
    let mut cur = Some(target);
    while let Some(node) = cur {
        // A well-formed predecessor map has no cycles; bail out if it does.
        if path.len() > prev.len() {
            return Vec::new();
        }
        path.push(node.to_string());
        if node == source {
            path.reverse();
            return path;
        }
        cur = prev.get(node).and_then(|p| p.as_deref());
    }
    Vec::new()
}
