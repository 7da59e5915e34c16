//! DSATUR greedy coloring with a recorded trace.
//!
//! Each round picks the uncolored node with the most distinct neighbor colors
//! (its saturation), breaking ties by degree and then by declaration order,
//! and gives it the smallest color no colored neighbor uses.

use std::collections::BTreeSet;

use algotrace_util::{Complexity, StepLog, Stopwatch};
use indexmap::IndexMap;
use serde::Serialize;

use crate::graph::{Graph, GraphOptions};

pub const COMPLEXITY: Complexity = Complexity::new(
    "O(V^2)",
    "Every round scans all uncolored vertices for the most saturated one.",
);

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum DsaturStep {
    #[serde(rename_all = "camelCase")]
    AssignColor {
        node: String,
        color_index: usize,
        color: IndexMap<String, Option<usize>>,
        saturation: IndexMap<String, usize>,
        degree: IndexMap<String, usize>,
    },
    #[serde(rename_all = "camelCase")]
    UpdateSaturation {
        node: String,
        old_value: usize,
        new_value: usize,
        saturation: IndexMap<String, usize>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DsaturStats {
    pub colored_count: usize,
    /// `-1` when nothing was colored.
    pub max_color_index: i64,
    /// Selections where saturation tied and degree decided.
    pub tie_breaks: usize,
    pub colors_used: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub complexity: Option<Complexity>,
}

impl Default for DsaturStats {
    fn default() -> Self {
        Self {
            colored_count: 0,
            max_color_index: -1,
            tie_breaks: 0,
            colors_used: 0,
            complexity: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DsaturResult {
    /// `None` for nodes left uncolored (only possible when the loop cap hits).
    pub color: IndexMap<String, Option<usize>>,
    pub saturation: IndexMap<String, usize>,
    pub degree: IndexMap<String, usize>,
    pub steps: Vec<DsaturStep>,
    /// `true` when `max_steps` cut the trace short.
    pub truncated: bool,
    pub stats: DsaturStats,
    pub took_ms: f64,
}

/// Picks the next node to color, counting degree tie-breaks into `tie_breaks`.
fn select(
    color: &IndexMap<String, Option<usize>>,
    saturation: &IndexMap<String, usize>,
    degree: &IndexMap<String, usize>,
    tie_breaks: &mut usize,
) -> Option<usize> {
    let mut best: Option<usize> = None;
    for i in (0..color.len()).filter(|&i| color[i].is_none()) {
        let Some(b) = best else {
            best = Some(i);
            continue;
        };
        if saturation[i] > saturation[b] {
            best = Some(i);
        } else if saturation[i] == saturation[b] && degree[i] != degree[b] {
            *tie_breaks += 1;
            if degree[i] > degree[b] {
                best = Some(i);
            }
        }
    }
    best
}

/// Colors `graph` with DSATUR.
///
/// Neighbor labels that are not declared nodes are ignored for coloring and
/// saturation but still count toward degree.
pub fn dsatur_instrumented(graph: &Graph, options: &GraphOptions) -> DsaturResult {
    let mut color: IndexMap<String, Option<usize>> =
        graph.nodes.iter().map(|v| (v.clone(), None)).collect();
    let mut saturation: IndexMap<String, usize> =
        graph.nodes.iter().map(|v| (v.clone(), 0)).collect();
    let degree: IndexMap<String, usize> = graph
        .nodes
        .iter()
        .map(|v| (v.clone(), graph.neighbors(v).len()))
        .collect();

    let mut stats = DsaturStats::default();
    let mut log = StepLog::new(options.record, options.max_steps);
    let watch = Stopwatch::start();

    for _ in 0..options.max_steps {
        let Some(v) = select(&color, &saturation, &degree, &mut stats.tie_breaks) else {
            break;
        };
        let label = color.get_index(v).map(|(k, _)| k.clone()).unwrap_or_default();
        let neighbors = graph.neighbors(&label);

        let taken: BTreeSet<usize> = neighbors
            .iter()
            .filter_map(|n| color.get(n).copied().flatten())
            .collect();
        let c = (0..).find(|c| !taken.contains(c)).unwrap_or(0);

        color[v] = Some(c);
        stats.colored_count += 1;
        stats.max_color_index = stats.max_color_index.max(c as i64);
        log.push_with(|| DsaturStep::AssignColor {
            node: label.clone(),
            color_index: c,
            color: color.clone(),
            saturation: saturation.clone(),
            degree: degree.clone(),
        });

        for n in neighbors {
            let Some(ni) = color.get_index_of(n.as_str()) else {
                continue;
            };
            if color[ni].is_some() {
                continue;
            }
            let new_value = graph
                .neighbors(n)
                .iter()
                .filter_map(|x| color.get(x).copied().flatten())
                .collect::<BTreeSet<usize>>()
                .len();
            let old_value = saturation[ni];
            if new_value != old_value {
                saturation[ni] = new_value;
                log.push_with(|| DsaturStep::UpdateSaturation {
                    node: n.clone(),
                    old_value,
                    new_value,
                    saturation: saturation.clone(),
                });
            }
        }
    }

    let took_ms = watch.elapsed_ms();
    stats.colors_used = (stats.max_color_index + 1) as usize;
    stats.complexity = Some(COMPLEXITY);
    tracing::debug!(
        nodes = graph.nodes.len(),
        colors = stats.colors_used,
        tie_breaks = stats.tie_breaks,
        steps = log.len(),
        took_ms,
        "dsatur finished"
    );

    DsaturResult {
        color,
        saturation,
        degree,
        truncated: log.is_truncated(),
        steps: log.into_steps(),
        stats,
        took_ms,
    }
}
