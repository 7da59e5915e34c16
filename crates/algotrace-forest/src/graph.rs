//! Tree-to-graph projection.
//!
//! Renderers never see arena nodes. They get a [`TreeGraph`]: parent/child
//! edges, a display label per node and the root id. Ids are arena indices,
//! unique per node instance, so duplicate keys stay distinguishable.

use indexmap::IndexMap;
use serde::Serialize;

use crate::types::Node;

/// Portable node/edge view of a tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TreeGraph {
    /// `(parent_id, child_id)` pairs, left child before right child.
    pub edges: Vec<(u32, u32)>,
    /// Display label per node id, in pre-order.
    pub labels: IndexMap<u32, String>,
    pub root: Option<u32>,
}

impl TreeGraph {
    pub fn node_count(&self) -> usize {
        self.labels.len()
    }

    /// Child ids of `id` in edge order.
    pub fn children(&self, id: u32) -> impl Iterator<Item = u32> + '_ {
        self.edges
            .iter()
            .filter(move |(p, _)| *p == id)
            .map(|(_, c)| *c)
    }
}

/// Implemented by every structure a renderer can draw.
pub trait ToGraph {
    fn graph(&self) -> TreeGraph;
}

/// Walks an arena tree in pre-order and collects its edges and labels.
pub fn project<N, F>(arena: &[N], root: Option<u32>, label: F) -> TreeGraph
where
    N: Node,
    F: Fn(&N) -> String,
{
    let mut graph = TreeGraph {
        root,
        ..TreeGraph::default()
    };
    let mut stack: Vec<u32> = root.into_iter().collect();
    while let Some(i) = stack.pop() {
        let node = &arena[i as usize];
        graph.labels.insert(i, label(node));
        if let Some(l) = node.l() {
            graph.edges.push((i, l));
        }
        if let Some(r) = node.r() {
            graph.edges.push((i, r));
            stack.push(r);
        }
        if let Some(l) = node.l() {
            stack.push(l);
        }
    }
    graph
}
