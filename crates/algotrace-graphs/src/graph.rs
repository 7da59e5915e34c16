use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum GraphError {
    #[error("Source node not in graph")]
    UnknownSource(String),
    #[error("Unknown node: {0}")]
    UnknownNode(String),
    #[error("Edge weight must be non-negative ({from} -> {to}: {weight})")]
    NegativeWeight { from: String, to: String, weight: f64 },
}

/// Options shared by the graph engines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GraphOptions {
    /// Store step records.
    pub record: bool,
    /// Hard cap on stored steps. DSATUR also caps its selection loop with it.
    pub max_steps: usize,
}

impl Default for GraphOptions {
    fn default() -> Self {
        Self {
            record: true,
            max_steps: 5000,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightedEdge {
    pub to: String,
    pub weight: f64,
}

/// Weighted adjacency list. Undirected edges are stored under both endpoints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeightedGraph {
    pub nodes: Vec<String>,
    pub adj: IndexMap<String, Vec<WeightedEdge>>,
}

impl WeightedGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_nodes<I, S>(nodes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut graph = Self::new();
        for node in nodes {
            graph.add_node(node);
        }
        graph
    }

    /// Builds a graph from `(source, target, weight)` triples, declaring nodes
    /// in first-seen order.
    pub fn from_edges<I, S>(edges: I, directed: bool) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = (S, S, f64)>,
        S: AsRef<str>,
    {
        let mut graph = Self::new();
        for (from, to, weight) in edges {
            let (from, to) = (from.as_ref(), to.as_ref());
            graph.add_node(from);
            graph.add_node(to);
            graph.add_edge(from, to, weight, directed)?;
        }
        Ok(graph)
    }

    /// Declares `node`. Returns `false` if it already existed.
    pub fn add_node(&mut self, node: impl Into<String>) -> bool {
        let node = node.into();
        if self.adj.contains_key(&node) {
            return false;
        }
        self.nodes.push(node.clone());
        self.adj.insert(node, Vec::new());
        true
    }

    /// Adds an edge between two declared nodes.
    pub fn add_edge(
        &mut self,
        from: &str,
        to: &str,
        weight: f64,
        directed: bool,
    ) -> Result<(), GraphError> {
        if weight < 0.0 || weight.is_nan() {
            return Err(GraphError::NegativeWeight {
                from: from.to_string(),
                to: to.to_string(),
                weight,
            });
        }
        for node in [from, to] {
            if !self.adj.contains_key(node) {
                return Err(GraphError::UnknownNode(node.to_string()));
            }
        }
        if let Some(list) = self.adj.get_mut(from) {
            list.push(WeightedEdge {
                to: to.to_string(),
                weight,
            });
        }
        if !directed {
            if let Some(list) = self.adj.get_mut(to) {
                list.push(WeightedEdge {
                    to: from.to_string(),
                    weight,
                });
            }
        }
        Ok(())
    }

    pub fn neighbors(&self, node: &str) -> &[WeightedEdge] {
        self.adj.get(node).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn contains(&self, node: &str) -> bool {
        self.adj.contains_key(node)
    }
}

/// Unweighted adjacency list, always treated as undirected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Graph {
    pub nodes: Vec<String>,
    pub adj: IndexMap<String, Vec<String>>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_nodes<I, S>(nodes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut graph = Self::new();
        for node in nodes {
            graph.add_node(node);
        }
        graph
    }

    pub fn from_edges<I, S>(edges: I) -> Self
    where
        I: IntoIterator<Item = (S, S)>,
        S: AsRef<str>,
    {
        let mut graph = Self::new();
        for (a, b) in edges {
            let (a, b) = (a.as_ref(), b.as_ref());
            graph.add_node(a);
            graph.add_node(b);
            graph.link(a, b);
        }
        graph
    }

    pub fn add_node(&mut self, node: impl Into<String>) -> bool {
        let node = node.into();
        if self.adj.contains_key(&node) {
            return false;
        }
        self.nodes.push(node.clone());
        self.adj.insert(node, Vec::new());
        true
    }

    /// Links two declared nodes in both directions.
    pub fn add_edge(&mut self, a: &str, b: &str) -> Result<(), GraphError> {
        for node in [a, b] {
            if !self.adj.contains_key(node) {
                return Err(GraphError::UnknownNode(node.to_string()));
            }
        }
        self.link(a, b);
        Ok(())
    }

    fn link(&mut self, a: &str, b: &str) {
        if let Some(list) = self.adj.get_mut(a) {
            list.push(b.to_string());
        }
        if let Some(list) = self.adj.get_mut(b) {
            list.push(a.to_string());
        }
    }

    pub fn neighbors(&self, node: &str) -> &[String] {
        self.adj.get(node).map(Vec::as_slice).unwrap_or_default()
    }
}
