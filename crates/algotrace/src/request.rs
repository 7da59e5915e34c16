//! JSON requests for every engine.
//!
//! A request names its engine in an `engine` field and carries the engine's
//! input and options in the same shape the result types serialize to:
//!
//! ```json
//! {"engine": "dijkstra", "graph": {"nodes": ["A", "B"], "adj": {"A": [{"to": "B", "weight": 1}], "B": []}}, "source": "A"}
//! {"engine": "quicksort", "input": [5, 3, 1], "options": {"order": "desc", "pivotCase": "random"}}
//! {"engine": "tree", "kind": "rbt", "ops": [{"insert": 10}, {"insert": 5}, {"delete": 10}]}
//! ```
//!
//! Tree requests replay the operations in order and return one snapshot per
//! operation.

use std::fmt;

use algotrace_forest::{AvlTree, Bst, MaxHeap, RbTree, ToGraph, TreeEvent, TreeGraph, Validity};
use algotrace_graphs::{
    dijkstra_instrumented, dsatur_instrumented, graph_metrics, Graph, GraphOptions, WeightedGraph,
};
use algotrace_sorts::{
    compare_all, heap_sort_instrumented, merge_sort_instrumented, quick_sort_instrumented,
    tree_sort_instrumented, QuickSortOptions, SortOptions,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RequestError {
    #[error("invalid request: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{op} is not supported on {kind}")]
    Unsupported { kind: TreeKind, op: &'static str },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TreeKind {
    Bst,
    Avl,
    Rbt,
    Heap,
}

impl fmt::Display for TreeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TreeKind::Bst => "bst",
            TreeKind::Avl => "avl",
            TreeKind::Rbt => "rbt",
            TreeKind::Heap => "heap",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TreeOp {
    Insert(f64),
    Delete(f64),
    ExtractMax,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "engine", rename_all = "lowercase")]
pub enum Request {
    Dijkstra {
        graph: WeightedGraph,
        source: String,
        #[serde(default)]
        options: GraphOptions,
    },
    Dsatur {
        graph: Graph,
        #[serde(default)]
        options: GraphOptions,
    },
    Metrics {
        edges: Vec<(String, String)>,
        #[serde(default)]
        directed: bool,
    },
    Quicksort {
        input: Vec<f64>,
        #[serde(default)]
        options: QuickSortOptions,
    },
    Mergesort {
        input: Vec<f64>,
        #[serde(default)]
        options: SortOptions,
    },
    Heapsort {
        input: Vec<f64>,
        #[serde(default)]
        options: SortOptions,
    },
    Treesort {
        input: Vec<f64>,
        #[serde(default)]
        options: SortOptions,
    },
    Compare {
        input: Vec<f64>,
        #[serde(default)]
        options: QuickSortOptions,
    },
    Tree {
        kind: TreeKind,
        ops: Vec<TreeOp>,
    },
}

/// State of a tree right after one replayed operation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeSnapshot {
    pub op: TreeOp,
    /// `false` for no-ops: duplicate red-black insert, missing key, empty heap.
    pub changed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extracted: Option<f64>,
    /// Edges for `bst`, `avl` and `heap` (`-1` when empty); nodes for `rbt`
    /// (`0` when empty).
    pub height: i32,
    /// In-order keys, or the backing array for a heap.
    pub keys: Vec<f64>,
    pub graph: TreeGraph,
    /// Level-order labels; red-black labels carry an `R`/`B` suffix.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub levels: Vec<Vec<String>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub events: Vec<TreeEvent<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validity: Option<Validity>,
}

struct Applied {
    changed: bool,
    extracted: Option<f64>,
}

impl Applied {
    fn changed(changed: bool) -> Self {
        Self {
            changed,
            extracted: None,
        }
    }
}

trait Replay: ToGraph {
    const KIND: TreeKind;

    fn apply(&mut self, op: TreeOp) -> Result<Applied, RequestError>;
    fn height(&self) -> i32;
    fn keys(&self) -> Vec<f64>;

    fn levels(&self) -> Vec<Vec<String>> {
        Vec::new()
    }

    fn events(&self) -> Vec<TreeEvent<f64>> {
        Vec::new()
    }

    fn validity(&self) -> Option<Validity> {
        None
    }

    fn unsupported(op: TreeOp) -> RequestError {
        let op = match op {
            TreeOp::Insert(_) => "insert",
            TreeOp::Delete(_) => "delete",
            TreeOp::ExtractMax => "extract-max",
        };
        RequestError::Unsupported {
            kind: Self::KIND,
            op,
        }
    }
}

impl Replay for Bst<f64> {
    const KIND: TreeKind = TreeKind::Bst;

    fn apply(&mut self, op: TreeOp) -> Result<Applied, RequestError> {
        match op {
            TreeOp::Insert(k) => {
                self.insert(k);
                Ok(Applied::changed(true))
            }
            TreeOp::Delete(k) => Ok(Applied::changed(self.delete(&k))),
            TreeOp::ExtractMax => Err(Self::unsupported(op)),
        }
    }

    fn height(&self) -> i32 {
        Bst::height(self)
    }

    fn keys(&self) -> Vec<f64> {
        self.inorder()
    }

    fn levels(&self) -> Vec<Vec<String>> {
        label_levels(self.bfs_levels())
    }
}

impl Replay for AvlTree<f64> {
    const KIND: TreeKind = TreeKind::Avl;

    fn apply(&mut self, op: TreeOp) -> Result<Applied, RequestError> {
        match op {
            TreeOp::Insert(k) => {
                self.insert(k);
                Ok(Applied::changed(true))
            }
            TreeOp::Delete(k) => Ok(Applied::changed(self.delete(&k))),
            TreeOp::ExtractMax => Err(Self::unsupported(op)),
        }
    }

    fn height(&self) -> i32 {
        AvlTree::height(self)
    }

    fn keys(&self) -> Vec<f64> {
        self.inorder()
    }

    fn levels(&self) -> Vec<Vec<String>> {
        label_levels(self.bfs_levels())
    }

    fn events(&self) -> Vec<TreeEvent<f64>> {
        AvlTree::events(self).to_vec()
    }

    fn validity(&self) -> Option<Validity> {
        Some(self.check_validity())
    }
}

impl Replay for RbTree<f64> {
    const KIND: TreeKind = TreeKind::Rbt;

    fn apply(&mut self, op: TreeOp) -> Result<Applied, RequestError> {
        match op {
            TreeOp::Insert(k) => Ok(Applied::changed(self.insert(k))),
            TreeOp::Delete(k) => Ok(Applied::changed(self.delete(&k))),
            TreeOp::ExtractMax => Err(Self::unsupported(op)),
        }
    }

    fn height(&self) -> i32 {
        RbTree::height(self)
    }

    fn keys(&self) -> Vec<f64> {
        self.inorder()
    }

    fn levels(&self) -> Vec<Vec<String>> {
        self.bfs_levels()
    }

    fn events(&self) -> Vec<TreeEvent<f64>> {
        RbTree::events(self).to_vec()
    }

    fn validity(&self) -> Option<Validity> {
        Some(self.check_validity())
    }
}

impl Replay for MaxHeap<f64> {
    const KIND: TreeKind = TreeKind::Heap;

    fn apply(&mut self, op: TreeOp) -> Result<Applied, RequestError> {
        match op {
            TreeOp::Insert(x) => {
                self.insert(x);
                Ok(Applied::changed(true))
            }
            TreeOp::ExtractMax => {
                let extracted = self.extract_max();
                Ok(Applied {
                    changed: extracted.is_some(),
                    extracted,
                })
            }
            TreeOp::Delete(_) => Err(Self::unsupported(op)),
        }
    }

    fn height(&self) -> i32 {
        MaxHeap::height(self)
    }

    fn keys(&self) -> Vec<f64> {
        self.as_slice().to_vec()
    }

    fn validity(&self) -> Option<Validity> {
        let problems = if self.is_valid() {
            Vec::new()
        } else {
            vec!["Heap order violated".to_string()]
        };
        Some(Validity::from_problems(problems))
    }
}

fn label_levels(levels: Vec<Vec<f64>>) -> Vec<Vec<String>> {
    levels
        .into_iter()
        .map(|level| level.iter().map(f64::to_string).collect())
        .collect()
}

fn replay<S: Replay>(mut tree: S, ops: &[TreeOp]) -> Result<Vec<TreeSnapshot>, RequestError> {
    ops.iter()
        .map(|&op| {
            let applied = tree.apply(op)?;
            Ok(TreeSnapshot {
                op,
                changed: applied.changed,
                extracted: applied.extracted,
                height: tree.height(),
                keys: tree.keys(),
                graph: tree.graph(),
                levels: tree.levels(),
                events: tree.events(),
                validity: tree.validity(),
            })
        })
        .collect()
}

/// Runs one request and returns its result as a JSON value.
///
/// Infinite distances serialize as `null`.
pub fn handle_request(request: Request) -> Result<Value, RequestError> {
    let value = match request {
        Request::Dijkstra {
            graph,
            source,
            options,
        } => serde_json::to_value(dijkstra_instrumented(&graph, &source, &options))?,
        Request::Dsatur { graph, options } => {
            serde_json::to_value(dsatur_instrumented(&graph, &options))?
        }
        Request::Metrics { edges, directed } => {
            serde_json::to_value(graph_metrics(edges, directed))?
        }
        Request::Quicksort { input, options } => {
            serde_json::to_value(quick_sort_instrumented(&input, &options))?
        }
        Request::Mergesort { input, options } => {
            serde_json::to_value(merge_sort_instrumented(&input, &options))?
        }
        Request::Heapsort { input, options } => {
            serde_json::to_value(heap_sort_instrumented(&input, &options))?
        }
        Request::Treesort { input, options } => {
            serde_json::to_value(tree_sort_instrumented(&input, &options))?
        }
        Request::Compare { input, options } => serde_json::to_value(compare_all(&input, &options))?,
        Request::Tree { kind, ops } => {
            let snapshots = match kind {
                TreeKind::Bst => replay(Bst::new(), &ops)?,
                TreeKind::Avl => replay(AvlTree::new(), &ops)?,
                TreeKind::Rbt => replay(RbTree::new(), &ops)?,
                TreeKind::Heap => replay(MaxHeap::new(), &ops)?,
            };
            serde_json::to_value(snapshots)?
        }
    };
    Ok(value)
}

/// Parses `text` as a [`Request`], runs it and serializes the result.
pub fn run_request(text: &str, pretty: bool) -> Result<String, RequestError> {
    let request: Request = serde_json::from_str(text)?;
    let value = handle_request(request)?;
    let out = if pretty {
        serde_json::to_string_pretty(&value)?
    } else {
        serde_json::to_string(&value)?
    };
    Ok(out)
}
