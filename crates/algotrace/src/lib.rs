//! algotrace - instrumented algorithm engines for step-by-step visualizers.
//!
//! Each engine runs synchronously over a private copy of its input and
//! returns the final output together with counters and a trace of full state
//! snapshots. A renderer replays the trace; nothing here draws anything.
//!
//! - [`forest`] - BST, AVL, red-black tree, max-heap and their graph projection
//! - [`graphs`] - Dijkstra and DSATUR over string-labelled graphs
//! - [`sorts`] - QuickSort (five pivot policies), MergeSort, HeapSort, TreeSort
//! - [`request`] - JSON entry point used by the `algotrace-trace` binary

pub mod request;

pub use algotrace_forest as forest;
pub use algotrace_graphs as graphs;
pub use algotrace_sorts as sorts;
pub use algotrace_util as util;

pub use algotrace_forest::{AvlTree, Bst, MaxHeap, RbTree, ToGraph, TreeEvent, TreeGraph};
pub use algotrace_graphs::{
    dijkstra_instrumented, dsatur_instrumented, graph_metrics, reconstruct_path, Graph,
    GraphOptions, WeightedGraph,
};
pub use algotrace_sorts::{
    compare_all, heap_sort_instrumented, merge_sort_instrumented, quick_sort_instrumented,
    tree_sort_instrumented, PivotCase, QuickSortOptions, SortOptions, SortOrder,
};
pub use request::{handle_request, run_request, Request, RequestError};
