//! Instrumented sorting engines.
//!
//! Every engine takes a slice, sorts a private copy and returns a
//! [`SortResult`]: the sorted array, algorithm-specific counters, the step
//! trace (one full array snapshot per step) and the elapsed time.
//!
//! | Engine | Counters |
//! |--------|----------|
//! | [`quick_sort_instrumented`] | comparisons, swaps, partitions, maxDepth |
//! | [`merge_sort_instrumented`] | comparisons, swaps, merges, maxDepth |
//! | [`heap_sort_instrumented`] | comparisons, swaps, heapifies, maxDepth |
//! | [`tree_sort_instrumented`] | inserts, traversals, comparisons, swaps, maxDepth |
//!
//! [`compare`] runs the engines without recording, optionally on worker
//! threads, and reduces each run to a [`RunSummary`].

pub mod compare;
pub mod heap_sort;
pub mod merge_sort;
pub mod order;
pub mod quick_sort;
pub mod step;
pub mod tree_sort;

pub use compare::{compare_all, run_summary, spawn_summary, RunError, RunSummary, SortAlgorithm, SummaryHandle};
pub use heap_sort::{heap_sort_instrumented, HeapSortStats};
pub use merge_sort::{merge_sort_instrumented, MergeSortStats};
pub use order::{SortOptions, SortOrder};
pub use quick_sort::{
    quick_sort_instrumented, quick_sort_instrumented_with, PivotCase, PivotComplexity,
    QuickSortOptions, QuickSortStats,
};
pub use step::{SortAction, SortResult, SortStats, SortStep};
pub use tree_sort::{tree_sort_instrumented, TreeSortStats};
