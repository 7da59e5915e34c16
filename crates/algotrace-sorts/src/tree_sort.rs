//! TreeSort over an unbalanced BST.
//!
//! Values are inserted into a [`Bst`], collected in order, and then placed
//! into a working copy of the input one position at a time by scanning for the
//! next value and swapping it into place. The BST itself is never shown; the
//! trace is the working copy from an `init` step onwards.

use algotrace_forest::Bst;
use algotrace_util::{StepLog, Stopwatch};
use serde::Serialize;

use crate::order::{SortOptions, SortOrder};
use crate::step::{record, SortAction, SortResult, SortStats};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeSortStats {
    pub inserts: usize,
    /// Nodes visited by the in-order walk.
    pub traversals: usize,
    /// BST descent steps plus placement scan comparisons.
    pub comparisons: usize,
    pub swaps: usize,
    /// Deepest insertion, 1-based.
    pub max_depth: usize,
}

impl SortStats for TreeSortStats {
    fn comparisons(&self) -> usize {
        self.comparisons
    }

    fn swaps(&self) -> usize {
        self.swaps
    }
}

pub fn tree_sort_instrumented<T>(input: &[T], options: &SortOptions) -> SortResult<T, TreeSortStats>
where
    T: Copy + PartialOrd,
{
    let mut stats = TreeSortStats::default();
    let mut log = StepLog::new(options.record, options.max_steps);
    let watch = Stopwatch::start();

    let mut tree = Bst::new();
    for &v in input {
        let depth = tree.insert(v);
        stats.comparisons += depth;
        stats.inserts += 1;
        stats.max_depth = stats.max_depth.max(depth);
    }

    let mut vis = input.to_vec();
    record(&mut log, &vis, SortAction::Init);

    let mut seq = tree.inorder();
    stats.traversals = seq.len();
    if options.order == SortOrder::Desc {
        seq.reverse();
    }

    for (k, target) in seq.into_iter().enumerate() {
        let mut pos = None;
        for i in k..vis.len() {
            stats.comparisons += 1;
            record(&mut log, &vis, SortAction::compare(i, k));
            if vis[i] == target {
                pos = Some(i);
                break;
            }
        }
        match pos {
            Some(p) if p != k => {
                vis.swap(p, k);
                stats.swaps += 1;
                record(&mut log, &vis, SortAction::Swap { i: k, j: p });
            }
            Some(_) => record(&mut log, &vis, SortAction::compare(k, k)),
            None => {}
        }
    }

    record(&mut log, &vis, SortAction::Done);
    let took_ms = watch.elapsed_ms();

    tracing::debug!(
        n = input.len(),
        comparisons = stats.comparisons,
        swaps = stats.swaps,
        steps = log.len(),
        took_ms,
        "tree sort finished"
    );

    SortResult {
        sorted: vis,
        stats,
        truncated: log.is_truncated(),
        steps: log.into_steps(),
        took_ms,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_then_done() {
        let res = tree_sort_instrumented(&[2, 1], &SortOptions::default());
        assert_eq!(res.steps.first().map(|s| &s.action), Some(&SortAction::Init));
        assert_eq!(res.steps.first().map(|s| s.a.clone()), Some(vec![2, 1]));
        assert_eq!(res.steps.last().map(|s| &s.action), Some(&SortAction::Done));
    }

    #[test]
    fn counts_descents_and_scans() {
        let res = tree_sort_instrumented(&[2, 1, 3], &SortOptions::default());
        assert_eq!(res.sorted, vec![1, 2, 3]);
        assert_eq!(res.stats.inserts, 3);
        assert_eq!(res.stats.traversals, 3);
        assert_eq!(res.stats.max_depth, 2);
        // Descents 1 + 2 + 2, scans 2 + 1 + 1.
        assert_eq!(res.stats.comparisons, 9);
        assert_eq!(res.stats.swaps, 1);
    }

    #[test]
    fn desc_reverses_inorder() {
        let res = tree_sort_instrumented(&[2.5, -1.0, 7.0], &SortOptions::with_order(SortOrder::Desc));
        assert_eq!(res.sorted, vec![7.0, 2.5, -1.0]);
    }
}
