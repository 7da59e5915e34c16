//! Top-down MergeSort that moves values by swapping.
//!
//! A merge decides the next value from the heads of the two runs, then scans
//! `[k, r]` for it and swaps it into position `k`. Each placement therefore
//! shows up as scan `compare` steps followed by at most one `swap`.

use algotrace_util::{StepLog, Stopwatch};
use serde::Serialize;

use crate::order::{SortOptions, SortOrder};
use crate::step::{record, SortAction, SortResult, SortStats, SortStep};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MergeSortStats {
    /// Head comparisons plus scan comparisons.
    pub comparisons: usize,
    pub swaps: usize,
    pub merges: usize,
    pub max_depth: usize,
}

impl SortStats for MergeSortStats {
    fn comparisons(&self) -> usize {
        self.comparisons
    }

    fn swaps(&self) -> usize {
        self.swaps
    }
}

struct MergeSort<T> {
    a: Vec<T>,
    order: SortOrder,
    log: StepLog<SortStep<T>>,
    stats: MergeSortStats,
}

impl<T> MergeSort<T>
where
    T: Copy + PartialOrd,
{
    fn push(&mut self, action: SortAction) {
        record(&mut self.log, &self.a, action);
    }

    fn swap(&mut self, i: usize, j: usize) {
        if i == j {
            return;
        }
        self.a.swap(i, j);
        self.stats.swaps += 1;
        self.push(SortAction::Swap { i, j });
    }

    /// Moves the first occurrence of `target` in `[k, r]` to `k`.
    fn place_at(&mut self, target: T, k: usize, r: usize) {
        for s in k..=r {
            self.stats.comparisons += 1;
            self.push(SortAction::compare(s, k));
            if self.a[s] == target {
                self.swap(k, s);
                return;
            }
        }
    }

    fn merge(&mut self, l: usize, m: usize, r: usize, depth: usize) {
        let left = self.a[l..=m].to_vec();
        let right = self.a[m + 1..=r].to_vec();
        self.stats.merges += 1;
        self.stats.max_depth = self.stats.max_depth.max(depth);
        self.push(SortAction::PartitionStart {
            l,
            r,
            pivot: None,
            depth: None,
            note: Some("merge".to_string()),
        });

        let (mut i, mut j, mut k) = (0, 0, l);
        while i < left.len() && j < right.len() {
            self.stats.comparisons += 1;
            let target = if self.order.in_order(&left[i], &right[j]) {
                i += 1;
                left[i - 1]
            } else {
                j += 1;
                right[j - 1]
            };
            self.place_at(target, k, r);
            k += 1;
        }
        for &target in left[i..].iter().chain(&right[j..]) {
            self.place_at(target, k, r);
            k += 1;
        }

        self.push(SortAction::PartitionEnd {
            l,
            r,
            pivot: None,
            depth: None,
            note: None,
        });
    }

    fn sort(&mut self, l: usize, r: usize, depth: usize) {
        if l >= r {
            return;
        }
        let m = l + (r - l) / 2;
        self.sort(l, m, depth + 1);
        self.sort(m + 1, r, depth + 1);
        self.merge(l, m, r, depth + 1);
    }
}

pub fn merge_sort_instrumented<T>(input: &[T], options: &SortOptions) -> SortResult<T, MergeSortStats>
where
    T: Copy + PartialOrd,
{
    let mut ms = MergeSort {
        a: input.to_vec(),
        order: options.order,
        log: StepLog::new(options.record, options.max_steps),
        stats: MergeSortStats::default(),
    };

    let watch = Stopwatch::start();
    if ms.a.len() > 1 {
        let last = ms.a.len() - 1;
        ms.sort(0, last, 1);
    }
    let took_ms = watch.elapsed_ms();
    ms.push(SortAction::Done);

    tracing::debug!(
        n = input.len(),
        comparisons = ms.stats.comparisons,
        swaps = ms.stats.swaps,
        steps = ms.log.len(),
        took_ms,
        "merge sort finished"
    );

    SortResult {
        sorted: ms.a,
        stats: ms.stats,
        truncated: ms.log.is_truncated(),
        steps: ms.log.into_steps(),
        took_ms,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pair_merge_counts() {
        let res = merge_sort_instrumented(&[2, 1], &SortOptions::default());
        assert_eq!(res.sorted, vec![1, 2]);
        // One head comparison, a two-slot scan for 1, a one-slot scan for 2.
        assert_eq!(res.stats.comparisons, 4);
        assert_eq!(res.stats.swaps, 1);
        assert_eq!(res.stats.merges, 1);
        assert_eq!(res.stats.max_depth, 2);
    }

    #[test]
    fn merge_is_bracketed() {
        let res = merge_sort_instrumented(&[2, 1], &SortOptions::default());
        let actions: Vec<&SortAction> = res.steps.iter().map(|s| &s.action).collect();
        assert!(matches!(actions[0], SortAction::PartitionStart { note: Some(n), .. } if n == "merge"));
        assert!(matches!(actions[actions.len() - 2], SortAction::PartitionEnd { .. }));
        assert_eq!(actions[actions.len() - 1], &SortAction::Done);
    }
}
