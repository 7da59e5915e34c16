//! QuickSort with a Lomuto partition and five pivot policies.
//!
//! The chosen pivot is announced with a `choose-pivot` step and then moved to
//! the segment end without a step of its own. The smaller side of each
//! partition is recursed into and the larger side is looped on, which keeps
//! the recursion depth logarithmic.

use std::fmt;

use algotrace_util::{RandomSource, StepLog, Stopwatch, ThreadRandom};
use serde::{Deserialize, Serialize};

use crate::order::{SortOptions, SortOrder};
use crate::step::{record, SortAction, SortResult, SortStats, SortStep};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PivotCase {
    First,
    Middle,
    #[default]
    Last,
    MedianOfThree,
    Random,
}

/// Static complexity notes for one pivot policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PivotComplexity {
    pub id: &'static str,
    pub label: &'static str,
    pub best: &'static str,
    pub average: &'static str,
    pub worst: &'static str,
    pub notes: &'static str,
}

impl PivotCase {
    pub const ALL: [PivotCase; 5] = [
        PivotCase::First,
        PivotCase::Middle,
        PivotCase::Last,
        PivotCase::MedianOfThree,
        PivotCase::Random,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PivotCase::First => "first",
            PivotCase::Middle => "middle",
            PivotCase::Last => "last",
            PivotCase::MedianOfThree => "median-of-three",
            PivotCase::Random => "random",
        }
    }

    pub fn complexity(self) -> PivotComplexity {
        let (label, average, notes) = match self {
            PivotCase::First => (
                "Pivot at start (first element)",
                "O(n log n)",
                "Sorted and reverse-sorted inputs split into segments of size 0 and n-1, giving O(n²).",
            ),
            PivotCase::Middle => (
                "Pivot in the middle index",
                "O(n log n)",
                "Balanced on sorted inputs. Crafted inputs can still force O(n²).",
            ),
            PivotCase::Last => (
                "Pivot at end (last element)",
                "O(n log n)",
                "Degrades to O(n²) on sorted inputs, like the first-element pivot.",
            ),
            PivotCase::MedianOfThree => (
                "Median-of-three (first / middle / last)",
                "O(n log n)",
                "The median of three samples makes badly unbalanced splits much rarer.",
            ),
            PivotCase::Random => (
                "Random pivot index",
                "O(n log n) (expected)",
                "A uniform index in [l, r] gives expected O(n log n) on every input.",
            ),
        };
        PivotComplexity {
            id: self.as_str(),
            label,
            best: "O(n log n)",
            average,
            worst: "O(n²)",
            notes,
        }
    }
}

impl fmt::Display for PivotCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QuickSortOptions {
    #[serde(flatten)]
    pub base: SortOptions,
    pub pivot_case: PivotCase,
}

impl QuickSortOptions {
    pub fn new(base: SortOptions, pivot_case: PivotCase) -> Self {
        Self { base, pivot_case }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickSortStats {
    pub comparisons: usize,
    pub swaps: usize,
    pub partitions: usize,
    pub max_depth: usize,
    pub pivot_case: PivotCase,
    pub complexity: Option<PivotComplexity>,
}

impl QuickSortStats {
    fn new(pivot_case: PivotCase) -> Self {
        Self {
            comparisons: 0,
            swaps: 0,
            partitions: 0,
            max_depth: 0,
            pivot_case,
            complexity: None,
        }
    }
}

impl SortStats for QuickSortStats {
    fn comparisons(&self) -> usize {
        self.comparisons
    }

    fn swaps(&self) -> usize {
        self.swaps
    }
}

struct QuickSort<'r, T> {
    a: Vec<T>,
    order: SortOrder,
    case: PivotCase,
    log: StepLog<SortStep<T>>,
    stats: QuickSortStats,
    rng: &'r mut dyn RandomSource,
}

impl<T> QuickSort<'_, T>
where
    T: Copy + PartialOrd + fmt::Debug,
{
    fn push(&mut self, action: SortAction) {
        record(&mut self.log, &self.a, action);
    }

    fn swap(&mut self, i: usize, j: usize, silent: bool) {
        if i == j {
            return;
        }
        self.a.swap(i, j);
        self.stats.swaps += 1;
        if !silent {
            self.push(SortAction::Swap { i, j });
        }
    }

    fn choose_pivot(&mut self, l: usize, r: usize) -> usize {
        let m = l + (r - l) / 2;
        match self.case {
            PivotCase::First => l,
            PivotCase::Middle => m,
            PivotCase::Last => r,
            PivotCase::Random => self.rng.index_in(l, r),
            PivotCase::MedianOfThree => {
                let (a, b, c) = (self.a[l], self.a[m], self.a[r]);
                if (a <= b && b <= c) || (c <= b && b <= a) {
                    m
                } else if (b <= a && a <= c) || (c <= a && a <= b) {
                    l
                } else {
                    r
                }
            }
        }
    }

    fn partition(&mut self, l: usize, r: usize, depth: usize) -> usize {
        let chosen = self.choose_pivot(l, r);
        let pivot_value = self.a[chosen];
        let case = self.case;
        self.push(SortAction::ChoosePivot {
            l,
            r,
            pivot: chosen,
            depth,
            note: format!("pivotCase={case}, chosenPivotIndex={chosen}, pivotValue={pivot_value:?}"),
        });

        self.swap(chosen, r, true);
        self.push(SortAction::PartitionStart {
            l,
            r,
            pivot: Some(r),
            depth: Some(depth),
            note: Some(format!(
                "pivotCase={case}, pivotIndexAtEnd={r}, pivotValue={pivot_value:?}"
            )),
        });

        let mut store = l;
        for j in l..r {
            self.stats.comparisons += 1;
            self.push(SortAction::Compare {
                i: j,
                j: r,
                pivot: Some(r),
                depth: Some(depth),
            });
            if self.order.in_order(&self.a[j], &pivot_value) {
                self.swap(store, j, false);
                store += 1;
            }
        }
        self.swap(store, r, false);

        self.push(SortAction::PartitionEnd {
            l,
            r,
            pivot: Some(store),
            depth: Some(depth),
            note: Some(format!("pivotCase={case}, pivotFinalIndex={store}")),
        });
        store
    }

    fn sort(&mut self, mut l: usize, mut r: usize, mut depth: usize) {
        while l < r {
            self.stats.partitions += 1;
            self.stats.max_depth = self.stats.max_depth.max(depth);

            let p = self.partition(l, r, depth);
            let left_size = p as isize - 1 - l as isize;
            let right_size = r as isize - (p as isize + 1);

            if left_size < right_size {
                if l + 1 < p {
                    self.sort(l, p - 1, depth + 1);
                }
                l = p + 1;
            } else {
                if p + 1 < r {
                    self.sort(p + 1, r, depth + 1);
                }
                // p == l == 0 here only when the loop is about to end anyway.
                r = p.saturating_sub(1);
            }
            depth += 1;
        }
    }
}

/// QuickSort with the thread-local RNG for the `random` pivot.
pub fn quick_sort_instrumented<T>(
    input: &[T],
    options: &QuickSortOptions,
) -> SortResult<T, QuickSortStats>
where
    T: Copy + PartialOrd + fmt::Debug,
{
    quick_sort_instrumented_with(input, options, &mut ThreadRandom)
}

/// QuickSort drawing `random` pivots from `rng`.
pub fn quick_sort_instrumented_with<T>(
    input: &[T],
    options: &QuickSortOptions,
    rng: &mut dyn RandomSource,
) -> SortResult<T, QuickSortStats>
where
    T: Copy + PartialOrd + fmt::Debug,
{
    let mut qs = QuickSort {
        a: input.to_vec(),
        order: options.base.order,
        case: options.pivot_case,
        log: StepLog::new(options.base.record, options.base.max_steps),
        stats: QuickSortStats::new(options.pivot_case),
        rng,
    };

    let watch = Stopwatch::start();
    if qs.a.len() > 1 {
        let last = qs.a.len() - 1;
        qs.sort(0, last, 1);
    }
    let took_ms = watch.elapsed_ms();
    qs.push(SortAction::Done);
    qs.stats.complexity = Some(options.pivot_case.complexity());

    tracing::debug!(
        n = input.len(),
        pivot = %options.pivot_case,
        comparisons = qs.stats.comparisons,
        swaps = qs.stats.swaps,
        steps = qs.log.len(),
        took_ms,
        "quick sort finished"
    );

    SortResult {
        sorted: qs.a,
        stats: qs.stats,
        truncated: qs.log.is_truncated(),
        steps: qs.log.into_steps(),
        took_ms,
    }
}
