//! Side-by-side runs of the four sorts.
//!
//! A run here records no steps; it keeps only elapsed time, comparisons and
//! swaps. [`spawn_summary`] moves a run onto its own thread and hands the
//! summary back through a one-shot channel.

use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::mpsc::{self, Receiver};
use std::thread;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::heap_sort::heap_sort_instrumented;
use crate::merge_sort::merge_sort_instrumented;
use crate::quick_sort::{quick_sort_instrumented, QuickSortOptions};
use crate::step::{SortResult, SortStats};
use crate::tree_sort::tree_sort_instrumented;

/// Smallest reported time, so a chart axis never collapses to zero.
pub const MIN_TIME_MS: f64 = 0.0001;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortAlgorithm {
    QuickSort,
    MergeSort,
    HeapSort,
    TreeSort,
}

impl SortAlgorithm {
    pub const ALL: [SortAlgorithm; 4] = [
        SortAlgorithm::QuickSort,
        SortAlgorithm::MergeSort,
        SortAlgorithm::HeapSort,
        SortAlgorithm::TreeSort,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SortAlgorithm::QuickSort => "quicksort",
            SortAlgorithm::MergeSort => "mergesort",
            SortAlgorithm::HeapSort => "heapsort",
            SortAlgorithm::TreeSort => "treesort",
        }
    }
}

impl fmt::Display for SortAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RunError {
    #[error("{algo} worker panicked: {message}")]
    WorkerPanicked { algo: SortAlgorithm, message: String },
    #[error("{0} worker exited without a result")]
    Disconnected(SortAlgorithm),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunSummary {
    pub algo: SortAlgorithm,
    pub time_ms: f64,
    pub comparisons: usize,
    pub swaps: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RunSummary {
    fn from_result<T, S: SortStats>(algo: SortAlgorithm, res: &SortResult<T, S>) -> Self {
        Self {
            algo,
            time_ms: res.took_ms.max(MIN_TIME_MS),
            comparisons: res.stats.comparisons(),
            swaps: res.stats.swaps(),
            error: None,
        }
    }

    fn failed(algo: SortAlgorithm, err: &RunError) -> Self {
        Self {
            algo,
            time_ms: MIN_TIME_MS,
            comparisons: 0,
            swaps: 0,
            error: Some(err.to_string()),
        }
    }
}

/// Runs `algo` on a copy of `input` without recording steps.
///
/// `options.pivot_case` only matters for QuickSort.
pub fn run_summary<T>(algo: SortAlgorithm, input: &[T], options: &QuickSortOptions) -> RunSummary
where
    T: Copy + PartialOrd + fmt::Debug,
{
    let base = options.base.silent();
    match algo {
        SortAlgorithm::QuickSort => {
            let opts = QuickSortOptions::new(base, options.pivot_case);
            RunSummary::from_result(algo, &quick_sort_instrumented(input, &opts))
        }
        SortAlgorithm::MergeSort => RunSummary::from_result(algo, &merge_sort_instrumented(input, &base)),
        SortAlgorithm::HeapSort => RunSummary::from_result(algo, &heap_sort_instrumented(input, &base)),
        SortAlgorithm::TreeSort => RunSummary::from_result(algo, &tree_sort_instrumented(input, &base)),
    }
}

/// Receiving end of a run dispatched with [`spawn_summary`].
#[derive(Debug)]
pub struct SummaryHandle {
    algo: SortAlgorithm,
    rx: Receiver<RunSummary>,
}

impl SummaryHandle {
    pub fn algo(&self) -> SortAlgorithm {
        self.algo
    }

    /// Blocks until the worker reports.
    pub fn wait(self) -> Result<RunSummary, RunError> {
        self.rx.recv().map_err(|_| RunError::Disconnected(self.algo))
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

/// Runs [`run_summary`] on a new thread. A panic inside the run comes back as
/// a summary whose `error` is set.
pub fn spawn_summary<T>(algo: SortAlgorithm, input: Vec<T>, options: QuickSortOptions) -> SummaryHandle
where
    T: Copy + PartialOrd + fmt::Debug + Send + 'static,
{
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| run_summary(algo, &input, &options)));
        let summary = outcome.unwrap_or_else(|payload| {
            let err = RunError::WorkerPanicked {
                algo,
                message: panic_message(payload.as_ref()),
            };
            tracing::warn!(%algo, "sort worker failed: {err}");
            RunSummary::failed(algo, &err)
        });
        // The handle may have been dropped; nobody is left to tell.
        let _ = tx.send(summary);
    });
    SummaryHandle { algo, rx }
}

/// Runs all four sorts on worker threads over copies of `input` and returns
/// their summaries in [`SortAlgorithm::ALL`] order.
pub fn compare_all<T>(input: &[T], options: &QuickSortOptions) -> Vec<RunSummary>
where
    T: Copy + PartialOrd + fmt::Debug + Send + 'static,
{
    let handles: Vec<SummaryHandle> = SortAlgorithm::ALL
        .into_iter()
        .map(|algo| spawn_summary(algo, input.to_vec(), *options))
        .collect();
    handles
        .into_iter()
        .map(|h| {
            let algo = h.algo();
            h.wait().unwrap_or_else(|err| RunSummary::failed(algo, &err))
        })
        .collect()
}
