//! Step records and the result envelope shared by the sort engines.

use algotrace_util::StepLog;
use serde::Serialize;

/// What happened at one step. Serialized under an `action` tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "kebab-case")]
pub enum SortAction {
    /// Pivot picked for segment `[l, r]`, before it is moved to `r`.
    ChoosePivot {
        l: usize,
        r: usize,
        pivot: usize,
        depth: usize,
        note: String,
    },
    PartitionStart {
        l: usize,
        r: usize,
        #[serde(skip_serializing_if = "Option::is_none")]
        pivot: Option<usize>,
        #[serde(skip_serializing_if = "Option::is_none")]
        depth: Option<usize>,
        #[serde(skip_serializing_if = "Option::is_none")]
        note: Option<String>,
    },
    Compare {
        i: usize,
        j: usize,
        #[serde(skip_serializing_if = "Option::is_none")]
        pivot: Option<usize>,
        #[serde(skip_serializing_if = "Option::is_none")]
        depth: Option<usize>,
    },
    Swap {
        i: usize,
        j: usize,
    },
    PartitionEnd {
        l: usize,
        r: usize,
        #[serde(skip_serializing_if = "Option::is_none")]
        pivot: Option<usize>,
        #[serde(skip_serializing_if = "Option::is_none")]
        depth: Option<usize>,
        #[serde(skip_serializing_if = "Option::is_none")]
        note: Option<String>,
    },
    /// Working copy shown before TreeSort starts placing values.
    Init,
    Done,
}

impl SortAction {
    /// A plain scan comparison between positions `i` and `j`.
    pub fn compare(i: usize, j: usize) -> Self {
        SortAction::Compare {
            i,
            j,
            pivot: None,
            depth: None,
        }
    }
}

/// One recorded step: full array snapshot plus the action.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SortStep<T> {
    pub a: Vec<T>,
    #[serde(flatten)]
    pub action: SortAction,
}

/// Counters every engine reports, used by the comparison runner.
pub trait SortStats {
    fn comparisons(&self) -> usize;
    fn swaps(&self) -> usize;
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SortResult<T, S> {
    pub sorted: Vec<T>,
    pub stats: S,
    pub steps: Vec<SortStep<T>>,
    /// `true` when `max_steps` cut the trace short.
    pub truncated: bool,
    pub took_ms: f64,
}

/// Records a snapshot of `a` with `action`, unless the log is off or full.
pub(crate) fn record<T: Clone>(log: &mut StepLog<SortStep<T>>, a: &[T], action: SortAction) {
    log.push_with(|| SortStep {
        a: a.to_vec(),
        action,
    });
}
