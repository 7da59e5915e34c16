//! Capped, append-only step recording.
//!
//! Every engine funnels its trace through a [`StepLog`]. Once `max_steps`
//! records exist, further pushes are dropped silently (with one `warn!`
//! event) while the algorithm itself keeps running to completion.

/// Append-only step recorder.
#[derive(Debug, Clone)]
pub struct StepLog<S> {
    steps: Vec<S>,
    record: bool,
    max_steps: usize,
    dropped: usize,
}

impl<S> StepLog<S> {
    pub fn new(record: bool, max_steps: usize) -> Self {
        Self {
            steps: Vec::new(),
            record,
            max_steps,
            dropped: 0,
        }
    }

    /// A log that never records anything.
    pub fn disabled() -> Self {
        Self::new(false, 0)
    }

    pub fn push(&mut self, step: S) {
        self.push_with(|| step);
    }

    /// Pushes the step built by `make`, calling it only when the step will be
    /// kept. Snapshots are full copies, so skipping the closure matters.
    pub fn push_with<F>(&mut self, make: F)
    where
        F: FnOnce() -> S,
    {
        if !self.record {
            return;
        }
        if self.steps.len() >= self.max_steps {
            if self.dropped == 0 {
                tracing::warn!(max_steps = self.max_steps, "step log full, dropping further steps");
            }
            self.dropped += 1;
            return;
        }
        self.steps.push(make());
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// `true` once the cap has discarded at least one step.
    pub fn is_truncated(&self) -> bool {
        self.dropped > 0
    }

    pub fn steps(&self) -> &[S] {
        &self.steps
    }

    pub fn into_steps(self) -> Vec<S> {
        self.steps
    }
}

impl<S> Default for StepLog<S> {
    fn default() -> Self {
        Self::disabled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn disabled_log_skips_builder() {
        let mut log = StepLog::<i32>::disabled();
        log.push_with(|| panic!("must not be called"));
        assert!(log.is_empty());
        assert!(!log.is_truncated());
    }

    #[test]
    fn cap_drops_and_counts() {
        let mut log = StepLog::new(true, 3);
        for i in 0..5 {
            log.push(i);
        }
        assert_eq!(log.steps(), &[0, 1, 2]);
        assert_eq!(log.dropped, 2);
        assert!(log.is_truncated());
    }

    proptest! {
        #[test]
        fn never_exceeds_cap(cap in 0usize..50, pushes in 0usize..200) {
            let mut log = StepLog::new(true, cap);
            for i in 0..pushes {
                log.push(i);
            }
            prop_assert_eq!(log.len(), pushes.min(cap));
            prop_assert_eq!(log.len() + log.dropped, pushes);
            prop_assert_eq!(log.is_truncated(), pushes > cap);
        }
    }
}
