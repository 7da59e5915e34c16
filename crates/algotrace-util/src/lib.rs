//! algotrace-util - plumbing shared by the instrumented engines.
//!
//! Nothing in here knows about a particular algorithm. The engines in
//! `algotrace-graphs` and `algotrace-sorts` build on these pieces:
//!
//! - [`random`] - injectable uniform index sources (seeded or thread-local)
//! - [`step_log`] - append-only step recorder with a hard `max_steps` cap
//! - [`stopwatch`] - wall-clock timing reported as `tookMs`
//! - [`complexity`] - static complexity descriptors attached to stats

pub mod complexity;
pub mod random;
pub mod step_log;
pub mod stopwatch;

pub use complexity::Complexity;
pub use random::{Fuzzer, RandomSource, ThreadRandom};
pub use step_log::StepLog;
pub use stopwatch::Stopwatch;
