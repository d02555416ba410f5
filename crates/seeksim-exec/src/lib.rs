#![forbid(unsafe_code)]
//! seeksim-exec: runs planned jobs and produces run reports.
//!
//! Single simulations go straight through the scheduler facade. Comparisons
//! run their two (or six) policies on scoped threads; runs share nothing, so
//! result order is fixed by the job, not by thread timing.

pub mod compare;
pub mod metrics;
pub mod runtime;

pub use compare::{compare, rank, Comparison, Ranking};
pub use runtime::{ExecError, JobOutcome, Simulator};
