#![forbid(unsafe_code)]
//! seeksim-sched: disk head-scheduling engine.
//!
//! Responsibilities:
//! - Generate the visit order for each policy (FCFS, SSTF, SCAN, CSCAN, LOOK, CLOOK).
//! - Score a visit order by total seek distance.
//! - Render the per-step arithmetic behind that score.
//! - Bundle sequence + cost in one `Schedule` so they can never disagree.
//!
//! **No I/O, no logging, no shared state** here. Every function is pure.

pub mod cost;
pub mod explain;
pub mod policy;
pub mod schedule;
pub mod verify;

pub use cost::{steps, total_cost};
pub use explain::{explain, StepTrace};
pub use policy::generate;
pub use schedule::{run, run_named, Schedule, Scheduler};
