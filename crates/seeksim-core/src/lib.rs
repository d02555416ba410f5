#![forbid(unsafe_code)]
//! seeksim-core: shared vocabulary for the seek simulator.
//!
//! Cylinders, disk geometry, the closed set of scheduling policies, the
//! canonical error type, configuration, and the run report all live here so
//! that every other crate agrees on them. No algorithms, no I/O.

pub mod config;
pub mod error;
pub mod hash;
pub mod prelude;
pub mod report;
pub mod types;

/// Version string stamped into every `RunReport`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
