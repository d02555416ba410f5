#![forbid(unsafe_code)]
//! seeksim-planner: turns user input into validated simulation jobs.
//!
//! - delimited request queues and head values → cylinders (`queue`)
//! - YAML scenario files → a list of `Job`s plus config overrides (`dsl`)
//!
//! Parsing failures carry the offending token. Nothing here schedules or
//! prints; the exec crate runs what we produce.

pub mod dsl;
pub mod error;
pub mod job;
pub mod queue;

pub use dsl::yaml::{
    parse_yaml_scenario, plan_scenario, read_scenario, ParsedScenario, Scenario, ScenarioConfig,
};
pub use error::PlanError;
pub use job::{Job, Workload};
pub use queue::{cylinder_from_int, parse_cylinder, parse_head, parse_queue};
