//! Convenient re-exports for downstream crates.

pub use crate::config::SimConfig;
pub use crate::error::{Error, Result};
pub use crate::hash::Hash256;
pub use crate::report::RunReport;
pub use crate::types::{BoundsMode, Cylinder, Geometry, Policy, Step, DEFAULT_CYLINDER_COUNT};
