//! Planned units of work handed to the exec crate.

use serde::{Deserialize, Serialize};

use seeksim_core::types::{Cylinder, Policy};

/// Head position plus request queue, shared by every job kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workload {
    pub head: Cylinder,
    pub requests: Vec<Cylinder>,
}

impl Workload {
    pub fn new(head: Cylinder, requests: Vec<Cylinder>) -> Self {
        Self { head, requests }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum Job {
    /// One policy over one workload.
    Simulate { policy: Policy, workload: Workload },
    /// Two policies side by side over the same workload.
    Compare {
        left: Policy,
        right: Policy,
        workload: Workload,
    },
    /// Every policy over the same workload, ranked by total seek.
    Rank { workload: Workload },
}

impl Job {
    pub fn workload(&self) -> &Workload {
        match self {
            Job::Simulate { workload, .. }
            | Job::Compare { workload, .. }
            | Job::Rank { workload } => workload,
        }
    }
}
