//! Scheduler facade: policy in, (sequence, total) out as one unit.
//!
//! `run` takes a typed `Policy`, so there is no "unknown policy" path once a
//! caller holds one. String identifiers go through `run_named`, which fails
//! with `UnknownPolicy`. `Scheduler` additionally applies the configured
//! geometry bounds mode before generating.

use serde::{Deserialize, Serialize};

use seeksim_core::config::SimConfig;
use seeksim_core::error::Result;
use seeksim_core::types::{BoundsMode, Cylinder, Geometry, Policy};

use crate::cost::total_cost;
use crate::explain::{explain, StepTrace};
use crate::policy::generate;

/// Result of one scheduling run. `total_seek` is always `total_cost(&sequence)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    pub policy: Policy,
    pub head: Cylinder,
    /// Queue the generator actually saw (after any clamping).
    pub requests: Vec<Cylinder>,
    pub sequence: Vec<Cylinder>,
    pub total_seek: u64,
}

impl Schedule {
    pub fn explain(&self) -> StepTrace {
        explain(&self.sequence)
    }
}

pub fn run(policy: Policy, requests: &[Cylinder], head: Cylinder, geometry: Geometry) -> Schedule {
    let sequence = generate(policy, requests, head, geometry);
    let total_seek = total_cost(&sequence);
    Schedule {
        policy,
        head,
        requests: requests.to_vec(),
        sequence,
        total_seek,
    }
}

/// Like `run`, with the policy given by name (e.g. `"SSTF"`, `"c-look"`).
pub fn run_named(
    name: &str,
    requests: &[Cylinder],
    head: Cylinder,
    geometry: Geometry,
) -> Result<Schedule> {
    let policy: Policy = name.parse()?;
    Ok(run(policy, requests, head, geometry))
}

/// Geometry and bounds handling bundled for repeated runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Scheduler {
    geometry: Geometry,
    bounds: BoundsMode,
}

impl Scheduler {
    pub fn new(geometry: Geometry, bounds: BoundsMode) -> Self {
        Self { geometry, bounds }
    }

    pub fn from_config(cfg: &SimConfig) -> Result<Self> {
        Ok(Self::new(cfg.geometry()?, cfg.bounds))
    }

    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    pub fn bounds(&self) -> BoundsMode {
        self.bounds
    }

    pub fn run(&self, policy: Policy, requests: &[Cylinder], head: Cylinder) -> Result<Schedule> {
        let (head, requests) = self.geometry.check(head, requests, self.bounds)?;
        Ok(run(policy, &requests, head, self.geometry))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use seeksim_core::error::Error;

    const QUEUE: [Cylinder; 8] = [98, 183, 37, 122, 14, 124, 65, 67];

    #[test]
    fn fcfs_textbook_total() {
        let s = run(Policy::Fcfs, &QUEUE, 53, Geometry::default());
        assert_eq!(s.sequence, vec![53, 98, 183, 37, 122, 14, 124, 65, 67]);
        assert_eq!(s.total_seek, 640);
    }

    #[test]
    fn named_policy_dispatch() {
        let s = run_named("sstf", &QUEUE, 53, Geometry::default()).unwrap();
        assert_eq!(s.policy, Policy::Sstf);
        assert_eq!(s.total_seek, 236);

        let err = run_named("RANDOM", &QUEUE, 53, Geometry::default()).unwrap_err();
        assert_eq!(err, Error::UnknownPolicy("RANDOM".into()));
    }

    #[test]
    fn scheduler_rejects_out_of_range_by_default() {
        let sched = Scheduler::default();
        let err = sched.run(Policy::Look, &[10, 200], 53).unwrap_err();
        assert!(matches!(err, Error::OutOfRangeGeometry { cylinder: 200, .. }));
    }

    #[test]
    fn scheduler_clamps_when_asked() {
        let sched = Scheduler::new(Geometry::new(100).unwrap(), BoundsMode::Clamp);
        let s = sched.run(Policy::Fcfs, &[150, 20], 53).unwrap();
        assert_eq!(s.requests, vec![99, 20]);
        assert_eq!(s.sequence, vec![53, 99, 20]);
        assert_eq!(s.total_seek, 46 + 79);
    }

    #[test]
    fn explain_agrees_with_schedule_total() {
        for p in Policy::ALL {
            let s = run(p, &QUEUE, 53, Geometry::default());
            assert_eq!(s.explain().total, s.total_seek, "{p}");
        }
    }
}
