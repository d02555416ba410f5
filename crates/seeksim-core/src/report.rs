//! Deterministic record of one simulation run.
//!
//! A report carries the inputs, the seek sequence, the per-step trace and the
//! total in one unit, so a renderer or comparison view never recomputes cost
//! from a different sequence. The digest covers inputs and outputs; identical
//! inputs always produce an identical digest.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::hash::{hash_serde, Hash256};
use crate::types::{Cylinder, Geometry, Policy, Step};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunReport {
    pub policy: Policy,
    pub head: Cylinder,
    pub cylinder_count: Cylinder,
    /// Request queue after bounds handling, in submission order.
    pub requests: Vec<Cylinder>,
    /// Head position followed by every visited cylinder.
    pub sequence: Vec<Cylinder>,
    pub steps: Vec<Step>,
    pub total_seek: u64,
    pub digest: Hash256,
    pub engine_version: String,
}

#[derive(Serialize)]
struct DigestInput<'a> {
    policy: Policy,
    head: Cylinder,
    cylinder_count: Cylinder,
    requests: &'a [Cylinder],
    sequence: &'a [Cylinder],
    total_seek: u64,
}

impl RunReport {
    pub fn new(
        policy: Policy,
        geometry: Geometry,
        head: Cylinder,
        requests: Vec<Cylinder>,
        sequence: Vec<Cylinder>,
        steps: Vec<Step>,
        total_seek: u64,
    ) -> Result<Self> {
        let digest = hash_serde(&DigestInput {
            policy,
            head,
            cylinder_count: geometry.cylinder_count(),
            requests: &requests,
            sequence: &sequence,
            total_seek,
        })?;
        Ok(Self {
            policy,
            head,
            cylinder_count: geometry.cylinder_count(),
            requests,
            sequence,
            steps,
            total_seek,
            digest,
            engine_version: crate::VERSION.to_string(),
        })
    }

    /// `(time step, cylinder)` points for a trajectory plot.
    pub fn trajectory(&self) -> impl Iterator<Item = (usize, Cylinder)> + '_ {
        self.sequence.iter().copied().enumerate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(sequence: Vec<Cylinder>) -> RunReport {
        let steps: Vec<Step> = sequence
            .windows(2)
            .map(|w| Step::between(w[0], w[1]))
            .collect();
        let total = steps.iter().map(|s| s.distance).sum();
        RunReport::new(
            Policy::Fcfs,
            Geometry::default(),
            sequence[0],
            sequence[1..].to_vec(),
            sequence,
            steps,
            total,
        )
        .unwrap()
    }

    #[test]
    fn digest_is_deterministic() {
        assert_eq!(report(vec![53, 98, 37]).digest, report(vec![53, 98, 37]).digest);
        assert_ne!(report(vec![53, 98, 37]).digest, report(vec![53, 37, 98]).digest);
    }

    #[test]
    fn trajectory_indexes_time_steps() {
        let r = report(vec![53, 98, 37]);
        let points: Vec<_> = r.trajectory().collect();
        assert_eq!(points, vec![(0, 53), (1, 98), (2, 37)]);
        assert_eq!(r.engine_version, crate::VERSION);
    }
}
