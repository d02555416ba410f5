//! Side-by-side policy comparison.
//!
//! Each policy runs on its own scoped thread. Runs are independent pure
//! computations, so the outcome does not depend on which finishes first.

use std::thread;

use serde::Serialize;

use seeksim_core::report::RunReport;
use seeksim_core::types::Policy;
use seeksim_planner::job::Workload;

use crate::runtime::{ExecError, Simulator};

#[derive(Debug, Clone, Serialize)]
pub struct Comparison {
    pub left: RunReport,
    pub right: RunReport,
}

impl Comparison {
    /// Absolute difference in total seek distance.
    pub fn difference(&self) -> u64 {
        self.left.total_seek.abs_diff(self.right.total_seek)
    }

    /// Policy with the smaller total, or `None` on a tie.
    pub fn winner(&self) -> Option<Policy> {
        use std::cmp::Ordering::*;
        match self.left.total_seek.cmp(&self.right.total_seek) {
            Less => Some(self.left.policy),
            Greater => Some(self.right.policy),
            Equal => None,
        }
    }
}

/// All policies over one workload, cheapest first.
#[derive(Debug, Clone, Serialize)]
pub struct Ranking {
    pub entries: Vec<RunReport>,
}

impl Ranking {
    pub fn best(&self) -> Option<&RunReport> {
        self.entries.first()
    }
}

fn run_parallel(
    sim: &Simulator,
    policies: &[Policy],
    workload: &Workload,
) -> Result<Vec<RunReport>, ExecError> {
    thread::scope(|s| {
        let handles: Vec<_> = policies
            .iter()
            .map(|&p| s.spawn(move || sim.simulate(p, workload)))
            .collect();

        handles
            .into_iter()
            .zip(policies)
            .map(|(h, p)| {
                h.join()
                    .map_err(|_| ExecError::Join(p.to_string()))
                    .and_then(|r| r)
            })
            .collect()
    })
}

pub fn compare(
    sim: &Simulator,
    left: Policy,
    right: Policy,
    workload: &Workload,
) -> Result<Comparison, ExecError> {
    let mut reports = run_parallel(sim, &[left, right], workload)?.into_iter();
    match (reports.next(), reports.next()) {
        (Some(left), Some(right)) => Ok(Comparison { left, right }),
        _ => Err(ExecError::Join("comparison lost a result".to_string())),
    }
}

/// Rank every policy by total seek. Ties keep `Policy::ALL` order.
pub fn rank(sim: &Simulator, workload: &Workload) -> Result<Ranking, ExecError> {
    let mut entries = run_parallel(sim, &Policy::ALL, workload)?;
    entries.sort_by_key(|r| r.total_seek);
    Ok(Ranking { entries })
}
