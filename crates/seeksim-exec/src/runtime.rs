//! Runtime: execute planned jobs against the scheduler facade.
//!
//! - Validates the `SimConfig` once and keeps a `Scheduler` built from it.
//! - Applies the bounds mode before every run.
//! - Wraps each schedule in a `RunReport` (sequence, steps, total, digest).

use serde::Serialize;
use thiserror::Error;

use seeksim_core::config::SimConfig;
use seeksim_core::report::RunReport;
use seeksim_core::types::Policy;
use seeksim_planner::job::{Job, Workload};
use seeksim_sched::schedule::Scheduler;

use crate::compare::{compare, rank, Comparison, Ranking};
use crate::metrics::emit_span;

#[derive(Debug, Error)]
pub enum ExecError {
    #[error(transparent)]
    Core(#[from] seeksim_core::error::Error),
    #[error("comparison worker panicked: {0}")]
    Join(String),
}

/// Result of one planned job.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum JobOutcome {
    Single(RunReport),
    Comparison(Comparison),
    Ranking(Ranking),
}

/// Owns the validated configuration; cheap to share across threads.
#[derive(Debug, Clone)]
pub struct Simulator {
    cfg: SimConfig,
    scheduler: Scheduler,
}

impl Simulator {
    pub fn new(cfg: SimConfig) -> Result<Self, ExecError> {
        cfg.validate()?;
        let scheduler = Scheduler::from_config(&cfg)?;
        Ok(Self { cfg, scheduler })
    }

    pub fn config(&self) -> &SimConfig {
        &self.cfg
    }

    /// Run one policy over `workload` and report it.
    pub fn simulate(&self, policy: Policy, workload: &Workload) -> Result<RunReport, ExecError> {
        let schedule = self
            .scheduler
            .run(policy, &workload.requests, workload.head)?;

        #[cfg(debug_assertions)]
        {
            seeksim_sched::verify::assert_starts_at_head(&schedule);
            seeksim_sched::verify::assert_cost_consistent(&schedule);
        }

        let trace = schedule.explain();
        let report = RunReport::new(
            schedule.policy,
            self.scheduler.geometry(),
            schedule.head,
            schedule.requests,
            schedule.sequence,
            trace.steps,
            schedule.total_seek,
        )?;

        #[cfg(feature = "tracing")]
        tracing::debug!(
            policy = %report.policy,
            head = report.head,
            requests = report.requests.len(),
            total_seek = report.total_seek,
            "simulated"
        );
        emit_span(
            "simulate",
            &[
                ("policy", report.policy.to_string()),
                ("total_seek", report.total_seek.to_string()),
                ("digest", report.digest.short()),
            ],
        );

        Ok(report)
    }

    pub fn run_job(&self, job: &Job) -> Result<JobOutcome, ExecError> {
        Ok(match job {
            Job::Simulate { policy, workload } => {
                JobOutcome::Single(self.simulate(*policy, workload)?)
            }
            Job::Compare {
                left,
                right,
                workload,
            } => JobOutcome::Comparison(compare(self, *left, *right, workload)?),
            Job::Rank { workload } => JobOutcome::Ranking(rank(self, workload)?),
        })
    }

    /// Run jobs in order, stopping at the first failure.
    pub fn run_all(&self, jobs: &[Job]) -> Result<Vec<JobOutcome>, ExecError> {
        jobs.iter().map(|job| self.run_job(job)).collect()
    }
}
