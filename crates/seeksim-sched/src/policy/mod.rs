//! Sequence generators, one per policy.
//!
//! Every generator returns `[head] + visit order`. An empty queue yields
//! `[head]` for all policies. Inputs are borrowed and never modified; the
//! geometry is only read by SCAN and CSCAN.

mod fcfs;
mod sstf;
mod sweep;

use seeksim_core::types::{Cylinder, Geometry, Policy};

pub use fcfs::fcfs;
pub use sstf::sstf;
pub use sweep::{clook, cscan, look, scan};

/// Dispatch `policy` to its generator.
pub fn generate(
    policy: Policy,
    requests: &[Cylinder],
    head: Cylinder,
    geometry: Geometry,
) -> Vec<Cylinder> {
    match policy {
        Policy::Fcfs => fcfs(requests, head),
        Policy::Sstf => sstf(requests, head),
        Policy::Scan => scan(requests, head, geometry),
        Policy::Cscan => cscan(requests, head, geometry),
        Policy::Look => look(requests, head),
        Policy::Clook => clook(requests, head),
    }
}
