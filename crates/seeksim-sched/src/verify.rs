//! Debug-time verification helpers for schedules.
//!
//! These functions are intended for tests and debug builds to catch a
//! generator that drops, invents or reorders cylinders. They panic on
//! violation and should stay cheap.

use seeksim_core::types::{Cylinder, Geometry, Policy};

use crate::explain::explain;
use crate::schedule::Schedule;

/// The sequence is non-empty and starts at the head.
pub fn assert_starts_at_head(s: &Schedule) {
    assert_eq!(
        s.sequence.first(),
        Some(&s.head),
        "{} sequence does not start at head {}",
        s.policy,
        s.head
    );
}

/// `total_seek` equals the sum of the explained steps.
pub fn assert_cost_consistent(s: &Schedule) {
    let trace = explain(&s.sequence);
    assert_eq!(
        trace.total, s.total_seek,
        "{} total {} disagrees with step trace {}",
        s.policy, s.total_seek, trace.total
    );
}

/// Every request is visited exactly as often as it was submitted, and the
/// only extra cylinders are the policy's boundary stops.
pub fn assert_visits_requests(s: &Schedule, geometry: Geometry) {
    let mut visited: Vec<Cylinder> = s.sequence.iter().skip(1).copied().collect();
    if !s.requests.is_empty() {
        for boundary in boundary_stops(s.policy, geometry) {
            let pos = visited.iter().position(|&c| c == boundary);
            assert!(
                pos.is_some(),
                "{} missing boundary stop {}",
                s.policy,
                boundary
            );
            if let Some(i) = pos {
                visited.remove(i);
            }
        }
    }
    let mut expected = s.requests.clone();
    visited.sort_unstable();
    expected.sort_unstable();
    assert_eq!(
        visited, expected,
        "{} visits differ from submitted requests",
        s.policy
    );
}

fn boundary_stops(policy: Policy, geometry: Geometry) -> Vec<Cylinder> {
    match policy {
        Policy::Scan => vec![geometry.top()],
        Policy::Cscan => vec![geometry.top(), geometry.bottom()],
        Policy::Fcfs | Policy::Sstf | Policy::Look | Policy::Clook => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::run;

    #[test]
    fn all_policies_pass_all_checks() {
        let g = Geometry::default();
        let reqs = [98, 183, 37, 122, 14, 124, 65, 67, 0, 199, 53];
        for p in Policy::ALL {
            let s = run(p, &reqs, 53, g);
            assert_starts_at_head(&s);
            assert_cost_consistent(&s);
            assert_visits_requests(&s, g);
        }
    }

    #[test]
    #[should_panic(expected = "visits differ")]
    fn catches_dropped_request() {
        let mut s = run(Policy::Fcfs, &[10, 20], 5, Geometry::default());
        s.sequence.pop();
        assert_visits_requests(&s, Geometry::default());
    }

    #[test]
    #[should_panic(expected = "disagrees")]
    fn catches_stale_total() {
        let mut s = run(Policy::Look, &[10, 20], 5, Geometry::default());
        s.total_seek += 1;
        assert_cost_consistent(&s);
    }
}
