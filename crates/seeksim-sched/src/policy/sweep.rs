//! SCAN-family generators.
//!
//! All four split the queue at the head: `below = {r < head}` and
//! `upper = {r >= head}` (a request at the head counts as upper). The head
//! always sweeps toward the high end first; the policies differ in what
//! happens after the last upper request.
//!
//! SCAN and CSCAN insert boundary cylinders whenever the queue is non-empty,
//! even if one side of the split has no requests.

use seeksim_core::types::{Cylinder, Geometry};

/// Both halves of the split, each sorted ascending. Sorting is stable and
/// keeps duplicates.
struct Split {
    below: Vec<Cylinder>,
    upper: Vec<Cylinder>,
}

impl Split {
    fn new(requests: &[Cylinder], head: Cylinder) -> Self {
        let (mut below, mut upper): (Vec<_>, Vec<_>) =
            requests.iter().copied().partition(|&r| r < head);
        below.sort();
        upper.sort();
        Self { below, upper }
    }

    fn start(&self, head: Cylinder, extra: usize) -> Vec<Cylinder> {
        let mut seq = Vec::with_capacity(self.below.len() + self.upper.len() + 1 + extra);
        seq.push(head);
        seq.extend_from_slice(&self.upper);
        seq
    }
}

/// Elevator: up to `top`, then back down through the lower requests.
pub fn scan(requests: &[Cylinder], head: Cylinder, geometry: Geometry) -> Vec<Cylinder> {
    if requests.is_empty() {
        return vec![head];
    }
    let split = Split::new(requests, head);
    let mut seq = split.start(head, 1);
    seq.push(geometry.top());
    seq.extend(split.below.iter().rev());
    seq
}

/// Circular SCAN: up to `top`, jump to `0`, then up through the lower requests.
pub fn cscan(requests: &[Cylinder], head: Cylinder, geometry: Geometry) -> Vec<Cylinder> {
    if requests.is_empty() {
        return vec![head];
    }
    let split = Split::new(requests, head);
    let mut seq = split.start(head, 2);
    seq.push(geometry.top());
    seq.push(geometry.bottom());
    seq.extend_from_slice(&split.below);
    seq
}

/// LOOK: reverse at the highest request instead of the boundary.
pub fn look(requests: &[Cylinder], head: Cylinder) -> Vec<Cylinder> {
    let split = Split::new(requests, head);
    let mut seq = split.start(head, 0);
    seq.extend(split.below.iter().rev());
    seq
}

/// Circular LOOK: from the highest request wrap to the lowest pending one and
/// keep moving up.
pub fn clook(requests: &[Cylinder], head: Cylinder) -> Vec<Cylinder> {
    let split = Split::new(requests, head);
    let mut seq = split.start(head, 0);
    seq.extend_from_slice(&split.below);
    seq
}
