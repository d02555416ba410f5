//! Seek-cost evaluation.
//!
//! `steps` is the only place the per-move distance is computed. Both
//! `total_cost` and the step trace in `explain` consume it, so the total and
//! the sum of the explained steps cannot diverge.

use seeksim_core::types::{Cylinder, Step};

/// Every consecutive head movement in `sequence`.
pub fn steps(sequence: &[Cylinder]) -> impl Iterator<Item = Step> + '_ {
    sequence.windows(2).map(|w| Step::between(w[0], w[1]))
}

/// Sum of `|sequence[i+1] - sequence[i]|`. Zero for sequences shorter than two.
pub fn total_cost(sequence: &[Cylinder]) -> u64 {
    steps(sequence).map(|s| s.distance).sum()
}
