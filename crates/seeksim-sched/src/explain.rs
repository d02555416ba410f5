//! Step-by-step explanation of a seek total.
//!
//! Built from `cost::steps`, the same iterator `total_cost` sums, so
//! `explain(s).total == total_cost(s)` for every sequence.

use std::fmt;

use serde::{Deserialize, Serialize};

use seeksim_core::types::{Cylinder, Step};

use crate::cost;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepTrace {
    pub steps: Vec<Step>,
    pub total: u64,
}

pub fn explain(sequence: &[Cylinder]) -> StepTrace {
    let steps: Vec<Step> = cost::steps(sequence).collect();
    let total = steps.iter().map(|s| s.distance).sum();
    StepTrace { steps, total }
}

impl StepTrace {
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl fmt::Display for StepTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Steps:")?;
        for (i, step) in self.steps.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{step}")?;
        }
        write!(f, "\n\nTotal Seek Time = {}", self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cost::total_cost;

    #[test]
    fn renders_each_move_and_the_total() {
        let trace = explain(&[53, 98, 37]);
        assert_eq!(
            trace.to_string(),
            "Steps:\n|98 - 53| = 45\n|37 - 98| = 61\n\nTotal Seek Time = 106"
        );
    }

    #[test]
    fn total_matches_evaluator() {
        let seq = [53, 65, 67, 98, 122, 124, 183, 199, 0, 14, 37];
        let trace = explain(&seq);
        assert_eq!(trace.total, total_cost(&seq));
        assert_eq!(trace.steps.len(), seq.len() - 1);
    }

    #[test]
    fn head_only_sequence_has_no_steps() {
        let trace = explain(&[7]);
        assert!(trace.is_empty());
        assert_eq!(trace.total, 0);
        assert_eq!(trace.to_string(), "Steps:\n\n\nTotal Seek Time = 0");
    }

    #[test]
    fn serializes_for_external_formatters() {
        let json = serde_json::to_value(explain(&[1, 4])).unwrap();
        assert_eq!(json["total"], 3);
        assert_eq!(json["steps"][0]["from"], 1);
        assert_eq!(json["steps"][0]["to"], 4);
    }
}
