//! Disk vocabulary shared by every crate: cylinders, geometry, policies.
//!
//! Cylinders are unsigned, so a negative head or request can never reach the
//! scheduler; the planner rejects such tokens while parsing.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A cylinder (track) number the head can seek to.
pub type Cylinder = u32;

/// Disk size assumed when the caller does not provide one.
pub const DEFAULT_CYLINDER_COUNT: Cylinder = 200;

/// Disk geometry: valid cylinders are `0..cylinder_count`.
///
/// Only the boundary-sweeping policies (SCAN, CSCAN) read it, but it is
/// threaded through every call so the default is a caller-visible value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Geometry {
    cylinder_count: Cylinder,
}

impl Geometry {
    pub fn new(cylinder_count: Cylinder) -> Result<Self> {
        if cylinder_count == 0 {
            return Err(Error::Config(
                "cylinder_count must be at least 1".to_string(),
            ));
        }
        Ok(Self { cylinder_count })
    }

    pub const fn cylinder_count(self) -> Cylinder {
        self.cylinder_count
    }

    /// Lowest addressable cylinder.
    pub const fn bottom(self) -> Cylinder {
        0
    }

    /// Highest addressable cylinder (`cylinder_count - 1`).
    pub const fn top(self) -> Cylinder {
        self.cylinder_count - 1
    }

    pub const fn contains(self, cylinder: Cylinder) -> bool {
        cylinder < self.cylinder_count
    }

    /// Apply `mode` to a head position and request queue.
    ///
    /// Returns the (possibly clamped) head and requests. Queue order and
    /// duplicates are preserved.
    pub fn check(
        self,
        head: Cylinder,
        requests: &[Cylinder],
        mode: BoundsMode,
    ) -> Result<(Cylinder, Vec<Cylinder>)> {
        match mode {
            BoundsMode::Permit => Ok((head, requests.to_vec())),
            BoundsMode::Clamp => Ok((
                head.min(self.top()),
                requests.iter().map(|&r| r.min(self.top())).collect(),
            )),
            BoundsMode::Reject => {
                if let Some(&bad) = std::iter::once(&head)
                    .chain(requests)
                    .find(|&&c| !self.contains(c))
                {
                    return Err(Error::OutOfRangeGeometry {
                        cylinder: bad,
                        cylinder_count: self.cylinder_count,
                    });
                }
                Ok((head, requests.to_vec()))
            }
        }
    }
}

impl Default for Geometry {
    fn default() -> Self {
        Self {
            cylinder_count: DEFAULT_CYLINDER_COUNT,
        }
    }
}

impl TryFrom<u32> for Geometry {
    type Error = Error;

    fn try_from(cylinder_count: u32) -> Result<Self> {
        Self::new(cylinder_count)
    }
}

impl From<Geometry> for u32 {
    fn from(g: Geometry) -> Self {
        g.cylinder_count
    }
}

impl fmt::Display for Geometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} cylinders (0..={})", self.cylinder_count, self.top())
    }
}

/// The closed set of head-scheduling policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Policy {
    /// First come, first served.
    Fcfs,
    /// Shortest seek time first.
    Sstf,
    /// Elevator: sweep up to the top boundary, then reverse.
    Scan,
    /// Circular SCAN: sweep up to the top boundary, wrap to 0, sweep up again.
    Cscan,
    /// SCAN that turns around at the last request instead of the boundary.
    Look,
    /// Circular LOOK: wrap from the highest request to the lowest pending one.
    Clook,
}

impl Policy {
    pub const ALL: [Policy; 6] = [
        Policy::Fcfs,
        Policy::Sstf,
        Policy::Scan,
        Policy::Cscan,
        Policy::Look,
        Policy::Clook,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Policy::Fcfs => "FCFS",
            Policy::Sstf => "SSTF",
            Policy::Scan => "SCAN",
            Policy::Cscan => "CSCAN",
            Policy::Look => "LOOK",
            Policy::Clook => "CLOOK",
        }
    }

    /// Whether the policy travels to physical boundary cylinders.
    pub const fn uses_boundary(self) -> bool {
        matches!(self, Policy::Scan | Policy::Cscan)
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Policy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "FCFS" => Ok(Policy::Fcfs),
            "SSTF" => Ok(Policy::Sstf),
            "SCAN" => Ok(Policy::Scan),
            "CSCAN" | "C-SCAN" => Ok(Policy::Cscan),
            "LOOK" => Ok(Policy::Look),
            "CLOOK" | "C-LOOK" => Ok(Policy::Clook),
            _ => Err(Error::UnknownPolicy(s.to_string())),
        }
    }
}

/// What to do with a head or request outside `0..cylinder_count`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoundsMode {
    /// Fail with `OutOfRangeGeometry`.
    #[default]
    Reject,
    /// Pull the value down to the top cylinder.
    Clamp,
    /// Let the value through unchanged.
    Permit,
}

impl FromStr for BoundsMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "reject" => Ok(BoundsMode::Reject),
            "clamp" => Ok(BoundsMode::Clamp),
            "permit" => Ok(BoundsMode::Permit),
            other => Err(Error::Config(format!(
                "unknown bounds mode '{other}' (expected reject, clamp or permit)"
            ))),
        }
    }
}

impl fmt::Display for BoundsMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BoundsMode::Reject => "reject",
            BoundsMode::Clamp => "clamp",
            BoundsMode::Permit => "permit",
        })
    }
}

/// One head movement between two consecutive cylinders of a seek sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    pub from: Cylinder,
    pub to: Cylinder,
    pub distance: u64,
}

impl Step {
    pub fn between(from: Cylinder, to: Cylinder) -> Self {
        Self {
            from,
            to,
            distance: u64::from(from.abs_diff(to)),
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "|{} - {}| = {}", self.to, self.from, self.distance)
    }
}
