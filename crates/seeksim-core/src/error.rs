use thiserror::Error;

use crate::types::Cylinder;

/// Canonical result for core.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A request queue or head token could not be read as a cylinder number.
    #[error("Invalid input '{token}': {reason}")]
    InvalidInput { token: String, reason: String },

    #[error("Unknown policy '{0}' (expected one of FCFS, SSTF, SCAN, CSCAN, LOOK, CLOOK)")]
    UnknownPolicy(String),

    #[error("Cylinder {cylinder} is outside the disk geometry (valid range 0..{cylinder_count})")]
    OutOfRangeGeometry {
        cylinder: Cylinder,
        cylinder_count: Cylinder,
    },

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Hashing error: {0}")]
    Hash(String),
}

impl Error {
    pub fn invalid_input(token: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::InvalidInput {
            token: token.into(),
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Hash(e.to_string())
    }
}
