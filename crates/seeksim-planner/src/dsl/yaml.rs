//! YAML → job list for scenario files.
//!
//! Example:
//! ```yaml
//! config:
//!   cylinder_count: 200
//!   bounds: reject
//! jobs:
//!   - op: simulate
//!     policy: SSTF
//!     head: 53
//!     requests: [98, 183, 37, 122, 14, 124, 65, 67]
//!   - op: compare
//!     left: SCAN
//!     right: CLOOK
//!     head: 53
//!     requests: "98,183,37,122,14,124,65,67"
//!   - op: rank
//!     head: 53
//!     requests: [98, 183, 37]
//! ```
//!
//! String queues are split with the scenario's `config.delimiter` when set,
//! otherwise with the delimiter the caller passes in (normally the one from
//! `SimConfig::from_env`).

use serde::{Deserialize, Serialize};

use seeksim_core::types::{BoundsMode, Cylinder, Policy};

use crate::error::PlanError;
use crate::job::{Job, Workload};
use crate::queue::{cylinder_from_int, parse_queue};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub config: Option<ScenarioConfig>,
    pub jobs: Vec<JobDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "op")]
pub enum JobDef {
    #[serde(rename = "simulate")]
    Simulate {
        policy: String,
        head: i64,
        #[serde(default)]
        requests: RequestsDef,
    },

    #[serde(rename = "compare")]
    Compare {
        left: String,
        right: String,
        head: i64,
        #[serde(default)]
        requests: RequestsDef,
    },

    #[serde(rename = "rank")]
    Rank {
        head: i64,
        #[serde(default)]
        requests: RequestsDef,
    },
}

/// A queue written either as a YAML list or as one delimited string.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RequestsDef {
    List(Vec<i64>),
    Text(String),
}

impl Default for RequestsDef {
    fn default() -> Self {
        RequestsDef::List(Vec::new())
    }
}

/// Config overrides a scenario may carry. Unset fields keep the caller's values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioConfig {
    pub cylinder_count: Option<Cylinder>,
    pub bounds: Option<BoundsMode>,
    pub delimiter: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ParsedScenario {
    pub jobs: Vec<Job>,
    pub config: ScenarioConfig,
}

fn workload(head: i64, requests: RequestsDef, delimiter: &str) -> Result<Workload, PlanError> {
    let head = cylinder_from_int(head)?;
    let requests = match requests {
        RequestsDef::List(v) => v
            .into_iter()
            .map(cylinder_from_int)
            .collect::<Result<Vec<_>, _>>()?,
        RequestsDef::Text(s) => parse_queue(&s, delimiter)?,
    };
    Ok(Workload::new(head, requests))
}

/// Deserialize a scenario without resolving anything.
pub fn read_scenario(yaml_src: &str) -> Result<Scenario, PlanError> {
    Ok(serde_yaml::from_str(yaml_src)?)
}

/// Parse a YAML scenario into jobs. `default_delimiter` splits string queues
/// unless the scenario's own config names one.
pub fn parse_yaml_scenario(
    yaml_src: &str,
    default_delimiter: &str,
) -> Result<ParsedScenario, PlanError> {
    let doc = read_scenario(yaml_src)?;
    let delimiter = doc
        .config
        .as_ref()
        .and_then(|c| c.delimiter.clone())
        .unwrap_or_else(|| default_delimiter.to_string());
    plan_scenario(doc, &delimiter)
}

/// Turn a deserialized scenario into jobs, splitting string queues with
/// `delimiter` as given. Policies are resolved here, so an unknown policy name
/// fails the whole scenario before anything runs.
pub fn plan_scenario(doc: Scenario, delimiter: &str) -> Result<ParsedScenario, PlanError> {
    let config = doc.config.unwrap_or_default();

    if doc.jobs.is_empty() {
        return Err(PlanError::Invalid("scenario has no jobs".to_string()));
    }

    let mut jobs = Vec::with_capacity(doc.jobs.len());
    for def in doc.jobs {
        jobs.push(match def {
            JobDef::Simulate {
                policy,
                head,
                requests,
            } => Job::Simulate {
                policy: policy.parse::<Policy>()?,
                workload: workload(head, requests, delimiter)?,
            },
            JobDef::Compare {
                left,
                right,
                head,
                requests,
            } => Job::Compare {
                left: left.parse::<Policy>()?,
                right: right.parse::<Policy>()?,
                workload: workload(head, requests, delimiter)?,
            },
            JobDef::Rank { head, requests } => Job::Rank {
                workload: workload(head, requests, delimiter)?,
            },
        });
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(jobs = jobs.len(), delimiter, "parsed scenario");

    Ok(ParsedScenario { jobs, config })
}
