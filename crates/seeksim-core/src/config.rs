//! Simulator configuration that downstream crates can serialize/deserialize.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::{BoundsMode, Cylinder, Geometry, DEFAULT_CYLINDER_COUNT};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Number of cylinders on the simulated disk (valid range `0..cylinder_count`).
    pub cylinder_count: Cylinder,

    /// Handling of heads/requests that fall outside the geometry.
    pub bounds: BoundsMode,

    /// Separator used when a request queue is given as a single string.
    pub delimiter: String,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            cylinder_count: DEFAULT_CYLINDER_COUNT,
            bounds: BoundsMode::Reject,
            delimiter: ",".to_string(),
        }
    }
}

impl SimConfig {
    /// Create a config from environment variables, falling back to defaults.
    ///
    /// Environment variables:
    /// - `SEEKSIM_CYLINDER_COUNT`: number of cylinders
    /// - `SEEKSIM_BOUNDS`: `reject`, `clamp` or `permit`
    /// - `SEEKSIM_DELIMITER`: request queue separator
    ///
    /// Values that fail to parse are ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env`, reading variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();

        if let Some(s) = lookup("SEEKSIM_CYLINDER_COUNT") {
            if let Ok(v) = s.trim().parse::<Cylinder>() {
                cfg.cylinder_count = v;
            }
        }

        if let Some(s) = lookup("SEEKSIM_BOUNDS") {
            if let Ok(v) = s.parse::<BoundsMode>() {
                cfg.bounds = v;
            }
        }

        if let Some(s) = lookup("SEEKSIM_DELIMITER") {
            if !s.is_empty() {
                cfg.delimiter = s;
            }
        }

        cfg
    }

    pub fn validate(&self) -> Result<()> {
        if self.delimiter.is_empty() {
            return Err(Error::Config("delimiter must not be empty".to_string()));
        }
        self.geometry().map(|_| ())
    }

    pub fn geometry(&self) -> Result<Geometry> {
        Geometry::new(self.cylinder_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |k: &str| map.get(k).cloned()
    }

    #[test]
    fn defaults_match_classic_textbook_disk() {
        let cfg = SimConfig::default();
        assert_eq!(cfg.cylinder_count, 200);
        assert_eq!(cfg.bounds, BoundsMode::Reject);
        assert_eq!(cfg.delimiter, ",");
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn env_overrides_defaults() {
        let cfg = SimConfig::from_lookup(env(&[
            ("SEEKSIM_CYLINDER_COUNT", "5000"),
            ("SEEKSIM_BOUNDS", "clamp"),
            ("SEEKSIM_DELIMITER", ";"),
        ]));
        assert_eq!(cfg.cylinder_count, 5000);
        assert_eq!(cfg.bounds, BoundsMode::Clamp);
        assert_eq!(cfg.delimiter, ";");
    }

    #[test]
    fn unparsable_env_values_are_ignored() {
        let cfg = SimConfig::from_lookup(env(&[
            ("SEEKSIM_CYLINDER_COUNT", "lots"),
            ("SEEKSIM_BOUNDS", "sometimes"),
        ]));
        assert_eq!(cfg, SimConfig::default());
    }

    #[test]
    fn zero_cylinders_fails_validation() {
        let cfg = SimConfig {
            cylinder_count: 0,
            ..Default::default()
        };
        assert!(matches!(cfg.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn partial_yaml_like_json_fills_defaults() {
        let cfg: SimConfig = serde_json::from_str(r#"{"bounds":"permit"}"#).unwrap();
        assert_eq!(cfg.bounds, BoundsMode::Permit);
        assert_eq!(cfg.cylinder_count, 200);
    }
}
