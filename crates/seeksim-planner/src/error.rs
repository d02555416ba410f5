use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlanError {
    #[error(transparent)]
    Core(#[from] seeksim_core::error::Error),

    #[error("scenario YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid scenario: {0}")]
    Invalid(String),
}
