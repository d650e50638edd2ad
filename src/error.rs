use crate::models::metric::MetricKey;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScoringError {
    /// A category needs a metric the caller did not supply.
    #[error("missing metric: {key}")]
    MissingMetric { key: MetricKey },

    #[error("unknown breakdown component `{component}` for metric {key}")]
    UnknownBreakdownComponent { key: MetricKey, component: String },

    #[error("settings error: {0}")]
    Settings(String),
}

pub type ScoringResult<T> = Result<T, ScoringError>;
