use crate::models::metric::{MetricCategory, MetricData};
use serde::{Deserialize, Serialize};

/// Derived per-category score; never stored, rebuilt from the metrics on each call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CategoryScore {
    pub category: MetricCategory,
    pub score: u8,
    pub metrics: [MetricData; 2],
}
