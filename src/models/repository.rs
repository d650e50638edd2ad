use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Snapshot of the facts the authenticity scorer reads from one repository.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryFact {
    pub name: String,
    #[serde(default)]
    pub is_fork: bool,
    #[serde(default)]
    pub is_archived: bool,
    #[serde(default)]
    pub is_template: bool,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub pushed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub stargazer_count: u32,
    #[serde(default)]
    pub fork_count: u32,
    /// Fraction (0–1) of commits authored by the profile owner, when known.
    #[serde(default)]
    pub owner_commit_share: Option<f64>,
}

impl RepositoryFact {
    /// Neither a fork nor a template.
    pub fn is_original(&self) -> bool {
        !self.is_fork && !self.is_template
    }

    /// Most recent of pushed, updated and created timestamps.
    pub fn last_activity(&self) -> DateTime<Utc> {
        [self.pushed_at, self.updated_at]
            .into_iter()
            .flatten()
            .fold(self.created_at, |latest, ts| latest.max(ts))
    }
}
