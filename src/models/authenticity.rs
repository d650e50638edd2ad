use serde::{Deserialize, Serialize};
use std::fmt;

/// Cap on each of the four authenticity sub-scores.
pub const SUB_SCORE_MAX: u8 = 25;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AuthenticityCategory {
    High,
    Medium,
    Low,
    Suspicious,
}

impl AuthenticityCategory {
    pub fn from_score(score: u8) -> Self {
        if score >= 80 {
            AuthenticityCategory::High
        } else if score >= 60 {
            AuthenticityCategory::Medium
        } else if score >= 40 {
            AuthenticityCategory::Low
        } else {
            AuthenticityCategory::Suspicious
        }
    }
}

impl fmt::Display for AuthenticityCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AuthenticityCategory::High => "High",
            AuthenticityCategory::Medium => "Medium",
            AuthenticityCategory::Low => "Low",
            AuthenticityCategory::Suspicious => "Suspicious",
        })
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticityBreakdown {
    pub originality_score: u8,
    pub activity_score: u8,
    pub engagement_score: u8,
    pub code_ownership_score: u8,
}

impl AuthenticityBreakdown {
    /// Sum of the sub-scores, each capped at `SUB_SCORE_MAX` first.
    pub fn total(&self) -> u8 {
        let sum: u16 = [
            self.originality_score,
            self.activity_score,
            self.engagement_score,
            self.code_ownership_score,
        ]
        .iter()
        .map(|s| u16::from((*s).min(SUB_SCORE_MAX)))
        .sum();
        sum as u8
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticityMetadata {
    pub total_repos: usize,
    pub original_repos: usize,
    pub forked_repos: usize,
    pub archived_repos: usize,
    pub template_repos: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticityScore {
    pub score: u8,
    pub category: AuthenticityCategory,
    pub breakdown: AuthenticityBreakdown,
    pub flags: Vec<String>,
    pub metadata: AuthenticityMetadata,
}
