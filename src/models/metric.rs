use crate::error::{ScoringError, ScoringResult};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// The six atomic profile metrics, in catalog order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum MetricKey {
    Activity,
    Impact,
    Quality,
    Consistency,
    Authenticity,
    Collaboration,
}

impl MetricKey {
    pub const ALL: [MetricKey; 6] = [
        MetricKey::Activity,
        MetricKey::Impact,
        MetricKey::Quality,
        MetricKey::Consistency,
        MetricKey::Authenticity,
        MetricKey::Collaboration,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            MetricKey::Activity => "activity",
            MetricKey::Impact => "impact",
            MetricKey::Quality => "quality",
            MetricKey::Consistency => "consistency",
            MetricKey::Authenticity => "authenticity",
            MetricKey::Collaboration => "collaboration",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MetricKey::Activity => "Activity",
            MetricKey::Impact => "Impact",
            MetricKey::Quality => "Code Quality",
            MetricKey::Consistency => "Consistency",
            MetricKey::Authenticity => "Authenticity",
            MetricKey::Collaboration => "Collaboration",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            MetricKey::Activity => "Recent commits, pull requests and issues across repositories",
            MetricKey::Impact => "Community reach of the developer's own projects",
            MetricKey::Quality => "Documentation, testing and maturity of original repositories",
            MetricKey::Consistency => "How steadily contributions are spread over time",
            MetricKey::Authenticity => "Whether the profile reflects genuine original work",
            MetricKey::Collaboration => "Contributions to and reviews of other people's work",
        }
    }

    pub fn category(self) -> MetricCategory {
        match self {
            MetricKey::Activity | MetricKey::Impact => MetricCategory::Output,
            MetricKey::Quality | MetricKey::Consistency => MetricCategory::Quality,
            MetricKey::Authenticity | MetricKey::Collaboration => MetricCategory::Trust,
        }
    }

    /// Named sub-components a breakdown for this metric may carry.
    pub fn breakdown_components(self) -> &'static [&'static str] {
        match self {
            MetricKey::Activity => &["commits", "pullRequests", "issues", "activeRepos"],
            MetricKey::Impact => &["stars", "forks", "watchers", "dependents"],
            MetricKey::Quality => &["documentation", "testing", "originality", "maturity"],
            MetricKey::Consistency => &["streakDays", "activeWeeks", "longevityMonths"],
            MetricKey::Authenticity => &[
                "originalityScore",
                "activityScore",
                "engagementScore",
                "codeOwnershipScore",
            ],
            MetricKey::Collaboration => {
                &["pullRequestsMerged", "reviews", "externalRepos", "coAuthors"]
            }
        }
    }
}

impl fmt::Display for MetricKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum MetricCategory {
    Output,
    Quality,
    Trust,
}

impl MetricCategory {
    /// Display order of the category cards.
    pub const ALL: [MetricCategory; 3] = [
        MetricCategory::Output,
        MetricCategory::Quality,
        MetricCategory::Trust,
    ];

    pub fn members(self) -> [MetricKey; 2] {
        match self {
            MetricCategory::Output => [MetricKey::Activity, MetricKey::Impact],
            MetricCategory::Quality => [MetricKey::Quality, MetricKey::Consistency],
            MetricCategory::Trust => [MetricKey::Authenticity, MetricKey::Collaboration],
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MetricCategory::Output => "Output",
            MetricCategory::Quality => "Quality",
            MetricCategory::Trust => "Trust",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            MetricCategory::Output => "What the developer ships and how far it reaches",
            MetricCategory::Quality => "How well and how steadily the work is done",
            MetricCategory::Trust => "How genuine and cooperative the profile is",
        }
    }
}

impl fmt::Display for MetricCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MetricCategory::Output => "OUTPUT",
            MetricCategory::Quality => "QUALITY",
            MetricCategory::Trust => "TRUST",
        })
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum MetricLevel {
    Exceptional,
    Strong,
    Moderate,
    Weak,
}

impl MetricLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            MetricLevel::Exceptional => "Exceptional",
            MetricLevel::Strong => "Strong",
            MetricLevel::Moderate => "Moderate",
            MetricLevel::Weak => "Weak",
        }
    }
}

/// Qualitative band for a 0–100 metric score (inclusive lower bounds).
pub fn level_for_score(score: u8) -> MetricLevel {
    if score >= 90 {
        MetricLevel::Exceptional
    } else if score >= 70 {
        MetricLevel::Strong
    } else if score >= 40 {
        MetricLevel::Moderate
    } else {
        MetricLevel::Weak
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MetricData {
    #[serde(deserialize_with = "deserialize_score")]
    pub score: u8,
    pub level: String,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_breakdown"
    )]
    pub breakdown: Option<BTreeMap<String, f64>>,
}

/// Aggregation input: one record per metric key.
pub type MetricSet = BTreeMap<MetricKey, MetricData>;

impl MetricData {
    pub fn new(score: i64, level: impl Into<String>) -> Self {
        Self {
            score: clamp_metric_score(score),
            level: level.into(),
            breakdown: None,
        }
    }

    /// Record whose level is derived from the score.
    pub fn scored(score: i64) -> Self {
        let score = clamp_metric_score(score);
        Self {
            score,
            level: level_for_score(score).as_str().to_string(),
            breakdown: None,
        }
    }

    /// Attach a breakdown, checking component names against the catalog.
    pub fn with_breakdown<I, S>(mut self, key: MetricKey, components: I) -> ScoringResult<Self>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        let allowed = key.breakdown_components();
        let mut breakdown = BTreeMap::new();
        for (name, value) in components {
            let name = name.into();
            if !allowed.contains(&name.as_str()) {
                return Err(ScoringError::UnknownBreakdownComponent {
                    key,
                    component: name,
                });
            }
            breakdown.insert(name, clamp_breakdown_value(value));
        }
        self.breakdown = Some(breakdown);
        Ok(self)
    }
}

fn deserialize_score<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = f64::deserialize(deserializer)?;
    let rounded = if raw.is_finite() { raw.round() as i64 } else { 0 };
    Ok(clamp_metric_score(rounded))
}

fn deserialize_breakdown<'de, D>(deserializer: D) -> Result<Option<BTreeMap<String, f64>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<BTreeMap<String, f64>>::deserialize(deserializer)?;
    Ok(raw.map(|components| {
        components
            .into_iter()
            .map(|(name, value)| (name, clamp_breakdown_value(value)))
            .collect()
    }))
}

fn clamp_metric_score(score: i64) -> u8 {
    if !(0..=100).contains(&score) {
        log::warn!("metric score {score} outside 0..=100, clamping");
    }
    score.clamp(0, 100) as u8
}

fn clamp_breakdown_value(value: f64) -> f64 {
    if value.is_finite() && value >= 0.0 {
        value
    } else {
        log::warn!("breakdown value {value} is not a non-negative number, using 0");
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_metric_belongs_to_the_category_that_lists_it() {
        for category in MetricCategory::ALL {
            for key in category.members() {
                assert_eq!(key.category(), category);
            }
        }
        let listed: usize = MetricCategory::ALL.iter().map(|c| c.members().len()).sum();
        assert_eq!(listed, MetricKey::ALL.len());
    }

    #[test]
    fn clamps_scores_into_range() {
        assert_eq!(MetricData::scored(140).score, 100);
        assert_eq!(MetricData::scored(-3).score, 0);
        assert_eq!(MetricData::new(55, "Moderate").level, "Moderate");
    }

    #[test]
    fn level_bands_use_inclusive_lower_bounds() {
        assert_eq!(level_for_score(90), MetricLevel::Exceptional);
        assert_eq!(level_for_score(89), MetricLevel::Strong);
        assert_eq!(level_for_score(70), MetricLevel::Strong);
        assert_eq!(level_for_score(40), MetricLevel::Moderate);
        assert_eq!(level_for_score(39), MetricLevel::Weak);
    }

    #[test]
    fn rejects_unknown_breakdown_component() {
        let err = MetricData::scored(50)
            .with_breakdown(MetricKey::Impact, [("commits", 3.0)])
            .unwrap_err();
        assert_eq!(
            err,
            ScoringError::UnknownBreakdownComponent {
                key: MetricKey::Impact,
                component: "commits".to_string(),
            }
        );
    }

    #[test]
    fn negative_breakdown_values_become_zero() {
        let data = MetricData::scored(50)
            .with_breakdown(MetricKey::Impact, [("stars", -4.0), ("forks", 2.5)])
            .unwrap();
        let breakdown = data.breakdown.unwrap();
        assert_eq!(breakdown["stars"], 0.0);
        assert_eq!(breakdown["forks"], 2.5);
    }

    #[test]
    fn deserialized_scores_are_clamped() {
        let high: MetricData = serde_json::from_value(serde_json::json!({
            "score": 200,
            "level": "Exceptional"
        }))
        .unwrap();
        assert_eq!(high.score, 100);

        let low: MetricData = serde_json::from_value(serde_json::json!({
            "score": -12,
            "level": "Weak",
            "breakdown": { "commits": -3.0, "issues": 4.0 }
        }))
        .unwrap();
        assert_eq!(low.score, 0);
        let breakdown = low.breakdown.unwrap();
        assert_eq!(breakdown["commits"], 0.0);
        assert_eq!(breakdown["issues"], 4.0);
    }

    #[test]
    fn keys_serialize_as_lowercase_identifiers() {
        let json = serde_json::to_string(&MetricKey::Collaboration).unwrap();
        assert_eq!(json, "\"collaboration\"");
        let json = serde_json::to_string(&MetricCategory::Trust).unwrap();
        assert_eq!(json, "\"TRUST\"");
    }
}
