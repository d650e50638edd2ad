use crate::analysis::flags::{evaluate_flags, FlagContext};
use crate::analysis::{activity, engagement, originality, ownership, to_sub_score};
use crate::commands::settings::ScoringSettings;
use crate::error::{ScoringError, ScoringResult};
use crate::models::authenticity::*;
use crate::models::category_score::CategoryScore;
use crate::models::metric::{level_for_score, MetricCategory, MetricData, MetricKey, MetricSet};
use crate::models::repository::RepositoryFact;
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

/// Category scores in display order OUTPUT, QUALITY, TRUST.
pub fn get_category_scores(metrics: &MetricSet) -> ScoringResult<Vec<CategoryScore>> {
    MetricCategory::ALL
        .iter()
        .map(|category| category_score(metrics, *category))
        .collect()
}

/// Round-half-up mean of the category's two member metrics.
pub fn category_score(metrics: &MetricSet, category: MetricCategory) -> ScoringResult<CategoryScore> {
    let [first_key, second_key] = category.members();
    let first = lookup(metrics, first_key)?;
    let second = lookup(metrics, second_key)?;

    let score = rounded_mean(&[first.score, second.score]);
    log::trace!(
        "{category}: {first_key}={} {second_key}={} -> {score}",
        first.score,
        second.score
    );

    Ok(CategoryScore {
        category,
        score,
        metrics: [first.clone(), second.clone()],
    })
}

/// Round-half-up mean of the category scores, 0 when there are none.
pub fn overall_score(categories: &[CategoryScore]) -> u8 {
    let scores: Vec<u8> = categories.iter().map(|c| c.score).collect();
    rounded_mean(&scores)
}

/// Authenticity report evaluated against the current time with default settings.
pub fn compute_authenticity(repositories: &[RepositoryFact]) -> AuthenticityScore {
    compute_authenticity_at(repositories, Utc::now(), &ScoringSettings::default())
}

pub fn compute_authenticity_at(
    repositories: &[RepositoryFact],
    as_of: DateTime<Utc>,
    settings: &ScoringSettings,
) -> AuthenticityScore {
    let metadata = tally_metadata(repositories);
    let original_count = repositories.iter().filter(|r| r.is_original()).count();

    let breakdown = AuthenticityBreakdown {
        originality_score: to_sub_score(originality::compute_originality(repositories)),
        activity_score: to_sub_score(activity::compute_activity(
            repositories,
            as_of,
            settings.active_repo_target,
        )),
        engagement_score: to_sub_score(engagement::compute_engagement(
            repositories,
            settings.fork_weight,
            settings.engagement_saturation,
        )),
        code_ownership_score: to_sub_score(ownership::compute_code_ownership(
            repositories,
            settings.primary_commit_share,
        )),
    };

    let score = breakdown.total();
    let category = AuthenticityCategory::from_score(score);
    let flags = evaluate_flags(&FlagContext {
        metadata: &metadata,
        breakdown: &breakdown,
        original_count,
        settings,
    });

    log::debug!(
        "authenticity: {} repos -> {score} ({category}), {} flag(s)",
        metadata.total_repos,
        flags.len()
    );

    AuthenticityScore {
        score,
        category,
        breakdown,
        flags,
        metadata,
    }
}

/// Exact counts over the input; independent of the sub-scores.
pub fn tally_metadata(repositories: &[RepositoryFact]) -> AuthenticityMetadata {
    repositories
        .iter()
        .fold(AuthenticityMetadata::default(), |mut meta, repo| {
            meta.total_repos += 1;
            if repo.is_fork {
                meta.forked_repos += 1;
            } else {
                meta.original_repos += 1;
            }
            if repo.is_archived {
                meta.archived_repos += 1;
            }
            if repo.is_template {
                meta.template_repos += 1;
            }
            meta
        })
}

/// Project an authenticity report onto the `authenticity` metric.
pub fn authenticity_metric(report: &AuthenticityScore) -> MetricData {
    let b = &report.breakdown;
    let breakdown: BTreeMap<String, f64> = [
        ("originalityScore", b.originality_score),
        ("activityScore", b.activity_score),
        ("engagementScore", b.engagement_score),
        ("codeOwnershipScore", b.code_ownership_score),
    ]
    .into_iter()
    .map(|(name, value)| (name.to_string(), f64::from(value)))
    .collect();

    MetricData {
        score: report.score,
        level: level_for_score(report.score).as_str().to_string(),
        breakdown: Some(breakdown),
    }
}

fn lookup(metrics: &MetricSet, key: MetricKey) -> ScoringResult<&MetricData> {
    metrics.get(&key).ok_or(ScoringError::MissingMetric { key })
}

fn rounded_mean(scores: &[u8]) -> u8 {
    if scores.is_empty() {
        return 0;
    }
    let sum: u32 = scores.iter().map(|s| u32::from(*s)).sum();
    let n = scores.len() as u32;
    // (2 * sum + n) / (2 * n) == floor(sum / n + 0.5)
    ((2 * sum + n) / (2 * n)) as u8
}
