use crate::models::authenticity::SUB_SCORE_MAX;
use crate::models::repository::RepositoryFact;

/// Community points on original repositories: stars plus weighted forks received.
pub fn engagement_points(repositories: &[RepositoryFact], fork_weight: f64) -> f64 {
    repositories
        .iter()
        .filter(|r| r.is_original())
        .map(|r| r.stargazer_count as f64 + fork_weight * r.fork_count as f64)
        .sum()
}

/// Compute engagement sub-score (0–25)
/// Score = 25 * min(1, ln(1 + points) / ln(1 + saturation))
pub fn compute_engagement(repositories: &[RepositoryFact], fork_weight: f64, saturation: f64) -> f64 {
    let points = engagement_points(repositories, fork_weight);
    if points <= 0.0 || saturation <= 0.0 {
        return 0.0;
    }

    let ratio = (1.0 + points).ln() / (1.0 + saturation).ln();
    ratio.min(1.0) * SUB_SCORE_MAX as f64
}
