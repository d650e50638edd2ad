use crate::models::authenticity::SUB_SCORE_MAX;
use crate::models::repository::RepositoryFact;

/// Whether the profile owner is the primary contributor of `repo`.
/// Without commit data, a non-fork counts as owned and a fork does not.
pub fn is_owned(repo: &RepositoryFact, primary_share: f64) -> bool {
    match repo.owner_commit_share {
        Some(share) if share.is_finite() => share >= primary_share,
        _ => !repo.is_fork,
    }
}

/// Compute code ownership sub-score (0–25)
/// Score = 25 * owned / total
pub fn compute_code_ownership(repositories: &[RepositoryFact], primary_share: f64) -> f64 {
    if repositories.is_empty() {
        return 0.0;
    }

    let owned = repositories
        .iter()
        .filter(|r| is_owned(r, primary_share))
        .count();
    owned as f64 / repositories.len() as f64 * SUB_SCORE_MAX as f64
}
