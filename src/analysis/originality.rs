use crate::models::authenticity::SUB_SCORE_MAX;
use crate::models::repository::RepositoryFact;

/// Share of original repositories scaled to 0–25.
/// Score = 25 * original / total, 0 for an empty profile.
pub fn compute_originality(repositories: &[RepositoryFact]) -> f64 {
    if repositories.is_empty() {
        return 0.0;
    }

    let original = repositories.iter().filter(|r| r.is_original()).count();
    original as f64 / repositories.len() as f64 * SUB_SCORE_MAX as f64
}
