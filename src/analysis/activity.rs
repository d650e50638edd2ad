use crate::models::authenticity::SUB_SCORE_MAX;
use crate::models::repository::RepositoryFact;
use chrono::{DateTime, Utc};

/// Recency weight of a repository last touched `days` ago.
pub fn recency_weight(days: i64) -> f64 {
    match days {
        d if d <= 30 => 1.0,
        d if d <= 90 => 0.75,
        d if d <= 180 => 0.5,
        d if d <= 365 => 0.25,
        _ => 0.0,
    }
}

/// Compute the activity sub-score (0–25) over original repositories.
/// - Each original repo contributes its recency weight, archived repos contribute 0
/// - Full marks once `active_target` repos (or every original repo, if fewer) are fresh
pub fn compute_activity(
    repositories: &[RepositoryFact],
    as_of: DateTime<Utc>,
    active_target: u64,
) -> f64 {
    let originals: Vec<&RepositoryFact> = repositories.iter().filter(|r| r.is_original()).collect();
    if originals.is_empty() {
        return 0.0;
    }

    let weight_sum: f64 = originals
        .iter()
        .filter(|r| !r.is_archived)
        .map(|r| {
            // Future timestamps (clock skew) count as fresh.
            let days = as_of.signed_duration_since(r.last_activity()).num_days().max(0);
            recency_weight(days)
        })
        .sum();

    let expected = (originals.len() as u64).min(active_target.max(1)) as f64;
    (weight_sum / expected).min(1.0) * SUB_SCORE_MAX as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    fn repo(days_ago: i64, is_fork: bool, is_archived: bool) -> RepositoryFact {
        RepositoryFact {
            name: "repo".to_string(),
            is_fork,
            is_archived,
            is_template: false,
            created_at: now() - Duration::days(900),
            updated_at: None,
            pushed_at: Some(now() - Duration::days(days_ago)),
            stargazer_count: 0,
            fork_count: 0,
            owner_commit_share: None,
        }
    }

    #[test]
    fn weight_tiers() {
        assert_eq!(recency_weight(0), 1.0);
        assert_eq!(recency_weight(30), 1.0);
        assert_eq!(recency_weight(31), 0.75);
        assert_eq!(recency_weight(180), 0.5);
        assert_eq!(recency_weight(365), 0.25);
        assert_eq!(recency_weight(366), 0.0);
    }

    #[test]
    fn single_recent_repo_scores_full() {
        assert_eq!(compute_activity(&[repo(3, false, false)], now(), 5), 25.0);
    }

    #[test]
    fn forks_are_ignored() {
        assert_eq!(compute_activity(&[repo(3, true, false)], now(), 5), 0.0);
    }

    #[test]
    fn archived_originals_drive_score_down() {
        let repos = vec![repo(3, false, true), repo(3, false, false)];
        assert!((compute_activity(&repos, now(), 5) - 12.5).abs() < 1e-9);
    }

    #[test]
    fn dormant_repos_dilute_up_to_target() {
        // 1 fresh + 9 dormant: 1.0 / min(10, 5) = 0.2 → 5 points
        let mut repos = vec![repo(1, false, false)];
        repos.extend((0..9).map(|_| repo(800, false, false)));
        assert!((compute_activity(&repos, now(), 5) - 5.0).abs() < 1e-9);
    }

    #[test]
    fn future_timestamps_count_as_fresh() {
        assert_eq!(compute_activity(&[repo(-10, false, false)], now(), 5), 25.0);
    }
}
