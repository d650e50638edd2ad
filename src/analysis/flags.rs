use crate::commands::settings::ScoringSettings;
use crate::models::authenticity::{AuthenticityBreakdown, AuthenticityMetadata};

/// Everything a flag rule may look at.
#[derive(Debug, Clone, Copy)]
pub struct FlagContext<'a> {
    pub metadata: &'a AuthenticityMetadata,
    pub breakdown: &'a AuthenticityBreakdown,
    /// Repositories that are neither forks nor templates.
    pub original_count: usize,
    pub settings: &'a ScoringSettings,
}

pub struct FlagRule {
    pub id: &'static str,
    pub message: &'static str,
    pub triggered: fn(&FlagContext<'_>) -> bool,
}

/// Evaluation order is output order.
pub const FLAG_RULES: &[FlagRule] = &[
    FlagRule {
        id: "no-repositories",
        message: "No public repositories to evaluate",
        triggered: no_repositories,
    },
    FlagRule {
        id: "majority-forks",
        message: "Majority of repositories are forks",
        triggered: majority_forks,
    },
    FlagRule {
        id: "high-fork-ratio",
        message: "High fork-to-original ratio",
        triggered: high_fork_ratio,
    },
    FlagRule {
        id: "low-activity",
        message: "Low activity in original repositories",
        triggered: low_activity,
    },
    FlagRule {
        id: "low-engagement",
        message: "Very low engagement on original work",
        triggered: low_engagement,
    },
    FlagRule {
        id: "low-ownership",
        message: "Few repositories with confirmed code ownership",
        triggered: low_ownership,
    },
    FlagRule {
        id: "mostly-archived",
        message: "Most repositories are archived",
        triggered: mostly_archived,
    },
];

pub fn evaluate_flags(ctx: &FlagContext<'_>) -> Vec<String> {
    FLAG_RULES
        .iter()
        .filter(|rule| (rule.triggered)(ctx))
        .inspect(|rule| log::debug!("authenticity flag raised: {}", rule.id))
        .map(|rule| rule.message.to_string())
        .collect()
}

fn no_repositories(ctx: &FlagContext<'_>) -> bool {
    ctx.metadata.total_repos == 0
}

fn majority_forks(ctx: &FlagContext<'_>) -> bool {
    ctx.metadata.total_repos > 0 && ctx.metadata.forked_repos * 2 > ctx.metadata.total_repos
}

fn high_fork_ratio(ctx: &FlagContext<'_>) -> bool {
    let forked = ctx.metadata.forked_repos as f64;
    forked > 0.0 && forked >= ctx.settings.high_fork_ratio * ctx.original_count as f64
}

fn low_activity(ctx: &FlagContext<'_>) -> bool {
    ctx.original_count > 0 && u64::from(ctx.breakdown.activity_score) < ctx.settings.low_activity_floor
}

fn low_engagement(ctx: &FlagContext<'_>) -> bool {
    ctx.metadata.total_repos > 0
        && u64::from(ctx.breakdown.engagement_score) < ctx.settings.low_engagement_floor
}

fn low_ownership(ctx: &FlagContext<'_>) -> bool {
    ctx.metadata.total_repos > 0
        && u64::from(ctx.breakdown.code_ownership_score) < ctx.settings.low_ownership_floor
}

fn mostly_archived(ctx: &FlagContext<'_>) -> bool {
    ctx.metadata.total_repos > 0 && ctx.metadata.archived_repos * 2 > ctx.metadata.total_repos
}
