pub mod analysis;
pub mod commands;
pub mod error;
pub mod models;

pub use commands::scoring::{
    authenticity_metric, category_score, compute_authenticity, compute_authenticity_at,
    get_category_scores, overall_score, tally_metadata,
};
pub use commands::settings::{load_settings_from_file, merge_settings, settings_from_value, ScoringSettings};
pub use error::{ScoringError, ScoringResult};
pub use models::authenticity::{
    AuthenticityBreakdown, AuthenticityCategory, AuthenticityMetadata, AuthenticityScore,
};
pub use models::category_score::CategoryScore;
pub use models::metric::{level_for_score, MetricCategory, MetricData, MetricKey, MetricLevel, MetricSet};
pub use models::repository::RepositoryFact;

/// Install `env_logger` for host applications (honours `RUST_LOG`).
/// Safe to call more than once.
pub fn init_logging() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .is_test(cfg!(test))
        .try_init();
}
