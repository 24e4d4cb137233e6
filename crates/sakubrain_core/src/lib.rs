//! Core domain logic for the SakuBrain dashboard.
//! This crate is the single source of truth for business invariants.

#[macro_use]
pub mod model;

pub mod config;
pub mod dashboard;
pub mod format;
pub mod logging;
pub mod repo;
pub mod seed;
pub mod service;

pub use config::{ConfigError, DashboardConfig};
pub use dashboard::state::{AsyncState, LoadState};
pub use dashboard::{Dashboard, Section};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::error::ModelError;
pub use model::idea::{Idea, IdeaStage, IdeaValidation, ValidationStep};
pub use repo::latency::LatencyProfile;
pub use repo::{RepoError, RepoResult, Repositories};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
