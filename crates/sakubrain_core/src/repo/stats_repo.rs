//! Overview metrics repository.

use crate::model::stats::StatMetric;
use crate::repo::latency::{CallClass, LatencyProfile};
use crate::repo::RepoResult;
use crate::seed;

const MODULE: &str = "stats_repo";

pub trait StatsRepository {
    fn all_stats(&self) -> RepoResult<Vec<StatMetric>>;
}

/// Read-only store of pre-formatted overview cards.
pub struct InMemoryStatsRepository {
    latency: LatencyProfile,
    stats: Vec<StatMetric>,
}

impl InMemoryStatsRepository {
    pub fn seeded(latency: LatencyProfile) -> Self {
        Self::with_data(latency, seed::stat_metrics())
    }

    pub fn with_data(latency: LatencyProfile, stats: Vec<StatMetric>) -> Self {
        Self { latency, stats }
    }
}

impl StatsRepository for InMemoryStatsRepository {
    fn all_stats(&self) -> RepoResult<Vec<StatMetric>> {
        self.latency.run(MODULE, "all_stats", CallClass::Lookup, || Ok(self.stats.clone()))
    }
}
