//! Overview metrics service.

use crate::model::stats::StatMetric;
use crate::repo::stats_repo::StatsRepository;
use crate::repo::RepoResult;

pub struct StatsService<R: StatsRepository> {
    repo: R,
}

impl<R: StatsRepository> StatsService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn all_stats(&self) -> RepoResult<Vec<StatMetric>> {
        self.repo.all_stats()
    }
}
