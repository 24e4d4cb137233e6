//! Overview metrics panel.

use crate::dashboard::state::AsyncState;
use crate::model::stats::StatMetric;
use crate::repo::stats_repo::StatsRepository;
use crate::service::stats_service::StatsService;
use log::{error, info};

pub struct StatsPanel<R: StatsRepository> {
    service: StatsService<R>,
    stats: AsyncState<Vec<StatMetric>>,
}

impl<R: StatsRepository> StatsPanel<R> {
    pub fn new(service: StatsService<R>) -> Self {
        Self {
            service,
            stats: AsyncState::default(),
        }
    }

    pub fn fetch_all(&mut self) {
        self.stats.set_loading();
        match self.service.all_stats() {
            Ok(stats) => {
                info!(
                    "event=panel_fetch module=dashboard panel=stats status=ok count={}",
                    stats.len()
                );
                self.stats.set_success(stats);
            }
            Err(err) => {
                error!("event=panel_fetch module=dashboard panel=stats status=error error={err}");
                self.stats.set_error(err.to_string());
            }
        }
    }

    pub fn stats(&self) -> &AsyncState<Vec<StatMetric>> {
        &self.stats
    }
}
