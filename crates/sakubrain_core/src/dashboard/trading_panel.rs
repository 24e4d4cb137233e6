//! Trading panel: watchlist and portfolio summary.

use crate::dashboard::state::AsyncState;
use crate::dashboard::{first_error, joined};
use crate::model::trading::{Asset, AssetCategory, Portfolio, TimeRange, TradingFilters};
use crate::repo::trading_repo::TradingRepository;
use crate::repo::RepoError;
use crate::service::trading_service::TradingService;
use log::{error, info};
use std::time::Instant;

/// Partial filter update; `category: Some(None)` selects "All".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TradingFiltersPatch {
    pub category: Option<Option<AssetCategory>>,
    pub time_range: Option<TimeRange>,
}

pub struct TradingPanel<R: TradingRepository> {
    service: TradingService<R>,
    assets: AsyncState<Vec<Asset>>,
    portfolio: AsyncState<Portfolio>,
    filters: TradingFilters,
}

impl<R: TradingRepository + Sync> TradingPanel<R> {
    pub fn new(service: TradingService<R>) -> Self {
        Self {
            service,
            assets: AsyncState::default(),
            portfolio: AsyncState::default(),
            filters: TradingFilters::default(),
        }
    }

    pub fn fetch_all(&mut self) {
        let started_at = Instant::now();
        self.assets.set_loading();
        self.portfolio.set_loading();

        let service = &self.service;
        let filters = self.filters;
        let (assets, portfolio) = std::thread::scope(|scope| {
            let assets = scope.spawn(move || service.assets_by_filters(&filters));
            let portfolio = service.portfolio().map_err(|err| err.to_string());
            (joined(assets), portfolio)
        });

        match (assets, portfolio) {
            (Ok(assets), Ok(portfolio)) => {
                self.assets.set_success(assets);
                self.portfolio.set_success(portfolio);
                info!(
                    "event=panel_fetch module=dashboard panel=trading status=ok duration_ms={}",
                    started_at.elapsed().as_millis()
                );
            }
            (assets, portfolio) => {
                let message = first_error([assets.err(), portfolio.err()]);
                error!(
                    "event=panel_fetch module=dashboard panel=trading status=error error={message}"
                );
                self.assets.set_error(message.clone());
                self.portfolio.set_error(message);
            }
        }
    }

    /// Merges `patch` into the filters and re-queries.
    pub fn update_filters(&mut self, patch: TradingFiltersPatch) {
        if let Some(category) = patch.category {
            self.filters.category = category;
        }
        if let Some(time_range) = patch.time_range {
            self.filters.time_range = time_range;
        }
        self.fetch_all();
    }

    /// Flips price alerts for `symbol`, then reloads the panel.
    pub fn toggle_alerts(&mut self, symbol: &str) -> Result<Asset, RepoError> {
        match self.service.toggle_alerts(symbol) {
            Ok(asset) => {
                self.fetch_all();
                Ok(asset)
            }
            Err(err) => {
                error!(
                    "event=panel_mutation module=dashboard panel=trading op=toggle_alerts status=error error={err}"
                );
                Err(err)
            }
        }
    }

    pub fn filters(&self) -> TradingFilters {
        self.filters
    }

    pub fn service(&self) -> &TradingService<R> {
        &self.service
    }

    pub fn assets(&self) -> &AsyncState<Vec<Asset>> {
        &self.assets
    }

    pub fn portfolio(&self) -> &AsyncState<Portfolio> {
        &self.portfolio
    }
}
