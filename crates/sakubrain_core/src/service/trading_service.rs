//! Trading use-case service.
//!
//! # Responsibility
//! - Pass watchlist and portfolio calls through to the repository.
//! - Expose the display formatters used by watchlist rows.

use crate::format;
use crate::model::trading::{Asset, Portfolio, TradingFilters};
use crate::repo::trading_repo::TradingRepository;
use crate::repo::RepoResult;

/// Trading service facade over repository implementations.
pub struct TradingService<R: TradingRepository> {
    repo: R,
}

impl<R: TradingRepository> TradingService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn all_assets(&self) -> RepoResult<Vec<Asset>> {
        self.repo.all_assets()
    }

    pub fn assets_by_filters(&self, filters: &TradingFilters) -> RepoResult<Vec<Asset>> {
        self.repo.assets_by_filters(filters)
    }

    pub fn asset_by_symbol(&self, symbol: &str) -> RepoResult<Option<Asset>> {
        self.repo.asset_by_symbol(symbol.trim())
    }

    pub fn portfolio(&self) -> RepoResult<Portfolio> {
        self.repo.portfolio()
    }

    pub fn toggle_alerts(&self, symbol: &str) -> RepoResult<Asset> {
        self.repo.toggle_alerts(symbol.trim())
    }

    pub fn update_quote(
        &self,
        symbol: &str,
        price: f64,
        change: f64,
        change_percent: f64,
    ) -> RepoResult<Asset> {
        self.repo
            .update_quote(symbol.trim(), price, change, change_percent)
    }

    pub fn format_currency(&self, value: f64) -> String {
        format::format_currency(value)
    }

    pub fn format_change(&self, value: f64, is_percent: bool) -> String {
        format::format_change(value, is_percent)
    }
}
