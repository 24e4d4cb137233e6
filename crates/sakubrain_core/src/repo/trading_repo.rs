//! Trading repository contract and in-memory implementation.

use crate::model::trading::{Asset, Portfolio, TradingFilters};
use crate::repo::latency::{CallClass, LatencyProfile};
use crate::repo::{read_store, write_store, RepoError, RepoResult};
use crate::seed;
use std::sync::RwLock;

const MODULE: &str = "trading_repo";

/// Repository interface for the watchlist and portfolio.
pub trait TradingRepository {
    fn all_assets(&self) -> RepoResult<Vec<Asset>>;
    /// Filters by category only; the time range does not narrow results.
    fn assets_by_filters(&self, filters: &TradingFilters) -> RepoResult<Vec<Asset>>;
    fn asset_by_symbol(&self, symbol: &str) -> RepoResult<Option<Asset>>;
    fn portfolio(&self) -> RepoResult<Portfolio>;
    fn toggle_alerts(&self, symbol: &str) -> RepoResult<Asset>;
    /// Replaces the quote fields of one asset.
    fn update_quote(
        &self,
        symbol: &str,
        price: f64,
        change: f64,
        change_percent: f64,
    ) -> RepoResult<Asset>;
}

/// Seeded in-memory watchlist store.
pub struct InMemoryTradingRepository {
    latency: LatencyProfile,
    assets: RwLock<Vec<Asset>>,
    portfolio: Portfolio,
}

impl InMemoryTradingRepository {
    pub fn seeded(latency: LatencyProfile) -> Self {
        Self::with_data(latency, seed::assets(), seed::portfolio())
    }

    pub fn with_data(latency: LatencyProfile, assets: Vec<Asset>, portfolio: Portfolio) -> Self {
        Self {
            latency,
            assets: RwLock::new(assets),
            portfolio,
        }
    }

    fn mutate(
        &self,
        op: &'static str,
        symbol: &str,
        apply: impl FnOnce(&mut Asset),
    ) -> RepoResult<Asset> {
        self.latency.run(MODULE, op, CallClass::Update, || {
            let mut assets = write_store(&self.assets, "assets")?;
            let asset = assets
                .iter_mut()
                .find(|asset| asset.symbol == symbol)
                .ok_or_else(|| RepoError::not_found("asset", symbol))?;
            apply(asset);
            Ok(asset.clone())
        })
    }
}

impl TradingRepository for InMemoryTradingRepository {
    fn all_assets(&self) -> RepoResult<Vec<Asset>> {
        self.latency.run(MODULE, "all_assets", CallClass::Query, || {
            Ok(read_store(&self.assets, "assets")?.clone())
        })
    }

    fn assets_by_filters(&self, filters: &TradingFilters) -> RepoResult<Vec<Asset>> {
        self.latency.run(MODULE, "assets_by_filters", CallClass::Query, || {
            let assets = read_store(&self.assets, "assets")?;
            Ok(assets
                .iter()
                .filter(|asset| {
                    filters
                        .category
                        .map_or(true, |category| category == asset.category)
                })
                .cloned()
                .collect())
        })
    }

    fn asset_by_symbol(&self, symbol: &str) -> RepoResult<Option<Asset>> {
        self.latency.run(MODULE, "asset_by_symbol", CallClass::Lookup, || {
            let assets = read_store(&self.assets, "assets")?;
            Ok(assets.iter().find(|asset| asset.symbol == symbol).cloned())
        })
    }

    fn portfolio(&self) -> RepoResult<Portfolio> {
        self.latency.run(MODULE, "portfolio", CallClass::Query, || Ok(self.portfolio))
    }

    fn toggle_alerts(&self, symbol: &str) -> RepoResult<Asset> {
        self.mutate("toggle_alerts", symbol, Asset::toggle_alerts)
    }

    fn update_quote(
        &self,
        symbol: &str,
        price: f64,
        change: f64,
        change_percent: f64,
    ) -> RepoResult<Asset> {
        self.mutate("update_quote", symbol, |asset| {
            asset.update_price(price, change, change_percent)
        })
    }
}
