//! Trading domain: watchlist assets and the portfolio summary.

use crate::format::{format_currency, format_signed_currency};
use serde::{Deserialize, Serialize};

wire_enum! {
    pub enum AssetCategory ("asset category") {
        Tech => "Tech",
        Auto => "Auto",
        ECommerce => "E-commerce",
        Crypto => "Crypto",
        Finance => "Finance",
        Entertainment => "Entertainment",
        Other => "Other",
    }
}

wire_enum! {
    /// Chart window selected on the watchlist. Does not filter assets.
    pub enum TimeRange ("time range") {
        OneHour => "1H",
        OneDay => "1D",
        OneWeek => "1W",
        OneMonth => "1M",
        ThreeMonths => "3M",
        OneYear => "1Y",
        All => "ALL",
    }
}

impl Default for TimeRange {
    fn default() -> Self {
        Self::OneDay
    }
}

/// One watchlist entry. `symbol` is the identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub symbol: String,
    pub name: String,
    pub price: f64,
    pub change: f64,
    pub change_percent: f64,
    /// Pre-formatted volume, e.g. `52.3M`.
    pub volume: String,
    /// Pre-formatted market cap, e.g. `2.95T`.
    pub market_cap: String,
    pub alerts: bool,
    pub category: AssetCategory,
}

impl Asset {
    pub fn is_positive(&self) -> bool {
        self.change >= 0.0
    }

    pub fn toggle_alerts(&mut self) {
        self.alerts = !self.alerts;
    }

    pub fn update_price(&mut self, price: f64, change: f64, change_percent: f64) {
        self.price = price;
        self.change = change;
        self.change_percent = change_percent;
    }
}

/// Portfolio summary shown above the watchlist.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Portfolio {
    pub total_value: f64,
    pub day_change: f64,
    pub day_change_percent: f64,
    pub total_return: f64,
    pub total_return_percent: f64,
}

impl Portfolio {
    pub fn is_positive(&self) -> bool {
        self.day_change >= 0.0
    }

    pub fn formatted_total_value(&self) -> String {
        format_currency(self.total_value)
    }

    pub fn formatted_day_change(&self) -> String {
        format_signed_currency(self.day_change)
    }

    pub fn formatted_total_return(&self) -> String {
        format_signed_currency(self.total_return)
    }
}

/// Watchlist filters. `category: None` means "All".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradingFilters {
    pub category: Option<AssetCategory>,
    pub time_range: TimeRange,
}
