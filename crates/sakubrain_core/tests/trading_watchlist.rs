use sakubrain_core::format::{format_change, format_currency};
use sakubrain_core::model::trading::{AssetCategory, TimeRange, TradingFilters};
use sakubrain_core::repo::trading_repo::InMemoryTradingRepository;
use sakubrain_core::service::trading_service::TradingService;
use sakubrain_core::{LatencyProfile, RepoError};

fn service() -> TradingService<InMemoryTradingRepository> {
    TradingService::new(InMemoryTradingRepository::seeded(LatencyProfile::instant()))
}

fn symbols(filters: &TradingFilters) -> Vec<String> {
    service()
        .assets_by_filters(filters)
        .unwrap()
        .into_iter()
        .map(|asset| asset.symbol)
        .collect()
}

#[test]
fn category_filter_narrows_watchlist() {
    assert_eq!(symbols(&TradingFilters::default()).len(), 7);
    assert_eq!(
        symbols(&TradingFilters {
            category: Some(AssetCategory::Crypto),
            time_range: TimeRange::OneDay,
        }),
        vec!["BTC", "ETH"]
    );
    assert_eq!(
        symbols(&TradingFilters {
            category: Some(AssetCategory::Tech),
            time_range: TimeRange::All,
        }),
        vec!["AAPL", "NVDA", "MSFT"]
    );
}

#[test]
fn time_range_does_not_filter() {
    let day = symbols(&TradingFilters {
        category: None,
        time_range: TimeRange::OneDay,
    });
    let year = symbols(&TradingFilters {
        category: None,
        time_range: TimeRange::OneYear,
    });
    assert_eq!(day, year);
}

#[test]
fn toggling_alerts_persists_and_trims_symbol() {
    let service = service();
    let tsla = service.toggle_alerts(" TSLA ").unwrap();
    assert!(tsla.alerts);
    assert!(service.asset_by_symbol("TSLA").unwrap().unwrap().alerts);

    let err = service.toggle_alerts("DOGE").unwrap_err();
    assert!(matches!(err, RepoError::NotFound { entity: "asset", .. }));
}

#[test]
fn quote_update_flips_direction() {
    let service = service();
    let eth = service.update_quote("ETH", 2400.0, 74.5, 3.2).unwrap();
    assert!(eth.is_positive());
    assert_eq!(eth.price, 2400.0);
}

#[test]
fn portfolio_and_formatting() {
    let service = service();
    let portfolio = service.portfolio().unwrap();
    assert!(portfolio.is_positive());
    assert_eq!(portfolio.formatted_total_value(), "$124,567.89");
    assert_eq!(portfolio.formatted_day_change(), "+$2,345.67");
    assert_eq!(portfolio.formatted_total_return(), "+$18,567.89");

    assert_eq!(service.format_currency(43250.0), "$43,250.00");
    assert_eq!(format_currency(-5.67), "-$5.67");
    assert_eq!(format_change(-2.32, true), "-2.32%");
    assert_eq!(service.format_change(1.25, true), "+1.25%");
    assert_eq!(format_change(12.89, false), "+12.89");
}
