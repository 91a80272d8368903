// Shared fixtures for the behaviour tests.
pub use marketclock_core::{
    parse_market_status, parse_time_series, ChartSeries, MarketRecord, MarketTable,
    NormalizedMarket, Normalizer, PageView, SeriesKind, SortDirection, SortKey, ViewState,
};

/// Feed record with sensible defaults; tests override what they probe.
pub fn market(region: &str, open: &str, close: &str, status_hint: &str) -> MarketRecord {
    MarketRecord {
        market_type: String::from("Equity"),
        region: region.to_owned(),
        primary_exchanges: String::from("NYSE, NASDAQ"),
        local_open: open.to_owned(),
        local_close: close.to_owned(),
        status_hint: status_hint.to_owned(),
        notes: String::new(),
    }
}
