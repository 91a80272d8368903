//! Detail-view routing hints and the static region→chart-symbols table.

use crate::MarketRecord;

/// Chart symbols per feed region. Regions without coverage get no chart.
const MARKET_SYMBOLS: &[(&str, &[&str])] = &[
    ("United States", &["IBM"]),
    ("United Kingdom", &["TSCO.LON"]),
    ("Canada", &["SHOP.TRT", "GPV.TRV"]),
    ("Germany", &["MBG.DEX"]),
    ("India", &["RELIANCE.BSE"]),
    ("Mainland China", &["600104.SHH", "000002.SHZ"]),
];

/// Symbols charted for a feed region label, empty when unmapped.
pub fn chart_symbols(region: &str) -> &'static [&'static str] {
    let primary = region.split('-').next().unwrap_or(region).trim();
    MARKET_SYMBOLS
        .iter()
        .find(|(label, _)| *label == primary)
        .map(|(_, symbols)| *symbols)
        .unwrap_or(&[])
}

/// Route target for a market's detail view.
///
/// Composed as `{region-slug}/{exchange-slug}` from the primary region label
/// and the first listed exchange code.
pub fn detail_target(record: &MarketRecord) -> String {
    format!(
        "{}/{}",
        slug(record.primary_region()),
        slug(record.first_exchange())
    )
}

/// Trim, lower-case, and collapse whitespace runs into single hyphens.
fn slug(input: &str) -> String {
    input
        .trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(region: &str, exchanges: &str) -> MarketRecord {
        MarketRecord {
            market_type: String::from("Equity"),
            region: region.to_owned(),
            primary_exchanges: exchanges.to_owned(),
            local_open: String::from("09:30"),
            local_close: String::from("16:00"),
            status_hint: String::from("open"),
            notes: String::new(),
        }
    }

    #[test]
    fn builds_target_from_region_and_first_exchange() {
        let target = detail_target(&record("United States", "NYSE, NASDAQ"));
        assert_eq!(target, "united-states/nyse");
    }

    #[test]
    fn strips_region_suffix_before_slugging() {
        let target = detail_target(&record("Canada - Toronto", "Toronto Stock Exchange, TSXV"));
        assert_eq!(target, "canada/toronto-stock-exchange");
    }

    #[test]
    fn chart_symbols_default_to_empty() {
        assert_eq!(chart_symbols("Canada"), &["SHOP.TRT", "GPV.TRV"]);
        assert!(chart_symbols("Global").is_empty());
    }
}
