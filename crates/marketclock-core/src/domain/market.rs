use serde::{Deserialize, Serialize};

/// Raw market-status record as delivered by the upstream feed.
///
/// Field names follow the upstream wire format; only `current_status` is
/// renamed because it is merely a hint we fall back on when conversion fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketRecord {
    pub market_type: String,
    /// Region label. May carry a suffix after `-` when the feed concatenates
    /// several venues, e.g. `"Canada - Toronto"`.
    pub region: String,
    /// Comma-joined exchange codes, e.g. `"NYSE, NASDAQ"`.
    pub primary_exchanges: String,
    /// Exchange-local opening time, `HH:MM`.
    pub local_open: String,
    /// Exchange-local closing time, `HH:MM`.
    pub local_close: String,
    /// Upstream-reported status. Used only when conversion falls back.
    #[serde(rename = "current_status")]
    pub status_hint: String,
    #[serde(default)]
    pub notes: String,
}

impl MarketRecord {
    /// Region label with any `-` suffix stripped.
    pub fn primary_region(&self) -> &str {
        self.region
            .split('-')
            .next()
            .unwrap_or(self.region.as_str())
            .trim()
    }

    /// First comma-separated exchange code.
    pub fn first_exchange(&self) -> &str {
        self.primary_exchanges
            .split(',')
            .next()
            .unwrap_or(self.primary_exchanges.as_str())
            .trim()
    }
}

/// Market record with trading hours re-expressed in the viewer's timezone and
/// a live open/closed flag.
///
/// Immutable value, recomputed on every normalization cycle. Every field of
/// the source [`MarketRecord`] is carried verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedMarket {
    #[serde(flatten)]
    pub record: MarketRecord,
    /// `"HH:MM-HH:MM"` in the viewer's timezone, or `"24h"` for markets that
    /// never close. On conversion failure this is the unconverted
    /// `"{local_open}-{local_close}"` pair.
    pub viewer_hours: String,
    /// Whether the exchange-local clock currently falls inside the session.
    pub is_open_now: bool,
    /// Set when the conversion fell back to raw hours. Internal diagnostic;
    /// not part of the wire shape.
    #[serde(skip)]
    pub degraded: bool,
}

impl NormalizedMarket {
    /// Route target for this market's detail view.
    pub fn detail_target(&self) -> String {
        crate::nav::detail_target(&self.record)
    }
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
    fn primary_region_strips_suffix() {
        assert_eq!(record("Canada - Toronto", "TSX").primary_region(), "Canada");
        assert_eq!(record("Japan", "JPX").primary_region(), "Japan");
    }

    #[test]
    fn first_exchange_takes_leading_token() {
        assert_eq!(record("United States", "NYSE, NASDAQ").first_exchange(), "NYSE");
        assert_eq!(record("Germany", "XETRA").first_exchange(), "XETRA");
    }
}
