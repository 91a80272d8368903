//! Chart-series preparation from upstream time-series payloads.
//!
//! The upstream response keys its data section by series kind (for example
//! `"Weekly Time Series"`) and reports OHLCV values as decorated strings.
//! This module extracts the kind-specific section, parses the numbers, sorts
//! points chronologically, and keeps the trailing window the chart renders.

use std::collections::{BTreeMap, HashMap};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{CoreError, ValidationError};

/// Trailing points kept for charting.
pub const CHART_WINDOW: usize = 50;

/// Supported time-series granularities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesKind {
    Daily,
    Weekly,
    Monthly,
}

impl SeriesKind {
    pub const ALL: [Self; 3] = [Self::Daily, Self::Weekly, Self::Monthly];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        }
    }

    /// Upstream query function for this granularity.
    pub const fn function_name(self) -> &'static str {
        match self {
            Self::Daily => "TIME_SERIES_DAILY",
            Self::Weekly => "TIME_SERIES_WEEKLY",
            Self::Monthly => "TIME_SERIES_MONTHLY",
        }
    }

    /// Payload section holding the data points for this granularity.
    pub const fn series_key(self) -> &'static str {
        match self {
            Self::Daily => "Time Series (Daily)",
            Self::Weekly => "Weekly Time Series",
            Self::Monthly => "Monthly Time Series",
        }
    }
}

impl Display for SeriesKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SeriesKind {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "daily" => Ok(Self::Daily),
            "weekly" => Ok(Self::Weekly),
            "monthly" => Ok(Self::Monthly),
            other => Err(ValidationError::InvalidSeriesKind {
                value: other.to_owned(),
            }),
        }
    }
}

/// One chart-ready data point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChartPoint {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
}

/// Chronologically ordered series prepared for the chart renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub symbol: String,
    pub last_refreshed: String,
    pub kind: SeriesKind,
    pub points: Vec<ChartPoint>,
}

#[derive(Debug, Deserialize)]
struct TimeSeriesEnvelope {
    #[serde(rename = "Meta Data", default)]
    meta: BTreeMap<String, String>,
    /// The data section's key depends on the series kind, so the remainder of
    /// the payload is captured as raw values and scanned.
    #[serde(flatten)]
    sections: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, Deserialize)]
struct RawPoint {
    #[serde(rename = "1. open")]
    open: String,
    #[serde(rename = "2. high")]
    high: String,
    #[serde(rename = "3. low")]
    low: String,
    #[serde(rename = "4. close")]
    close: String,
    #[serde(rename = "5. volume")]
    volume: String,
}

/// Prepare a chart series from an upstream time-series response body.
///
/// Points arrive newest-first keyed by date string; they come back oldest-
/// first, capped at [`CHART_WINDOW`]. Entries with unparsable dates or
/// numbers are dropped rather than failing the whole series.
pub fn parse_time_series(body: &str, kind: SeriesKind) -> Result<ChartSeries, CoreError> {
    let envelope: TimeSeriesEnvelope = serde_json::from_str(body)?;

    let section = envelope
        .sections
        .get(kind.series_key())
        .ok_or_else(|| ValidationError::MissingSeries {
            key: kind.series_key().to_owned(),
        })?;
    let raw: BTreeMap<String, RawPoint> = serde_json::from_value(section.clone())?;

    // BTreeMap keys are ISO dates, so iteration is already chronological.
    let mut points: Vec<ChartPoint> = raw
        .into_iter()
        .filter_map(|(date, value)| {
            Some(ChartPoint {
                date: NaiveDate::parse_from_str(&date, "%Y-%m-%d").ok()?,
                open: value.open.parse().ok()?,
                high: value.high.parse().ok()?,
                low: value.low.parse().ok()?,
                close: value.close.parse().ok()?,
                volume: value.volume.parse().ok()?,
            })
        })
        .collect();

    if points.len() > CHART_WINDOW {
        points.drain(..points.len() - CHART_WINDOW);
    }

    Ok(ChartSeries {
        symbol: envelope.meta.get("2. Symbol").cloned().unwrap_or_default(),
        last_refreshed: envelope
            .meta
            .get("3. Last Refreshed")
            .cloned()
            .unwrap_or_default(),
        kind,
        points,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_carries_upstream_identifiers() {
        assert_eq!(SeriesKind::Weekly.function_name(), "TIME_SERIES_WEEKLY");
        assert_eq!(SeriesKind::Daily.series_key(), "Time Series (Daily)");
        let parsed = SeriesKind::from_str("Monthly").expect("must parse");
        assert_eq!(parsed, SeriesKind::Monthly);
    }

    #[test]
    fn rejects_unknown_kind() {
        let err = SeriesKind::from_str("hourly").expect_err("must fail");
        assert!(matches!(err, ValidationError::InvalidSeriesKind { .. }));
    }

    #[test]
    fn missing_section_is_reported() {
        let body = r#"{"Meta Data": {"2. Symbol": "IBM"}}"#;
        let err = parse_time_series(body, SeriesKind::Daily).expect_err("must fail");
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::MissingSeries { .. })
        ));
    }
}
