//! Timezone normalization of exchange trading hours.
//!
//! Each raw record carries exchange-local open/close times. The normalizer
//! re-expresses those as viewer-local clock values and derives whether the
//! market is open at the given instant. The open/closed determination is made
//! against the exchange's own clock — converting hours for display changes the
//! numbers, never the verdict.

use chrono::{DateTime, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;

use crate::error::ConversionError;
use crate::timezone::{region_timezone, viewer_timezone};
use crate::{MarketRecord, NormalizedMarket, TimeOfDay};

/// Sentinel shown for markets that never close.
pub const ALWAYS_OPEN_LABEL: &str = "24h";

/// How a session's open/close pair relates to the exchange-local calendar day.
///
/// Computed once per record so the midnight-wrap and around-the-clock branches
/// stay a single explicit decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionShape {
    /// `00:00`–`23:59`: the market never closes.
    AlwaysOpen,
    /// Opens and closes within one calendar day.
    SameDay,
    /// Closes on the calendar day after it opens.
    OverMidnight,
}

impl SessionShape {
    pub fn classify(open: TimeOfDay, close: TimeOfDay) -> Self {
        if open == TimeOfDay::MIDNIGHT && close == TimeOfDay::LAST_MINUTE {
            Self::AlwaysOpen
        } else if close < open {
            Self::OverMidnight
        } else {
            Self::SameDay
        }
    }

    /// Whether `now` (exchange-local wall clock) falls inside the session.
    pub fn is_open_at(self, now: NaiveTime, open: TimeOfDay, close: TimeOfDay) -> bool {
        match self {
            Self::AlwaysOpen => true,
            Self::SameDay => open.to_naive() <= now && now <= close.to_naive(),
            Self::OverMidnight => now >= open.to_naive() || now <= close.to_naive(),
        }
    }
}

/// Converts raw market records into viewer-local [`NormalizedMarket`] values.
///
/// Pure function of (record, instant, viewer timezone): normalizing the same
/// record at the same instant always yields the same result.
#[derive(Debug, Clone, Copy)]
pub struct Normalizer {
    viewer: Tz,
}

impl Normalizer {
    pub fn new(viewer: Tz) -> Self {
        Self { viewer }
    }

    /// Viewer timezone detected from the host environment, UTC fallback.
    pub fn from_environment() -> Self {
        Self::new(viewer_timezone())
    }

    pub fn viewer(&self) -> Tz {
        self.viewer
    }

    /// Normalize one record at `now`.
    ///
    /// Never fails: any conversion error degrades to the raw trading hours
    /// with the open flag taken from the upstream status hint, marked via
    /// [`NormalizedMarket::degraded`] and a logged diagnostic.
    pub fn normalize(&self, record: &MarketRecord, now: DateTime<Utc>) -> NormalizedMarket {
        match self.try_normalize(record, now) {
            Ok(market) => market,
            Err(error) => {
                tracing::warn!(
                    region = %record.region,
                    %error,
                    "trading-hours conversion failed, serving raw hours"
                );
                NormalizedMarket {
                    record: record.clone(),
                    viewer_hours: format!("{}-{}", record.local_open, record.local_close),
                    is_open_now: record.status_hint.eq_ignore_ascii_case("open"),
                    degraded: true,
                }
            }
        }
    }

    /// Normalize a full replacement batch.
    pub fn normalize_batch(
        &self,
        records: &[MarketRecord],
        now: DateTime<Utc>,
    ) -> Vec<NormalizedMarket> {
        records
            .iter()
            .map(|record| self.normalize(record, now))
            .collect()
    }

    fn try_normalize(
        &self,
        record: &MarketRecord,
        now: DateTime<Utc>,
    ) -> Result<NormalizedMarket, ConversionError> {
        let open = TimeOfDay::parse(&record.local_open)?;
        let close = TimeOfDay::parse(&record.local_close)?;
        let shape = SessionShape::classify(open, close);

        if shape == SessionShape::AlwaysOpen {
            return Ok(NormalizedMarket {
                record: record.clone(),
                viewer_hours: ALWAYS_OPEN_LABEL.to_owned(),
                is_open_now: true,
                degraded: false,
            });
        }

        let exchange_tz = region_timezone(&record.region);
        let exchange_now = now.with_timezone(&exchange_tz);
        let today = exchange_now.date_naive();

        let open_instant = resolve_local(exchange_tz, today, open)?;
        let close_instant = resolve_local(exchange_tz, today, close)?;

        let is_open_now = shape.is_open_at(exchange_now.time(), open, close);
        let viewer_hours = format!(
            "{}-{}",
            open_instant.with_timezone(&self.viewer).format("%H:%M"),
            close_instant.with_timezone(&self.viewer).format("%H:%M"),
        );

        Ok(NormalizedMarket {
            record: record.clone(),
            viewer_hours,
            is_open_now,
            degraded: false,
        })
    }
}

/// Combine an exchange-local date and time of day into an instant.
///
/// DST fall-back duplicates a local hour; the earlier instant wins. Spring-
/// forward removes one, which is unrepresentable and reported as an error.
fn resolve_local(
    tz: Tz,
    date: chrono::NaiveDate,
    time: TimeOfDay,
) -> Result<DateTime<Tz>, ConversionError> {
    tz.from_local_datetime(&date.and_time(time.to_naive()))
        .earliest()
        .ok_or_else(|| ConversionError::NonexistentLocalTime {
            time: time.to_string(),
            timezone: tz.to_string(),
            date: date.to_string(),
        })
}
