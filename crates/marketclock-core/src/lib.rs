//! Core engine for marketclock.
//!
//! This crate contains:
//! - Canonical domain models for global market-status records
//! - The timezone normalizer that re-expresses exchange-local trading hours in
//!   the viewer's timezone and derives a live open/closed flag
//! - The table view-model (search filter, sort with the open-markets-first
//!   status partition, pagination)
//! - Wire models for the upstream status and time-series payloads
//! - Static region lookup tables (exchange timezone, chart symbols) and the
//!   detail-route target derivation
//!
//! Fetching the upstream payloads is deliberately out of scope; callers hand a
//! complete payload to [`feed::parse_market_status`] and everything downstream
//! is synchronous and in-memory.

pub mod domain;
pub mod error;
pub mod feed;
pub mod nav;
pub mod normalizer;
pub mod series;
pub mod table;
pub mod timezone;

// Re-export commonly used types at crate root for convenience

pub use domain::{MarketRecord, NormalizedMarket, TimeOfDay};
pub use error::{ConversionError, CoreError, ValidationError};
pub use feed::{parse_market_status, MarketStatusPayload};
pub use nav::{chart_symbols, detail_target};
pub use normalizer::{Normalizer, SessionShape, ALWAYS_OPEN_LABEL};
pub use series::{parse_time_series, ChartPoint, ChartSeries, SeriesKind, CHART_WINDOW};
pub use table::{MarketTable, PageView, SortDirection, SortKey, ViewState, PAGE_SIZE};
pub use timezone::{known_regions, region_timezone, viewer_timezone};
