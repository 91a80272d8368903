//! Domain models for marketclock.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`MarketRecord`] | Raw market-status record as delivered by the feed |
//! | [`NormalizedMarket`] | Record with trading hours in the viewer's timezone |
//! | [`TimeOfDay`] | Validated zero-padded 24-hour `HH:MM` wall-clock time |

mod market;
mod time_of_day;

pub use market::{MarketRecord, NormalizedMarket};
pub use time_of_day::TimeOfDay;
