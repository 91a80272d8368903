use thiserror::Error;

/// Validation and contract errors exposed by `marketclock-core`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("time of day must be zero-padded 24-hour HH:MM: '{value}'")]
    InvalidTimeOfDay { value: String },

    #[error("invalid sort key '{value}', expected one of region, market-type, exchanges, trading-hours, status")]
    InvalidSortKey { value: String },
    #[error("invalid sort direction '{value}', expected asc or desc")]
    InvalidSortDirection { value: String },

    #[error("invalid series kind '{value}', expected one of daily, weekly, monthly")]
    InvalidSeriesKind { value: String },
    #[error("payload does not contain series '{key}'")]
    MissingSeries { key: String },
}

/// Conversion failures raised while re-expressing trading hours.
///
/// These never cross the normalizer boundary: [`crate::Normalizer::normalize`]
/// absorbs them into the degraded fallback record.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConversionError {
    #[error(transparent)]
    TimeOfDay(#[from] ValidationError),

    #[error("local time {time} does not exist in {timezone} on {date}")]
    NonexistentLocalTime {
        time: String,
        timezone: String,
        date: String,
    },
}

/// Top-level error type for core operations.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
