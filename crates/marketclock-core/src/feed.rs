//! Wire models for the upstream market-status payload.
//!
//! The feed returns a complete replacement batch on every refresh; there is no
//! incremental form. Fetching the payload is the caller's concern — this
//! module only decodes the fixed schema once the body is in hand.

use serde::{Deserialize, Serialize};

use crate::{CoreError, MarketRecord};

/// Decoded `MARKET_STATUS` payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketStatusPayload {
    #[serde(default)]
    pub endpoint: String,
    /// Full replacement batch. Empty is a valid steady state.
    #[serde(default)]
    pub markets: Vec<MarketRecord>,
}

/// Decode a market-status response body.
pub fn parse_market_status(body: &str) -> Result<MarketStatusPayload, CoreError> {
    Ok(serde_json::from_str(body)?)
}
