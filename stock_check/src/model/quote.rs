//! Quote payload returned by the provider's `/quote` endpoint.
//!
//! Decoded via `serde_json`. Unknown symbols come back with HTTP 200 and zeroed or null
//! fields, so every field is optional and a missing price reads as zero.
use chrono::{DateTime, TimeZone, Utc};
use serde::Deserialize;
use stock_common::Quote;

/// `/quote` response body. Fields not needed for profit/loss are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuoteResponse {
    /// Current price.
    #[serde(default)]
    pub c: Option<f32>,
    /// Previous close price.
    #[serde(default)]
    pub pc: Option<f32>,
    /// Quote timestamp in seconds since the UNIX epoch.
    #[serde(default)]
    pub t: Option<i64>,
}

impl QuoteResponse {
    /// Time of the quote, if the provider sent a usable one.
    pub fn as_of(&self) -> Option<DateTime<Utc>> {
        self.t
            .filter(|ts| *ts > 0)
            .and_then(|ts| Utc.timestamp_opt(ts, 0).single())
    }

    /// Converts into the pipeline's quote, reading missing prices as zero.
    pub fn into_quote(self) -> Quote {
        Quote::new(self.c.unwrap_or(0.0), self.pc.unwrap_or(0.0))
    }
}

/// Error body the provider sends alongside non-success statuses.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable message, e.g. "Invalid API key".
    pub error: Option<String>,
}
