//! Network-backed quote source.
//!
//! Talks to the Finnhub REST API with a blocking `reqwest` client. One client is shared by
//! every fetch worker; `reqwest::blocking::Client` is internally pooled and safe to call
//! from many threads at once.
use std::time::Duration;

use log::{debug, info};
use reqwest::StatusCode;
use reqwest::blocking::Client;
use stock_common::net::{TOKEN_ENV, TOKEN_HEADER, quote_url};
use stock_common::{CheckError, Quote, QuoteSource, Result, Symbol};

use crate::model::quote::{ErrorResponse, QuoteResponse};

/// `QuoteSource` backed by the Finnhub `/quote` endpoint.
pub struct FinnhubSource {
    client: Client,
    quote_url: String,
    token: String,
}

impl FinnhubSource {
    /// Builds the HTTP client. Fails with `CheckError::Setup` on an empty token or when the
    /// client cannot be constructed.
    pub fn new(token: &str, base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        info!("Setting up finnhub client");
        let token = token.trim();
        if token.is_empty() {
            return Err(CheckError::Setup(format!("{} is not set", TOKEN_ENV)));
        }

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| CheckError::Setup(format!("Failed to build HTTP client: {}", e)))?;

        Ok(FinnhubSource {
            client,
            quote_url: quote_url(base_url),
            token: token.to_string(),
        })
    }
}

impl QuoteSource for FinnhubSource {
    fn quote(&self, symbol: &Symbol) -> Result<Quote> {
        debug!("Requesting {} for {}", self.quote_url, symbol);

        let response = self
            .client
            .get(&self.quote_url)
            .header(TOKEN_HEADER, &self.token)
            .query(&[("symbol", symbol.as_str())])
            .send()
            .map_err(|e| {
                if e.is_timeout() {
                    CheckError::Provider(format!("timeout: {}", e))
                } else {
                    CheckError::Provider(format!("Request failed: {}", e))
                }
            })?;

        let status = response.status();
        let body = response
            .text()
            .map_err(|e| CheckError::Provider(format!("Failed to read response: {}", e)))?;

        if !status.is_success() {
            return Err(status_error(status, &body));
        }

        let payload: QuoteResponse = serde_json::from_str(&body)?;
        if let Some(as_of) = payload.as_of() {
            debug!("Quote for {} as of {}", symbol, as_of);
        }
        Ok(payload.into_quote())
    }
}

/// Maps a non-success response to a provider error, keeping the provider's own message
/// when the body carries one.
fn status_error(status: StatusCode, body: &str) -> CheckError {
    let detail = serde_json::from_str::<ErrorResponse>(body)
        .ok()
        .and_then(|e| e.error)
        .unwrap_or_else(|| body.trim().to_string());

    if detail.is_empty() {
        CheckError::Provider(status.to_string())
    } else {
        CheckError::Provider(format!("{} {}", status, detail))
    }
}
