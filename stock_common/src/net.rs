//! Quote provider endpoints and credential names used by the network source.

/// Default Finnhub REST API root.
pub const FINNHUB_BASE_URL: &str = "https://finnhub.io/api/v1";
/// Header carrying the API token on every request.
pub const TOKEN_HEADER: &str = "X-Finnhub-Token";
/// Environment variable holding the API token.
pub const TOKEN_ENV: &str = "FINNHUB_TOKEN";
/// Environment variable overriding the API root.
pub const BASE_URL_ENV: &str = "FINNHUB_BASE_URL";
/// Default per-fetch deadline in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Builds the quote endpoint URL from an API root like "https://host/api/v1".
pub fn quote_url(base_url: &str) -> String {
    format!("{}/quote", base_url.trim_end_matches('/'))
}
