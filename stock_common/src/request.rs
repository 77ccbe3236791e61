//! Per-run configuration passed explicitly through the pipeline.
//!
//! A `CheckRequest` is built once by the caller and never changes during a run; the
//! aggregation and reporting stages receive it (or its `ReportOptions`) as a parameter
//! instead of reading process-wide state.
use std::time::Duration;

use crate::symbols::Symbol;

/// Share count used when the caller does not give one.
pub const DEFAULT_SHARES: u64 = 10;

/// How each outcome is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportOptions {
    /// Hypothetical number of shares held across the price change.
    pub shares: u64,
    /// Render the full sentence instead of `<symbol>: <profit/loss>`.
    pub long_output: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        ReportOptions {
            shares: DEFAULT_SHARES,
            long_output: false,
        }
    }
}

/// Everything one invocation needs.
#[derive(Debug, Clone)]
pub struct CheckRequest {
    /// Symbols to fetch. Empty means the default symbols, resolved by the aggregator.
    pub symbols: Vec<Symbol>,
    /// Rendering parameters.
    pub options: ReportOptions,
    /// Per-fetch deadline. `None` waits for the quote source indefinitely.
    pub timeout: Option<Duration>,
}

impl CheckRequest {
    /// Creates a request with no deadline.
    pub fn new(symbols: Vec<Symbol>, options: ReportOptions) -> Self {
        CheckRequest {
            symbols,
            options,
            timeout: None,
        }
    }

    /// Sets the per-fetch deadline.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }
}
