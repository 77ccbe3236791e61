//! Error types shared by the pipeline and the binary.
//!
//! `CheckError` covers structural failures that end a run (setup, output, decoding) and
//! the failures a `QuoteSource` reports. `FetchError` is the per-symbol kind carried inside
//! an `Outcome`; it is recovered locally and never aborts sibling fetches.
use std::io;

use thiserror::Error;

/// Unified error type for the stock check workspace.
#[derive(Error, Debug)]
pub enum CheckError {
    /// I/O error, most notably a rejected write to the output sink.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Collaborator initialisation (credentials, HTTP client, symbol file) failed.
    #[error("Setup error: {0}")]
    Setup(String),

    /// The quote provider call failed: transport, auth or provider-side error.
    #[error("Provider error: {0}")]
    Provider(String),

    /// Failure while decoding a provider payload via serde_json.
    #[error("JSON serialization/deserialization error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    /// Symbol text was empty after trimming.
    #[error("Invalid symbol: {0:?}")]
    InvalidSymbol(String),

    /// Fan-in send failed because the receiving side is gone.
    #[error("Channel send failed: {0}")]
    ChannelSend(String),
}

/// Per-symbol failure recorded in an `Outcome`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The quote source call failed or did not answer in time.
    #[error("{0}")]
    Provider(String),

    /// The quote came back but the listing policy says the symbol does not exist.
    #[error("{0}: Doesn't exist")]
    SymbolNotFound(String),
}
