//! Quote data, the quote source capability and per-symbol outcomes.
//!
//! `QuoteSource` is the only seam to the outside world: the network client in the binary
//! implements it, and tests substitute in-memory sources. `ListingPolicy` decides whether
//! a successfully fetched quote actually denotes an existing instrument.
use crate::error::FetchError;
use crate::result::Result;
use crate::symbols::Symbol;

/// Current and previous-close price for a symbol at fetch time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quote {
    /// Latest traded price.
    pub current: f32,
    /// Close price of the previous trading day.
    pub previous_close: f32,
}

impl Quote {
    /// Creates a quote from current and previous-close prices.
    pub fn new(current: f32, previous_close: f32) -> Self {
        Quote {
            current,
            previous_close,
        }
    }
}

/// Capability to look up a quote for one symbol.
///
/// Implementations are shared by all fetch workers and must be callable concurrently.
/// Any transport, auth or provider failure is returned as an error.
pub trait QuoteSource: Send + Sync {
    /// Fetches the current quote for `symbol`.
    fn quote(&self, symbol: &Symbol) -> Result<Quote>;
}

/// Decides whether a fetched quote belongs to an existing instrument.
pub trait ListingPolicy: Send + Sync {
    /// Returns `false` when the quote means the symbol could not be resolved.
    fn is_listed(&self, quote: &Quote) -> bool;
}

/// Treats a current price of exactly zero as an unknown symbol.
///
/// The provider answers unknown symbols successfully with zeroed prices, and offers no
/// cheap endpoint to validate a single symbol. Halted or delisted instruments that report
/// zero are reported as missing too.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroPriceUnlisted;

impl ListingPolicy for ZeroPriceUnlisted {
    fn is_listed(&self, quote: &Quote) -> bool {
        quote.current != 0.0
    }
}

/// Result of fetching one symbol: either a quote or the reason there is none.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    /// The requested symbol.
    pub symbol: Symbol,
    /// Prices on success, the per-symbol error otherwise.
    pub result: std::result::Result<Quote, FetchError>,
}

impl Outcome {
    /// Successful outcome carrying `quote`.
    pub fn found(symbol: Symbol, quote: Quote) -> Self {
        Outcome {
            symbol,
            result: Ok(quote),
        }
    }

    /// Failed outcome carrying `error`.
    pub fn failed(symbol: Symbol, error: FetchError) -> Self {
        Outcome {
            symbol,
            result: Err(error),
        }
    }

    /// The quote, if the fetch succeeded.
    pub fn quote(&self) -> Option<&Quote> {
        self.result.as_ref().ok()
    }

    /// The error, if the fetch failed.
    pub fn error(&self) -> Option<&FetchError> {
        self.result.as_ref().err()
    }
}
