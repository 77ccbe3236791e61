//!
//! Fetch-aggregate-report pipeline behind the `stock-check` binary.
//!
//! This crate aggregates:
//! - `error` — `CheckError` for run-ending failures and `FetchError` for per-symbol ones.
//! - `result` — handy `Result<T, CheckError>` alias.
//! - `symbols` — the `Symbol` type, the fallback list and file parsing.
//! - `quote` — `Quote`, the `QuoteSource` capability, listing policies and `Outcome`.
//! - `request` — explicit per-run configuration.
//! - `fetch` — the per-symbol fetch worker.
//! - `aggregator` — concurrent fan-out/fan-in over fetch workers.
//! - `report` — profit/loss calculation and line rendering.
//! - `net` — provider endpoint constants.
#![warn(missing_docs)]
pub mod aggregator;
pub mod error;
pub mod fetch;
pub mod net;
pub mod quote;
pub mod report;
pub mod request;
pub mod result;
pub mod symbols;

pub use aggregator::Aggregator;
pub use error::{CheckError, FetchError};
pub use quote::{ListingPolicy, Outcome, Quote, QuoteSource, ZeroPriceUnlisted};
pub use request::{CheckRequest, ReportOptions};
pub use result::Result;
pub use symbols::Symbol;
