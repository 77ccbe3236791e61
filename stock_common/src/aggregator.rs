//! Fan-out/fan-in over fetch workers.
//!
//! One thread per symbol, a fan-in channel sized to the symbol count so no worker blocks
//! on send, and a join over every handle before anything is read back. Outcomes come back
//! in completion order, not request order.
use std::io::Write;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossbeam_channel::bounded;
use log::{info, warn};

use crate::error::FetchError;
use crate::fetch::FetchWorker;
use crate::quote::{ListingPolicy, Outcome, QuoteSource};
use crate::report;
use crate::request::CheckRequest;
use crate::result::Result;
use crate::symbols::{Symbol, default_symbols};

/// Runs one `FetchWorker` per symbol and gathers every outcome.
#[derive(Clone)]
pub struct Aggregator {
    worker: FetchWorker,
}

impl Aggregator {
    /// Creates an aggregator over `source` with the default listing policy and no deadline.
    pub fn new(source: Arc<dyn QuoteSource>) -> Self {
        Aggregator {
            worker: FetchWorker::new(source),
        }
    }

    /// Replaces the listing policy used by every worker.
    pub fn with_policy(mut self, policy: Arc<dyn ListingPolicy>) -> Self {
        self.worker = self.worker.with_policy(policy);
        self
    }

    /// Sets the per-fetch deadline used by every worker.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.worker = self.worker.with_timeout(timeout);
        self
    }

    /// Fetches all `symbols` concurrently and returns once every worker has finished.
    ///
    /// An empty slice means the default symbols. The result always holds exactly one
    /// outcome per fetched symbol, in no particular order.
    pub fn collect(&self, symbols: &[Symbol]) -> Vec<Outcome> {
        let symbols = if symbols.is_empty() {
            info!("Using default symbols");
            default_symbols()
        } else {
            symbols.to_vec()
        };

        let (tx, rx) = bounded::<Outcome>(symbols.len());
        let mut outcomes = Vec::with_capacity(symbols.len());
        let mut handles: Vec<(Symbol, JoinHandle<()>)> = Vec::with_capacity(symbols.len());

        for (index, symbol) in symbols.into_iter().enumerate() {
            let worker = self.worker.clone();
            let tx = tx.clone();
            let target = symbol.clone();
            // Symbol text may hold bytes a thread name cannot.
            let spawned = thread::Builder::new()
                .name(format!("fetch-{}", index))
                .spawn(move || worker.run(target, &tx));

            match spawned {
                Ok(handle) => handles.push((symbol, handle)),
                Err(e) => {
                    warn!("Could not start fetch worker for {}: {}", symbol, e);
                    let error = FetchError::Provider(format!("failed to start fetch worker: {}", e));
                    outcomes.push(Outcome::failed(symbol, error));
                }
            }
        }
        drop(tx);

        for (symbol, handle) in handles {
            if handle.join().is_err() {
                warn!("Fetch worker for {} panicked", symbol);
                let error = FetchError::Provider("fetch worker panicked".to_string());
                outcomes.push(Outcome::failed(symbol, error));
            }
        }

        outcomes.extend(rx.try_iter());
        info!("Collected {} outcomes", outcomes.len());
        outcomes
    }

    /// Runs the whole check for `request` and writes one line per symbol to `writer`.
    ///
    /// A deadline on the request takes precedence over the aggregator's own. Per-symbol
    /// failures are reported inline; only a write failure is returned.
    pub fn run<W: Write + ?Sized>(&self, request: &CheckRequest, writer: &mut W) -> Result<()> {
        let outcomes = match request.timeout {
            Some(timeout) => self
                .clone()
                .with_timeout(Some(timeout))
                .collect(&request.symbols),
            None => self.collect(&request.symbols),
        };
        report::report(writer, outcomes, &request.options)
    }
}
