//! Per-symbol fetch worker.
//!
//! A `FetchWorker` turns one symbol into exactly one `Outcome`. Without a deadline the
//! quote source is called in place under `catch_unwind`. With one, the call runs on a helper
//! thread and the worker waits with `recv_timeout`; when the deadline passes, the helper is
//! left detached and its late answer is dropped with the channel.
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crossbeam_channel::{RecvTimeoutError, Sender, bounded};
use log::{debug, error};

use crate::error::{CheckError, FetchError};
use crate::quote::{ListingPolicy, Outcome, Quote, QuoteSource, ZeroPriceUnlisted};
use crate::result::Result;
use crate::symbols::Symbol;

const CALL_ABORTED: &str = "quote source call aborted";

/// Fetches and classifies quotes for single symbols.
#[derive(Clone)]
pub struct FetchWorker {
    source: Arc<dyn QuoteSource>,
    policy: Arc<dyn ListingPolicy>,
    timeout: Option<Duration>,
}

impl FetchWorker {
    /// Creates a worker with the zero-price listing policy and no deadline.
    pub fn new(source: Arc<dyn QuoteSource>) -> Self {
        FetchWorker {
            source,
            policy: Arc::new(ZeroPriceUnlisted),
            timeout: None,
        }
    }

    /// Replaces the listing policy.
    pub fn with_policy(mut self, policy: Arc<dyn ListingPolicy>) -> Self {
        self.policy = policy;
        self
    }

    /// Sets the per-call deadline; `None` waits indefinitely.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Fetches `symbol` and pushes the single resulting outcome into `output`.
    pub fn run(&self, symbol: Symbol, output: &Sender<Outcome>) {
        let outcome = self.fetch(symbol);
        if let Err(e) = output.send(outcome) {
            error!("{}", CheckError::ChannelSend(e.to_string()));
        }
    }

    /// Fetches `symbol` and classifies the answer.
    pub fn fetch(&self, symbol: Symbol) -> Outcome {
        debug!("Beginning fetch for symbol {}", symbol);

        match self.call_source(&symbol) {
            Err(e) => Outcome::failed(symbol, FetchError::Provider(e)),
            Ok(quote) if !self.policy.is_listed(&quote) => {
                let name = symbol.to_string();
                Outcome::failed(symbol, FetchError::SymbolNotFound(name))
            }
            Ok(quote) => Outcome::found(symbol, quote),
        }
    }

    fn call_source(&self, symbol: &Symbol) -> std::result::Result<Quote, String> {
        let answer = match self.timeout {
            Some(timeout) => self.call_with_deadline(symbol, timeout)?,
            None => panic::catch_unwind(AssertUnwindSafe(|| self.source.quote(symbol)))
                .map_err(|_| CALL_ABORTED.to_string())?,
        };

        answer.map_err(|e| e.to_string())
    }

    fn call_with_deadline(
        &self,
        symbol: &Symbol,
        timeout: Duration,
    ) -> std::result::Result<Result<Quote>, String> {
        let (tx, rx) = bounded::<Result<Quote>>(1);
        let source = Arc::clone(&self.source);
        let target = symbol.clone();

        thread::Builder::new()
            .name("quote-call".to_string())
            .spawn(move || {
                let _ = tx.send(source.quote(&target));
            })
            .map_err(|e| format!("failed to start quote call: {}", e))?;

        rx.recv_timeout(timeout).map_err(|e| match e {
            RecvTimeoutError::Timeout => format!("timeout after {:?}", timeout),
            RecvTimeoutError::Disconnected => CALL_ABORTED.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::unbounded;

    struct FixedSource(Quote);

    impl QuoteSource for FixedSource {
        fn quote(&self, _symbol: &Symbol) -> Result<Quote> {
            Ok(self.0)
        }
    }

    struct UnauthorisedSource;

    impl QuoteSource for UnauthorisedSource {
        fn quote(&self, _symbol: &Symbol) -> Result<Quote> {
            Err(CheckError::Provider("401 Unauthorised".to_string()))
        }
    }

    struct SlowSource(Duration);

    impl QuoteSource for SlowSource {
        fn quote(&self, _symbol: &Symbol) -> Result<Quote> {
            thread::sleep(self.0);
            Ok(Quote::new(1.0, 1.0))
        }
    }

    struct PanickingSource;

    impl QuoteSource for PanickingSource {
        fn quote(&self, _symbol: &Symbol) -> Result<Quote> {
            panic!("provider client exploded");
        }
    }

    /// Answers 7.0 only when called on the thread named "fetch-7".
    struct ThreadNameSource;

    impl QuoteSource for ThreadNameSource {
        fn quote(&self, _symbol: &Symbol) -> Result<Quote> {
            match thread::current().name() {
                Some("fetch-7") => Ok(Quote::new(7.0, 7.0)),
                other => Err(CheckError::Provider(format!("called on {:?}", other))),
            }
        }
    }

    struct RejectAll;

    impl ListingPolicy for RejectAll {
        fn is_listed(&self, _quote: &Quote) -> bool {
            false
        }
    }

    fn test_symbol() -> Symbol {
        "TEST".parse().unwrap()
    }

    #[test]
    fn run_sends_exactly_one_outcome() {
        let worker = FetchWorker::new(Arc::new(FixedSource(Quote::new(123.123, 456.456))));
        let (tx, rx) = unbounded();

        worker.run(test_symbol(), &tx);
        drop(tx);

        let outcomes: Vec<Outcome> = rx.iter().collect();
        assert_eq!(
            outcomes,
            vec![Outcome::found(test_symbol(), Quote::new(123.123, 456.456))]
        );
    }

    #[test]
    fn source_error_becomes_provider_error() {
        let worker = FetchWorker::new(Arc::new(UnauthorisedSource));

        let outcome = worker.fetch(test_symbol());

        assert_eq!(outcome.symbol.as_str(), "TEST");
        assert!(outcome.quote().is_none());
        match outcome.error() {
            Some(FetchError::Provider(message)) => assert!(message.contains("401 Unauthorised")),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn zero_price_is_symbol_not_found() {
        let worker = FetchWorker::new(Arc::new(FixedSource(Quote::new(0.0, 0.0))));

        let outcome = worker.fetch(test_symbol());

        assert_eq!(
            outcome.error(),
            Some(&FetchError::SymbolNotFound("TEST".to_string()))
        );
    }

    #[test]
    fn custom_policy_overrides_zero_price_rule() {
        let worker = FetchWorker::new(Arc::new(FixedSource(Quote::new(10.0, 9.0))))
            .with_policy(Arc::new(RejectAll));

        let outcome = worker.fetch(test_symbol());

        assert!(matches!(outcome.error(), Some(FetchError::SymbolNotFound(_))));
    }

    #[test]
    fn slow_source_times_out() {
        let worker = FetchWorker::new(Arc::new(SlowSource(Duration::from_secs(5))))
            .with_timeout(Some(Duration::from_millis(50)));

        let outcome = worker.fetch(test_symbol());

        match outcome.error() {
            Some(FetchError::Provider(message)) => assert!(message.contains("timeout")),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn fast_source_beats_deadline() {
        let worker = FetchWorker::new(Arc::new(SlowSource(Duration::from_millis(1))))
            .with_timeout(Some(Duration::from_secs(5)));

        let outcome = worker.fetch(test_symbol());

        assert_eq!(outcome.quote(), Some(&Quote::new(1.0, 1.0)));
    }

    #[test]
    fn panicking_source_is_contained() {
        for timeout in [None, Some(Duration::from_secs(5))] {
            let worker = FetchWorker::new(Arc::new(PanickingSource)).with_timeout(timeout);

            let outcome = worker.fetch(test_symbol());

            assert_eq!(
                outcome.error(),
                Some(&FetchError::Provider("quote source call aborted".to_string()))
            );
        }
    }

    #[test]
    fn call_without_deadline_stays_on_worker_thread() {
        let worker = FetchWorker::new(Arc::new(ThreadNameSource));

        let outcome = thread::Builder::new()
            .name("fetch-7".to_string())
            .spawn(move || worker.fetch(test_symbol()))
            .unwrap()
            .join()
            .unwrap();

        assert_eq!(outcome.quote(), Some(&Quote::new(7.0, 7.0)));
    }

    #[test]
    fn symbol_with_nul_byte_still_fetches_under_deadline() {
        let worker = FetchWorker::new(Arc::new(FixedSource(Quote::new(2.0, 1.0))))
            .with_timeout(Some(Duration::from_secs(5)));
        let symbol: Symbol = "AB\0C".parse().unwrap();

        let outcome = worker.fetch(symbol);

        assert_eq!(outcome.quote(), Some(&Quote::new(2.0, 1.0)));
    }
}
