//! Command-line arguments for `stock-check`.
//!
//! This module defines the CLI interface using `clap`. See `main` for end-to-end usage.
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use stock_common::Symbol;
use stock_common::net::{BASE_URL_ENV, DEFAULT_TIMEOUT_SECS, FINNHUB_BASE_URL, TOKEN_ENV};
use stock_common::request::DEFAULT_SHARES;

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(
    name = "stock-check",
    version,
    about = "Compare stocks from last close to now",
    long_about = "Compare stocks from last close to now using the Finnhub API"
)]
pub struct Args {
    /// Symbols to check. Defaults to AAPL and MSFT when none are given.
    pub symbols: Vec<Symbol>,

    /// Number of shares to compare.
    #[arg(short, long, default_value_t = DEFAULT_SHARES)]
    pub shares: u64,

    /// Full calculation in the response.
    #[arg(short, long, alias = "longOutput")]
    pub long_output: bool,

    /// Text file with extra symbols separated by commas, spaces, or new lines.
    #[arg(long)]
    pub file: Option<String>,

    /// Seconds to wait for each quote; 0 waits indefinitely.
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// Finnhub API token.
    #[arg(long, env = TOKEN_ENV, hide_env_values = true)]
    pub token: Option<String>,

    /// Finnhub API root.
    #[arg(long, env = BASE_URL_ENV, default_value = FINNHUB_BASE_URL)]
    pub base_url: String,
}

impl Args {
    /// Per-fetch deadline; `None` when disabled.
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }

    /// Symbol file path with surrounding whitespace and quotes removed.
    pub fn file_path(&self) -> Option<PathBuf> {
        self.file.as_deref().map(normalize_path)
    }
}

/// Normalize a CLI-provided path string by trimming whitespace and matching quotes.
///
/// This allows passing Windows paths in quotes without breaking parsing.
fn normalize_path(raw: &str) -> PathBuf {
    let trimmed = raw.trim();
    let no_quotes = trimmed
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(trimmed);
    PathBuf::from(no_quotes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_is_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["stock-check"]).unwrap();
        assert!(args.symbols.is_empty());
        assert_eq!(args.shares, 10);
        assert!(!args.long_output);
        assert_eq!(args.timeout(), Some(Duration::from_secs(30)));
        assert!(args.file_path().is_none());
    }

    #[test]
    fn symbols_and_flags() {
        let args = Args::try_parse_from([
            "stock-check",
            "TSLA",
            "AMC",
            "-s",
            "25",
            "-l",
            "--timeout-secs",
            "0",
            "--file",
            " \"C:\\tickers.txt\" ",
        ])
        .unwrap();
        let names: Vec<&str> = args.symbols.iter().map(Symbol::as_str).collect();
        assert_eq!(names, vec!["TSLA", "AMC"]);
        assert_eq!(args.shares, 25);
        assert!(args.long_output);
        assert!(args.timeout().is_none());
        assert_eq!(args.file_path(), Some(PathBuf::from("C:\\tickers.txt")));
    }

    #[test]
    fn legacy_long_output_spelling() {
        let args = Args::try_parse_from(["stock-check", "--longOutput"]).unwrap();
        assert!(args.long_output);
    }

    #[test]
    fn rejects_negative_shares_and_blank_symbols() {
        assert!(Args::try_parse_from(["stock-check", "-s", "-3"]).is_err());
        assert!(Args::try_parse_from(["stock-check", " "]).is_err());
    }
}
