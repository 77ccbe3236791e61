//! stock-check — compares stock prices from the last close to now and reports what a
//! holding of a given share count made or lost.
//!
//! Quotes for every requested symbol are fetched concurrently from Finnhub; each symbol
//! gets exactly one output line, and a failed symbol is reported inline as
//! `<symbol>:Error` without stopping the others.
//!
//! Usage example (CLI):
//! ```bash
//! FINNHUB_TOKEN=... stock-check AAPL TSLA --shares 25 --long-output
//! ```
//!
//! The token may also live in a `.env` file in the working directory. Extra symbols can be
//! read from a text file with `--file`, separated by commas, spaces, or new lines.
#![warn(missing_docs)]
mod args;
mod finnhub;
mod model;

use crate::args::Args;
use crate::finnhub::FinnhubSource;
use clap::Parser;
use log::{debug, info};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;
use std::sync::Arc;
use stock_common::symbols::SymbolParser;
use stock_common::{Aggregator, CheckError, CheckRequest, ReportOptions, Result, Symbol};

fn main() -> Result<(), CheckError> {
    init_logger();
    match dotenvy::dotenv() {
        Ok(path) => debug!("Loaded environment from {}", path.display()),
        Err(e) => debug!("No .env file loaded: {}", e),
    }
    let args = Args::parse();
    info!("Beginning fetch and print command");

    let mut symbols = args.symbols.clone();
    if let Some(path) = args.file_path() {
        symbols.extend(read_symbol_file(&path)?);
    }

    let request = CheckRequest::new(
        symbols,
        ReportOptions {
            shares: args.shares,
            long_output: args.long_output,
        },
    )
    .with_timeout(args.timeout());
    info!("Symbols: {:?}", request.symbols);

    let token = args.token.as_deref().unwrap_or_default();
    let source = FinnhubSource::new(token, &args.base_url, request.timeout)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    Aggregator::new(Arc::new(source)).run(&request, &mut out)
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}

/// Reads extra symbols from `path`; a missing file is a setup error.
fn read_symbol_file(path: &Path) -> Result<Vec<Symbol>> {
    if !is_file_exist(path) {
        return Err(CheckError::Setup(format!(
            "Symbol file not found: {}",
            path.display()
        )));
    }
    let file = File::open(path)?;
    Symbol::parse_from_file(BufReader::new(file))
}

/// Returns `true` if the provided path exists and is a regular file.
fn is_file_exist(path: &Path) -> bool {
    path.exists() && path.is_file()
}
