//! Ticker symbols and helpers for reading them from text.

use std::fmt;
use std::io::BufRead;
use std::str::FromStr;

use crate::error::CheckError;

/// Symbols checked when the caller supplies none.
pub const DEFAULT_SYMBOLS: [&str; 2] = ["AAPL", "MSFT"];

/// Opaque identifier of a tradable instrument.
///
/// The only validation is that the trimmed text is non-empty; whether the provider
/// knows the symbol is decided at fetch time.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Symbol(String);

impl Symbol {
    /// Returns the symbol text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Symbol {
    type Err = CheckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(CheckError::InvalidSymbol(s.to_string()));
        }
        Ok(Symbol(trimmed.to_string()))
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The fallback symbol list.
pub fn default_symbols() -> Vec<Symbol> {
    DEFAULT_SYMBOLS
        .iter()
        .map(|s| Symbol(s.to_string()))
        .collect()
}

/// Trait providing file parsing for symbols.
pub trait SymbolParser {
    /// Parses symbols from a buffered reader.
    ///
    /// Symbols may be separated by commas, whitespace or new lines; empty entries are
    /// skipped.
    fn parse_from_file<R: BufRead>(reader: R) -> Result<Vec<Symbol>, CheckError>;
}

impl SymbolParser for Symbol {
    fn parse_from_file<R: BufRead>(reader: R) -> Result<Vec<Self>, CheckError> {
        let mut symbols = Vec::new();

        for line_result in reader.lines() {
            let line = line_result?;
            for token in line.split(|c: char| c == ',' || c.is_whitespace()) {
                if token.is_empty() {
                    continue;
                }
                symbols.push(token.parse::<Self>()?);
            }
        }
        Ok(symbols)
    }
}
