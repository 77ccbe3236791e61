//! Profit/loss calculation and line rendering.
//!
//! Numbers use Rust's shortest round-trip rendering of `f32`, so `-3507.3` prints as
//! `-3507.3` rather than with padded decimals. Gains and losses both read "you made",
//! with the sign carrying the direction.
use std::io::Write;

use log::{debug, error};

use crate::quote::{Outcome, Quote};
use crate::request::ReportOptions;
use crate::result::Result;

/// Profit or loss of holding `shares` from the previous close to now.
pub fn profit_loss(shares: u64, quote: &Quote) -> f32 {
    shares as f32 * (quote.current - quote.previous_close)
}

/// Writes the line for one outcome, followed by a newline.
///
/// Failed outcomes produce `<symbol>:Error` with no figures; the cause goes to the log.
pub fn write_outcome<W: Write + ?Sized>(
    writer: &mut W,
    outcome: &Outcome,
    options: &ReportOptions,
) -> Result<()> {
    debug!("Beginning print data for symbol {}", outcome.symbol);

    let quote = match &outcome.result {
        Ok(quote) => quote,
        Err(e) => {
            error!("Error while fetching data for symbol {}: {}", outcome.symbol, e);
            writeln!(writer, "{}:Error", outcome.symbol)?;
            return Ok(());
        }
    };

    let change = profit_loss(options.shares, quote);
    if options.long_output {
        writeln!(
            writer,
            "{}: It's worth ${} now, was worth ${} last close, with {} shares you made ${} since last close",
            outcome.symbol, quote.current, quote.previous_close, options.shares, change
        )?;
    } else {
        writeln!(writer, "{}: {}", outcome.symbol, change)?;
    }
    Ok(())
}

/// Writes every outcome in turn, stopping at the first write failure.
pub fn report<W, I>(writer: &mut W, outcomes: I, options: &ReportOptions) -> Result<()>
where
    W: Write + ?Sized,
    I: IntoIterator<Item = Outcome>,
{
    for outcome in outcomes {
        write_outcome(writer, &outcome, options)?;
    }
    writer.flush()?;
    Ok(())
}
