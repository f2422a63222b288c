//! Aggregation and console reporting.
//!
//! Values are carried exactly as [`Decimal`] and rounded only when a
//! line is printed, so the total is a sum of exact values rather than
//! a sum of rounded ones.

use std::io::Write;

use rust_decimal::{Decimal, RoundingStrategy};

use crate::Result;
use crate::models::PriceQuote;

/// Width of the separator line between the per-currency lines and the
/// total.
const SEPARATOR_WIDTH: usize = 50;

/// USD value of one quote: `quantity * last_price * reference_rate`,
/// exact (unrounded).
pub fn line_value(quote: &PriceQuote, reference_rate: Decimal) -> Decimal {
    quote.quantity * quote.last_price * reference_rate
}

/// Rounds a value for display: two decimals, halves away from zero.
fn rounded(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Prints one `"<symbol>: <usd>$"` line per quote as it is computed,
/// then a separator and the `"I have: <usd> $"` total.
///
/// Lines are written incrementally; if writing fails midway, the lines
/// already written stay written. Returns the USD total.
///
/// # Errors
///
/// Returns [`PouchError::Io`](crate::PouchError::Io) if the writer
/// fails.
pub fn report<W: Write>(
    out: &mut W,
    reference_rate: Decimal,
    quotes: &[PriceQuote],
) -> Result<Decimal> {
    let mut total_btc = Decimal::ZERO;
    for quote in quotes {
        total_btc += quote.quantity * quote.last_price;
        writeln!(out, "{}: {:.2}$", quote.currency, rounded(line_value(quote, reference_rate)))?;
    }

    let total_usd = reference_rate * total_btc;
    writeln!(out, "{}", "-".repeat(SEPARATOR_WIDTH))?;
    writeln!(out, "I have: {:.2} $", rounded(total_usd))?;

    Ok(total_usd)
}
