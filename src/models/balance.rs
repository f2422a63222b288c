//! Account balance models.

use rust_decimal::Decimal;
use serde::Deserialize;

/// One held currency, as returned by `/account/getbalances`.
///
/// Bittrex also reports `Available`, `Pending` and a deposit address
/// per entry; the report values the total balance only.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Balance {
    /// Currency symbol (e.g. `"ETH"`), uppercase on the wire.
    #[serde(rename = "Currency")]
    pub currency: String,
    /// Total quantity held across available and pending.
    #[serde(rename = "Balance")]
    pub quantity: Decimal,
}
