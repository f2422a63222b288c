//! Typed models for the Bittrex v1.1 REST API and the Preev rate feed.
//!
//! Every response field the pipeline reads is a required struct field:
//! a document missing `Balance` or `Last` fails deserialization instead
//! of being silently valued at some default.

pub mod balance;
pub mod market;
pub mod pulse;

use rust_decimal::Decimal;
use serde::Deserialize;

pub use balance::Balance;
pub use market::MarketSummary;
pub use pulse::PulseResponse;

/// Standard Bittrex v1.1 response envelope.
///
/// On failure `success` is `false`, `message` names the error (e.g.
/// `"APISIGN_NOT_PROVIDED"`), and `result` is absent or null.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    pub result: Option<T>,
}

/// A held balance joined with its last traded price.
///
/// `last_price` is denominated in BTC; multiplying by the BTC→USD
/// reference rate yields the reporting value.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceQuote {
    pub currency: String,
    pub quantity: Decimal,
    pub last_price: Decimal,
}
