//! Market summary models.

use rust_decimal::Decimal;
use serde::Deserialize;

/// One entry of the `/public/getmarketsummary` result array.
#[derive(Debug, Clone, Deserialize)]
pub struct MarketSummary {
    /// Pair name (e.g. `"BTC-ETH"`).
    #[serde(rename = "MarketName")]
    pub market_name: String,
    /// Last traded price, denominated in the quote currency (BTC).
    #[serde(rename = "Last")]
    pub last: Decimal,
    #[serde(rename = "High", default)]
    pub high: Option<Decimal>,
    #[serde(rename = "Low", default)]
    pub low: Option<Decimal>,
    #[serde(rename = "Bid", default)]
    pub bid: Option<Decimal>,
    #[serde(rename = "Ask", default)]
    pub ask: Option<Decimal>,
    #[serde(rename = "Volume", default)]
    pub volume: Option<Decimal>,
}
