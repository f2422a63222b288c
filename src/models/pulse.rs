//! Preev pulse rate-feed models.
//!
//! The pulse document nests one quote object per (unit, source) pair;
//! only the Bitstamp BTC→USD quote is read, the remaining sources are
//! ignored during deserialization.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Top level of the pulse document.
#[derive(Debug, Clone, Deserialize)]
pub struct PulseResponse {
    pub btc: BtcRates,
}

/// BTC quotes keyed by display unit.
#[derive(Debug, Clone, Deserialize)]
pub struct BtcRates {
    pub usd: UsdSources,
}

/// USD quotes keyed by source exchange.
#[derive(Debug, Clone, Deserialize)]
pub struct UsdSources {
    pub bitstamp: SourceQuote,
}

/// One source's quote. Preev encodes the numbers as strings.
#[derive(Debug, Clone, Deserialize)]
pub struct SourceQuote {
    pub last: Decimal,
    #[serde(default)]
    pub volume: Option<Decimal>,
}
