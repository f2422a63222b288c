//! HTTP calls against the Bittrex REST API and the Preev rate feed.
//!
//! Two phases, invoked explicitly by the caller: [`fetch_balances`]
//! retrieves the signed balance list, then [`resolve_prices`] joins
//! each non-excluded balance with its last traded price. Bodies are
//! fetched as text and decoded separately so a malformed document is a
//! [`PouchError::Parse`] rather than a transport error; the decoding
//! itself lives in pure `parse_*` functions.

use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::auth::{next_nonce, sign};
use crate::config::Credentials;
use crate::models::{ApiEnvelope, Balance, MarketSummary, PriceQuote, PulseResponse};
use crate::{PouchError, Result};

const BALANCES_URL: &str = "https://bittrex.com/api/v1.1/account/getbalances";
const MARKET_URL: &str = "https://bittrex.com/api/v1.1/public/getmarketsummary";
const PULSE_URL: &str = "http://preev.com/pulse/units:btc+usd/sources:bittrex+bitstamp+btce";

/// Symbols that never get a price lookup: they are the reporting unit
/// itself or a stable proxy for it.
pub const EXCLUDED_CURRENCIES: [&str; 2] = ["USDT", "BTC"];

/// Returns `true` if `currency` is in the excluded set.
pub fn is_excluded(currency: &str) -> bool {
    EXCLUDED_CURRENCIES.contains(&currency)
}

/// Fetches the account's balance list via a signed GET.
///
/// The request URL carries the API key and a fresh nonce; the
/// `apisign` header carries the HMAC-SHA512 of that URL keyed by the
/// API secret.
///
/// # Errors
///
/// Returns [`PouchError::Auth`] if the exchange rejects the signature
/// or key, [`PouchError::Network`] on transport failure, and
/// [`PouchError::Parse`] if the body is not the expected shape.
pub async fn fetch_balances(http: &reqwest::Client, creds: &Credentials) -> Result<Vec<Balance>> {
    let nonce = next_nonce();
    let url = format!("{BALANCES_URL}?apikey={}&nonce={nonce}", creds.api_key);
    let apisign = sign(&creds.api_secret, &url)?;

    let response = http.get(&url).header("apisign", apisign).send().await?;
    let body = response.error_for_status()?.text().await?;

    let balances = parse_balances(&body)?;
    info!(count = balances.len(), "fetched account balances");
    Ok(balances)
}

/// Decodes a balances response body.
pub fn parse_balances(body: &str) -> Result<Vec<Balance>> {
    let envelope: ApiEnvelope<Vec<Balance>> = serde_json::from_str(body)?;
    if !envelope.success {
        return Err(PouchError::Auth(envelope.message));
    }
    envelope
        .result
        .ok_or_else(|| PouchError::Parse("balances response has no result".to_string()))
}

/// Fetches the BTC→USD reference rate from the Preev pulse feed.
///
/// # Errors
///
/// Returns [`PouchError::Network`] on transport failure and
/// [`PouchError::Parse`] if the Bitstamp quote is missing.
pub async fn fetch_reference_rate(http: &reqwest::Client) -> Result<Decimal> {
    let body = http.get(PULSE_URL).send().await?.error_for_status()?.text().await?;
    let rate = parse_reference_rate(&body)?;
    info!(%rate, "fetched BTC/USD reference rate");
    Ok(rate)
}

/// Decodes a pulse body down to the Bitstamp last price.
pub fn parse_reference_rate(body: &str) -> Result<Decimal> {
    let pulse: PulseResponse = serde_json::from_str(body)?;
    Ok(pulse.btc.usd.bitstamp.last)
}

/// Fetches the last traded BTC price for `currency` from its market
/// summary.
///
/// # Errors
///
/// Returns [`PouchError::Network`] on transport failure and
/// [`PouchError::Parse`] if the summary is missing, empty, or carries
/// an unsuccessful envelope (e.g. an unknown market).
pub async fn fetch_last_price(http: &reqwest::Client, currency: &str) -> Result<Decimal> {
    let url = format!("{MARKET_URL}?market=btc-{}", currency.to_lowercase());
    let body = http.get(&url).send().await?.error_for_status()?.text().await?;
    parse_market_summary(&body)
}

/// Decodes a market summary body down to its last traded price.
///
/// The result array can carry more than one entry; the final one is
/// the current summary.
pub fn parse_market_summary(body: &str) -> Result<Decimal> {
    let envelope: ApiEnvelope<Vec<MarketSummary>> = serde_json::from_str(body)?;
    if !envelope.success {
        return Err(PouchError::Parse(format!(
            "market summary error: {}",
            envelope.message
        )));
    }
    let summaries = envelope
        .result
        .ok_or_else(|| PouchError::Parse("market summary has no result".to_string()))?;
    match summaries.last() {
        Some(summary) => Ok(summary.last),
        None => Err(PouchError::Parse("market summary result is empty".to_string())),
    }
}

/// Joins every non-excluded balance with its last traded price,
/// sequentially, one lookup per currency.
///
/// Excluded symbols never generate a lookup. The first failed lookup
/// aborts the whole batch.
pub async fn resolve_prices(
    http: &reqwest::Client,
    balances: &[Balance],
) -> Result<Vec<PriceQuote>> {
    let mut quotes = Vec::new();
    for balance in balances {
        if is_excluded(&balance.currency) {
            debug!(currency = %balance.currency, "skipping excluded currency");
            continue;
        }
        let last_price = fetch_last_price(http, &balance.currency).await?;
        quotes.push(PriceQuote {
            currency: balance.currency.clone(),
            quantity: balance.quantity,
            last_price,
        });
    }
    info!(count = quotes.len(), "resolved market prices");
    Ok(quotes)
}
