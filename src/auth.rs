//! Bittrex REST API request signing.
//!
//! Authenticated v1.1 endpoints expect an `apisign` header containing
//! the HMAC-SHA512 of the full request URL, keyed by the API secret and
//! rendered as lowercase hex. The URL itself carries the API key and a
//! nonce as query parameters; the exchange rejects reused nonces.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use hmac::{Hmac, Mac};
use sha2::Sha512;

use crate::Result;

/// Tracks the last nonce issued so every call returns a strictly
/// increasing value even when the wall-clock hasn't advanced.
static LAST_NONCE: AtomicU64 = AtomicU64::new(0);

/// Returns a strictly monotonically-increasing nonce with millisecond
/// resolution.
///
/// Uses the wall-clock as the baseline but guarantees that successive
/// calls always return a value larger than the previous one, even when
/// the clock resolution is too coarse or the clock jumps backwards.
pub fn next_nonce() -> u64 {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64;

    let mut prev = LAST_NONCE.load(Ordering::Relaxed);
    loop {
        let nonce = now.max(prev + 1);
        match LAST_NONCE.compare_exchange_weak(prev, nonce, Ordering::Relaxed, Ordering::Relaxed) {
            Ok(_) => return nonce,
            Err(actual) => prev = actual,
        }
    }
}

/// Computes the `apisign` header value for a request URL.
///
/// Algorithm: `lowercase_hex(HMAC-SHA512(secret, url))`. Deterministic
/// for a given (secret, url) pair; any change to the URL changes the
/// digest.
///
/// # Errors
///
/// Returns [`PouchError::Config`](crate::PouchError::Config) if the
/// secret cannot be used as an HMAC key.
pub fn sign(api_secret: &str, url: &str) -> Result<String> {
    let mut mac = Hmac::<Sha512>::new_from_slice(api_secret.as_bytes())
        .map_err(|e| crate::PouchError::Config(format!("invalid HMAC key: {e}")))?;
    mac.update(url.as_bytes());
    let digest = mac.finalize().into_bytes();

    Ok(hex::encode(digest))
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "https://bittrex.com/api/v1.1/account/getbalances?apikey=k&nonce=1";

    #[test]
    fn sign_produces_deterministic_output() {
        let sig1 = sign("topsecret", URL).unwrap();
        let sig2 = sign("topsecret", URL).unwrap();
        assert_eq!(sig1, sig2);
    }

    #[test]
    fn sign_is_lowercase_hex_of_sha512_width() {
        let sig = sign("topsecret", URL).unwrap();
        // SHA-512 digest is 64 bytes, so 128 hex characters.
        assert_eq!(sig.len(), 128);
        assert!(sig.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn sign_changes_when_url_changes() {
        let sig1 = sign("topsecret", URL).unwrap();
        let sig2 = sign("topsecret", &format!("{URL}0")).unwrap();
        assert_ne!(sig1, sig2);
    }

    #[test]
    fn sign_changes_when_secret_changes() {
        let sig1 = sign("topsecret", URL).unwrap();
        let sig2 = sign("othersecret", URL).unwrap();
        assert_ne!(sig1, sig2);
    }

    #[test]
    fn next_nonce_is_strictly_monotonic() {
        let mut prev = next_nonce();
        for _ in 0..1_000 {
            let current = next_nonce();
            assert!(current > prev, "nonce did not increase: {prev} -> {current}");
            prev = current;
        }
    }
}
