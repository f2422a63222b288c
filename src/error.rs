//! Crate-level error types.
//!
//! [`PouchError`] unifies every error source (credentials file, exchange
//! authentication, transport, response decoding) behind a single enum so
//! callers can match on the variant they care about while still using
//! the `?` operator for easy propagation.

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PouchError>;

/// Top-level error type returned by all public APIs.
#[derive(Debug, thiserror::Error)]
pub enum PouchError {
    /// The credentials file could not be found, read, or deserialized.
    #[error("configuration error: {0}")]
    Config(String),

    /// The exchange rejected the signed request (bad key or signature).
    #[error("authentication error: {0}")]
    Auth(String),

    /// An HTTP request failed at the transport level.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A response body did not have the expected shape.
    #[error("parse error: {0}")]
    Parse(String),

    /// Writing the report failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for PouchError {
    fn from(e: serde_json::Error) -> Self {
        PouchError::Parse(e.to_string())
    }
}
