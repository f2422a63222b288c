//! Bittrex portfolio valuation library.
//!
//! Provides credential loading, request signing, typed models for the
//! Bittrex v1.1 REST API, and the valuation pipeline that turns a list
//! of account balances into a USD report.

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod report;

pub use error::{PouchError, Result};
