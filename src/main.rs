use std::path::Path;

use pouch::PouchError;
use pouch::client::{fetch_balances, fetch_reference_rate, resolve_prices};
use pouch::config::{KEYS_FILE, load_credentials};
use pouch::report::report;

#[tokio::main]
async fn main() -> Result<(), PouchError> {
    // Initialize tracing subscriber for logging output.
    tracing_subscriber::fmt::init();

    let credentials = load_credentials(Path::new(KEYS_FILE))?;
    let http = reqwest::Client::new();

    let reference_rate = fetch_reference_rate(&http).await?;
    let balances = fetch_balances(&http, &credentials).await?;
    let quotes = resolve_prices(&http, &balances).await?;

    report(&mut std::io::stdout().lock(), reference_rate, &quotes)?;

    Ok(())
}
