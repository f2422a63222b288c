//! API credentials loaded from a local JSON file.
//!
//! The file lives next to the binary under the name `keys` and holds a
//! named credential set:
//!
//! ```json
//! {"read_key": {"key": "...", "secret": "..."}}
//! ```
//!
//! Only read access is required, hence the `read_key` section. There
//! are no CLI flags and no environment variables; the path is fixed.

use std::path::Path;

use serde::Deserialize;
use zeroize::Zeroizing;

use crate::{PouchError, Result};

/// Default credentials file path, relative to the working directory.
pub const KEYS_FILE: &str = "keys";

/// API key pair for the authenticated balances endpoint.
///
/// The secret is wiped from memory when dropped.
#[derive(Debug)]
pub struct Credentials {
    pub api_key: String,
    pub api_secret: Zeroizing<String>,
}

/// On-disk shape of the credentials file.
#[derive(Deserialize)]
struct KeysFile {
    read_key: KeySet,
}

#[derive(Deserialize)]
struct KeySet {
    key: String,
    secret: String,
}

/// Loads API credentials from `path`.
///
/// # Errors
///
/// Returns [`PouchError::Config`] if the file is absent or unreadable,
/// is not valid JSON, or is missing the `read_key.key` /
/// `read_key.secret` fields (empty strings count as missing).
pub fn load_credentials(path: &Path) -> Result<Credentials> {
    let raw = std::fs::read_to_string(path).map_err(|e| {
        PouchError::Config(format!("cannot read credentials file {}: {e}", path.display()))
    })?;

    let keys: KeysFile = serde_json::from_str(&raw)
        .map_err(|e| PouchError::Config(format!("malformed credentials file: {e}")))?;

    if keys.read_key.key.is_empty() {
        return Err(PouchError::Config("read_key.key is empty".to_string()));
    }
    if keys.read_key.secret.is_empty() {
        return Err(PouchError::Config("read_key.secret is empty".to_string()));
    }

    Ok(Credentials {
        api_key: keys.read_key.key,
        api_secret: Zeroizing::new(keys.read_key.secret),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_keys_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("create temp file");
        file.write_all(contents.as_bytes()).expect("write temp file");
        file
    }

    #[test]
    fn loads_valid_credentials() {
        let file = write_keys_file(r#"{"read_key": {"key": "abc", "secret": "xyz"}}"#);
        let creds = load_credentials(file.path()).unwrap();
        assert_eq!(creds.api_key, "abc");
        assert_eq!(creds.api_secret.as_str(), "xyz");
    }

    #[test]
    fn missing_file_is_a_config_error() {
        let result = load_credentials(Path::new("/nonexistent/keys"));
        assert!(matches!(result, Err(PouchError::Config(_))));
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        let file = write_keys_file("not json at all");
        let result = load_credentials(file.path());
        assert!(matches!(result, Err(PouchError::Config(_))));
    }

    #[test]
    fn missing_secret_field_is_a_config_error() {
        let file = write_keys_file(r#"{"read_key": {"key": "abc"}}"#);
        let result = load_credentials(file.path());
        assert!(matches!(result, Err(PouchError::Config(_))));
    }

    #[test]
    fn empty_key_is_a_config_error() {
        let file = write_keys_file(r#"{"read_key": {"key": "", "secret": "xyz"}}"#);
        let result = load_credentials(file.path());
        assert!(matches!(result, Err(PouchError::Config(_))));
    }
}
