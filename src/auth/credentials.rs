//! OAuth credential loading.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};

/// Single-legged OAuth1 credentials, loaded once at startup and immutable
/// for the lifetime of the process. Held in memory only.
#[derive(Debug, Clone, Deserialize)]
pub struct Credentials {
    pub consumer_key: String,
    pub consumer_secret: String,
    pub token: String,
    pub token_secret: String,
}

impl Credentials {
    /// Load credentials from a JSON secret file.
    ///
    /// A missing file yields [`Error::CredentialMissing`] so the caller can
    /// warn and defer the failure until signing is actually attempted.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::CredentialMissing(path.to_path_buf())
            } else {
                Error::Io(e)
            }
        })?;

        let credentials: Credentials = serde_json::from_str(&content)
            .map_err(|e| Error::CredentialMalformed(format!("{}: {}", path.display(), e)))?;

        Ok(credentials)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_valid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("token.json");
        fs::write(
            &path,
            r#"{
                "consumer_key": "ck",
                "consumer_secret": "cs",
                "token": "tk",
                "token_secret": "ts"
            }"#,
        )
        .unwrap();

        let credentials = Credentials::load(&path).unwrap();
        assert_eq!(credentials.consumer_key, "ck");
        assert_eq!(credentials.token_secret, "ts");
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.json");

        match Credentials::load(&path) {
            Err(Error::CredentialMissing(p)) => assert_eq!(p, path),
            other => panic!("expected CredentialMissing, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("token.json");
        fs::write(&path, "not json at all").unwrap();

        assert!(matches!(
            Credentials::load(&path),
            Err(Error::CredentialMalformed(_))
        ));
    }

    #[test]
    fn test_missing_field_is_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("token.json");
        fs::write(&path, r#"{"consumer_key": "ck"}"#).unwrap();

        assert!(matches!(
            Credentials::load(&path),
            Err(Error::CredentialMalformed(_))
        ));
    }
}
