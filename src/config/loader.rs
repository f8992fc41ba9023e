//! Configuration structures and loading logic.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Ledger filename under the download directory.
const LEDGER_FILE: &str = "latestTweetIds.json";

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base directory for downloads; one subdirectory per account.
    #[serde(default = "default_download_directory")]
    pub download_directory: PathBuf,

    /// Path to the OAuth credential file.
    #[serde(default = "default_credentials_file")]
    pub credentials_file: PathBuf,

    /// Maximum tweets requested per timeline page.
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            download_directory: default_download_directory(),
            credentials_file: default_credentials_file(),
            page_size: default_page_size(),
        }
    }
}

fn default_download_directory() -> PathBuf {
    PathBuf::from("downloaded_images")
}

fn default_credentials_file() -> PathBuf {
    PathBuf::from("token.json")
}

fn default_page_size() -> u32 {
    200
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Config(format!("Configuration file not found: {}", path.display()))
            } else {
                Error::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Path of the watermark ledger file.
    pub fn ledger_path(&self) -> PathBuf {
        self.download_directory.join(LEDGER_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.download_directory, PathBuf::from("downloaded_images"));
        assert_eq!(config.credentials_file, PathBuf::from("token.json"));
        assert_eq!(config.page_size, 200);
        assert_eq!(
            config.ledger_path(),
            PathBuf::from("downloaded_images/latestTweetIds.json")
        );
    }

    #[test]
    fn test_load_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "page_size = 50\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.page_size, 50);
        assert_eq!(config.download_directory, PathBuf::from("downloaded_images"));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            Config::load(&dir.path().join("nope.toml")),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_load_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "page_size = [not toml").unwrap();

        assert!(matches!(Config::load(&path), Err(Error::TomlParse(_))));
    }
}
