//! Error types for the twitter-imagedl application.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the application.
#[derive(Error, Debug)]
pub enum Error {
    // Credential errors
    #[error("Credential file not found: {}. It is required for request signing.", .0.display())]
    CredentialMissing(PathBuf),

    #[error("Credential file is not valid: {0}")]
    CredentialMalformed(String),

    #[error("Request signing failed: {0}")]
    Signing(String),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    // API errors
    #[error("API error: {0}")]
    Api(String),

    #[error("Malformed API response: {0}")]
    MalformedResponse(String),

    // Download errors
    #[error("Download failed: {0}")]
    Download(String),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // HTTP errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    // URL parsing errors
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),
}

impl Error {
    /// Credential errors become fatal once signing is actually attempted;
    /// everything else is handled locally and logged.
    pub fn is_credential_error(&self) -> bool {
        matches!(
            self,
            Error::CredentialMissing(_) | Error::CredentialMalformed(_) | Error::Signing(_)
        )
    }
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes.
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const USAGE_ERROR: i32 = 1;
    pub const CREDENTIAL_ERROR: i32 = 2;
    pub const UNEXPECTED_ERROR: i32 = 3;
}
