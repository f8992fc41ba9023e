//! Path and filename derivation.

use std::path::{Path, PathBuf};

use url::Url;

use crate::error::{Error, Result};

/// Per-account download directory under the base directory.
pub fn account_dir(base: &Path, account: &str) -> PathBuf {
    base.join(account)
}

/// Derive the local filename from an image URL's final path segment.
///
/// `https://pbs.twimg.com/media/abcd.jpg` -> `abcd.jpg`
pub fn file_name_from_url(url: &str) -> Result<String> {
    let parsed = Url::parse(url)?;
    let segment = parsed
        .path_segments()
        .and_then(|segments| segments.last())
        .filter(|s| !s.is_empty())
        .ok_or_else(|| Error::Download(format!("URL has no filename segment: {}", url)))?;

    Ok(segment.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_dir() {
        assert_eq!(
            account_dir(Path::new("downloaded_images"), "alice"),
            PathBuf::from("downloaded_images/alice")
        );
    }

    #[test]
    fn test_file_name_from_url() {
        assert_eq!(
            file_name_from_url("https://pbs.twimg.com/media/abcd.jpg").unwrap(),
            "abcd.jpg"
        );
    }

    #[test]
    fn test_file_name_ignores_query() {
        assert_eq!(
            file_name_from_url("https://pbs.twimg.com/media/abcd.jpg?name=orig").unwrap(),
            "abcd.jpg"
        );
    }

    #[test]
    fn test_url_without_filename_is_rejected() {
        assert!(file_name_from_url("https://pbs.twimg.com/").is_err());
        assert!(file_name_from_url("not a url").is_err());
    }
}
