//! Image file downloading.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use futures::stream::BoxStream;
use futures::StreamExt;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;

use crate::error::Result;
use crate::fs::file_name_from_url;

/// Suffix requesting the original-resolution variant from the media host.
const ORIG_VARIANT_SUFFIX: &str = ":orig";

/// Chunked image body.
pub type ByteStream = BoxStream<'static, Result<Vec<u8>>>;

/// Source of image bodies. The HTTP client implements this; tests
/// substitute canned bytes.
#[async_trait]
pub trait MediaFetcher {
    async fn fetch_stream(&self, url: &str) -> Result<ByteStream>;
}

/// Download one image into `target_dir`.
///
/// Creates the directory when absent, names the file after the URL's final
/// path segment, and overwrites any existing file without checking first.
pub async fn download_image<F: MediaFetcher + Sync>(
    fetcher: &F,
    target_dir: &Path,
    url: &str,
) -> Result<PathBuf> {
    let output_path = prepare_destination(target_dir, url).await?;

    let mut stream = fetcher.fetch_stream(&orig_variant_url(url)).await?;

    // Stream to file
    let mut file = File::create(&output_path).await?;
    while let Some(chunk) = stream.next().await {
        file.write_all(&chunk?).await?;
    }
    file.flush().await?;

    tracing::debug!("Downloaded: {}", output_path.display());

    Ok(output_path)
}

/// Ensure the target directory exists and derive the output path.
async fn prepare_destination(target_dir: &Path, url: &str) -> Result<PathBuf> {
    let filename = file_name_from_url(url)?;
    tokio::fs::create_dir_all(target_dir).await?;
    Ok(target_dir.join(filename))
}

fn orig_variant_url(url: &str) -> String {
    format!("{}{}", url, ORIG_VARIANT_SUFFIX)
}
