//! Sequential download runner.

use std::path::Path;

use crate::download::media::{download_image, MediaFetcher};
use crate::output::download_progress_bar;

/// Tally for one run.
#[derive(Debug, Default)]
pub struct RunStats {
    pub urls_found: u64,
    pub downloaded: u64,
    pub failed: u64,
}

/// Download every URL in order, one at a time. Each image is independent:
/// a failure is logged and the remaining URLs are still attempted.
pub async fn download_all<F: MediaFetcher + Sync>(
    fetcher: &F,
    target_dir: &Path,
    urls: &[String],
) -> RunStats {
    let mut stats = RunStats {
        urls_found: urls.len() as u64,
        ..Default::default()
    };

    let progress = download_progress_bar(urls.len() as u64);

    for url in urls {
        match download_image(fetcher, target_dir, url).await {
            Ok(_) => stats.downloaded += 1,
            Err(e) => {
                tracing::warn!("Failed to download {}: {}", url, e);
                stats.failed += 1;
            }
        }
        progress.inc(1);
    }

    progress.finish_and_clear();

    stats
}
