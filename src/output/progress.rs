//! Progress bar helpers.

use indicatif::{ProgressBar, ProgressStyle};

/// Progress bar for the image download loop.
pub fn download_progress_bar(total: u64) -> ProgressBar {
    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} images ({eta})")
            .unwrap()
            .progress_chars("#>-"),
    );
    pb
}
