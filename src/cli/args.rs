//! Command-line argument definitions using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::Config;

/// Twitter timeline image downloader CLI.
#[derive(Parser, Debug)]
#[command(
    name = "twitter-imagedl",
    version,
    about = "Download images from a Twitter account's timeline",
    long_about = "Fetches a user's timeline via the v1.1 REST API with OAuth1-signed \
                  requests, downloads every image newer than the last run, and keeps a \
                  per-account watermark so each image is fetched at least once."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Path to configuration file.
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    /// Base directory for downloads.
    #[arg(short = 'd', long = "directory")]
    pub download_directory: Option<PathBuf>,

    /// Path to the OAuth credential file.
    #[arg(long = "credentials", env = "TWITTER_IMAGEDL_CREDENTIALS")]
    pub credentials_file: Option<PathBuf>,

    /// Maximum tweets per timeline page.
    #[arg(long = "page-size")]
    pub page_size: Option<u32>,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Get new images from the specified account's timeline.
    #[command(name = "getimages")]
    GetImages {
        /// Account (screen name) to download from.
        account: String,
    },
}

impl Args {
    /// Merge CLI arguments into an existing config, overriding where specified.
    pub fn merge_into_config(&self, config: &mut Config) {
        if let Some(dir) = &self.download_directory {
            config.download_directory = dir.clone();
        }

        if let Some(path) = &self.credentials_file {
            config.credentials_file = path.clone();
        }

        if let Some(page_size) = self.page_size {
            config.page_size = page_size;
        }
    }
}
