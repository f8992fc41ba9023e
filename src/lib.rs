//! twitter-imagedl - batch image downloader for Twitter timelines.
//!
//! Fetches images posted by a given account via the paginated v1.1 REST
//! API, signing each request with a single-legged OAuth1 credential,
//! deduplicating against previously seen tweets through a per-account
//! watermark, and writing downloaded media to per-account folders. One
//! pass per invocation.
//!
//! # Example
//!
//! ```no_run
//! use twitter_imagedl::{fetch_new_images, Config, Ledger, TwitterApi};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::default();
//!     let api = TwitterApi::new(None, config.credentials_file.clone())?;
//!     let ledger = Ledger::read(&config.ledger_path())?;
//!
//!     let scan = fetch_new_images(&api, "alice", config.page_size, ledger.watermark("alice")).await?;
//!     println!("{} new images", scan.image_urls.len());
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod auth;
pub mod cli;
pub mod config;
pub mod download;
pub mod error;
pub mod fs;
pub mod ledger;
pub mod output;
pub mod timeline;
pub mod tweet_id;

// Re-exports for convenience
pub use api::TwitterApi;
pub use auth::{Credentials, OauthSigner};
pub use config::Config;
pub use download::{download_all, download_image, MediaFetcher, RunStats};
pub use error::{Error, Result};
pub use ledger::Ledger;
pub use timeline::{fetch_new_images, TimelineScan, TimelineSource};
pub use tweet_id::{compare_ids, IdOrdering};
