//! Download module.
//!
//! This module provides:
//! - Single image downloading
//! - The sequential download runner with progress reporting

pub mod media;
pub mod runner;

pub use media::{download_image, ByteStream, MediaFetcher};
pub use runner::{download_all, RunStats};
