//! Filesystem module.
//!
//! Path derivation for per-account download folders and image filenames.

pub mod paths;

pub use paths::{account_dir, file_name_from_url};
