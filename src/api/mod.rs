//! Twitter API module.
//!
//! This module provides:
//! - HTTP client for the v1.1 REST API with OAuth1-signed requests
//! - API response types and timeline page parsing

pub mod client;
pub mod types;

pub use client::TwitterApi;
pub use types::*;
