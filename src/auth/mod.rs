//! Authentication module.
//!
//! This module provides:
//! - Credential loading from the local secret file
//! - Single-legged OAuth1 request signing (HMAC-SHA1)

pub mod credentials;
pub mod signer;

pub use credentials::Credentials;
pub use signer::OauthSigner;
