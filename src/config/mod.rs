//! Configuration module.
//!
//! TOML file loading with defaults, merged with CLI overrides.

pub mod loader;

pub use loader::Config;
