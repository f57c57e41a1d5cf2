//! Configuration module
//!
//! Loads application configuration from a TOML file with environment
//! variable overrides.

pub mod config;
pub mod loader;
