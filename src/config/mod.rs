//! Configuration module for cn-hub
//!
//! Supports loading configuration from config files and environment variables.

mod settings;

pub use settings::*;
