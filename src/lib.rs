//! cn-hub - Hub Identity Derivation
//!
//! Derives the identity of a hub repository from a sanitized name, an owner
//! and a workspace root:
//! - Hub name (`cn-<name>`)
//! - Repository slug and hosting URL
//! - Local hub directory

pub mod config;
pub mod models;
pub mod hub;
pub mod cli;

// Re-export commonly used types
pub use config::Settings;
pub use models::{HubConfig, HubError, HubResult};
pub use hub::{build_hub_config, HUB_NAME_PREFIX, HUB_URL_BASE};

/// Version of cn-hub
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
