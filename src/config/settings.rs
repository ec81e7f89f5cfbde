//! cn-hub configuration settings

use config::{Config, Environment, File};
use serde::Deserialize;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::models::{HubError, HubResult};

/// Default config file base name (extension is inferred)
pub const DEFAULT_CONFIG_NAME: &str = "cn-hub";

/// Environment variable prefix, e.g. `CN_HUB__OUTPUT__FORMAT`
pub const ENV_PREFIX: &str = "CN_HUB";

/// Main configuration
///
/// Only presentation is configurable; the hub naming scheme is fixed.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub output: OutputSettings,
}

/// Output format for the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Text,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Text => write!(f, "text"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = HubError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "text" => Ok(OutputFormat::Text),
            _ => Err(HubError::validation(format!("unknown output format: {}", s))),
        }
    }
}

/// Output settings
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputSettings {
    #[serde(default)]
    pub format: OutputFormat,
}

fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX).separator("__")
}

impl Settings {
    /// Load settings from the default config file, if present, and environment
    pub fn load() -> HubResult<Self> {
        Self::load_with(DEFAULT_CONFIG_NAME, false, environment())
    }

    /// Load settings from a config file path (without extension) that must exist
    pub fn load_from<P: AsRef<Path>>(path: P) -> HubResult<Self> {
        Self::load_with(path, true, environment())
    }

    fn load_with<P: AsRef<Path>>(path: P, required: bool, env: Environment) -> HubResult<Self> {
        let config_path = path.as_ref();
        let config_name = config_path.to_str().ok_or_else(|| {
            HubError::ConfigError(format!("non UTF-8 config path: {}", config_path.display()))
        })?;

        let builder = Config::builder()
            // Start with default values
            .set_default("output.format", OutputFormat::default().to_string())?
            .add_source(File::with_name(config_name).required(required))
            // Add environment variables with prefix CN_HUB__
            .add_source(env);

        Ok(builder.build()?.try_deserialize()?)
    }
}
