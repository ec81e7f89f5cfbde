//! Command line interface: parses arguments, loads settings and renders the derived hub config.

use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use crate::config::{OutputFormat, Settings};
use crate::hub::build_hub_config;
use crate::models::{HubConfig, HubResult};

#[derive(Parser, Debug)]
#[command(
    name = "cn-hub",
    about = "Derive the hub repository name, slug, URL and local directory",
    version
)]
pub struct Cli {
    /// Already sanitized hub name fragment
    pub sanitized_name: String,
    /// Account or organization owning the hub repository
    pub owner: String,
    /// Directory the hub directory is placed under
    pub workspace_root: PathBuf,

    /// Config file path without extension
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output format, overrides `output.format`
    #[arg(long, value_parser = parse_format)]
    pub format: Option<OutputFormat>,
}

fn parse_format(s: &str) -> Result<OutputFormat, String> {
    s.parse().map_err(|e: crate::models::HubError| e.to_string())
}

impl Cli {
    /// Load settings for this invocation. An explicit `--config` file must exist.
    pub fn settings(&self) -> HubResult<Settings> {
        match &self.config {
            Some(path) => Settings::load_from(path),
            None => Settings::load(),
        }
    }

    /// Derive the config and render it in the selected format
    pub fn run(&self, settings: &Settings) -> HubResult<String> {
        let config = build_hub_config(&self.sanitized_name, &self.owner, &self.workspace_root);
        info!("Hub {} at {}", config.hub_repo, config.hub_url);

        let format = self.format.unwrap_or(settings.output.format);
        render(&config, format)
    }
}

/// Render a hub config for stdout
pub fn render(config: &HubConfig, format: OutputFormat) -> HubResult<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(config)?),
        OutputFormat::Text => Ok(format!(
            "hubName: {}\nhubRepo: {}\nhubUrl: {}\nhubDir: {}",
            config.hub_name,
            config.hub_repo,
            config.hub_url,
            config.hub_dir.display()
        )),
    }
}
