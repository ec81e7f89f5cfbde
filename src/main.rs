//! cn-hub - Main Entry Point
//!
//! Prints the derived hub config for the given name, owner and workspace root.

use anyhow::Context;
use clap::Parser;
use tracing::warn;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cn_hub::cli::Cli;
use cn_hub::config::Settings;

fn main() -> anyhow::Result<()> {
    // Initialize logging with RUST_LOG environment variable support
    // Default: info level for cn_hub, warn for everything else
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,cn_hub=info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true))
        .init();

    let cli = Cli::parse();

    // An explicit --config must load; the implicit default falls back
    let settings = match &cli.config {
        Some(_) => cli.settings().context("Failed to load config")?,
        None => cli.settings().unwrap_or_else(|e| {
            warn!("Failed to load config: {}, using defaults", e);
            Settings::default()
        }),
    };

    let output = cli.run(&settings).context("Failed to render hub config")?;
    println!("{}", output);

    Ok(())
}
