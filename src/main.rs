//! Contact Book - interactive assistant entry point.
//!
//! Replies go to stdout; logs go to stderr.

use anyhow::Result;
use contact_book::{cli, Assistant, Config};
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration before logging so its level can seed the filter
    let config = Config::from_env();

    let level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "error".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!(
        "Starting assistant with a {} day birthday window",
        config.birthday_window_days
    );

    let mut assistant = Assistant::new(&config);
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    cli::run(&mut assistant, &config.prompt, stdin.lock(), &mut stdout)?;

    info!("Assistant shutdown complete");
    Ok(())
}
