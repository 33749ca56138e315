//! Cloudbox CLI entry point.
//!
//! Loads configuration, initializes logging, and runs one command against
//! JSON dumps of the folder and file listing responses.

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use cloudbox_core::config::ClientConfig;
use cloudbox_core::error::AppError;

mod commands;
mod output;

use commands::Cli;

fn main() {
    let cli = Cli::parse();

    let config = match load_configuration(&cli.config_dir) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = cli.execute(&config) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Load configuration from the config directory and environment
fn load_configuration(config_dir: &str) -> Result<ClientConfig, AppError> {
    let env = std::env::var("CLOUDBOX_ENV").unwrap_or_else(|_| "development".to_string());
    ClientConfig::load_from(config_dir, &env)
}

/// Initialize tracing/logging
fn init_logging(config: &ClientConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    if config.logging.is_json() {
        fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .init();
    } else {
        fmt()
            .pretty()
            .with_env_filter(filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .init();
    }

    tracing::debug!(
        level = %config.logging.level,
        format = %config.logging.format,
        "Logging initialized"
    );
}
