//! CLI command definitions and dispatch.

pub mod file;
pub mod folder;
pub mod history;
pub mod preview;

use std::path::Path;

use clap::{Parser, Subcommand};
use serde::de::DeserializeOwned;

use crate::output::OutputFormat;
use cloudbox_core::config::ClientConfig;
use cloudbox_core::error::AppError;

/// Cloudbox: drive the client core against JSON dumps of API responses
#[derive(Debug, Parser)]
#[command(name = "cloudbox", version, about, long_about = None)]
pub struct Cli {
    /// Directory holding default.toml and per-environment overlays
    #[arg(short, long, default_value = "config")]
    pub config_dir: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Folder tree and move validation
    Folder(folder::FolderArgs),
    /// File list filtering and sorting
    File(file::FileArgs),
    /// Preview dispatch and spreadsheet parsing
    Preview(preview::PreviewArgs),
    /// Search history
    History(history::HistoryArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(&self, config: &ClientConfig) -> Result<(), AppError> {
        match &self.command {
            Commands::Folder(args) => folder::execute(args, self.format),
            Commands::File(args) => file::execute(args, config, self.format),
            Commands::Preview(args) => preview::execute(args, config, self.format),
            Commands::History(args) => history::execute(args, config, self.format),
        }
    }
}

/// Helper: read a JSON dump of an API response
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, AppError> {
    let raw = std::fs::read_to_string(path).map_err(|e| {
        AppError::with_source(
            cloudbox_core::error::ErrorKind::Io,
            format!("Failed to read '{}'", path.display()),
            e,
        )
    })?;
    Ok(serde_json::from_str(&raw)?)
}
