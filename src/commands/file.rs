//! File list CLI commands.

use std::path::PathBuf;

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;
use tracing::info;

use crate::output::{self, OutputFormat};
use cloudbox_core::config::ClientConfig;
use cloudbox_core::error::AppError;
use cloudbox_core::types::{FileSortKey, SortDirection};
use cloudbox_entity::file::FileRecord;
use cloudbox_view::query::{CategoryFilter, ListQuery};

/// Arguments for file commands
#[derive(Debug, Args)]
pub struct FileArgs {
    /// File subcommand
    #[command(subcommand)]
    pub command: FileCommand,
}

/// File subcommands
#[derive(Debug, Subcommand)]
pub enum FileCommand {
    /// Filter and sort a file listing
    List {
        /// JSON array of file records
        #[arg(short, long)]
        input: PathBuf,
        /// Case-insensitive substring of the file name
        #[arg(short, long)]
        query: Option<String>,
        /// Category to keep, or "all"
        #[arg(short = 't', long = "type", default_value = "all")]
        category: String,
        /// Sort key: name, size, type, created_at, updated_at
        #[arg(short, long)]
        sort: Option<String>,
        /// Sort direction: asc or desc
        #[arg(short, long)]
        order: Option<String>,
    },
}

/// File display row
#[derive(Debug, Serialize, Tabled)]
struct FileRow {
    /// File ID
    id: String,
    /// Name
    name: String,
    /// Size in bytes
    size: u64,
    /// Derived category
    category: String,
    /// Last update
    updated: String,
}

impl From<&FileRecord> for FileRow {
    fn from(file: &FileRecord) -> Self {
        Self {
            id: file.id.to_string(),
            name: file.name.clone(),
            size: file.size,
            category: file.category().to_string(),
            updated: file
                .updated_at
                .or(file.created_at)
                .map(|at| at.format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_else(|| "-".to_string()),
        }
    }
}

/// Execute file commands
pub fn execute(args: &FileArgs, config: &ClientConfig, format: OutputFormat) -> Result<(), AppError> {
    match &args.command {
        FileCommand::List {
            input,
            query,
            category,
            sort,
            order,
        } => {
            let files: Vec<FileRecord> = super::read_json(input)?;

            let mut list_query = ListQuery::from_config(&config.browse)
                .with_category(category.parse::<CategoryFilter>().map_err(AppError::validation)?);
            if let Some(query) = query {
                list_query = list_query.with_query(query.as_str());
            }
            if let Some(sort) = sort {
                list_query.sort_key = sort.parse::<FileSortKey>().map_err(AppError::validation)?;
            }
            if let Some(order) = order {
                list_query.direction = order.parse::<SortDirection>().map_err(AppError::validation)?;
            }

            let kept = list_query.apply(&files);
            info!(
                total = files.len(),
                kept = kept.len(),
                sort = %list_query.sort_key,
                "Applied list query"
            );

            let rows: Vec<FileRow> = kept.into_iter().map(FileRow::from).collect();
            output::print_list(&rows, format);
        }
    }

    Ok(())
}
