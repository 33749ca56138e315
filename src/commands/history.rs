//! Search history CLI commands.

use std::path::{Path, PathBuf};

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use cloudbox_core::config::ClientConfig;
use cloudbox_core::error::{AppError, ErrorKind};
use cloudbox_view::query::SearchHistory;

/// Arguments for history commands
#[derive(Debug, Args)]
pub struct HistoryArgs {
    /// Where the history is stored
    #[arg(short, long, default_value = "search_history.json")]
    pub store: PathBuf,

    /// History subcommand
    #[command(subcommand)]
    pub command: HistoryCommand,
}

/// History subcommands
#[derive(Debug, Subcommand)]
pub enum HistoryCommand {
    /// Record a submitted query
    Add {
        /// The query
        query: String,
    },
    /// Forget one query
    Remove {
        /// The query
        query: String,
    },
    /// Show recent queries
    List,
    /// Forget all queries
    Clear,
}

/// History display row
#[derive(Debug, Serialize, Tabled)]
struct HistoryRow {
    /// Position, most recent first
    rank: usize,
    /// Query text
    query: String,
}

/// Execute history commands
pub fn execute(
    args: &HistoryArgs,
    config: &ClientConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let limit = config.browse.search_history_limit;
    let mut history = match std::fs::read_to_string(&args.store) {
        Ok(blob) => SearchHistory::from_json(&blob, limit),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => SearchHistory::new(limit),
        Err(e) => {
            return Err(AppError::with_source(
                ErrorKind::Io,
                format!("Failed to read '{}'", args.store.display()),
                e,
            ));
        }
    };

    match &args.command {
        HistoryCommand::Add { query } => {
            if history.record(query) {
                save(&history, &args.store)?;
                output::print_success(&format!("Recorded '{}'", query.trim()));
            } else {
                output::print_warning("Blank query not recorded");
            }
        }
        HistoryCommand::Remove { query } => {
            if history.remove(query) {
                save(&history, &args.store)?;
                output::print_success(&format!("Removed '{}'", query.trim()));
            } else {
                output::print_warning(&format!("'{}' is not in the history", query.trim()));
            }
        }
        HistoryCommand::List => {
            let rows: Vec<HistoryRow> = history
                .entries()
                .iter()
                .enumerate()
                .map(|(i, query)| HistoryRow {
                    rank: i + 1,
                    query: query.clone(),
                })
                .collect();
            output::print_list(&rows, format);
        }
        HistoryCommand::Clear => {
            history.clear();
            save(&history, &args.store)?;
            output::print_success("Search history cleared");
        }
    }

    Ok(())
}

fn save(history: &SearchHistory, path: &Path) -> Result<(), AppError> {
    std::fs::write(path, history.to_json()?)?;
    Ok(())
}
