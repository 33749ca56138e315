//! Folder tree CLI commands.

use std::path::PathBuf;

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;
use tracing::info;

use crate::output::{self, OutputFormat};
use cloudbox_core::error::AppError;
use cloudbox_entity::folder::{FolderNode, FolderRecord};
use cloudbox_view::folder::{
    FolderNavigator, SelectionLabel, breadcrumbs, can_move, is_valid_move_target, move_targets,
};

/// Arguments for folder commands
#[derive(Debug, Args)]
pub struct FolderArgs {
    /// Folder subcommand
    #[command(subcommand)]
    pub command: FolderCommand,
}

/// Folder subcommands
#[derive(Debug, Subcommand)]
pub enum FolderCommand {
    /// Show the folder tree
    Tree {
        /// JSON array of folder records
        #[arg(short, long)]
        input: PathBuf,
        /// Keep only folders whose name contains this (and their ancestors)
        #[arg(long)]
        filter: Option<String>,
        /// Expand every folder instead of only the top level
        #[arg(long, conflicts_with = "collapsed")]
        expand_all: bool,
        /// Start with every folder collapsed
        #[arg(long)]
        collapsed: bool,
        /// Folder to select and reveal
        #[arg(short, long)]
        selected: Option<String>,
    },
    /// List the folders a folder may be moved under
    MoveTargets {
        /// JSON array of folder records
        #[arg(short, long)]
        input: PathBuf,
        /// Folder being moved
        #[arg(short, long)]
        folder_id: String,
    },
    /// Check one proposed move
    CheckMove {
        /// JSON array of folder records
        #[arg(short, long)]
        input: PathBuf,
        /// Folder being moved
        #[arg(short, long)]
        folder_id: String,
        /// Destination folder (omit for the top level)
        #[arg(short, long)]
        target: Option<String>,
    },
    /// Show the path from the top level to a folder
    Breadcrumbs {
        /// JSON array of folder records
        #[arg(short, long)]
        input: PathBuf,
        /// Folder ID
        #[arg(short, long)]
        folder_id: String,
    },
}

/// Folder tree display row
#[derive(Debug, Serialize, Tabled)]
struct TreeRow {
    /// Folder ID
    id: String,
    /// Indented name
    name: String,
    /// Depth
    depth: usize,
    /// Expand marker
    #[tabled(rename = "open")]
    marker: String,
}

/// Folder display row
#[derive(Debug, Serialize, Tabled)]
struct FolderRow {
    /// Folder ID
    id: String,
    /// Name
    name: String,
    /// Parent ID
    parent_id: String,
}

impl From<&FolderRecord> for FolderRow {
    fn from(folder: &FolderRecord) -> Self {
        Self {
            id: folder.id.to_string(),
            name: folder.name.clone(),
            parent_id: folder
                .parent_id
                .as_ref()
                .map(ToString::to_string)
                .unwrap_or_else(|| "-".to_string()),
        }
    }
}

/// Execute folder commands
pub fn execute(args: &FolderArgs, format: OutputFormat) -> Result<(), AppError> {
    match &args.command {
        FolderCommand::Tree {
            input,
            filter,
            expand_all,
            collapsed,
            selected,
        } => {
            let folders: Vec<FolderRecord> = super::read_json(input)?;
            info!(count = folders.len(), "Loaded folders");

            let mut navigator = FolderNavigator::with_folders(folders);
            if *expand_all {
                navigator.expand_all();
            } else if *collapsed {
                navigator.collapse_all();
            }
            if let Some(id) = selected {
                navigator.select(Some(id.as_str()));
                navigator.expand_to(id);
            }

            let rows = match filter {
                Some(query) => {
                    let mut rows = Vec::new();
                    flatten_filtered(&navigator.filter(query), 0, &mut rows);
                    rows
                }
                None => navigator
                    .visible_rows()
                    .into_iter()
                    .map(|row| {
                        let marker = match (row.has_children, row.is_expanded) {
                            (false, _) => " ",
                            (true, true) => "-",
                            (true, false) => "+",
                        };
                        let pointer = if row.is_selected { "> " } else { "" };
                        TreeRow {
                            id: row.id.to_string(),
                            name: format!("{}{}{}", "  ".repeat(row.depth), pointer, row.name),
                            depth: row.depth,
                            marker: marker.to_string(),
                        }
                    })
                    .collect(),
            };
            output::print_list(&rows, format);

            if selected.is_some() {
                let label = match navigator.selected_label() {
                    SelectionLabel::Root => "root".to_string(),
                    SelectionLabel::Folder(name) => name.to_string(),
                    SelectionLabel::Unknown => "unknown".to_string(),
                };
                output::print_kv("Selected", &label);
            }
        }
        FolderCommand::MoveTargets { input, folder_id } => {
            let folders: Vec<FolderRecord> = super::read_json(input)?;
            let folder = folders
                .iter()
                .find(|f| f.id.as_str() == folder_id.as_str())
                .ok_or_else(|| AppError::not_found(format!("Folder '{}' not found", folder_id)))?;

            if !can_move(folder) {
                output::print_warning(&format!(
                    "Folder '{}' is top-level and cannot be moved",
                    folder.name
                ));
                return Ok(());
            }

            let rows: Vec<FolderRow> = move_targets(&folders, folder_id)
                .into_iter()
                .map(FolderRow::from)
                .collect();
            output::print_list(&rows, format);
        }
        FolderCommand::CheckMove {
            input,
            folder_id,
            target,
        } => {
            let folders: Vec<FolderRecord> = super::read_json(input)?;
            let destination = target.as_deref().unwrap_or("the top level");
            if is_valid_move_target(&folders, folder_id, target.as_deref()) {
                output::print_success(&format!("'{}' can move to {}", folder_id, destination));
            } else {
                output::print_warning(&format!("'{}' cannot move to {}", folder_id, destination));
            }
        }
        FolderCommand::Breadcrumbs { input, folder_id } => {
            let folders: Vec<FolderRecord> = super::read_json(input)?;
            let trail = breadcrumbs(&folders, folder_id);
            if trail.is_empty() {
                return Err(AppError::not_found(format!(
                    "Folder '{}' not found",
                    folder_id
                )));
            }

            match format {
                OutputFormat::Table => {
                    let path: Vec<&str> = trail.iter().map(|f| f.name.as_str()).collect();
                    println!("/{}", path.join("/"));
                }
                OutputFormat::Json => {
                    let rows: Vec<FolderRow> = trail.into_iter().map(FolderRow::from).collect();
                    output::print_list(&rows, format);
                }
            }
        }
    }

    Ok(())
}

fn flatten_filtered(nodes: &[FolderNode], depth: usize, rows: &mut Vec<TreeRow>) {
    let mut stack: Vec<(&FolderNode, usize)> = nodes.iter().rev().map(|node| (node, depth)).collect();
    while let Some((node, depth)) = stack.pop() {
        rows.push(TreeRow {
            id: node.id.to_string(),
            name: format!("{}{}", "  ".repeat(depth), node.name),
            depth,
            marker: if node.has_children() { "-" } else { " " }.to_string(),
        });
        stack.extend(node.children.iter().rev().map(|child| (child, depth + 1)));
    }
}
