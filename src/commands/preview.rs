//! Preview CLI commands.

use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::output::{self, OutputFormat};
use cloudbox_core::config::ClientConfig;
use cloudbox_core::error::{AppError, ErrorKind};
use cloudbox_view::preview::{
    ContentRequest, MediaPreviewController, PreviewDescriptor, PreviewPayload, PreviewPhase,
    Table,
};

/// Arguments for preview commands
#[derive(Debug, Args)]
pub struct PreviewArgs {
    /// Preview subcommand
    #[command(subcommand)]
    pub command: PreviewCommand,
}

/// Preview subcommands
#[derive(Debug, Subcommand)]
pub enum PreviewCommand {
    /// Open a file in the preview dialog and show the settled state
    Show {
        /// File name including extension
        #[arg(short, long)]
        name: String,
        /// Declared category tag (derived from the name when omitted)
        #[arg(short, long)]
        category: Option<String>,
        /// Size in bytes
        #[arg(short, long, default_value = "0")]
        size: u64,
        /// Local file standing in for the text body
        #[arg(long)]
        content: Option<PathBuf>,
    },
    /// Parse a delimited text file into a table
    Table {
        /// Delimited text file
        #[arg(short, long)]
        input: PathBuf,
        /// Field delimiter
        #[arg(short, long, default_value = ",")]
        delimiter: char,
    },
}

/// Execute preview commands
pub fn execute(
    args: &PreviewArgs,
    config: &ClientConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    match &args.command {
        PreviewCommand::Show {
            name,
            category,
            size,
            content,
        } => {
            let declared = category.clone().unwrap_or_else(|| {
                cloudbox_entity::file::FileCategory::from_file_name(name).to_string()
            });
            let descriptor = PreviewDescriptor::new("local", name.as_str(), declared).with_size(*size);

            let mut controller = MediaPreviewController::new(&config.preview);
            match controller.open(descriptor) {
                ContentRequest::None => {}
                ContentRequest::MediaUrl(id) => {
                    let url = format!("/api/files/{}/preview", id);
                    controller.content_loaded(id.as_str(), PreviewPayload::MediaUrl(url));
                }
                ContentRequest::TextBody(id) => match content {
                    Some(path) => match std::fs::read_to_string(path) {
                        Ok(text) => {
                            controller.content_loaded(id.as_str(), PreviewPayload::Text(text));
                        }
                        Err(e) => {
                            controller.load_failed(id.as_str(), e);
                        }
                    },
                    None => {
                        controller.load_failed(id.as_str(), "no --content file given");
                    }
                },
            }

            match format {
                OutputFormat::Table => {
                    if let Some(file) = controller.metadata() {
                        output::print_kv("Name", &file.name);
                        output::print_kv("Size", &format!("{} bytes", file.size));
                    }
                    output::print_kv("Mode", controller.mode().label());
                    output::print_kv(
                        "Phase",
                        &serde_json::to_string(controller.phase())?,
                    );
                }
                OutputFormat::Json => output::print_item(controller.phase(), format),
            }

            if let PreviewPhase::Failed { message } = controller.phase() {
                return Err(AppError::preview(message.as_str()));
            }
        }
        PreviewCommand::Table { input, delimiter } => {
            let delimiter = u8::try_from(*delimiter).map_err(|_| {
                AppError::validation(format!("Delimiter '{}' is not a single byte", delimiter))
            })?;
            let text = std::fs::read_to_string(input).map_err(|e| {
                AppError::with_source(
                    ErrorKind::Io,
                    format!("Failed to read '{}'", input.display()),
                    e,
                )
            })?;

            let table = Table::parse_with_delimiter(&text, delimiter)?;
            match format {
                OutputFormat::Table => output::print_grid(&table.headers, &table.rows),
                OutputFormat::Json => output::print_item(&table, format),
            }
        }
    }

    Ok(())
}
