//! Snippet management CLI commands.

use std::path::PathBuf;

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use sqlstash_core::error::AppError;
use sqlstash_core::types::{FolderId, SnippetId};
use sqlstash_entity::snippet::{CreateSnippet, Snippet};
use sqlstash_service::UpdateSnippetRequest;

use crate::output::{self, OutputFormat};

/// Arguments for snippet commands
#[derive(Debug, Args)]
pub struct SnippetArgs {
    /// Snippet subcommand
    #[command(subcommand)]
    pub command: SnippetCommand,
}

/// Snippet subcommands
#[derive(Debug, Subcommand)]
pub enum SnippetCommand {
    /// List all snippets
    List,
    /// Show a single snippet
    Get {
        /// Snippet ID
        id: String,
    },
    /// Create a new snippet
    Create {
        /// Snippet name (without extension)
        #[arg(short, long)]
        name: String,
        /// SQL text
        #[arg(short, long)]
        sql: Option<String>,
        /// Read the SQL text from a file
        #[arg(long, conflicts_with = "sql")]
        file: Option<PathBuf>,
        /// Target folder ID (omit for the store root)
        #[arg(long)]
        folder_id: Option<String>,
    },
    /// Update a snippet's content, name, or folder
    Update {
        /// Snippet ID
        id: String,
        /// New snippet name
        #[arg(short, long)]
        name: Option<String>,
        /// New SQL text
        #[arg(short, long)]
        sql: Option<String>,
        /// Read the new SQL text from a file
        #[arg(long, conflicts_with = "sql")]
        file: Option<PathBuf>,
        /// Move into this folder ID
        #[arg(long, conflicts_with = "to_root")]
        folder_id: Option<String>,
        /// Move back to the store root
        #[arg(long)]
        to_root: bool,
    },
    /// Delete a snippet
    Delete {
        /// Snippet ID
        id: String,
    },
}

/// Snippet display row
#[derive(Debug, Serialize, Tabled)]
struct SnippetRow {
    /// Snippet ID
    id: String,
    /// Name
    name: String,
    /// Containing folder ID
    folder: String,
    /// Visibility
    visibility: String,
}

impl From<&Snippet> for SnippetRow {
    fn from(snippet: &Snippet) -> Self {
        Self {
            id: snippet.id.to_string(),
            name: snippet.name.clone(),
            folder: snippet
                .folder_id
                .map(|id| id.to_string())
                .unwrap_or_else(|| "-".to_string()),
            visibility: snippet.visibility.as_str().to_string(),
        }
    }
}

/// Execute snippet commands
pub async fn execute(
    args: &SnippetArgs,
    env: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let (snippets, _folders) = super::build_services(env).await?;

    match &args.command {
        SnippetCommand::List => {
            let listed = snippets.list_snippets().await?;
            let rows: Vec<SnippetRow> = listed.iter().map(SnippetRow::from).collect();
            output::print_list(&rows, format);
        }
        SnippetCommand::Get { id } => {
            let snippet = snippets.get_snippet(parse_snippet_id(id)?).await?;
            output::print_item(&snippet, format);
        }
        SnippetCommand::Create {
            name,
            sql,
            file,
            folder_id,
        } => {
            let sql = resolve_sql(sql.clone(), file.as_deref()).await?;
            let folder_id = folder_id.as_deref().map(parse_folder_id).transpose()?;

            let snippet = snippets
                .create_snippet(CreateSnippet {
                    name: name.clone(),
                    sql,
                    folder_id,
                })
                .await?;

            output::print_success(&format!("Created snippet '{}' ({})", snippet.name, snippet.id));
        }
        SnippetCommand::Update {
            id,
            name,
            sql,
            file,
            folder_id,
            to_root,
        } => {
            let sql = match (sql, file) {
                (None, None) => None,
                (sql, file) => Some(resolve_sql(sql.clone(), file.as_deref()).await?),
            };
            let folder_id = if *to_root {
                Some(None)
            } else {
                folder_id
                    .as_deref()
                    .map(parse_folder_id)
                    .transpose()?
                    .map(Some)
            };

            let snippet = snippets
                .update_snippet(
                    parse_snippet_id(id)?,
                    UpdateSnippetRequest {
                        name: name.clone(),
                        sql,
                        folder_id,
                    },
                )
                .await?;

            output::print_success(&format!("Updated snippet '{}' ({})", snippet.name, snippet.id));
        }
        SnippetCommand::Delete { id } => {
            snippets.delete_snippet(parse_snippet_id(id)?).await?;
            output::print_success("Deleted snippet");
        }
    }

    Ok(())
}

/// Resolve the SQL body from the `--sql` flag or a file.
async fn resolve_sql(sql: Option<String>, file: Option<&std::path::Path>) -> Result<String, AppError> {
    match (sql, file) {
        (Some(sql), None) => Ok(sql),
        (None, Some(path)) => tokio::fs::read_to_string(path).await.map_err(|e| {
            AppError::validation(format!("Failed to read {}: {e}", path.display()))
        }),
        _ => Err(AppError::validation("Provide the SQL via --sql or --file")),
    }
}

fn parse_snippet_id(raw: &str) -> Result<SnippetId, AppError> {
    raw.parse()
        .map_err(|e| AppError::validation(format!("Invalid snippet id '{raw}': {e}")))
}

fn parse_folder_id(raw: &str) -> Result<FolderId, AppError> {
    raw.parse()
        .map_err(|e| AppError::validation(format!("Invalid folder id '{raw}': {e}")))
}
