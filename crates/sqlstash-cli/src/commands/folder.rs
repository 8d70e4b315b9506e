//! Folder management CLI commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use sqlstash_core::error::AppError;
use sqlstash_core::types::FolderId;
use sqlstash_entity::folder::Folder;

use crate::output::{self, OutputFormat};

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
    /// List folders
    List,
    /// Create a new folder
    Create {
        /// Folder name
        #[arg(short, long)]
        name: String,
    },
    /// Delete a folder and everything inside it
    Delete {
        /// Folder ID
        id: String,
    },
}

/// Folder display row
#[derive(Debug, Serialize, Tabled)]
struct FolderRow {
    /// Folder ID
    id: String,
    /// Name
    name: String,
}

impl From<&Folder> for FolderRow {
    fn from(folder: &Folder) -> Self {
        Self {
            id: folder.id.to_string(),
            name: folder.name.clone(),
        }
    }
}

/// Execute folder commands
pub async fn execute(args: &FolderArgs, env: &str, format: OutputFormat) -> Result<(), AppError> {
    let (_snippets, folders) = super::build_services(env).await?;

    match &args.command {
        FolderCommand::List => {
            let listed = folders.list_folders().await?;
            let rows: Vec<FolderRow> = listed.iter().map(FolderRow::from).collect();
            output::print_list(&rows, format);
        }
        FolderCommand::Create { name } => {
            let folder = folders.create_folder(name).await?;
            output::print_success(&format!("Created folder '{}' ({})", folder.name, folder.id));
        }
        FolderCommand::Delete { id } => {
            let folder_id: FolderId = id
                .parse()
                .map_err(|e| AppError::validation(format!("Invalid folder id '{id}': {e}")))?;
            folders.delete_folder(folder_id).await?;
            output::print_success("Deleted folder");
        }
    }

    Ok(())
}
