//! CLI command definitions and dispatch.

pub mod folder;
pub mod snippet;

use std::sync::Arc;

use clap::{Parser, Subcommand};

use sqlstash_core::config::AppConfig;
use sqlstash_core::error::AppError;
use sqlstash_core::traits::store::StoreBackend;
use sqlstash_service::{FolderService, SnippetService};
use sqlstash_store::LocalStore;

use crate::output::OutputFormat;

/// SQLStash — filesystem-backed SQL snippet store
#[derive(Debug, Parser)]
#[command(name = "sqlstash", version, about, long_about = None)]
pub struct Cli {
    /// Configuration environment (merges config/<env>.toml over config/default.toml)
    #[arg(short, long, default_value = "local")]
    pub env: String,

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
    /// Snippet management
    Snippet(snippet::SnippetArgs),
    /// Folder management
    Folder(folder::FolderArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        match &self.command {
            Commands::Snippet(args) => snippet::execute(args, &self.env, self.format).await,
            Commands::Folder(args) => folder::execute(args, &self.env, self.format).await,
        }
    }
}

/// Helper: build the services over the configured store root.
pub async fn build_services(env: &str) -> Result<(SnippetService, FolderService), AppError> {
    let config = AppConfig::load(env)?;
    let store: Arc<dyn StoreBackend> = Arc::new(LocalStore::new(&config.store.root_path).await?);
    Ok((
        SnippetService::new(Arc::clone(&store)),
        FolderService::new(store),
    ))
}
