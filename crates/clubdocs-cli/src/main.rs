//! ClubDocs CLI - Command-line interface for the club document service
//!
//! Provides commands for:
//! - Browsing the folder tree interactively
//! - Searching folders and documents
//! - Creating folders and uploading documents
//! - Renaming and deleting entries
//! - Managing configuration

use std::path::Path;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod context;
mod output;
mod session;

use commands::{
    browse::BrowseCommand,
    completions::CompletionsCommand,
    config::ConfigCommand,
    entries::{DeleteCommand, RenameCommand},
    new_folder::NewFolderCommand,
    search::SearchCommand,
    upload::UploadCommand,
};
use output::OutputFormat;

#[derive(Debug, Parser)]
#[command(name = "clubdocs", version, about = "Document browser for the club platform")]
pub struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    json: bool,

    /// Verbose output (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Use alternate config file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Browse the folder tree interactively
    Browse(BrowseCommand),
    /// Search folders and documents
    Search(SearchCommand),
    /// Create a folder
    NewFolder(NewFolderCommand),
    /// Upload a document
    Upload(UploadCommand),
    /// Rename a folder or document
    Rename(RenameCommand),
    /// Delete a folder or document
    Delete(DeleteCommand),
    /// View and manage configuration
    #[command(subcommand)]
    Config(ConfigCommand),
    /// Generate shell completions
    Completions(CompletionsCommand),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing
    let filter = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .init();

    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Human
    };

    let config_override = cli.config.as_deref().map(Path::new);

    match cli.command {
        Commands::Browse(cmd) => cmd.execute(config_override, format).await,
        Commands::Search(cmd) => cmd.execute(config_override, format).await,
        Commands::NewFolder(cmd) => cmd.execute(config_override, format).await,
        Commands::Upload(cmd) => cmd.execute(config_override, format).await,
        Commands::Rename(cmd) => cmd.execute(config_override, format).await,
        Commands::Delete(cmd) => cmd.execute(config_override, format).await,
        Commands::Config(cmd) => cmd.execute(config_override, format).await,
        Commands::Completions(cmd) => cmd.execute(format).await,
    }
}
