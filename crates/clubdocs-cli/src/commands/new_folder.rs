//! New-folder command - Create a folder
//!
//! Provides the `clubdocs new-folder` CLI command which:
//! 1. Plans the creation against the caller's role and target location
//! 2. Submits the planned request to the document service
//! 3. Prints the created folder, or its row as JSON

use std::path::Path;

use anyhow::Result;
use clap::Args;
use clubdocs_browser::plan_folder_creation;
use clubdocs_core::domain::{FolderId, FolderType, PathEntry};
use clubdocs_core::ports::IDocumentGateway;
use serde_json::json;

use crate::context::CliContext;
use crate::output::{get_formatter, render_gateway_error, OutputFormat};

#[derive(Debug, Args)]
pub struct NewFolderCommand {
    /// Name of the new folder
    pub name: String,

    /// Parent folder id; omit to create at the root level
    #[arg(long)]
    pub parent: Option<FolderId>,

    /// Folder description
    #[arg(long, default_value = "")]
    pub description: String,

    /// Folder type for root-level folders; inherited inside a parent
    #[arg(long = "type", value_name = "TYPE")]
    pub folder_type: Option<FolderType>,
}

impl NewFolderCommand {
    pub async fn execute(
        &self,
        config_override: Option<&Path>,
        format: OutputFormat,
    ) -> Result<()> {
        let formatter = get_formatter(matches!(format, OutputFormat::Json));
        let ctx = CliContext::load(config_override)?;

        let parent = self.parent.map(|id| PathEntry::real(id, id.to_string()));
        let request = match plan_folder_creation(
            ctx.role,
            parent.as_ref(),
            &self.name,
            &self.description,
            self.folder_type,
        ) {
            Ok(request) => request,
            Err(error) => {
                formatter.error(&error.to_string());
                return Ok(());
            }
        };

        match ctx.gateway().create_folder(&request).await {
            Ok(folder) => {
                if matches!(format, OutputFormat::Json) {
                    formatter.print_json(&json!({
                        "id": folder.id(),
                        "name": folder.name(),
                        "folder_type": folder.folder_type(),
                        "parent": folder.parent(),
                    }));
                } else {
                    formatter.success(&format!(
                        "created folder {} '{}'",
                        folder.id(),
                        folder.name()
                    ));
                }
            }
            Err(error) => render_gateway_error(formatter.as_ref(), &error),
        }
        Ok(())
    }
}
