//! Upload command - Upload a document into a folder
//!
//! Provides the `clubdocs upload` CLI command which:
//! 1. Reads the file from disk
//! 2. Uploads it with a title and optional description
//! 3. Prints the stored document, or its row as JSON

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Args;
use clubdocs_core::domain::FolderId;
use clubdocs_core::ports::{IDocumentGateway, UploadRequest};
use serde_json::json;

use crate::context::CliContext;
use crate::output::{get_formatter, render_gateway_error, OutputFormat};

#[derive(Debug, Args)]
pub struct UploadCommand {
    /// File to upload
    pub file: PathBuf,

    /// Destination folder id
    #[arg(long)]
    pub folder: FolderId,

    /// Display title; defaults to the file name without its extension
    #[arg(long)]
    pub title: Option<String>,

    /// Free-form description
    #[arg(long, default_value = "")]
    pub description: String,
}

impl UploadCommand {
    pub async fn execute(
        &self,
        config_override: Option<&Path>,
        format: OutputFormat,
    ) -> Result<()> {
        let formatter = get_formatter(matches!(format, OutputFormat::Json));
        let ctx = CliContext::load(config_override)?;

        let Some(file_name) = self.file.file_name().and_then(|name| name.to_str()) else {
            bail!("File name is not valid UTF-8: {}", self.file.display());
        };
        let content = tokio::fs::read(&self.file)
            .await
            .with_context(|| format!("Failed to read {}", self.file.display()))?;

        let request = UploadRequest {
            file_name: file_name.to_string(),
            content,
            title: title_for(&self.file, self.title.as_deref()),
            description: self.description.clone(),
            folder: self.folder,
        };

        match ctx.gateway().upload_file(&request).await {
            Ok(document) => {
                if matches!(format, OutputFormat::Json) {
                    formatter.print_json(&json!({
                        "id": document.id(),
                        "title": document.title(),
                        "folder": document.folder(),
                        "file_size": document.file_size(),
                    }));
                } else {
                    formatter.success(&format!(
                        "uploaded '{}' as document {} into folder {}",
                        document.title(),
                        document.id(),
                        document.folder()
                    ));
                }
            }
            Err(error) => render_gateway_error(formatter.as_ref(), &error),
        }
        Ok(())
    }
}

/// Title to store: the explicit one, or the file name without its extension.
fn title_for(file: &Path, explicit: Option<&str>) -> String {
    if let Some(title) = explicit {
        return title.to_string();
    }
    file.file_stem()
        .or_else(|| file.file_name())
        .and_then(|name| name.to_str())
        .unwrap_or("document")
        .to_string()
}
