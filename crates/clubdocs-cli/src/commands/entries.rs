//! Rename/Delete commands - One-shot entry maintenance
//!
//! Provides the `clubdocs rename` and `clubdocs delete` CLI commands which:
//! 1. Address a folder or document by its server id
//! 2. Check the caller's role before any delete traffic
//! 3. Confirm destructive deletes unless --yes is given

use std::io::{self, Write};
use std::path::Path;

use anyhow::Result;
use clap::{Args, ValueEnum};
use clubdocs_core::domain::{DocumentId, FolderId};
use clubdocs_core::ports::IDocumentGateway;
use serde_json::json;

use crate::context::CliContext;
use crate::output::{get_formatter, render_gateway_error, OutputFormat};

/// Which kind of entry an id refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EntryKind {
    Folder,
    File,
}

impl EntryKind {
    fn label(self) -> &'static str {
        match self {
            EntryKind::Folder => "folder",
            EntryKind::File => "file",
        }
    }
}

#[derive(Debug, Args)]
pub struct RenameCommand {
    /// Kind of entry to rename
    #[arg(value_enum)]
    pub kind: EntryKind,

    /// Server id of the entry
    pub id: i64,

    /// New display name
    pub name: String,
}

impl RenameCommand {
    pub async fn execute(
        &self,
        config_override: Option<&Path>,
        format: OutputFormat,
    ) -> Result<()> {
        let formatter = get_formatter(matches!(format, OutputFormat::Json));
        let name = self.name.trim();
        if name.is_empty() {
            formatter.error("the new name must not be blank");
            return Ok(());
        }

        let ctx = CliContext::load(config_override)?;
        let gateway = ctx.gateway();

        let renamed = match self.kind {
            EntryKind::Folder => gateway
                .rename_folder(&FolderId::new(self.id), name)
                .await
                .map(|folder| (folder.id().to_string(), folder.name().to_string())),
            EntryKind::File => gateway
                .rename_file(&DocumentId::new(self.id), name)
                .await
                .map(|document| (document.id().to_string(), document.title().to_string())),
        };

        match renamed {
            Ok((id, new_name)) => {
                if matches!(format, OutputFormat::Json) {
                    formatter.print_json(&json!({
                        "kind": self.kind.label(),
                        "id": id,
                        "name": new_name,
                    }));
                } else {
                    formatter.success(&format!(
                        "renamed {} {} to '{}'",
                        self.kind.label(),
                        id,
                        new_name
                    ));
                }
            }
            Err(error) => render_gateway_error(formatter.as_ref(), &error),
        }
        Ok(())
    }
}

#[derive(Debug, Args)]
pub struct DeleteCommand {
    /// Kind of entry to delete
    #[arg(value_enum)]
    pub kind: EntryKind,

    /// Server id of the entry
    pub id: i64,

    /// Delete without asking for confirmation
    #[arg(long, short = 'y')]
    pub yes: bool,
}

impl DeleteCommand {
    pub async fn execute(
        &self,
        config_override: Option<&Path>,
        format: OutputFormat,
    ) -> Result<()> {
        let formatter = get_formatter(matches!(format, OutputFormat::Json));
        let ctx = CliContext::load(config_override)?;

        if !ctx.can_delete() {
            formatter.error(&format!("role '{}' may not delete entries", ctx.role));
            return Ok(());
        }

        if !self.yes && !confirm(&format!("delete {} {}?", self.kind.label(), self.id))? {
            formatter.info("cancelled");
            return Ok(());
        }

        let gateway = ctx.gateway();
        let deleted = match self.kind {
            EntryKind::Folder => gateway.delete_folder(&FolderId::new(self.id)).await,
            EntryKind::File => gateway.delete_file(&DocumentId::new(self.id)).await,
        };

        match deleted {
            Ok(()) => {
                if matches!(format, OutputFormat::Json) {
                    formatter.print_json(&json!({
                        "deleted": { "kind": self.kind.label(), "id": self.id },
                    }));
                } else {
                    formatter.success(&format!("deleted {} {}", self.kind.label(), self.id));
                }
            }
            Err(error) => render_gateway_error(formatter.as_ref(), &error),
        }
        Ok(())
    }
}

fn confirm(prompt: &str) -> Result<bool> {
    print!("{prompt} [y/N]: ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(matches!(input.trim(), "y" | "Y" | "yes"))
}
