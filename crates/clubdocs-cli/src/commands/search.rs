//! Search command - One-shot search across folders and documents
//!
//! Provides the `clubdocs search` CLI command which:
//! 1. Runs a query against the document service
//! 2. Prints each hit with its kind and folder trail
//! 3. Emits the raw hits as JSON with --json

use std::path::Path;

use anyhow::Result;
use clap::Args;
use clubdocs_browser::SearchError;
use clubdocs_core::domain::SearchHit;
use serde_json::json;

use crate::context::CliContext;
use crate::output::{get_formatter, render_gateway_error, OutputFormat};

#[derive(Debug, Args)]
pub struct SearchCommand {
    /// Text to search for
    pub query: String,
}

impl SearchCommand {
    pub async fn execute(
        &self,
        config_override: Option<&Path>,
        format: OutputFormat,
    ) -> Result<()> {
        let formatter = get_formatter(matches!(format, OutputFormat::Json));
        let ctx = CliContext::load(config_override)?;
        let browser = ctx.browser();

        let hits = match browser.search(&self.query).await {
            Ok(hits) => hits,
            Err(SearchError::Gateway(gateway)) => {
                render_gateway_error(formatter.as_ref(), &gateway);
                return Ok(());
            }
            Err(error) => {
                formatter.error(&error.to_string());
                return Ok(());
            }
        };

        if matches!(format, OutputFormat::Json) {
            formatter.print_json(&json!({
                "query": self.query,
                "hits": hits,
            }));
            return Ok(());
        }

        if hits.is_empty() {
            formatter.info(&format!("no matches for '{}'", self.query));
            return Ok(());
        }
        for hit in &hits {
            formatter.info(&render_hit(hit));
        }
        formatter.success(&format!("{} match(es)", hits.len()));
        Ok(())
    }
}

fn render_hit(hit: &SearchHit) -> String {
    let kind = if hit.is_folder() { "folder" } else { "document" };
    if hit.location().is_empty() {
        format!("[{kind}] {}", hit.display_name())
    } else {
        format!("[{kind}] {}  ({})", hit.display_name(), hit.location())
    }
}
