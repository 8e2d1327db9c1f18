//! Browse command - Interactive folder tree browser
//!
//! Provides the `clubdocs browse` CLI command which:
//! 1. Restores the last visited folder, falling back to the root
//! 2. Reads shell-style commands from stdin (ls, open, up, jump, ...)
//! 3. Runs searches and jumps into hits along reconstructed paths
//! 4. Drives copy/paste, rename, delete, and folder creation

use std::io::Write as _;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Args;
use clubdocs_browser::{
    BrowseError, Browser, CreateFolderError, DeleteError, EntryRef, PasteError, RenameError,
    SearchError,
};
use clubdocs_core::domain::{
    BreadcrumbTarget, DocumentId, DocumentStatus, FolderId, FolderType, SearchHit,
};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, warn};

use crate::context::CliContext;
use crate::output::{get_formatter, render_gateway_error, OutputFormat, OutputFormatter};

#[derive(Debug, Args)]
pub struct BrowseCommand {
    /// Ignore the saved location and start at the root
    #[arg(long)]
    pub fresh: bool,
}

impl BrowseCommand {
    pub async fn execute(
        &self,
        config_override: Option<&Path>,
        format: OutputFormat,
    ) -> Result<()> {
        let formatter = get_formatter(matches!(format, OutputFormat::Json));
        if matches!(format, OutputFormat::Json) {
            formatter.error("the interactive browser has no JSON mode; rerun without --json");
            return Ok(());
        }

        let ctx = CliContext::load(config_override)?;
        let mut browser = ctx.browser();

        if !self.fresh {
            if let Some(folder) = browser.restore() {
                debug!(%folder, "resuming at the saved folder");
            }
        }
        if let Err(error) = browser.refresh().await {
            // The saved folder may have been deleted since the last session.
            warn!(%error, "saved location could not be loaded, starting at the root");
            browser
                .jump(BreadcrumbTarget::Root)
                .await
                .context("Failed to load the root listing")?;
        }

        let shell = Shell {
            browser,
            can_delete: ctx.can_delete(),
            formatter,
            last_hits: Vec::new(),
        };
        shell.run().await
    }
}

/// One interactive session over a [`Browser`].
struct Shell {
    browser: Browser,
    can_delete: bool,
    formatter: Box<dyn OutputFormatter>,
    last_hits: Vec<SearchHit>,
}

impl Shell {
    async fn run(mut self) -> Result<()> {
        self.formatter
            .plain("Connected. Type 'help' for the command list, 'quit' to leave.");
        self.print_breadcrumbs();
        self.print_listing();

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            print!("{}", self.prompt());
            std::io::stdout().flush()?;
            let Some(line) = lines.next_line().await? else {
                break;
            };
            if !self.dispatch(line.trim()).await {
                break;
            }
        }
        Ok(())
    }

    fn prompt(&self) -> String {
        if self.browser.is_at_root() {
            return "clubdocs:/> ".to_string();
        }
        let trail: Vec<&str> = self
            .browser
            .breadcrumbs()
            .iter()
            .map(|entry| entry.name())
            .collect();
        format!("clubdocs:/{}> ", trail.join("/"))
    }

    /// Runs one input line. Returns false when the session should end.
    async fn dispatch(&mut self, line: &str) -> bool {
        let mut parts = line.split_whitespace();
        let Some(command) = parts.next() else {
            return true;
        };
        let args: Vec<&str> = parts.collect();

        match command {
            "ls" => self.print_listing(),
            "refresh" => self.cmd_refresh().await,
            "open" | "cd" => self.cmd_open(&args).await,
            "up" => self.cmd_up().await,
            "jump" => self.cmd_jump(&args).await,
            "path" => self.print_breadcrumbs(),
            "search" => self.cmd_search(&args.join(" ")).await,
            "goto" => self.cmd_goto(&args).await,
            "copy" => self.cmd_copy(&args),
            "paste" => self.cmd_paste().await,
            "clip" => self.cmd_clip(),
            "mkdir" => self.cmd_mkdir(&args).await,
            "types" => self.cmd_types(),
            "rename" => self.cmd_rename(&args).await,
            "delete" | "rm" => self.cmd_delete(&args).await,
            "help" | "?" => self.print_help(),
            "quit" | "exit" | "q" => return false,
            other => self
                .formatter
                .error(&format!("unknown command '{other}'; try 'help'")),
        }
        true
    }

    fn report(&self, error: &BrowseError) {
        match error {
            BrowseError::Gateway(gateway) => {
                render_gateway_error(self.formatter.as_ref(), gateway)
            }
            other => self.formatter.error(&other.to_string()),
        }
    }

    fn print_listing(&self) {
        let listing = self.browser.listing();
        if listing.is_empty() {
            self.formatter.info("(empty)");
            return;
        }
        for folder in listing.folders() {
            self.formatter.info(&format!(
                "[{:>5}] {}/  ({} folders, {} documents)",
                folder.id(),
                folder.name(),
                folder.subfolder_count(),
                folder.document_count()
            ));
        }
        for document in listing.documents() {
            let copy_marker = if document.status() == DocumentStatus::Copy {
                "  (copy)"
            } else {
                ""
            };
            self.formatter.info(&format!(
                "[{:>5}] {}  {}  {}{}",
                document.id(),
                document.title(),
                format_size(document.file_size()),
                document.uploaded_at().format("%Y-%m-%d"),
                copy_marker
            ));
        }
    }

    fn print_breadcrumbs(&self) {
        if self.browser.is_at_root() {
            self.formatter.info("at the root level");
            return;
        }
        let entries = self.browser.breadcrumbs();
        let rendered: Vec<String> = entries
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                if entry.is_synthetic() {
                    format!("{}:{}*", index + 1, entry.name())
                } else {
                    format!("{}:{}", index + 1, entry.name())
                }
            })
            .collect();
        let mut line = rendered.join(" > ");
        if entries.iter().any(|entry| entry.is_synthetic()) {
            line.push_str("  (* = named from a search result)");
        }
        self.formatter.info(&line);
    }

    async fn cmd_refresh(&mut self) {
        match self.browser.refresh().await {
            Ok(_) => self.print_listing(),
            Err(error) => self.report(&error),
        }
    }

    async fn cmd_open(&mut self, args: &[&str]) {
        let Some(id) = args.first().and_then(|raw| raw.parse::<i64>().ok()) else {
            self.formatter.error("usage: open <folder-id>");
            return;
        };
        match self.browser.open_folder(FolderId::new(id)).await {
            Ok(()) => self.print_listing(),
            Err(error) => self.report(&error),
        }
    }

    async fn cmd_up(&mut self) {
        let depth = self.browser.breadcrumbs().len();
        let target = if depth <= 1 {
            BreadcrumbTarget::Root
        } else {
            BreadcrumbTarget::Entry(depth - 2)
        };
        match self.browser.jump(target).await {
            Ok(()) => self.print_listing(),
            Err(error) => self.report(&error),
        }
    }

    async fn cmd_jump(&mut self, args: &[&str]) {
        let target = match args.first() {
            Some(&"root") => BreadcrumbTarget::Root,
            Some(raw) => match raw.parse::<usize>() {
                Ok(position) if position >= 1 => BreadcrumbTarget::Entry(position - 1),
                _ => {
                    self.formatter
                        .error("usage: jump <n|root> ('path' numbers the breadcrumbs from 1)");
                    return;
                }
            },
            None => {
                self.formatter.error("usage: jump <n|root>");
                return;
            }
        };
        match self.browser.jump(target).await {
            Ok(()) => {
                self.print_breadcrumbs();
                self.print_listing();
            }
            Err(error) => self.report(&error),
        }
    }

    async fn cmd_search(&mut self, query: &str) {
        if query.is_empty() {
            self.formatter.error("usage: search <text>");
            return;
        }
        match self.browser.search(query).await {
            Ok(hits) if hits.is_empty() => {
                self.formatter.info(&format!("no matches for '{query}'"));
                self.last_hits.clear();
            }
            Ok(hits) => {
                for (index, hit) in hits.iter().enumerate() {
                    let kind = if hit.is_folder() { "folder" } else { "document" };
                    let location = if hit.location().is_empty() {
                        String::new()
                    } else {
                        format!("  ({})", hit.location())
                    };
                    self.formatter.info(&format!(
                        "{:>3}. [{kind}] {}{location}",
                        index + 1,
                        hit.display_name()
                    ));
                }
                self.formatter.info("jump to a hit with 'goto <n>'");
                self.last_hits = hits;
            }
            Err(SearchError::Gateway(gateway)) => {
                render_gateway_error(self.formatter.as_ref(), &gateway)
            }
            Err(error) => self.formatter.error(&error.to_string()),
        }
    }

    async fn cmd_goto(&mut self, args: &[&str]) {
        let Some(position) = args.first().and_then(|raw| raw.parse::<usize>().ok()) else {
            self.formatter.error("usage: goto <n> (run 'search' first)");
            return;
        };
        let Some(hit) = self.last_hits.get(position.wrapping_sub(1)).cloned() else {
            self.formatter
                .error(&format!("no search hit {position}; run 'search' first"));
            return;
        };
        match self.browser.goto_hit(&hit).await {
            Ok(()) => {
                self.print_breadcrumbs();
                self.print_listing();
            }
            Err(error) => self.report(&error),
        }
    }

    fn cmd_copy(&mut self, args: &[&str]) {
        let Some(id) = args.first().and_then(|raw| raw.parse::<i64>().ok()) else {
            self.formatter.error("usage: copy <document-id>");
            return;
        };
        match self.browser.mark_for_copy(DocumentId::new(id)) {
            Ok(()) => self
                .formatter
                .success(&format!("document {id} marked for copying")),
            Err(error) => self.report(&error),
        }
    }

    async fn cmd_paste(&mut self) {
        match self.browser.paste().await {
            Ok(document) => {
                self.formatter.success(&format!(
                    "pasted '{}' as document {} into folder {}",
                    document.title(),
                    document.id(),
                    document.folder()
                ));
                self.cmd_refresh().await;
            }
            Err(PasteError::Gateway(gateway)) => {
                render_gateway_error(self.formatter.as_ref(), &gateway)
            }
            Err(error) => self.formatter.error(&error.to_string()),
        }
    }

    fn cmd_clip(&self) {
        match self.browser.clipboard().held() {
            Some(document) => self
                .formatter
                .info(&format!("clipboard: document {document}")),
            None => self.formatter.info("clipboard is empty"),
        }
    }

    async fn cmd_mkdir(&mut self, args: &[&str]) {
        let (requested_type, name_start) = if args.first() == Some(&"-t") {
            match args.get(1) {
                Some(raw) => match raw.parse::<FolderType>() {
                    Ok(folder_type) => (Some(folder_type), 2),
                    Err(error) => {
                        self.formatter.error(&format!("{error}; see 'types'"));
                        return;
                    }
                },
                None => {
                    self.formatter.error("usage: mkdir [-t <type>] <name>");
                    return;
                }
            }
        } else {
            (None, 0)
        };
        let name = args[name_start..].join(" ");
        if name.is_empty() {
            self.formatter.error("usage: mkdir [-t <type>] <name>");
            return;
        }
        match self.browser.create_folder(&name, "", requested_type).await {
            Ok(folder) => {
                self.formatter
                    .success(&format!("created folder {} '{}'", folder.id(), folder.name()));
                self.cmd_refresh().await;
            }
            Err(CreateFolderError::Gateway(gateway)) => {
                render_gateway_error(self.formatter.as_ref(), &gateway)
            }
            Err(error) => self.formatter.error(&error.to_string()),
        }
    }

    fn cmd_types(&self) {
        if !self.browser.is_at_root() {
            self.formatter
                .info("inside a folder the type is inherited; just 'mkdir <name>'");
            return;
        }
        let types = self.browser.creatable_types();
        if types.is_empty() {
            self.formatter.info(&format!(
                "role '{}' may not create folders at the root level",
                self.browser.role()
            ));
        } else {
            let labels: Vec<&str> = types.iter().map(|t| t.as_str()).collect();
            self.formatter
                .info(&format!("creatable here: {}", labels.join(", ")));
        }
    }

    async fn cmd_rename(&mut self, args: &[&str]) {
        let Some(entry) = parse_entry_ref(args) else {
            self.formatter
                .error("usage: rename folder|file <id> <new name>");
            return;
        };
        let name = args[2..].join(" ");
        match self.browser.rename_entry(entry, &name).await {
            Ok(()) => {
                self.formatter.success(&format!("renamed {entry}"));
                self.print_listing();
            }
            Err(RenameError::Gateway(gateway)) => {
                render_gateway_error(self.formatter.as_ref(), &gateway)
            }
            Err(error) => self.formatter.error(&error.to_string()),
        }
    }

    async fn cmd_delete(&mut self, args: &[&str]) {
        let Some(entry) = parse_entry_ref(args) else {
            self.formatter.error("usage: delete folder|file <id>");
            return;
        };
        match self.browser.delete_entry(entry, self.can_delete).await {
            Ok(()) => {
                self.formatter.success(&format!("deleted {entry}"));
                self.print_listing();
            }
            Err(DeleteError::Gateway(gateway)) => {
                render_gateway_error(self.formatter.as_ref(), &gateway)
            }
            Err(error) => self.formatter.error(&error.to_string()),
        }
    }

    fn print_help(&self) {
        for line in [
            "ls                        show the current listing",
            "refresh                   re-fetch the current folder",
            "open <folder-id>          enter a folder from the listing (alias: cd)",
            "up                        go to the parent",
            "jump <n|root>             jump to breadcrumb n, or to the root",
            "path                      show the breadcrumb trail",
            "search <text>             search folders and documents",
            "goto <n>                  open hit n from the last search",
            "copy <document-id>        mark a document for copying",
            "paste                     copy the marked document into this folder",
            "clip                      show what is marked for copying",
            "mkdir [-t <type>] <name>  create a folder here ('types' lists choices)",
            "types                     folder types you may create here",
            "rename folder|file <id> <new name>",
            "delete folder|file <id>   delete an entry (alias: rm)",
            "help                      this text",
            "quit                      leave the browser",
        ] {
            self.formatter.plain(line);
        }
    }
}

/// Parses the `folder|file <id>` prefix shared by rename and delete.
fn parse_entry_ref(args: &[&str]) -> Option<EntryRef> {
    let kind = *args.first()?;
    let id = args.get(1)?.parse::<i64>().ok()?;
    match kind {
        "folder" => Some(EntryRef::Folder(FolderId::new(id))),
        "file" | "document" => Some(EntryRef::Document(DocumentId::new(id))),
        _ => None,
    }
}

fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = 1024 * KB;
    const GB: u64 = 1024 * MB;

    if bytes >= GB {
        format!("{:.1} GiB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.1} MiB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KiB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}
