//! Session state persistence
//!
//! Stores the last visited folder id in a small JSON state file so a new
//! session can resume where the previous one ended. A missing file reads as
//! no saved location; a corrupt one surfaces as an error, which the
//! navigation layer degrades to starting at the root.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use clubdocs_core::domain::FolderId;
use clubdocs_core::ports::ILocationStore;

/// On-disk shape of the session state file
#[derive(Debug, Default, Serialize, Deserialize)]
struct SessionState {
    /// Folder the previous session ended in; `null` means the root
    last_folder_id: Option<i64>,
}

/// [`ILocationStore`] backed by a JSON file
pub struct FileLocationStore {
    path: PathBuf,
}

impl FileLocationStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl ILocationStore for FileLocationStore {
    fn load(&self) -> Result<Option<FolderId>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read session state {}", self.path.display()))?;
        let state: SessionState = serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse session state {}", self.path.display()))?;
        Ok(state.last_folder_id.map(FolderId::new))
    }

    fn save(&self, folder: Option<FolderId>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        let state = SessionState {
            last_folder_id: folder.map(|id| id.as_i64()),
        };
        let raw =
            serde_json::to_string_pretty(&state).context("failed to encode session state")?;
        fs::write(&self.path, raw)
            .with_context(|| format!("failed to write session state {}", self.path.display()))?;
        debug!(folder = ?folder, path = %self.path.display(), "session state saved");
        Ok(())
    }
}
