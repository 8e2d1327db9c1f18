//! Location store port - persistence for the browsing position
//!
//! The browser remembers the last folder the user had open so the next
//! session can resume there instead of at the document root. Only the
//! folder id survives a restart; folder names are fetched again when the
//! listing is loaded, and synthetic search ancestors are never persisted.
//!
//! Implementations live in adapter crates: the CLI stores the id in a
//! small session file, tests use the in-memory store below.

use std::sync::Mutex;

use anyhow::Result;

use crate::domain::FolderId;

/// Persistence for the last opened real folder.
///
/// `save(None)` clears the stored position (the user navigated back to
/// the root, or the current location has no persistable id).
pub trait ILocationStore: Send + Sync {
    /// Load the persisted folder id, if any was saved.
    fn load(&self) -> Result<Option<FolderId>>;

    /// Persist the current folder id, or clear it with `None`.
    fn save(&self, folder: Option<FolderId>) -> Result<()>;
}

/// In-memory location store.
///
/// Used by tests and by embedders that do not want cross-session
/// persistence. Always starts empty.
#[derive(Debug, Default)]
pub struct MemoryLocationStore {
    slot: Mutex<Option<FolderId>>,
}

impl MemoryLocationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seed the stored id, e.g. to simulate a previous session.
    pub fn with_folder(folder: FolderId) -> Self {
        Self {
            slot: Mutex::new(Some(folder)),
        }
    }
}

impl ILocationStore for MemoryLocationStore {
    fn load(&self) -> Result<Option<FolderId>> {
        Ok(*self.slot.lock().unwrap())
    }

    fn save(&self, folder: Option<FolderId>) -> Result<()> {
        *self.slot.lock().unwrap() = folder;
        Ok(())
    }
}
