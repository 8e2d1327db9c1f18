//! Navigation controller
//!
//! Owns the currently open [`NavigationPath`] and keeps the persisted
//! location in sync with it. The two logical states are *at root* (empty
//! path) and *in folder* (non-empty path); every operation here is a total
//! transition between them.
//!
//! ## Persistence
//!
//! Every path mutation saves the id of the deepest **real** entry through
//! [`ILocationStore`], or clears the store when the path is empty or ends
//! on a synthetic entry. Only that one id survives a restart: a restored
//! session shows a single-entry trail labeled by the id until the user
//! navigates again and real names flow back in. Persistence failures are
//! logged and never interrupt navigation.

use std::sync::Arc;

use clubdocs_core::domain::{
    BreadcrumbTarget, Folder, FolderId, NavToken, NavigationPath, PathEntry,
};
use clubdocs_core::ports::ILocationStore;
use tracing::{debug, warn};

/// Maintains the current path and mirrors it into the location store.
pub struct NavigationController {
    path: NavigationPath,
    store: Arc<dyn ILocationStore>,
}

impl NavigationController {
    /// Starts at the root with nothing restored.
    pub fn new(store: Arc<dyn ILocationStore>) -> Self {
        Self {
            path: NavigationPath::new(),
            store,
        }
    }

    /// Loads the persisted folder id and, when present, installs the
    /// single-entry restored path for it.
    ///
    /// Returns the restored folder id so the caller can trigger the first
    /// listing fetch. A load failure is logged and treated as "nothing
    /// persisted".
    pub fn restore(&mut self) -> Option<FolderId> {
        match self.store.load() {
            Ok(Some(folder)) => {
                debug!(%folder, "restoring last opened folder");
                self.path = NavigationPath::restored(folder);
                Some(folder)
            }
            Ok(None) => None,
            Err(error) => {
                warn!(error = %error, "could not load persisted location, starting at root");
                None
            }
        }
    }

    /// Descends into `folder`, appending it to the path as a real entry.
    pub fn open_folder(&mut self, folder: &Folder) {
        debug!(folder = %folder.id(), name = folder.name(), "opening folder");
        self.path
            .push(PathEntry::real(folder.id(), folder.name()));
        self.persist();
    }

    /// Truncates the path to the clicked breadcrumb; [`BreadcrumbTarget::Root`]
    /// empties it.
    pub fn jump_to_breadcrumb(&mut self, target: BreadcrumbTarget) {
        self.path.jump(target);
        self.persist();
    }

    /// Replaces the whole path at once, as done after a search hit is
    /// chosen.
    pub fn replace_path(&mut self, entries: Vec<PathEntry>) {
        debug!(depth = entries.len(), "replacing navigation path");
        self.path.replace(entries);
        self.persist();
    }

    /// Deepest entry of the path, or `None` at the root.
    pub fn current_folder(&self) -> Option<&PathEntry> {
        self.path.current()
    }

    pub fn path(&self) -> &NavigationPath {
        &self.path
    }

    pub fn is_at_root(&self) -> bool {
        self.path.is_at_root()
    }

    /// Token identifying the current navigation state, captured when a
    /// listing query is issued.
    pub fn token(&self) -> NavToken {
        self.path.token()
    }

    fn persist(&self) {
        if let Err(error) = self.store.save(self.path.persistable_id()) {
            warn!(error = %error, "could not persist current folder id");
        }
    }
}
