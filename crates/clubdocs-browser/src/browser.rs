//! Browser facade
//!
//! One explicit state object owning the navigation path, the clipboard
//! slot, the current listing, and the cached personal folder id, with the
//! coordinators wired through it. Views (the CLI shell, a future touch
//! front-end) drive this facade; nothing here lives in ambient globals, so
//! every piece can be tested in isolation.
//!
//! Listing loads are two-phase: [`Browser::fetch_listing`] issues the
//! gateway call tagged with the navigation state, [`Browser::apply_listing`]
//! installs the response only if that state is still current. The
//! convenience [`Browser::refresh`] does both back to back.

use std::sync::Arc;

use clubdocs_core::domain::{
    BreadcrumbTarget, Clipboard, Document, DocumentId, Folder, FolderId, FolderType, PathEntry,
    Role, SearchHit,
};
use clubdocs_core::ports::{GatewayError, IDocumentGateway, ILocationStore};
use thiserror::Error;
use tracing::debug;

use crate::clipboard::{CopyCoordinator, PasteError};
use crate::creation::{plan_folder_creation, CreateFolderError};
use crate::entries::{DeleteError, EntryCoordinator, RenameError};
use crate::listing::{EntryRef, FetchedListing, FolderListing};
use crate::navigation::NavigationController;
use crate::permissions::creatable_folder_types;
use crate::search::{reconstruct_path, SearchCoordinator, SearchError};

/// Why a browse operation could not run.
#[derive(Debug, Error)]
pub enum BrowseError {
    /// The targeted breadcrumb entry came from a search reconstruction and
    /// has no real id to fetch.
    #[error("this entry came from a search result and cannot be opened; search again or jump to a real entry")]
    SyntheticLocation,

    /// The entry is not part of the current listing.
    #[error("no {0} in the current listing")]
    UnknownEntry(EntryRef),

    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

/// Browsing session state and the operations the view layer calls.
pub struct Browser {
    gateway: Arc<dyn IDocumentGateway>,
    navigation: NavigationController,
    search: SearchCoordinator,
    copier: CopyCoordinator,
    entries: EntryCoordinator,
    clipboard: Clipboard,
    listing: FolderListing,
    personal_folder: Option<FolderId>,
    role: Role,
}

impl Browser {
    pub fn new(
        gateway: Arc<dyn IDocumentGateway>,
        store: Arc<dyn ILocationStore>,
        role: Role,
    ) -> Self {
        Self {
            navigation: NavigationController::new(store),
            search: SearchCoordinator::new(gateway.clone()),
            copier: CopyCoordinator::new(gateway.clone()),
            entries: EntryCoordinator::new(gateway.clone()),
            gateway,
            clipboard: Clipboard::new(),
            listing: FolderListing::new(),
            personal_folder: None,
            role,
        }
    }

    // --- Session ---

    /// Resumes at the folder persisted by the previous session, if any.
    /// Call [`Browser::refresh`] afterwards to load its contents.
    pub fn restore(&mut self) -> Option<FolderId> {
        self.navigation.restore()
    }

    // --- Listing ---

    /// Fetches the listing for the current location, tagged with the
    /// navigation state it was issued for.
    pub async fn fetch_listing(&self) -> Result<FetchedListing, BrowseError> {
        let token = self.navigation.token();
        match self.navigation.current_folder() {
            None => {
                let root = self.gateway.list_root_folders().await?;
                Ok(FetchedListing::for_root(token, root))
            }
            Some(entry) => {
                let folder = entry.folder_id().ok_or(BrowseError::SyntheticLocation)?;
                let contents = self.gateway.list_folder_contents(&folder).await?;
                Ok(FetchedListing::for_folder(token, contents))
            }
        }
    }

    /// Installs a fetched listing if the user has not navigated away since
    /// it was issued. Returns whether it was applied.
    pub fn apply_listing(&mut self, fetched: FetchedListing) -> bool {
        if !fetched.is_current(self.navigation.path()) {
            debug!("discarding stale listing response");
            return false;
        }
        if let Some(personal) = fetched.personal_folder() {
            self.personal_folder = Some(personal);
        }
        self.listing = fetched.into_listing();
        true
    }

    /// Fetches and applies in one step. The boolean mirrors
    /// [`Browser::apply_listing`].
    pub async fn refresh(&mut self) -> Result<bool, BrowseError> {
        let fetched = self.fetch_listing().await?;
        Ok(self.apply_listing(fetched))
    }

    pub fn listing(&self) -> &FolderListing {
        &self.listing
    }

    // --- Navigation ---

    /// Descends into a folder of the current listing and loads it.
    pub async fn open_folder(&mut self, folder: FolderId) -> Result<(), BrowseError> {
        let folder = self
            .listing
            .folder(folder)
            .ok_or(BrowseError::UnknownEntry(EntryRef::Folder(folder)))?
            .clone();
        self.navigation.open_folder(&folder);
        self.refresh().await?;
        Ok(())
    }

    /// Jumps to a breadcrumb entry (or the root) and loads it. Jumping
    /// onto a synthetic entry is refused: there is no real id to fetch.
    pub async fn jump(&mut self, target: BreadcrumbTarget) -> Result<(), BrowseError> {
        if let BreadcrumbTarget::Entry(index) = target {
            match self.navigation.path().entries().get(index) {
                None => return Ok(()),
                Some(entry) if entry.is_synthetic() => {
                    return Err(BrowseError::SyntheticLocation)
                }
                Some(_) => {}
            }
        }
        self.navigation.jump_to_breadcrumb(target);
        self.refresh().await?;
        Ok(())
    }

    pub fn breadcrumbs(&self) -> &[PathEntry] {
        self.navigation.path().entries()
    }

    pub fn current_folder(&self) -> Option<&PathEntry> {
        self.navigation.current_folder()
    }

    pub fn is_at_root(&self) -> bool {
        self.navigation.is_at_root()
    }

    // --- Search ---

    pub async fn search(&self, query: &str) -> Result<Vec<SearchHit>, SearchError> {
        self.search.search(query).await
    }

    /// Replaces the path with the hit's reconstructed ancestry and loads
    /// the target folder.
    pub async fn goto_hit(&mut self, hit: &SearchHit) -> Result<(), BrowseError> {
        self.navigation.replace_path(reconstruct_path(hit));
        self.refresh().await?;
        Ok(())
    }

    // --- Clipboard ---

    /// Marks a document of the current listing for a later paste.
    pub fn mark_for_copy(&mut self, document: DocumentId) -> Result<(), BrowseError> {
        let document = self
            .listing
            .document(document)
            .ok_or(BrowseError::UnknownEntry(EntryRef::Document(document)))?;
        self.copier.mark_for_copy(&mut self.clipboard, document);
        Ok(())
    }

    /// Pastes the marked document into the current location.
    pub async fn paste(&mut self) -> Result<Document, PasteError> {
        self.copier
            .paste(
                &mut self.clipboard,
                self.navigation.current_folder(),
                self.personal_folder,
            )
            .await
    }

    pub fn clipboard(&self) -> &Clipboard {
        &self.clipboard
    }

    // --- Entry mutations ---

    pub async fn rename_entry(&mut self, entry: EntryRef, name: &str) -> Result<(), RenameError> {
        self.entries.rename(&mut self.listing, entry, name).await
    }

    pub async fn delete_entry(
        &mut self,
        entry: EntryRef,
        can_delete: bool,
    ) -> Result<(), DeleteError> {
        self.entries
            .delete(&mut self.listing, entry, can_delete)
            .await
    }

    // --- Folder creation ---

    /// Folder types the user may pick at the current location.
    pub fn creatable_types(&self) -> &'static [FolderType] {
        creatable_folder_types(self.role, self.navigation.is_at_root())
    }

    /// Plans and submits a folder creation for the current location.
    pub async fn create_folder(
        &mut self,
        name: &str,
        description: &str,
        folder_type: Option<FolderType>,
    ) -> Result<Folder, CreateFolderError> {
        let request = plan_folder_creation(
            self.role,
            self.navigation.current_folder(),
            name,
            description,
            folder_type,
        )?;
        let folder = self.gateway.create_folder(&request).await?;
        debug!(folder = %folder.id(), name = folder.name(), "folder created");
        Ok(folder)
    }

    pub fn personal_folder(&self) -> Option<FolderId> {
        self.personal_folder
    }

    pub fn role(&self) -> Role {
        self.role
    }
}
