//! Folder listing view state
//!
//! A [`FolderListing`] is what the view renders for the current location:
//! the subfolders and documents of one folder, or the top-level folders at
//! the root. Fetched listings arrive as a [`FetchedListing`] tagged with the
//! navigation state they were issued for, so a response that lands after
//! the user has already moved elsewhere can be recognized as stale and
//! discarded instead of overwriting the view.

use clubdocs_core::domain::{
    Document, DocumentId, Folder, FolderId, NavToken, NavigationPath,
};
use clubdocs_core::ports::{FolderContents, RootListing};

/// Reference to one row of a listing, folder or document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryRef {
    Folder(FolderId),
    Document(DocumentId),
}

impl std::fmt::Display for EntryRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntryRef::Folder(id) => write!(f, "folder {id}"),
            EntryRef::Document(id) => write!(f, "document {id}"),
        }
    }
}

/// The folders and documents currently displayed.
#[derive(Debug, Clone, Default)]
pub struct FolderListing {
    folders: Vec<Folder>,
    documents: Vec<Document>,
}

impl FolderListing {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the root-level listing. The root has folders only.
    pub fn from_root(root: RootListing) -> Self {
        Self {
            folders: root.folders,
            documents: Vec::new(),
        }
    }

    pub fn from_contents(contents: FolderContents) -> Self {
        Self {
            folders: contents.subfolders,
            documents: contents.documents,
        }
    }

    pub fn folders(&self) -> &[Folder] {
        &self.folders
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn is_empty(&self) -> bool {
        self.folders.is_empty() && self.documents.is_empty()
    }

    pub fn folder(&self, id: FolderId) -> Option<&Folder> {
        self.folders.iter().find(|f| f.id() == id)
    }

    pub fn document(&self, id: DocumentId) -> Option<&Document> {
        self.documents.iter().find(|d| d.id() == id)
    }

    /// Current display label of an entry, if it is part of this listing.
    pub fn label_of(&self, entry: EntryRef) -> Option<&str> {
        match entry {
            EntryRef::Folder(id) => self.folder(id).map(Folder::name),
            EntryRef::Document(id) => self.document(id).map(Document::title),
        }
    }

    /// Rewrites an entry's display label and returns the previous one.
    ///
    /// Returns `None` (and changes nothing) when the entry is not part of
    /// this listing. The previous label is what a failed rename restores.
    pub fn set_label(&mut self, entry: EntryRef, name: &str) -> Option<String> {
        match entry {
            EntryRef::Folder(id) => {
                let folder = self.folders.iter_mut().find(|f| f.id() == id)?;
                let previous = folder.name().to_string();
                folder.set_name(name);
                Some(previous)
            }
            EntryRef::Document(id) => {
                let document = self.documents.iter_mut().find(|d| d.id() == id)?;
                let previous = document.title().to_string();
                document.set_title(name);
                Some(previous)
            }
        }
    }

    /// Drops an entry from the listing. Returns whether it was present.
    pub fn remove(&mut self, entry: EntryRef) -> bool {
        match entry {
            EntryRef::Folder(id) => {
                let before = self.folders.len();
                self.folders.retain(|f| f.id() != id);
                self.folders.len() != before
            }
            EntryRef::Document(id) => {
                let before = self.documents.len();
                self.documents.retain(|d| d.id() != id);
                self.documents.len() != before
            }
        }
    }
}

/// A listing response paired with the navigation state it was issued for.
///
/// Listing queries are keyed by the current folder at issue time. When the
/// response arrives the token is compared against the live path; a mismatch
/// means the user navigated away in the meantime and the data must not be
/// applied.
#[derive(Debug, Clone)]
pub struct FetchedListing {
    token: NavToken,
    listing: FolderListing,
    personal_folder: Option<FolderId>,
}

impl FetchedListing {
    /// Wraps a root listing fetched while the token's path was current.
    pub fn for_root(token: NavToken, root: RootListing) -> Self {
        let personal_folder = root.personal_folder_id;
        Self {
            token,
            listing: FolderListing::from_root(root),
            personal_folder,
        }
    }

    /// Wraps a folder-contents listing fetched under `token`.
    pub fn for_folder(token: NavToken, contents: FolderContents) -> Self {
        Self {
            token,
            listing: FolderListing::from_contents(contents),
            personal_folder: None,
        }
    }

    /// Whether the path this listing was fetched for is still the one
    /// displayed.
    pub fn is_current(&self, path: &NavigationPath) -> bool {
        self.token.matches(path)
    }

    pub fn token(&self) -> NavToken {
        self.token
    }

    /// Personal folder id reported by a root fetch, if any.
    pub fn personal_folder(&self) -> Option<FolderId> {
        self.personal_folder
    }

    pub fn into_listing(self) -> FolderListing {
        self.listing
    }
}
