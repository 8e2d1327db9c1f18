//! clubdocs Browser - Folder navigation, search, and clipboard logic
//!
//! The client-side core of the document browser:
//! - Breadcrumb navigation with a persisted resume point
//! - Jumping into arbitrary nested locations from flat search hits
//! - A single-slot clipboard driving cross-folder document copies
//! - Optimistic renames, capability-gated deletes
//! - Role-based folder creation planning
//! - Long-press detection for touch front-ends
//!
//! ## Modules
//!
//! - [`browser`] - facade owning the session state, driven by the view layer
//! - [`navigation`] - the breadcrumb path and its persistence
//! - [`listing`] - listing view state and the stale-response guard
//! - [`search`] - query validation and path reconstruction from hits
//! - [`clipboard`] - the copy/paste workflow
//! - [`entries`] - rename/delete coordination
//! - [`permissions`] - folder types a role may create
//! - [`creation`] - folder creation planning
//! - [`gesture`] - long-press context-menu trigger

pub mod browser;
pub mod clipboard;
pub mod creation;
pub mod entries;
pub mod gesture;
pub mod listing;
pub mod navigation;
pub mod permissions;
pub mod search;

#[cfg(test)]
pub(crate) mod mocks;

pub use browser::{BrowseError, Browser};
pub use clipboard::{CopyCoordinator, PasteError};
pub use creation::{plan_folder_creation, CreateFolderError};
pub use entries::{DeleteError, EntryCoordinator, RenameError};
pub use gesture::{ContextMenuRequest, LongPressDetector};
pub use listing::{EntryRef, FetchedListing, FolderListing};
pub use navigation::NavigationController;
pub use permissions::creatable_folder_types;
pub use search::{reconstruct_path, SearchCoordinator, SearchError};
