//! Domain entities and business logic
//!
//! This module contains the core domain types for clubdocs:
//! - Newtypes for type-safe server ids and synthetic stub ids
//! - Folder and document entities with their category/status enums
//! - The navigation path and its breadcrumb entries
//! - The single-slot copy clipboard
//! - Search hits and location-string handling
//! - The signed-in user's platform role
//! - Domain-specific error types

pub mod clipboard;
pub mod document;
pub mod errors;
pub mod folder;
pub mod newtypes;
pub mod path;
pub mod role;
pub mod search;

// Re-export commonly used types
pub use clipboard::Clipboard;
pub use document::{Document, DocumentStatus};
pub use errors::DomainError;
pub use folder::{Folder, FolderType};
pub use newtypes::*;
pub use path::{BreadcrumbTarget, NavToken, NavigationPath, PathEntry};
pub use role::Role;
pub use search::{split_location, SearchHit, LOCATION_DELIMITER};
