//! Document gateway port (driven/secondary port)
//!
//! This module defines the interface to the remote folder/document service.
//! The primary implementation talks to the club platform's HTTP API, but the
//! trait is transport-agnostic so tests can substitute an in-memory gateway.
//!
//! ## Design Notes
//!
//! - Errors are a typed `GatewayError` rather than `anyhow`: the browser
//!   must branch on field validation vs structured rejection vs transport
//!   failure to surface each the way the view expects.
//! - A rejected request carries a structured `ErrorCode` parsed from the
//!   response body. Implementations must never infer a code from the shape
//!   of a malformed payload; that becomes `UnexpectedPayload`.
//! - Request DTOs (`CreateFolderRequest`, `UploadRequest`) are port-level
//!   types; the adapter owns the wire encoding.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::document::Document;
use crate::domain::folder::{Folder, FolderType};
use crate::domain::newtypes::{DocumentId, FolderId};
use crate::domain::search::SearchHit;

/// Shortest query the search operation accepts, after trimming
pub const MIN_SEARCH_QUERY_LEN: usize = 2;

// ============================================================================
// Listing DTOs
// ============================================================================

/// Contents of the root level
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RootListing {
    /// Folders visible to the caller at the root level
    pub folders: Vec<Folder>,
    /// The caller's personal folder, when the role has one
    ///
    /// Used as the paste destination while browsing at the root.
    pub personal_folder_id: Option<FolderId>,
}

/// Contents of one folder
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FolderContents {
    /// Direct subfolders
    pub subfolders: Vec<Folder>,
    /// Documents directly inside
    pub documents: Vec<Document>,
}

// ============================================================================
// Request DTOs
// ============================================================================

/// Payload for creating a folder
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateFolderRequest {
    /// Display name of the new folder
    pub name: String,
    /// Free-form description
    pub description: String,
    /// Parent folder; `None` creates at the root level
    pub parent: Option<FolderId>,
    /// Explicit category; only meaningful when `parent` is `None`
    ///
    /// Inside an existing folder the type is inherited server-side and this
    /// field must be `None`.
    pub folder_type: Option<FolderType>,
}

/// Payload for uploading a document
#[derive(Debug, Clone)]
pub struct UploadRequest {
    /// File name including extension, e.g. `plan.pdf`
    pub file_name: String,
    /// Raw file bytes
    pub content: Vec<u8>,
    /// Display title
    pub title: String,
    /// Free-form description
    pub description: String,
    /// Destination folder
    pub folder: FolderId,
}

// ============================================================================
// Errors
// ============================================================================

/// Per-field and global validation messages returned by create/upload
///
/// Field errors map an input name to its messages; non-field errors are not
/// tied to an input and are shown as a banner. The map is ordered so output
/// is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationErrors {
    /// Messages keyed by the offending input field
    pub field_errors: BTreeMap<String, Vec<String>>,
    /// Messages not tied to any input
    pub non_field_errors: Vec<String>,
}

impl ValidationErrors {
    /// Creates an empty set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a message against a field
    pub fn add_field(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.field_errors
            .entry(field.into())
            .or_default()
            .push(message.into());
    }

    /// Records a global message
    pub fn add_non_field(&mut self, message: impl Into<String>) {
        self.non_field_errors.push(message.into());
    }

    /// Returns true when no message was recorded
    pub fn is_empty(&self) -> bool {
        self.field_errors.is_empty() && self.non_field_errors.is_empty()
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut parts: Vec<String> = Vec::new();
        for (field, messages) in &self.field_errors {
            for message in messages {
                parts.push(format!("{field}: {message}"));
            }
        }
        parts.extend(self.non_field_errors.iter().cloned());
        write!(f, "{}", parts.join("; "))
    }
}

/// Structured rejection code returned by the service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// An entry with the requested name already exists in the destination
    DuplicateName,
    /// The referenced folder or document does not exist
    NotFound,
    /// The caller's role may not perform the operation
    NotPermitted,
    /// A code this client does not know; kept verbatim
    #[serde(untagged)]
    Other(String),
}

impl ErrorCode {
    /// Maps a wire code string to the enum
    #[must_use]
    pub fn from_wire(code: &str) -> Self {
        match code {
            "duplicate_name" => ErrorCode::DuplicateName,
            "not_found" => ErrorCode::NotFound,
            "not_permitted" => ErrorCode::NotPermitted,
            other => ErrorCode::Other(other.to_string()),
        }
    }

    /// Returns the wire label
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            ErrorCode::DuplicateName => "duplicate_name",
            ErrorCode::NotFound => "not_found",
            ErrorCode::NotPermitted => "not_permitted",
            ErrorCode::Other(code) => code,
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Failure of a gateway operation
///
/// Nothing here is fatal to the client; every variant degrades to a
/// user-visible message and leaves the browser navigable.
#[derive(Debug, Clone, thiserror::Error)]
pub enum GatewayError {
    /// Create/upload input rejected with per-field messages
    #[error("validation failed: {0}")]
    Validation(ValidationErrors),

    /// The service rejected the request with a structured code
    #[error("rejected ({code}): {message}")]
    Rejected {
        /// Structured rejection code
        code: ErrorCode,
        /// Human-readable explanation from the service
        message: String,
    },

    /// Network or HTTP-level failure before a body could be interpreted
    #[error("transport failure: {0}")]
    Transport(String),

    /// The body was not the JSON shape this client understands
    ///
    /// Carries a truncated snippet of the offending payload.
    #[error("unexpected payload: {0}")]
    UnexpectedPayload(String),
}

// ============================================================================
// IDocumentGateway trait
// ============================================================================

/// Port trait for the remote folder/document service
///
/// All listing, search, and mutation traffic of the browser flows through
/// this trait. Implementations handle transport, encoding, and the mapping
/// of service failures onto [`GatewayError`].
#[async_trait::async_trait]
pub trait IDocumentGateway: Send + Sync {
    /// Lists the folders visible at the root level
    ///
    /// # Returns
    /// The root folders plus the caller's personal folder id, when one exists
    async fn list_root_folders(&self) -> Result<RootListing, GatewayError>;

    /// Lists the direct contents of a folder
    ///
    /// # Arguments
    /// * `folder` - Server id of the folder to list
    ///
    /// # Returns
    /// Subfolders and documents directly inside the folder
    async fn list_folder_contents(&self, folder: &FolderId)
        -> Result<FolderContents, GatewayError>;

    /// Searches folders and documents by free text
    ///
    /// The service requires at least [`MIN_SEARCH_QUERY_LEN`] characters;
    /// callers are expected to enforce that before issuing the request.
    ///
    /// # Arguments
    /// * `query` - Free-text query, already trimmed
    ///
    /// # Returns
    /// Matching hits with their location strings
    async fn search_documents(&self, query: &str) -> Result<Vec<SearchHit>, GatewayError>;

    /// Creates a folder
    ///
    /// # Arguments
    /// * `request` - Name, description, parent, and (root only) explicit type
    ///
    /// # Returns
    /// The created folder as the service stored it
    async fn create_folder(&self, request: &CreateFolderRequest) -> Result<Folder, GatewayError>;

    /// Uploads a document
    ///
    /// # Arguments
    /// * `request` - File bytes plus title/description and destination folder
    ///
    /// # Returns
    /// The created document row
    async fn upload_file(&self, request: &UploadRequest) -> Result<Document, GatewayError>;

    /// Copies a document into another folder
    ///
    /// # Arguments
    /// * `document` - Source document id
    /// * `destination` - Folder receiving the copy
    ///
    /// # Returns
    /// The new, independent document row with `DocumentStatus::Copy`
    async fn copy_file(
        &self,
        document: &DocumentId,
        destination: &FolderId,
    ) -> Result<Document, GatewayError>;

    /// Renames a folder
    ///
    /// # Arguments
    /// * `folder` - Folder to rename
    /// * `name` - New display name
    ///
    /// # Returns
    /// The updated folder
    async fn rename_folder(&self, folder: &FolderId, name: &str) -> Result<Folder, GatewayError>;

    /// Renames a document
    ///
    /// # Arguments
    /// * `document` - Document to retitle
    /// * `name` - New display title
    ///
    /// # Returns
    /// The updated document
    async fn rename_file(&self, document: &DocumentId, name: &str)
        -> Result<Document, GatewayError>;

    /// Deletes a folder
    ///
    /// # Arguments
    /// * `folder` - Folder to delete
    async fn delete_folder(&self, folder: &FolderId) -> Result<(), GatewayError>;

    /// Deletes a document
    ///
    /// # Arguments
    /// * `document` - Document to delete
    async fn delete_file(&self, document: &DocumentId) -> Result<(), GatewayError>;
}

// ============================================================================
// Tests
// ============================================================================
