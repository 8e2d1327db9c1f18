//! Document domain entity
//!
//! A document always lives inside exactly one folder. Copying a document
//! produces an independent row with `DocumentStatus::Copy`; the copy does not
//! track later changes to its source.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::newtypes::{DocumentId, FolderId, UserId};

// ============================================================================
// DocumentStatus
// ============================================================================

/// Provenance marker for a document row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentStatus {
    /// Uploaded directly by a user
    Original,
    /// Created by a copy operation from another document
    Copy,
}

impl DocumentStatus {
    /// Returns the wire label for this status
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentStatus::Original => "original",
            DocumentStatus::Copy => "copy",
        }
    }
}

impl std::fmt::Display for DocumentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// Document
// ============================================================================

/// A document stored in the remote tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Server row id
    id: DocumentId,
    /// Display title
    title: String,
    /// Free-form description
    description: String,
    /// Opaque reference to the stored blob
    file_ref: String,
    /// Lower-case extension without the leading dot, e.g. `pdf`
    file_extension: String,
    /// Blob size in bytes
    file_size: u64,
    /// User that uploaded the document
    uploaded_by: UserId,
    /// Upload timestamp
    uploaded_at: DateTime<Utc>,
    /// Containing folder; a document is never parentless
    folder: FolderId,
    /// Original upload or copy of another row
    status: DocumentStatus,
}

impl Document {
    /// Creates a document with the identity fields; status defaults to
    /// `Original`
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: DocumentId,
        title: impl Into<String>,
        file_ref: impl Into<String>,
        file_extension: impl Into<String>,
        file_size: u64,
        uploaded_by: UserId,
        uploaded_at: DateTime<Utc>,
        folder: FolderId,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: String::new(),
            file_ref: file_ref.into(),
            file_extension: file_extension.into(),
            file_size,
            uploaded_by,
            uploaded_at,
            folder,
            status: DocumentStatus::Original,
        }
    }

    /// Sets the description (builder style)
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Marks the document as a copy (builder style)
    #[must_use]
    pub fn with_status(mut self, status: DocumentStatus) -> Self {
        self.status = status;
        self
    }

    // --- Getters ---

    /// Returns the document's server id
    pub fn id(&self) -> DocumentId {
        self.id
    }

    /// Returns the display title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the blob reference
    pub fn file_ref(&self) -> &str {
        &self.file_ref
    }

    /// Returns the file extension without the leading dot
    pub fn file_extension(&self) -> &str {
        &self.file_extension
    }

    /// Returns the blob size in bytes
    pub fn file_size(&self) -> u64 {
        self.file_size
    }

    /// Returns the uploading user
    pub fn uploaded_by(&self) -> UserId {
        self.uploaded_by
    }

    /// Returns the upload timestamp
    pub fn uploaded_at(&self) -> DateTime<Utc> {
        self.uploaded_at
    }

    /// Returns the containing folder id
    pub fn folder(&self) -> FolderId {
        self.folder
    }

    /// Returns the provenance status
    pub fn status(&self) -> DocumentStatus {
        self.status
    }

    // --- Mutators ---

    /// Replaces the display title (optimistic rename path)
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }
}

// ============================================================================
// Tests
// ============================================================================
