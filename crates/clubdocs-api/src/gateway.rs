//! HTTP implementation of the document gateway port
//!
//! Maps each [`IDocumentGateway`] operation onto one endpoint of the club
//! platform API and converts wire payloads into domain entities.
//!
//! ## Design Notes
//!
//! - Wire structs are private to this module; the port types stay free of
//!   serde attributes tied to this particular service.
//! - Error bodies are interpreted centrally in [`crate::client`]; this module
//!   never guesses a rejection code from a malformed payload.
//! - Uploads go out as multipart forms with the raw bytes under `file` and
//!   title/description/folder as plain text fields.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::multipart::{Form, Part};
use reqwest::Method;
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use clubdocs_core::domain::document::{Document, DocumentStatus};
use clubdocs_core::domain::folder::{Folder, FolderType};
use clubdocs_core::domain::newtypes::{DocumentId, FolderId, UserId};
use clubdocs_core::domain::search::SearchHit;
use clubdocs_core::ports::{
    CreateFolderRequest, FolderContents, GatewayError, IDocumentGateway, RootListing,
    UploadRequest,
};

use crate::client::{expect_success, read_json, ApiClient};

// ============================================================================
// Wire payloads
// ============================================================================

/// Folder row as the service sends it
#[derive(Debug, Deserialize)]
struct FolderPayload {
    /// Server row id
    id: i64,
    /// Display name
    name: String,
    /// Free-form description
    #[serde(default)]
    description: String,
    /// Owning user id
    owner: Option<i64>,
    /// Parent folder id; absent or null at the root level
    parent: Option<i64>,
    /// Category label, e.g. `coach_personal`
    folder_type: FolderType,
    /// Number of direct subfolders
    #[serde(default)]
    subfolder_count: u64,
    /// Number of documents directly inside
    #[serde(default)]
    document_count: u64,
    /// Creation timestamp
    created_at: DateTime<Utc>,
}

impl FolderPayload {
    fn into_domain(self) -> Folder {
        let mut folder = Folder::new(
            FolderId::new(self.id),
            self.name,
            self.folder_type,
            self.created_at,
        )
        .with_description(self.description)
        .with_counts(self.subfolder_count, self.document_count);
        if let Some(owner) = self.owner {
            folder = folder.with_owner(UserId::new(owner));
        }
        if let Some(parent) = self.parent {
            folder = folder.with_parent(FolderId::new(parent));
        }
        folder
    }
}

/// Document row as the service sends it
#[derive(Debug, Deserialize)]
struct DocumentPayload {
    /// Server row id
    id: i64,
    /// Display title
    title: String,
    /// Free-form description
    #[serde(default)]
    description: String,
    /// Reference to the stored blob
    file: String,
    /// Lower-case extension without the leading dot
    file_extension: String,
    /// Blob size in bytes
    file_size: u64,
    /// Uploading user id
    uploaded_by: i64,
    /// Upload timestamp
    uploaded_at: DateTime<Utc>,
    /// Containing folder id
    folder: i64,
    /// `original` or `copy`
    status: DocumentStatus,
}

impl DocumentPayload {
    fn into_domain(self) -> Document {
        Document::new(
            DocumentId::new(self.id),
            self.title,
            self.file,
            self.file_extension,
            self.file_size,
            UserId::new(self.uploaded_by),
            self.uploaded_at,
            FolderId::new(self.folder),
        )
        .with_description(self.description)
        .with_status(self.status)
    }
}

/// Response of `GET /folders/root`
#[derive(Debug, Deserialize)]
struct RootListingPayload {
    folders: Vec<FolderPayload>,
    personal_folder_id: Option<i64>,
}

impl RootListingPayload {
    fn into_domain(self) -> RootListing {
        RootListing {
            folders: self
                .folders
                .into_iter()
                .map(FolderPayload::into_domain)
                .collect(),
            personal_folder_id: self.personal_folder_id.map(FolderId::new),
        }
    }
}

/// Response of `GET /folders/{id}/contents`
#[derive(Debug, Deserialize)]
struct FolderContentsPayload {
    subfolders: Vec<FolderPayload>,
    documents: Vec<DocumentPayload>,
}

impl FolderContentsPayload {
    fn into_domain(self) -> FolderContents {
        FolderContents {
            subfolders: self
                .subfolders
                .into_iter()
                .map(FolderPayload::into_domain)
                .collect(),
            documents: self
                .documents
                .into_iter()
                .map(DocumentPayload::into_domain)
                .collect(),
        }
    }
}

/// One row of `GET /search`
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum SearchHitPayload {
    Folder {
        id: i64,
        name: String,
        #[serde(default)]
        location: String,
    },
    Document {
        id: i64,
        title: String,
        folder: i64,
        #[serde(default)]
        location: String,
    },
}

impl SearchHitPayload {
    fn into_domain(self) -> SearchHit {
        match self {
            SearchHitPayload::Folder { id, name, location } => SearchHit::Folder {
                id: FolderId::new(id),
                name,
                location,
            },
            SearchHitPayload::Document {
                id,
                title,
                folder,
                location,
            } => SearchHit::Document {
                id: DocumentId::new(id),
                title,
                folder: FolderId::new(folder),
                location,
            },
        }
    }
}

/// Response of `GET /search`
#[derive(Debug, Deserialize)]
struct SearchResponsePayload {
    results: Vec<SearchHitPayload>,
}

// ============================================================================
// HttpDocumentGateway
// ============================================================================

/// [`IDocumentGateway`] implementation backed by the club platform API
pub struct HttpDocumentGateway {
    /// Shared HTTP plumbing
    client: ApiClient,
}

impl HttpDocumentGateway {
    /// Wraps an [`ApiClient`]
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl IDocumentGateway for HttpDocumentGateway {
    async fn list_root_folders(&self) -> Result<RootListing, GatewayError> {
        debug!("listing root folders");
        let request = self.client.request(Method::GET, "/folders/root");
        let response = self.client.send(request).await?;
        let payload: RootListingPayload = read_json(response).await?;
        Ok(payload.into_domain())
    }

    async fn list_folder_contents(
        &self,
        folder: &FolderId,
    ) -> Result<FolderContents, GatewayError> {
        debug!(%folder, "listing folder contents");
        let request = self
            .client
            .request(Method::GET, &format!("/folders/{folder}/contents"));
        let response = self.client.send(request).await?;
        let payload: FolderContentsPayload = read_json(response).await?;
        Ok(payload.into_domain())
    }

    async fn search_documents(&self, query: &str) -> Result<Vec<SearchHit>, GatewayError> {
        debug!(query, "searching documents");
        let request = self
            .client
            .request(Method::GET, "/search")
            .query(&[("q", query)]);
        let response = self.client.send(request).await?;
        let payload: SearchResponsePayload = read_json(response).await?;
        Ok(payload
            .results
            .into_iter()
            .map(SearchHitPayload::into_domain)
            .collect())
    }

    async fn create_folder(&self, request: &CreateFolderRequest) -> Result<Folder, GatewayError> {
        debug!(name = %request.name, parent = ?request.parent, "creating folder");
        let builder = self.client.request(Method::POST, "/folders").json(request);
        let response = self.client.send(builder).await?;
        let payload: FolderPayload = read_json(response).await?;
        Ok(payload.into_domain())
    }

    async fn upload_file(&self, request: &UploadRequest) -> Result<Document, GatewayError> {
        debug!(file_name = %request.file_name, folder = %request.folder, "uploading document");
        let part = Part::bytes(request.content.clone()).file_name(request.file_name.clone());
        let form = Form::new()
            .part("file", part)
            .text("title", request.title.clone())
            .text("description", request.description.clone())
            .text("folder", request.folder.to_string());
        let builder = self
            .client
            .request(Method::POST, "/documents")
            .multipart(form);
        let response = self.client.send(builder).await?;
        let payload: DocumentPayload = read_json(response).await?;
        Ok(payload.into_domain())
    }

    async fn copy_file(
        &self,
        document: &DocumentId,
        destination: &FolderId,
    ) -> Result<Document, GatewayError> {
        debug!(%document, %destination, "copying document");
        let builder = self
            .client
            .request(Method::POST, &format!("/documents/{document}/copy"))
            .json(&json!({ "destination": destination }));
        let response = self.client.send(builder).await?;
        let payload: DocumentPayload = read_json(response).await?;
        Ok(payload.into_domain())
    }

    async fn rename_folder(&self, folder: &FolderId, name: &str) -> Result<Folder, GatewayError> {
        debug!(%folder, name, "renaming folder");
        let builder = self
            .client
            .request(Method::PATCH, &format!("/folders/{folder}"))
            .json(&json!({ "name": name }));
        let response = self.client.send(builder).await?;
        let payload: FolderPayload = read_json(response).await?;
        Ok(payload.into_domain())
    }

    async fn rename_file(
        &self,
        document: &DocumentId,
        name: &str,
    ) -> Result<Document, GatewayError> {
        debug!(%document, name, "renaming document");
        let builder = self
            .client
            .request(Method::PATCH, &format!("/documents/{document}"))
            .json(&json!({ "title": name }));
        let response = self.client.send(builder).await?;
        let payload: DocumentPayload = read_json(response).await?;
        Ok(payload.into_domain())
    }

    async fn delete_folder(&self, folder: &FolderId) -> Result<(), GatewayError> {
        debug!(%folder, "deleting folder");
        let builder = self
            .client
            .request(Method::DELETE, &format!("/folders/{folder}"));
        let response = self.client.send(builder).await?;
        expect_success(response).await
    }

    async fn delete_file(&self, document: &DocumentId) -> Result<(), GatewayError> {
        debug!(%document, "deleting document");
        let builder = self
            .client
            .request(Method::DELETE, &format!("/documents/{document}"));
        let response = self.client.send(builder).await?;
        expect_success(response).await
    }
}

// ============================================================================
// Tests
// ============================================================================
