//! Scriptable gateway double shared by the unit tests in this crate.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use clubdocs_core::domain::{
    Document, DocumentId, DocumentStatus, Folder, FolderId, FolderType, SearchHit, UserId,
};
use clubdocs_core::ports::{
    CreateFolderRequest, FolderContents, GatewayError, IDocumentGateway, RootListing,
    UploadRequest,
};

pub(crate) fn sample_folder(id: i64, name: &str) -> Folder {
    Folder::new(FolderId::new(id), name, FolderType::Public, Utc::now())
}

pub(crate) fn sample_document(id: i64, title: &str, folder: i64) -> Document {
    Document::new(
        DocumentId::new(id),
        title,
        format!("blobs/{id}"),
        "pdf",
        4_096,
        UserId::new(9),
        Utc::now(),
        FolderId::new(folder),
    )
}

/// In-memory [`IDocumentGateway`] that serves scripted data and records
/// every call it receives.
pub(crate) struct MockGateway {
    root: Mutex<RootListing>,
    contents: Mutex<HashMap<FolderId, FolderContents>>,
    hits: Mutex<Vec<SearchHit>>,
    fail_next: Mutex<Option<GatewayError>>,
    next_id: Mutex<i64>,
    calls: Mutex<Vec<String>>,
}

impl MockGateway {
    pub fn new() -> Self {
        Self {
            root: Mutex::new(RootListing {
                folders: Vec::new(),
                personal_folder_id: None,
            }),
            contents: Mutex::new(HashMap::new()),
            hits: Mutex::new(Vec::new()),
            fail_next: Mutex::new(None),
            next_id: Mutex::new(1_000),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_root(self, folders: Vec<Folder>, personal_folder_id: Option<FolderId>) -> Self {
        *self.root.lock().unwrap() = RootListing {
            folders,
            personal_folder_id,
        };
        self
    }

    pub fn with_contents(self, folder: FolderId, contents: FolderContents) -> Self {
        self.contents.lock().unwrap().insert(folder, contents);
        self
    }

    pub fn with_hits(self, hits: Vec<SearchHit>) -> Self {
        *self.hits.lock().unwrap() = hits;
        self
    }

    /// Makes the next gateway call fail with `error`.
    pub fn fail_next(&self, error: GatewayError) {
        *self.fail_next.lock().unwrap() = Some(error);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }

    fn take_failure(&self) -> Option<GatewayError> {
        self.fail_next.lock().unwrap().take()
    }

    fn fresh_id(&self) -> i64 {
        let mut next = self.next_id.lock().unwrap();
        *next += 1;
        *next
    }
}

#[async_trait]
impl IDocumentGateway for MockGateway {
    async fn list_root_folders(&self) -> Result<RootListing, GatewayError> {
        self.record("list_root".to_string());
        if let Some(error) = self.take_failure() {
            return Err(error);
        }
        Ok(self.root.lock().unwrap().clone())
    }

    async fn list_folder_contents(
        &self,
        folder: &FolderId,
    ) -> Result<FolderContents, GatewayError> {
        self.record(format!("list_contents:{folder}"));
        if let Some(error) = self.take_failure() {
            return Err(error);
        }
        self.contents
            .lock()
            .unwrap()
            .get(folder)
            .cloned()
            .ok_or_else(|| GatewayError::Rejected {
                code: clubdocs_core::ports::ErrorCode::NotFound,
                message: format!("no folder {folder}"),
            })
    }

    async fn search_documents(&self, query: &str) -> Result<Vec<SearchHit>, GatewayError> {
        self.record(format!("search:{query}"));
        if let Some(error) = self.take_failure() {
            return Err(error);
        }
        Ok(self.hits.lock().unwrap().clone())
    }

    async fn create_folder(&self, request: &CreateFolderRequest) -> Result<Folder, GatewayError> {
        self.record(format!("create_folder:{}", request.name));
        if let Some(error) = self.take_failure() {
            return Err(error);
        }
        let folder_type = request.folder_type.unwrap_or(FolderType::Public);
        let mut folder = Folder::new(
            FolderId::new(self.fresh_id()),
            request.name.clone(),
            folder_type,
            Utc::now(),
        )
        .with_description(request.description.clone());
        if let Some(parent) = request.parent {
            folder = folder.with_parent(parent);
        }
        Ok(folder)
    }

    async fn upload_file(&self, request: &UploadRequest) -> Result<Document, GatewayError> {
        self.record(format!("upload:{}", request.file_name));
        if let Some(error) = self.take_failure() {
            return Err(error);
        }
        Ok(Document::new(
            DocumentId::new(self.fresh_id()),
            request.title.clone(),
            format!("blobs/{}", request.file_name),
            "pdf",
            request.content.len() as u64,
            UserId::new(9),
            Utc::now(),
            request.folder,
        ))
    }

    async fn copy_file(
        &self,
        document: &DocumentId,
        destination: &FolderId,
    ) -> Result<Document, GatewayError> {
        self.record(format!("copy:{document}->{destination}"));
        if let Some(error) = self.take_failure() {
            return Err(error);
        }
        Ok(
            sample_document(self.fresh_id(), "copied", destination.as_i64())
                .with_status(DocumentStatus::Copy),
        )
    }

    async fn rename_folder(&self, folder: &FolderId, name: &str) -> Result<Folder, GatewayError> {
        self.record(format!("rename_folder:{folder}:{name}"));
        if let Some(error) = self.take_failure() {
            return Err(error);
        }
        Ok(sample_folder(folder.as_i64(), name))
    }

    async fn rename_file(
        &self,
        document: &DocumentId,
        name: &str,
    ) -> Result<Document, GatewayError> {
        self.record(format!("rename_file:{document}:{name}"));
        if let Some(error) = self.take_failure() {
            return Err(error);
        }
        Ok(sample_document(document.as_i64(), name, 1))
    }

    async fn delete_folder(&self, folder: &FolderId) -> Result<(), GatewayError> {
        self.record(format!("delete_folder:{folder}"));
        if let Some(error) = self.take_failure() {
            return Err(error);
        }
        Ok(())
    }

    async fn delete_file(&self, document: &DocumentId) -> Result<(), GatewayError> {
        self.record(format!("delete_file:{document}"));
        if let Some(error) = self.take_failure() {
            return Err(error);
        }
        Ok(())
    }
}
