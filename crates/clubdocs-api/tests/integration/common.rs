//! Shared test helpers for gateway integration tests
//!
//! Provides wiremock-based mock server setup for the club platform API.
//! Helpers build canonical JSON rows and mount the listing endpoints; tests
//! mount their own operation-specific mocks.

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use clubdocs_api::{ApiClient, HttpDocumentGateway};

/// Starts a mock server and returns it with a gateway pointing at it
///
/// Uses a builder-started (non-pooled) server so that dropping it actually
/// closes the listener and frees the port; pooled servers from
/// `MockServer::start` keep listening after drop.
pub async fn setup_gateway() -> (MockServer, HttpDocumentGateway) {
    let server = MockServer::builder().start().await;
    let client = ApiClient::new(server.uri(), Some("test-token".to_string()));
    let gateway = HttpDocumentGateway::new(client);
    (server, gateway)
}

/// JSON body of one folder row
pub fn folder_json(
    id: i64,
    name: &str,
    folder_type: &str,
    parent: Option<i64>,
) -> serde_json::Value {
    json!({
        "id": id,
        "name": name,
        "description": "",
        "owner": 3,
        "parent": parent,
        "folder_type": folder_type,
        "subfolder_count": 0,
        "document_count": 0,
        "created_at": "2026-03-01T10:00:00Z"
    })
}

/// JSON body of one document row
pub fn document_json(id: i64, title: &str, folder: i64, status: &str) -> serde_json::Value {
    json!({
        "id": id,
        "title": title,
        "description": "",
        "file": format!("blobs/{id}"),
        "file_extension": "pdf",
        "file_size": 2048,
        "uploaded_by": 3,
        "uploaded_at": "2026-03-02T09:30:00Z",
        "folder": folder,
        "status": status
    })
}

/// Mounts `GET /folders/root` with the given rows
pub async fn mount_root(
    server: &MockServer,
    folders: serde_json::Value,
    personal_folder_id: Option<i64>,
) {
    Mock::given(method("GET"))
        .and(path("/folders/root"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "folders": folders,
            "personal_folder_id": personal_folder_id
        })))
        .mount(server)
        .await;
}

/// Mounts `GET /folders/{id}/contents` with the given rows
pub async fn mount_contents(
    server: &MockServer,
    folder: i64,
    subfolders: serde_json::Value,
    documents: serde_json::Value,
) {
    Mock::given(method("GET"))
        .and(path(format!("/folders/{folder}/contents")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "subfolders": subfolders,
            "documents": documents
        })))
        .mount(server)
        .await;
}
