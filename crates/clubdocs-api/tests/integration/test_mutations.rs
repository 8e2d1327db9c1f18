//! Integration tests for folder creation, upload, copy, rename, and delete
//!
//! Each test pins the exact request body the endpoint receives and verifies
//! the returned row maps onto the domain entity.

use serde_json::json;
use wiremock::matchers::{body_json, body_string_contains, method, path};
use wiremock::{Mock, ResponseTemplate};

use clubdocs_core::domain::document::DocumentStatus;
use clubdocs_core::domain::folder::FolderType;
use clubdocs_core::domain::newtypes::{DocumentId, FolderId};
use clubdocs_core::ports::{CreateFolderRequest, IDocumentGateway, UploadRequest};

use crate::common;

// ============================================================================
// Folder creation
// ============================================================================

#[tokio::test]
async fn test_create_folder_at_root_sends_explicit_type() {
    let (server, gateway) = common::setup_gateway().await;
    Mock::given(method("POST"))
        .and(path("/folders"))
        .and(body_json(json!({
            "name": "Fixtures",
            "description": "",
            "parent": null,
            "folder_type": "public"
        })))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(common::folder_json(12, "Fixtures", "public", None)),
        )
        .mount(&server)
        .await;

    let request = CreateFolderRequest {
        name: "Fixtures".to_string(),
        description: String::new(),
        parent: None,
        folder_type: Some(FolderType::Public),
    };
    let folder = gateway.create_folder(&request).await.expect("create failed");

    assert_eq!(folder.id(), FolderId::new(12));
    assert_eq!(folder.folder_type(), FolderType::Public);
}

#[tokio::test]
async fn test_create_nested_folder_sends_null_type() {
    let (server, gateway) = common::setup_gateway().await;
    Mock::given(method("POST"))
        .and(path("/folders"))
        .and(body_json(json!({
            "name": "Video",
            "description": "Match recordings",
            "parent": 5,
            "folder_type": null
        })))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(common::folder_json(13, "Video", "coaches", Some(5))),
        )
        .mount(&server)
        .await;

    let request = CreateFolderRequest {
        name: "Video".to_string(),
        description: "Match recordings".to_string(),
        parent: Some(FolderId::new(5)),
        folder_type: None,
    };
    let folder = gateway.create_folder(&request).await.expect("create failed");

    // The service answers with the inherited category
    assert_eq!(folder.folder_type(), FolderType::Coaches);
    assert_eq!(folder.parent(), Some(FolderId::new(5)));
}

// ============================================================================
// Upload and copy
// ============================================================================

#[tokio::test]
async fn test_upload_sends_multipart_and_maps_row() {
    let (server, gateway) = common::setup_gateway().await;
    Mock::given(method("POST"))
        .and(path("/documents"))
        .and(body_string_contains("Jersey order"))
        .and(body_string_contains("order.pdf"))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(common::document_json(40, "Jersey order", 5, "original")),
        )
        .mount(&server)
        .await;

    let request = UploadRequest {
        file_name: "order.pdf".to_string(),
        content: b"%PDF-1.7 test bytes".to_vec(),
        title: "Jersey order".to_string(),
        description: String::new(),
        folder: FolderId::new(5),
    };
    let document = gateway.upload_file(&request).await.expect("upload failed");

    assert_eq!(document.id(), DocumentId::new(40));
    assert_eq!(document.folder(), FolderId::new(5));
    assert_eq!(document.status(), DocumentStatus::Original);
}

#[tokio::test]
async fn test_copy_returns_independent_copy_row() {
    let (server, gateway) = common::setup_gateway().await;
    Mock::given(method("POST"))
        .and(path("/documents/31/copy"))
        .and(body_json(json!({ "destination": 77 })))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(common::document_json(52, "Jersey order", 77, "copy")),
        )
        .mount(&server)
        .await;

    let document = gateway
        .copy_file(&DocumentId::new(31), &FolderId::new(77))
        .await
        .expect("copy failed");

    // New row id, destination folder, tagged as a copy
    assert_eq!(document.id(), DocumentId::new(52));
    assert_eq!(document.folder(), FolderId::new(77));
    assert_eq!(document.status(), DocumentStatus::Copy);
}

// ============================================================================
// Rename and delete
// ============================================================================

#[tokio::test]
async fn test_rename_folder_patches_name() {
    let (server, gateway) = common::setup_gateway().await;
    Mock::given(method("PATCH"))
        .and(path("/folders/5"))
        .and(body_json(json!({ "name": "Kit room" })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(common::folder_json(5, "Kit room", "public", None)),
        )
        .mount(&server)
        .await;

    let folder = gateway
        .rename_folder(&FolderId::new(5), "Kit room")
        .await
        .expect("rename failed");

    assert_eq!(folder.name(), "Kit room");
}

#[tokio::test]
async fn test_rename_file_patches_title() {
    let (server, gateway) = common::setup_gateway().await;
    Mock::given(method("PATCH"))
        .and(path("/documents/31"))
        .and(body_json(json!({ "title": "Order v2" })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(common::document_json(31, "Order v2", 5, "original")),
        )
        .mount(&server)
        .await;

    let document = gateway
        .rename_file(&DocumentId::new(31), "Order v2")
        .await
        .expect("rename failed");

    assert_eq!(document.title(), "Order v2");
}

#[tokio::test]
async fn test_delete_folder_accepts_no_content() {
    let (server, gateway) = common::setup_gateway().await;
    Mock::given(method("DELETE"))
        .and(path("/folders/5"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    gateway
        .delete_folder(&FolderId::new(5))
        .await
        .expect("delete failed");
}

#[tokio::test]
async fn test_delete_file_accepts_no_content() {
    let (server, gateway) = common::setup_gateway().await;
    Mock::given(method("DELETE"))
        .and(path("/documents/31"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    gateway
        .delete_file(&DocumentId::new(31))
        .await
        .expect("delete failed");
}
