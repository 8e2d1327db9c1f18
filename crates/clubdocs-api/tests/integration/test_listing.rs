//! Integration tests for root and folder listings
//!
//! Verifies that listing responses map onto domain entities and that every
//! request carries the configured bearer token.

use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, ResponseTemplate};

use clubdocs_core::domain::document::DocumentStatus;
use clubdocs_core::domain::folder::FolderType;
use clubdocs_core::domain::newtypes::FolderId;
use clubdocs_core::ports::IDocumentGateway;

use crate::common;

#[tokio::test]
async fn test_list_root_maps_rows_and_personal_folder() {
    let (server, gateway) = common::setup_gateway().await;
    common::mount_root(
        &server,
        json!([
            common::folder_json(1, "Public docs", "public", None),
            common::folder_json(2, "Coaches", "coaches", None),
        ]),
        Some(77),
    )
    .await;

    let listing = gateway
        .list_root_folders()
        .await
        .expect("root listing failed");

    assert_eq!(listing.folders.len(), 2);
    assert_eq!(listing.folders[0].name(), "Public docs");
    assert_eq!(listing.folders[0].folder_type(), FolderType::Public);
    assert!(listing.folders[0].is_root_level());
    assert_eq!(listing.personal_folder_id, Some(FolderId::new(77)));
}

#[tokio::test]
async fn test_list_root_without_personal_folder() {
    let (server, gateway) = common::setup_gateway().await;
    common::mount_root(
        &server,
        json!([common::folder_json(1, "Public docs", "public", None)]),
        None,
    )
    .await;

    let listing = gateway
        .list_root_folders()
        .await
        .expect("root listing failed");

    assert!(listing.personal_folder_id.is_none());
}

#[tokio::test]
async fn test_list_contents_maps_subfolders_and_documents() {
    let (server, gateway) = common::setup_gateway().await;
    common::mount_contents(
        &server,
        5,
        json!([common::folder_json(9, "Jerseys", "coaches", Some(5))]),
        json!([common::document_json(31, "Jersey order", 5, "original")]),
    )
    .await;

    let contents = gateway
        .list_folder_contents(&FolderId::new(5))
        .await
        .expect("contents listing failed");

    assert_eq!(contents.subfolders.len(), 1);
    assert_eq!(contents.subfolders[0].parent(), Some(FolderId::new(5)));
    assert_eq!(contents.documents.len(), 1);
    assert_eq!(contents.documents[0].title(), "Jersey order");
    assert_eq!(contents.documents[0].status(), DocumentStatus::Original);
}

#[tokio::test]
async fn test_list_contents_of_empty_folder() {
    let (server, gateway) = common::setup_gateway().await;
    common::mount_contents(&server, 8, json!([]), json!([])).await;

    let contents = gateway
        .list_folder_contents(&FolderId::new(8))
        .await
        .expect("contents listing failed");

    assert!(contents.subfolders.is_empty());
    assert!(contents.documents.is_empty());
}

#[tokio::test]
async fn test_requests_carry_bearer_token() {
    let (server, gateway) = common::setup_gateway().await;

    // Only matches when the Authorization header is present
    Mock::given(method("GET"))
        .and(path("/folders/root"))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "folders": [],
            "personal_folder_id": null
        })))
        .mount(&server)
        .await;

    let listing = gateway
        .list_root_folders()
        .await
        .expect("authenticated request failed");

    assert!(listing.folders.is_empty());
}
