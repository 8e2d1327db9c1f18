//! Integration tests for error body interpretation
//!
//! Verifies the three failure shapes the gateway distinguishes: structured
//! rejections, per-field validation maps, and payloads it does not
//! understand, plus connection-level transport failures.

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

use clubdocs_core::domain::newtypes::{DocumentId, FolderId};
use clubdocs_core::ports::{CreateFolderRequest, ErrorCode, GatewayError, IDocumentGateway};

use crate::common;

#[tokio::test]
async fn test_structured_rejection_maps_code_and_message() {
    let (server, gateway) = common::setup_gateway().await;
    Mock::given(method("PATCH"))
        .and(path("/folders/5"))
        .respond_with(ResponseTemplate::new(409).set_body_json(json!({
            "detail": "a folder named Kits already exists",
            "code": "duplicate_name"
        })))
        .mount(&server)
        .await;

    let error = gateway
        .rename_folder(&FolderId::new(5), "Kits")
        .await
        .unwrap_err();

    match error {
        GatewayError::Rejected { code, message } => {
            assert_eq!(code, ErrorCode::DuplicateName);
            assert_eq!(message, "a folder named Kits already exists");
        }
        other => panic!("expected Rejected, got {other:?}"),
    }
}

#[tokio::test]
async fn test_rejection_without_code_keeps_http_status() {
    let (server, gateway) = common::setup_gateway().await;
    Mock::given(method("DELETE"))
        .and(path("/folders/5"))
        .respond_with(
            ResponseTemplate::new(403)
                .set_body_json(json!({ "detail": "players may not delete entries" })),
        )
        .mount(&server)
        .await;

    let error = gateway.delete_folder(&FolderId::new(5)).await.unwrap_err();

    match error {
        GatewayError::Rejected { code, .. } => {
            assert_eq!(code, ErrorCode::Other("http_403".to_string()));
        }
        other => panic!("expected Rejected, got {other:?}"),
    }
}

#[tokio::test]
async fn test_validation_map_collects_field_errors() {
    let (server, gateway) = common::setup_gateway().await;
    Mock::given(method("POST"))
        .and(path("/folders"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "name": ["This field may not be blank."],
            "non_field_errors": ["folder quota exceeded"]
        })))
        .mount(&server)
        .await;

    let request = CreateFolderRequest {
        name: String::new(),
        description: String::new(),
        parent: Some(FolderId::new(5)),
        folder_type: None,
    };
    let error = gateway.create_folder(&request).await.unwrap_err();

    match error {
        GatewayError::Validation(errors) => {
            assert_eq!(errors.field_errors["name"], vec!["This field may not be blank."]);
            assert_eq!(errors.non_field_errors, vec!["folder quota exceeded"]);
        }
        other => panic!("expected Validation, got {other:?}"),
    }
}

#[tokio::test]
async fn test_html_error_body_is_unexpected_payload() {
    let (server, gateway) = common::setup_gateway().await;
    Mock::given(method("GET"))
        .and(path("/folders/root"))
        .respond_with(
            ResponseTemplate::new(500)
                .set_body_string("<html><body><h1>Server Error (500)</h1></body></html>"),
        )
        .mount(&server)
        .await;

    let error = gateway.list_root_folders().await.unwrap_err();

    match error {
        GatewayError::UnexpectedPayload(excerpt) => {
            assert!(excerpt.contains("<html>"));
        }
        other => panic!("expected UnexpectedPayload, got {other:?}"),
    }
}

#[tokio::test]
async fn test_success_status_with_malformed_body_is_unexpected_payload() {
    let (server, gateway) = common::setup_gateway().await;
    Mock::given(method("GET"))
        .and(path("/folders/root"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json at all"))
        .mount(&server)
        .await;

    let error = gateway.list_root_folders().await.unwrap_err();

    assert!(matches!(error, GatewayError::UnexpectedPayload(_)));
}

#[tokio::test]
async fn test_unreachable_server_is_transport_failure() {
    let (server, gateway) = common::setup_gateway().await;
    // Shutting the server down leaves nothing listening on its port
    drop(server);

    let error = gateway.delete_file(&DocumentId::new(31)).await.unwrap_err();

    assert!(matches!(error, GatewayError::Transport(_)));
}
