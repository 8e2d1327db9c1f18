//! Integration tests for the search endpoint
//!
//! Verifies query encoding and the mapping of tagged result rows onto
//! [`SearchHit`] values.

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

use clubdocs_core::domain::newtypes::{DocumentId, FolderId};
use clubdocs_core::domain::search::SearchHit;
use clubdocs_core::ports::IDocumentGateway;

use crate::common;

#[tokio::test]
async fn test_search_sends_query_and_maps_hits() {
    let (server, gateway) = common::setup_gateway().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "jersey"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [
                { "type": "folder", "id": 9, "name": "Jerseys", "location": "Equipment > Jerseys" },
                { "type": "document", "id": 31, "title": "Jersey order", "folder": 9, "location": "Equipment > Jerseys" }
            ]
        })))
        .mount(&server)
        .await;

    let hits = gateway.search_documents("jersey").await.expect("search failed");

    assert_eq!(hits.len(), 2);
    assert_eq!(
        hits[0],
        SearchHit::Folder {
            id: FolderId::new(9),
            name: "Jerseys".to_string(),
            location: "Equipment > Jerseys".to_string(),
        }
    );
    match &hits[1] {
        SearchHit::Document { id, folder, .. } => {
            assert_eq!(*id, DocumentId::new(31));
            assert_eq!(*folder, FolderId::new(9));
        }
        other => panic!("expected a document hit, got {other:?}"),
    }
}

#[tokio::test]
async fn test_search_query_with_spaces_is_encoded() {
    let (server, gateway) = common::setup_gateway().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "summer training plan"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "results": [] })))
        .mount(&server)
        .await;

    let hits = gateway
        .search_documents("summer training plan")
        .await
        .expect("search failed");

    assert!(hits.is_empty());
}

#[tokio::test]
async fn test_search_with_no_matches_returns_empty() {
    let (server, gateway) = common::setup_gateway().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "results": [] })))
        .mount(&server)
        .await;

    let hits = gateway.search_documents("zz").await.expect("search failed");

    assert!(hits.is_empty());
}
