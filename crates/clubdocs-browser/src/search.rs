//! Search coordination and path reconstruction
//!
//! Search returns flat hits whose `location` string carries the item's
//! ancestry (`"Coaches > Jane Doe > Players"`). [`reconstruct_path`] turns
//! that string into a navigable breadcrumb trail without any extra round
//! trips: every ancestor becomes a synthetic entry, the hit target itself
//! becomes the real tail entry carrying its true server id.

use std::sync::Arc;

use clubdocs_core::domain::{split_location, PathEntry, SearchHit};
use clubdocs_core::ports::{GatewayError, IDocumentGateway, MIN_SEARCH_QUERY_LEN};
use thiserror::Error;
use tracing::debug;

/// Why a search did not produce hits.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The query is shorter than the service accepts. Raised locally,
    /// before any network traffic.
    #[error("search query must be at least {} characters", MIN_SEARCH_QUERY_LEN)]
    QueryTooShort,

    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

/// Validates queries and runs them through the gateway.
pub struct SearchCoordinator {
    gateway: Arc<dyn IDocumentGateway>,
}

impl SearchCoordinator {
    pub fn new(gateway: Arc<dyn IDocumentGateway>) -> Self {
        Self { gateway }
    }

    /// Runs a search. The query is trimmed first; anything shorter than
    /// [`MIN_SEARCH_QUERY_LEN`] is rejected without reaching the gateway.
    pub async fn search(&self, query: &str) -> Result<Vec<SearchHit>, SearchError> {
        let query = query.trim();
        if query.chars().count() < MIN_SEARCH_QUERY_LEN {
            return Err(SearchError::QueryTooShort);
        }

        debug!(query, "searching documents");
        let hits = self.gateway.search_documents(query).await?;
        debug!(hits = hits.len(), "search finished");
        Ok(hits)
    }
}

/// Builds the breadcrumb path for a chosen search hit.
///
/// Every segment of the hit's location except the last becomes a synthetic
/// entry named by the segment text. The last segment becomes a real entry
/// carrying the hit's target folder id (the folder itself, or the
/// document's containing folder).
///
/// A hit without a location is a root-level item: a folder hit degenerates
/// to a single-entry path for that folder, a document hit to the root
/// itself (empty path).
pub fn reconstruct_path(hit: &SearchHit) -> Vec<PathEntry> {
    let segments = split_location(hit.location());
    match segments.split_last() {
        None => match hit {
            SearchHit::Folder { id, name, .. } => vec![PathEntry::real(*id, name.clone())],
            SearchHit::Document { .. } => Vec::new(),
        },
        Some((target, ancestors)) => {
            let mut entries: Vec<PathEntry> = ancestors
                .iter()
                .map(|segment| PathEntry::synthetic(*segment))
                .collect();
            entries.push(PathEntry::real(hit.target_folder(), *target));
            entries
        }
    }
}
