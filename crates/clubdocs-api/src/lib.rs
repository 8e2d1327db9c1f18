//! ClubDocs API - HTTP gateway for the club platform
//!
//! Implements the document gateway port over the platform's REST endpoints:
//! listings, search, folder creation, uploads, copy, rename, and delete.
//!
//! ## Modules
//!
//! - [`client`] - HTTP plumbing: endpoint construction, bearer auth, and the
//!   interpretation of error bodies into typed gateway errors
//! - [`gateway`] - [`HttpDocumentGateway`], the `IDocumentGateway`
//!   implementation the browser and CLI run against

pub mod client;
pub mod gateway;

pub use client::ApiClient;
pub use gateway::HttpDocumentGateway;
