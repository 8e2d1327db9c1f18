//! Port definitions (hexagonal architecture interfaces)
//!
//! This module defines the port traits that form the boundaries of the
//! hexagonal architecture. Ports are interfaces that the domain core
//! depends on, but whose implementations live in adapter crates.
//!
//! ## Ports Overview
//!
//! - [`IDocumentGateway`] - Remote document platform operations (listing,
//!   search, folder/file mutations)
//! - [`ILocationStore`] - Persistence for the last opened folder, used to
//!   restore the browsing session

pub mod document_gateway;
pub mod location_store;

pub use document_gateway::{
    CreateFolderRequest, ErrorCode, FolderContents, GatewayError, IDocumentGateway, RootListing,
    UploadRequest, ValidationErrors, MIN_SEARCH_QUERY_LEN,
};
pub use location_store::{ILocationStore, MemoryLocationStore};
