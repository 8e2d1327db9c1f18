//! Domain error types
//!
//! This module defines error types specific to domain operations,
//! including id parsing failures and entry-name validation.

use thiserror::Error;

/// Errors that can occur in domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// ID parsing error
    #[error("Invalid ID format: {0}")]
    InvalidId(String),

    /// Entry name is empty or whitespace-only
    #[error("Entry name cannot be empty")]
    EmptyName,

    /// Unknown folder type label
    #[error("Unknown folder type: {0}")]
    UnknownFolderType(String),

    /// Unknown role label
    #[error("Unknown role: {0}")]
    UnknownRole(String),

    /// Generic validation failure
    #[error("Validation failed: {0}")]
    ValidationFailed(String),
}
