//! Domain newtypes with validation
//!
//! This module provides strongly-typed wrappers for domain identifiers.
//! Server-assigned ids (`FolderId`, `DocumentId`, `UserId`) wrap the numeric
//! row id the gateway returns; `SyntheticId` wraps a locally generated UUID
//! used for breadcrumb entries reconstructed from search locations.
//!
//! A synthetic id can never collide with a server id: it lives in a separate
//! type and renders with the reserved `synthetic:` prefix.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::errors::DomainError;

// ============================================================================
// Server-assigned ID types
// ============================================================================

/// Identifier for Folder entities (server row id)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FolderId(i64);

impl FolderId {
    /// Create a FolderId from a raw row id
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the inner i64 value
    #[must_use]
    pub const fn as_i64(&self) -> i64 {
        self.0
    }
}

impl Display for FolderId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for FolderId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i64>()
            .map(Self)
            .map_err(|e| DomainError::InvalidId(format!("Invalid FolderId: {e}")))
    }
}

impl From<i64> for FolderId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// Identifier for Document entities (server row id)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(i64);

impl DocumentId {
    /// Create a DocumentId from a raw row id
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the inner i64 value
    #[must_use]
    pub const fn as_i64(&self) -> i64 {
        self.0
    }
}

impl Display for DocumentId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DocumentId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i64>()
            .map(Self)
            .map_err(|e| DomainError::InvalidId(format!("Invalid DocumentId: {e}")))
    }
}

impl From<i64> for DocumentId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// Identifier for user references (folder owners, document uploaders)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
    /// Create a UserId from a raw row id
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the inner i64 value
    #[must_use]
    pub const fn as_i64(&self) -> i64 {
        self.0
    }
}

impl Display for UserId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for UserId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i64>()
            .map(Self)
            .map_err(|e| DomainError::InvalidId(format!("Invalid UserId: {e}")))
    }
}

impl From<i64> for UserId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

// ============================================================================
// Synthetic (locally generated) ID type
// ============================================================================

/// Reserved prefix for the display form of synthetic ids
pub const SYNTHETIC_ID_PREFIX: &str = "synthetic:";

/// Locally generated stub identifier for path entries that have no server id
///
/// Synthetic ids label breadcrumb entries reconstructed from a search hit's
/// location string. They are unique by construction (random UUID v4) and are
/// distinguishable from server ids both at the type level (`SyntheticId` vs
/// `FolderId`) and in their rendered form (the `synthetic:` prefix).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SyntheticId(Uuid);

impl SyntheticId {
    /// Create a new random SyntheticId
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create a SyntheticId from an existing UUID
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Get the inner UUID value
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for SyntheticId {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for SyntheticId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{SYNTHETIC_ID_PREFIX}{}", self.0)
    }
}

impl FromStr for SyntheticId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.strip_prefix(SYNTHETIC_ID_PREFIX).ok_or_else(|| {
            DomainError::InvalidId(format!("Synthetic id missing '{SYNTHETIC_ID_PREFIX}': {s}"))
        })?;
        Uuid::parse_str(raw)
            .map(Self)
            .map_err(|e| DomainError::InvalidId(format!("Invalid SyntheticId: {e}")))
    }
}

// ============================================================================
// Tests
// ============================================================================
