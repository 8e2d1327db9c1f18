//! Navigation path and breadcrumb entries
//!
//! The path is the ordered ancestor chain from the root to the folder
//! currently displayed. An empty path means the root level, which has no
//! entry of its own. Entries come in two kinds: a real entry carries a
//! server folder id and can be listed; a synthetic entry was reconstructed
//! from a search hit's location string and is display-only.
//!
//! ## Design Notes
//!
//! - The two entry kinds are a tagged enum so callers must branch on
//!   loadability instead of testing an id for a magic prefix.
//! - All mutators are total: truncating past the end is a no-op, emptying
//!   an empty path is a no-op.
//! - `NavToken` snapshots the position a listing fetch was issued for, so a
//!   late response can be discarded once the user has moved elsewhere.

use serde::{Deserialize, Serialize};

use super::newtypes::{FolderId, SyntheticId};

// ============================================================================
// PathEntry
// ============================================================================

/// One breadcrumb entry in the navigation path
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PathEntry {
    /// A folder known to the server; its contents can be listed
    Real {
        /// Server folder id
        id: FolderId,
        /// Display name
        name: String,
    },
    /// An ancestor reconstructed from a location string; display-only
    Synthetic {
        /// Locally generated stub id
        id: SyntheticId,
        /// Display name taken from the location segment
        name: String,
    },
}

impl PathEntry {
    /// Creates a real entry for a server folder
    #[must_use]
    pub fn real(id: FolderId, name: impl Into<String>) -> Self {
        PathEntry::Real {
            id,
            name: name.into(),
        }
    }

    /// Creates a synthetic entry with a freshly generated stub id
    #[must_use]
    pub fn synthetic(name: impl Into<String>) -> Self {
        PathEntry::Synthetic {
            id: SyntheticId::new(),
            name: name.into(),
        }
    }

    /// Returns the display name
    pub fn name(&self) -> &str {
        match self {
            PathEntry::Real { name, .. } | PathEntry::Synthetic { name, .. } => name,
        }
    }

    /// Returns the server folder id when the entry is real
    pub fn folder_id(&self) -> Option<FolderId> {
        match self {
            PathEntry::Real { id, .. } => Some(*id),
            PathEntry::Synthetic { .. } => None,
        }
    }

    /// Returns true for search-reconstructed, display-only entries
    pub fn is_synthetic(&self) -> bool {
        matches!(self, PathEntry::Synthetic { .. })
    }

    /// Replaces the display name in place
    pub fn set_name(&mut self, new_name: impl Into<String>) {
        match self {
            PathEntry::Real { name, .. } | PathEntry::Synthetic { name, .. } => {
                *name = new_name.into();
            }
        }
    }
}

// ============================================================================
// BreadcrumbTarget
// ============================================================================

/// Where a breadcrumb jump lands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreadcrumbTarget {
    /// Empty the path and return to the root level
    Root,
    /// Truncate the path to the prefix ending at this zero-based index
    Entry(usize),
}

// ============================================================================
// NavigationPath
// ============================================================================

/// Ordered ancestor chain from root to the displayed folder
///
/// Empty means the root level. The chain never skips a generation: each
/// entry was either opened from its predecessor's listing or reconstructed
/// as a contiguous location string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationPath {
    entries: Vec<PathEntry>,
}

impl NavigationPath {
    /// Creates an empty path (root level)
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a path from pre-assembled entries
    #[must_use]
    pub fn from_entries(entries: Vec<PathEntry>) -> Self {
        Self { entries }
    }

    /// Rebuilds the single-entry path a persisted folder id allows
    ///
    /// Only the deepest folder id survives persistence, so the restored
    /// entry has no ancestor trail and its label falls back to the id's
    /// string form until the user navigates again.
    #[must_use]
    pub fn restored(folder: FolderId) -> Self {
        Self {
            entries: vec![PathEntry::real(folder, folder.to_string())],
        }
    }

    /// Appends an entry at the end of the path
    pub fn push(&mut self, entry: PathEntry) {
        self.entries.push(entry);
    }

    /// Truncates the path according to the jump target
    ///
    /// `Entry(i)` keeps the prefix of length `i + 1`; an index at or past
    /// the end leaves the path unchanged. `Root` empties the path.
    pub fn jump(&mut self, target: BreadcrumbTarget) {
        match target {
            BreadcrumbTarget::Root => self.entries.clear(),
            BreadcrumbTarget::Entry(index) => {
                if index < self.entries.len() {
                    self.entries.truncate(index + 1);
                }
            }
        }
    }

    /// Atomically replaces the whole path
    pub fn replace(&mut self, entries: Vec<PathEntry>) {
        self.entries = entries;
    }

    /// Returns the entry currently displayed, or `None` at root
    pub fn current(&self) -> Option<&PathEntry> {
        self.entries.last()
    }

    /// Returns all entries in root-to-leaf order
    pub fn entries(&self) -> &[PathEntry] {
        &self.entries
    }

    /// Returns the number of entries
    pub fn depth(&self) -> usize {
        self.entries.len()
    }

    /// Returns true at the root level
    pub fn is_at_root(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the id worth persisting for this path
    ///
    /// Only a real tail entry has a persistable id; a synthetic tail (or
    /// the root) persists nothing.
    pub fn persistable_id(&self) -> Option<FolderId> {
        self.current().and_then(PathEntry::folder_id)
    }

    /// Snapshots the position for a listing fetch issued now
    #[must_use]
    pub fn token(&self) -> NavToken {
        NavToken {
            depth: self.depth(),
            folder: self.persistable_id(),
        }
    }
}

// ============================================================================
// NavToken
// ============================================================================

/// Position snapshot carried by an in-flight listing fetch
///
/// A response is applied only while the path still matches the token it was
/// issued for; otherwise the response is stale and dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavToken {
    /// Path depth at issue time
    pub depth: usize,
    /// Real folder id at the tail, if any
    pub folder: Option<FolderId>,
}

impl NavToken {
    /// Returns true if the path is still at the position the token captured
    pub fn matches(&self, path: &NavigationPath) -> bool {
        self.depth == path.depth() && self.folder == path.persistable_id()
    }
}

// ============================================================================
// Tests
// ============================================================================
