//! Folder domain entity
//!
//! A folder is a node in the server-side document tree. Its category
//! (`FolderType`) is fixed at creation: chosen explicitly when the folder is
//! created at the root level, inherited from the parent otherwise. The parent
//! chain is a finite tree rooted at `parent = None`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::errors::DomainError;
use super::newtypes::{FolderId, UserId};

// ============================================================================
// FolderType
// ============================================================================

/// Category of a folder, fixed at creation
///
/// The category determines visibility/ownership semantics enforced
/// server-side; the client only decides which categories a role may pick
/// when creating a folder at the root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FolderType {
    /// Visible to every member of the club
    Public,
    /// Shared among the coaching staff
    Coaches,
    /// Private to administrators
    AdminPrivate,
    /// A coach's personal working folder
    CoachPersonal,
    /// Shared with a coach's players
    Players,
}

impl FolderType {
    /// Returns the wire label for this folder type
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            FolderType::Public => "public",
            FolderType::Coaches => "coaches",
            FolderType::AdminPrivate => "admin_private",
            FolderType::CoachPersonal => "coach_personal",
            FolderType::Players => "players",
        }
    }
}

impl std::fmt::Display for FolderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for FolderType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "public" => Ok(FolderType::Public),
            "coaches" => Ok(FolderType::Coaches),
            "admin_private" => Ok(FolderType::AdminPrivate),
            "coach_personal" => Ok(FolderType::CoachPersonal),
            "players" => Ok(FolderType::Players),
            other => Err(DomainError::UnknownFolderType(other.to_string())),
        }
    }
}

// ============================================================================
// Folder
// ============================================================================

/// A folder in the remote document tree
///
/// Folders are reconstituted from gateway responses; the only client-side
/// mutation is the optimistic label update performed by the rename
/// coordinator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Folder {
    /// Server row id
    id: FolderId,
    /// Display name
    name: String,
    /// Free-form description
    description: String,
    /// Owning user, if any
    owner: Option<UserId>,
    /// Parent folder; `None` means the folder sits at the root level
    parent: Option<FolderId>,
    /// Category fixed at creation
    folder_type: FolderType,
    /// Number of direct subfolders
    subfolder_count: u64,
    /// Number of documents directly inside
    document_count: u64,
    /// Creation timestamp
    created_at: DateTime<Utc>,
}

impl Folder {
    /// Creates a folder with the identity fields; counts default to zero
    pub fn new(
        id: FolderId,
        name: impl Into<String>,
        folder_type: FolderType,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: String::new(),
            owner: None,
            parent: None,
            folder_type,
            subfolder_count: 0,
            document_count: 0,
            created_at,
        }
    }

    /// Sets the description (builder style)
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the owning user (builder style)
    #[must_use]
    pub fn with_owner(mut self, owner: UserId) -> Self {
        self.owner = Some(owner);
        self
    }

    /// Sets the parent folder (builder style)
    #[must_use]
    pub fn with_parent(mut self, parent: FolderId) -> Self {
        self.parent = Some(parent);
        self
    }

    /// Sets the subfolder/document counts (builder style)
    #[must_use]
    pub fn with_counts(mut self, subfolders: u64, documents: u64) -> Self {
        self.subfolder_count = subfolders;
        self.document_count = documents;
        self
    }

    // --- Getters ---

    /// Returns the folder's server id
    pub fn id(&self) -> FolderId {
        self.id
    }

    /// Returns the display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the description
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the owning user, if any
    pub fn owner(&self) -> Option<UserId> {
        self.owner
    }

    /// Returns the parent folder id; `None` means root level
    pub fn parent(&self) -> Option<FolderId> {
        self.parent
    }

    /// Returns the folder category
    pub fn folder_type(&self) -> FolderType {
        self.folder_type
    }

    /// Returns the number of direct subfolders
    pub fn subfolder_count(&self) -> u64 {
        self.subfolder_count
    }

    /// Returns the number of documents directly inside
    pub fn document_count(&self) -> u64 {
        self.document_count
    }

    /// Returns the creation timestamp
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns true if the folder sits at the root level
    pub fn is_root_level(&self) -> bool {
        self.parent.is_none()
    }

    // --- Mutators ---

    /// Replaces the display name (optimistic rename path)
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_folder() -> Folder {
        Folder::new(
            FolderId::new(10),
            "Tactics",
            FolderType::Coaches,
            Utc::now(),
        )
        .with_description("Match preparation material")
        .with_owner(UserId::new(3))
        .with_counts(2, 5)
    }

    mod folder_type_tests {
        use super::*;

        #[test]
        fn test_wire_labels() {
            assert_eq!(FolderType::Public.as_str(), "public");
            assert_eq!(FolderType::AdminPrivate.as_str(), "admin_private");
            assert_eq!(FolderType::CoachPersonal.as_str(), "coach_personal");
        }

        #[test]
        fn test_from_str_roundtrip() {
            for label in ["public", "coaches", "admin_private", "coach_personal", "players"] {
                let parsed: FolderType = label.parse().unwrap();
                assert_eq!(parsed.as_str(), label);
            }
        }

        #[test]
        fn test_from_str_unknown_fails() {
            let result: Result<FolderType, _> = "secret".parse();
            assert!(result.is_err());
        }

        #[test]
        fn test_serde_snake_case() {
            let json = serde_json::to_string(&FolderType::CoachPersonal).unwrap();
            assert_eq!(json, "\"coach_personal\"");
            let parsed: FolderType = serde_json::from_str("\"players\"").unwrap();
            assert_eq!(parsed, FolderType::Players);
        }
    }

    mod folder_tests {
        use super::*;

        #[test]
        fn test_new_defaults() {
            let folder = Folder::new(
                FolderId::new(1),
                "Drills",
                FolderType::Public,
                Utc::now(),
            );
            assert_eq!(folder.name(), "Drills");
            assert!(folder.description().is_empty());
            assert!(folder.owner().is_none());
            assert!(folder.is_root_level());
            assert_eq!(folder.subfolder_count(), 0);
            assert_eq!(folder.document_count(), 0);
        }

        #[test]
        fn test_builder_fields() {
            let folder = sample_folder();
            assert_eq!(folder.description(), "Match preparation material");
            assert_eq!(folder.owner(), Some(UserId::new(3)));
            assert_eq!(folder.subfolder_count(), 2);
            assert_eq!(folder.document_count(), 5);
        }

        #[test]
        fn test_with_parent_not_root_level() {
            let folder = sample_folder().with_parent(FolderId::new(1));
            assert!(!folder.is_root_level());
            assert_eq!(folder.parent(), Some(FolderId::new(1)));
        }

        #[test]
        fn test_set_name() {
            let mut folder = sample_folder();
            folder.set_name("Set Pieces");
            assert_eq!(folder.name(), "Set Pieces");
        }

        #[test]
        fn test_serde_roundtrip() {
            let folder = sample_folder().with_parent(FolderId::new(1));
            let json = serde_json::to_string(&folder).unwrap();
            let parsed: Folder = serde_json::from_str(&json).unwrap();
            assert_eq!(folder, parsed);
        }
    }
}
