//! Search hits and location strings
//!
//! A search hit arrives flat: the matched folder or document plus a
//! human-readable `location` string naming its ancestors, e.g.
//! `"Coaches > Jane Doe > Players > John Roe"`. The delimiter is
//! multi-character on purpose so folder names containing `/` or `>` alone
//! cannot split wrongly. An empty location means the hit sits at the root
//! level.

use serde::{Deserialize, Serialize};

use super::newtypes::{DocumentId, FolderId};

/// Delimiter between ancestor names in a hit's location string
pub const LOCATION_DELIMITER: &str = " > ";

/// Splits a location string into ordered ancestor names
///
/// Returns an empty list for an empty location (root-level hit).
#[must_use]
pub fn split_location(location: &str) -> Vec<&str> {
    if location.is_empty() {
        return Vec::new();
    }
    location.split(LOCATION_DELIMITER).collect()
}

// ============================================================================
// SearchHit
// ============================================================================

/// One result row from a document search
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SearchHit {
    /// A folder whose name matched the query
    Folder {
        /// Server id of the matched folder
        id: FolderId,
        /// Folder display name
        name: String,
        /// Ancestor names joined with [`LOCATION_DELIMITER`]
        location: String,
    },
    /// A document whose title matched the query
    Document {
        /// Server id of the matched document
        id: DocumentId,
        /// Document display title
        title: String,
        /// Containing folder's server id
        folder: FolderId,
        /// Ancestor names joined with [`LOCATION_DELIMITER`]
        location: String,
    },
}

impl SearchHit {
    /// Returns the label shown in the result list
    pub fn display_name(&self) -> &str {
        match self {
            SearchHit::Folder { name, .. } => name,
            SearchHit::Document { title, .. } => title,
        }
    }

    /// Returns the hit's location string
    pub fn location(&self) -> &str {
        match self {
            SearchHit::Folder { location, .. } | SearchHit::Document { location, .. } => location,
        }
    }

    /// Returns the real folder a jump to this hit lands in
    ///
    /// For a folder hit that is the folder itself; for a document hit it is
    /// the containing folder.
    pub fn target_folder(&self) -> FolderId {
        match self {
            SearchHit::Folder { id, .. } => *id,
            SearchHit::Document { folder, .. } => *folder,
        }
    }

    /// Returns true for folder hits
    pub fn is_folder(&self) -> bool {
        matches!(self, SearchHit::Folder { .. })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    mod split_location_tests {
        use super::*;

        #[test]
        fn test_four_segments() {
            let segments = split_location("Coaches > Jane Doe > Players > John Roe");
            assert_eq!(segments, vec!["Coaches", "Jane Doe", "Players", "John Roe"]);
        }

        #[test]
        fn test_single_segment() {
            assert_eq!(split_location("Public"), vec!["Public"]);
        }

        #[test]
        fn test_empty_location() {
            assert!(split_location("").is_empty());
        }

        #[test]
        fn test_name_containing_slash_survives() {
            let segments = split_location("Drills > Warm-up/Cool-down");
            assert_eq!(segments, vec!["Drills", "Warm-up/Cool-down"]);
        }

        #[test]
        fn test_bare_gt_in_name_survives() {
            // "A>B" lacks the surrounding spaces of the delimiter
            let segments = split_location("Stats > Goals>Assists");
            assert_eq!(segments, vec!["Stats", "Goals>Assists"]);
        }
    }

    mod search_hit_tests {
        use super::*;

        fn folder_hit() -> SearchHit {
            SearchHit::Folder {
                id: FolderId::new(9),
                name: "John Roe".to_string(),
                location: "Coaches > Jane Doe > Players > John Roe".to_string(),
            }
        }

        fn document_hit() -> SearchHit {
            SearchHit::Document {
                id: DocumentId::new(31),
                title: "Jersey order".to_string(),
                folder: FolderId::new(5),
                location: "Public > Kits".to_string(),
            }
        }

        #[test]
        fn test_folder_target_is_itself() {
            assert_eq!(folder_hit().target_folder(), FolderId::new(9));
            assert!(folder_hit().is_folder());
        }

        #[test]
        fn test_document_target_is_containing_folder() {
            assert_eq!(document_hit().target_folder(), FolderId::new(5));
            assert!(!document_hit().is_folder());
        }

        #[test]
        fn test_display_name() {
            assert_eq!(folder_hit().display_name(), "John Roe");
            assert_eq!(document_hit().display_name(), "Jersey order");
        }

        #[test]
        fn test_serde_type_tag() {
            let json = serde_json::to_string(&folder_hit()).unwrap();
            assert!(json.contains("\"type\":\"folder\""));
            let json = serde_json::to_string(&document_hit()).unwrap();
            assert!(json.contains("\"type\":\"document\""));
        }
    }
}
