//! Folder creation planning
//!
//! Combines the permission resolver with the current navigation location
//! to shape a valid [`CreateFolderRequest`], or refuse with a typed error
//! before anything reaches the gateway. At the root the caller must pick a
//! folder type from the ones their role offers; inside a folder the type
//! is inherited by the service and must not be sent.

use clubdocs_core::domain::{FolderType, PathEntry, Role};
use clubdocs_core::ports::{CreateFolderRequest, GatewayError};
use thiserror::Error;

use crate::permissions::creatable_folder_types;

/// Why a folder cannot be created as asked.
#[derive(Debug, Error)]
pub enum CreateFolderError {
    #[error("folder name cannot be empty")]
    EmptyName,

    /// The role offers no folder types at the root, so root creation is
    /// not available at all.
    #[error("your role may not create folders at the root")]
    RootCreationNotPermitted,

    /// Creating at the root requires picking one of the offered types.
    #[error("a folder type is required when creating at the root")]
    TypeRequired,

    #[error("folder type '{0}' is not available to your role at the root")]
    TypeNotAllowed(FolderType),

    /// Inside a folder the type is inherited; passing one is a caller bug.
    #[error("folders created inside another folder inherit its type")]
    TypeNotChoosable,

    /// The current location is a search-reconstructed entry with no real
    /// folder id to use as the parent.
    #[error("this location has no real folder id; open the folder before creating")]
    SyntheticParent,

    /// The service rejected the create request.
    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

/// Shapes the create request for the current location.
///
/// `parent` is the current path entry (`None` at the root). Root requests
/// carry the explicitly chosen `folder_type`; nested requests carry the
/// parent id and no type.
pub fn plan_folder_creation(
    role: Role,
    parent: Option<&PathEntry>,
    name: &str,
    description: &str,
    requested_type: Option<FolderType>,
) -> Result<CreateFolderRequest, CreateFolderError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(CreateFolderError::EmptyName);
    }

    match parent {
        None => {
            let offered = creatable_folder_types(role, true);
            if offered.is_empty() {
                return Err(CreateFolderError::RootCreationNotPermitted);
            }
            let folder_type = requested_type.ok_or(CreateFolderError::TypeRequired)?;
            if !offered.contains(&folder_type) {
                return Err(CreateFolderError::TypeNotAllowed(folder_type));
            }
            Ok(CreateFolderRequest {
                name: name.to_string(),
                description: description.trim().to_string(),
                parent: None,
                folder_type: Some(folder_type),
            })
        }
        Some(entry) => {
            let parent_id = entry
                .folder_id()
                .ok_or(CreateFolderError::SyntheticParent)?;
            if requested_type.is_some() {
                return Err(CreateFolderError::TypeNotChoosable);
            }
            Ok(CreateFolderRequest {
                name: name.to_string(),
                description: description.trim().to_string(),
                parent: Some(parent_id),
                folder_type: None,
            })
        }
    }
}
