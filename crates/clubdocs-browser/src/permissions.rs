//! Folder-type permission resolver
//!
//! Folder types are chosen only when creating directly at the root; inside
//! an existing folder the type is inherited from the parent and no choice
//! is offered. Which types the root form offers depends on the caller's
//! role. Players get an empty set: root creation is disabled for them
//! outright rather than silently defaulting a type.

use clubdocs_core::domain::{FolderType, Role};

/// Folder types an admin may create at the root.
const ADMIN_ROOT_TYPES: &[FolderType] = &[
    FolderType::Public,
    FolderType::Coaches,
    FolderType::AdminPrivate,
];

/// Folder types a coach may create at the root.
const COACH_ROOT_TYPES: &[FolderType] = &[FolderType::CoachPersonal, FolderType::Players];

/// Returns the folder types `role` may pick when creating a folder.
///
/// Empty means no choice is offered: either the type will be inherited
/// (not at root) or creation is not available to the role (at root).
pub fn creatable_folder_types(role: Role, at_root: bool) -> &'static [FolderType] {
    if !at_root {
        return &[];
    }
    match role {
        Role::Admin => ADMIN_ROOT_TYPES,
        Role::Coach => COACH_ROOT_TYPES,
        Role::Player => &[],
    }
}
