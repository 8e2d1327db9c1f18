//! Rename/delete coordination for listing entries
//!
//! Renames are optimistic: the displayed label changes immediately, the
//! persistence request runs afterwards, and a rejection rolls the label
//! back to what it was. Deletes are gated by a per-entry capability flag
//! supplied by the caller; the entry leaves the listing only once the
//! service has confirmed the removal.

use std::sync::Arc;

use clubdocs_core::ports::{GatewayError, IDocumentGateway};
use thiserror::Error;
use tracing::{debug, warn};

use crate::listing::{EntryRef, FolderListing};

/// Why a rename did not stick.
#[derive(Debug, Error)]
pub enum RenameError {
    /// The new name is empty after trimming. Checked before the label is
    /// touched.
    #[error("name cannot be empty")]
    EmptyName,

    /// The entry is not part of the current listing.
    #[error("{0} is not in the current listing")]
    UnknownEntry(EntryRef),

    /// The service rejected the rename; the previous label was restored.
    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

/// Why a delete was not performed.
#[derive(Debug, Error)]
pub enum DeleteError {
    /// The caller lacks the delete capability for this entry. Nothing was
    /// sent to the service.
    #[error("you may not delete {0}")]
    NotPermitted(EntryRef),

    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

/// Applies renames and deletes to listing entries through the gateway.
pub struct EntryCoordinator {
    gateway: Arc<dyn IDocumentGateway>,
}

impl EntryCoordinator {
    pub fn new(gateway: Arc<dyn IDocumentGateway>) -> Self {
        Self { gateway }
    }

    /// Renames `entry` to `new_name`.
    ///
    /// The listing label is rewritten before the request is issued so the
    /// view reflects the edit immediately. If the service rejects it, the
    /// previous label is restored and the error returned.
    pub async fn rename(
        &self,
        listing: &mut FolderListing,
        entry: EntryRef,
        new_name: &str,
    ) -> Result<(), RenameError> {
        let name = new_name.trim();
        if name.is_empty() {
            return Err(RenameError::EmptyName);
        }

        let previous = listing
            .set_label(entry, name)
            .ok_or(RenameError::UnknownEntry(entry))?;
        debug!(%entry, from = previous.as_str(), to = name, "renaming entry");

        let outcome = match entry {
            EntryRef::Folder(id) => self.gateway.rename_folder(&id, name).await.map(drop),
            EntryRef::Document(id) => self.gateway.rename_file(&id, name).await.map(drop),
        };

        if let Err(error) = outcome {
            warn!(%entry, error = %error, "rename rejected, restoring previous label");
            listing.set_label(entry, &previous);
            return Err(error.into());
        }
        Ok(())
    }

    /// Deletes `entry`, removing it from the listing once confirmed.
    ///
    /// `can_delete` is the caller-supplied capability for this entry; when
    /// it is false the operation is refused locally.
    pub async fn delete(
        &self,
        listing: &mut FolderListing,
        entry: EntryRef,
        can_delete: bool,
    ) -> Result<(), DeleteError> {
        if !can_delete {
            return Err(DeleteError::NotPermitted(entry));
        }

        match entry {
            EntryRef::Folder(id) => self.gateway.delete_folder(&id).await?,
            EntryRef::Document(id) => self.gateway.delete_file(&id).await?,
        }
        listing.remove(entry);
        debug!(%entry, "entry deleted");
        Ok(())
    }
}
