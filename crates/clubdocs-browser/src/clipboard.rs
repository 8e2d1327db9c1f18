//! Clipboard copy coordinator
//!
//! Drives the single-slot cross-folder copy workflow: mark a document,
//! navigate somewhere else, paste. The destination is the current folder,
//! or the user's personal folder when pasting at the root.
//!
//! A paste captures the marked document id at invocation time. Marking a
//! different document while a paste is in flight only changes what a later
//! paste acts on; on settlement the slot is cleared only if it still holds
//! the id that was pasted.

use std::sync::Arc;

use clubdocs_core::domain::{Clipboard, Document, FolderId, PathEntry};
use clubdocs_core::ports::{GatewayError, IDocumentGateway};
use thiserror::Error;
use tracing::{debug, warn};

/// Why a paste could not be performed.
#[derive(Debug, Error)]
pub enum PasteError {
    /// The clipboard is empty; nothing was marked for copy.
    #[error("nothing is marked for copy")]
    NothingMarked,

    /// The current location came from a search reconstruction and has no
    /// real folder id to paste into.
    #[error("this location has no real folder id; open the folder before pasting")]
    SyntheticDestination,

    /// Pasting at the root falls back to the personal folder, and the
    /// service reported none for this user.
    #[error("no personal folder available to receive the paste")]
    NoPersonalFolder,

    /// The copy request itself failed. The clipboard keeps its mark so the
    /// paste can be retried.
    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

/// Coordinates copy-marking and pasting against the gateway.
pub struct CopyCoordinator {
    gateway: Arc<dyn IDocumentGateway>,
}

impl CopyCoordinator {
    pub fn new(gateway: Arc<dyn IDocumentGateway>) -> Self {
        Self { gateway }
    }

    /// Marks `document` for a later paste, replacing any previous mark.
    pub fn mark_for_copy(&self, clipboard: &mut Clipboard, document: &Document) {
        debug!(document = %document.id(), title = document.title(), "marked for copy");
        clipboard.mark(document.id());
    }

    /// Copies the marked document into the current location.
    ///
    /// Destination resolution: the current folder's real id, or the
    /// personal folder when at the root. On success the slot is cleared
    /// (unless a different document was marked meanwhile); on failure the
    /// mark is kept so the user may retry.
    pub async fn paste(
        &self,
        clipboard: &mut Clipboard,
        current_folder: Option<&PathEntry>,
        personal_folder: Option<FolderId>,
    ) -> Result<Document, PasteError> {
        let document = clipboard.held().ok_or(PasteError::NothingMarked)?;
        let destination = match current_folder {
            Some(entry) => entry.folder_id().ok_or(PasteError::SyntheticDestination)?,
            None => personal_folder.ok_or(PasteError::NoPersonalFolder)?,
        };

        debug!(%document, %destination, "pasting marked document");
        match self.gateway.copy_file(&document, &destination).await {
            Ok(copy) => {
                clipboard.clear_if_holds(document);
                Ok(copy)
            }
            Err(error) => {
                warn!(%document, %destination, error = %error, "paste failed, keeping mark");
                Err(PasteError::Gateway(error))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use clubdocs_core::domain::{DocumentId, DocumentStatus};
    use clubdocs_core::ports::ErrorCode;

    use crate::mocks::{sample_document, MockGateway};

    use super::*;

    fn coordinator() -> (CopyCoordinator, Arc<MockGateway>) {
        let gateway = Arc::new(MockGateway::new());
        (CopyCoordinator::new(gateway.clone()), gateway)
    }

    fn in_folder(id: i64) -> PathEntry {
        PathEntry::real(FolderId::new(id), format!("Folder {id}"))
    }

    mod marking_tests {
        use super::*;

        #[test]
        fn second_mark_replaces_the_first() {
            let (copier, _) = coordinator();
            let mut clipboard = Clipboard::new();

            copier.mark_for_copy(&mut clipboard, &sample_document(1, "First.pdf", 4));
            copier.mark_for_copy(&mut clipboard, &sample_document(2, "Second.pdf", 4));

            assert_eq!(clipboard.held(), Some(DocumentId::new(2)));
        }
    }

    mod paste_tests {
        use super::*;

        #[tokio::test]
        async fn successful_paste_clears_the_slot() {
            let (copier, gateway) = coordinator();
            let mut clipboard = Clipboard::new();
            copier.mark_for_copy(&mut clipboard, &sample_document(10, "Drill.pdf", 4));

            let entry = in_folder(5);
            let copy = copier
                .paste(&mut clipboard, Some(&entry), None)
                .await
                .unwrap();

            assert_eq!(copy.status(), DocumentStatus::Copy);
            assert!(clipboard.is_empty());
            assert_eq!(gateway.calls(), vec!["copy:10->5".to_string()]);
        }

        #[tokio::test]
        async fn failed_paste_keeps_the_mark_for_retry() {
            let (copier, gateway) = coordinator();
            let mut clipboard = Clipboard::new();
            copier.mark_for_copy(&mut clipboard, &sample_document(10, "Drill.pdf", 4));
            gateway.fail_next(GatewayError::Rejected {
                code: ErrorCode::DuplicateName,
                message: "already there".into(),
            });

            let entry = in_folder(5);
            let err = copier
                .paste(&mut clipboard, Some(&entry), None)
                .await
                .unwrap_err();

            assert!(matches!(err, PasteError::Gateway(_)));
            assert_eq!(clipboard.held(), Some(DocumentId::new(10)));
        }

        #[tokio::test]
        async fn paste_at_root_lands_in_the_personal_folder() {
            let (copier, gateway) = coordinator();
            let mut clipboard = Clipboard::new();
            copier.mark_for_copy(&mut clipboard, &sample_document(10, "Drill.pdf", 4));

            copier
                .paste(&mut clipboard, None, Some(FolderId::new(77)))
                .await
                .unwrap();

            assert_eq!(gateway.calls(), vec!["copy:10->77".to_string()]);
        }

        #[tokio::test]
        async fn paste_at_root_without_personal_folder_is_refused() {
            let (copier, gateway) = coordinator();
            let mut clipboard = Clipboard::new();
            copier.mark_for_copy(&mut clipboard, &sample_document(10, "Drill.pdf", 4));

            let err = copier.paste(&mut clipboard, None, None).await.unwrap_err();

            assert!(matches!(err, PasteError::NoPersonalFolder));
            assert!(gateway.calls().is_empty());
            assert!(!clipboard.is_empty());
        }

        #[tokio::test]
        async fn paste_into_synthetic_location_is_refused() {
            let (copier, gateway) = coordinator();
            let mut clipboard = Clipboard::new();
            copier.mark_for_copy(&mut clipboard, &sample_document(10, "Drill.pdf", 4));

            let entry = PathEntry::synthetic("Jane Doe");
            let err = copier
                .paste(&mut clipboard, Some(&entry), None)
                .await
                .unwrap_err();

            assert!(matches!(err, PasteError::SyntheticDestination));
            assert!(gateway.calls().is_empty());
        }

        #[tokio::test]
        async fn paste_with_empty_clipboard_is_refused() {
            let (copier, gateway) = coordinator();
            let mut clipboard = Clipboard::new();

            let entry = in_folder(5);
            let err = copier
                .paste(&mut clipboard, Some(&entry), None)
                .await
                .unwrap_err();

            assert!(matches!(err, PasteError::NothingMarked));
            assert!(gateway.calls().is_empty());
        }
    }
}
