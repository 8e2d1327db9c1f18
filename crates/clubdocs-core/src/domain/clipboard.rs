//! Single-slot copy clipboard
//!
//! Holds at most one document reference. Marking a second document silently
//! replaces the first; it is not a stack. The slot is session-local and
//! never persisted.

use serde::{Deserialize, Serialize};

use super::newtypes::DocumentId;

/// Single-slot holder of the document marked for copy
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clipboard {
    slot: Option<DocumentId>,
}

impl Clipboard {
    /// Creates an empty clipboard
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a document for copy, overwriting any prior content
    pub fn mark(&mut self, document: DocumentId) {
        self.slot = Some(document);
    }

    /// Returns the held document id, if any
    pub fn held(&self) -> Option<DocumentId> {
        self.slot
    }

    /// Returns true when nothing is marked; gates offering a paste action
    pub fn is_empty(&self) -> bool {
        self.slot.is_none()
    }

    /// Empties the slot unconditionally
    pub fn clear(&mut self) {
        self.slot = None;
    }

    /// Empties the slot only if it still holds `document`
    ///
    /// A paste captures its document id at invocation; when it settles, the
    /// slot may already hold a different mark, which must survive.
    pub fn clear_if_holds(&mut self, document: DocumentId) {
        if self.slot == Some(document) {
            self.slot = None;
        }
    }
}
