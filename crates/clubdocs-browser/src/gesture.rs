//! Long-press gesture detection
//!
//! Touch input opens the context menu by holding a press on an entry.
//! The detector arms a single delayed action at press start and cancels it
//! if the press ends or moves before the threshold elapses:
//!
//! ```text
//! Idle ──press_started──→ Pressing ──threshold elapsed──→ menu request sent
//!                            │
//!                  press_ended / press_moved
//!                            ↓
//!                          Idle
//! ```
//!
//! Fired requests are delivered on an mpsc channel owned by the view, so
//! the detector never blocks input handling.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::trace;

use crate::listing::EntryRef;

/// Ask the view to open the context menu for an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContextMenuRequest {
    pub entry: EntryRef,
}

struct ArmedPress {
    entry: EntryRef,
    timer: JoinHandle<()>,
}

/// Turns held presses into [`ContextMenuRequest`]s.
///
/// At most one press is tracked at a time; a new press replaces the armed
/// timer of the previous one. Must be driven from within a tokio runtime.
pub struct LongPressDetector {
    threshold: Duration,
    menu: mpsc::Sender<ContextMenuRequest>,
    armed: Option<ArmedPress>,
}

impl LongPressDetector {
    /// Press duration after which the menu opens, unless configured.
    pub const DEFAULT_THRESHOLD: Duration = Duration::from_millis(500);

    pub fn new(threshold: Duration, menu: mpsc::Sender<ContextMenuRequest>) -> Self {
        Self {
            threshold,
            menu,
            armed: None,
        }
    }

    /// A press landed on `entry`: arm the timer.
    pub fn press_started(&mut self, entry: EntryRef) {
        self.disarm();
        trace!(%entry, "press started, arming long-press timer");

        let menu = self.menu.clone();
        let threshold = self.threshold;
        let timer = tokio::spawn(async move {
            tokio::time::sleep(threshold).await;
            // A closed receiver just means no view is listening anymore.
            let _ = menu.send(ContextMenuRequest { entry }).await;
        });
        self.armed = Some(ArmedPress { entry, timer });
    }

    /// The press lifted. Cancels the timer if it has not fired yet.
    pub fn press_ended(&mut self) {
        self.disarm();
    }

    /// The press moved off its start point; a drag is not a long press.
    pub fn press_moved(&mut self) {
        self.disarm();
    }

    /// Entry currently being pressed, if any.
    pub fn pressed_entry(&self) -> Option<EntryRef> {
        self.armed.as_ref().map(|armed| armed.entry)
    }

    fn disarm(&mut self) {
        if let Some(armed) = self.armed.take() {
            trace!(entry = %armed.entry, "disarming long-press timer");
            armed.timer.abort();
        }
    }
}

impl Drop for LongPressDetector {
    fn drop(&mut self) {
        self.disarm();
    }
}
