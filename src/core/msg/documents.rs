use crossterm::event::KeyEvent;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentsMsg {
    ScrollUp,
    ScrollDown,
    ScrollToTop,
    ScrollToBottom,
    StartFilterEdit,
    StopFilterEdit,
    /// Keystroke routed into the filter box while it has focus; the list is
    /// re-filtered on every one of these.
    FilterKey(KeyEvent),
    CycleCategory,
    /// Role-gated; coordinated in the top-level update because it also
    /// appends to the audit trail.
    DeleteSelected,
}
