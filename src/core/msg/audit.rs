use crossterm::event::KeyEvent;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuditMsg {
    ScrollUp,
    ScrollDown,
    ScrollToTop,
    ScrollToBottom,
    StartFilterEdit,
    StopFilterEdit,
    FilterKey(KeyEvent),
    CycleCategory,
}
