use chrono::NaiveDateTime;
use crossterm::event::KeyEvent;
use serde::{Deserialize, Serialize};

/// Raw events from the terminal runtime, before domain translation.
///
/// The runner stamps `Tick` with the wall clock at the event-loop edge;
/// everything downstream of the translator is pure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RawMsg {
    Tick(NaiveDateTime),
    Key(KeyEvent),
    Paste(String),
    Resize(u16, u16),
    Quit,
    Suspend,
    Resume,
    Error(String),
}
