use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SystemMsg {
    Quit,
    Suspend,
    Resume,
    /// Wall-clock sample taken at the event-loop edge so the pure update
    /// path can stamp audit entries without reading the clock itself.
    ClockTick(NaiveDateTime),
    UpdateStatusMessage(String),
    ClearStatusMessage,
    ShowError(String),
}
