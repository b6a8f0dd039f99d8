use crossterm::event::KeyEvent;
use serde::{Deserialize, Serialize};

use crate::domain::{draft::Citation, RequestToken};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DraftMsg {
    EditClient,
    EditRequirements,
    StopEdit,
    /// Keystroke routed into whichever field has focus.
    InputKey(KeyEvent),
    CycleProjectType,
    /// Validated trigger; also used to regenerate with a fresh token.
    Generate,
    /// Oracle completion, token-checked like search results.
    DraftReady {
        token: RequestToken,
        draft: String,
        citations: Vec<Citation>,
    },
    ScrollUp,
    ScrollDown,
}
