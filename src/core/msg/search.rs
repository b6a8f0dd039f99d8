use crossterm::event::KeyEvent;
use serde::{Deserialize, Serialize};

use crate::domain::{search::Passage, RequestToken};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SearchMsg {
    StartQueryEdit,
    StopQueryEdit,
    QueryKey(KeyEvent),
    /// Copy the next popular query into the input.
    CyclePopular,
    /// Validated trigger; issues a token and enters the pending state.
    Submit,
    /// Oracle completion. Deposited only when `token` matches the request
    /// currently in flight; anything else is stale and discarded.
    ResultsReady {
        token: RequestToken,
        query: String,
        passages: Vec<Passage>,
    },
    ScrollUp,
    ScrollDown,
}
