use serde::{Deserialize, Serialize};

use crate::core::state::shell::Panel;
use crate::domain::Role;

/// Messages owned by the page shell: tab selection and the active role.
/// Panels never mutate either; they receive both read-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShellMsg {
    SelectPanel(Panel),
    NextPanel,
    PreviousPanel,
    SetRole(Role),
    CycleRole,
}
