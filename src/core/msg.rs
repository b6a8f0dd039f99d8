use serde::{Deserialize, Serialize};

pub mod approval;
pub mod audit;
pub mod documents;
pub mod draft;
pub mod search;
pub mod shell;
pub mod system;

use approval::ApprovalMsg;
use audit::AuditMsg;
use documents::DocumentsMsg;
use draft::DraftMsg;
use search::SearchMsg;
use shell::ShellMsg;
use system::SystemMsg;

/// Domain messages representing application intent.
///
/// Grouped by the state slice they touch; cross-slice operations (audit
/// trail appends, token issue) are coordinated in [`crate::core::update`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Msg {
    Shell(ShellMsg),
    Documents(DocumentsMsg),
    Search(SearchMsg),
    Draft(DraftMsg),
    Approval(ApprovalMsg),
    Audit(AuditMsg),
    System(SystemMsg),
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn messages_round_trip_through_serde() {
        let msg = Msg::Shell(ShellMsg::CycleRole);
        let serialized = serde_json::to_string(&msg).expect("serialize");
        let deserialized: Msg = serde_json::from_str(&serialized).expect("deserialize");
        assert_eq!(msg, deserialized);
    }
}
