use crossterm::event::KeyEvent;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApprovalMsg {
    PreviousRfp,
    NextRfp,
    /// Decide the first stage actionable by the active role.
    Approve,
    Reject,
    StartCommentEdit,
    StopCommentEdit,
    CommentKey(KeyEvent),
    SubmitComment,
}
