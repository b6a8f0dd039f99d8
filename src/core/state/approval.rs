use crate::core::cmd::Cmd;
use crate::core::input::InputState;
use crate::core::msg::approval::ApprovalMsg;
use crate::domain::rfp::Rfp;
use crate::domain::Selection;

/// Approval workflow panel: an RFP list plus the selected RFP's stages and
/// discussion thread.
#[derive(Debug, Clone, Default)]
pub struct ApprovalState {
    pub rfps: Vec<Rfp>,
    pub selection: Selection,
    pub comment: InputState,
    pub editing: bool,
}

impl ApprovalState {
    pub fn with_rfps(rfps: Vec<Rfp>) -> Self {
        let mut selection = Selection::default();
        selection.top(rfps.len());
        Self {
            rfps,
            selection,
            ..Self::default()
        }
    }

    pub fn selected_rfp(&self) -> Option<&Rfp> {
        self.selection.selected().and_then(|index| self.rfps.get(index))
    }

    pub fn selected_rfp_mut(&mut self) -> Option<&mut Rfp> {
        self.selection
            .selected()
            .and_then(|index| self.rfps.get_mut(index))
    }

    pub fn update(&mut self, msg: ApprovalMsg) -> Vec<Cmd> {
        match msg {
            ApprovalMsg::PreviousRfp => {
                let len = self.rfps.len();
                self.selection.up(len);
            }
            ApprovalMsg::NextRfp => {
                let len = self.rfps.len();
                self.selection.down(len);
            }
            ApprovalMsg::StartCommentEdit => self.editing = true,
            ApprovalMsg::StopCommentEdit => self.editing = false,
            ApprovalMsg::CommentKey(key) => self.comment = self.comment.apply_key(key, true),
            // Coordinated in the top-level update.
            ApprovalMsg::Approve | ApprovalMsg::Reject | ApprovalMsg::SubmitComment => {}
        }
        vec![]
    }
}
