//! Approval workflow scenarios: stage gating, decisions and discussion.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use pretty_assertions::assert_eq;

use rfptui::core::msg::approval::ApprovalMsg;
use rfptui::core::{update, AppState, Msg};
use rfptui::domain::audit::AuditAction;
use rfptui::domain::rfp::{RfpStatus, StageStatus};
use rfptui::domain::Role;
use rfptui::infrastructure::catalog::DemoCatalog;

fn state_as(role: Role) -> AppState {
    let mut state = AppState::from_catalog(&DemoCatalog);
    state.shell.role = role;
    state
}

fn apply(state: AppState, msg: Msg) -> AppState {
    let (state, _) = update(msg, state);
    state
}

#[test]
fn only_the_pending_stage_role_may_decide() {
    for (role, may_decide) in [
        (Role::Sales, false),
        (Role::Technical, false),
        (Role::Legal, true),
    ] {
        let state = state_as(role);
        let rfp = state.approval.selected_rfp().expect("an RFP is selected");
        assert_eq!(rfp.actionable_stage(role).is_some(), may_decide, "{role:?}");
    }
}

#[test]
fn approving_the_last_stage_completes_the_rfp() {
    let state = apply(state_as(Role::Legal), Msg::Approval(ApprovalMsg::Approve));

    let rfp = state.approval.selected_rfp().expect("an RFP is selected");
    assert_eq!(rfp.status, RfpStatus::Approved);
    assert_eq!(rfp.progress, 100);
    assert_eq!(rfp.current_stage_label(), "Completed");
    let legal_stage = &rfp.workflow[2];
    assert_eq!(legal_stage.status, StageStatus::Approved);
    assert_eq!(legal_stage.reviewer.as_deref(), Some("Legal"));
    assert!(legal_stage.decided_on.is_some());

    assert_eq!(state.audit.entries[0].action, AuditAction::RfpApproved);
    assert_eq!(
        state.audit.entries[0].rfp_id.as_deref(),
        Some("RFP-2024-001")
    );
}

#[test]
fn rejection_marks_the_rfp_rejected_and_audits_a_warning() {
    let state = apply(state_as(Role::Legal), Msg::Approval(ApprovalMsg::Reject));

    let rfp = state.approval.selected_rfp().expect("an RFP is selected");
    assert_eq!(rfp.status, RfpStatus::Rejected);
    assert_eq!(state.audit.entries[0].action, AuditAction::RfpRejected);
}

#[test]
fn deciding_twice_is_a_no_op_once_no_stage_is_pending() {
    let state = apply(state_as(Role::Legal), Msg::Approval(ApprovalMsg::Approve));
    let audit_after_first = state.audit.entries.len();

    let state = apply(state, Msg::Approval(ApprovalMsg::Approve));
    assert_eq!(state.audit.entries.len(), audit_after_first);
}

#[test]
fn fully_approved_rfps_offer_no_action_to_anyone() {
    let mut state = state_as(Role::Legal);
    state = apply(state, Msg::Approval(ApprovalMsg::NextRfp));

    let rfp = state.approval.selected_rfp().expect("second RFP selected");
    assert_eq!(rfp.status, RfpStatus::Approved);
    for role in [Role::Sales, Role::Legal, Role::Technical] {
        assert_eq!(rfp.actionable_stage(role), None);
    }
}

#[test]
fn posted_comments_carry_the_active_role() {
    let mut state = state_as(Role::Technical);
    state = apply(state, Msg::Approval(ApprovalMsg::StartCommentEdit));
    for ch in "Looks solid.".chars() {
        state = apply(
            state,
            Msg::Approval(ApprovalMsg::CommentKey(KeyEvent::new(
                KeyCode::Char(ch),
                KeyModifiers::NONE,
            ))),
        );
    }
    state = apply(state, Msg::Approval(ApprovalMsg::SubmitComment));

    let rfp = state.approval.selected_rfp().expect("an RFP is selected");
    let comment = rfp.comments.last().expect("comment was posted");
    assert_eq!(comment.body, "Looks solid.");
    assert_eq!(comment.user, "Technical");
    assert!(!state.approval.editing);
    assert!(state.approval.comment.is_blank());
}
