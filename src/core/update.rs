use crate::core::cmd::Cmd;
use crate::core::msg::{
    approval::ApprovalMsg, documents::DocumentsMsg, draft::DraftMsg, search::SearchMsg,
    shell::ShellMsg, system::SystemMsg, Msg,
};
use crate::core::state::{AppState, DocumentsState};
use crate::domain::audit::{AuditAction, Severity};
use crate::domain::draft::Citation;
use crate::domain::rfp::{RfpComment, StageStatus};
use crate::domain::search::Passage;
use crate::domain::{RequestToken, TriggerError};

/// Elm-like update function.
///
/// Simple messages are delegated to their state slice; operations that
/// touch several slices at once (trigger validation, token bookkeeping,
/// audit trail appends) are coordinated here so no slice reaches into
/// another.
pub fn update(msg: Msg, mut state: AppState) -> (AppState, Vec<Cmd>) {
    match msg {
        Msg::Shell(shell_msg) => {
            let cmds = state.shell.update(shell_msg);
            if matches!(shell_msg, ShellMsg::CycleRole | ShellMsg::SetRole(_)) {
                state.system.update(SystemMsg::UpdateStatusMessage(format!(
                    "Acting as {}",
                    state.shell.role.label()
                )));
            }
            (state, cmds)
        }

        Msg::Documents(DocumentsMsg::DeleteSelected) => delete_selected_document(state),
        Msg::Documents(documents_msg) => {
            let cmds = state.documents.update(documents_msg);
            (state, cmds)
        }

        Msg::Search(SearchMsg::Submit) => submit_search(state),
        Msg::Search(SearchMsg::ResultsReady {
            token,
            query,
            passages,
        }) => deposit_search_results(state, token, query, passages),
        Msg::Search(search_msg) => {
            let cmds = state.search.update(search_msg);
            (state, cmds)
        }

        Msg::Draft(DraftMsg::Generate) => generate_draft(state),
        Msg::Draft(DraftMsg::DraftReady {
            token,
            draft,
            citations,
        }) => deposit_draft(state, token, draft, citations),
        Msg::Draft(draft_msg) => {
            let cmds = state.draft.update(draft_msg);
            (state, cmds)
        }

        Msg::Approval(ApprovalMsg::Approve) => decide_stage(state, StageStatus::Approved),
        Msg::Approval(ApprovalMsg::Reject) => decide_stage(state, StageStatus::Rejected),
        Msg::Approval(ApprovalMsg::SubmitComment) => submit_comment(state),
        Msg::Approval(approval_msg) => {
            let cmds = state.approval.update(approval_msg);
            (state, cmds)
        }

        Msg::Audit(audit_msg) => {
            let cmds = state.audit.update(audit_msg);
            (state, cmds)
        }

        Msg::System(system_msg) => {
            let cmds = state.system.update(system_msg);
            (state, cmds)
        }
    }
}

fn delete_selected_document(mut state: AppState) -> (AppState, Vec<Cmd>) {
    if !DocumentsState::can_delete(state.shell.role) {
        state.system.update(SystemMsg::UpdateStatusMessage(
            "Delete is available to the legal role only".into(),
        ));
        return (state, vec![]);
    }
    let Some(document) = state.documents.selected_document().cloned() else {
        return (state, vec![]);
    };

    state.documents.remove(document.id);

    let role = state.shell.role;
    let at = state.system.clock;
    state.audit.append(
        AuditAction::DocumentDeleted,
        format!("Document removed from library: {}", document.title),
        role.label().to_string(),
        role.label().to_string(),
        None,
        vec![
            ("fileName".into(), document.title.clone()),
            ("fileSize".into(), document.size.clone()),
        ],
        Severity::Warning,
        at,
    );
    state.system.update(SystemMsg::UpdateStatusMessage(format!(
        "[Deleted] {}",
        document.title
    )));

    (
        state,
        vec![Cmd::LogInfo {
            message: format!("document {} deleted", document.id),
        }],
    )
}

fn submit_search(mut state: AppState) -> (AppState, Vec<Cmd>) {
    let query = state.search.query.text();
    if query.trim().is_empty() {
        state.system.update(SystemMsg::UpdateStatusMessage(format!(
            "Error: {}",
            TriggerError::EmptyQuery
        )));
        return (state, vec![]);
    }

    let token = state.tokens.issue();
    state.search.in_flight = Some(token);
    state.search.editing = false;
    state.system.update(SystemMsg::UpdateStatusMessage(format!(
        "Searching for \"{}\"...",
        query.trim()
    )));

    (state, vec![Cmd::FetchPassages { query, token }])
}

fn deposit_search_results(
    mut state: AppState,
    token: RequestToken,
    query: String,
    passages: Vec<Passage>,
) -> (AppState, Vec<Cmd>) {
    let count = passages.len();
    if !state.search.deposit(token, passages) {
        return (
            state,
            vec![Cmd::LogInfo {
                message: format!("discarding stale search completion for \"{query}\""),
            }],
        );
    }

    let role = state.shell.role;
    let at = state.system.clock;
    state.audit.append(
        AuditAction::SearchPerformed,
        format!("Semantic search: \"{}\"", query.trim()),
        role.label().to_string(),
        role.label().to_string(),
        None,
        vec![
            ("query".into(), query.trim().to_string()),
            ("resultsFound".into(), count.to_string()),
        ],
        Severity::Info,
        at,
    );
    state.system.update(SystemMsg::UpdateStatusMessage(format!(
        "Found {count} relevant passages"
    )));

    (state, vec![])
}

fn generate_draft(mut state: AppState) -> (AppState, Vec<Cmd>) {
    let request = state.draft.request();
    if let Err(error) = request.validate() {
        state
            .system
            .update(SystemMsg::UpdateStatusMessage(format!("Error: {error}")));
        return (state, vec![]);
    }

    let token = state.tokens.issue();
    state.draft.in_flight = Some(token);
    state.draft.focus = None;
    state.system.update(SystemMsg::UpdateStatusMessage(
        "Generating AI draft...".into(),
    ));

    (state, vec![Cmd::GenerateDraft { request, token }])
}

fn deposit_draft(
    mut state: AppState,
    token: RequestToken,
    draft: String,
    citations: Vec<Citation>,
) -> (AppState, Vec<Cmd>) {
    let total = citations.len();
    let used = citations.iter().filter(|citation| citation.used).count();
    if !state.draft.deposit(token, draft, citations) {
        return (
            state,
            vec![Cmd::LogInfo {
                message: "discarding stale draft completion".into(),
            }],
        );
    }

    let client = state.draft.client.text().trim().to_string();
    let at = state.system.clock;
    state.audit.append(
        AuditAction::AutoDraftGenerated,
        format!("AI draft generated for {client} proposal"),
        "System".to_string(),
        "AI".to_string(),
        None,
        vec![
            ("sourceDocs".into(), used.to_string()),
            ("citationsUsed".into(), total.to_string()),
        ],
        Severity::Info,
        at,
    );
    state.system.update(SystemMsg::UpdateStatusMessage(format!(
        "Draft ready for {client} ({used} sources used)"
    )));

    (state, vec![])
}

fn decide_stage(mut state: AppState, decision: StageStatus) -> (AppState, Vec<Cmd>) {
    let role = state.shell.role;
    let at = state.system.clock;

    let Some(rfp_index) = state.approval.selection.selected() else {
        return (state, vec![]);
    };
    if rfp_index >= state.approval.rfps.len() {
        return (state, vec![]);
    }
    let Some(stage_index) = state.approval.rfps[rfp_index].actionable_stage(role) else {
        state.system.update(SystemMsg::UpdateStatusMessage(format!(
            "No stage awaiting the {} role on this RFP",
            role.label()
        )));
        return (state, vec![]);
    };

    {
        let rfp = &mut state.approval.rfps[rfp_index];
        let stage = &mut rfp.workflow[stage_index];
        stage.status = decision;
        stage.reviewer = Some(role.label().to_string());
        stage.decided_on = Some(at.date());
        rfp.recompute();
    }

    let rfp = &state.approval.rfps[rfp_index];
    let rfp_id = rfp.id.clone();
    let title = rfp.title.clone();
    let new_status = rfp.status;

    let (action, verb, severity) = match decision {
        StageStatus::Approved => (AuditAction::RfpApproved, "approved", Severity::Info),
        StageStatus::Rejected => (AuditAction::RfpRejected, "rejected", Severity::Warning),
        StageStatus::Pending => return (state, vec![]),
    };
    state.audit.append(
        action,
        format!("{title} {verb} by {} team", role.label()),
        role.label().to_string(),
        role.label().to_string(),
        Some(rfp_id.clone()),
        vec![("newStatus".into(), new_status.to_string())],
        severity,
        at,
    );
    state.system.update(SystemMsg::UpdateStatusMessage(format!(
        "[{}] {title}",
        match decision {
            StageStatus::Approved => "Approved",
            _ => "Rejected",
        }
    )));

    (
        state,
        vec![Cmd::LogInfo {
            message: format!("{rfp_id} {verb} by {}", role.label()),
        }],
    )
}

fn submit_comment(mut state: AppState) -> (AppState, Vec<Cmd>) {
    if state.approval.comment.is_blank() {
        state.approval.editing = false;
        return (state, vec![]);
    }

    let role = state.shell.role;
    let at = state.system.clock;
    let body = state.approval.comment.text().trim().to_string();

    if let Some(rfp) = state.approval.selected_rfp_mut() {
        rfp.comments.push(RfpComment {
            user: role.label().to_string(),
            role_label: role.label().to_string(),
            posted_on: at.date(),
            body,
        });
    } else {
        return (state, vec![]);
    }

    state.approval.comment.clear();
    state.approval.editing = false;
    state
        .system
        .update(SystemMsg::UpdateStatusMessage("Comment posted".into()));

    (state, vec![])
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::domain::Role;
    use crate::infrastructure::catalog::DemoCatalog;
    use crate::infrastructure::oracle::{DemoOracle, Oracle};

    fn state() -> AppState {
        AppState::from_catalog(&DemoCatalog)
    }

    #[test]
    fn quit_sets_the_flag_without_commands() {
        let (state, cmds) = update(Msg::System(SystemMsg::Quit), state());
        assert!(state.system.should_quit);
        assert!(cmds.is_empty());
    }

    #[test]
    fn role_cycle_reports_the_new_role() {
        let (state, _) = update(Msg::Shell(ShellMsg::CycleRole), state());
        assert_eq!(state.shell.role, Role::Legal);
        assert_eq!(state.system.status_message.as_deref(), Some("Acting as Legal"));
    }

    #[test]
    fn empty_search_is_rejected_before_pending() {
        let (state, cmds) = update(Msg::Search(SearchMsg::Submit), state());
        assert!(!state.search.is_pending());
        assert!(cmds.is_empty());
        assert_eq!(
            state.system.status_message.as_deref(),
            Some("Error: search query must not be empty")
        );
    }

    #[test]
    fn search_submit_issues_a_token_and_a_fetch() {
        let mut state = state();
        state.search.query = crate::core::input::InputState::from_text("zero trust");

        let (state, cmds) = update(Msg::Search(SearchMsg::Submit), state);
        assert!(state.search.is_pending());
        assert_eq!(cmds.len(), 1);
        match &cmds[0] {
            Cmd::FetchPassages { query, token } => {
                assert_eq!(query, "zero trust");
                assert_eq!(state.search.in_flight, Some(*token));
            }
            other => panic!("expected FetchPassages, got {other:?}"),
        }
    }

    #[test]
    fn superseded_search_results_never_reach_the_display() {
        let mut state = state();
        state.search.query = crate::core::input::InputState::from_text("cloud migration");

        let (state, first_cmds) = update(Msg::Search(SearchMsg::Submit), state);
        let first_token = match &first_cmds[0] {
            Cmd::FetchPassages { token, .. } => *token,
            other => panic!("expected FetchPassages, got {other:?}"),
        };

        // Re-trigger before the first completion arrives.
        let (state, second_cmds) = update(Msg::Search(SearchMsg::Submit), state);
        let second_token = match &second_cmds[0] {
            Cmd::FetchPassages { token, .. } => *token,
            other => panic!("expected FetchPassages, got {other:?}"),
        };
        assert_ne!(first_token, second_token);

        let stale = DemoOracle::default().search("stale");
        let fresh = DemoOracle::default().search("cloud migration");
        let fresh_len = fresh.len();

        // Completions may arrive in any order; only the latest token lands.
        let (state, _) = update(
            Msg::Search(SearchMsg::ResultsReady {
                token: first_token,
                query: "stale".into(),
                passages: stale,
            }),
            state,
        );
        assert!(state.search.results.is_empty());
        assert!(state.search.is_pending());

        let (state, _) = update(
            Msg::Search(SearchMsg::ResultsReady {
                token: second_token,
                query: "cloud migration".into(),
                passages: fresh,
            }),
            state,
        );
        assert_eq!(state.search.results.len(), fresh_len);
        assert!(!state.search.is_pending());
    }

    #[test]
    fn completed_search_lands_in_the_audit_trail() {
        let mut state = state();
        state.search.query = crate::core::input::InputState::from_text("security frameworks");
        let entries_before = state.audit.entries.len();

        let (state, cmds) = update(Msg::Search(SearchMsg::Submit), state);
        let token = match &cmds[0] {
            Cmd::FetchPassages { token, .. } => *token,
            other => panic!("expected FetchPassages, got {other:?}"),
        };
        let (state, _) = update(
            Msg::Search(SearchMsg::ResultsReady {
                token,
                query: "security frameworks".into(),
                passages: DemoOracle::default().search("security frameworks"),
            }),
            state,
        );

        assert_eq!(state.audit.entries.len(), entries_before + 1);
        assert_eq!(state.audit.entries[0].action, AuditAction::SearchPerformed);
        assert!(state.audit.entries[0]
            .description
            .contains("security frameworks"));
    }

    #[test]
    fn delete_is_refused_outside_the_legal_role() {
        let mut state = state();
        state.documents.selection.select(Some(0));
        let documents_before = state.documents.documents.len();

        let (state, cmds) = update(Msg::Documents(DocumentsMsg::DeleteSelected), state);
        assert_eq!(state.documents.documents.len(), documents_before);
        assert!(cmds.is_empty());
        assert_eq!(
            state.system.status_message.as_deref(),
            Some("Delete is available to the legal role only")
        );
    }

    #[test]
    fn legal_delete_removes_and_audits() {
        let mut state = state();
        state.shell.role = Role::Legal;
        state.documents.selection.select(Some(0));
        let documents_before = state.documents.documents.len();
        let entries_before = state.audit.entries.len();

        let (state, _) = update(Msg::Documents(DocumentsMsg::DeleteSelected), state);
        assert_eq!(state.documents.documents.len(), documents_before - 1);
        assert_eq!(state.audit.entries.len(), entries_before + 1);
        assert_eq!(state.audit.entries[0].action, AuditAction::DocumentDeleted);
    }

    #[test]
    fn approval_stamps_the_stage_and_recomputes() {
        let mut state = state();
        state.shell.role = Role::Legal;

        let (state, _) = update(Msg::Approval(ApprovalMsg::Approve), state);
        let rfp = state.approval.selected_rfp().expect("an RFP is selected");
        assert!(rfp
            .workflow
            .iter()
            .all(|stage| stage.status == StageStatus::Approved));
        assert_eq!(rfp.progress, 100);
        assert_eq!(state.audit.entries[0].action, AuditAction::RfpApproved);
    }

    #[test]
    fn approval_outside_the_required_role_is_a_no_op() {
        let mut state = state();
        state.shell.role = Role::Sales;

        let before = state.approval.rfps.clone();
        let (state, cmds) = update(Msg::Approval(ApprovalMsg::Approve), state);
        assert_eq!(state.approval.rfps, before);
        assert!(cmds.is_empty());
    }

    #[test]
    fn blank_comment_is_not_posted() {
        let mut state = state();
        state.approval.editing = true;

        let (state, _) = update(Msg::Approval(ApprovalMsg::SubmitComment), state);
        assert!(!state.approval.editing);
        let rfp = state.approval.selected_rfp().expect("an RFP is selected");
        assert_eq!(rfp.comments.len(), 2);
    }
}
