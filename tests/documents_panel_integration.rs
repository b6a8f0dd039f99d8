//! Document manager scenarios driven through the pure update function.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use pretty_assertions::assert_eq;

use rfptui::core::msg::documents::DocumentsMsg;
use rfptui::core::{update, AppState, Msg};
use rfptui::domain::audit::AuditAction;
use rfptui::domain::{Category, Role};
use rfptui::infrastructure::catalog::DemoCatalog;

fn state() -> AppState {
    AppState::from_catalog(&DemoCatalog)
}

fn apply(state: AppState, msg: Msg) -> AppState {
    let (state, _) = update(msg, state);
    state
}

fn type_into_filter(mut state: AppState, text: &str) -> AppState {
    state = apply(state, Msg::Documents(DocumentsMsg::StartFilterEdit));
    for ch in text.chars() {
        state = apply(
            state,
            Msg::Documents(DocumentsMsg::FilterKey(KeyEvent::new(
                KeyCode::Char(ch),
                KeyModifiers::NONE,
            ))),
        );
    }
    apply(state, Msg::Documents(DocumentsMsg::StopFilterEdit))
}

#[test]
fn technical_category_yields_the_two_technical_documents_in_order() {
    let state = apply(state(), Msg::Documents(DocumentsMsg::CycleCategory));

    let visible = state.documents.visible();
    assert_eq!(visible.len(), 2);
    assert_eq!(state.documents.result_count(), 2);
    assert!(visible
        .iter()
        .all(|document| document.category == Category::Technical));
    assert_eq!(visible[0].title, "IBM Cloud Migration Best Practices");
    assert_eq!(visible[1].title, "Security Architecture Framework");
}

#[test]
fn live_search_narrows_on_every_keystroke() {
    let mut state = state();
    state = apply(state, Msg::Documents(DocumentsMsg::StartFilterEdit));

    let counts: Vec<usize> = "compliance"
        .chars()
        .map(|ch| {
            state = apply(
                state.clone(),
                Msg::Documents(DocumentsMsg::FilterKey(KeyEvent::new(
                    KeyCode::Char(ch),
                    KeyModifiers::NONE,
                ))),
            );
            state.documents.result_count()
        })
        .collect();

    // Counts never grow as the term gets longer.
    assert!(counts.windows(2).all(|pair| pair[0] >= pair[1]));
    assert_eq!(*counts.last().expect("at least one keystroke"), 1);
}

#[test]
fn search_and_category_compose() {
    let mut state = type_into_filter(state(), "cloud");
    assert_eq!(state.documents.result_count(), 1);

    // all -> Technical keeps the match, Technical -> Legal drops it.
    state = apply(state, Msg::Documents(DocumentsMsg::CycleCategory));
    assert_eq!(state.documents.result_count(), 1);
    state = apply(state, Msg::Documents(DocumentsMsg::CycleCategory));
    assert_eq!(state.documents.result_count(), 0);
}

#[test]
fn delete_requires_the_legal_role_for_all_three_roles() {
    for role in [Role::Sales, Role::Legal, Role::Technical] {
        let mut state = state();
        state.shell.role = role;
        state = apply(state, Msg::Documents(DocumentsMsg::ScrollToTop));
        let before = state.documents.documents.len();

        let state = apply(state, Msg::Documents(DocumentsMsg::DeleteSelected));
        let expected = if role == Role::Legal { before - 1 } else { before };
        assert_eq!(state.documents.documents.len(), expected, "role {role:?}");
    }
}

#[test]
fn legal_delete_is_audited_and_removes_the_selected_record() {
    let mut state = state();
    state.shell.role = Role::Legal;
    state = type_into_filter(state, "security");
    state = apply(state, Msg::Documents(DocumentsMsg::ScrollToTop));
    let audit_before = state.audit.entries.len();

    let state = apply(state, Msg::Documents(DocumentsMsg::DeleteSelected));

    assert!(state
        .documents
        .documents
        .iter()
        .all(|document| document.title != "Security Architecture Framework"));
    assert_eq!(state.audit.entries.len(), audit_before + 1);
    assert_eq!(state.audit.entries[0].action, AuditAction::DocumentDeleted);
    assert_eq!(
        state.system.status_message.as_deref(),
        Some("[Deleted] Security Architecture Framework")
    );
}

#[test]
fn selection_survives_refiltering_within_bounds() {
    let mut state = state();
    state = apply(state, Msg::Documents(DocumentsMsg::ScrollToBottom));
    assert_eq!(state.documents.selection.selected(), Some(3));

    let state = type_into_filter(state, "retail");
    assert_eq!(state.documents.result_count(), 1);
    assert_eq!(state.documents.selection.selected(), Some(0));
}
