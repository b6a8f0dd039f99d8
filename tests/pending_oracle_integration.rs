//! Pending-state lifecycle: trigger validation, the Idle -> Pending ->
//! Idle transition, and the superseded-request race.

use std::sync::Arc;

use pretty_assertions::assert_eq;
use tokio::sync::mpsc;

use rfptui::core::input::InputState;
use rfptui::core::msg::draft::DraftMsg;
use rfptui::core::msg::search::SearchMsg;
use rfptui::core::{update, AppState, Cmd, Msg};
use rfptui::infrastructure::catalog::DemoCatalog;
use rfptui::infrastructure::oracle::DemoOracle;
use rfptui::integration::CmdExecutor;

fn state() -> AppState {
    AppState::from_catalog(&DemoCatalog)
}

#[test]
fn draft_validation_rejects_before_pending() {
    let mut state = state();
    state.draft.requirements = InputState::from_text("migrate the core ledger");

    let (state, cmds) = update(Msg::Draft(DraftMsg::Generate), state);
    assert!(!state.draft.is_pending());
    assert!(cmds.is_empty());
    assert_eq!(
        state.system.status_message.as_deref(),
        Some("Error: client name must not be empty")
    );
}

#[test]
fn draft_retrigger_keeps_only_the_last_result() {
    let mut state = state();
    state.draft.client = InputState::from_text("First National Bank");
    state.draft.requirements = InputState::from_text("phased migration");

    let (state, cmds) = update(Msg::Draft(DraftMsg::Generate), state);
    let first = match &cmds[0] {
        Cmd::GenerateDraft { token, .. } => *token,
        other => panic!("expected GenerateDraft, got {other:?}"),
    };

    let (state, cmds) = update(Msg::Draft(DraftMsg::Generate), state);
    let second = match &cmds[0] {
        Cmd::GenerateDraft { token, .. } => *token,
        other => panic!("expected GenerateDraft, got {other:?}"),
    };

    // The first timer fires anyway; its deposit must be discarded.
    let (state, _) = update(
        Msg::Draft(DraftMsg::DraftReady {
            token: first,
            draft: "stale draft".into(),
            citations: vec![],
        }),
        state,
    );
    assert_eq!(state.draft.draft, None);
    assert!(state.draft.is_pending());

    let (state, _) = update(
        Msg::Draft(DraftMsg::DraftReady {
            token: second,
            draft: "fresh draft".into(),
            citations: vec![],
        }),
        state,
    );
    assert_eq!(state.draft.draft.as_deref(), Some("fresh draft"));
    assert!(!state.draft.is_pending());
}

#[tokio::test]
async fn search_round_trip_through_the_executor() {
    let (msg_tx, mut msg_rx) = mpsc::unbounded_channel();
    let executor = CmdExecutor::new(msg_tx, Arc::new(DemoOracle::instant()));

    let mut state = state();
    state.search.query = InputState::from_text("cloud security");

    let (mut state, cmds) = update(Msg::Search(SearchMsg::Submit), state);
    assert!(state.search.is_pending());
    executor.execute_all(cmds).expect("commands execute");

    let completion = msg_rx.recv().await.expect("a completion arrives");
    let (next, _) = update(completion, state.clone());
    state = next;

    assert!(!state.search.is_pending());
    assert_eq!(state.search.results.len(), 3);
    assert_eq!(state.search.selection.selected(), Some(0));
    assert_eq!(
        state.system.status_message.as_deref(),
        Some("Found 3 relevant passages")
    );
}

#[tokio::test]
async fn overlapping_executor_requests_resolve_to_the_latest() {
    let (msg_tx, mut msg_rx) = mpsc::unbounded_channel();
    let executor = CmdExecutor::new(msg_tx, Arc::new(DemoOracle::instant()));

    let mut state = state();
    state.search.query = InputState::from_text("first query");
    let (state, first_cmds) = update(Msg::Search(SearchMsg::Submit), state);

    let mut state = state;
    state.search.query = InputState::from_text("second query");
    let (mut state, second_cmds) = update(Msg::Search(SearchMsg::Submit), state);

    executor.execute_all(first_cmds).expect("first executes");
    executor.execute_all(second_cmds).expect("second executes");

    // Drain both completions in arrival order; only the second deposits.
    for _ in 0..2 {
        let completion = msg_rx.recv().await.expect("completion arrives");
        let (next, _) = update(completion, state);
        state = next;
    }

    assert!(!state.search.is_pending());
    // The audit trail recorded exactly one completed search.
    let searches = state
        .audit
        .entries
        .iter()
        .filter(|entry| entry.description.contains("second query"))
        .count();
    assert_eq!(searches, 1);
    assert!(state
        .audit
        .entries
        .iter()
        .all(|entry| !entry.description.contains("first query")));
}
