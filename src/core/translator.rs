use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::config::keybindings::Action;
use crate::core::msg::{
    approval::ApprovalMsg, audit::AuditMsg, documents::DocumentsMsg, draft::DraftMsg,
    search::SearchMsg, shell::ShellMsg, system::SystemMsg, Msg,
};
use crate::core::raw_msg::RawMsg;
use crate::core::state::draft::DraftField;
use crate::core::state::{AppState, Panel};
use crate::mode::Mode;

/// Translates raw external events into domain messages.
/// Pure: reads the state for context, never mutates it.
pub fn translate_raw_to_domain(raw: RawMsg, state: &AppState) -> Vec<Msg> {
    match raw {
        RawMsg::Tick(now) => vec![Msg::System(SystemMsg::ClockTick(now))],
        RawMsg::Quit => vec![Msg::System(SystemMsg::Quit)],
        RawMsg::Suspend => vec![Msg::System(SystemMsg::Suspend)],
        RawMsg::Resume => vec![Msg::System(SystemMsg::Resume)],
        RawMsg::Key(key) => translate_key_event(key, state),
        RawMsg::Paste(text) => translate_paste(text, state),
        // Resize is handled by the runner at the terminal edge.
        RawMsg::Resize(..) => vec![],
        RawMsg::Error(error) => vec![Msg::System(SystemMsg::ShowError(error))],
    }
}

fn translate_key_event(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    // Global bindings that must work in every mode.
    match key {
        KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => return vec![Msg::System(SystemMsg::Quit)],
        KeyEvent {
            code: KeyCode::Char('z'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => return vec![Msg::System(SystemMsg::Suspend)],
        _ => {}
    }

    match state.mode() {
        Mode::Editing => translate_editing_keys(key, state),
        Mode::Normal => translate_normal_mode_keys(key, state),
    }
}

/// Keys while an input has focus: `Esc` leaves, `Ctrl-p` submits, `Enter`
/// submits single-line inputs, everything else is routed into the input.
fn translate_editing_keys(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    if key.code == KeyCode::Esc {
        return stop_editing(state);
    }

    if key.code == KeyCode::Char('p') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return match state.shell.panel {
            Panel::Documents => vec![Msg::Documents(DocumentsMsg::StopFilterEdit)],
            Panel::Audit => vec![Msg::Audit(AuditMsg::StopFilterEdit)],
            Panel::Search => vec![Msg::Search(SearchMsg::Submit)],
            Panel::Draft => vec![Msg::Draft(DraftMsg::Generate)],
            Panel::Approval => vec![Msg::Approval(ApprovalMsg::SubmitComment)],
            Panel::Dashboard => vec![],
        };
    }

    if key.code == KeyCode::Enter {
        match state.shell.panel {
            Panel::Documents => return vec![Msg::Documents(DocumentsMsg::StopFilterEdit)],
            Panel::Audit => return vec![Msg::Audit(AuditMsg::StopFilterEdit)],
            Panel::Search => return vec![Msg::Search(SearchMsg::Submit)],
            Panel::Draft if state.draft.focus == Some(DraftField::Client) => {
                return vec![Msg::Draft(DraftMsg::EditRequirements)];
            }
            // Multiline inputs take the newline themselves.
            _ => {}
        }
    }

    forward_key(key, state)
}

fn stop_editing(state: &AppState) -> Vec<Msg> {
    match state.shell.panel {
        Panel::Documents => vec![Msg::Documents(DocumentsMsg::StopFilterEdit)],
        Panel::Audit => vec![Msg::Audit(AuditMsg::StopFilterEdit)],
        Panel::Search => vec![Msg::Search(SearchMsg::StopQueryEdit)],
        Panel::Draft => vec![Msg::Draft(DraftMsg::StopEdit)],
        Panel::Approval => vec![Msg::Approval(ApprovalMsg::StopCommentEdit)],
        Panel::Dashboard => vec![],
    }
}

fn forward_key(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    match state.shell.panel {
        Panel::Documents => vec![Msg::Documents(DocumentsMsg::FilterKey(key))],
        Panel::Audit => vec![Msg::Audit(AuditMsg::FilterKey(key))],
        Panel::Search => vec![Msg::Search(SearchMsg::QueryKey(key))],
        Panel::Draft => vec![Msg::Draft(DraftMsg::InputKey(key))],
        Panel::Approval => vec![Msg::Approval(ApprovalMsg::CommentKey(key))],
        Panel::Dashboard => vec![],
    }
}

fn translate_paste(text: String, state: &AppState) -> Vec<Msg> {
    if state.mode() != Mode::Editing {
        return vec![];
    }
    text.chars()
        .flat_map(|ch| {
            let key = if ch == '\n' {
                KeyEvent::new(KeyCode::Enter, KeyModifiers::empty())
            } else {
                KeyEvent::new(KeyCode::Char(ch), KeyModifiers::empty())
            };
            forward_key(key, state)
        })
        .collect()
}

fn translate_normal_mode_keys(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    // Digits jump straight to a panel, like the sidebar in a browser.
    if let KeyCode::Char(digit @ '1'..='6') = key.code {
        if key.modifiers.is_empty() {
            if let Some(panel) = Panel::from_index(digit as usize - '1' as usize) {
                return vec![Msg::Shell(ShellMsg::SelectPanel(panel))];
            }
        }
    }

    let Some(action) = state
        .config
        .config
        .keybindings
        .get(&Mode::Normal)
        .and_then(|keymap| keymap.get(&vec![key]))
    else {
        return vec![];
    };
    translate_action(*action, state)
}

fn translate_action(action: Action, state: &AppState) -> Vec<Msg> {
    let panel = state.shell.panel;
    match action {
        Action::Quit => vec![Msg::System(SystemMsg::Quit)],
        Action::Suspend => vec![Msg::System(SystemMsg::Suspend)],
        Action::NextPanel => vec![Msg::Shell(ShellMsg::NextPanel)],
        Action::PreviousPanel => vec![Msg::Shell(ShellMsg::PreviousPanel)],
        Action::CycleRole => vec![Msg::Shell(ShellMsg::CycleRole)],
        Action::Cancel => vec![Msg::System(SystemMsg::ClearStatusMessage)],

        Action::ScrollUp => match panel {
            Panel::Documents => vec![Msg::Documents(DocumentsMsg::ScrollUp)],
            Panel::Audit => vec![Msg::Audit(AuditMsg::ScrollUp)],
            Panel::Search => vec![Msg::Search(SearchMsg::ScrollUp)],
            Panel::Draft => vec![Msg::Draft(DraftMsg::ScrollUp)],
            Panel::Approval => vec![Msg::Approval(ApprovalMsg::PreviousRfp)],
            Panel::Dashboard => vec![],
        },
        Action::ScrollDown => match panel {
            Panel::Documents => vec![Msg::Documents(DocumentsMsg::ScrollDown)],
            Panel::Audit => vec![Msg::Audit(AuditMsg::ScrollDown)],
            Panel::Search => vec![Msg::Search(SearchMsg::ScrollDown)],
            Panel::Draft => vec![Msg::Draft(DraftMsg::ScrollDown)],
            Panel::Approval => vec![Msg::Approval(ApprovalMsg::NextRfp)],
            Panel::Dashboard => vec![],
        },
        Action::ScrollToTop => match panel {
            Panel::Documents => vec![Msg::Documents(DocumentsMsg::ScrollToTop)],
            Panel::Audit => vec![Msg::Audit(AuditMsg::ScrollToTop)],
            _ => vec![],
        },
        Action::ScrollToBottom => match panel {
            Panel::Documents => vec![Msg::Documents(DocumentsMsg::ScrollToBottom)],
            Panel::Audit => vec![Msg::Audit(AuditMsg::ScrollToBottom)],
            _ => vec![],
        },

        Action::EditFilter => match panel {
            Panel::Documents => vec![Msg::Documents(DocumentsMsg::StartFilterEdit)],
            Panel::Audit => vec![Msg::Audit(AuditMsg::StartFilterEdit)],
            Panel::Search => vec![Msg::Search(SearchMsg::StartQueryEdit)],
            Panel::Draft => vec![Msg::Draft(DraftMsg::EditRequirements)],
            _ => vec![],
        },
        Action::CycleCategory => match panel {
            Panel::Documents => vec![Msg::Documents(DocumentsMsg::CycleCategory)],
            Panel::Audit => vec![Msg::Audit(AuditMsg::CycleCategory)],
            _ => vec![],
        },
        Action::CyclePreset => match panel {
            Panel::Search => vec![Msg::Search(SearchMsg::CyclePopular)],
            Panel::Draft => vec![Msg::Draft(DraftMsg::CycleProjectType)],
            _ => vec![],
        },
        Action::Submit => match panel {
            Panel::Search => vec![Msg::Search(SearchMsg::Submit)],
            Panel::Draft => vec![Msg::Draft(DraftMsg::Generate)],
            _ => vec![],
        },
        Action::Approve => match panel {
            Panel::Approval => vec![Msg::Approval(ApprovalMsg::Approve)],
            _ => vec![],
        },
        Action::Reject => match panel {
            Panel::Approval => vec![Msg::Approval(ApprovalMsg::Reject)],
            _ => vec![],
        },
        Action::EditComment => match panel {
            Panel::Approval => vec![Msg::Approval(ApprovalMsg::StartCommentEdit)],
            _ => vec![],
        },
        Action::EditClient => match panel {
            Panel::Draft => vec![Msg::Draft(DraftMsg::EditClient)],
            _ => vec![],
        },
        Action::Delete => match panel {
            Panel::Documents => vec![Msg::Documents(DocumentsMsg::DeleteSelected)],
            _ => vec![],
        },
    }
}
