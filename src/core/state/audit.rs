use chrono::NaiveDateTime;

use crate::core::cmd::Cmd;
use crate::core::input::InputState;
use crate::core::msg::audit::AuditMsg;
use crate::domain::audit::{AuditAction, AuditEntry, Severity, AUDIT_FAMILIES};
use crate::domain::{filter, CategoryFilter, FilterState, Selection};

/// Audit log panel: a filtered list view over the activity trail.
///
/// Besides the seed entries from the catalog, other panels append to this
/// trail when the user searches, generates, deletes or decides.
#[derive(Debug, Clone, Default)]
pub struct AuditState {
    pub entries: Vec<AuditEntry>,
    pub query: InputState,
    pub category: CategoryFilter,
    pub editing: bool,
    pub selection: Selection,
    next_id: u32,
}

impl AuditState {
    pub fn with_entries(entries: Vec<AuditEntry>) -> Self {
        let next_id = entries.iter().map(|entry| entry.id).max().unwrap_or(0) + 1;
        Self {
            entries,
            next_id,
            ..Self::default()
        }
    }

    pub fn filter_state(&self) -> FilterState {
        FilterState::new(self.query.text(), self.category.clone())
    }

    pub fn visible(&self) -> Vec<&AuditEntry> {
        filter::visible(&self.entries, &self.filter_state())
    }

    pub fn result_count(&self) -> usize {
        self.visible().len()
    }

    /// Append one entry to the trail, stamping the next free id.
    #[allow(clippy::too_many_arguments)]
    pub fn append(
        &mut self,
        action: AuditAction,
        description: String,
        user: String,
        actor_role: String,
        rfp_id: Option<String>,
        details: Vec<(String, String)>,
        severity: Severity,
        at: NaiveDateTime,
    ) {
        let entry = AuditEntry {
            id: self.next_id,
            action,
            description,
            user,
            actor_role,
            timestamp: at,
            rfp_id,
            details,
            severity,
        };
        self.next_id += 1;
        self.entries.insert(0, entry);
        self.refresh_selection();
    }

    fn refresh_selection(&mut self) {
        let len = self.result_count();
        self.selection.clamp(len);
    }

    pub fn update(&mut self, msg: AuditMsg) -> Vec<Cmd> {
        match msg {
            AuditMsg::ScrollUp => {
                let len = self.result_count();
                self.selection.up(len);
            }
            AuditMsg::ScrollDown => {
                let len = self.result_count();
                self.selection.down(len);
            }
            AuditMsg::ScrollToTop => {
                let len = self.result_count();
                self.selection.top(len);
            }
            AuditMsg::ScrollToBottom => {
                let len = self.result_count();
                self.selection.bottom(len);
            }
            AuditMsg::StartFilterEdit => self.editing = true,
            AuditMsg::StopFilterEdit => self.editing = false,
            AuditMsg::FilterKey(key) => {
                self.query = self.query.apply_key(key, false);
                self.refresh_selection();
            }
            AuditMsg::CycleCategory => {
                self.category = self.category.cycled(&AUDIT_FAMILIES);
                self.refresh_selection();
            }
        }
        vec![]
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::infrastructure::catalog::{Catalog, DemoCatalog};

    fn state() -> AuditState {
        AuditState::with_entries(DemoCatalog.audit_entries())
    }

    fn type_filter(state: &mut AuditState, text: &str) {
        for ch in text.chars() {
            state.update(AuditMsg::FilterKey(KeyEvent::new(
                KeyCode::Char(ch),
                KeyModifiers::NONE,
            )));
        }
    }

    #[test]
    fn searching_violation_finds_the_single_security_entry() {
        let mut state = state();
        assert_eq!(state.entries.len(), 6);

        type_filter(&mut state, "violation");
        let visible = state.visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].action, AuditAction::PermissionViolation);
    }

    #[test]
    fn family_cycle_walks_the_dropdown() {
        let mut state = state();
        let mut labels = vec![state.category.label().to_string()];
        for _ in 0..AUDIT_FAMILIES.len() + 1 {
            state.update(AuditMsg::CycleCategory);
            labels.push(state.category.label().to_string());
        }
        assert_eq!(labels, vec!["All", "rfp", "document", "search", "security", "All"]);
    }

    #[test]
    fn append_prepends_and_keeps_ids_unique() {
        let mut state = state();
        let at = chrono::NaiveDate::from_ymd_opt(2024, 12, 16)
            .and_then(|date| date.and_hms_opt(9, 0, 0))
            .expect("valid timestamp");
        state.append(
            AuditAction::SearchPerformed,
            "Semantic search: \"zero trust\"".into(),
            "Sales".into(),
            "Sales".into(),
            None,
            vec![("resultsFound".into(), "3".into())],
            Severity::Info,
            at,
        );

        assert_eq!(state.entries.len(), 7);
        assert_eq!(state.entries[0].id, 7);
        let mut ids: Vec<u32> = state.entries.iter().map(|entry| entry.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), state.entries.len());
    }
}
