use strum::IntoEnumIterator;

use crate::core::cmd::Cmd;
use crate::core::input::InputState;
use crate::core::msg::documents::DocumentsMsg;
use crate::domain::document::Document;
use crate::domain::{filter, Category, CategoryFilter, FilterState, Role, Selection};

/// Document library panel: a filtered list view plus a role-gated delete.
#[derive(Debug, Clone, Default)]
pub struct DocumentsState {
    pub documents: Vec<Document>,
    /// Live filter box; the list is re-evaluated on every keystroke.
    pub query: InputState,
    pub category: CategoryFilter,
    pub editing: bool,
    pub selection: Selection,
}

impl DocumentsState {
    pub fn with_documents(documents: Vec<Document>) -> Self {
        Self {
            documents,
            ..Self::default()
        }
    }

    pub fn filter_state(&self) -> FilterState {
        FilterState::new(self.query.text(), self.category.clone())
    }

    pub fn visible(&self) -> Vec<&Document> {
        filter::visible(&self.documents, &self.filter_state())
    }

    pub fn result_count(&self) -> usize {
        self.visible().len()
    }

    pub fn selected_document(&self) -> Option<&Document> {
        self.selection
            .selected()
            .and_then(|index| self.visible().into_iter().nth(index))
    }

    /// Delete is exposed to the legal role only.
    pub fn can_delete(role: Role) -> bool {
        Role::Legal.permits(role)
    }

    pub fn category_keys() -> Vec<&'static str> {
        Category::iter().map(Category::as_str).collect()
    }

    /// Remove a document by id; the caller owns the audit trail entry.
    pub fn remove(&mut self, id: u32) -> Option<Document> {
        let position = self.documents.iter().position(|document| document.id == id)?;
        let removed = self.documents.remove(position);
        self.refresh_selection();
        Some(removed)
    }

    fn refresh_selection(&mut self) {
        let len = self.result_count();
        self.selection.clamp(len);
    }

    pub fn update(&mut self, msg: DocumentsMsg) -> Vec<Cmd> {
        match msg {
            DocumentsMsg::ScrollUp => {
                let len = self.result_count();
                self.selection.up(len);
            }
            DocumentsMsg::ScrollDown => {
                let len = self.result_count();
                self.selection.down(len);
            }
            DocumentsMsg::ScrollToTop => {
                let len = self.result_count();
                self.selection.top(len);
            }
            DocumentsMsg::ScrollToBottom => {
                let len = self.result_count();
                self.selection.bottom(len);
            }
            DocumentsMsg::StartFilterEdit => self.editing = true,
            DocumentsMsg::StopFilterEdit => self.editing = false,
            DocumentsMsg::FilterKey(key) => {
                self.query = self.query.apply_key(key, false);
                self.refresh_selection();
            }
            DocumentsMsg::CycleCategory => {
                self.category = self.category.cycled(&Self::category_keys());
                self.refresh_selection();
            }
            // Coordinated in the top-level update.
            DocumentsMsg::DeleteSelected => {}
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

    fn state() -> DocumentsState {
        DocumentsState::with_documents(DemoCatalog.documents())
    }

    fn type_filter(state: &mut DocumentsState, text: &str) {
        state.update(DocumentsMsg::StartFilterEdit);
        for ch in text.chars() {
            state.update(DocumentsMsg::FilterKey(KeyEvent::new(
                KeyCode::Char(ch),
                KeyModifiers::NONE,
            )));
        }
        state.update(DocumentsMsg::StopFilterEdit);
    }

    #[test]
    fn category_filter_narrows_to_technical_documents_in_order() {
        let mut state = state();
        // all -> Technical
        state.update(DocumentsMsg::CycleCategory);

        let visible = state.visible();
        assert_eq!(visible.len(), 2);
        assert_eq!(state.result_count(), 2);
        assert!(visible
            .iter()
            .all(|document| document.category == Category::Technical));
        assert!(visible[0].id < visible[1].id);
    }

    #[test]
    fn text_filter_reaches_tags() {
        let mut state = state();
        type_filter(&mut state, "case-study");
        let visible = state.visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].title, "AI Analytics Case Study - RetailCorp");
    }

    #[test]
    fn selection_is_clamped_when_the_filter_narrows() {
        let mut state = state();
        state.update(DocumentsMsg::ScrollToBottom);
        assert_eq!(state.selection.selected(), Some(3));

        type_filter(&mut state, "security");
        assert_eq!(state.result_count(), 1);
        assert_eq!(state.selection.selected(), Some(0));
        assert_eq!(
            state.selected_document().map(|document| document.id),
            Some(4)
        );
    }

    #[test]
    fn delete_gate_is_legal_only() {
        assert!(DocumentsState::can_delete(Role::Legal));
        assert!(!DocumentsState::can_delete(Role::Sales));
        assert!(!DocumentsState::can_delete(Role::Technical));
    }

    #[test]
    fn remove_drops_exactly_one_record() {
        let mut state = state();
        let before = state.documents.len();
        let removed = state.remove(2).expect("document 2 exists");
        assert_eq!(removed.id, 2);
        assert_eq!(state.documents.len(), before - 1);
        assert!(state.remove(2).is_none());
    }
}
