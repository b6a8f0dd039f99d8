use crate::core::cmd::Cmd;
use crate::core::input::InputState;
use crate::core::msg::search::SearchMsg;
use crate::domain::{search::Passage, RequestToken, Selection};

/// Semantic search panel.
///
/// `Idle` while `in_flight` is `None`; `Pending` while a token is recorded.
/// The transition back to idle happens only when a completion echoes the
/// recorded token, so a superseded request can never overwrite the results
/// of a newer one.
#[derive(Debug, Clone, Default)]
pub struct SearchState {
    pub query: InputState,
    pub editing: bool,
    pub popular: Vec<String>,
    popular_cursor: usize,
    pub in_flight: Option<RequestToken>,
    pub results: Vec<Passage>,
    pub selection: Selection,
}

impl SearchState {
    pub fn with_popular(popular: Vec<String>) -> Self {
        Self {
            popular,
            ..Self::default()
        }
    }

    pub fn is_pending(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Accept a completion if it belongs to the current request.
    /// Returns whether the results were deposited.
    pub fn deposit(&mut self, token: RequestToken, passages: Vec<Passage>) -> bool {
        if self.in_flight != Some(token) {
            return false;
        }
        self.results = passages;
        self.selection.top(self.results.len());
        self.in_flight = None;
        true
    }

    pub fn update(&mut self, msg: SearchMsg) -> Vec<Cmd> {
        match msg {
            SearchMsg::StartQueryEdit => self.editing = true,
            SearchMsg::StopQueryEdit => self.editing = false,
            SearchMsg::QueryKey(key) => self.query = self.query.apply_key(key, false),
            SearchMsg::CyclePopular => {
                if !self.popular.is_empty() {
                    let next = &self.popular[self.popular_cursor % self.popular.len()];
                    self.query = InputState::from_text(next);
                    self.popular_cursor = (self.popular_cursor + 1) % self.popular.len();
                }
            }
            SearchMsg::ScrollUp => {
                let len = self.results.len();
                self.selection.up(len);
            }
            SearchMsg::ScrollDown => {
                let len = self.results.len();
                self.selection.down(len);
            }
            // Coordinated in the top-level update.
            SearchMsg::Submit | SearchMsg::ResultsReady { .. } => {}
        }
        vec![]
    }
}
