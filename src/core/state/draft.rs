use serde::{Deserialize, Serialize};

use crate::core::cmd::Cmd;
use crate::core::input::InputState;
use crate::core::msg::draft::DraftMsg;
use crate::domain::draft::{Citation, DraftRequest, ProjectType};
use crate::domain::RequestToken;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DraftField {
    Client,
    Requirements,
}

/// Auto-draft panel. Same pending-token discipline as search.
#[derive(Debug, Clone, Default)]
pub struct DraftState {
    pub client: InputState,
    pub requirements: InputState,
    pub project_type: ProjectType,
    pub focus: Option<DraftField>,
    pub in_flight: Option<RequestToken>,
    pub draft: Option<String>,
    pub citations: Vec<Citation>,
    /// Vertical scroll offset of the generated draft.
    pub scroll: u16,
}

impl DraftState {
    pub fn is_pending(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn request(&self) -> DraftRequest {
        DraftRequest {
            client: self.client.text(),
            project_type: self.project_type,
            requirements: self.requirements.text(),
        }
    }

    /// Accept a completion if it belongs to the current request.
    pub fn deposit(&mut self, token: RequestToken, draft: String, citations: Vec<Citation>) -> bool {
        if self.in_flight != Some(token) {
            return false;
        }
        self.draft = Some(draft);
        self.citations = citations;
        self.scroll = 0;
        self.in_flight = None;
        true
    }

    pub fn update(&mut self, msg: DraftMsg) -> Vec<Cmd> {
        match msg {
            DraftMsg::EditClient => self.focus = Some(DraftField::Client),
            DraftMsg::EditRequirements => self.focus = Some(DraftField::Requirements),
            DraftMsg::StopEdit => self.focus = None,
            DraftMsg::InputKey(key) => match self.focus {
                Some(DraftField::Client) => self.client = self.client.apply_key(key, false),
                Some(DraftField::Requirements) => {
                    self.requirements = self.requirements.apply_key(key, true);
                }
                None => {}
            },
            DraftMsg::CycleProjectType => self.project_type = self.project_type.next(),
            DraftMsg::ScrollUp => self.scroll = self.scroll.saturating_sub(1),
            DraftMsg::ScrollDown => self.scroll = self.scroll.saturating_add(1),
            // Coordinated in the top-level update.
            DraftMsg::Generate | DraftMsg::DraftReady { .. } => {}
        }
        vec![]
    }
}
