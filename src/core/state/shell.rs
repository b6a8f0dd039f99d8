use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoEnumIterator};

use crate::core::cmd::Cmd;
use crate::core::msg::shell::ShellMsg;
use crate::domain::Role;

/// The six top-level views. Exactly one is rendered at a time.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
)]
pub enum Panel {
    #[default]
    Dashboard,
    Documents,
    #[strum(serialize = "Semantic Search")]
    Search,
    #[strum(serialize = "Auto-Draft")]
    Draft,
    #[strum(serialize = "Approvals")]
    Approval,
    #[strum(serialize = "Audit Logs")]
    Audit,
}

impl Panel {
    pub fn index(self) -> usize {
        Panel::iter().position(|panel| panel == self).unwrap_or(0)
    }

    pub fn from_index(index: usize) -> Option<Panel> {
        Panel::iter().nth(index)
    }

    pub fn next(self) -> Panel {
        Panel::from_index((self.index() + 1) % Panel::iter().len()).unwrap_or_default()
    }

    pub fn previous(self) -> Panel {
        let count = Panel::iter().len();
        Panel::from_index((self.index() + count - 1) % count).unwrap_or_default()
    }
}

/// State owned by the page shell and passed read-only to every panel.
///
/// Only the shell mutates the role; panels re-evaluate their capability
/// gates whenever it changes. Switching panels deliberately leaves the
/// other panels' filters untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShellState {
    pub panel: Panel,
    pub role: Role,
}

impl ShellState {
    pub fn new(role: Role) -> Self {
        Self {
            panel: Panel::default(),
            role,
        }
    }

    pub fn update(&mut self, msg: ShellMsg) -> Vec<Cmd> {
        match msg {
            ShellMsg::SelectPanel(panel) => self.panel = panel,
            ShellMsg::NextPanel => self.panel = self.panel.next(),
            ShellMsg::PreviousPanel => self.panel = self.panel.previous(),
            ShellMsg::SetRole(role) => self.role = role,
            ShellMsg::CycleRole => self.role = self.role.next(),
        }
        vec![]
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn panels_cycle_in_tab_order() {
        let mut panel = Panel::Dashboard;
        let mut order = vec![panel];
        for _ in 0..5 {
            panel = panel.next();
            order.push(panel);
        }
        assert_eq!(
            order,
            vec![
                Panel::Dashboard,
                Panel::Documents,
                Panel::Search,
                Panel::Draft,
                Panel::Approval,
                Panel::Audit,
            ]
        );
        assert_eq!(panel.next(), Panel::Dashboard);
        assert_eq!(Panel::Dashboard.previous(), Panel::Audit);
    }

    #[test]
    fn role_changes_only_through_shell_messages() {
        let mut shell = ShellState::new(Role::Sales);
        shell.update(ShellMsg::CycleRole);
        assert_eq!(shell.role, Role::Legal);
        shell.update(ShellMsg::SetRole(Role::Technical));
        assert_eq!(shell.role, Role::Technical);
    }

    #[test]
    fn select_panel_is_direct() {
        let mut shell = ShellState::default();
        shell.update(ShellMsg::SelectPanel(Panel::Audit));
        assert_eq!(shell.panel, Panel::Audit);
        assert_eq!(Panel::from_index(2), Some(Panel::Search));
        assert_eq!(Panel::from_index(9), None);
    }
}
