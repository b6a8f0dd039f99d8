use chrono::NaiveDateTime;

use crate::core::cmd::Cmd;
use crate::core::msg::system::SystemMsg;

/// Process-level state: lifecycle flags, the status line and the last
/// wall-clock sample.
#[derive(Debug, Clone, Default)]
pub struct SystemState {
    pub should_quit: bool,
    pub should_suspend: bool,
    pub status_message: Option<String>,
    /// Updated from the event-loop tick; audit entries are stamped with it
    /// so the update path never reads the clock directly.
    pub clock: NaiveDateTime,
}

impl SystemState {
    pub fn update(&mut self, msg: SystemMsg) -> Vec<Cmd> {
        match msg {
            SystemMsg::Quit => {
                self.should_quit = true;
                vec![]
            }
            SystemMsg::Suspend => {
                self.should_suspend = true;
                vec![]
            }
            SystemMsg::Resume => {
                self.should_suspend = false;
                vec![]
            }
            SystemMsg::ClockTick(now) => {
                self.clock = now;
                vec![]
            }
            SystemMsg::UpdateStatusMessage(message) => {
                self.status_message = Some(message);
                vec![]
            }
            SystemMsg::ClearStatusMessage => {
                self.status_message = None;
                vec![]
            }
            SystemMsg::ShowError(error) => {
                self.status_message = Some(format!("Error: {error}"));
                vec![Cmd::LogError { message: error }]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn quit_and_suspend_set_flags() {
        let mut system = SystemState::default();
        assert!(system.update(SystemMsg::Quit).is_empty());
        assert!(system.should_quit);

        system.update(SystemMsg::Suspend);
        assert!(system.should_suspend);
        system.update(SystemMsg::Resume);
        assert!(!system.should_suspend);
    }

    #[test]
    fn errors_reach_the_status_line_and_the_log() {
        let mut system = SystemState::default();
        let cmds = system.update(SystemMsg::ShowError("oracle unavailable".into()));
        assert_eq!(
            system.status_message.as_deref(),
            Some("Error: oracle unavailable")
        );
        assert_eq!(cmds.len(), 1);
    }
}
