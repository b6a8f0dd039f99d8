use ratatui::prelude::*;

use crate::core::state::{AppState, Panel};
use crate::infrastructure::tui::Frame;
use crate::mode::Mode;
use crate::presentation::widgets::{StatusBarWidget, TabBarWidget};

pub mod approval;
pub mod audit;
pub mod dashboard;
pub mod documents;
pub mod draft;
pub mod search;

pub use approval::ApprovalComponent;
pub use audit::AuditComponent;
pub use dashboard::DashboardComponent;
pub use documents::DocumentsComponent;
pub use draft::DraftComponent;
pub use search::SearchComponent;

/// Look up a configured style for the current mode, falling back to the
/// Normal-mode table, then to the default style.
pub fn config_style(state: &AppState, key: &str) -> Style {
    let styles = &state.config.config.styles;
    styles
        .get(&state.mode())
        .and_then(|table| table.get(key))
        .or_else(|| styles.get(&Mode::Normal).and_then(|table| table.get(key)))
        .copied()
        .unwrap_or_default()
}

/// Collection of all panel components.
///
/// Components are stateless renderers; this struct only exists to give the
/// runner one `render` entry point.
pub struct Components {
    dashboard: DashboardComponent,
    documents: DocumentsComponent,
    search: SearchComponent,
    draft: DraftComponent,
    approval: ApprovalComponent,
    audit: AuditComponent,
}

impl Components {
    pub fn new() -> Self {
        Self {
            dashboard: DashboardComponent,
            documents: DocumentsComponent,
            search: SearchComponent,
            draft: DraftComponent,
            approval: ApprovalComponent,
            audit: AuditComponent,
        }
    }

    pub fn render(&mut self, frame: &mut Frame<'_>, state: &AppState) {
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![
                Constraint::Length(1), // header
                Constraint::Length(1), // tab bar
                Constraint::Min(0),    // active panel
                Constraint::Length(2), // status bar
            ])
            .split(frame.area());

        self.render_header(frame, state, layout[0]);

        frame.render_widget(
            TabBarWidget::new(
                state.shell.panel,
                config_style(state, "tab_active"),
                config_style(state, "tab_inactive"),
            ),
            layout[1],
        );

        match state.shell.panel {
            Panel::Dashboard => self.dashboard.view(state, frame, layout[2]),
            Panel::Documents => self.documents.view(state, frame, layout[2]),
            Panel::Search => self.search.view(state, frame, layout[2]),
            Panel::Draft => self.draft.view(state, frame, layout[2]),
            Panel::Approval => self.approval.view(state, frame, layout[2]),
            Panel::Audit => self.audit.view(state, frame, layout[2]),
        }

        frame.render_widget(
            StatusBarWidget::new(
                state.system.status_message.clone(),
                state.is_busy(),
                hints_for(state),
                state.shell.role.label(),
                config_style(state, "status_line"),
            ),
            layout[3],
        );
    }

    fn render_header(&self, frame: &mut Frame<'_>, state: &AppState, area: Rect) {
        let title = Line::from(vec![
            Span::styled(
                "RFP Automation Assistant",
                Style::default().fg(Color::Cyan).bold(),
            ),
            Span::styled(
                "  Technical Sales Platform",
                Style::default().fg(Color::DarkGray),
            ),
        ]);
        frame.render_widget(ratatui::widgets::Paragraph::new(title), area);

        let role = Line::from(Span::styled(
            format!("Role: {}  (r cycles)", state.shell.role.label()),
            Style::default().fg(Color::Gray),
        ))
        .right_aligned();
        frame.render_widget(ratatui::widgets::Paragraph::new(role), area);
    }
}

impl Default for Components {
    fn default() -> Self {
        Self::new()
    }
}

fn hints_for(state: &AppState) -> String {
    if state.mode() == Mode::Editing {
        return "esc: done  ctrl-p: submit".to_string();
    }
    let panel_hints = match state.shell.panel {
        Panel::Dashboard => "tab: next panel  1-6: jump",
        Panel::Documents => "/: search  c: category  j/k: move  d: delete",
        Panel::Search => "/: query  p: popular  enter: search  j/k: move",
        Panel::Draft => "n: client  /: requirements  p: project type  enter: generate",
        Panel::Approval => "j/k: select  a: approve  x: reject  m: comment",
        Panel::Audit => "/: search  c: family  j/k: move",
    };
    format!("{panel_hints}  q: quit")
}
