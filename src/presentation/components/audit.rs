use ratatui::{prelude::*, widgets::*};

use crate::core::state::AppState;
use crate::domain::audit::{AuditEntry, Severity};
use crate::infrastructure::tui::Frame;
use crate::presentation::components::config_style;
use crate::presentation::widgets::badge::{badge, severity_style};
use crate::presentation::widgets::FilterBarWidget;

/// Audit log: the filtered list view over the activity trail plus a
/// severity summary footer.
pub struct AuditComponent;

impl AuditComponent {
    pub fn view(&self, state: &AppState, frame: &mut Frame<'_>, area: Rect) {
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(area);

        frame.render_widget(
            FilterBarWidget::new(
                state.audit.query.text(),
                state.audit.editing,
                state.audit.category.label().to_string(),
                state.audit.result_count(),
                config_style(state, "panel_border"),
            ),
            layout[0],
        );

        let items: Vec<ListItem> = state
            .audit
            .visible()
            .iter()
            .map(|entry| self.entry_item(entry, layout[1].width as usize))
            .collect();
        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(config_style(state, "panel_border"))
                    .title("System Activity Log"),
            )
            .highlight_style(config_style(state, "list_highlight"));
        let mut list_state = ListState::default().with_selected(state.audit.selection.selected());
        frame.render_stateful_widget(list, layout[1], &mut list_state);

        self.view_summary(state, frame, layout[2]);
    }

    fn entry_item(&self, entry: &AuditEntry, width: usize) -> ListItem<'static> {
        let mut head = vec![
            Span::styled(entry.description.clone(), Style::default().bold()),
            Span::raw(" "),
            badge(entry.severity.to_string(), severity_style(entry.severity)),
        ];
        if let Some(rfp_id) = &entry.rfp_id {
            head.push(Span::raw(" "));
            head.push(badge(rfp_id.clone(), Style::default().fg(Color::DarkGray)));
        }

        let meta = Line::from(Span::styled(
            format!(
                "  {} · {} · {} · {}",
                entry.action.code(),
                entry.user,
                entry.actor_role,
                entry.timestamp.format("%Y-%m-%d %H:%M:%S"),
            ),
            Style::default().fg(Color::Gray),
        ));

        let condensed = entry
            .details
            .iter()
            .map(|(key, value)| format!("{key}: {value}"))
            .collect::<Vec<_>>()
            .join(" · ");
        let details = Line::from(Span::styled(
            format!(
                "  {}",
                crate::text::ellipsize(&condensed, width.saturating_sub(4))
            ),
            Style::default().fg(Color::DarkGray),
        ));

        ListItem::new(vec![Line::from(head), meta, details])
    }

    fn view_summary(&self, state: &AppState, frame: &mut Frame<'_>, area: Rect) {
        let count_of = |severity: Severity| {
            state
                .audit
                .entries
                .iter()
                .filter(|entry| entry.severity == severity)
                .count()
        };
        let summary = format!(
            "{} of {} entries shown · info {} · warning {} · error {}",
            state.audit.result_count(),
            state.audit.entries.len(),
            count_of(Severity::Info),
            count_of(Severity::Warning),
            count_of(Severity::Error),
        );
        frame.render_widget(
            Paragraph::new(Span::styled(summary, Style::default().fg(Color::Gray))),
            area,
        );
    }
}
