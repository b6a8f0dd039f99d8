use ratatui::{prelude::*, widgets::*};

use crate::core::state::{AppState, DocumentsState};
use crate::domain::document::Document;
use crate::infrastructure::tui::Frame;
use crate::presentation::components::config_style;
use crate::presentation::widgets::badge::{badge, processing_style};
use crate::presentation::widgets::FilterBarWidget;

/// Document library: the filtered list view plus the role-gated delete.
pub struct DocumentsComponent;

impl DocumentsComponent {
    pub fn view(&self, state: &AppState, frame: &mut Frame<'_>, area: Rect) {
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![Constraint::Length(3), Constraint::Min(0)])
            .split(area);

        frame.render_widget(
            FilterBarWidget::new(
                state.documents.query.text(),
                state.documents.editing,
                state.documents.category.label().to_string(),
                state.documents.result_count(),
                config_style(state, "panel_border"),
            ),
            layout[0],
        );

        let visible = state.documents.visible();
        let items: Vec<ListItem> = visible
            .iter()
            .map(|document| self.document_item(document))
            .collect();

        let title = if DocumentsState::can_delete(state.shell.role) {
            "Document Library (d deletes)"
        } else {
            "Document Library"
        };
        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(config_style(state, "panel_border"))
                    .title(title),
            )
            .highlight_style(config_style(state, "list_highlight"));

        let mut list_state =
            ListState::default().with_selected(state.documents.selection.selected());
        frame.render_stateful_widget(list, layout[1], &mut list_state);
    }

    fn document_item(&self, document: &Document) -> ListItem<'static> {
        let mut head = vec![
            Span::styled(document.title.clone(), Style::default().bold()),
            Span::raw(" "),
            badge(
                document.file_type.to_string(),
                Style::default().fg(Color::DarkGray),
            ),
            Span::raw(" "),
            badge(
                document.status.to_string(),
                processing_style(document.status),
            ),
        ];
        if document.embeddings {
            head.push(Span::raw(" "));
            head.push(badge("AI Ready", Style::default().fg(Color::Magenta)));
        }

        let meta = Line::from(Span::styled(
            format!(
                "  {} · {} · {} · by {}",
                document.category.as_str(),
                document.size,
                document.uploaded_at,
                document.uploaded_by,
            ),
            Style::default().fg(Color::Gray),
        ));

        let tags = Line::from(Span::styled(
            format!(
                "  {}",
                document
                    .tags
                    .iter()
                    .map(|tag| format!("#{tag}"))
                    .collect::<Vec<_>>()
                    .join(" ")
            ),
            Style::default().fg(Color::DarkGray),
        ));

        ListItem::new(vec![Line::from(head), meta, tags])
    }
}
