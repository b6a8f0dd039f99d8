use ratatui::{prelude::*, widgets::*};

use crate::core::state::AppState;
use crate::domain::search::Passage;
use crate::infrastructure::tui::Frame;
use crate::presentation::components::config_style;
use crate::presentation::widgets::badge::badge;

/// Semantic search panel: query input, popular shortcuts and the delayed
/// result list.
pub struct SearchComponent;

impl SearchComponent {
    pub fn view(&self, state: &AppState, frame: &mut Frame<'_>, area: Rect) {
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(area);

        self.view_query(state, frame, layout[0]);
        self.view_popular(state, frame, layout[1]);
        self.view_results(state, frame, layout[2]);
    }

    fn view_query(&self, state: &AppState, frame: &mut Frame<'_>, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(config_style(state, "panel_border"))
            .title("AI-Powered Document Search");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut spans = vec![];
        let query = state.search.query.text();
        if query.is_empty() && !state.search.editing {
            spans.push(Span::styled(
                "e.g. 'Find cloud migration case studies for financial institutions'",
                Style::default().fg(Color::DarkGray).italic(),
            ));
        } else {
            spans.push(Span::raw(query));
        }
        if state.search.editing {
            spans.push(Span::styled("█", Style::default().fg(Color::Gray)));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), inner);
    }

    fn view_popular(&self, state: &AppState, frame: &mut Frame<'_>, area: Rect) {
        let popular = state.search.popular.join(" · ");
        frame.render_widget(
            Paragraph::new(Span::styled(
                format!("Popular: {popular}"),
                Style::default().fg(Color::DarkGray),
            )),
            area,
        );
    }

    fn view_results(&self, state: &AppState, frame: &mut Frame<'_>, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(config_style(state, "panel_border"))
            .title(format!("Search Results ({})", state.search.results.len()));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if state.search.is_pending() {
            frame.render_widget(
                Paragraph::new("Searching...")
                    .style(Style::default().fg(Color::Yellow))
                    .alignment(Alignment::Center),
                inner,
            );
            return;
        }

        if state.search.results.is_empty() {
            frame.render_widget(
                Paragraph::new(
                    "Enter a natural language query to find relevant content from your \
                     RFP response library.",
                )
                .style(Style::default().fg(Color::DarkGray))
                .wrap(Wrap { trim: true })
                .alignment(Alignment::Center),
                inner,
            );
            return;
        }

        let items: Vec<ListItem> = state
            .search
            .results
            .iter()
            .map(|passage| self.passage_item(passage, inner.width as usize))
            .collect();
        let list = List::new(items).highlight_style(config_style(state, "list_highlight"));
        let mut list_state = ListState::default().with_selected(state.search.selection.selected());
        frame.render_stateful_widget(list, inner, &mut list_state);
    }

    fn passage_item(&self, passage: &Passage, width: usize) -> ListItem<'static> {
        let head = Line::from(vec![
            Span::styled(passage.title.clone(), Style::default().bold()),
            Span::raw(" "),
            badge(
                format!("{}% match", passage.similarity_percent()),
                Style::default().fg(Color::Green),
            ),
        ]);
        let source = Line::from(Span::styled(
            format!(
                "  {} · last used {} · used {} times",
                passage.document, passage.last_used, passage.use_count
            ),
            Style::default().fg(Color::Gray),
        ));
        let content = Line::from(Span::raw(format!(
            "  {}",
            crate::text::ellipsize(&passage.content, width.saturating_sub(2))
        )));
        let mut footer = vec![Span::raw("  ")];
        for tag in &passage.tags {
            footer.push(Span::styled(
                format!("#{tag} "),
                Style::default().fg(Color::DarkGray),
            ));
        }
        footer.push(Span::styled(
            format!("citations: {}", passage.citations.join(", ")),
            Style::default().fg(Color::DarkGray),
        ));

        ListItem::new(vec![head, source, content, Line::from(footer)])
    }
}
