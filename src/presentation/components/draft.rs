use ratatui::{prelude::*, widgets::*};

use crate::core::state::draft::DraftField;
use crate::core::state::AppState;
use crate::infrastructure::tui::Frame;
use crate::presentation::components::config_style;
use crate::presentation::widgets::badge::badge;

/// Auto-draft panel: the request form, the citation list and the generated
/// draft itself.
pub struct DraftComponent;

impl DraftComponent {
    pub fn view(&self, state: &AppState, frame: &mut Frame<'_>, area: Rect) {
        let has_output = state.draft.draft.is_some() || state.draft.is_pending();
        let constraints = if has_output {
            vec![
                Constraint::Length(8),
                Constraint::Length(5),
                Constraint::Min(0),
            ]
        } else {
            vec![Constraint::Length(8), Constraint::Min(0)]
        };
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(area);

        self.view_form(state, frame, layout[0]);

        if !has_output {
            frame.render_widget(
                Paragraph::new(
                    "Fill in the client details and requirements, then press enter to \
                     generate a draft response from your document library.",
                )
                .style(Style::default().fg(Color::DarkGray))
                .wrap(Wrap { trim: true })
                .alignment(Alignment::Center),
                layout[1],
            );
            return;
        }

        self.view_citations(state, frame, layout[1]);
        self.view_draft(state, frame, layout[2]);
    }

    fn input_line(
        &self,
        label: &str,
        value: String,
        focused: bool,
    ) -> Line<'static> {
        let marker = if focused { "▸ " } else { "  " };
        let mut spans = vec![
            Span::styled(format!("{marker}{label}: "), Style::default().fg(Color::Gray)),
            Span::raw(value),
        ];
        if focused {
            spans.push(Span::styled("█", Style::default().fg(Color::Gray)));
        }
        Line::from(spans)
    }

    fn view_form(&self, state: &AppState, frame: &mut Frame<'_>, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(config_style(state, "panel_border"))
            .title("RFP Requirements");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut lines = vec![
            self.input_line(
                "Client",
                state.draft.client.text(),
                state.draft.focus == Some(DraftField::Client),
            ),
            Line::from(vec![
                Span::styled("  Project type: ", Style::default().fg(Color::Gray)),
                Span::raw(state.draft.project_type.to_string()),
                Span::styled("  (p cycles)", Style::default().fg(Color::DarkGray)),
            ]),
        ];

        let requirements_focused = state.draft.focus == Some(DraftField::Requirements);
        let marker = if requirements_focused { "▸ " } else { "  " };
        lines.push(Line::from(Span::styled(
            format!("{marker}Requirements:"),
            Style::default().fg(Color::Gray),
        )));
        for (index, text_line) in state.draft.requirements.lines().iter().enumerate() {
            let mut spans = vec![Span::raw(format!("    {text_line}"))];
            let is_cursor_line = index == state.draft.requirements.cursor().0;
            if requirements_focused && is_cursor_line {
                spans.push(Span::styled("█", Style::default().fg(Color::Gray)));
            }
            lines.push(Line::from(spans));
        }

        frame.render_widget(Paragraph::new(lines), inner);
    }

    fn view_citations(&self, state: &AppState, frame: &mut Frame<'_>, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(config_style(state, "panel_border"))
            .title("Source Citations");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if state.draft.is_pending() {
            frame.render_widget(
                Paragraph::new("Retrieving sources...")
                    .style(Style::default().fg(Color::Yellow)),
                inner,
            );
            return;
        }

        let lines: Vec<Line> = state
            .draft
            .citations
            .iter()
            .map(|citation| {
                let dot_style = if citation.used {
                    Style::default().fg(Color::Green)
                } else {
                    Style::default().fg(Color::DarkGray)
                };
                let mut spans = vec![
                    Span::styled("● ", dot_style),
                    Span::raw(citation.document.clone()),
                    Span::styled(
                        format!(" · {}", citation.section),
                        Style::default().fg(Color::Gray),
                    ),
                    Span::raw(" "),
                    badge(
                        format!("{}% confidence", citation.confidence_percent()),
                        Style::default().fg(Color::Cyan),
                    ),
                ];
                if citation.used {
                    spans.push(Span::raw(" "));
                    spans.push(badge("Used", Style::default().fg(Color::Green)));
                }
                Line::from(spans)
            })
            .collect();

        frame.render_widget(Paragraph::new(lines), inner);
    }

    fn view_draft(&self, state: &AppState, frame: &mut Frame<'_>, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(config_style(state, "panel_border"))
            .title("Generated Draft Response (j/k scrolls)");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if state.draft.is_pending() {
            frame.render_widget(
                Paragraph::new("Generating AI draft...")
                    .style(Style::default().fg(Color::Yellow))
                    .alignment(Alignment::Center),
                inner,
            );
            return;
        }

        if let Some(draft) = &state.draft.draft {
            frame.render_widget(
                Paragraph::new(draft.clone())
                    .wrap(Wrap { trim: false })
                    .scroll((state.draft.scroll, 0)),
                inner,
            );
        }
    }
}
