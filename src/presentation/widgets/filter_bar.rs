use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

/// One-line filter readout shared by the list panels: search box, category
/// selection and the derived result count.
#[derive(Clone)]
pub struct FilterBarWidget {
    query: String,
    editing: bool,
    category_label: String,
    result_count: usize,
    border_style: Style,
}

impl FilterBarWidget {
    pub fn new(
        query: String,
        editing: bool,
        category_label: String,
        result_count: usize,
        border_style: Style,
    ) -> Self {
        Self {
            query,
            editing,
            category_label,
            result_count,
            border_style,
        }
    }

    fn query_span(&self) -> Vec<Span<'static>> {
        let mut spans = vec![Span::styled("/ ", Style::default().fg(Color::DarkGray))];
        if self.query.is_empty() && !self.editing {
            spans.push(Span::styled(
                "press / to search".to_string(),
                Style::default().fg(Color::DarkGray).italic(),
            ));
        } else {
            spans.push(Span::raw(self.query.clone()));
        }
        if self.editing {
            spans.push(Span::styled("█".to_string(), Style::default().fg(Color::Gray)));
        }
        spans
    }
}

impl Widget for FilterBarWidget {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.border_style)
            .title("Filters");
        let inner = block.inner(area);
        block.render(area, buf);

        let mut spans = self.query_span();
        spans.push(Span::raw("  │  "));
        spans.push(Span::styled(
            format!("Category: {}", self.category_label),
            Style::default().fg(Color::Cyan),
        ));
        spans.push(Span::raw("  │  "));
        spans.push(Span::styled(
            format!("{} results", self.result_count),
            Style::default().fg(Color::Gray),
        ));

        Paragraph::new(Line::from(spans)).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn placeholder_only_shows_when_idle_and_empty() {
        let idle = FilterBarWidget::new(String::new(), false, "All".into(), 4, Style::default());
        assert_eq!(idle.query_span().len(), 2);

        let editing = FilterBarWidget::new(String::new(), true, "All".into(), 4, Style::default());
        let spans = editing.query_span();
        assert_eq!(spans.last().map(|span| span.content.as_ref()), Some("█"));
    }
}
