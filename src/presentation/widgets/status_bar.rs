use ratatui::prelude::*;
use ratatui::widgets::{Paragraph, Widget};

/// Two bottom lines: the status/progress message and the key hints for the
/// visible panel.
#[derive(Clone)]
pub struct StatusBarWidget {
    message: Option<String>,
    busy: bool,
    hints: String,
    role_label: &'static str,
    style: Style,
}

impl StatusBarWidget {
    pub fn new(
        message: Option<String>,
        busy: bool,
        hints: String,
        role_label: &'static str,
        style: Style,
    ) -> Self {
        Self {
            message,
            busy,
            hints,
            role_label,
            style,
        }
    }

    fn message_line(&self) -> String {
        match (&self.message, self.busy) {
            (Some(message), true) => format!("{message} (working...)"),
            (Some(message), false) => message.clone(),
            (None, true) => "Working...".to_string(),
            (None, false) => String::new(),
        }
    }
}

impl Widget for StatusBarWidget {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let layout = Layout::new(
            Direction::Vertical,
            [Constraint::Length(1), Constraint::Length(1)],
        )
        .split(area);

        let message = Paragraph::new(self.message_line()).style(self.style);
        message.render(layout[0], buf);

        let hints = Line::from(vec![
            Span::styled(self.hints.clone(), Style::default().fg(Color::DarkGray)),
            Span::raw(" "),
        ]);
        let role = Line::from(Span::styled(
            format!("role: {}", self.role_label),
            Style::default().fg(Color::Gray).italic(),
        ))
        .right_aligned();

        Paragraph::new(hints).render(layout[1], buf);
        Paragraph::new(role).render(layout[1], buf);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn busy_state_is_always_visible() {
        let widget = StatusBarWidget::new(None, true, String::new(), "Sales", Style::default());
        assert_eq!(widget.message_line(), "Working...");

        let widget = StatusBarWidget::new(
            Some("Found 3 relevant passages".into()),
            false,
            String::new(),
            "Sales",
            Style::default(),
        );
        assert_eq!(widget.message_line(), "Found 3 relevant passages");
    }
}
