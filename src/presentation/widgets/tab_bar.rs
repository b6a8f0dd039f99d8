use ratatui::prelude::*;
use ratatui::widgets::Widget;
use strum::IntoEnumIterator;

use crate::core::state::shell::Panel;

#[derive(Clone)]
pub struct TabBarWidget {
    active: Panel,
    active_style: Style,
    inactive_style: Style,
}

impl TabBarWidget {
    pub fn new(active: Panel, active_style: Style, inactive_style: Style) -> Self {
        Self {
            active,
            active_style,
            inactive_style,
        }
    }

    pub fn titles(&self) -> Vec<String> {
        Panel::iter()
            .enumerate()
            .map(|(index, panel)| format!("{} {panel}", index + 1))
            .collect()
    }
}

impl Widget for TabBarWidget {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let tabs = ratatui::widgets::Tabs::new(self.titles())
            .select(self.active.index())
            .style(self.inactive_style)
            .highlight_style(self.active_style);

        tabs.render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn titles_carry_their_jump_digit() {
        let widget = TabBarWidget::new(Panel::Search, Style::default(), Style::default());
        let titles = widget.titles();
        assert_eq!(titles.len(), 6);
        assert_eq!(titles[0], "1 Dashboard");
        assert_eq!(titles[2], "3 Semantic Search");
        assert_eq!(titles[5], "6 Audit Logs");
    }
}
