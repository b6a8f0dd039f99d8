use ratatui::{prelude::*, widgets::*};

use crate::core::state::AppState;
use crate::infrastructure::tui::Frame;
use crate::presentation::components::config_style;
use crate::presentation::widgets::badge::{badge, priority_style, rfp_status_style};

/// Overview panel: summary tiles plus the active-RFP list with progress
/// gauges. Display only.
pub struct DashboardComponent;

impl DashboardComponent {
    pub fn view(&self, state: &AppState, frame: &mut Frame<'_>, area: Rect) {
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![Constraint::Length(4), Constraint::Min(0)])
            .split(area);

        self.view_stats(state, frame, layout[0]);
        self.view_rfps(state, frame, layout[1]);
    }

    fn view_stats(&self, state: &AppState, frame: &mut Frame<'_>, area: Rect) {
        if state.dashboard.stats.is_empty() {
            return;
        }
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![
                Constraint::Ratio(1, state.dashboard.stats.len() as u32);
                state.dashboard.stats.len()
            ])
            .split(area);

        for (tile, stat) in columns.iter().zip(&state.dashboard.stats) {
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(config_style(state, "panel_border"))
                .title(stat.label.clone());
            let inner = block.inner(*tile);
            frame.render_widget(block, *tile);
            frame.render_widget(
                Paragraph::new(stat.value.clone())
                    .style(Style::default().bold())
                    .alignment(Alignment::Center),
                inner,
            );
        }
    }

    fn view_rfps(&self, state: &AppState, frame: &mut Frame<'_>, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(config_style(state, "panel_border"))
            .title("Active RFPs");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut constraints: Vec<Constraint> = state
            .dashboard
            .rfps
            .iter()
            .map(|_| Constraint::Length(3))
            .collect();
        constraints.push(Constraint::Min(0));
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(inner);

        for (row, rfp) in rows.iter().zip(&state.dashboard.rfps) {
            let lines = Layout::default()
                .direction(Direction::Vertical)
                .constraints(vec![
                    Constraint::Length(1),
                    Constraint::Length(1),
                    Constraint::Length(1),
                ])
                .split(*row);

            let title = Line::from(vec![
                Span::styled(rfp.title.clone(), Style::default().bold()),
                Span::styled(
                    format!("  {}", rfp.client),
                    Style::default().fg(Color::Gray),
                ),
            ]);
            frame.render_widget(Paragraph::new(title), lines[0]);

            let mut meta = vec![
                badge(rfp.status.to_string(), rfp_status_style(rfp.status)),
                Span::raw(" "),
                badge(rfp.priority.to_string(), priority_style(rfp.priority)),
                Span::styled(
                    format!("  Due: {}", rfp.deadline),
                    Style::default().fg(Color::Gray),
                ),
                Span::raw("  "),
            ];
            for member in &rfp.team {
                meta.push(badge(member.clone(), Style::default().fg(Color::DarkGray)));
                meta.push(Span::raw(" "));
            }
            frame.render_widget(Paragraph::new(Line::from(meta)), lines[1]);

            let gauge = Gauge::default()
                .gauge_style(Style::default().fg(Color::Blue))
                .ratio(f64::from(rfp.progress.min(100)) / 100.0)
                .label(format!("{}%", rfp.progress));
            frame.render_widget(gauge, lines[2]);
        }
    }
}
