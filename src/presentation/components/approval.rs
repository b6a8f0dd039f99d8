use ratatui::{prelude::*, widgets::*};

use crate::core::state::AppState;
use crate::domain::rfp::Rfp;
use crate::infrastructure::tui::Frame;
use crate::presentation::components::config_style;
use crate::presentation::widgets::badge::{badge, rfp_status_style, stage_icon};

/// Approval workflow: RFP list, the selected RFP's stages with role-gated
/// decisions, and the discussion thread.
pub struct ApprovalComponent;

impl ApprovalComponent {
    pub fn view(&self, state: &AppState, frame: &mut Frame<'_>, area: Rect) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Percentage(35), Constraint::Min(0)])
            .split(area);

        self.view_rfp_list(state, frame, columns[0]);
        self.view_details(state, frame, columns[1]);
    }

    fn view_rfp_list(&self, state: &AppState, frame: &mut Frame<'_>, area: Rect) {
        let items: Vec<ListItem> = state
            .approval
            .rfps
            .iter()
            .map(|rfp| {
                let head = Line::from(vec![
                    Span::styled(rfp.title.clone(), Style::default().bold()),
                    Span::raw(" "),
                    badge(rfp.status.to_string(), rfp_status_style(rfp.status)),
                ]);
                let meta = Line::from(Span::styled(
                    format!(
                        "  {} · due {} · {}",
                        rfp.client,
                        rfp.deadline,
                        rfp.current_stage_label()
                    ),
                    Style::default().fg(Color::Gray),
                ));
                ListItem::new(vec![head, meta])
            })
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(config_style(state, "panel_border"))
                    .title("Pending Reviews"),
            )
            .highlight_style(config_style(state, "list_highlight"));
        let mut list_state =
            ListState::default().with_selected(state.approval.selection.selected());
        frame.render_stateful_widget(list, area, &mut list_state);
    }

    fn view_details(&self, state: &AppState, frame: &mut Frame<'_>, area: Rect) {
        let Some(rfp) = state.approval.selected_rfp() else {
            frame.render_widget(
                Paragraph::new("No RFP selected").style(Style::default().fg(Color::DarkGray)),
                area,
            );
            return;
        };

        let stage_height = rfp.workflow.len() as u16 + 2;
        let comment_height = if state.approval.editing {
            state.approval.comment.lines().len() as u16 + 2
        } else {
            1
        };
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![
                Constraint::Length(stage_height),
                Constraint::Min(0),
                Constraint::Length(comment_height),
            ])
            .split(area);

        self.view_stages(state, rfp, frame, layout[0]);
        self.view_comments(state, rfp, frame, layout[1]);
        self.view_comment_box(state, frame, layout[2]);
    }

    fn view_stages(&self, state: &AppState, rfp: &Rfp, frame: &mut Frame<'_>, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(config_style(state, "panel_border"))
            .title(format!("{} · Approval Stages", rfp.title));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let lines: Vec<Line> = rfp
            .workflow
            .iter()
            .map(|stage| {
                let mut spans = vec![
                    Span::raw(format!("{} ", stage_icon(stage.status))),
                    Span::styled(
                        format!("{} Review", stage.role.label()),
                        Style::default().bold(),
                    ),
                ];
                if let Some(reviewer) = &stage.reviewer {
                    spans.push(Span::styled(
                        format!("  by {reviewer}"),
                        Style::default().fg(Color::Gray),
                    ));
                }
                if let Some(decided_on) = stage.decided_on {
                    spans.push(Span::styled(
                        format!("  {decided_on}"),
                        Style::default().fg(Color::Gray),
                    ));
                }
                spans.push(Span::raw("  "));
                spans.push(badge(stage.status.to_string(), stage_badge_style(stage.status)));
                if stage.actionable_by(state.shell.role) {
                    spans.push(Span::styled(
                        "  a approves · x rejects",
                        Style::default().fg(Color::Yellow),
                    ));
                }
                Line::from(spans)
            })
            .collect();

        frame.render_widget(Paragraph::new(lines), inner);
    }

    fn view_comments(&self, state: &AppState, rfp: &Rfp, frame: &mut Frame<'_>, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(config_style(state, "panel_border"))
            .title("Comments & Feedback");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut lines = Vec::new();
        for comment in &rfp.comments {
            lines.push(Line::from(vec![
                Span::styled(comment.user.clone(), Style::default().bold()),
                Span::raw(" "),
                badge(
                    comment.role_label.clone(),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    format!("  {}", comment.posted_on),
                    Style::default().fg(Color::Gray),
                ),
            ]));
            lines.push(Line::from(Span::raw(format!("  {}", comment.body))));
        }

        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
    }

    fn view_comment_box(&self, state: &AppState, frame: &mut Frame<'_>, area: Rect) {
        if !state.approval.editing {
            frame.render_widget(
                Paragraph::new("m writes a comment").style(Style::default().fg(Color::DarkGray)),
                area,
            );
            return;
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow))
            .title("New comment (ctrl-p posts)");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut lines: Vec<Line> = Vec::new();
        for (index, text_line) in state.approval.comment.lines().iter().enumerate() {
            let mut spans = vec![Span::raw(text_line.clone())];
            if index == state.approval.comment.cursor().0 {
                spans.push(Span::styled("█", Style::default().fg(Color::Gray)));
            }
            lines.push(Line::from(spans));
        }
        frame.render_widget(Paragraph::new(lines), inner);
    }
}

fn stage_badge_style(status: crate::domain::rfp::StageStatus) -> Style {
    use crate::domain::rfp::StageStatus;
    match status {
        StageStatus::Approved => Style::default().fg(Color::Green),
        StageStatus::Rejected => Style::default().fg(Color::Red),
        StageStatus::Pending => Style::default().fg(Color::Yellow),
    }
}
