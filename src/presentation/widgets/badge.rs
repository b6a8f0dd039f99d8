//! Small styled fragments shared by the list panels.

use ratatui::prelude::*;

use crate::domain::audit::Severity;
use crate::domain::document::ProcessingStatus;
use crate::domain::rfp::{Priority, RfpStatus, StageStatus};

pub fn badge(text: impl Into<String>, style: Style) -> Span<'static> {
    Span::styled(format!("[{}]", text.into()), style)
}

pub fn severity_style(severity: Severity) -> Style {
    match severity {
        Severity::Info => Style::default().fg(Color::Blue),
        Severity::Warning => Style::default().fg(Color::Yellow),
        Severity::Error => Style::default().fg(Color::Red),
        Severity::Success => Style::default().fg(Color::Green),
    }
}

pub fn processing_style(status: ProcessingStatus) -> Style {
    match status {
        ProcessingStatus::Processed => Style::default().fg(Color::Green),
        ProcessingStatus::Processing => Style::default().fg(Color::Yellow),
        ProcessingStatus::Error => Style::default().fg(Color::Red),
    }
}

pub fn rfp_status_style(status: RfpStatus) -> Style {
    match status {
        RfpStatus::InProgress => Style::default().fg(Color::Blue),
        RfpStatus::Review | RfpStatus::PendingReview => Style::default().fg(Color::Yellow),
        RfpStatus::Draft => Style::default().fg(Color::Gray),
        RfpStatus::Approved => Style::default().fg(Color::Green),
        RfpStatus::Rejected => Style::default().fg(Color::Red),
    }
}

pub fn priority_style(priority: Priority) -> Style {
    match priority {
        Priority::Urgent => Style::default().fg(Color::Red),
        Priority::High => Style::default().fg(Color::LightRed),
        Priority::Medium => Style::default().fg(Color::Yellow),
        Priority::Low => Style::default().fg(Color::Green),
    }
}

pub fn stage_icon(status: StageStatus) -> &'static str {
    match status {
        StageStatus::Approved => "✓",
        StageStatus::Rejected => "✗",
        StageStatus::Pending => "…",
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn badges_wrap_their_text() {
        let span = badge("AI Ready", Style::default());
        assert_eq!(span.content, "[AI Ready]");
    }

    #[test]
    fn stage_icons_are_distinct() {
        assert_eq!(stage_icon(StageStatus::Approved), "✓");
        assert_eq!(stage_icon(StageStatus::Rejected), "✗");
        assert_eq!(stage_icon(StageStatus::Pending), "…");
    }
}
