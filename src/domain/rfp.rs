use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum::Display;

use super::role::Role;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[strum(serialize_all = "kebab-case")]
pub enum Priority {
    Urgent,
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[strum(serialize_all = "kebab-case")]
pub enum RfpStatus {
    Draft,
    InProgress,
    Review,
    PendingReview,
    Approved,
    Rejected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[strum(serialize_all = "lowercase")]
pub enum StageStatus {
    Pending,
    Approved,
    Rejected,
}

/// One per-role step of the approval chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowStage {
    pub role: Role,
    pub status: StageStatus,
    pub reviewer: Option<String>,
    pub decided_on: Option<NaiveDate>,
    pub comment: Option<String>,
}

impl WorkflowStage {
    pub fn pending(role: Role) -> Self {
        Self {
            role,
            status: StageStatus::Pending,
            reviewer: None,
            decided_on: None,
            comment: None,
        }
    }

    /// The approve/reject buttons are exposed only on a pending stage whose
    /// required role matches the active role.
    pub fn actionable_by(&self, current: Role) -> bool {
        self.status == StageStatus::Pending && self.role.permits(current)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RfpComment {
    pub user: String,
    pub role_label: String,
    pub posted_on: NaiveDate,
    pub body: String,
}

/// A proposal moving through the approval workflow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rfp {
    pub id: String,
    pub title: String,
    pub client: String,
    pub status: RfpStatus,
    /// Completion percentage shown as a gauge.
    pub progress: u16,
    pub deadline: NaiveDate,
    pub priority: Priority,
    pub team: Vec<String>,
    pub workflow: Vec<WorkflowStage>,
    pub comments: Vec<RfpComment>,
}

impl Rfp {
    /// "Legal Review" while a stage is open, "Completed" once none is.
    pub fn current_stage_label(&self) -> String {
        self.workflow
            .iter()
            .find(|stage| stage.status == StageStatus::Pending)
            .map(|stage| format!("{} Review", stage.role.label()))
            .unwrap_or_else(|| "Completed".to_string())
    }

    /// Index of the first stage the active role may decide, if any.
    pub fn actionable_stage(&self, current: Role) -> Option<usize> {
        self.workflow
            .iter()
            .position(|stage| stage.actionable_by(current))
    }

    /// Re-derive progress and overall status after a stage decision.
    pub fn recompute(&mut self) {
        let total = self.workflow.len().max(1);
        let approved = self
            .workflow
            .iter()
            .filter(|stage| stage.status == StageStatus::Approved)
            .count();
        self.progress = (approved * 100 / total) as u16;

        if self.workflow.iter().any(|stage| stage.status == StageStatus::Rejected) {
            self.status = RfpStatus::Rejected;
        } else if approved == self.workflow.len() {
            self.status = RfpStatus::Approved;
        } else {
            self.status = RfpStatus::PendingReview;
        }
    }
}
