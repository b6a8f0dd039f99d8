use std::borrow::Cow;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use strum::EnumIter;

use super::filter::Filterable;

/// Audit action families used as the category key of the log view.
pub const AUDIT_FAMILIES: [&str; 4] = ["rfp", "document", "search", "security"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
pub enum AuditAction {
    RfpApproved,
    RfpRejected,
    DocumentUploaded,
    DocumentDeleted,
    AutoDraftGenerated,
    SearchPerformed,
    PermissionViolation,
}

impl AuditAction {
    /// Wire-style code rendered in the log, e.g. `RFP_APPROVED`.
    pub fn code(self) -> &'static str {
        match self {
            AuditAction::RfpApproved => "RFP_APPROVED",
            AuditAction::RfpRejected => "RFP_REJECTED",
            AuditAction::DocumentUploaded => "DOCUMENT_UPLOADED",
            AuditAction::DocumentDeleted => "DOCUMENT_DELETED",
            AuditAction::AutoDraftGenerated => "AUTO_DRAFT_GENERATED",
            AuditAction::SearchPerformed => "SEARCH_PERFORMED",
            AuditAction::PermissionViolation => "PERMISSION_VIOLATION",
        }
    }

    /// Family used for exact-match filtering in the audit panel.
    ///
    /// Draft generation sits outside the four selectable families, so those
    /// entries only surface under the match-all filter.
    pub fn family(self) -> &'static str {
        match self {
            AuditAction::RfpApproved | AuditAction::RfpRejected => "rfp",
            AuditAction::DocumentUploaded | AuditAction::DocumentDeleted => "document",
            AuditAction::AutoDraftGenerated => "draft",
            AuditAction::SearchPerformed => "search",
            AuditAction::PermissionViolation => "security",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Error,
    Success,
}

/// One system activity record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditEntry {
    pub id: u32,
    pub action: AuditAction,
    pub description: String,
    pub user: String,
    /// Free-form actor label; unlike [`crate::domain::Role`] this also
    /// covers "AI", "External" and similar non-reviewer actors.
    pub actor_role: String,
    pub timestamp: NaiveDateTime,
    pub rfp_id: Option<String>,
    /// Display-only key/value pairs, not involved in filtering.
    pub details: Vec<(String, String)>,
    pub severity: Severity,
}

impl Filterable for AuditEntry {
    fn searchable_fields(&self) -> Vec<Cow<'_, str>> {
        vec![
            Cow::Borrowed(self.description.as_str()),
            Cow::Borrowed(self.user.as_str()),
        ]
    }

    fn category_key(&self) -> &str {
        self.action.family()
    }
}
