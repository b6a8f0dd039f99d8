use chrono::{NaiveDate, NaiveDateTime};

use crate::core::state::dashboard::StatCard;
use crate::domain::audit::{AuditAction, AuditEntry, Severity};
use crate::domain::document::{Document, FileType, ProcessingStatus};
use crate::domain::rfp::{Priority, Rfp, RfpComment, RfpStatus, StageStatus, WorkflowStage};
use crate::domain::{Category, Role};

/// Data-source collaborator.
///
/// Supplies each panel's record collection whole, at startup. The core
/// treats these collections as opaque inputs and never fetches on its own;
/// swapping this trait for a real store must not touch the core.
pub trait Catalog {
    fn documents(&self) -> Vec<Document>;
    fn audit_entries(&self) -> Vec<AuditEntry>;
    /// RFPs shown on the overview panel.
    fn dashboard_rfps(&self) -> Vec<Rfp>;
    /// RFPs moving through the approval workflow.
    fn review_rfps(&self) -> Vec<Rfp>;
    fn dashboard_stats(&self) -> Vec<StatCard>;
    fn popular_queries(&self) -> Vec<String>;
}

/// The built-in demo library.
#[derive(Debug, Clone, Copy, Default)]
pub struct DemoCatalog;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn timestamp(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    date(year, month, day)
        .and_hms_opt(hour, minute, 0)
        .unwrap_or_default()
}

fn tags(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|tag| (*tag).to_string()).collect()
}

fn details(raw: &[(&str, &str)]) -> Vec<(String, String)> {
    raw.iter()
        .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
        .collect()
}

impl Catalog for DemoCatalog {
    fn documents(&self) -> Vec<Document> {
        vec![
            Document {
                id: 1,
                title: "IBM Cloud Migration Best Practices".into(),
                file_type: FileType::Pdf,
                category: Category::Technical,
                size: "2.4 MB".into(),
                uploaded_at: date(2024, 12, 15),
                uploaded_by: "John Smith".into(),
                status: ProcessingStatus::Processed,
                tags: tags(&["cloud", "migration", "best-practices"]),
                embeddings: true,
            },
            Document {
                id: 2,
                title: "Financial Services Compliance Guide".into(),
                file_type: FileType::Doc,
                category: Category::Legal,
                size: "1.8 MB".into(),
                uploaded_at: date(2024, 12, 10),
                uploaded_by: "Sarah Johnson".into(),
                status: ProcessingStatus::Processing,
                tags: tags(&["compliance", "financial", "regulations"]),
                embeddings: false,
            },
            Document {
                id: 3,
                title: "AI Analytics Case Study - RetailCorp".into(),
                file_type: FileType::Pdf,
                category: Category::Sales,
                size: "3.2 MB".into(),
                uploaded_at: date(2024, 12, 8),
                uploaded_by: "Mike Davis".into(),
                status: ProcessingStatus::Processed,
                tags: tags(&["ai", "analytics", "case-study", "retail"]),
                embeddings: true,
            },
            Document {
                id: 4,
                title: "Security Architecture Framework".into(),
                file_type: FileType::Pdf,
                category: Category::Technical,
                size: "4.1 MB".into(),
                uploaded_at: date(2024, 12, 5),
                uploaded_by: "Lisa Chen".into(),
                status: ProcessingStatus::Processed,
                tags: tags(&["security", "architecture", "framework"]),
                embeddings: true,
            },
        ]
    }

    fn audit_entries(&self) -> Vec<AuditEntry> {
        vec![
            AuditEntry {
                id: 1,
                action: AuditAction::RfpApproved,
                description: "Global Bank Digital Transformation RFP approved by Legal team"
                    .into(),
                user: "Mike Davis".into(),
                actor_role: "Legal".into(),
                timestamp: timestamp(2024, 12, 15, 14, 32),
                rfp_id: Some("RFP-2024-001".into()),
                details: details(&[
                    ("previousStatus", "pending-legal-review"),
                    ("newStatus", "approved"),
                ]),
                severity: Severity::Info,
            },
            AuditEntry {
                id: 2,
                action: AuditAction::DocumentUploaded,
                description: "New case study uploaded: AI Analytics for Financial Services"
                    .into(),
                user: "Sarah Johnson".into(),
                actor_role: "Technical".into(),
                timestamp: timestamp(2024, 12, 15, 11, 45),
                rfp_id: None,
                details: details(&[
                    ("fileName", "AI-Analytics-Financial-Case-Study.pdf"),
                    ("fileSize", "3.2 MB"),
                    ("processed", "true"),
                ]),
                severity: Severity::Info,
            },
            AuditEntry {
                id: 3,
                action: AuditAction::RfpRejected,
                description: "Healthcare Cloud Migration RFP rejected due to compliance issues"
                    .into(),
                user: "Mike Davis".into(),
                actor_role: "Legal".into(),
                timestamp: timestamp(2024, 12, 14, 16, 20),
                rfp_id: Some("RFP-2024-002".into()),
                details: details(&[
                    ("reason", "HIPAA compliance requirements not adequately addressed"),
                    ("feedback", "Requires additional security certifications"),
                ]),
                severity: Severity::Warning,
            },
            AuditEntry {
                id: 4,
                action: AuditAction::AutoDraftGenerated,
                description: "AI draft generated for RetailCorp Analytics Platform proposal"
                    .into(),
                user: "System".into(),
                actor_role: "AI".into(),
                timestamp: timestamp(2024, 12, 14, 9, 15),
                rfp_id: Some("RFP-2024-003".into()),
                details: details(&[
                    ("sourceDocs", "5"),
                    ("confidence", "0.92"),
                    ("citationsUsed", "12"),
                ]),
                severity: Severity::Info,
            },
            AuditEntry {
                id: 5,
                action: AuditAction::SearchPerformed,
                description:
                    "Semantic search: \"cloud security frameworks for financial institutions\""
                        .into(),
                user: "John Smith".into(),
                actor_role: "Sales".into(),
                timestamp: timestamp(2024, 12, 13, 13, 28),
                rfp_id: None,
                details: details(&[
                    ("query", "cloud security frameworks for financial institutions"),
                    ("resultsFound", "8"),
                    ("documentsAccessed", "3"),
                ]),
                severity: Severity::Info,
            },
            AuditEntry {
                id: 6,
                action: AuditAction::PermissionViolation,
                description: "Attempted unauthorized access to legal documents".into(),
                user: "Unknown User".into(),
                actor_role: "External".into(),
                timestamp: timestamp(2024, 12, 13, 2, 45),
                rfp_id: None,
                details: details(&[
                    ("ipAddress", "192.168.1.100"),
                    ("attemptedAction", "download_legal_document"),
                    ("blocked", "true"),
                ]),
                severity: Severity::Error,
            },
        ]
    }

    fn dashboard_rfps(&self) -> Vec<Rfp> {
        vec![
            Rfp {
                id: "RFP-2024-001".into(),
                title: "Global Bank Digital Transformation".into(),
                client: "First National Bank".into(),
                status: RfpStatus::InProgress,
                progress: 65,
                deadline: date(2025, 1, 15),
                priority: Priority::High,
                team: tags(&["Sales", "Technical", "Legal"]),
                workflow: vec![],
                comments: vec![],
            },
            Rfp {
                id: "RFP-2024-002".into(),
                title: "Cloud Migration for Healthcare".into(),
                client: "MedTech Solutions".into(),
                status: RfpStatus::Review,
                progress: 85,
                deadline: date(2025, 1, 10),
                priority: Priority::Urgent,
                team: tags(&["Sales", "Technical"]),
                workflow: vec![],
                comments: vec![],
            },
            Rfp {
                id: "RFP-2024-003".into(),
                title: "AI Analytics Platform".into(),
                client: "RetailCorp".into(),
                status: RfpStatus::Draft,
                progress: 30,
                deadline: date(2025, 1, 20),
                priority: Priority::Medium,
                team: tags(&["Sales", "Technical"]),
                workflow: vec![],
                comments: vec![],
            },
        ]
    }

    fn review_rfps(&self) -> Vec<Rfp> {
        vec![
            Rfp {
                id: "RFP-2024-001".into(),
                title: "Global Bank Digital Transformation".into(),
                client: "First National Bank".into(),
                status: RfpStatus::PendingReview,
                progress: 75,
                deadline: date(2025, 1, 15),
                priority: Priority::High,
                team: tags(&["Sales", "Technical", "Legal"]),
                workflow: vec![
                    WorkflowStage {
                        role: Role::Sales,
                        status: StageStatus::Approved,
                        reviewer: Some("John Smith".into()),
                        decided_on: Some(date(2024, 12, 10)),
                        comment: Some("Technical content looks good, pricing approved.".into()),
                    },
                    WorkflowStage {
                        role: Role::Technical,
                        status: StageStatus::Approved,
                        reviewer: Some("Sarah Johnson".into()),
                        decided_on: Some(date(2024, 12, 12)),
                        comment: Some("Architecture and timelines are accurate.".into()),
                    },
                    WorkflowStage::pending(Role::Legal),
                ],
                comments: vec![
                    RfpComment {
                        user: "John Smith".into(),
                        role_label: "Sales".into(),
                        posted_on: date(2024, 12, 10),
                        body: "Updated pricing based on competitive analysis.".into(),
                    },
                    RfpComment {
                        user: "Sarah Johnson".into(),
                        role_label: "Technical".into(),
                        posted_on: date(2024, 12, 12),
                        body: "Added security compliance details for banking regulations.".into(),
                    },
                ],
            },
            Rfp {
                id: "RFP-2024-004".into(),
                title: "Cloud Migration for Healthcare".into(),
                client: "MedTech Solutions".into(),
                status: RfpStatus::Approved,
                progress: 100,
                deadline: date(2025, 1, 10),
                priority: Priority::Urgent,
                team: tags(&["Sales", "Technical", "Legal"]),
                workflow: vec![
                    WorkflowStage {
                        role: Role::Sales,
                        status: StageStatus::Approved,
                        reviewer: Some("John Smith".into()),
                        decided_on: Some(date(2024, 12, 8)),
                        comment: Some("Competitive pricing strategy approved.".into()),
                    },
                    WorkflowStage {
                        role: Role::Technical,
                        status: StageStatus::Approved,
                        reviewer: Some("Lisa Chen".into()),
                        decided_on: Some(date(2024, 12, 9)),
                        comment: Some("HIPAA compliance verified.".into()),
                    },
                    WorkflowStage {
                        role: Role::Legal,
                        status: StageStatus::Approved,
                        reviewer: Some("Mike Davis".into()),
                        decided_on: Some(date(2024, 12, 11)),
                        comment: Some("All regulatory requirements addressed.".into()),
                    },
                ],
                comments: vec![
                    RfpComment {
                        user: "Lisa Chen".into(),
                        role_label: "Technical".into(),
                        posted_on: date(2024, 12, 9),
                        body: "Added specific HIPAA compliance certifications.".into(),
                    },
                    RfpComment {
                        user: "Mike Davis".into(),
                        role_label: "Legal".into(),
                        posted_on: date(2024, 12, 11),
                        body: "Contract terms are favorable and compliant.".into(),
                    },
                ],
            },
        ]
    }

    fn dashboard_stats(&self) -> Vec<StatCard> {
        vec![
            StatCard::new("Active RFPs", "12"),
            StatCard::new("Pending Reviews", "5"),
            StatCard::new("Completed This Month", "8"),
            StatCard::new("Win Rate", "74%"),
        ]
    }

    fn popular_queries(&self) -> Vec<String> {
        [
            "Cloud migration case studies",
            "AI implementation best practices",
            "Security compliance frameworks",
            "Digital transformation ROI",
            "Financial services solutions",
        ]
        .into_iter()
        .map(str::to_string)
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn collections_have_unique_ids() {
        let catalog = DemoCatalog;

        let mut document_ids: Vec<u32> =
            catalog.documents().iter().map(|document| document.id).collect();
        document_ids.sort_unstable();
        document_ids.dedup();
        assert_eq!(document_ids.len(), catalog.documents().len());

        let mut entry_ids: Vec<u32> = catalog
            .audit_entries()
            .iter()
            .map(|entry| entry.id)
            .collect();
        entry_ids.sort_unstable();
        entry_ids.dedup();
        assert_eq!(entry_ids.len(), catalog.audit_entries().len());
    }

    #[test]
    fn document_categories_match_the_demo_script() {
        let categories: Vec<Category> = DemoCatalog
            .documents()
            .iter()
            .map(|document| document.category)
            .collect();
        assert_eq!(
            categories,
            vec![
                Category::Technical,
                Category::Legal,
                Category::Sales,
                Category::Technical,
            ]
        );
    }

    #[test]
    fn review_rfps_have_one_open_legal_stage() {
        let rfps = DemoCatalog.review_rfps();
        assert_eq!(rfps[0].actionable_stage(Role::Legal), Some(2));
        assert_eq!(rfps[1].actionable_stage(Role::Legal), None);
    }
}
