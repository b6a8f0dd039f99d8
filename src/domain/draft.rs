use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use super::error::TriggerError;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumIter,
)]
pub enum ProjectType {
    #[default]
    #[strum(serialize = "Cloud Migration")]
    CloudMigration,
    #[strum(serialize = "AI Implementation")]
    AiImplementation,
    #[strum(serialize = "Digital Transformation")]
    DigitalTransformation,
    #[strum(serialize = "Security Upgrade")]
    SecurityUpgrade,
    #[strum(serialize = "Data Analytics")]
    DataAnalytics,
}

impl ProjectType {
    pub fn next(self) -> Self {
        match self {
            ProjectType::CloudMigration => ProjectType::AiImplementation,
            ProjectType::AiImplementation => ProjectType::DigitalTransformation,
            ProjectType::DigitalTransformation => ProjectType::SecurityUpgrade,
            ProjectType::SecurityUpgrade => ProjectType::DataAnalytics,
            ProjectType::DataAnalytics => ProjectType::CloudMigration,
        }
    }
}

/// Inputs handed to the draft oracle when generation is triggered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftRequest {
    pub client: String,
    pub project_type: ProjectType,
    pub requirements: String,
}

impl DraftRequest {
    /// Rejects blank inputs before the request may enter the pending state.
    pub fn validate(&self) -> Result<(), TriggerError> {
        if self.client.trim().is_empty() {
            return Err(TriggerError::MissingClient);
        }
        if self.requirements.trim().is_empty() {
            return Err(TriggerError::MissingRequirements);
        }
        Ok(())
    }
}

/// One retrieval source surfaced next to a generated draft.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Citation {
    pub id: u32,
    pub document: String,
    pub section: String,
    /// Retrieval confidence in `0.0..=1.0`.
    pub confidence: f32,
    /// Whether the passage actually made it into the draft.
    pub used: bool,
}

impl Citation {
    pub fn confidence_percent(&self) -> u32 {
        (self.confidence.clamp(0.0, 1.0) * 100.0).round() as u32
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("", "needs", Err(TriggerError::MissingClient))]
    #[case("   ", "needs", Err(TriggerError::MissingClient))]
    #[case("First National Bank", "", Err(TriggerError::MissingRequirements))]
    #[case("First National Bank", "\n\t ", Err(TriggerError::MissingRequirements))]
    #[case("First National Bank", "migrate the core ledger", Ok(()))]
    fn validation_rejects_blank_inputs(
        #[case] client: &str,
        #[case] requirements: &str,
        #[case] expected: Result<(), TriggerError>,
    ) {
        let request = DraftRequest {
            client: client.into(),
            project_type: ProjectType::CloudMigration,
            requirements: requirements.into(),
        };
        assert_eq!(request.validate(), expected);
    }

    #[test]
    fn project_types_cycle() {
        let mut kind = ProjectType::CloudMigration;
        for _ in 0..5 {
            kind = kind.next();
        }
        assert_eq!(kind, ProjectType::CloudMigration);
    }
}
