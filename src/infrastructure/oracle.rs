use std::time::Duration;

use chrono::NaiveDate;

use crate::config::DemoConfig;
use crate::domain::draft::{Citation, DraftRequest};
use crate::domain::search::Passage;
use crate::domain::Category;

/// Generation/search trigger collaborator.
///
/// Supplies the replacement result set (or draft) delivered after the
/// simulated delay. The core only manages the pending-state transition and
/// the display swap; where the content comes from is this trait's problem,
/// which is what makes the demo implementation honest to swap out.
pub trait Oracle: Send + Sync {
    fn search(&self, query: &str) -> Vec<Passage>;
    fn generate(&self, request: &DraftRequest) -> (String, Vec<Citation>);
    fn search_delay(&self) -> Duration;
    fn generate_delay(&self) -> Duration;
}

/// Canned answers with a fixed think-time, standing in for retrieval and
/// generation backends.
#[derive(Debug, Clone)]
pub struct DemoOracle {
    search_delay: Duration,
    generate_delay: Duration,
}

impl Default for DemoOracle {
    fn default() -> Self {
        Self::from_config(&DemoConfig::default())
    }
}

impl DemoOracle {
    pub fn from_config(demo: &DemoConfig) -> Self {
        Self {
            search_delay: Duration::from_millis(demo.search_delay_ms),
            generate_delay: Duration::from_millis(demo.generate_delay_ms),
        }
    }

    /// Zero-delay variant for tests.
    pub fn instant() -> Self {
        Self {
            search_delay: Duration::ZERO,
            generate_delay: Duration::ZERO,
        }
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn demo_tags(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|tag| (*tag).to_string()).collect()
}

impl Oracle for DemoOracle {
    fn search(&self, _query: &str) -> Vec<Passage> {
        vec![
            Passage {
                id: 1,
                document: "IBM Cloud Migration Best Practices".into(),
                title: "Cloud Migration Strategy for Financial Services".into(),
                content: "When migrating legacy banking systems to IBM Cloud, it's crucial to \
                          implement a phased approach that prioritizes security and regulatory \
                          compliance. Our proven methodology includes comprehensive risk \
                          assessment, data classification, and incremental migration phases..."
                    .into(),
                similarity: 0.95,
                category: Category::Technical,
                tags: demo_tags(&["cloud migration", "financial services", "security"]),
                citations: demo_tags(&["Section 3.2", "Appendix B"]),
                last_used: date(2024, 12, 1),
                use_count: 12,
            },
            Passage {
                id: 2,
                document: "AI Analytics Case Study - RetailCorp".into(),
                title: "AI-Powered Customer Analytics Implementation".into(),
                content: "RetailCorp achieved a 34% increase in customer engagement through our \
                          AI analytics platform. The solution leverages machine learning \
                          algorithms to analyze customer behavior patterns and predict \
                          purchasing intent in real-time..."
                    .into(),
                similarity: 0.89,
                category: Category::Sales,
                tags: demo_tags(&["ai analytics", "retail", "customer engagement"]),
                citations: demo_tags(&["Case Study Overview", "Results Section"]),
                last_used: date(2024, 11, 28),
                use_count: 8,
            },
            Passage {
                id: 3,
                document: "Security Architecture Framework".into(),
                title: "Zero-Trust Security Implementation".into(),
                content: "Our zero-trust security framework provides comprehensive protection \
                          for enterprise environments. The architecture includes identity \
                          verification, device authentication, and continuous monitoring to \
                          ensure security at every access point..."
                    .into(),
                similarity: 0.82,
                category: Category::Technical,
                tags: demo_tags(&["security", "zero-trust", "architecture"]),
                citations: demo_tags(&["Framework Design", "Implementation Guide"]),
                last_used: date(2024, 11, 25),
                use_count: 15,
            },
        ]
    }

    fn generate(&self, request: &DraftRequest) -> (String, Vec<Citation>) {
        let client = if request.client.trim().is_empty() {
            "Your Organization".to_string()
        } else {
            request.client.trim().to_string()
        };
        let draft = format!(
            "\
# {} and AI Analytics Solution for {client}

## Executive Summary

IBM proposes a comprehensive cloud migration and AI analytics solution designed to transform \
your organization's digital infrastructure while ensuring security, compliance, and \
operational excellence. Our proven methodology has successfully delivered similar \
transformations for leading financial institutions.

## Technical Approach

### Phase 1: Assessment and Planning (Weeks 1-4)
- Comprehensive infrastructure assessment using IBM Cloud Transformation Advisor
- Risk analysis and mitigation planning with focus on regulatory compliance
- Custom migration roadmap development

### Phase 2: Cloud Migration (Weeks 5-16)
- Phased migration approach minimizing business disruption
- Implementation of IBM Cloud security frameworks
- Real-time monitoring and validation throughout the process

### Phase 3: AI Analytics Implementation (Weeks 12-20)
- Deployment of IBM Watson Studio and AI services
- Custom analytics models for your specific use cases
- Integration with existing business processes

## Expected Benefits
- 34% increase in operational efficiency (based on similar implementations)
- 99.9% uptime guarantee with IBM Cloud infrastructure
- ROI of 250% within 18 months

## Investment Summary
Total project investment: $2.4M over 20 weeks
Monthly subscription: $45,000 for cloud services and support

---
This proposal is generated using AI-powered insights from similar successful \
implementations. All claims are supported by documented case studies and technical \
specifications.",
            request.project_type
        );

        let citations = vec![
            Citation {
                id: 1,
                document: "IBM Cloud Migration Best Practices".into(),
                section: "Section 3.2 - Financial Services Migration".into(),
                confidence: 0.94,
                used: true,
            },
            Citation {
                id: 2,
                document: "AI Analytics Case Study - RetailCorp".into(),
                section: "Implementation Timeline".into(),
                confidence: 0.87,
                used: true,
            },
            Citation {
                id: 3,
                document: "Security Architecture Framework".into(),
                section: "Compliance Requirements".into(),
                confidence: 0.82,
                used: false,
            },
        ];

        (draft, citations)
    }

    fn search_delay(&self) -> Duration {
        self.search_delay
    }

    fn generate_delay(&self) -> Duration {
        self.generate_delay
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::domain::draft::ProjectType;

    #[test]
    fn search_results_are_ranked_by_similarity() {
        let passages = DemoOracle::default().search("anything");
        assert_eq!(passages.len(), 3);
        assert!(passages
            .windows(2)
            .all(|pair| pair[0].similarity >= pair[1].similarity));
    }

    #[test]
    fn draft_names_the_client_and_project_type() {
        let oracle = DemoOracle::instant();
        let request = DraftRequest {
            client: "First National Bank".into(),
            project_type: ProjectType::CloudMigration,
            requirements: "migrate the core ledger".into(),
        };
        let (draft, citations) = oracle.generate(&request);
        assert!(draft.contains("First National Bank"));
        assert!(draft.starts_with("# Cloud Migration"));
        assert_eq!(citations.len(), 3);
        assert_eq!(
            citations.iter().filter(|citation| citation.used).count(),
            2
        );
    }

    #[test]
    fn delays_come_from_the_demo_config() {
        let oracle = DemoOracle::from_config(&DemoConfig {
            search_delay_ms: 10,
            generate_delay_ms: 20,
        });
        assert_eq!(oracle.search_delay(), Duration::from_millis(10));
        assert_eq!(oracle.generate_delay(), Duration::from_millis(20));
        assert_eq!(DemoOracle::instant().search_delay(), Duration::ZERO);
    }
}
