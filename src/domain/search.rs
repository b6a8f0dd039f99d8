use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::document::Category;

/// One passage returned by the search oracle, ranked by similarity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Passage {
    pub id: u32,
    /// Source document the passage was lifted from.
    pub document: String,
    pub title: String,
    pub content: String,
    /// Cosine-style score in `0.0..=1.0`, rendered as "95% match".
    pub similarity: f32,
    pub category: Category,
    pub tags: Vec<String>,
    pub citations: Vec<String>,
    pub last_used: NaiveDate,
    pub use_count: u32,
}

impl Passage {
    pub fn similarity_percent(&self) -> u32 {
        (self.similarity.clamp(0.0, 1.0) * 100.0).round() as u32
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn similarity_renders_as_percentage() {
        let passage = Passage {
            id: 1,
            document: "Security Architecture Framework".into(),
            title: "Zero-Trust Security Implementation".into(),
            content: "…".into(),
            similarity: 0.946,
            category: Category::Technical,
            tags: vec![],
            citations: vec![],
            last_used: NaiveDate::from_ymd_opt(2024, 11, 25).expect("valid date"),
            use_count: 15,
        };
        assert_eq!(passage.similarity_percent(), 95);
    }
}
