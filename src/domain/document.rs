use std::borrow::Cow;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use super::filter::Filterable;

/// Document classification, also used to bucket search passages.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
pub enum Category {
    Technical,
    Legal,
    Sales,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Technical => "Technical",
            Category::Legal => "Legal",
            Category::Sales => "Sales",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[strum(serialize_all = "UPPERCASE")]
pub enum FileType {
    Pdf,
    Doc,
    Docx,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[strum(serialize_all = "lowercase")]
pub enum ProcessingStatus {
    Processed,
    Processing,
    Error,
}

/// One entry of the document library.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: u32,
    pub title: String,
    pub file_type: FileType,
    pub category: Category,
    /// Display size, e.g. "2.4 MB".
    pub size: String,
    pub uploaded_at: NaiveDate,
    pub uploaded_by: String,
    pub status: ProcessingStatus,
    pub tags: Vec<String>,
    /// Whether embeddings were computed, shown as the "AI Ready" badge.
    pub embeddings: bool,
}

impl Filterable for Document {
    fn searchable_fields(&self) -> Vec<Cow<'_, str>> {
        let mut fields = vec![Cow::Borrowed(self.title.as_str())];
        fields.extend(self.tags.iter().map(|tag| Cow::Borrowed(tag.as_str())));
        fields
    }

    fn category_key(&self) -> &str {
        self.category.as_str()
    }
}
