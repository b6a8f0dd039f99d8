use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// Classification filter: either the match-all sentinel or exactly one
/// category key.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    pub fn matches(&self, key: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(selected) => selected == key,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Only(selected) => selected,
        }
    }

    /// Next filter in the cycle `All -> keys[0] -> ... -> keys[n-1] -> All`.
    pub fn cycled(&self, keys: &[&str]) -> CategoryFilter {
        match self {
            CategoryFilter::All => match keys.first() {
                Some(first) => CategoryFilter::Only((*first).to_string()),
                None => CategoryFilter::All,
            },
            CategoryFilter::Only(selected) => {
                let next = keys
                    .iter()
                    .position(|key| key == selected)
                    .map(|position| position + 1);
                match next.and_then(|position| keys.get(position)) {
                    Some(key) => CategoryFilter::Only((*key).to_string()),
                    None => CategoryFilter::All,
                }
            }
        }
    }
}

/// Transient search/category selection scoped to one panel.
///
/// Created empty when the panel state is built and mutated only by explicit
/// user input. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterState {
    /// Free text, matched case-insensitively. Empty matches everything.
    pub search_term: String,
    pub category: CategoryFilter,
}

impl FilterState {
    pub fn new(search_term: impl Into<String>, category: CategoryFilter) -> Self {
        Self {
            search_term: search_term.into(),
            category,
        }
    }

    /// True when the filter would return any collection unchanged.
    pub fn is_identity(&self) -> bool {
        self.search_term.is_empty() && self.category == CategoryFilter::All
    }
}

/// A record the filtered list view can narrow.
pub trait Filterable {
    /// Strings checked by the text search, in display order.
    fn searchable_fields(&self) -> Vec<Cow<'_, str>>;

    /// Single classification key compared against [`CategoryFilter`].
    fn category_key(&self) -> &str;
}

/// Stable, order-preserving narrowing of `records` by `filter`.
///
/// Pure and free of I/O, so it is safe to re-evaluate on every keystroke.
/// A record survives iff the category matches and, when a search term is
/// present, at least one searchable field contains it as a case-folded
/// substring. Containment is plain `to_lowercase`; no tokenizing, no fuzzy
/// matching, no locale-aware folding.
pub fn visible<'a, T: Filterable>(records: &'a [T], filter: &FilterState) -> Vec<&'a T> {
    let term = filter.search_term.to_lowercase();
    records
        .iter()
        .filter(|record| filter.category.matches(record.category_key()))
        .filter(|record| {
            term.is_empty()
                || record
                    .searchable_fields()
                    .iter()
                    .any(|field| field.to_lowercase().contains(&term))
        })
        .collect()
}

/// Count shown next to the list; always `visible(records, filter).len()`.
pub fn result_count<T: Filterable>(records: &[T], filter: &FilterState) -> usize {
    visible(records, filter).len()
}
