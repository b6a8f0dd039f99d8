use serde::{Deserialize, Serialize};

use crate::domain::rfp::Rfp;

/// One summary tile of the overview grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatCard {
    pub label: String,
    pub value: String,
}

impl StatCard {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Overview panel. Display only; it owns no filter and triggers nothing.
#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    pub stats: Vec<StatCard>,
    pub rfps: Vec<Rfp>,
}

impl DashboardState {
    pub fn new(stats: Vec<StatCard>, rfps: Vec<Rfp>) -> Self {
        Self { stats, rfps }
    }
}
