use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Reviewer role selected in the shell and handed read-only to every panel.
///
/// Panels never mutate the role; they only evaluate capability gates
/// against it.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
    ValueEnum,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Role {
    #[default]
    Sales,
    Legal,
    Technical,
}

impl Role {
    /// Capability gate: an action requiring `self` is available iff the
    /// active role matches. Re-evaluated whenever the active role changes.
    pub fn permits(self, current: Role) -> bool {
        self == current
    }

    pub fn next(self) -> Self {
        match self {
            Role::Sales => Role::Legal,
            Role::Legal => Role::Technical,
            Role::Technical => Role::Sales,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Role::Sales => "Sales",
            Role::Legal => "Legal",
            Role::Technical => "Technical",
        }
    }
}
