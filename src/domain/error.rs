use thiserror::Error;

/// Trigger input validation, checked before a request may enter the
/// pending state. Filtering itself never fails; an empty result is a valid
/// outcome, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TriggerError {
    #[error("search query must not be empty")]
    EmptyQuery,
    #[error("client name must not be empty")]
    MissingClient,
    #[error("requirements must not be empty")]
    MissingRequirements,
}
