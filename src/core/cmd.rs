use serde::{Deserialize, Serialize};

use crate::domain::{draft::DraftRequest, RequestToken};

/// Elm-like command definitions.
///
/// A `Cmd` captures application intent (what side effect to run); the
/// executor in the integration layer decides how to run it. Oracle requests
/// carry the token that the eventual completion message must echo back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Cmd {
    /// Ask the search oracle for passages matching `query`.
    FetchPassages {
        query: String,
        token: RequestToken,
    },
    /// Ask the draft oracle to generate a proposal for `request`.
    GenerateDraft {
        request: DraftRequest,
        token: RequestToken,
    },

    LogInfo {
        message: String,
    },
    LogError {
        message: String,
    },

    /// Execute multiple commands together.
    Batch(Vec<Cmd>),

    /// Do nothing (for testing).
    None,
}

impl Cmd {
    /// Combine multiple commands into one.
    pub fn batch(commands: Vec<Cmd>) -> Cmd {
        match commands.len() {
            0 => Cmd::None,
            1 => commands.into_iter().next().unwrap_or(Cmd::None),
            _ => Cmd::Batch(commands),
        }
    }

    /// Whether the command spawns an asynchronous task.
    pub fn is_async(&self) -> bool {
        match self {
            Cmd::FetchPassages { .. } | Cmd::GenerateDraft { .. } => true,
            Cmd::LogInfo { .. } | Cmd::LogError { .. } | Cmd::None => false,
            Cmd::Batch(commands) => commands.iter().any(Cmd::is_async),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::domain::{draft::ProjectType, TokenSource};

    #[test]
    fn batch_collapses_trivial_cases() {
        assert_eq!(Cmd::batch(vec![]), Cmd::None);

        let single = Cmd::LogInfo {
            message: "one".into(),
        };
        assert_eq!(Cmd::batch(vec![single.clone()]), single);

        let pair = vec![
            Cmd::LogInfo {
                message: "one".into(),
            },
            Cmd::LogError {
                message: "two".into(),
            },
        ];
        assert_eq!(Cmd::batch(pair.clone()), Cmd::Batch(pair));
    }

    #[test]
    fn oracle_commands_are_async() {
        let mut tokens = TokenSource::default();
        assert!(Cmd::FetchPassages {
            query: "cloud".into(),
            token: tokens.issue(),
        }
        .is_async());
        assert!(Cmd::GenerateDraft {
            request: DraftRequest {
                client: "RetailCorp".into(),
                project_type: ProjectType::DataAnalytics,
                requirements: "analytics platform".into(),
            },
            token: tokens.issue(),
        }
        .is_async());
        assert!(!Cmd::LogInfo {
            message: "quiet".into()
        }
        .is_async());
        assert!(Cmd::Batch(vec![
            Cmd::None,
            Cmd::FetchPassages {
                query: "x".into(),
                token: tokens.issue(),
            }
        ])
        .is_async());
    }
}
