use std::sync::Arc;

use color_eyre::eyre::Result;
use tokio::sync::mpsc::UnboundedSender;

use crate::core::cmd::Cmd;
use crate::core::msg::{draft::DraftMsg, search::SearchMsg, Msg};
use crate::infrastructure::oracle::Oracle;

/// Executes commands produced by the update function.
///
/// Oracle requests become detached tasks that sleep for the oracle's
/// simulated delay and then send a completion message back into the main
/// loop. Tasks are fire-and-forget: the completion carries its request
/// token and the update function discards stale ones, so an overlapping
/// trigger needs no cancellation here.
#[derive(Clone)]
pub struct CmdExecutor {
    msg_tx: UnboundedSender<Msg>,
    oracle: Arc<dyn Oracle>,
}

impl CmdExecutor {
    pub fn new(msg_tx: UnboundedSender<Msg>, oracle: Arc<dyn Oracle>) -> Self {
        Self { msg_tx, oracle }
    }

    pub fn execute_all(&self, commands: Vec<Cmd>) -> Result<()> {
        for cmd in commands {
            self.execute(cmd)?;
        }
        Ok(())
    }

    pub fn execute(&self, cmd: Cmd) -> Result<()> {
        match cmd {
            Cmd::FetchPassages { query, token } => {
                let oracle = Arc::clone(&self.oracle);
                let msg_tx = self.msg_tx.clone();
                tokio::spawn(async move {
                    tokio::time::sleep(oracle.search_delay()).await;
                    let passages = oracle.search(&query);
                    let _ = msg_tx.send(Msg::Search(SearchMsg::ResultsReady {
                        token,
                        query,
                        passages,
                    }));
                });
            }
            Cmd::GenerateDraft { request, token } => {
                let oracle = Arc::clone(&self.oracle);
                let msg_tx = self.msg_tx.clone();
                tokio::spawn(async move {
                    tokio::time::sleep(oracle.generate_delay()).await;
                    let (draft, citations) = oracle.generate(&request);
                    let _ = msg_tx.send(Msg::Draft(DraftMsg::DraftReady {
                        token,
                        draft,
                        citations,
                    }));
                });
            }
            Cmd::LogInfo { message } => log::info!("{message}"),
            Cmd::LogError { message } => log::error!("{message}"),
            Cmd::Batch(commands) => self.execute_all(commands)?,
            Cmd::None => {}
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tokio::sync::mpsc;

    use super::*;
    use crate::domain::draft::{DraftRequest, ProjectType};
    use crate::domain::TokenSource;
    use crate::infrastructure::oracle::DemoOracle;

    #[tokio::test]
    async fn fetch_passages_sends_a_completion_with_the_same_token() {
        let (msg_tx, mut msg_rx) = mpsc::unbounded_channel();
        let executor = CmdExecutor::new(msg_tx, Arc::new(DemoOracle::instant()));
        let mut tokens = TokenSource::default();
        let token = tokens.issue();

        executor
            .execute(Cmd::FetchPassages {
                query: "zero trust".into(),
                token,
            })
            .expect("executes");

        match msg_rx.recv().await {
            Some(Msg::Search(SearchMsg::ResultsReady {
                token: echoed,
                query,
                passages,
            })) => {
                assert_eq!(echoed, token);
                assert_eq!(query, "zero trust");
                assert_eq!(passages.len(), 3);
            }
            other => panic!("expected ResultsReady, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn generate_draft_sends_a_completion_with_the_same_token() {
        let (msg_tx, mut msg_rx) = mpsc::unbounded_channel();
        let executor = CmdExecutor::new(msg_tx, Arc::new(DemoOracle::instant()));
        let mut tokens = TokenSource::default();
        let token = tokens.issue();

        executor
            .execute(Cmd::GenerateDraft {
                request: DraftRequest {
                    client: "MedTech Solutions".into(),
                    project_type: ProjectType::SecurityUpgrade,
                    requirements: "HIPAA-grade security".into(),
                },
                token,
            })
            .expect("executes");

        match msg_rx.recv().await {
            Some(Msg::Draft(DraftMsg::DraftReady {
                token: echoed,
                draft,
                citations,
            })) => {
                assert_eq!(echoed, token);
                assert!(draft.contains("MedTech Solutions"));
                assert_eq!(citations.len(), 3);
            }
            other => panic!("expected DraftReady, got {other:?}"),
        }
    }
}
