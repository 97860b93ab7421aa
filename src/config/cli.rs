use crate::domain::model::TagCommand;
use crate::domain::ports::{DispatchOutcome, Dispatcher};
use crate::utils::error::{PublishError, Result};
use async_trait::async_trait;
use std::process::Stdio;
use tokio::process::Command;

/// Runs the helper as a child process sharing this process's environment and stdio.
#[derive(Debug, Clone, Default)]
pub struct ProcessDispatcher;

impl ProcessDispatcher {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Dispatcher for ProcessDispatcher {
    async fn dispatch(&self, command: &TagCommand) -> Result<DispatchOutcome> {
        let status = Command::new(command.helper())
            .args(command.args())
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .map_err(|source| PublishError::Spawn {
                helper: command.helper().to_path_buf(),
                source,
            })?;

        tracing::debug!("{} exited with {}", command.helper().display(), status);

        Ok(DispatchOutcome::exited(status.code()))
    }
}
