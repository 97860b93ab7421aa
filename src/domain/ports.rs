use crate::domain::model::TagCommand;
use crate::utils::error::Result;
use async_trait::async_trait;

/// How a dispatched helper finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchOutcome {
    /// Exit code, `None` when the helper was killed by a signal.
    pub code: Option<i32>,
}

impl DispatchOutcome {
    pub fn exited(code: Option<i32>) -> Self {
        Self { code }
    }

    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

#[async_trait]
pub trait Dispatcher: Send + Sync {
    /// Run the helper and wait for it to finish.
    async fn dispatch(&self, command: &TagCommand) -> Result<DispatchOutcome>;
}
