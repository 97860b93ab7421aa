use crate::core::command::build_command;
use crate::domain::model::{ImageReference, TagCommand};
use crate::domain::ports::{DispatchOutcome, Dispatcher};
use crate::utils::error::{PublishError, Result};
use std::io::Write;
use std::path::PathBuf;

/// What to do with the helper's result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DispatchPolicy {
    /// Log helper failures and carry on; the wrapper still succeeds.
    #[default]
    Ignore,
    /// Turn a failed or unstartable helper into an error.
    Propagate,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishReport {
    pub command: TagCommand,
    /// `None` for dry runs and for spawn failures under [`DispatchPolicy::Ignore`].
    pub outcome: Option<DispatchOutcome>,
}

pub struct PublishEngine<D: Dispatcher> {
    dispatcher: D,
    helper_dir: PathBuf,
    policy: DispatchPolicy,
    dry_run: bool,
}

impl<D: Dispatcher> PublishEngine<D> {
    pub fn new(dispatcher: D, helper_dir: PathBuf) -> Self {
        Self {
            dispatcher,
            helper_dir,
            policy: DispatchPolicy::default(),
            dry_run: false,
        }
    }

    pub fn with_policy(mut self, policy: DispatchPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Echo the helper command line to `out`, then run it.
    pub async fn run<W: Write>(&self, image: &ImageReference, out: &mut W) -> Result<PublishReport> {
        let command = build_command(&self.helper_dir, image);

        writeln!(out, "{}", command)?;
        out.flush()?;

        if self.dry_run {
            tracing::info!("Dry run, not starting {}", command.helper().display());
            return Ok(PublishReport {
                command,
                outcome: None,
            });
        }

        tracing::debug!("Dispatching {}", command);

        let outcome = match self.dispatcher.dispatch(&command).await {
            Ok(outcome) => outcome,
            Err(e) if self.policy == DispatchPolicy::Ignore => {
                tracing::warn!("Helper could not be started: {}", e);
                return Ok(PublishReport {
                    command,
                    outcome: None,
                });
            }
            Err(e) => return Err(e),
        };

        if !outcome.success() {
            match self.policy {
                DispatchPolicy::Ignore => {
                    tracing::warn!("Helper finished with {:?}, ignoring", outcome.code);
                }
                DispatchPolicy::Propagate => {
                    return Err(PublishError::HelperFailed { code: outcome.code });
                }
            }
        } else {
            tracing::info!("Published {}", image);
        }

        Ok(PublishReport {
            command,
            outcome: Some(outcome),
        })
    }
}
