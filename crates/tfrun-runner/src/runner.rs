//! Run creation and the two-phase wait.

use std::sync::Arc;

use tokio::time::{sleep, timeout};
use tracing::{debug, info};

use tfrun_client::RunApi;
use tfrun_core::{Run, RunCreateOptions, RunPhase, StateVersion, Workspace};

use crate::config::RunnerConfig;
use crate::error::RunnerError;

/// Creates runs in one workspace and optionally waits for them to finish.
///
/// The workspace handle is captured at construction and reused for every
/// state version lookup; it is never re-read, so a long-lived runner may
/// hold a stale view of workspace metadata.
pub struct Runner {
    client: Arc<dyn RunApi>,
    config: RunnerConfig,
    workspace: Workspace,
}

impl Runner {
    /// Create a new Runner bound to `workspace`.
    pub fn new(client: Arc<dyn RunApi>, config: RunnerConfig, workspace: Workspace) -> Self {
        Self {
            client,
            config,
            workspace,
        }
    }

    /// The workspace this runner creates runs in.
    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    /// The active configuration.
    pub fn config(&self) -> &RunnerConfig {
        &self.config
    }

    /// Create a run in the bound workspace.
    ///
    /// Any `workspace_id` already present in `options` is replaced. Without
    /// `wait` the freshly created snapshot is returned as is. With `wait`
    /// the returned run has a successful terminal status and the workspace's
    /// current state version has finished processing resources.
    pub async fn create_run(&self, mut options: RunCreateOptions) -> Result<Run, RunnerError> {
        options.workspace_id = Some(self.workspace.id.clone());
        let run = self.client.create_run(&options).await?;

        info!(
            run_id = %run.id,
            workspace_id = %self.workspace.id,
            status = %run.status,
            "Run created"
        );

        if !self.config.wait {
            return Ok(run);
        }

        match self.config.timeout {
            None => self.wait_for_completion(run).await,
            Some(limit) => {
                let run_id = run.id.clone();
                timeout(limit, self.wait_for_completion(run))
                    .await
                    .map_err(|_| RunnerError::Timeout {
                        run_id,
                        timeout: limit,
                    })?
            }
        }
    }

    async fn wait_for_completion(&self, run: Run) -> Result<Run, RunnerError> {
        let run = self.wait_for_run(run).await?;
        self.wait_for_resources().await?;
        Ok(run)
    }

    /// Poll `run` until it reaches a terminal status.
    ///
    /// The given snapshot is classified before any poll, so a run that is
    /// already terminal costs no remote call.
    pub async fn wait_for_run(&self, mut run: Run) -> Result<Run, RunnerError> {
        loop {
            match run.status.phase() {
                RunPhase::Failed => {
                    return Err(RunnerError::RunFailed {
                        run_id: run.id,
                        status: run.status,
                    });
                }
                RunPhase::Succeeded => {
                    info!(run_id = %run.id, status = %run.status, "Run completed");
                    return Ok(run);
                }
                RunPhase::Pending => {
                    debug!(
                        run_id = %run.id,
                        status = %run.status,
                        "Waiting for run to complete, polling..."
                    );
                    sleep(self.config.run_poll_interval).await;
                    run = self.client.read_run(&run.id).await?;
                }
            }
        }
    }

    /// Poll the bound workspace's current state version until its resources
    /// have been processed.
    pub async fn wait_for_resources(&self) -> Result<StateVersion, RunnerError> {
        let mut state_version = self
            .client
            .read_current_state_version(&self.workspace)
            .await?;

        debug!(
            workspace_id = %self.workspace.id,
            state_version_id = %state_version.id,
            "Waiting for workspace to process resources, polling..."
        );

        while !state_version.resources_processed {
            sleep(self.config.resource_poll_interval).await;
            state_version = self
                .client
                .read_current_state_version(&self.workspace)
                .await?;
        }

        Ok(state_version)
    }
}
