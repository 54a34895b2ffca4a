//! The operations the runner needs from the control plane.

use async_trait::async_trait;

use tfrun_core::{Run, RunCreateOptions, RunId, StateVersion, Workspace, WorkspaceRef};

use crate::error::ClientError;

/// Remote operations on runs, workspaces and state versions.
///
/// Each call either returns a fresh snapshot or fails. Implementations must
/// be safe to share between several runners.
#[async_trait]
pub trait RunApi: Send + Sync {
    /// Create a run. `options.workspace_id` must be set.
    async fn create_run(&self, options: &RunCreateOptions) -> Result<Run, ClientError>;

    /// Read the current snapshot of a run.
    async fn read_run(&self, run_id: &RunId) -> Result<Run, ClientError>;

    /// Read the current state version of a workspace.
    async fn read_current_state_version(
        &self,
        workspace: &Workspace,
    ) -> Result<StateVersion, ClientError>;

    /// Look up a workspace by organization and name.
    async fn read_workspace(&self, workspace: &WorkspaceRef) -> Result<Workspace, ClientError>;
}
