//! Error types for the runner.

use std::time::Duration;

use thiserror::Error;

use tfrun_client::ClientError;
use tfrun_core::{RunId, RunStatus};

/// Errors returned by [`Runner::create_run`](crate::Runner::create_run).
#[derive(Debug, Error)]
pub enum RunnerError {
    /// A call to the control plane failed. Passed through unchanged.
    #[error(transparent)]
    Client(#[from] ClientError),

    /// The run reached a terminal status that is not a success.
    #[error("run {run_id} exited unexpectedly with status: {status}")]
    RunFailed { run_id: RunId, status: RunStatus },

    /// The configured deadline passed before the run and its state finished.
    #[error("timed out after {timeout:?} waiting for run {run_id}")]
    Timeout { run_id: RunId, timeout: Duration },
}
