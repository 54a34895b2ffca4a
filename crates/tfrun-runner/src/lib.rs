//! Run driver for the remote control plane.
//!
//! [`Runner`] creates a run in its bound workspace and, when configured to
//! wait, blocks until the run reaches a terminal status and the workspace's
//! current state version has finished processing its resources.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use tfrun_client::{ClientConfig, RunApi, TfeClient};
//! use tfrun_core::{RunCreateOptions, WorkspaceRef};
//! use tfrun_runner::{Runner, RunnerConfig};
//!
//! async fn apply() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Arc::new(TfeClient::new(&ClientConfig::from_env()?));
//!     let workspace = client
//!         .read_workspace(&WorkspaceRef::new("acme", "networking-prod"))
//!         .await?;
//!
//!     let runner = Runner::new(client, RunnerConfig::default().with_wait(true), workspace);
//!     let run = runner
//!         .create_run(RunCreateOptions::new().with_message("Triggered from CI"))
//!         .await?;
//!
//!     println!("Run {} finished with status {}", run.id, run.status);
//!     Ok(())
//! }
//! ```

mod config;
mod error;
mod runner;

pub use config::{RunnerConfig, DEFAULT_RESOURCE_POLL_INTERVAL, DEFAULT_RUN_POLL_INTERVAL};
pub use error::RunnerError;
pub use runner::Runner;
