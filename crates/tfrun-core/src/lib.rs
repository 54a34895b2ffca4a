//! tfrun Core Domain Types
//!
//! This crate contains pure domain types with no dependencies on:
//! - Network/HTTP
//! - Runtime specifics
//!
//! All types here describe runs, workspaces and state versions as the
//! remote control plane reports them.

pub mod error;
pub mod ids;
pub mod options;
pub mod run;
pub mod status;
pub mod workspace;

// Re-export commonly used types
pub use error::CoreError;
pub use ids::{RunId, StateVersionId, WorkspaceId};
pub use options::{RunCreateOptions, RunVariable};
pub use run::{Run, StateVersion};
pub use status::{RunPhase, RunStatus};
pub use workspace::{Workspace, WorkspaceRef};
