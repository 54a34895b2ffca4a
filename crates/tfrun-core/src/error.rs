//! Core domain errors.

use thiserror::Error;

/// Core domain errors for tfrun.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Invalid workspace reference.
    #[error("Invalid workspace reference '{0}': expected <organization>/<workspace>")]
    InvalidWorkspaceRef(String),
}
