//! Workspace handle and reference parsing.

use crate::{CoreError, WorkspaceId};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A workspace as read from the control plane.
///
/// Treated as a read-only handle once obtained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workspace {
    /// Workspace identifier.
    pub id: WorkspaceId,

    /// Workspace name.
    pub name: String,

    /// Owning organization name.
    pub organization: String,
}

impl Workspace {
    /// Create a new Workspace handle.
    pub fn new(
        id: impl Into<WorkspaceId>,
        name: impl Into<String>,
        organization: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            organization: organization.into(),
        }
    }
}

/// A workspace addressed by organization and name, as users type it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceRef {
    /// Organization name.
    pub organization: String,
    /// Workspace name.
    pub name: String,
}

impl WorkspaceRef {
    /// Create a reference from its two parts.
    pub fn new(organization: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            organization: organization.into(),
            name: name.into(),
        }
    }
}

impl FromStr for WorkspaceRef {
    type Err = CoreError;

    /// Parse `<organization>/<workspace>`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('/') {
            Some((org, name)) if is_valid_name(org) && is_valid_name(name) => {
                Ok(Self::new(org, name))
            }
            _ => Err(CoreError::InvalidWorkspaceRef(s.to_string())),
        }
    }
}

/// Organization and workspace names allow only `[A-Za-z0-9_-]`.
fn is_valid_name(s: &str) -> bool {
    !s.is_empty()
        && s
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

impl fmt::Display for WorkspaceRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.organization, self.name)
    }
}
