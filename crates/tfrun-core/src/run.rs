//! Run and StateVersion snapshots.

use crate::{RunId, RunStatus, StateVersionId};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A snapshot of a Run as last read from the control plane.
///
/// Snapshots are never mutated in place; each poll yields a fresh one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Run {
    /// Run identifier.
    pub id: RunId,

    /// Current run status.
    pub status: RunStatus,

    /// Remaining attributes, passed through untouched.
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub attributes: Map<String, Value>,
}

impl Run {
    /// Create a new Run snapshot.
    pub fn new(id: impl Into<RunId>, status: impl Into<RunStatus>) -> Self {
        Self {
            id: id.into(),
            status: status.into(),
            attributes: Map::new(),
        }
    }

    /// Builder method to attach an extra attribute.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Look up an extra attribute by its wire name.
    pub fn attribute(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }
}

/// A snapshot of a workspace's state version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateVersion {
    /// State version identifier.
    pub id: StateVersionId,

    /// Whether post-processing of the state's resources has finished.
    pub resources_processed: bool,
}

impl StateVersion {
    /// Create a new StateVersion snapshot.
    pub fn new(id: impl Into<StateVersionId>, resources_processed: bool) -> Self {
        Self {
            id: id.into(),
            resources_processed,
        }
    }
}
