//! Options for creating a Run.

use crate::WorkspaceId;
use serde::{Deserialize, Serialize};

/// A run-scoped variable override.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunVariable {
    /// Variable name.
    pub key: String,
    /// Variable value as an HCL literal.
    pub value: String,
}

impl RunVariable {
    /// Create a new run variable.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Options submitted when creating a Run.
///
/// Callers fill in everything except `workspace_id`, which the runner
/// overwrites with the workspace it is bound to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunCreateOptions {
    /// Target workspace. Set by the runner.
    pub workspace_id: Option<WorkspaceId>,

    /// Message attached to the run.
    pub message: Option<String>,

    /// Plan a destroy instead of an apply.
    pub is_destroy: Option<bool>,

    /// Apply automatically once the plan is confirmed.
    pub auto_apply: Option<bool>,

    /// Speculative plan that can never be applied.
    pub plan_only: Option<bool>,

    /// Refresh state before planning.
    pub refresh: Option<bool>,

    /// Only refresh state, proposing no resource changes.
    pub refresh_only: Option<bool>,

    /// Save the plan for a later apply.
    pub save_plan: Option<bool>,

    /// Resource addresses to target.
    pub target_addrs: Vec<String>,

    /// Resource addresses to force replacement of.
    pub replace_addrs: Vec<String>,

    /// Run-scoped variable overrides.
    pub variables: Vec<RunVariable>,

    /// Configuration version to plan against; the latest when unset.
    pub configuration_version_id: Option<String>,
}

impl RunCreateOptions {
    /// Create empty options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set the run message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Builder method to request a destroy plan.
    pub fn with_destroy(mut self, is_destroy: bool) -> Self {
        self.is_destroy = Some(is_destroy);
        self
    }

    /// Builder method to set auto-apply.
    pub fn with_auto_apply(mut self, auto_apply: bool) -> Self {
        self.auto_apply = Some(auto_apply);
        self
    }

    /// Builder method to request a plan-only run.
    pub fn with_plan_only(mut self, plan_only: bool) -> Self {
        self.plan_only = Some(plan_only);
        self
    }

    /// Builder method to request a refresh-only run.
    pub fn with_refresh_only(mut self, refresh_only: bool) -> Self {
        self.refresh_only = Some(refresh_only);
        self
    }

    /// Builder method to add a target address.
    pub fn with_target(mut self, addr: impl Into<String>) -> Self {
        self.target_addrs.push(addr.into());
        self
    }

    /// Builder method to add a replace address.
    pub fn with_replace(mut self, addr: impl Into<String>) -> Self {
        self.replace_addrs.push(addr.into());
        self
    }

    /// Builder method to add a variable.
    pub fn with_variable(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.push(RunVariable::new(key, value));
        self
    }

    /// Builder method to pin a configuration version.
    pub fn with_configuration_version(mut self, id: impl Into<String>) -> Self {
        self.configuration_version_id = Some(id.into());
        self
    }
}
