//! Run status and terminal-state classification.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse phase of a Run, derived from its status string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RunPhase {
    /// Run is still in progress (queued, planning, applying, or any status
    /// this crate does not recognize).
    Pending,
    /// Run reached a successful terminal status.
    Succeeded,
    /// Run reached a terminal status that did not succeed.
    Failed,
}

/// Statuses after which a run never transitions again.
///
/// Any status missing from this table classifies as [`RunPhase::Pending`].
const TERMINAL_STATUSES: &[(&str, RunPhase)] = &[
    ("canceled", RunPhase::Failed),
    ("errored", RunPhase::Failed),
    ("discarded", RunPhase::Failed),
    ("planned_and_finished", RunPhase::Succeeded),
    ("applied", RunPhase::Succeeded),
];

/// Status of a Run as reported by the control plane.
///
/// The set of statuses is open: the remote may introduce new intermediate
/// values at any time, so the raw string is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RunStatus(String);

impl RunStatus {
    /// Create a status from its wire value.
    pub fn new(status: impl Into<String>) -> Self {
        Self(status.into())
    }

    /// Get the wire value.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Classify this status.
    pub fn phase(&self) -> RunPhase {
        TERMINAL_STATUSES
            .iter()
            .find(|(status, _)| *status == self.0)
            .map(|(_, phase)| *phase)
            .unwrap_or(RunPhase::Pending)
    }

    /// Returns true if the run is in a terminal state.
    pub fn is_terminal(&self) -> bool {
        !matches!(self.phase(), RunPhase::Pending)
    }

    /// Returns true if the run finished successfully.
    pub fn is_success(&self) -> bool {
        self.phase() == RunPhase::Succeeded
    }

    /// Returns true if the run finished without succeeding.
    pub fn is_failure(&self) -> bool {
        self.phase() == RunPhase::Failed
    }
}

impl fmt::Display for RunStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RunStatus {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl From<String> for RunStatus {
    fn from(s: String) -> Self {
        Self(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_statuses() {
        for status in ["canceled", "errored", "discarded"] {
            let status = RunStatus::from(status);
            assert_eq!(status.phase(), RunPhase::Failed, "{status}");
            assert!(status.is_terminal());
            assert!(status.is_failure());
        }
    }

    #[test]
    fn test_success_statuses() {
        for status in ["planned_and_finished", "applied"] {
            let status = RunStatus::from(status);
            assert_eq!(status.phase(), RunPhase::Succeeded, "{status}");
            assert!(status.is_terminal());
            assert!(status.is_success());
        }
    }

    #[test]
    fn test_in_progress_and_unknown_are_pending() {
        for status in [
            "pending",
            "queued",
            "planning",
            "planned",
            "policy_checked",
            "applying",
            "some_future_status",
            "",
        ] {
            let status = RunStatus::from(status);
            assert_eq!(status.phase(), RunPhase::Pending, "{status:?}");
            assert!(!status.is_terminal());
        }
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        assert_eq!(RunStatus::from("APPLIED").phase(), RunPhase::Pending);
    }
}
