//! Rendering runs for the terminal.

use chrono::{DateTime, Utc};
use serde_json::Value;

use tfrun_core::Run;

/// Human-readable multi-line summary of a run.
pub fn format_run(run: &Run) -> String {
    let mut out = String::new();
    out.push_str(&format!("  ID:         {}\n", run.id));
    out.push_str(&format!("  Status:     {}\n", run.status));

    if let Some(message) = run.attribute("message").and_then(Value::as_str) {
        out.push_str(&format!("  Message:    {message}\n"));
    }
    if let Some(created) = run.attribute("created-at").and_then(Value::as_str) {
        out.push_str(&format!("  Created:    {}\n", format_timestamp(created)));
    }
    if let Some(has_changes) = run.attribute("has-changes").and_then(Value::as_bool) {
        out.push_str(&format!("  Changes:    {}\n", if has_changes { "yes" } else { "no" }));
    }
    out
}

/// Normalize an RFC 3339 timestamp to UTC; unparseable input is echoed back.
fn format_timestamp(raw: &str) -> String {
    DateTime::parse_from_rfc3339(raw)
        .map(|t| {
            t.with_timezone(&Utc)
                .format("%Y-%m-%d %H:%M:%S UTC")
                .to_string()
        })
        .unwrap_or_else(|_| raw.to_string())
}
