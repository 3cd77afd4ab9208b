//! JSON serialization of reports.

use crate::report::ScalingReport;

/// Serialize a report to compact JSON.
pub fn to_json(report: &ScalingReport) -> serde_json::Result<String> {
    serde_json::to_string(report)
}

/// Serialize a report to pretty-printed JSON.
pub fn to_json_pretty(report: &ScalingReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}
