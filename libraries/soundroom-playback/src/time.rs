//! Elapsed/duration display helpers

use std::time::Duration;

/// Render a duration as `m:ss`
///
/// Minutes are not wrapped into hours: a 75 minute mix shows as `75:00`.
pub fn format_time(duration: Duration) -> String {
    let secs = duration.as_secs();
    format!("{}:{:02}", secs / 60, secs % 60)
}
