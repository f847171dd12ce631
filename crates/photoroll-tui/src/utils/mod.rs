//! Utility functions for the TUI

use chrono::{DateTime, Duration, Local, Utc};

/// How long ago the session unlocked something, e.g. "4 minutes ago"
pub fn format_elapsed(elapsed: std::time::Duration) -> String {
    let diff = Duration::from_std(elapsed).unwrap_or_else(|_| Duration::days(36_500));
    describe_age(diff).unwrap_or_else(|| format!("{} days ago", diff.num_days()))
}

/// Format a timestamp for display
pub fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string()
}

/// Format a timestamp as relative time (e.g., "2 hours ago")
pub fn format_relative_time(ts: DateTime<Utc>) -> String {
    format_relative_to(ts, Utc::now())
}

fn format_relative_to(ts: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let diff = now.signed_duration_since(ts);

    if diff < Duration::zero() {
        return "in the future".to_string();
    }

    describe_age(diff).unwrap_or_else(|| format_timestamp(ts))
}

/// Coarse age for anything under 30 days
fn describe_age(diff: Duration) -> Option<String> {
    if diff < Duration::minutes(1) {
        return Some("just now".to_string());
    }

    if diff < Duration::hours(1) {
        let mins = diff.num_minutes();
        return Some(format!("{} minute{} ago", mins, plural(mins)));
    }

    if diff < Duration::days(1) {
        let hours = diff.num_hours();
        return Some(format!("{} hour{} ago", hours, plural(hours)));
    }

    if diff < Duration::days(30) {
        let days = diff.num_days();
        return Some(format!("{} day{} ago", days, plural(days)));
    }

    None
}

fn plural(n: i64) -> &'static str {
    if n == 1 {
        ""
    } else {
        "s"
    }
}

/// Truncate a string with ellipsis, counting chars rather than bytes
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        s.chars().take(max_len).collect()
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}
