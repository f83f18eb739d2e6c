use chrono::{DateTime, Utc};
use tube_catalog::utils::format_number;

/// Full publish time, in the style of an HTTP date.
pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}

pub fn format_count(count: u64, unit: &str) -> String {
    format!("{} {unit}", format_number(count))
}
