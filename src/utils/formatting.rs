//! Formatting utilities used for CLI and export outputs.

use chrono::NaiveDateTime;

pub const PLACEHOLDER: &str = "-";

/// Whole minutes ("18"), or "-" when absent.
pub fn fmt_minutes(mins: Option<f64>) -> String {
    match mins {
        Some(m) => format!("{m:.0}"),
        None => PLACEHOLDER.to_string(),
    }
}

/// Signed delta with one decimal ("+10.0", "-1.0"), or "-" when absent.
pub fn fmt_delta(delta: Option<f64>) -> String {
    match delta {
        Some(d) => format!("{d:+.1}"),
        None => PLACEHOLDER.to_string(),
    }
}

/// Wall-clock time as "1:05 PM", or "-" when absent.
pub fn fmt_clock(ts: Option<NaiveDateTime>) -> String {
    match ts {
        Some(t) => t.format("%-I:%M %p").to_string(),
        None => PLACEHOLDER.to_string(),
    }
}

/// Similarity score with two decimals.
pub fn fmt_score(score: f64) -> String {
    format!("{score:.2}")
}
