/// ANSI color helper utilities for terminal output.
use crate::models::Severity;

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";
pub const MAGENTA: &str = "\x1b[35m";

/// Severity color:
/// Major → red, Moderate → yellow, Minor → cyan,
/// Missing Entry → magenta, Match → green
pub fn color_for_severity(severity: Severity) -> &'static str {
    match severity {
        Severity::Major => RED,
        Severity::Moderate => YELLOW,
        Severity::Minor => CYAN,
        Severity::MissingEntry => MAGENTA,
        Severity::Match => GREEN,
    }
}

/// Grey out placeholder values ("-"), leave everything else untouched.
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() || value.trim() == "-" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}

/// Signed delta color:
/// \>0 → green
/// \<0 → red
/// 0 or absent → reset
pub fn color_for_delta(value: Option<f64>) -> &'static str {
    match value {
        Some(v) if v > 0.0 => GREEN,
        Some(v) if v < 0.0 => RED,
        _ => RESET,
    }
}
