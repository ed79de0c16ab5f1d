//! Correction scripts read to the employee at the end of the shift.
//! Plain template substitution: the same record always yields the same text.

use crate::config::Config;
use crate::models::{DiscrepancyRecord, Severity};

pub const NO_ACTION: &str = "No action needed - break times match.";

/// Whole minutes, as quoted to the employee.
fn mins(v: f64) -> String {
    format!("{v:.0}")
}

/// Render the correction prompt for one classified record.
pub fn generate(d: &DiscrepancyRecord, cfg: &Config) -> String {
    let emp = d.display_name().unwrap_or("Employee");
    let a_label = cfg.source_a_label.as_str();
    let b_label = cfg.source_b_label.as_str();
    let cutoff = cfg.cutoff_time.as_str();

    let a_min = d.matched.a_minutes();
    let b_min = d.matched.b_minutes();

    match d.severity {
        Severity::Match => NO_ACTION.to_string(),

        Severity::MissingEntry => match (a_min, b_min) {
            (Some(a), None) => format!(
                "Hi {emp}, I see you have a break logged in {a_label} ({} min) \
                 but we have no record in the {b_label}. \
                 Did you log your break in the {b_label} today? \
                 Please update it before end of day.",
                mins(a)
            ),
            (None, Some(b)) => format!(
                "Hi {emp}, we have your break in the {b_label} ({} min) \
                 but there is no matching entry in {a_label}. \
                 Can you log your break in {a_label} before {cutoff} today?",
                mins(b)
            ),
            _ => format!(
                "Hi {emp}, neither {a_label} nor the {b_label} shows a complete break \
                 for you today. Please log your break in both before {cutoff} today."
            ),
        },

        Severity::Minor | Severity::Moderate | Severity::Major => {
            let (Some(a), Some(b), Some(delta)) = (a_min, b_min, d.delta) else {
                return format!(
                    "Hi {emp}, please review your break entries in {a_label} and the \
                     {b_label} before end of day."
                );
            };

            let (longer, shorter) = if delta > 0.0 {
                (b_label, a_label)
            } else {
                (a_label, b_label)
            };

            format!(
                "Hi {emp}, we noticed a discrepancy in your break times today - \
                 your {longer} shows {} more minutes than your {shorter}. \
                 {b_label} recorded {} min and {a_label} recorded {} min. \
                 Please review both entries and correct whichever is inaccurate by end of day.",
                mins(delta.abs()),
                mins(b),
                mins(a)
            )
        }
    }
}
