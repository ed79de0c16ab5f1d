//! Console messages: icon-prefixed, colored, one line each.

use crate::import::ImportStats;
use crate::utils::colors::{BLUE, BOLD, GREEN, RED, RESET, YELLOW};
use std::fmt;

/// Icons
const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", BLUE, BOLD, ICON_INFO, RESET, msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", GREEN, BOLD, ICON_OK, RESET, msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", YELLOW, BOLD, ICON_WARN, RESET, msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}{}{} {}{}", RED, BOLD, ICON_ERR, RESET, msg);
}

/// Formatted section header
pub fn header<T: fmt::Display>(msg: T) {
    println!("{}{}====================== {}\n{}", BLUE, BOLD, msg, RESET);
}

/// Report what an adapter read and what it had to discard.
pub fn import_report(label: &str, file: &str, records: usize, stats: &ImportStats) {
    info(format!(
        "{label}: {records} employees from {file} ({} data rows)",
        stats.rows_read
    ));
    if stats.rows_dropped > 0 {
        warning(format!(
            "{label}: {} rows skipped (blank, totals or incomplete)",
            stats.rows_dropped
        ));
    }
    if stats.duplicates > 0 {
        warning(format!(
            "{label}: {} duplicate names collapsed (longest break kept)",
            stats.duplicates
        ));
    }
}
