//! Source adapters: read a timecard export (source A) and an app break log
//! (source B) into normalized break records.

pub mod grid;
pub mod source_a;
pub mod source_b;

pub use grid::{Cell, Grid, read_grid};
pub use source_a::{parse_source_a, read_source_a};
pub use source_b::{parse_source_b, read_source_b};

/// Counters reported back to the user after an import.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ImportStats {
    /// Data rows after the header row.
    pub rows_read: usize,
    /// Rows discarded as blank, totals, or lacking required cells.
    pub rows_dropped: usize,
    /// Rows collapsed because the same employee appeared twice.
    pub duplicates: usize,
}

#[derive(Debug, Clone)]
pub struct Imported<T> {
    pub records: Vec<T>,
    pub stats: ImportStats,
}
