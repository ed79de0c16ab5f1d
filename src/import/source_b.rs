//! App break log (source B): one row per driver break, columns found by
//! header text.

use super::grid::{Cell, Grid, cell, find_header_row, read_grid};
use super::{ImportStats, Imported};
use crate::config::SourceBConfig;
use crate::errors::{AppError, AppResult};
use crate::models::{BreakRecord, SourceBRecord};
use std::cmp::Ordering;
use std::collections::HashSet;
use std::path::Path;

#[derive(Debug, Default)]
struct Columns {
    name: Option<usize>,
    transporter: Option<usize>,
    start: Option<usize>,
    end: Option<usize>,
    minutes: Option<usize>,
}

/// Assign a role to each header cell; the first column claiming a role wins.
fn map_columns(header: &[Cell], cfg: &SourceBConfig) -> Columns {
    let mut cols = Columns::default();

    for (idx, c) in header.iter().enumerate() {
        let Some(h) = c.text() else { continue };

        let slot = if h.contains(&cfg.header_marker) {
            &mut cols.name
        } else if h.contains(&cfg.transporter_marker) {
            &mut cols.transporter
        } else if h.contains(&cfg.start_marker) {
            &mut cols.start
        } else if h.contains(&cfg.end_marker) {
            &mut cols.end
        } else if cfg.minutes_markers.iter().any(|m| h.contains(m.as_str())) {
            &mut cols.minutes
        } else {
            continue;
        };

        if slot.is_none() {
            *slot = Some(idx);
        }
    }

    cols
}

fn column<'a>(row: &'a [Cell], col: Option<usize>) -> Option<&'a Cell> {
    col.map(|c| cell(row, c))
}

/// Longest break first, unknown durations last.
fn by_minutes_desc(x: &SourceBRecord, y: &SourceBRecord) -> Ordering {
    match (x.minutes(), y.minutes()) {
        (Some(a), Some(b)) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Parse a source-B grid. `source_name` only labels the error when the
/// header row is missing.
pub fn parse_source_b(
    grid: &Grid,
    cfg: &SourceBConfig,
    source_name: &str,
) -> AppResult<Imported<SourceBRecord>> {
    let header = find_header_row(grid, &cfg.header_marker).ok_or_else(|| {
        AppError::HeaderNotFound {
            source_name: source_name.to_string(),
            marker: cfg.header_marker.clone(),
        }
    })?;

    let cols = map_columns(&grid[header], cfg);
    let rows = &grid[header + 1..];

    let mut stats = ImportStats {
        rows_read: rows.len(),
        ..Default::default()
    };

    let mut records = Vec::new();
    for row in rows {
        if row.iter().all(Cell::is_empty) {
            stats.rows_dropped += 1;
            continue;
        }

        let name = column(row, cols.name)
            .and_then(Cell::text)
            .unwrap_or_default();

        if name.chars().count() <= 1 || name.eq_ignore_ascii_case("nan") {
            stats.rows_dropped += 1;
            continue;
        }

        let mut record = BreakRecord::new(
            name,
            column(row, cols.minutes).and_then(Cell::as_number),
        );
        record.break_start = column(row, cols.start).and_then(Cell::as_datetime);
        record.break_end = column(row, cols.end).and_then(Cell::as_datetime);

        let transporter_id = column(row, cols.transporter).and_then(Cell::text);
        records.push(SourceBRecord::new(record, transporter_id));
    }

    // one row per driver: keep the longest break
    records.sort_by(by_minutes_desc);

    let mut seen = HashSet::new();
    let before = records.len();
    records.retain(|r| seen.insert(r.name().to_string()));
    stats.duplicates = before - records.len();

    Ok(Imported { records, stats })
}

pub fn read_source_b(path: &Path, cfg: &SourceBConfig) -> AppResult<Imported<SourceBRecord>> {
    let grid = read_grid(path)?;
    let source_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string());
    parse_source_b(&grid, cfg, &source_name)
}
