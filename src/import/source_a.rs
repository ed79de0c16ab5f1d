//! Punch-clock timecard (source A).
//!
//! One row per punch pair, employee name in the first column and only on the
//! first row of each employee block. The break is the gap between the first
//! punch-out and the second punch-in of the day.

use super::grid::{Grid, cell, find_header_row, read_grid};
use super::{ImportStats, Imported};
use crate::config::SourceAConfig;
use crate::core::reconcile::classifier::round1;
use crate::errors::AppResult;
use crate::models::BreakRecord;
use chrono::NaiveDateTime;
use std::collections::HashMap;
use std::path::Path;

#[derive(Debug, Clone)]
struct Punch {
    time_in: Option<NaiveDateTime>,
    time_out: Option<NaiveDateTime>,
}

/// Break window between the first two punches, if it looks like a break.
fn break_between(
    punches: &[Punch],
    max_minutes: f64,
) -> Option<(NaiveDateTime, NaiveDateTime, f64)> {
    let [first, second, ..] = punches else {
        return None;
    };

    let out = first.time_out?;
    let back = second.time_in?;
    let minutes = (back - out).num_seconds() as f64 / 60.0;

    if minutes > 0.0 && minutes < max_minutes {
        Some((out, back, round1(minutes)))
    } else {
        None
    }
}

pub fn parse_source_a(grid: &Grid, cfg: &SourceAConfig) -> Imported<BreakRecord> {
    let header = find_header_row(grid, &cfg.header_marker).unwrap_or(cfg.fallback_header_row);
    let rows = grid.get(header + 1..).unwrap_or_default();

    let mut stats = ImportStats {
        rows_read: rows.len(),
        ..Default::default()
    };

    // employee blocks in first-appearance order
    let mut order: Vec<String> = Vec::new();
    let mut blocks: HashMap<String, Vec<Punch>> = HashMap::new();
    let mut current_name: Option<String> = None;

    for row in rows {
        if let Some(name) = cell(row, cfg.name_column).text() {
            current_name = Some(name);
        }

        let Some(name) = current_name.as_deref() else {
            stats.rows_dropped += 1;
            continue;
        };

        let t_in = cell(row, cfg.time_in_column);
        let t_out = cell(row, cfg.time_out_column);

        if name.chars().count() <= 2
            || name.to_lowercase().starts_with("total")
            || t_in.is_empty()
            || t_out.is_empty()
        {
            stats.rows_dropped += 1;
            continue;
        }

        let punch = Punch {
            time_in: t_in.as_datetime(),
            time_out: t_out.as_datetime(),
        };

        blocks
            .entry(name.to_string())
            .or_insert_with(|| {
                order.push(name.to_string());
                Vec::new()
            })
            .push(punch);
    }

    let records = order
        .into_iter()
        .map(|name| {
            let mut punches = blocks.remove(&name).unwrap_or_default();
            punches.sort_by_key(|p| (p.time_in.is_none(), p.time_in));

            match break_between(&punches, cfg.max_break_minutes) {
                Some((start, end, minutes)) => {
                    BreakRecord::new(name, Some(minutes)).with_window(start, end)
                }
                None => BreakRecord::new(name, None),
            }
        })
        .collect();

    Imported { records, stats }
}

pub fn read_source_a(path: &Path, cfg: &SourceAConfig) -> AppResult<Imported<BreakRecord>> {
    let grid = read_grid(path)?;
    Ok(parse_source_a(&grid, cfg))
}

