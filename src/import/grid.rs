//! Uniform cell grid over CSV files and spreadsheets (first sheet only).

use crate::errors::{AppError, AppResult};
use crate::utils::excel_date::{epoch_day, excel_serial_to_naive_datetime};
use calamine::{Data, Reader, Sheets, open_workbook_auto};
use chrono::{NaiveDateTime, NaiveTime};
use std::path::Path;

#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    Text(String),
    Number(f64),
    DateTime(NaiveDateTime),
}

pub type Grid = Vec<Vec<Cell>>;

static EMPTY: Cell = Cell::Empty;

const DATETIME_FORMATS: [&str; 8] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
    "%m/%d/%Y %I:%M:%S %p",
    "%m/%d/%Y %I:%M %p",
];

const TIME_FORMATS: [&str; 4] = ["%H:%M:%S", "%H:%M", "%I:%M:%S %p", "%I:%M %p"];

impl Cell {
    /// Classify a raw text field: blank → Empty, finite number → Number.
    pub fn from_text(raw: &str) -> Self {
        let s = raw.trim();
        if s.is_empty() {
            return Cell::Empty;
        }
        match s.parse::<f64>() {
            Ok(n) if n.is_finite() => Cell::Number(n),
            _ => Cell::Text(s.to_string()),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Text(s) => s.trim().is_empty(),
            _ => false,
        }
    }

    /// Text rendering; integral numbers print without decimals.
    pub fn text(&self) -> Option<String> {
        match self {
            Cell::Empty => None,
            Cell::Text(s) => {
                let t = s.trim();
                if t.is_empty() { None } else { Some(t.to_string()) }
            }
            Cell::Number(n) => {
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    Some(format!("{}", *n as i64))
                } else {
                    Some(format!("{n}"))
                }
            }
            Cell::DateTime(dt) => Some(dt.format("%Y-%m-%d %H:%M:%S").to_string()),
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Cell::Number(n) => Some(*n),
            Cell::Text(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
            _ => None,
        }
    }

    /// Interpret the cell as a timestamp. Numbers are spreadsheet serials;
    /// time-only text is anchored on the spreadsheet epoch day.
    pub fn as_datetime(&self) -> Option<NaiveDateTime> {
        match self {
            Cell::Empty => None,
            Cell::DateTime(dt) => Some(*dt),
            Cell::Number(n) => excel_serial_to_naive_datetime(*n),
            Cell::Text(s) => parse_datetime_text(s.trim()),
        }
    }
}

fn parse_datetime_text(s: &str) -> Option<NaiveDateTime> {
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }

    for fmt in TIME_FORMATS {
        if let Ok(t) = NaiveTime::parse_from_str(s, fmt) {
            return Some(epoch_day().and_time(t));
        }
    }

    None
}

/// Cell at `col`, or Empty when the row is shorter.
pub fn cell(row: &[Cell], col: usize) -> &Cell {
    row.get(col).unwrap_or(&EMPTY)
}

/// Index of the first row with a cell whose text contains `marker`.
pub fn find_header_row(grid: &Grid, marker: &str) -> Option<usize> {
    grid.iter().position(|row| {
        row.iter()
            .filter_map(Cell::text)
            .any(|t| t.contains(marker))
    })
}

/// Read a CSV or spreadsheet file into a grid, chosen by file extension.
pub fn read_grid(path: &Path) -> AppResult<Grid> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "csv" => read_csv(path),
        "xlsx" | "xlsm" | "xls" | "xlsb" | "ods" => read_workbook(path),
        _ => Err(AppError::UnsupportedInput(path.display().to_string())),
    }
}

fn read_csv(path: &Path) -> AppResult<Grid> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    let mut grid = Vec::new();
    for record in rdr.records() {
        let record = record?;
        grid.push(record.iter().map(Cell::from_text).collect());
    }

    Ok(grid)
}

fn read_workbook(path: &Path) -> AppResult<Grid> {
    let mut workbook: Sheets<_> = open_workbook_auto(path)
        .map_err(|e| AppError::Workbook(format!("failed to open {}: {e}", path.display())))?;

    let sheet_names: Vec<String> = workbook.sheet_names().to_vec();
    let Some(first) = sheet_names.first() else {
        return Err(AppError::Workbook(format!(
            "{} contains no sheets",
            path.display()
        )));
    };

    let range = workbook
        .worksheet_range(first)
        .map_err(|e| AppError::Workbook(format!("failed to read sheet '{first}': {e}")))?;

    // Range may not begin at A1: pad so indices match sheet coordinates.
    let (start_row, start_col) = range.start().unwrap_or((0, 0));

    let mut grid: Grid = vec![Vec::new(); start_row as usize];
    for row in range.rows() {
        let mut cells = vec![Cell::Empty; start_col as usize];
        cells.extend(row.iter().map(convert_data));
        grid.push(cells);
    }

    Ok(grid)
}

fn convert_data(data: &Data) -> Cell {
    match data {
        Data::String(s) => Cell::from_text(s),
        Data::Float(n) => Cell::Number(*n),
        Data::Int(n) => Cell::Number(*n as f64),
        Data::Bool(b) => Cell::Text(if *b { "TRUE" } else { "FALSE" }.to_string()),
        Data::DateTime(dt) => excel_serial_to_naive_datetime(dt.as_f64())
            .map(Cell::DateTime)
            .unwrap_or(Cell::Empty),
        Data::DateTimeIso(s) => parse_datetime_text(s)
            .map(Cell::DateTime)
            .unwrap_or_else(|| Cell::Text(s.clone())),
        Data::DurationIso(s) => Cell::Text(s.clone()),
        Data::Error(_) | Data::Empty => Cell::Empty,
    }
}
