#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{NaiveDate, NaiveDateTime};
use rbreakcheck::models::{BreakRecord, SourceBRecord};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rbc() -> Command {
    cargo_bin_cmd!("rbreakcheck")
}

/// Unique path inside the system temp dir; any previous file is removed.
pub fn temp_path(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("rbreakcheck_{}.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Spreadsheet serial (1900 date system) for writing date cells in fixtures.
pub fn excel_serial(dt: &NaiveDateTime) -> f64 {
    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .expect("valid epoch");
    (*dt - epoch).num_seconds() as f64 / 86_400.0
}

/// Source-A record with a known duration.
pub fn a(name: &str, minutes: f64) -> BreakRecord {
    BreakRecord::new(name, Some(minutes))
}

/// Source-A record without a break.
pub fn a_missing(name: &str) -> BreakRecord {
    BreakRecord::new(name, None)
}

pub fn b(name: &str, id: &str, minutes: f64) -> SourceBRecord {
    SourceBRecord::new(BreakRecord::new(name, Some(minutes)), Some(id.to_string()))
}

pub fn b_missing(name: &str, id: &str) -> SourceBRecord {
    SourceBRecord::new(BreakRecord::new(name, None), Some(id.to_string()))
}

/// Timecard export: two punch pairs per employee, name only on the first.
pub const SOURCE_A_CSV: &str = "\
Timecard Report,,,,,,
Station DFH1,,,,,,
Employee,Date,Dept,Job,Hours,Time In,Time Out
John Smith,2026-10-18,DEL,DA,4,2026-10-18 08:00,2026-10-18 12:00
,2026-10-18,DEL,DA,4,2026-10-18 12:30,2026-10-18 16:30
Jane Doe,2026-10-18,DEL,DA,8,2026-10-18 08:00,2026-10-18 16:00
Total Hours,,,,16,,
Li,2026-10-18,DEL,DA,8,2026-10-18 08:00,2026-10-18 16:00
Mark Long,2026-10-18,DEL,DA,3,2026-10-18 08:00,2026-10-18 11:00
,2026-10-18,DEL,DA,4,2026-10-18 14:00,2026-10-18 18:00
Ken Wu,2026-10-18,DEL,DA,4,2026-10-18 12:45,2026-10-18 17:00
,2026-10-18,DEL,DA,4,2026-10-18 08:00,2026-10-18 12:15
";

/// App break log with a duplicate, a placeholder name and a blank row.
pub const SOURCE_B_CSV: &str = "\
Break Utilization Report,,,,
DA Name,Transporter ID,Break Start,Break End,Break Duration (Minutes)
JohnSmith99,T100,2026-10-18 12:00,2026-10-18 12:45,45
Jane Doe,T200,,,18
Jane Doe,T200,,,30
nan,T999,,,10
,,,,
Carlos Ruiz,T123,,,
Ken Wu,42,2026-10-18 12:15,2026-10-18 12:45,abc
";

/// Write both fixtures and return (source A path, source B path).
pub fn write_fixtures(name: &str) -> (String, String) {
    let a_path = temp_path(&format!("{name}_adp_DFH1_10-18-2026"), "csv");
    let b_path = temp_path(&format!("{name}_amazon"), "csv");
    fs::write(&a_path, SOURCE_A_CSV).expect("write source A fixture");
    fs::write(&b_path, SOURCE_B_CSV).expect("write source B fixture");
    (a_path, b_path)
}
