//! Conversions between chrono date-times and spreadsheet serial numbers
//! (1900 date system, day 0 = 1899-12-30).

use chrono::{Duration, NaiveDate, NaiveDateTime};

const SECONDS_PER_DAY: f64 = 86_400.0;

fn excel_epoch() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(1899, 12, 30)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .unwrap_or_default()
}

/// Day used to anchor time-only values ("09:15") so they can be subtracted.
pub fn epoch_day() -> NaiveDate {
    excel_epoch().date()
}

/// Serial number → date-time, rounded to the nearest second.
/// Returns None for values chrono cannot represent.
pub fn excel_serial_to_naive_datetime(serial: f64) -> Option<NaiveDateTime> {
    if !serial.is_finite() {
        return None;
    }
    let secs = (serial * SECONDS_PER_DAY).round();
    if secs.abs() > i64::MAX as f64 / 2.0 {
        return None;
    }
    excel_epoch().checked_add_signed(Duration::try_seconds(secs as i64)?)
}
