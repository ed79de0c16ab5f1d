use chrono::{Datelike, NaiveDate};
use regex::Regex;
use std::sync::LazyLock;

/// "M-D", "M.D.YY", "M_D_YYYY", ... in a file name, not glued to a
/// station code such as "DFH1".
static NAME_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|[^0-9A-Za-z])(\d{1,2})[._-](\d{1,2})(?:[._-]?(\d{2,4}))?(?:\D|$)")
        .expect("valid date regex")
});

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// First date found in the given file names. Missing years default to
/// `current_year`, two-digit years are read as 20YY.
pub fn infer_date_from_names(names: &[&str], current_year: i32) -> Option<NaiveDate> {
    for name in names {
        let Some(caps) = NAME_DATE.captures(name) else {
            continue;
        };

        let month: u32 = caps[1].parse().ok()?;
        let day: u32 = caps[2].parse().ok()?;
        let year: i32 = match caps.get(3) {
            Some(y) if y.as_str().len() == 2 => 2000 + y.as_str().parse::<i32>().ok()?,
            Some(y) => y.as_str().parse().ok()?,
            None => current_year,
        };

        if let Some(d) = NaiveDate::from_ymd_opt(year, month, day) {
            return Some(d);
        }
    }
    None
}

/// Report date: explicit value, else inferred from file names, else today.
pub fn resolve_report_date(explicit: Option<NaiveDate>, names: &[&str]) -> NaiveDate {
    let today = today();
    explicit
        .or_else(|| infer_date_from_names(names, today.year()))
        .unwrap_or(today)
}

/// "October 19, 2026"
pub fn format_report_date(d: NaiveDate) -> String {
    d.format("%B %d, %Y").to_string()
}
