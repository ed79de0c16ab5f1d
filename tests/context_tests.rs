use chrono::NaiveDate;
use rbreakcheck::utils::date::{format_report_date, infer_date_from_names, resolve_report_date};
use rbreakcheck::utils::filename::{detect_station, resolve_station};

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

fn known() -> Vec<String> {
    vec!["DFH1".to_string(), "DVB8".to_string()]
}

#[test]
fn test_date_with_four_digit_year() {
    assert_eq!(
        infer_date_from_names(&["adp_DFH1_10-18-2026.xlsx"], 2020),
        Some(ymd(2026, 10, 18))
    );
}

#[test]
fn test_date_with_two_digit_year() {
    assert_eq!(
        infer_date_from_names(&["breaks 3.7.25.csv"], 2020),
        Some(ymd(2025, 3, 7))
    );
}

#[test]
fn test_date_without_year_uses_current_year() {
    assert_eq!(
        infer_date_from_names(&["amazon_10_18.xlsx"], 2024),
        Some(ymd(2024, 10, 18))
    );
}

#[test]
fn test_date_from_second_name() {
    assert_eq!(
        infer_date_from_names(&["adp.xlsx", "amazon 1-2-2026.csv"], 2020),
        Some(ymd(2026, 1, 2))
    );
}

#[test]
fn test_no_date_in_names() {
    assert_eq!(infer_date_from_names(&["report.xlsx", "DVB8.csv"], 2026), None);
    // not a calendar date
    assert_eq!(infer_date_from_names(&["x 13-45.csv"], 2026), None);
}

#[test]
fn test_explicit_date_wins() {
    let explicit = ymd(2026, 1, 5);
    assert_eq!(
        resolve_report_date(Some(explicit), &["adp_10-18-2026.xlsx"]),
        explicit
    );
}

#[test]
fn test_format_report_date() {
    assert_eq!(format_report_date(ymd(2026, 10, 18)), "October 18, 2026");
}

#[test]
fn test_detect_station_case_insensitive() {
    assert_eq!(
        detect_station(&["adp export.xlsx", "amazon dvb8.csv"], &known()),
        Some("DVB8".to_string())
    );
    assert_eq!(detect_station(&["adp.xlsx"], &known()), None);
}

#[test]
fn test_resolve_station_precedence() {
    let names = ["adp_DFH1.xlsx"];
    assert_eq!(resolve_station(Some("XYZ9"), &names, &known(), ""), "XYZ9");
    assert_eq!(resolve_station(None, &names, &known(), ""), "DFH1");
    assert_eq!(resolve_station(None, &["adp.xlsx"], &known(), "DVB8"), "DVB8");
    assert_eq!(resolve_station(None, &["adp.xlsx"], &known(), ""), "");
}
