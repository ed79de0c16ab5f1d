mod common;
use common::{a, a_missing, b, b_missing};
use rbreakcheck::config::Config;
use rbreakcheck::core::reconcile::classifier::classify;
use rbreakcheck::core::reconcile::script::{NO_ACTION, generate};
use rbreakcheck::models::{BreakRecord, MatchedRecord, SourceBRecord};

fn script_for(m: MatchedRecord, cfg: &Config) -> String {
    let d = classify(&m, &cfg.severity);
    generate(&d, cfg)
}

#[test]
fn test_match_needs_no_action() {
    let cfg = Config::default();
    let m = MatchedRecord::paired(a("John Smith", 30.0), b("John Smith", "T1", 30.5), 1.0);
    assert_eq!(script_for(m, &cfg), NO_ACTION);
}

#[test]
fn test_missing_in_source_b() {
    let cfg = Config::default();
    let s = script_for(MatchedRecord::only_a(a("Jane Doe", 18.0)), &cfg);
    assert_eq!(
        s,
        "Hi Jane Doe, I see you have a break logged in ADP (18 min) but we have no record \
         in the Amazon app. Did you log your break in the Amazon app today? \
         Please update it before end of day."
    );
}

#[test]
fn test_missing_in_source_a() {
    let cfg = Config::default();
    let s = script_for(MatchedRecord::only_b(b("Carlos Ruiz", "T123", 25.0)), &cfg);
    assert_eq!(
        s,
        "Hi Carlos Ruiz, we have your break in the Amazon app (25 min) but there is no \
         matching entry in ADP. Can you log your break in ADP before 5 PM today?"
    );
}

#[test]
fn test_missing_minutes_on_both_sides() {
    let cfg = Config::default();
    let m = MatchedRecord::paired(a_missing("Jane Doe"), b_missing("Jane Doe", "T1"), 1.0);
    let s = script_for(m, &cfg);
    assert!(s.starts_with("Hi Jane Doe, neither ADP nor the Amazon app"));
    assert!(s.contains("before 5 PM today"));
}

#[test]
fn test_longer_in_source_b() {
    let cfg = Config::default();
    let m = MatchedRecord::paired(a("John Smith", 20.0), b("JohnSmith99", "T1", 30.0), 1.0);
    assert_eq!(
        script_for(m, &cfg),
        "Hi John Smith, we noticed a discrepancy in your break times today - your Amazon app \
         shows 10 more minutes than your ADP. Amazon app recorded 30 min and ADP recorded \
         20 min. Please review both entries and correct whichever is inaccurate by end of day."
    );
}

#[test]
fn test_longer_in_source_a() {
    let cfg = Config::default();
    let m = MatchedRecord::paired(a("John Smith", 40.0), b("John Smith", "T1", 30.0), 1.0);
    let s = script_for(m, &cfg);
    assert!(s.contains("your ADP shows 10 more minutes than your Amazon app."));
    assert!(s.contains("Amazon app recorded 30 min and ADP recorded 40 min."));
}

#[test]
fn test_configured_labels_and_cutoff() {
    let cfg = Config {
        source_a_label: "Timeclock".to_string(),
        source_b_label: "driver app".to_string(),
        cutoff_time: "6 PM".to_string(),
        ..Config::default()
    };
    let s = script_for(MatchedRecord::only_b(b("Carlos Ruiz", "T123", 25.0)), &cfg);
    assert_eq!(
        s,
        "Hi Carlos Ruiz, we have your break in the driver app (25 min) but there is no \
         matching entry in Timeclock. Can you log your break in Timeclock before 6 PM today?"
    );
}

#[test]
fn test_blank_name_falls_back_to_employee() {
    let cfg = Config::default();
    let nameless = SourceBRecord::new(BreakRecord::new("  ", Some(25.0)), None);
    let s = script_for(MatchedRecord::only_b(nameless), &cfg);
    assert!(s.starts_with("Hi Employee, "));
}

#[test]
fn test_source_b_name_used_when_source_a_name_blank() {
    let cfg = Config::default();
    let m = MatchedRecord::paired(
        BreakRecord::new("", Some(20.0)),
        b("Jane Doe", "T1", 30.0),
        0.5,
    );
    assert!(script_for(m, &cfg).starts_with("Hi Jane Doe, "));
}

#[test]
fn test_script_is_deterministic() {
    let cfg = Config::default();
    let m = MatchedRecord::paired(a("John Smith", 20.0), b("John Smith", "T1", 44.0), 1.0);
    assert_eq!(script_for(m.clone(), &cfg), script_for(m, &cfg));
}
