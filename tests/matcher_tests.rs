mod common;
use common::{a, a_missing, b};
use rbreakcheck::config::{MatchStrategy, MatchingConfig};
use rbreakcheck::core::reconcile::matcher::match_employees;
use rbreakcheck::models::Sides;

fn greedy() -> MatchingConfig {
    MatchingConfig::default()
}

fn exclusive() -> MatchingConfig {
    MatchingConfig {
        strategy: MatchStrategy::Exclusive,
        ..MatchingConfig::default()
    }
}

fn transporter(m: &rbreakcheck::models::MatchedRecord) -> Option<&str> {
    m.source_b().and_then(|b| b.transporter_id.as_deref())
}

#[test]
fn test_pairs_camel_case_name() {
    let out = match_employees(
        &[a("John Smith", 30.0)],
        &[b("JohnSmith99", "T1", 45.0)],
        &greedy(),
    );

    assert_eq!(out.len(), 1);
    assert!(matches!(out[0].sides(), Sides::Both(_, _)));
    assert_eq!(out[0].score(), 1.0);
}

#[test]
fn test_pairs_accented_spelling() {
    let out = match_employees(
        &[a("Jose Garcia", 30.0)],
        &[b("José García", "T1", 30.0)],
        &greedy(),
    );

    assert_eq!(out.len(), 1);
    assert!(matches!(out[0].sides(), Sides::Both(_, _)));
    assert_eq!(out[0].score(), 1.0);
}

#[test]
fn test_best_candidate_wins() {
    let out = match_employees(
        &[a("Maria Lopez", 30.0)],
        &[b("Maria Garcia", "T1", 30.0), b("Maria Lopez", "T2", 31.0)],
        &greedy(),
    );

    assert_eq!(out.len(), 2);
    assert_eq!(transporter(&out[0]), Some("T2"));
    // the unpicked record is appended as source-B-only
    assert!(matches!(out[1].sides(), Sides::OnlyB(_)));
    assert_eq!(transporter(&out[1]), Some("T1"));
}

#[test]
fn test_tie_goes_to_first_in_source_b_order() {
    let out = match_employees(
        &[a("Maria Lopez", 30.0)],
        &[b("Lopez Maria", "T1", 30.0), b("Maria Lopez", "T2", 30.0)],
        &greedy(),
    );

    assert_eq!(out[0].score(), 1.0);
    assert_eq!(transporter(&out[0]), Some("T1"));
    assert_eq!(transporter(&out[1]), Some("T2"));
}

#[test]
fn test_score_at_threshold_pairs() {
    // one of three tokens: 1/3 >= 0.33
    let out = match_employees(
        &[a("Chris Evans Brown", 30.0)],
        &[b("Chris Pratt", "T1", 30.0)],
        &greedy(),
    );

    assert_eq!(out.len(), 1);
    assert!(matches!(out[0].sides(), Sides::Both(_, _)));
}

#[test]
fn test_score_below_threshold_splits_records() {
    // one of four tokens: 0.25 < 0.33
    let out = match_employees(
        &[a("Chris Evans Brown Lee", 30.0)],
        &[b("Chris Pratt", "T1", 30.0)],
        &greedy(),
    );

    assert_eq!(out.len(), 2);
    assert!(matches!(out[0].sides(), Sides::OnlyA(_)));
    assert_eq!(out[0].score(), 0.0);
    assert!(matches!(out[1].sides(), Sides::OnlyB(_)));
    assert_eq!(out[1].score(), 0.0);
}

#[test]
fn test_configured_threshold_is_honoured() {
    let cfg = MatchingConfig {
        threshold: 0.2,
        ..MatchingConfig::default()
    };
    let out = match_employees(
        &[a("Chris Evans Brown Lee", 30.0)],
        &[b("Chris Pratt", "T1", 30.0)],
        &cfg,
    );

    assert_eq!(out.len(), 1);
    assert_eq!(out[0].score(), 0.25);
}

#[test]
fn test_greedy_reuses_source_b_record() {
    let out = match_employees(
        &[a("Ana Silva", 30.0), a("Ana Silva", 32.0)],
        &[b("Ana Silva", "T1", 30.0)],
        &greedy(),
    );

    assert_eq!(out.len(), 2);
    assert_eq!(transporter(&out[0]), Some("T1"));
    assert_eq!(transporter(&out[1]), Some("T1"));
    assert!(out.iter().all(|m| matches!(m.sides(), Sides::Both(_, _))));
}

#[test]
fn test_exclusive_offers_each_source_b_record_once() {
    let out = match_employees(
        &[a("Ana Silva", 30.0), a("Ana Silva", 32.0)],
        &[b("Ana Silva", "T1", 30.0)],
        &exclusive(),
    );

    assert_eq!(out.len(), 2);
    assert!(matches!(out[0].sides(), Sides::Both(_, _)));
    assert!(matches!(out[1].sides(), Sides::OnlyA(_)));
    assert_eq!(out[1].a_minutes(), Some(32.0));
}

#[test]
fn test_exclusive_falls_back_to_next_best() {
    let out = match_employees(
        &[a("Maria Lopez", 30.0), a("Maria Lopez", 40.0)],
        &[b("Maria Lopez", "T1", 30.0), b("Maria Garcia", "T2", 40.0)],
        &exclusive(),
    );

    assert_eq!(out.len(), 2);
    assert_eq!(transporter(&out[0]), Some("T1"));
    assert_eq!(transporter(&out[1]), Some("T2"));
    assert_eq!(out[1].score(), 0.5);
}

#[test]
fn test_empty_source_b_yields_only_a() {
    let out = match_employees(&[a("John Smith", 30.0), a_missing("Jane Doe")], &[], &greedy());

    assert_eq!(out.len(), 2);
    assert!(out.iter().all(|m| matches!(m.sides(), Sides::OnlyA(_))));
    assert_eq!(out[0].display_name(), Some("John Smith"));
    assert_eq!(out[1].display_name(), Some("Jane Doe"));
}

#[test]
fn test_empty_source_a_yields_only_b_in_order() {
    let out = match_employees(
        &[],
        &[b("Zed Young", "T1", 20.0), b("Amy Adams", "T2", 25.0)],
        &greedy(),
    );

    assert_eq!(out.len(), 2);
    assert_eq!(transporter(&out[0]), Some("T1"));
    assert_eq!(transporter(&out[1]), Some("T2"));
}

#[test]
fn test_every_source_a_record_appears_once_in_order() {
    let source_a = vec![
        a("John Smith", 30.0),
        a("Jane Doe", 30.0),
        a("Xi", 30.0),
        a("Peter Parker", 30.0),
    ];
    let source_b = vec![b("Jane Doe", "T1", 30.0), b("JohnSmith", "T2", 30.0)];

    let out = match_employees(&source_a, &source_b, &greedy());

    let a_names: Vec<&str> = out
        .iter()
        .filter_map(|m| m.source_a().map(|r| r.name.as_str()))
        .collect();
    assert_eq!(a_names, vec!["John Smith", "Jane Doe", "Xi", "Peter Parker"]);
    assert_eq!(out.len(), 4);

    for m in &out {
        let s = m.score();
        assert!(s == 0.0 || s >= 0.33, "unexpected score {s}");
    }
}
