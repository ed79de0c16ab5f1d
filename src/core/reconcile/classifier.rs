//! Discrepancy classifier: delta, severity tier and direction of a match.

use crate::config::SeverityConfig;
use crate::models::{DiscrepancyRecord, Direction, MatchedRecord, Severity};

/// Round to one decimal place, ties to even.
pub fn round1(v: f64) -> f64 {
    (v * 10.0).round_ties_even() / 10.0
}

/// Source-B minutes minus source-A minutes, when both are known.
pub fn duration_delta(m: &MatchedRecord) -> Option<f64> {
    match (m.a_minutes(), m.b_minutes()) {
        (Some(a), Some(b)) => Some(round1(b - a)),
        _ => None,
    }
}

pub fn severity_for(m: &MatchedRecord, delta: Option<f64>, tiers: &SeverityConfig) -> Severity {
    if m.a_minutes().is_none() || m.b_minutes().is_none() {
        return Severity::MissingEntry;
    }

    let Some(d) = delta.map(f64::abs) else {
        return Severity::MissingEntry;
    };

    if d <= tiers.match_max {
        Severity::Match
    } else if d <= tiers.minor_max {
        Severity::Minor
    } else if d <= tiers.moderate_max {
        Severity::Moderate
    } else {
        Severity::Major
    }
}

pub fn direction_for(severity: Severity, delta: Option<f64>, tiers: &SeverityConfig) -> Direction {
    if severity == Severity::MissingEntry {
        return Direction::WarningMissing;
    }

    match delta {
        None => Direction::Unknown,
        Some(d) if d.abs() <= tiers.match_max => Direction::Match,
        Some(d) if d > 0.0 => Direction::SourceBGreater,
        Some(_) => Direction::SourceAGreater,
    }
}

/// Classify a matched record. Total over every combination of present and
/// absent sides; the returned record has an empty script.
pub fn classify(m: &MatchedRecord, tiers: &SeverityConfig) -> DiscrepancyRecord {
    let delta = duration_delta(m);
    let severity = severity_for(m, delta, tiers);
    let direction = direction_for(severity, delta, tiers);

    DiscrepancyRecord {
        matched: m.clone(),
        delta,
        severity,
        direction,
        needs_action: severity.needs_action(),
        script: String::new(),
    }
}
