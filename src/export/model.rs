// src/export/model.rs

use crate::config::Config;
use crate::models::DiscrepancyRecord;
use chrono::NaiveDateTime;
use serde::Serialize;

/// Flat row for CSV / JSON export of one reconciled employee.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct DiscrepancyExport {
    pub employee: String,
    pub source_a_name: String,
    pub source_b_name: String,
    pub transporter_id: String,
    pub source_a_break_start: String,
    pub source_a_break_end: String,
    pub source_a_minutes: Option<f64>,
    pub source_b_break_start: String,
    pub source_b_break_end: String,
    pub source_b_minutes: Option<f64>,
    pub difference: Option<f64>,
    pub severity: String,
    pub direction: String,
    pub needs_action: bool,
    pub match_score: f64,
    pub script: String,
}

fn ts(v: Option<NaiveDateTime>) -> String {
    v.map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_default()
}

impl DiscrepancyExport {
    pub fn from_record(r: &DiscrepancyRecord, cfg: &Config) -> Self {
        let a = r.matched.source_a();
        let b = r.matched.source_b();

        Self {
            employee: r.display_name().unwrap_or_default().to_string(),
            source_a_name: a.map(|x| x.name.clone()).unwrap_or_default(),
            source_b_name: b.map(|x| x.record.name.clone()).unwrap_or_default(),
            transporter_id: b.and_then(|x| x.transporter_id.clone()).unwrap_or_default(),
            source_a_break_start: ts(a.and_then(|x| x.break_start)),
            source_a_break_end: ts(a.and_then(|x| x.break_end)),
            source_a_minutes: r.matched.a_minutes(),
            source_b_break_start: ts(b.and_then(|x| x.record.break_start)),
            source_b_break_end: ts(b.and_then(|x| x.record.break_end)),
            source_b_minutes: r.matched.b_minutes(),
            difference: r.delta,
            severity: r.severity.label().to_string(),
            direction: r.direction.label(&cfg.source_a_label, &cfg.source_b_label),
            needs_action: r.needs_action,
            match_score: (r.matched.score() * 100.0).round() / 100.0,
            script: r.script.clone(),
        }
    }
}

pub(crate) fn to_rows(records: &[DiscrepancyRecord], cfg: &Config) -> Vec<DiscrepancyExport> {
    records
        .iter()
        .map(|r| DiscrepancyExport::from_record(r, cfg))
        .collect()
}
