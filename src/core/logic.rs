use crate::config::Config;
use crate::core::reconcile::{classifier, matcher, script};
use crate::models::{BreakRecord, DiscrepancyRecord, ReportSummary, SourceBRecord};
use std::cmp::Ordering;

pub struct Core;

impl Core {
    /// Reconcile one day of break records: match, classify, script, sort.
    ///
    /// Pure and stateless; two calls with the same inputs return the same
    /// output.
    pub fn run(
        source_a: &[BreakRecord],
        source_b: &[SourceBRecord],
        cfg: &Config,
    ) -> Vec<DiscrepancyRecord> {
        let matched = matcher::match_employees(source_a, source_b, &cfg.matching);

        let mut records: Vec<DiscrepancyRecord> = matched
            .iter()
            .map(|m| classifier::classify(m, &cfg.severity))
            .map(|d| {
                let text = script::generate(&d, cfg);
                d.with_script(text)
            })
            .collect();

        sort_records(&mut records);
        records
    }

    pub fn summarize(records: &[DiscrepancyRecord]) -> ReportSummary {
        ReportSummary::from_records(records)
    }
}

/// Order by severity rank, then name ascending; nameless records go last
/// within their tier. Stable, so ties keep match order.
pub fn sort_records(records: &mut [DiscrepancyRecord]) {
    records.sort_by(compare_records);
}

fn compare_records(x: &DiscrepancyRecord, y: &DiscrepancyRecord) -> Ordering {
    x.severity
        .rank()
        .cmp(&y.severity.rank())
        .then_with(|| match (x.display_name(), y.display_name()) {
            (Some(a), Some(b)) => a.cmp(b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        })
}
