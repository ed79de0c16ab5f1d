use super::discrepancy::DiscrepancyRecord;
use super::severity::Severity;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ReportSummary {
    pub total: usize,
    pub needs_action: usize,
    pub major: usize,
    pub moderate: usize,
    pub minor: usize,
    pub missing: usize,
    pub matched: usize,
}

impl ReportSummary {
    pub fn from_records(records: &[DiscrepancyRecord]) -> Self {
        let mut s = ReportSummary {
            total: records.len(),
            ..Default::default()
        };

        for r in records {
            if r.needs_action {
                s.needs_action += 1;
            }
            match r.severity {
                Severity::Major => s.major += 1,
                Severity::Moderate => s.moderate += 1,
                Severity::Minor => s.minor += 1,
                Severity::MissingEntry => s.missing += 1,
                Severity::Match => s.matched += 1,
            }
        }

        s
    }

    pub fn count(&self, severity: Severity) -> usize {
        match severity {
            Severity::Major => self.major,
            Severity::Moderate => self.moderate,
            Severity::Minor => self.minor,
            Severity::MissingEntry => self.missing,
            Severity::Match => self.matched,
        }
    }
}
