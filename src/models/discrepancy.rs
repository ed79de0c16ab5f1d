use super::direction::Direction;
use super::matched_record::MatchedRecord;
use super::severity::Severity;

/// A matched record after classification and script generation.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscrepancyRecord {
    pub matched: MatchedRecord,
    /// Source-B minutes minus source-A minutes, one decimal.
    pub delta: Option<f64>,
    pub severity: Severity,
    pub direction: Direction,
    pub needs_action: bool,
    pub script: String,
}

impl DiscrepancyRecord {
    /// Same record carrying `script`.
    pub fn with_script(self, script: String) -> Self {
        Self { script, ..self }
    }

    pub fn display_name(&self) -> Option<&str> {
        self.matched.display_name()
    }

    pub fn a_name(&self) -> Option<&str> {
        self.matched.source_a().map(|a| a.name.as_str())
    }

    pub fn b_name(&self) -> Option<&str> {
        self.matched.source_b().map(|b| b.name())
    }
}
