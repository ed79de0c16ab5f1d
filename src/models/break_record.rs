use chrono::NaiveDateTime;
use serde::Serialize;

/// One employee's break for the day, as normalized by a source adapter.
/// Every field except the name may be absent independently of the others.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BreakRecord {
    pub name: String,
    pub break_start: Option<NaiveDateTime>,
    pub break_end: Option<NaiveDateTime>,
    pub minutes: Option<f64>,
}

impl BreakRecord {
    pub fn new(name: impl Into<String>, minutes: Option<f64>) -> Self {
        Self {
            name: name.into(),
            break_start: None,
            break_end: None,
            minutes,
        }
    }

    pub fn with_window(mut self, start: NaiveDateTime, end: NaiveDateTime) -> Self {
        self.break_start = Some(start);
        self.break_end = Some(end);
        self
    }

    /// The name, unless it is blank.
    pub fn usable_name(&self) -> Option<&str> {
        let n = self.name.trim();
        if n.is_empty() { None } else { Some(n) }
    }
}

/// Source-B break: the common fields plus the app's own driver identifier.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SourceBRecord {
    pub record: BreakRecord,
    pub transporter_id: Option<String>,
}

impl SourceBRecord {
    pub fn new(record: BreakRecord, transporter_id: Option<String>) -> Self {
        Self {
            record,
            transporter_id,
        }
    }

    pub fn name(&self) -> &str {
        &self.record.name
    }

    pub fn minutes(&self) -> Option<f64> {
        self.record.minutes
    }
}
