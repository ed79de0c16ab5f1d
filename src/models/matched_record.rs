use super::break_record::{BreakRecord, SourceBRecord};

/// Which sources contributed to a matched record. There is no "neither"
/// variant: a record always carries at least one side.
#[derive(Debug, Clone, PartialEq)]
pub enum Sides {
    Both(BreakRecord, SourceBRecord),
    OnlyA(BreakRecord),
    OnlyB(SourceBRecord),
}

/// A source-A / source-B pairing produced by the matcher.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchedRecord {
    sides: Sides,
    score: f64,
}

impl MatchedRecord {
    /// Pair two records. `score` is clamped into [0, 1].
    pub fn paired(a: BreakRecord, b: SourceBRecord, score: f64) -> Self {
        Self {
            sides: Sides::Both(a, b),
            score: score.clamp(0.0, 1.0),
        }
    }

    pub fn only_a(a: BreakRecord) -> Self {
        Self {
            sides: Sides::OnlyA(a),
            score: 0.0,
        }
    }

    pub fn only_b(b: SourceBRecord) -> Self {
        Self {
            sides: Sides::OnlyB(b),
            score: 0.0,
        }
    }

    pub fn sides(&self) -> &Sides {
        &self.sides
    }

    /// Similarity of the two names; 0 for unmatched placeholders.
    pub fn score(&self) -> f64 {
        self.score
    }

    pub fn source_a(&self) -> Option<&BreakRecord> {
        match &self.sides {
            Sides::Both(a, _) | Sides::OnlyA(a) => Some(a),
            Sides::OnlyB(_) => None,
        }
    }

    pub fn source_b(&self) -> Option<&SourceBRecord> {
        match &self.sides {
            Sides::Both(_, b) | Sides::OnlyB(b) => Some(b),
            Sides::OnlyA(_) => None,
        }
    }

    pub fn a_minutes(&self) -> Option<f64> {
        self.source_a().and_then(|a| a.minutes)
    }

    pub fn b_minutes(&self) -> Option<f64> {
        self.source_b().and_then(|b| b.minutes())
    }

    /// Source-A name if usable, else source-B name if usable.
    pub fn display_name(&self) -> Option<&str> {
        self.source_a()
            .and_then(|a| a.usable_name())
            .or_else(|| self.source_b().and_then(|b| b.record.usable_name()))
    }
}
