use serde::Serialize;
use std::fmt;

/// Magnitude or nature of a break discrepancy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Severity {
    Match,
    Minor,
    Moderate,
    Major,
    MissingEntry,
}

impl Severity {
    /// All tiers, in report order.
    pub const ALL: [Severity; 5] = [
        Severity::Major,
        Severity::Moderate,
        Severity::Minor,
        Severity::MissingEntry,
        Severity::Match,
    ];

    /// Position in the prioritized output: Major first, Match last.
    pub fn rank(&self) -> u8 {
        match self {
            Severity::Major => 0,
            Severity::Moderate => 1,
            Severity::Minor => 2,
            Severity::MissingEntry => 3,
            Severity::Match => 4,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Severity::Match => "Match",
            Severity::Minor => "Minor",
            Severity::Moderate => "Moderate",
            Severity::Major => "Major",
            Severity::MissingEntry => "Missing Entry",
        }
    }

    pub fn needs_action(&self) -> bool {
        !matches!(self, Severity::Match)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
