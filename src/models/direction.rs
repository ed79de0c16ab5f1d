use serde::Serialize;

/// Which source recorded the longer break.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Direction {
    Match,
    SourceBGreater,
    SourceAGreater,
    WarningMissing,
    Unknown,
}

impl Direction {
    /// Human label, using the configured source names.
    pub fn label(&self, a_label: &str, b_label: &str) -> String {
        match self {
            Direction::Match => "Match".to_string(),
            Direction::SourceBGreater => format!("{b_label} > {a_label}"),
            Direction::SourceAGreater => format!("{a_label} > {b_label}"),
            Direction::WarningMissing => "Warning Missing".to_string(),
            Direction::Unknown => "-".to_string(),
        }
    }
}
