pub mod break_record;
pub mod direction;
pub mod discrepancy;
pub mod matched_record;
pub mod report_summary;
pub mod severity;

pub use break_record::{BreakRecord, SourceBRecord};
pub use direction::Direction;
pub use discrepancy::DiscrepancyRecord;
pub use matched_record::{MatchedRecord, Sides};
pub use report_summary::ReportSummary;
pub use severity::Severity;
