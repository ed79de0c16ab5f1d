pub mod colors;
pub mod date;
pub mod excel_date;
pub mod filename;
pub mod formatting;
pub mod path;
pub mod table;

pub use formatting::{fmt_clock, fmt_delta, fmt_minutes};
