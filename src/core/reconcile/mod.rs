//! Name linkage, discrepancy classification and correction scripts.

pub mod classifier;
pub mod matcher;
pub mod script;
pub mod tokens;
