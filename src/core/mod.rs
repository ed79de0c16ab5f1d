pub mod logic;
pub mod reconcile;

pub use logic::Core;
