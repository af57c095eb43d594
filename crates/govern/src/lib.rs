//! `loanaudit-govern` — Data-quality governance engine.
//!
//! Pure engine crate: receives staged records, evaluates each one against
//! three fixed rules (Completeness, Accuracy, Validity), and partitions the
//! table into clean and rejected sets. Malformed cells were coerced to null
//! at ingestion, so rule evaluation never errors.

pub mod engine;
pub mod error;
pub mod loader;
pub mod rules;

pub use engine::{run, GovernanceOutput, GovernanceSummary, RejectedRecord};
pub use error::GovernError;
pub use loader::load_staged;
pub use rules::RuleTag;
