//! `loanaudit-core` — Core types for the loan-audit pipeline.
//!
//! Holds the staged record model, the numeric normalization applied once at
//! ingestion, and portfolio-level metrics. No IO dependencies.

pub mod columns;
pub mod parse;
pub mod portfolio;
pub mod record;

pub use portfolio::PortfolioStats;
pub use record::{LoanRecord, StagedTable};
