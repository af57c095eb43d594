//! Staged-schema column names.
//!
//! The loader resolves columns by these names and the writers emit them.
//! Upstream staging renames raw lending columns onto this schema.

/// Loan principal/balance. Must be present and non-negative to be valid.
pub const EXPOSURE: &str = "Exposure_Default";

/// Interest rate, numeric or percentage string ("12.5%").
pub const INTEREST_RATE: &str = "Interest_Rate";

/// Credit-grade bucket ("A".."G"). Aggregation key, never validated.
pub const RISK_RATING: &str = "Risk_Rating";

/// Loan status. Must be present to be valid.
pub const ACCOUNT_STATUS: &str = "Account_Status";

/// Appended to the exceptions table only.
pub const ERROR_REASON: &str = "Error_Reason";
