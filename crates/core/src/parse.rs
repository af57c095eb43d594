//! Cell-level numeric normalization.
//!
//! Malformed values never error: they become `None` and the governance rules
//! decide what that means. Applied once at ingestion, not at rule sites.

/// Parse a decimal cell. Empty, malformed, or non-finite values become `None`.
pub fn parse_amount(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Normalize an interest-rate cell: strip a trailing `%` if present, then
/// parse as a decimal. Unparseable rates become `None` (indeterminate, not a
/// failure).
pub fn normalize_rate(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    let bare = trimmed.strip_suffix('%').unwrap_or(trimmed);
    parse_amount(bare)
}

/// Round to 2 decimal places (reporting precision).
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
