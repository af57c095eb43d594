use loanaudit_core::parse::round2;

use crate::model::{ReconRow, ReconStatus};

/// Variance percentage above which a rating needs investigation. The
/// boundary itself passes; only a strictly greater magnitude fails.
pub const VARIANCE_PCT_THRESHOLD: f64 = 1.0;

/// Build the report row for one rating from its source and GL totals.
///
/// Variance is `source − gl`; the percentage guards division by zero. The
/// threshold tests the unrounded percentage, then amounts are rounded to
/// 2 dp for reporting.
pub fn classify(risk_rating: String, source_exposure: f64, gl_exposure: f64) -> ReconRow {
    let variance = source_exposure - gl_exposure;
    let variance_pct = if gl_exposure != 0.0 {
        variance / gl_exposure * 100.0
    } else {
        0.0
    };

    let status = if variance_pct.abs() > VARIANCE_PCT_THRESHOLD {
        ReconStatus::InvestigationRequired
    } else {
        ReconStatus::Pass
    };

    ReconRow {
        risk_rating,
        source_exposure: round2(source_exposure),
        gl_exposure: round2(gl_exposure),
        variance: round2(variance),
        variance_pct: round2(variance_pct),
        status,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn within_threshold_passes() {
        let row = classify("A".into(), 100.0, 100.5);
        assert_eq!(row.variance, -0.5);
        assert_eq!(row.variance_pct, -0.5);
        assert_eq!(row.status, ReconStatus::Pass);
    }

    #[test]
    fn boundary_one_percent_passes() {
        // variance_pct is exactly 1.00
        let row = classify("A".into(), 101.0, 100.0);
        assert_eq!(row.variance_pct, 1.0);
        assert_eq!(row.status, ReconStatus::Pass);
    }

    #[test]
    fn just_over_one_percent_needs_investigation() {
        let row = classify("A".into(), 101.01, 100.0);
        assert_eq!(row.variance_pct, 1.01);
        assert_eq!(row.status, ReconStatus::InvestigationRequired);
    }

    #[test]
    fn negative_variance_uses_magnitude() {
        let row = classify("A".into(), 98.0, 100.0);
        assert_eq!(row.variance_pct, -2.0);
        assert_eq!(row.status, ReconStatus::InvestigationRequired);
    }

    #[test]
    fn zero_gl_guards_division() {
        let row = classify("A".into(), 0.0, 0.0);
        assert_eq!(row.variance_pct, 0.0);
        assert_eq!(row.status, ReconStatus::Pass);
    }
}
