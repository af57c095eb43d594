use serde::Serialize;

use loanaudit_core::record::LoanRecord;

/// Ceiling on a plausible interest rate; anything above fails Accuracy.
pub const MAX_INTEREST_RATE: f64 = 30.0;

/// The three fixed data-quality rules, in reporting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RuleTag {
    Completeness,
    Accuracy,
    Validity,
}

impl RuleTag {
    /// The fixed human-readable message for a fired rule. Joined into the
    /// `Error_Reason` column at the output boundary.
    pub fn message(&self) -> &'static str {
        match self {
            Self::Completeness => "Completeness: Exposure_Default is null",
            Self::Accuracy => "Accuracy: Interest_Rate > 30 or Exposure_Default < 0",
            Self::Validity => "Validity: Account_Status is null",
        }
    }
}

impl std::fmt::Display for RuleTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Completeness => write!(f, "Completeness"),
            Self::Accuracy => write!(f, "Accuracy"),
            Self::Validity => write!(f, "Validity"),
        }
    }
}

/// Evaluate one record against all three rules. Rules fire independently;
/// the returned tags are in reporting order.
///
/// A null never fires a comparison: a null exposure fails Completeness
/// without firing Accuracy, and an unparseable rate fires nothing at all.
pub fn evaluate(record: &LoanRecord) -> Vec<RuleTag> {
    let mut tags = Vec::new();

    if record.exposure.is_none() {
        tags.push(RuleTag::Completeness);
    }

    let rate_out_of_range = record
        .interest_rate
        .map(|r| r > MAX_INTEREST_RATE)
        .unwrap_or(false);
    let exposure_negative = record.exposure.map(|e| e < 0.0).unwrap_or(false);
    if rate_out_of_range || exposure_negative {
        tags.push(RuleTag::Accuracy);
    }

    if record.account_status.is_none() {
        tags.push(RuleTag::Validity);
    }

    tags
}

/// Render fired tags into the `Error_Reason` string.
pub fn join_reasons(tags: &[RuleTag]) -> String {
    tags.iter()
        .map(|t| t.message())
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn record(
        exposure: Option<f64>,
        rate: Option<f64>,
        status: Option<&str>,
    ) -> LoanRecord {
        LoanRecord {
            exposure,
            interest_rate: rate,
            risk_rating: "B".into(),
            account_status: status.map(String::from),
            raw_fields: HashMap::new(),
        }
    }

    #[test]
    fn clean_record_fires_nothing() {
        let tags = evaluate(&record(Some(10000.0), Some(12.5), Some("Current")));
        assert!(tags.is_empty());
    }

    #[test]
    fn null_exposure_fails_completeness_only() {
        let tags = evaluate(&record(None, Some(12.5), Some("Current")));
        assert_eq!(tags, vec![RuleTag::Completeness]);
    }

    #[test]
    fn high_rate_fails_accuracy_only() {
        let tags = evaluate(&record(Some(10000.0), Some(35.0), Some("Current")));
        assert_eq!(tags, vec![RuleTag::Accuracy]);
    }

    #[test]
    fn rate_at_ceiling_passes() {
        let tags = evaluate(&record(Some(10000.0), Some(30.0), Some("Current")));
        assert!(tags.is_empty());
    }

    #[test]
    fn negative_exposure_fails_accuracy() {
        let tags = evaluate(&record(Some(-500.0), Some(12.5), Some("Current")));
        assert_eq!(tags, vec![RuleTag::Accuracy]);
    }

    #[test]
    fn null_status_fails_validity_only() {
        let tags = evaluate(&record(Some(10000.0), Some(12.5), None));
        assert_eq!(tags, vec![RuleTag::Validity]);
    }

    #[test]
    fn null_rate_is_indeterminate_not_a_failure() {
        let tags = evaluate(&record(Some(10000.0), None, Some("Current")));
        assert!(tags.is_empty());
    }

    #[test]
    fn null_exposure_does_not_fire_accuracy() {
        // Completeness catches the null; the Accuracy comparison stays
        // indeterminate.
        let tags = evaluate(&record(None, None, Some("Current")));
        assert_eq!(tags, vec![RuleTag::Completeness]);
    }

    #[test]
    fn multiple_failures_report_in_rule_order() {
        let tags = evaluate(&record(None, Some(40.0), None));
        assert_eq!(
            tags,
            vec![RuleTag::Completeness, RuleTag::Accuracy, RuleTag::Validity]
        );
        assert_eq!(
            join_reasons(&tags),
            "Completeness: Exposure_Default is null; \
             Accuracy: Interest_Rate > 30 or Exposure_Default < 0; \
             Validity: Account_Status is null"
        );
    }

    #[test]
    fn completeness_and_validity_join() {
        let tags = evaluate(&record(None, Some(12.5), None));
        assert_eq!(
            join_reasons(&tags),
            "Completeness: Exposure_Default is null; Validity: Account_Status is null"
        );
    }
}
