use serde::Serialize;

use loanaudit_core::record::LoanRecord;

use crate::rules::{self, RuleTag};

/// A record that failed at least one rule, paired with the tags it fired.
#[derive(Debug, Clone)]
pub struct RejectedRecord {
    pub record: LoanRecord,
    pub tags: Vec<RuleTag>,
}

impl RejectedRecord {
    /// The `Error_Reason` string, rendered in rule order.
    pub fn error_reason(&self) -> String {
        rules::join_reasons(&self.tags)
    }
}

/// Result of one governance run: a clean/rejected partition of the input
/// plus the quality score.
#[derive(Debug)]
pub struct GovernanceOutput {
    pub clean: Vec<LoanRecord>,
    pub rejected: Vec<RejectedRecord>,
    /// `clean / total × 100`; 0 for an empty input.
    pub quality_score: f64,
}

impl GovernanceOutput {
    pub fn summary(&self) -> GovernanceSummary {
        GovernanceSummary {
            total: self.clean.len() + self.rejected.len(),
            clean: self.clean.len(),
            rejected: self.rejected.len(),
            quality_score: self.quality_score,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GovernanceSummary {
    pub total: usize,
    pub clean: usize,
    pub rejected: usize,
    pub quality_score: f64,
}

/// Evaluate every record independently and partition the table. Records with
/// zero fired rules land in `clean`, everything else in `rejected`; the two
/// sets partition the input exactly.
pub fn run(records: Vec<LoanRecord>) -> GovernanceOutput {
    let total = records.len();
    let mut clean = Vec::new();
    let mut rejected = Vec::new();

    for record in records {
        let tags = rules::evaluate(&record);
        if tags.is_empty() {
            clean.push(record);
        } else {
            rejected.push(RejectedRecord { record, tags });
        }
    }

    let quality_score = if total > 0 {
        clean.len() as f64 / total as f64 * 100.0
    } else {
        0.0
    };

    GovernanceOutput {
        clean,
        rejected,
        quality_score,
    }
}
