use loanaudit_core::record::LoanRecord;

use crate::aggregate::exposure_by_rating;
use crate::classify::classify;
use crate::ledger::synthetic_gl_totals;
use crate::model::ReconReport;
use crate::summary::compute_summary;

/// Run reconciliation over the clean set. Returns one row per distinct risk
/// rating, in ascending rating order, plus the outcome counts.
///
/// Pure and deterministic: the same clean set always produces the same
/// report.
pub fn run(clean: &[LoanRecord]) -> ReconReport {
    let groups = exposure_by_rating(clean);
    let gl_totals = synthetic_gl_totals(&groups);

    let rows: Vec<_> = groups
        .into_iter()
        .zip(gl_totals)
        .map(|((rating, source_total), gl_total)| classify(rating, source_total, gl_total))
        .collect();

    let summary = compute_summary(&rows);

    ReconReport { summary, rows }
}
