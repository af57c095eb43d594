use std::collections::BTreeMap;

use loanaudit_core::record::LoanRecord;

/// Group clean records by risk rating and sum exposure per group, nulls
/// summing as 0.
///
/// Returns `(rating, total)` pairs in ascending lexical rating order. The
/// order is load-bearing: the synthetic GL factor alternates by position in
/// this sequence.
pub fn exposure_by_rating(records: &[LoanRecord]) -> Vec<(String, f64)> {
    let mut groups: BTreeMap<String, f64> = BTreeMap::new();

    for record in records {
        *groups.entry(record.risk_rating.clone()).or_insert(0.0) +=
            record.exposure.unwrap_or(0.0);
    }

    groups.into_iter().collect()
}
