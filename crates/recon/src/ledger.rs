use loanaudit_core::parse::round2;

/// Factor applied to even-indexed ratings in the sorted sequence.
const EVEN_FACTOR: f64 = 1.005;
/// Factor applied to odd-indexed ratings.
const ODD_FACTOR: f64 = 0.995;

/// Derive the synthetic GL total for each rating group.
///
/// Stand-in for an external system of record: the comparison total is the
/// source total scaled by an alternating factor keyed on the group's
/// position in the sorted sequence, rounded to 2 dp. Positional, so the
/// input must already be in ascending rating order.
pub fn synthetic_gl_totals(groups: &[(String, f64)]) -> Vec<f64> {
    groups
        .iter()
        .enumerate()
        .map(|(idx, (_, total))| {
            let factor = if idx % 2 == 0 { EVEN_FACTOR } else { ODD_FACTOR };
            round2(total * factor)
        })
        .collect()
}
