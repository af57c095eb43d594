//! CSV rendering for the three output tables.
//!
//! The validated and exceptions tables reproduce every original column in the
//! original order; the exceptions table appends `Error_Reason`. The report
//! table has a fixed 6-column shape with 2-dp numeric formatting.

use loanaudit_core::columns;
use loanaudit_core::record::LoanRecord;
use loanaudit_govern::RejectedRecord;
use loanaudit_recon::ReconRow;

fn writer() -> csv::Writer<Vec<u8>> {
    csv::Writer::from_writer(Vec::new())
}

fn finish(mut writer: csv::Writer<Vec<u8>>) -> Result<String, csv::Error> {
    writer.flush()?;
    // into_inner only fails on flush, which just succeeded
    let bytes = writer.into_inner().expect("flushed writer");
    // csv::Writer only produces the UTF-8 we fed it
    Ok(String::from_utf8(bytes).expect("csv output is UTF-8"))
}

fn raw_row<'a>(headers: &'a [String], record: &'a LoanRecord) -> impl Iterator<Item = &'a str> {
    headers
        .iter()
        .map(|h| record.raw_fields.get(h).map(String::as_str).unwrap_or(""))
}

/// Render records with the original columns in original order.
pub fn records_to_csv(
    headers: &[String],
    records: &[LoanRecord],
) -> Result<String, csv::Error> {
    let mut out = writer();
    out.write_record(headers)?;
    for record in records {
        out.write_record(raw_row(headers, record))?;
    }
    finish(out)
}

/// Render rejected records: original columns plus the trailing
/// `Error_Reason`.
pub fn rejected_to_csv(
    headers: &[String],
    rejected: &[RejectedRecord],
) -> Result<String, csv::Error> {
    let mut out = writer();
    out.write_record(headers.iter().map(String::as_str).chain([columns::ERROR_REASON]))?;
    for item in rejected {
        let reason = item.error_reason();
        out.write_record(raw_row(headers, &item.record).chain([reason.as_str()]))?;
    }
    finish(out)
}

/// Render the reconciliation report.
pub fn report_to_csv(rows: &[ReconRow]) -> Result<String, csv::Error> {
    let mut out = writer();
    out.write_record([
        "Risk_Rating",
        "Source_Exposure",
        "GL_Exposure",
        "Variance",
        "Variance_Pct",
        "Status",
    ])?;
    for row in rows {
        out.write_record([
            row.risk_rating.as_str(),
            &format!("{:.2}", row.source_exposure),
            &format!("{:.2}", row.gl_exposure),
            &format!("{:.2}", row.variance),
            &format!("{:.2}", row.variance_pct),
            &row.status.to_string(),
        ])?;
    }
    finish(out)
}
