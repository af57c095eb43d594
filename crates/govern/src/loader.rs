use std::collections::HashMap;

use loanaudit_core::columns;
use loanaudit_core::parse::{normalize_rate, parse_amount};
use loanaudit_core::record::{LoanRecord, StagedTable};

use crate::error::GovernError;

/// Parse the staged CSV into records, normalizing numeric cells once at
/// ingestion.
///
/// The four staged columns must be present by name; anything else passes
/// through in `raw_fields`. Cell-level problems never error here — empty or
/// malformed values become null and the rules decide what that means.
pub fn load_staged(csv_data: &str) -> Result<StagedTable, GovernError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(csv_data.as_bytes());

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| GovernError::Io(e.to_string()))?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let idx = |name: &str| -> Result<usize, GovernError> {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| GovernError::MissingColumn {
                column: name.into(),
            })
    };

    let exposure_idx = idx(columns::EXPOSURE)?;
    let rate_idx = idx(columns::INTEREST_RATE)?;
    let rating_idx = idx(columns::RISK_RATING)?;
    let status_idx = idx(columns::ACCOUNT_STATUS)?;

    let mut records = Vec::new();

    for row in reader.records() {
        let row = row.map_err(|e| GovernError::Io(e.to_string()))?;

        let cell = |i: usize| row.get(i).unwrap_or("");

        let status = cell(status_idx).trim();
        let account_status = if status.is_empty() {
            None
        } else {
            Some(status.to_string())
        };

        let mut raw_fields = HashMap::new();
        for (i, header) in headers.iter().enumerate() {
            raw_fields.insert(header.clone(), cell(i).to_string());
        }

        records.push(LoanRecord {
            exposure: parse_amount(cell(exposure_idx)),
            interest_rate: normalize_rate(cell(rate_idx)),
            risk_rating: cell(rating_idx).trim().to_string(),
            account_status,
            raw_fields,
        });
    }

    Ok(StagedTable { headers, records })
}
