//! `laudit stage` — map a raw lending CSV onto the staged schema.
//!
//! Keeps the columns the pipeline and dashboard care about, renaming the
//! four engine columns to their staged names. When none of the expected raw
//! columns are present the file is passed through whole.

use std::path::PathBuf;

use loanaudit_core::columns;

use crate::exit_codes::EXIT_AUDIT_RUNTIME;
use crate::CliError;

/// Raw column → staged column. Identity entries are kept for passthrough
/// context fields.
const STAGE_COLUMNS: &[(&str, &str)] = &[
    ("loan_amnt", columns::EXPOSURE),
    ("int_rate", columns::INTEREST_RATE),
    ("grade", columns::RISK_RATING),
    ("loan_status", columns::ACCOUNT_STATUS),
    ("term", "term"),
    ("installment", "installment"),
    ("funded_amnt", "funded_amnt"),
    ("funded_amnt_inv", "funded_amnt_inv"),
    ("sub_grade", "sub_grade"),
    ("emp_title", "emp_title"),
    ("id", "id"),
    ("member_id", "member_id"),
];

fn stage_err(msg: impl Into<String>) -> CliError {
    CliError {
        code: EXIT_AUDIT_RUNTIME,
        message: msg.into(),
        hint: None,
    }
}

fn staged_name(raw: &str) -> Option<&'static str> {
    STAGE_COLUMNS
        .iter()
        .find(|(from, _)| *from == raw)
        .map(|(_, to)| *to)
}

pub fn cmd_stage(
    input: PathBuf,
    output: PathBuf,
    limit: Option<usize>,
) -> Result<(), CliError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(&input)
        .map_err(|e| stage_err(format!("cannot read {}: {e}", input.display())))?;

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| stage_err(e.to_string()))?
        .iter()
        .map(|h| h.to_string())
        .collect();

    // Indices of columns we keep, in the raw file's order. If the file has
    // none of the expected columns, keep everything as-is.
    let keep: Vec<usize> = {
        let selected: Vec<usize> = headers
            .iter()
            .enumerate()
            .filter(|(_, h)| staged_name(h.as_str()).is_some())
            .map(|(i, _)| i)
            .collect();
        if selected.is_empty() {
            (0..headers.len()).collect()
        } else {
            selected
        }
    };

    let mut writer = csv::Writer::from_path(&output)
        .map_err(|e| stage_err(format!("cannot write {}: {e}", output.display())))?;

    writer
        .write_record(keep.iter().map(|&i| {
            let raw = headers[i].as_str();
            staged_name(raw).unwrap_or(raw)
        }))
        .map_err(|e| stage_err(e.to_string()))?;

    let mut kept = 0usize;
    for row in reader.records() {
        if let Some(limit) = limit {
            if kept >= limit {
                break;
            }
        }
        let row = row.map_err(|e| stage_err(e.to_string()))?;
        writer
            .write_record(keep.iter().map(|&i| row.get(i).unwrap_or("")))
            .map_err(|e| stage_err(e.to_string()))?;
        kept += 1;
    }

    writer.flush().map_err(|e| stage_err(e.to_string()))?;
    eprintln!("staged {} row(s) to {}", kept, output.display());

    Ok(())
}
