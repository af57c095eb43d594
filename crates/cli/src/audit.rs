//! `laudit` audit commands — governance, reconciliation, and the full
//! pipeline run.

use std::path::{Path, PathBuf};

use serde::Serialize;

use loanaudit_core::portfolio::{self, PortfolioStats};
use loanaudit_core::record::{LoanRecord, StagedTable};
use loanaudit_govern::{GovernanceOutput, GovernanceSummary};
use loanaudit_recon::ReconReport;

use crate::config::AuditConfig;
use crate::exit_codes::{
    EXIT_AUDIT_EXCEPTIONS, EXIT_AUDIT_INVALID_CONFIG, EXIT_AUDIT_INVESTIGATION,
    EXIT_AUDIT_RUNTIME,
};
use crate::table;
use crate::CliError;

fn audit_err(code: u8, msg: impl Into<String>) -> CliError {
    CliError {
        code,
        message: msg.into(),
        hint: None,
    }
}

#[derive(Serialize)]
struct AuditMeta {
    name: String,
    engine_version: String,
}

impl AuditMeta {
    fn new(config: &AuditConfig) -> Self {
        Self {
            name: config.name.clone(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Full `run` output, also the `--json` document.
#[derive(Serialize)]
struct AuditResult {
    meta: AuditMeta,
    governance: GovernanceSummary,
    portfolio: PortfolioStats,
    recon: ReconReport,
}

/// Load and validate the config; paths inside it resolve relative to the
/// config file's directory.
fn load_config(config_path: &Path) -> Result<(AuditConfig, PathBuf), CliError> {
    let config_str = std::fs::read_to_string(config_path)
        .map_err(|e| audit_err(EXIT_AUDIT_RUNTIME, format!("cannot read config: {e}")))?;
    let config = AuditConfig::from_toml(&config_str)
        .map_err(|e| audit_err(EXIT_AUDIT_INVALID_CONFIG, e.to_string()))?;
    let base_dir = config_path
        .parent()
        .unwrap_or_else(|| Path::new("."))
        .to_path_buf();
    Ok((config, base_dir))
}

fn read_table(path: &Path) -> Result<StagedTable, CliError> {
    let csv_data = std::fs::read_to_string(path).map_err(|e| {
        audit_err(
            EXIT_AUDIT_RUNTIME,
            format!("cannot read {}: {e}", path.display()),
        )
    })?;
    loanaudit_govern::load_staged(&csv_data)
        .map_err(|e| audit_err(EXIT_AUDIT_RUNTIME, e.to_string()))
}

fn write_artifact(path: &Path, contents: &str) -> Result<(), CliError> {
    std::fs::write(path, contents).map_err(|e| {
        audit_err(
            EXIT_AUDIT_RUNTIME,
            format!("cannot write {}: {e}", path.display()),
        )
    })?;
    eprintln!("wrote {}", path.display());
    Ok(())
}

fn emit_json(
    value: &impl Serialize,
    json_output: bool,
    output_file: Option<&Path>,
) -> Result<(), CliError> {
    let json_str = serde_json::to_string_pretty(value)
        .map_err(|e| audit_err(EXIT_AUDIT_RUNTIME, format!("JSON serialization error: {e}")))?;

    if let Some(path) = output_file {
        std::fs::write(path, &json_str).map_err(|e| {
            audit_err(
                EXIT_AUDIT_RUNTIME,
                format!("cannot write output: {e}"),
            )
        })?;
        eprintln!("wrote {}", path.display());
    }

    if json_output {
        println!("{json_str}");
    }

    Ok(())
}

fn print_quality(summary: &GovernanceSummary) {
    eprintln!(
        "Quality Score: {:.2}% ({}/{} clean rows)",
        summary.quality_score, summary.clean, summary.total,
    );
}

fn print_recon(report: &ReconReport) {
    eprintln!(
        "recon: {} rating(s) — {} pass, {} investigation required",
        report.summary.total_ratings, report.summary.passed, report.summary.investigations,
    );
}

/// Run governance and write the validated/exceptions tables.
fn govern_stage(
    config: &AuditConfig,
    base_dir: &Path,
) -> Result<(GovernanceOutput, PortfolioStats), CliError> {
    let staged = read_table(&base_dir.join(&config.inputs.staged))?;
    let StagedTable { headers, records } = staged;

    let stats = portfolio::compute_stats(&records);
    let output = loanaudit_govern::run(records);

    let validated_csv = table::records_to_csv(&headers, &output.clean)
        .map_err(|e| audit_err(EXIT_AUDIT_RUNTIME, e.to_string()))?;
    write_artifact(&base_dir.join(&config.outputs.validated), &validated_csv)?;

    let exceptions_csv = table::rejected_to_csv(&headers, &output.rejected)
        .map_err(|e| audit_err(EXIT_AUDIT_RUNTIME, e.to_string()))?;
    write_artifact(&base_dir.join(&config.outputs.exceptions), &exceptions_csv)?;

    Ok((output, stats))
}

/// Run reconciliation over a clean set and write the report.
fn recon_stage(
    config: &AuditConfig,
    base_dir: &Path,
    clean: &[LoanRecord],
) -> Result<ReconReport, CliError> {
    let report = loanaudit_recon::run(clean);
    let report_csv = table::report_to_csv(&report.rows)
        .map_err(|e| audit_err(EXIT_AUDIT_RUNTIME, e.to_string()))?;
    write_artifact(&base_dir.join(&config.outputs.report), &report_csv)?;
    Ok(report)
}

pub fn cmd_run(
    config_path: PathBuf,
    json_output: bool,
    output_file: Option<PathBuf>,
) -> Result<(), CliError> {
    let (config, base_dir) = load_config(&config_path)?;

    let (governance, stats) = govern_stage(&config, &base_dir)?;
    let report = recon_stage(&config, &base_dir, &governance.clean)?;

    let summary = governance.summary();
    let result = AuditResult {
        meta: AuditMeta::new(&config),
        governance: summary.clone(),
        portfolio: stats,
        recon: report,
    };
    emit_json(&result, json_output, output_file.as_deref())?;

    print_quality(&summary);
    print_recon(&result.recon);

    if result.recon.summary.investigations > 0 {
        return Err(audit_err(
            EXIT_AUDIT_INVESTIGATION,
            "investigation required",
        ));
    }
    if summary.rejected > 0 {
        return Err(audit_err(
            EXIT_AUDIT_EXCEPTIONS,
            "data quality exceptions found",
        ));
    }

    Ok(())
}

pub fn cmd_govern(config_path: PathBuf, json_output: bool) -> Result<(), CliError> {
    let (config, base_dir) = load_config(&config_path)?;

    let (governance, _) = govern_stage(&config, &base_dir)?;
    let summary = governance.summary();

    emit_json(
        &serde_json::json!({
            "meta": AuditMeta::new(&config),
            "governance": &summary,
        }),
        json_output,
        None,
    )?;

    print_quality(&summary);

    if summary.rejected > 0 {
        return Err(audit_err(
            EXIT_AUDIT_EXCEPTIONS,
            "data quality exceptions found",
        ));
    }

    Ok(())
}

pub fn cmd_recon(config_path: PathBuf, json_output: bool) -> Result<(), CliError> {
    let (config, base_dir) = load_config(&config_path)?;

    // The validated table is this command's input; it shares the staged
    // schema.
    let validated = read_table(&base_dir.join(&config.outputs.validated))?;
    let report = recon_stage(&config, &base_dir, &validated.records)?;

    emit_json(
        &serde_json::json!({
            "meta": AuditMeta::new(&config),
            "recon": &report,
        }),
        json_output,
        None,
    )?;

    print_recon(&report);

    if report.summary.investigations > 0 {
        return Err(audit_err(
            EXIT_AUDIT_INVESTIGATION,
            "investigation required",
        ));
    }

    Ok(())
}

pub fn cmd_stats(config_path: PathBuf, json_output: bool) -> Result<(), CliError> {
    let (config, base_dir) = load_config(&config_path)?;
    let staged = read_table(&base_dir.join(&config.inputs.staged))?;
    let stats = portfolio::compute_stats(&staged.records);

    emit_json(
        &serde_json::json!({
            "meta": AuditMeta::new(&config),
            "portfolio": &stats,
        }),
        json_output,
        None,
    )?;

    eprintln!("Total Exposure:    {:.2}", stats.total_exposure);
    eprintln!("Weighted Avg Rate: {:.2}%", stats.weighted_avg_rate);
    for bucket in &stats.exposure_by_rating {
        eprintln!("  {}: {:.2}", bucket.risk_rating, bucket.exposure);
    }

    Ok(())
}

pub fn cmd_validate(config_path: PathBuf) -> Result<(), CliError> {
    let (config, _) = load_config(&config_path)?;
    eprintln!(
        "valid: audit '{}' (staged: {}, report: {})",
        config.name, config.inputs.staged, config.outputs.report,
    );
    Ok(())
}
