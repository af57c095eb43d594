// loanaudit CLI - headless loan-audit pipeline operations

mod audit;
mod config;
mod exit_codes;
mod stage;
mod table;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use exit_codes::{EXIT_SUCCESS, EXIT_USAGE};

#[derive(Parser)]
#[command(name = "laudit")]
#[command(about = "Loan-portfolio data-quality governance and GL reconciliation (headless)")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full pipeline: governance, then reconcile the clean set
    #[command(after_help = "\
Examples:
  laudit run audit.toml
  laudit run audit.toml --json
  laudit run audit.toml --output result.json")]
    Run {
        /// Path to the audit .toml config file
        config: PathBuf,

        /// Output JSON to stdout instead of human summary
        #[arg(long)]
        json: bool,

        /// Write JSON output to file
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Validate staged records and split clean rows from exceptions
    #[command(after_help = "\
Examples:
  laudit govern audit.toml
  laudit govern audit.toml --json")]
    Govern {
        /// Path to the audit .toml config file
        config: PathBuf,

        /// Output JSON to stdout instead of human summary
        #[arg(long)]
        json: bool,
    },

    /// Reconcile validated exposure against the synthetic GL
    #[command(after_help = "\
Examples:
  laudit recon audit.toml
  laudit recon audit.toml --json")]
    Recon {
        /// Path to the audit .toml config file
        config: PathBuf,

        /// Output JSON to stdout instead of human summary
        #[arg(long)]
        json: bool,
    },

    /// Map a raw lending CSV onto the staged schema
    #[command(after_help = "\
Examples:
  laudit stage lending.csv -o staged_loan_data.csv
  laudit stage lending.csv -o staged_loan_data.csv --limit 10000")]
    Stage {
        /// Raw CSV to stage
        input: PathBuf,

        /// Staged CSV to write
        #[arg(long, short = 'o')]
        output: PathBuf,

        /// Keep only the first N rows
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Portfolio metrics over the staged table
    #[command(after_help = "\
Examples:
  laudit stats audit.toml
  laudit stats audit.toml --json")]
    Stats {
        /// Path to the audit .toml config file
        config: PathBuf,

        /// Output JSON to stdout instead of human summary
        #[arg(long)]
        json: bool,
    },

    /// Validate an audit config without running
    #[command(after_help = "\
Examples:
  laudit validate audit.toml")]
    Validate {
        /// Path to the audit .toml config file
        config: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        None => {
            // No subcommand = show usage
            eprintln!("Usage: laudit <command> [options]");
            eprintln!("       laudit --help for more information");
            Err(CliError {
                code: EXIT_USAGE,
                message: String::new(),
                hint: None,
            })
        }
        Some(Commands::Run {
            config,
            json,
            output,
        }) => audit::cmd_run(config, json, output),
        Some(Commands::Govern { config, json }) => audit::cmd_govern(config, json),
        Some(Commands::Recon { config, json }) => audit::cmd_recon(config, json),
        Some(Commands::Stage {
            input,
            output,
            limit,
        }) => stage::cmd_stage(input, output, limit),
        Some(Commands::Stats { config, json }) => audit::cmd_stats(config, json),
        Some(Commands::Validate { config }) => audit::cmd_validate(config),
    };

    match result {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(CliError {
            code,
            message,
            hint,
        }) => {
            if !message.is_empty() {
                eprintln!("error: {}", message);
            }
            if let Some(hint) = hint {
                eprintln!("hint:  {}", hint);
            }
            ExitCode::from(code)
        }
    }
}

#[derive(Debug)]
pub struct CliError {
    pub code: u8,
    pub message: String,
    pub hint: Option<String>,
}
