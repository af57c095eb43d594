//! Audit run-config: which files to read and write.
//!
//! The rules and the variance threshold are fixed in the engines; the config
//! only names files. Output names default to the conventional artifact names
//! so a minimal config is just `name = "..."`.

use std::fmt;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct AuditConfig {
    pub name: String,
    #[serde(default)]
    pub inputs: InputsConfig,
    #[serde(default)]
    pub outputs: OutputsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InputsConfig {
    #[serde(default = "default_staged")]
    pub staged: String,
}

impl Default for InputsConfig {
    fn default() -> Self {
        Self {
            staged: default_staged(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputsConfig {
    #[serde(default = "default_validated")]
    pub validated: String,
    #[serde(default = "default_exceptions")]
    pub exceptions: String,
    #[serde(default = "default_report")]
    pub report: String,
}

impl Default for OutputsConfig {
    fn default() -> Self {
        Self {
            validated: default_validated(),
            exceptions: default_exceptions(),
            report: default_report(),
        }
    }
}

fn default_staged() -> String {
    "staged_loan_data.csv".into()
}

fn default_validated() -> String {
    "validated_loans.csv".into()
}

fn default_exceptions() -> String {
    "dq_exceptions.csv".into()
}

fn default_report() -> String {
    "recon_report.csv".into()
}

#[derive(Debug)]
pub enum ConfigError {
    /// TOML parse / deserialization error.
    Parse(String),
    /// Config validation error (empty name, empty path).
    Validation(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(msg) => write!(f, "config parse error: {msg}"),
            Self::Validation(msg) => write!(f, "config validation error: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl AuditConfig {
    pub fn from_toml(input: &str) -> Result<Self, ConfigError> {
        let config: AuditConfig =
            toml::from_str(input).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.name.trim().is_empty() {
            return Err(ConfigError::Validation("name must not be empty".into()));
        }

        for (field, value) in [
            ("inputs.staged", &self.inputs.staged),
            ("outputs.validated", &self.outputs.validated),
            ("outputs.exceptions", &self.outputs.exceptions),
            ("outputs.report", &self.outputs.report),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "{field} must not be empty"
                )));
            }
        }

        Ok(())
    }
}
