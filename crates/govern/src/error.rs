use std::fmt;

#[derive(Debug)]
pub enum GovernError {
    /// A required column is absent from the staged table. Structural errors
    /// are a caller contract violation, never recovered by coercion.
    MissingColumn { column: String },
    /// CSV read error (bad framing, IO).
    Io(String),
}

impl fmt::Display for GovernError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingColumn { column } => {
                write!(f, "staged table: missing column '{column}'")
            }
            Self::Io(msg) => write!(f, "IO error: {msg}"),
        }
    }
}

impl std::error::Error for GovernError {}
