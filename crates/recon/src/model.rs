use serde::Serialize;

/// Outcome of the variance test for one risk rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ReconStatus {
    #[serde(rename = "Pass")]
    Pass,
    #[serde(rename = "Investigation Required")]
    InvestigationRequired,
}

impl std::fmt::Display for ReconStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pass => write!(f, "Pass"),
            Self::InvestigationRequired => write!(f, "Investigation Required"),
        }
    }
}

/// One reconciliation report row, per distinct risk rating in the clean set.
/// Amounts are rounded to 2 dp for reporting.
#[derive(Debug, Clone, Serialize)]
pub struct ReconRow {
    pub risk_rating: String,
    pub source_exposure: f64,
    pub gl_exposure: f64,
    pub variance: f64,
    pub variance_pct: f64,
    pub status: ReconStatus,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReconSummary {
    pub total_ratings: usize,
    pub passed: usize,
    pub investigations: usize,
}

/// Full reconciliation output: rows in ascending rating order plus counts.
#[derive(Debug, Clone, Serialize)]
pub struct ReconReport {
    pub summary: ReconSummary,
    pub rows: Vec<ReconRow>,
}
