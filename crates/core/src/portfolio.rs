use std::collections::BTreeMap;

use serde::Serialize;

use crate::parse::round2;
use crate::record::LoanRecord;

/// Portfolio-level metrics over the staged table, computed before validation.
#[derive(Debug, Clone, Serialize)]
pub struct PortfolioStats {
    pub total_exposure: f64,
    pub weighted_avg_rate: f64,
    pub exposure_by_rating: Vec<RatingExposure>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RatingExposure {
    pub risk_rating: String,
    pub exposure: f64,
}

/// Total exposure, exposure-weighted average rate, and the per-rating
/// exposure breakdown (ascending by rating).
///
/// The weighted average multiplies only records carrying both exposure and
/// rate, but divides by the full non-null exposure sum, and is 0 when that
/// sum is 0.
pub fn compute_stats(records: &[LoanRecord]) -> PortfolioStats {
    let mut total_exposure = 0.0;
    let mut weighted_rate_sum = 0.0;
    let mut by_rating: BTreeMap<String, f64> = BTreeMap::new();

    for record in records {
        if let Some(exposure) = record.exposure {
            total_exposure += exposure;
            *by_rating.entry(record.risk_rating.clone()).or_insert(0.0) += exposure;
            if let Some(rate) = record.interest_rate {
                weighted_rate_sum += exposure * rate;
            }
        }
    }

    let weighted_avg_rate = if total_exposure != 0.0 {
        round2(weighted_rate_sum / total_exposure)
    } else {
        0.0
    };

    PortfolioStats {
        total_exposure: round2(total_exposure),
        weighted_avg_rate,
        exposure_by_rating: by_rating
            .into_iter()
            .map(|(risk_rating, exposure)| RatingExposure {
                risk_rating,
                exposure: round2(exposure),
            })
            .collect(),
    }
}
