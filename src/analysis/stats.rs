use serde::Serialize;
use statrs::statistics::Statistics;

use crate::data::model::{numeric_values, InteractionTable};
use crate::error::{AnalysisError, Result};

// ---------------------------------------------------------------------------
// Descriptive statistics
// ---------------------------------------------------------------------------

/// Summary of a numeric vector.
///
/// Variance uses the unbiased `n - 1` denominator. Skewness and kurtosis are
/// the biased moment estimators (`m3 / m2^1.5` and `m4 / m2^2 - 3`); both are
/// `None` when every value is identical.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DescriptiveStats {
    pub nobs: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub variance: f64,
    pub skewness: Option<f64>,
    pub kurtosis: Option<f64>,
}

/// Describe a vector of at least two values.
pub fn describe(values: &[f64]) -> Result<DescriptiveStats> {
    if values.len() < 2 {
        return Err(AnalysisError::MissingValue {
            what: format!(
                "descriptive statistics need at least 2 values, got {}",
                values.len()
            ),
        });
    }

    let mean = Statistics::mean(values.iter());
    let n = values.len() as f64;
    let central_moment = |k: i32| values.iter().map(|x| (x - mean).powi(k)).sum::<f64>() / n;
    let m2 = central_moment(2);
    let (skewness, kurtosis) = if m2 > 0.0 {
        (
            Some(central_moment(3) / m2.powf(1.5)),
            Some(central_moment(4) / (m2 * m2) - 3.0),
        )
    } else {
        (None, None)
    };

    Ok(DescriptiveStats {
        nobs: values.len(),
        min: Statistics::min(values.iter()),
        max: Statistics::max(values.iter()),
        mean,
        variance: Statistics::variance(values.iter()),
        skewness,
        kurtosis,
    })
}

/// Describe the numeric readings of a table, skipping absent pairs.
pub fn describe_readings(table: &InteractionTable) -> Result<DescriptiveStats> {
    describe(&numeric_values(table))
}
