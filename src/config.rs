//! Named analysis constants and the run configuration.

use serde::Serialize;

use crate::analysis::stats::DescriptiveStats;
use crate::error::{AnalysisError, Result};

/// Multiplier correcting the diluted OD readings.
pub const DEFAULT_DILUTION_FACTOR: f64 = 20.0;

/// Pairs excluded from the activity chart and statistics.
/// `orf2_orf1` is a known invalid assay.
pub const DEFAULT_EXCLUSIONS: &[&str] = &["orf2_orf1"];

/// Pairs flagged in the activity chart.
pub const DEFAULT_HIGHLIGHTS: &[&str] = &[
    "orf1_cheB",
    "orf2_cheW",
    "cheW_orf1",
    "cheW_cheB",
    "cheR_orf1",
];

// ---------------------------------------------------------------------------
// Assay constants
// ---------------------------------------------------------------------------

/// Constants of the beta-galactosidase reporter computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AssayConstants {
    pub dilution_factor: f64,
    pub incubation_minutes: f64,
    pub volume_factor: f64,
    /// Unit scale applied to OD420 (mOD to units).
    pub scale: f64,
}

impl Default for AssayConstants {
    fn default() -> Self {
        Self {
            dilution_factor: DEFAULT_DILUTION_FACTOR,
            incubation_minutes: 60.0,
            volume_factor: 5.0,
            scale: 1000.0,
        }
    }
}

// ---------------------------------------------------------------------------
// Reference statistics for z-scores
// ---------------------------------------------------------------------------

/// Mean and variance that z-scores are measured against.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReferenceStats {
    pub mean: f64,
    pub variance: f64,
}

impl ReferenceStats {
    /// Values frozen from an earlier summary of the filtered activity vector.
    pub const FROZEN: ReferenceStats = ReferenceStats {
        mean: 0.517,
        variance: 0.023,
    };

    pub fn from_stats(stats: &DescriptiveStats) -> Self {
        Self {
            mean: stats.mean,
            variance: stats.variance,
        }
    }

    /// Standard deviation; a non-positive variance cannot scale anything.
    pub fn std_dev(&self) -> Result<f64> {
        if self.variance > 0.0 && self.variance.is_finite() {
            Ok(self.variance.sqrt())
        } else {
            Err(AnalysisError::DivisionByZero {
                key: "z-score (reference variance)".into(),
            })
        }
    }
}

impl Default for ReferenceStats {
    fn default() -> Self {
        Self::FROZEN
    }
}

// ---------------------------------------------------------------------------
// AnalysisConfig
// ---------------------------------------------------------------------------

/// Everything the pipelines need besides the literal datasets.
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    pub assay: AssayConstants,
    pub exclusions: Vec<String>,
    pub highlights: Vec<String>,
    pub reference: ReferenceStats,
    /// Recompute the z-score reference from the filtered activity instead
    /// of using the frozen values.
    pub recompute_reference: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            assay: AssayConstants::default(),
            exclusions: DEFAULT_EXCLUSIONS.iter().map(|s| s.to_string()).collect(),
            highlights: DEFAULT_HIGHLIGHTS.iter().map(|s| s.to_string()).collect(),
            reference: ReferenceStats::FROZEN,
            recompute_reference: false,
        }
    }
}
