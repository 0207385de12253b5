use log::{debug, info};
use serde::Serialize;

use crate::analysis::{
    describe, describe_readings, difference, reporter_activity, undilute, z_scores,
    DescriptiveStats,
};
use crate::config::{AnalysisConfig, AssayConstants, ReferenceStats};
use crate::data::filter::filter_activity;
use crate::data::loader::{load_efflux, load_od420_diluted, load_od600_diluted};
use crate::data::model::{
    numeric_values, ActivityTable, Concentration, Condition, Genotype, InteractionTable,
    Temperature, TimeSeries,
};
use crate::error::{AnalysisError, Result};

// ---------------------------------------------------------------------------
// Efflux pipeline
// ---------------------------------------------------------------------------

/// One D-minus-WT comparison at a fixed concentration and temperature.
#[derive(Debug, Clone)]
pub struct EffluxDifference {
    /// Short name, e.g. `dif_1_30`.
    pub name: String,
    pub concentration_um: u32,
    pub temperature_c: u32,
    pub values: Vec<f64>,
}

/// D minus WT for every concentration / temperature cell, in the order
/// 1µM 30°C, 10µM 30°C, 1µM 42°C, 10µM 42°C.
pub fn efflux_differences(series: &TimeSeries) -> Result<Vec<EffluxDifference>> {
    let cells = [
        (Concentration::OneMicromolar, Temperature::Celsius30),
        (Concentration::TenMicromolar, Temperature::Celsius30),
        (Concentration::OneMicromolar, Temperature::Celsius42),
        (Concentration::TenMicromolar, Temperature::Celsius42),
    ];
    cells
        .into_iter()
        .map(|(concentration, temperature)| {
            let treated = series.require(&Condition::new(Genotype::D, concentration, temperature))?;
            let control = series.require(&Condition::new(Genotype::WT, concentration, temperature))?;
            let values = difference(treated, control)?;
            let name = format!(
                "dif_{}_{}",
                concentration.micromolar(),
                temperature.celsius()
            );
            debug!("{name} = {values:?}");
            Ok(EffluxDifference {
                name,
                concentration_um: concentration.micromolar(),
                temperature_c: temperature.celsius(),
                values,
            })
        })
        .collect()
}

/// Named summary of one vector.
#[derive(Debug, Clone, Serialize)]
pub struct NamedSummary {
    pub name: String,
    #[serde(flatten)]
    pub stats: DescriptiveStats,
}

/// Descriptive statistics of the four efflux differences.
pub fn efflux_summaries() -> Result<Vec<NamedSummary>> {
    let series = load_efflux()?;
    efflux_differences(&series)?
        .into_iter()
        .map(|diff| {
            Ok(NamedSummary {
                stats: describe(&diff.values)?,
                name: diff.name,
            })
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Two-hybrid pipeline
// ---------------------------------------------------------------------------

/// What to do with pairs whose activity could not be computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairFailures {
    /// Leave them out of the filtered table and keep going.
    Skip,
    /// Stop at the first failing pair.
    Reject,
}

/// Every intermediate of the reporter-activity pipeline.
#[derive(Debug, Clone)]
pub struct TwoHybridAnalysis {
    pub assay: AssayConstants,
    pub od600: InteractionTable,
    pub od420: InteractionTable,
    pub activity: ActivityTable,
    /// Numeric pairs minus the exclusion list.
    pub filtered: InteractionTable,
    pub summary: DescriptiveStats,
    pub reference: ReferenceStats,
    /// Z-scores of `filtered`, in the same order.
    pub z_scores: Vec<f64>,
}

impl TwoHybridAnalysis {
    /// Run the pipeline on the literal OD tables.
    pub fn run(config: &AnalysisConfig, failures: PairFailures) -> Result<Self> {
        Self::from_tables(&load_od600_diluted(), &load_od420_diluted(), config, failures)
    }

    /// Run the pipeline on diluted OD tables.
    pub fn from_tables(
        od600_diluted: &InteractionTable,
        od420_diluted: &InteractionTable,
        config: &AnalysisConfig,
        failures: PairFailures,
    ) -> Result<Self> {
        let factor = config.assay.dilution_factor;
        let od600 = undilute(od600_diluted, factor);
        let od420 = undilute(od420_diluted, factor);
        let activity = reporter_activity(&od420, &od600, &config.assay);
        if failures == PairFailures::Reject {
            if let Some((_, err)) = first_failure(&activity) {
                return Err(err.clone());
            }
        }

        let filtered = filter_activity(&activity, config.exclusions.as_slice());
        debug!("filtered activity: {filtered:?}");
        let summary = describe_readings(&filtered)?;

        // Recompute immediately before standardizing so the reference cannot
        // drift from the vector it describes.
        let reference = if config.recompute_reference {
            ReferenceStats::from_stats(&summary)
        } else {
            config.reference
        };
        let scores = z_scores(&numeric_values(&filtered), &reference)?;
        info!(
            "two-hybrid analysis: {} pairs, {} numeric after filtering",
            activity.len(),
            filtered.len()
        );

        Ok(Self {
            assay: config.assay,
            od600,
            od420,
            activity,
            filtered,
            summary,
            reference,
            z_scores: scores,
        })
    }
}

/// The first pair whose activity could not be computed.
fn first_failure(activity: &ActivityTable) -> Option<(&str, &AnalysisError)> {
    activity
        .iter()
        .find_map(|(pair, outcome)| outcome.as_ref().err().map(|e| (pair.as_str(), e)))
}
