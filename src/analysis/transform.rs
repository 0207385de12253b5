use log::debug;

use crate::config::{AssayConstants, ReferenceStats};
use crate::data::model::{ActivityTable, InteractionTable, Reading};
use crate::error::{AnalysisError, Result};

// ---------------------------------------------------------------------------
// Paired difference
// ---------------------------------------------------------------------------

/// Element-wise `treated - control` for two matched vectors.
pub fn difference(treated: &[f64], control: &[f64]) -> Result<Vec<f64>> {
    if treated.len() != control.len() {
        return Err(AnalysisError::ShapeMismatch {
            what: "difference".into(),
            expected: treated.len(),
            actual: control.len(),
        });
    }
    Ok(treated.iter().zip(control).map(|(t, c)| t - c).collect())
}

// ---------------------------------------------------------------------------
// Dilution correction
// ---------------------------------------------------------------------------

/// Scale every numeric reading by `factor`; absent readings pass through.
pub fn undilute(table: &InteractionTable, factor: f64) -> InteractionTable {
    table
        .iter()
        .map(|(pair, reading)| (pair.clone(), reading.map(|v| v * factor)))
        .collect()
}

// ---------------------------------------------------------------------------
// Beta-galactosidase reporter activity
// ---------------------------------------------------------------------------

/// Reporter activity per pair:
/// `(od420 * scale) / (incubation_minutes * volume_factor * od600)`.
///
/// Both tables must already be undiluted. Pairs without an OD420 reading are
/// `Absent`. A zero denominator or a missing OD600 fails only that pair.
pub fn reporter_activity(
    od420: &InteractionTable,
    od600: &InteractionTable,
    assay: &AssayConstants,
) -> ActivityTable {
    od420
        .iter()
        .map(|(pair, reading)| {
            let outcome = match reading {
                Reading::Absent => Ok(Reading::Absent),
                Reading::Numeric(value) => pair_activity(pair, *value, od600.get(pair), assay),
            };
            if let Err(err) = &outcome {
                debug!("activity for {pair} not computed: {err}");
            }
            (pair.clone(), outcome)
        })
        .collect()
}

fn pair_activity(
    pair: &str,
    od420: f64,
    od600: Option<&Reading>,
    assay: &AssayConstants,
) -> Result<Reading> {
    let od600 = od600
        .and_then(|r| r.value())
        .ok_or_else(|| AnalysisError::MissingValue {
            what: format!("OD600 reading for {pair}"),
        })?;
    let denominator = assay.incubation_minutes * assay.volume_factor * od600;
    if denominator == 0.0 {
        return Err(AnalysisError::DivisionByZero {
            key: pair.to_string(),
        });
    }
    Ok(Reading::Numeric(od420 * assay.scale / denominator))
}

// ---------------------------------------------------------------------------
// Z-scores
// ---------------------------------------------------------------------------

/// Standardize each value against the reference mean and variance.
pub fn z_scores(values: &[f64], reference: &ReferenceStats) -> Result<Vec<f64>> {
    let sd = reference.std_dev()?;
    Ok(values.iter().map(|x| (x - reference.mean) / sd).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::interaction_table;

    #[test]
    fn difference_of_d_and_wt_at_30() {
        let d_1_30 = [12.987, 12.561, 13.098, 17.461];
        let wt_1_30 = [7.975, 8.414, 12.719, 18.548];
        let diff = difference(&d_1_30, &wt_1_30).unwrap();
        for (got, want) in diff.iter().zip([5.012, 4.147, 0.379, -1.087]) {
            assert!((got - want).abs() < 1e-9, "{got} != {want}");
        }
    }

    #[test]
    fn difference_rejects_unequal_lengths() {
        assert!(matches!(
            difference(&[1.0, 2.0], &[1.0]),
            Err(AnalysisError::ShapeMismatch { expected: 2, actual: 1, .. })
        ));
    }

    #[test]
    fn undilute_scales_numeric_only() {
        let table = interaction_table([("a", Some(0.132)), ("b", None)]);
        let out = undilute(&table, 20.0);
        assert!((out["a"].value().unwrap() - 2.64).abs() < 1e-12);
        assert_eq!(out["b"], Reading::Absent);
        assert!(out.keys().eq(table.keys()));
    }

    #[test]
    fn orf1_orf1_activity() {
        let assay = AssayConstants::default();
        let od600 = undilute(&interaction_table([("orf1_orf1", Some(0.132))]), 20.0);
        let od420 = undilute(&interaction_table([("orf1_orf1", Some(0.020))]), 20.0);
        let activity = reporter_activity(&od420, &od600, &assay);
        let value = activity["orf1_orf1"].clone().unwrap().value().unwrap();
        assert!((value - 400.0 / 792.0).abs() < 1e-9);
        assert!((value - 0.505).abs() < 1e-3);
    }

    #[test]
    fn zero_od600_fails_only_that_pair() {
        let assay = AssayConstants::default();
        let od420 = interaction_table([("bad", Some(0.4)), ("good", Some(0.4)), ("none", None)]);
        let od600 = interaction_table([("bad", Some(0.0)), ("good", Some(2.0)), ("none", Some(0.0))]);
        let activity = reporter_activity(&od420, &od600, &assay);
        assert_eq!(
            activity["bad"],
            Err(AnalysisError::DivisionByZero { key: "bad".into() })
        );
        assert!(activity["good"].as_ref().unwrap().is_numeric());
        assert_eq!(activity["none"], Ok(Reading::Absent));
    }

    #[test]
    fn missing_od600_is_reported() {
        let assay = AssayConstants::default();
        let od420 = interaction_table([("x", Some(0.4))]);
        let od600 = interaction_table([("x", None)]);
        let activity = reporter_activity(&od420, &od600, &assay);
        assert!(matches!(activity["x"], Err(AnalysisError::MissingValue { .. })));
    }

    #[test]
    fn zero_incubation_is_division_by_zero() {
        let assay = AssayConstants {
            incubation_minutes: 0.0,
            ..AssayConstants::default()
        };
        let table = interaction_table([("x", Some(1.0))]);
        let activity = reporter_activity(&table, &table, &assay);
        assert!(matches!(activity["x"], Err(AnalysisError::DivisionByZero { .. })));
    }

    #[test]
    fn z_score_of_reference_mean_is_zero() {
        let z = z_scores(&[0.517], &ReferenceStats::FROZEN).unwrap();
        assert_eq!(z, vec![0.0]);
        let z = z_scores(&[0.517 + 0.023f64.sqrt()], &ReferenceStats::FROZEN).unwrap();
        assert!((z[0] - 1.0).abs() < 1e-12);
    }
}
