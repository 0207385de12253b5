//! Property-based tests for the analysis transforms.

use proptest::prelude::*;

use rhodamine_y2h::analysis::{describe, difference, reporter_activity, undilute, z_scores};
use rhodamine_y2h::config::{AssayConstants, ReferenceStats, DEFAULT_EXCLUSIONS};
use rhodamine_y2h::data::filter::{apply_exclusions, filter_activity};
use rhodamine_y2h::data::loader::{load_od420_diluted, load_od600_diluted};
use rhodamine_y2h::data::model::{InteractionTable, Reading};

fn table_from(values: &[Option<f64>]) -> InteractionTable {
    values
        .iter()
        .enumerate()
        .map(|(i, v)| (format!("pair_{i}"), Reading::from(*v)))
        .collect()
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// difference(a, b)[i] == a[i] - b[i], length preserved.
    #[test]
    fn difference_is_elementwise(pairs in prop::collection::vec((-1e3f64..1e3, -1e3f64..1e3), 0..16)) {
        let (a, b): (Vec<f64>, Vec<f64>) = pairs.into_iter().unzip();
        let diff = difference(&a, &b).unwrap();
        prop_assert_eq!(diff.len(), a.len());
        for i in 0..a.len() {
            prop_assert_eq!(diff[i], a[i] - b[i]);
        }
    }

    /// Undiluting twice by f equals undiluting once by f * f.
    #[test]
    fn undilute_is_linear(
        values in prop::collection::vec(prop::option::of(0.0f64..1.0), 0..16),
        factor in 0.5f64..50.0,
    ) {
        let table = table_from(&values);
        let twice = undilute(&undilute(&table, factor), factor);
        let once = undilute(&table, factor * factor);
        prop_assert!(twice.keys().eq(once.keys()));
        for (a, b) in twice.values().zip(once.values()) {
            match (a, b) {
                (Reading::Numeric(x), Reading::Numeric(y)) => prop_assert!(close(*x, *y)),
                (Reading::Absent, Reading::Absent) => {}
                _ => prop_assert!(false, "absence changed: {a:?} vs {b:?}"),
            }
        }
    }

    /// Filtering an already-filtered table changes nothing.
    #[test]
    fn filtering_is_idempotent(
        od420 in prop::collection::vec(prop::option::of(0.0f64..1.0), 1..16),
        od600 in prop::collection::vec(0.0f64..1.0, 16),
        excluded in 0usize..16,
    ) {
        let od420 = table_from(&od420);
        let od600 = table_from(&od600.into_iter().map(Some).collect::<Vec<_>>());
        let activity = reporter_activity(&od420, &od600, &AssayConstants::default());
        let exclusions = [format!("pair_{excluded}")];

        let once = filter_activity(&activity, &exclusions);
        let twice = apply_exclusions(&once, &exclusions);
        prop_assert_eq!(&once, &twice);
        prop_assert!(once.values().all(|r| r.is_numeric()));
    }

    /// Absent OD420 gives absent activity whatever the OD600 values are.
    #[test]
    fn absent_reporter_is_absent_activity(od600 in prop::collection::vec(1e-3f64..10.0, 15)) {
        let od420 = undilute(&load_od420_diluted(), 20.0);
        let od600: InteractionTable = load_od600_diluted()
            .keys()
            .cloned()
            .zip(od600.into_iter().map(Reading::Numeric))
            .collect();
        let activity = reporter_activity(&od420, &od600, &AssayConstants::default());
        prop_assert_eq!(activity.len(), 15);
        for (pair, reading) in &od420 {
            if *reading == Reading::Absent {
                prop_assert_eq!(&activity[pair], &Ok(Reading::Absent));
            } else {
                prop_assert!(activity[pair].as_ref().unwrap().is_numeric());
            }
        }
    }

    /// describe on a constant vector: mean c, variance 0, min == max == c.
    #[test]
    fn constant_vector_statistics(c in -1e3f64..1e3, n in 2usize..10) {
        let stats = describe(&vec![c; n]).unwrap();
        prop_assert_eq!(stats.nobs, n);
        prop_assert_eq!(stats.min, c);
        prop_assert_eq!(stats.max, c);
        prop_assert!(close(stats.mean, c));
        prop_assert!(stats.variance.abs() < 1e-9);
    }

    /// z-scores preserve length and order.
    #[test]
    fn z_scores_preserve_order(values in prop::collection::vec(0.0f64..2.0, 0..16)) {
        let z = z_scores(&values, &ReferenceStats::FROZEN).unwrap();
        prop_assert_eq!(z.len(), values.len());
        for w in 0..values.len().saturating_sub(1) {
            if values[w] <= values[w + 1] {
                prop_assert!(z[w] <= z[w + 1]);
            } else {
                prop_assert!(z[w] >= z[w + 1]);
            }
        }
    }
}

/// Every pair with an absent OD420 in the literal table stays absent.
#[test]
fn literal_absent_pairs() {
    let od420 = undilute(&load_od420_diluted(), 20.0);
    let od600 = undilute(&load_od600_diluted(), 20.0);
    let activity = reporter_activity(&od420, &od600, &AssayConstants::default());
    let absent: Vec<_> = activity
        .iter()
        .filter(|(_, r)| **r == Ok(Reading::Absent))
        .map(|(k, _)| k.as_str())
        .collect();
    assert_eq!(absent, ["orf1_cheW", "orf2_orf2", "cheR_orf2"]);
}

#[test]
fn default_exclusion_is_the_invalid_assay() {
    assert_eq!(DEFAULT_EXCLUSIONS, &["orf2_orf1"]);
}
