use super::model::{
    interaction_table, Concentration, Condition, Genotype, InteractionTable, Temperature,
    TimeSeries,
};
use crate::error::Result;

use Concentration::{OneMicromolar, TenMicromolar};
use Genotype::{D, WT};
use Temperature::{Celsius30, Celsius42};

// ---------------------------------------------------------------------------
// Rhodamine 6G efflux assay (emission at 553 nm)
// ---------------------------------------------------------------------------

/// Sampling times of the efflux assay, in minutes.
pub const EFFLUX_MINUTES: [f64; 4] = [0.0, 5.0, 15.0, 30.0];

const EFFLUX_SERIES: [(Condition, [f64; 4]); 8] = [
    (Condition::new(WT, OneMicromolar, Celsius30), [7.975, 8.414, 12.719, 18.548]),
    (Condition::new(WT, TenMicromolar, Celsius30), [23.625, 28.924, 40.874, 86.230]),
    (Condition::new(D, OneMicromolar, Celsius30), [12.987, 12.561, 13.098, 17.461]),
    (Condition::new(D, TenMicromolar, Celsius30), [28.828, 33.460, 50.374, 72.633]),
    (Condition::new(WT, OneMicromolar, Celsius42), [13.127, 13.587, 13.374, 23.561]),
    (Condition::new(WT, TenMicromolar, Celsius42), [24.530, 29.403, 43.719, 77.852]),
    (Condition::new(D, OneMicromolar, Celsius42), [17.140, 19.200, 19.303, 34.784]),
    (Condition::new(D, TenMicromolar, Celsius42), [35.608, 43.173, 67.717, 118.735]),
];

/// Load the efflux time series for all eight conditions.
pub fn load_efflux() -> Result<TimeSeries> {
    TimeSeries::new(
        EFFLUX_MINUTES.to_vec(),
        EFFLUX_SERIES
            .iter()
            .map(|(condition, values)| (*condition, values.to_vec())),
    )
}

// ---------------------------------------------------------------------------
// Yeast two-hybrid assay (diluted optical densities)
// ---------------------------------------------------------------------------

/// `(pair, OD600 diluted, OD420 diluted)`; `None` marks pairs not assayed.
const TWO_HYBRID_ROWS: [(&str, Option<f64>, Option<f64>); 15] = [
    ("orf1_orf1", Some(0.132), Some(0.020)),
    ("orf1_orf2", Some(0.185), Some(0.019)),
    ("orf1_cheB", Some(0.097), Some(0.020)),
    ("orf1_cheW", None, None),
    ("orf2_orf1", Some(0.253), Some(0.023)),
    ("orf2_orf2", None, None),
    ("orf2_cheB", Some(0.177), Some(0.022)),
    ("orf2_cheW", Some(0.239), Some(0.043)),
    ("cheW_orf1", Some(0.151), Some(0.029)),
    ("cheW_cheB", Some(0.115), Some(0.024)),
    ("cheW_cheW", Some(0.179), Some(0.021)),
    ("cheR_orf1", Some(0.175), Some(0.039)),
    ("cheR_orf2", None, None),
    ("cheR_cheB", Some(0.180), Some(0.017)),
    ("cheR_cheW", Some(0.174), Some(0.026)),
];

/// Diluted growth readings (600 nm) for every assayed pair.
pub fn load_od600_diluted() -> InteractionTable {
    interaction_table(TWO_HYBRID_ROWS.iter().map(|(pair, od600, _)| (*pair, *od600)))
}

/// Diluted reporter readings (420 nm) for every assayed pair.
pub fn load_od420_diluted() -> InteractionTable {
    interaction_table(TWO_HYBRID_ROWS.iter().map(|(pair, _, od420)| (*pair, *od420)))
}
