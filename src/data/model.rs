use std::fmt;

use indexmap::IndexMap;
use serde::{Serialize, Serializer};

use crate::error::AnalysisError;

// ---------------------------------------------------------------------------
// Reading – a single measured cell, or the absence of one
// ---------------------------------------------------------------------------

/// One optical-density (or derived) value for an interaction pair.
///
/// Pairs that were never assayed carry [`Reading::Absent`] instead of a
/// placeholder number, so aggregation can skip them explicitly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Reading {
    Numeric(f64),
    Absent,
}

impl Reading {
    /// The numeric value, if any.
    pub fn value(self) -> Option<f64> {
        match self {
            Reading::Numeric(v) => Some(v),
            Reading::Absent => None,
        }
    }

    pub fn is_numeric(self) -> bool {
        matches!(self, Reading::Numeric(_))
    }

    /// Apply `f` to a numeric value, passing `Absent` through untouched.
    pub fn map(self, f: impl FnOnce(f64) -> f64) -> Reading {
        match self {
            Reading::Numeric(v) => Reading::Numeric(f(v)),
            Reading::Absent => Reading::Absent,
        }
    }
}

impl From<Option<f64>> for Reading {
    fn from(value: Option<f64>) -> Self {
        value.map_or(Reading::Absent, Reading::Numeric)
    }
}

impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reading::Numeric(v) => write!(f, "{v:.4}"),
            Reading::Absent => write!(f, "-"),
        }
    }
}

// Absent serializes as `null`.
impl Serialize for Reading {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.value().serialize(serializer)
    }
}

// ---------------------------------------------------------------------------
// Efflux assay conditions
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Genotype {
    /// Wild type.
    WT,
    /// Deletion mutant.
    D,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Concentration {
    OneMicromolar,
    TenMicromolar,
}

impl Concentration {
    pub fn micromolar(self) -> u32 {
        match self {
            Concentration::OneMicromolar => 1,
            Concentration::TenMicromolar => 10,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Temperature {
    Celsius30,
    Celsius42,
}

impl Temperature {
    pub fn celsius(self) -> u32 {
        match self {
            Temperature::Celsius30 => 30,
            Temperature::Celsius42 => 42,
        }
    }
}

/// One cell of the genotype x concentration x temperature design.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Condition {
    pub genotype: Genotype,
    pub concentration: Concentration,
    pub temperature: Temperature,
}

impl Condition {
    pub const fn new(
        genotype: Genotype,
        concentration: Concentration,
        temperature: Temperature,
    ) -> Self {
        Self {
            genotype,
            concentration,
            temperature,
        }
    }

    /// Legend label without the temperature, e.g. `WT 1µM`.
    pub fn series_label(&self) -> String {
        let genotype = match self.genotype {
            Genotype::WT => "WT",
            Genotype::D => "D",
        };
        format!("{genotype} {}µM", self.concentration.micromolar())
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}°C",
            self.series_label(),
            self.temperature.celsius()
        )
    }
}

// ---------------------------------------------------------------------------
// TimeSeries – the efflux dataset
// ---------------------------------------------------------------------------

/// Emission measurements per condition over a shared time axis (minutes).
#[derive(Debug, Clone)]
pub struct TimeSeries {
    /// Sampling times in minutes.
    pub minutes: Vec<f64>,
    series: IndexMap<Condition, Vec<f64>>,
}

impl TimeSeries {
    /// Build a time series, checking every vector against the time axis.
    pub fn new(
        minutes: Vec<f64>,
        series: impl IntoIterator<Item = (Condition, Vec<f64>)>,
    ) -> Result<Self, AnalysisError> {
        let series: IndexMap<Condition, Vec<f64>> = series.into_iter().collect();
        for (condition, values) in &series {
            if values.len() != minutes.len() {
                return Err(AnalysisError::ShapeMismatch {
                    what: format!("emission series {condition}"),
                    expected: minutes.len(),
                    actual: values.len(),
                });
            }
        }
        Ok(Self { minutes, series })
    }

    pub fn get(&self, condition: &Condition) -> Option<&[f64]> {
        self.series.get(condition).map(Vec::as_slice)
    }

    /// Like [`TimeSeries::get`], but a missing condition is an error.
    pub fn require(&self, condition: &Condition) -> Result<&[f64], AnalysisError> {
        self.get(condition).ok_or_else(|| AnalysisError::MissingValue {
            what: format!("emission series {condition}"),
        })
    }

    /// Time axis formatted as category labels (`0`, `5`, ...).
    pub fn minute_labels(&self) -> Vec<String> {
        self.minutes.iter().map(|m| format!("{m}")).collect()
    }
}

// ---------------------------------------------------------------------------
// Interaction tables – the two-hybrid dataset
// ---------------------------------------------------------------------------

/// Insertion-ordered mapping from interaction pair (`bait_prey`) to reading.
pub type InteractionTable = IndexMap<String, Reading>;

/// Per-pair outcome of a derived computation. A failing pair does not
/// prevent the remaining pairs from being computed.
pub type ActivityTable = IndexMap<String, Result<Reading, AnalysisError>>;

/// Numeric values of a table in key order, skipping absent entries.
pub fn numeric_values(table: &InteractionTable) -> Vec<f64> {
    table.values().filter_map(|r| r.value()).collect()
}

/// Build an [`InteractionTable`] from literal `(label, value)` pairs.
pub fn interaction_table<'a>(
    rows: impl IntoIterator<Item = (&'a str, Option<f64>)>,
) -> InteractionTable {
    rows.into_iter()
        .map(|(label, value)| (label.to_string(), Reading::from(value)))
        .collect()
}
