//! Renderer-independent bar chart model.
//!
//! A [`BarChartSpec`] fixes every bar's position, height and colour, so the
//! PNG renderer ([`render`]) and the viewer window draw identical charts.

pub mod render;

use log::debug;

use crate::color::{series_color, Rgb8, BASE_COLOR, HIGHLIGHT_COLOR, SERIES_COLORS};
use crate::config::AnalysisConfig;
use crate::data::loader::load_efflux;
use crate::data::model::{
    Concentration, Condition, Genotype, InteractionTable, Reading, Temperature, TimeSeries,
};
use crate::error::{AnalysisError, Result};
use crate::pipeline::{PairFailures, TwoHybridAnalysis};

/// Width of one bar in a grouped chart, in category units.
pub const GROUPED_BAR_WIDTH: f64 = 0.1;

/// Width of one bar in a single-series chart, in category units.
pub const SINGLE_BAR_WIDTH: f64 = 0.3;

// ---------------------------------------------------------------------------
// Model
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct ChartBar {
    /// Index into [`BarChartSpec::categories`].
    pub category: usize,
    /// Horizontal centre (category index plus series offset).
    pub center: f64,
    pub height: f64,
    pub color: Rgb8,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarSeries {
    /// Legend entry; `None` keeps the series out of the legend.
    pub name: Option<String>,
    pub color: Rgb8,
    pub bars: Vec<ChartBar>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarChartSpec {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub categories: Vec<String>,
    pub series: Vec<BarSeries>,
    pub bar_width: f64,
    /// Output size in pixels.
    pub size: (u32, u32),
}

/// Title and axis labels of a chart.
#[derive(Debug, Clone)]
pub struct ChartLabels {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
}

impl ChartLabels {
    pub fn new(title: impl Into<String>, x_label: impl Into<String>, y_label: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            x_label: x_label.into(),
            y_label: y_label.into(),
        }
    }
}

impl BarChartSpec {
    /// Value range covering every bar and the zero baseline, with headroom.
    pub fn value_range(&self) -> (f64, f64) {
        let heights = self.series.iter().flat_map(|s| s.bars.iter().map(|b| b.height));
        let (lo, hi) = heights.fold((0.0f64, 0.0f64), |(lo, hi), h| (lo.min(h), hi.max(h)));
        let pad = (hi - lo).max(f64::EPSILON) * 0.05;
        (if lo < 0.0 { lo - pad } else { 0.0 }, hi + pad)
    }

    /// Horizontal extent: half a category of margin on both sides.
    pub fn category_range(&self) -> (f64, f64) {
        (-0.5, self.categories.len() as f64 - 0.5)
    }

    /// Label for an axis position, if it falls on a category centre.
    pub fn category_at(&self, x: f64) -> Option<&str> {
        let idx = x.round();
        if (x - idx).abs() > 1e-6 || idx < 0.0 {
            return None;
        }
        self.categories.get(idx as usize).map(String::as_str)
    }

    /// `(category, series, value)` for every bar, series by series.
    pub fn rows(&self) -> Vec<(&str, &str, f64)> {
        self.series
            .iter()
            .flat_map(|s| {
                let series = s.name.as_deref().unwrap_or("");
                s.bars
                    .iter()
                    .map(move |b| (self.categories[b.category].as_str(), series, b.height))
            })
            .collect()
    }

    pub fn has_legend(&self) -> bool {
        self.series.iter().any(|s| s.name.is_some())
    }
}

// ---------------------------------------------------------------------------
// Builders
// ---------------------------------------------------------------------------

/// Horizontal offsets for `n` side-by-side series of width `width`.
///
/// An even count leaves the category centre free (`-2w, -w, +w, +2w` for
/// four series); an odd count is centred on it.
pub fn series_offsets(n: usize, width: f64) -> Vec<f64> {
    if n % 2 == 0 {
        let half = n / 2;
        (0..n)
            .map(|i| {
                if i < half {
                    -((half - i) as f64) * width
                } else {
                    (i - half + 1) as f64 * width
                }
            })
            .collect()
    } else {
        let mid = (n / 2) as f64;
        (0..n).map(|i| (i as f64 - mid) * width).collect()
    }
}

/// Grouped bar chart: 2 to 4 named series over shared categories.
pub fn grouped_bar_chart(
    labels: ChartLabels,
    categories: Vec<String>,
    series: Vec<(String, Vec<f64>)>,
) -> Result<BarChartSpec> {
    let max = SERIES_COLORS.len();
    if !(2..=max).contains(&series.len()) {
        return Err(AnalysisError::ShapeMismatch {
            what: format!("grouped bar chart series count (2 to {max})"),
            expected: series.len().clamp(2, max),
            actual: series.len(),
        });
    }
    let offsets = series_offsets(series.len(), GROUPED_BAR_WIDTH);

    let series = series
        .into_iter()
        .enumerate()
        .map(|(i, (name, values))| {
            if values.len() != categories.len() {
                return Err(AnalysisError::ShapeMismatch {
                    what: format!("series {name}"),
                    expected: categories.len(),
                    actual: values.len(),
                });
            }
            let color = series_color(i).ok_or_else(|| AnalysisError::ShapeMismatch {
                what: "grouped bar chart colours".into(),
                expected: max,
                actual: i + 1,
            })?;
            let bars = values
                .iter()
                .enumerate()
                .map(|(category, &height)| ChartBar {
                    category,
                    center: category as f64 + offsets[i],
                    height,
                    color,
                })
                .collect();
            Ok(BarSeries {
                name: Some(name),
                color,
                bars,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(BarChartSpec {
        title: labels.title,
        x_label: labels.x_label,
        y_label: labels.y_label,
        categories,
        series,
        bar_width: GROUPED_BAR_WIDTH,
        size: (1000, 600),
    })
}

/// One bar per pair in key order; pairs named in `highlights` are drawn in
/// the highlight colour.
pub fn highlighted_bar_chart<S: AsRef<str>>(
    labels: ChartLabels,
    table: &InteractionTable,
    highlights: &[S],
) -> Result<BarChartSpec> {
    for label in highlights {
        if !table.contains_key(label.as_ref()) {
            return Err(AnalysisError::MissingValue {
                what: format!("highlighted pair {} is not in the chart", label.as_ref()),
            });
        }
    }

    let base = Rgb8::from(BASE_COLOR);
    let highlight = Rgb8::from(HIGHLIGHT_COLOR);
    let bars = table
        .iter()
        .enumerate()
        .map(|(category, (pair, reading))| {
            let Reading::Numeric(height) = *reading else {
                return Err(AnalysisError::MissingValue {
                    what: format!("bar height for {pair}"),
                });
            };
            let flagged = highlights.iter().any(|h| h.as_ref() == pair.as_str());
            Ok(ChartBar {
                category,
                center: category as f64,
                height,
                color: if flagged { highlight } else { base },
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(BarChartSpec {
        title: labels.title,
        x_label: labels.x_label,
        y_label: labels.y_label,
        categories: table.keys().cloned().collect(),
        series: vec![BarSeries {
            name: None,
            color: base,
            bars,
        }],
        bar_width: SINGLE_BAR_WIDTH,
        size: (1600, 700),
    })
}

// ---------------------------------------------------------------------------
// The assay charts
// ---------------------------------------------------------------------------

/// Grouped emission chart at one temperature.
pub fn efflux_chart(series: &TimeSeries, temperature: Temperature) -> Result<BarChartSpec> {
    let order = [
        (Genotype::WT, Concentration::OneMicromolar),
        (Genotype::D, Concentration::OneMicromolar),
        (Genotype::WT, Concentration::TenMicromolar),
        (Genotype::D, Concentration::TenMicromolar),
    ];
    let data = order
        .into_iter()
        .map(|(genotype, concentration)| {
            let condition = Condition::new(genotype, concentration, temperature);
            Ok((condition.series_label(), series.require(&condition)?.to_vec()))
        })
        .collect::<Result<Vec<_>>>()?;

    grouped_bar_chart(
        ChartLabels::new(
            format!("Rhodamine 6G Efflux Assay ({}°C)", temperature.celsius()),
            "Minutes of incubation",
            "Emission at 553nm",
        ),
        series.minute_labels(),
        data,
    )
}

/// Highlights that survive the exclusion list. Excluded pairs are not on the
/// chart, so flagging them is dropped rather than treated as an unknown pair.
pub fn effective_highlights(config: &AnalysisConfig) -> Vec<&str> {
    config
        .highlights
        .iter()
        .map(String::as_str)
        .filter(|label| {
            let excluded = config.exclusions.iter().any(|ex| ex.as_str() == *label);
            if excluded {
                debug!("highlight {label} is excluded, not flagging it");
            }
            !excluded
        })
        .collect()
}

/// Reporter activity per pair with the configured highlights.
pub fn beta_gal_chart(analysis: &TwoHybridAnalysis, config: &AnalysisConfig) -> Result<BarChartSpec> {
    highlighted_bar_chart(
        ChartLabels::new(
            "Beta galactosidase units for respective hybrid system",
            "protein1_protein2",
            "beta galactosidase units [units / min * cell]",
        ),
        &analysis.filtered,
        effective_highlights(config).as_slice(),
    )
}

/// The charts the tool can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Efflux30,
    Efflux42,
    BetaGal,
}

impl ChartKind {
    /// Default output file stem.
    pub fn file_stem(self) -> &'static str {
        match self {
            ChartKind::Efflux30 => "efflux-30",
            ChartKind::Efflux42 => "efflux-42",
            ChartKind::BetaGal => "beta-gal",
        }
    }

    /// Run the pipeline this chart needs and build its model.
    ///
    /// The activity chart refuses to draw when any pair failed to compute.
    pub fn build(self, config: &AnalysisConfig) -> Result<BarChartSpec> {
        match self {
            ChartKind::Efflux30 => efflux_chart(&load_efflux()?, Temperature::Celsius30),
            ChartKind::Efflux42 => efflux_chart(&load_efflux()?, Temperature::Celsius42),
            ChartKind::BetaGal => {
                let analysis = TwoHybridAnalysis::run(config, PairFailures::Reject)?;
                beta_gal_chart(&analysis, config)
            }
        }
    }
}
