//! Command-line surface: one subcommand per chart plus `stats` and `activity`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::chart::ChartKind;
use crate::config::AnalysisConfig;
use crate::report::OutputFormat;

#[derive(Parser, Debug)]
#[command(
    name = "rhodamine-y2h",
    version,
    about = "Rhodamine 6G efflux and yeast two-hybrid assay analysis"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[command(flatten)]
    pub analysis: AnalysisArgs,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print descriptive statistics of the four D-minus-WT efflux differences
    Stats(StatsArgs),
    /// Print undiluted readings, reporter activity and z-scores per pair
    Activity(FormatArgs),
    /// Bar chart of the efflux assay at 30°C
    #[command(name = "efflux-30")]
    Efflux30(ChartArgs),
    /// Bar chart of the efflux assay at 42°C
    #[command(name = "efflux-42")]
    Efflux42(ChartArgs),
    /// Bar chart of beta-galactosidase units per interaction pair
    BetaGal(ChartArgs),
}

/// Overrides of the named analysis constants.
#[derive(Args, Debug, Default)]
pub struct AnalysisArgs {
    /// Pair to exclude from the activity results (repeatable; replaces the defaults)
    #[arg(long = "exclude", value_name = "PAIR", global = true)]
    pub exclude: Vec<String>,

    /// Pair to flag in the activity chart (repeatable; replaces the defaults)
    #[arg(long = "highlight", value_name = "PAIR", global = true)]
    pub highlight: Vec<String>,

    /// Recompute the z-score reference from the filtered activity instead of
    /// using the frozen mean and variance
    #[arg(long, global = true)]
    pub recompute_reference: bool,

    /// Dilution factor applied to the optical densities
    #[arg(
        long,
        value_name = "FACTOR",
        global = true,
        allow_negative_numbers = true,
        value_parser = positive_factor
    )]
    pub dilution_factor: Option<f64>,
}

/// A finite factor greater than zero.
fn positive_factor(raw: &str) -> Result<f64, String> {
    let factor: f64 = raw.parse().map_err(|e| format!("{e}"))?;
    if factor.is_finite() && factor > 0.0 {
        Ok(factor)
    } else {
        Err(format!("{raw} is not a positive finite number"))
    }
}

impl AnalysisArgs {
    /// Defaults with the command-line overrides applied.
    pub fn to_config(&self) -> AnalysisConfig {
        let mut config = AnalysisConfig::default();
        if !self.exclude.is_empty() {
            config.exclusions = self.exclude.clone();
        }
        if !self.highlight.is_empty() {
            config.highlights = self.highlight.clone();
        }
        if let Some(factor) = self.dilution_factor {
            config.assay.dilution_factor = factor;
        }
        config.recompute_reference = self.recompute_reference;
        config
    }
}

#[derive(Args, Debug, Default)]
pub struct FormatArgs {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Args, Debug, Default)]
pub struct StatsArgs {
    #[command(flatten)]
    pub format: FormatArgs,

    /// Also summarize the filtered reporter activity
    #[arg(long)]
    pub with_activity: bool,
}

#[derive(Args, Debug, Default)]
pub struct ChartArgs {
    /// PNG output path (defaults to `<chart>.png`; skipped with --show unless given)
    #[arg(short, long, value_name = "PATH")]
    pub out: Option<PathBuf>,

    /// Open the chart in a viewer window
    #[arg(long)]
    pub show: bool,
}

impl ChartArgs {
    /// Where to write the PNG, if anywhere.
    pub fn output_path(&self, kind: ChartKind) -> Option<PathBuf> {
        match (&self.out, self.show) {
            (Some(path), _) => Some(path.clone()),
            (None, true) => None,
            (None, false) => Some(PathBuf::from(format!("{}.png", kind.file_stem()))),
        }
    }
}
