//! Text and JSON renderings of the computed statistics.

use std::fmt::{self, Write as _};

use anyhow::Result;
use serde::Serialize;

use crate::analysis::DescriptiveStats;
use crate::config::{AssayConstants, ReferenceStats};
use crate::data::model::{InteractionTable, Reading};
use crate::pipeline::{NamedSummary, TwoHybridAnalysis};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// `key = value` lines grouped under `[section]` headers
    #[default]
    Text,
    Json,
}

// ---------------------------------------------------------------------------
// Descriptive statistics
// ---------------------------------------------------------------------------

fn optional(value: Option<f64>) -> String {
    value.map_or_else(|| "undefined".to_string(), |v| v.to_string())
}

fn write_stats(out: &mut String, name: &str, stats: &DescriptiveStats) -> fmt::Result {
    writeln!(out, "[{name}]")?;
    writeln!(out, "nobs = {}", stats.nobs)?;
    writeln!(out, "min = {}", stats.min)?;
    writeln!(out, "max = {}", stats.max)?;
    writeln!(out, "mean = {}", stats.mean)?;
    writeln!(out, "variance = {}", stats.variance)?;
    writeln!(out, "skewness = {}", optional(stats.skewness))?;
    writeln!(out, "kurtosis = {}", optional(stats.kurtosis))
}

/// Render named summaries, one section each.
pub fn format_summaries(summaries: &[NamedSummary], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(summaries)?),
        OutputFormat::Text => {
            let mut out = String::new();
            for (i, summary) in summaries.iter().enumerate() {
                if i > 0 {
                    out.push('\n');
                }
                write_stats(&mut out, &summary.name, &summary.stats)?;
            }
            Ok(out)
        }
    }
}

// ---------------------------------------------------------------------------
// Two-hybrid tables
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct PairRow<'a> {
    pair: &'a str,
    od600: Reading,
    od420: Reading,
    activity: Option<f64>,
    error: Option<String>,
}

#[derive(Serialize)]
struct ActivityReport<'a> {
    assay: &'a AssayConstants,
    pairs: Vec<PairRow<'a>>,
    filtered: &'a InteractionTable,
    summary: &'a DescriptiveStats,
    reference: &'a ReferenceStats,
    z_scores: Vec<(&'a str, f64)>,
}

fn pair_rows(analysis: &TwoHybridAnalysis) -> Vec<PairRow<'_>> {
    analysis
        .activity
        .iter()
        .map(|(pair, outcome)| PairRow {
            pair,
            od600: analysis.od600.get(pair).copied().unwrap_or(Reading::Absent),
            od420: analysis.od420.get(pair).copied().unwrap_or(Reading::Absent),
            activity: outcome.as_ref().ok().and_then(|r| r.value()),
            error: outcome.as_ref().err().map(ToString::to_string),
        })
        .collect()
}

fn z_rows(analysis: &TwoHybridAnalysis) -> Vec<(&str, f64)> {
    analysis
        .filtered
        .keys()
        .map(String::as_str)
        .zip(analysis.z_scores.iter().copied())
        .collect()
}

/// Render the undiluted readings, activities, filtered pairs and z-scores.
pub fn format_activity(analysis: &TwoHybridAnalysis, format: OutputFormat) -> Result<String> {
    if format == OutputFormat::Json {
        let report = ActivityReport {
            assay: &analysis.assay,
            pairs: pair_rows(analysis),
            filtered: &analysis.filtered,
            summary: &analysis.summary,
            reference: &analysis.reference,
            z_scores: z_rows(analysis),
        };
        return Ok(serde_json::to_string_pretty(&report)?);
    }

    let mut out = String::new();
    writeln!(out, "[activity]")?;
    for row in pair_rows(analysis) {
        let activity = match (&row.error, row.activity) {
            (Some(err), _) => format!("error: {err}"),
            (None, Some(v)) => format!("{v:.4}"),
            (None, None) => "-".to_string(),
        };
        writeln!(
            out,
            "{} = od600 {} od420 {} activity {}",
            row.pair, row.od600, row.od420, activity
        )?;
    }

    out.push('\n');
    write_stats(&mut out, "filtered_activity", &analysis.summary)?;

    out.push('\n');
    writeln!(
        out,
        "[z_scores] (mean = {}, variance = {})",
        analysis.reference.mean, analysis.reference.variance
    )?;
    for (pair, z) in z_rows(analysis) {
        writeln!(out, "{pair} = {z:.4}")?;
    }
    Ok(out)
}
