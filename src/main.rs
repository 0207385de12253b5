use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use rhodamine_y2h::app::run_viewer;
use rhodamine_y2h::chart::render::render_png;
use rhodamine_y2h::chart::ChartKind;
use rhodamine_y2h::cli::{ChartArgs, Cli, Command};
use rhodamine_y2h::config::AnalysisConfig;
use rhodamine_y2h::pipeline::{efflux_summaries, NamedSummary, PairFailures, TwoHybridAnalysis};
use rhodamine_y2h::report::{format_activity, format_summaries};

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();
    let config = cli.analysis.to_config();

    match run(cli.command, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e:#}");
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command, config: &AnalysisConfig) -> Result<()> {
    match command {
        Command::Stats(args) => {
            let mut summaries = efflux_summaries().context("summarizing efflux differences")?;
            if args.with_activity {
                let analysis = two_hybrid(config)?;
                summaries.push(NamedSummary {
                    name: "beta_gal".into(),
                    stats: analysis.summary,
                });
            }
            print!("{}", format_summaries(&summaries, args.format.format)?);
            Ok(())
        }
        Command::Activity(args) => {
            let analysis = two_hybrid(config)?;
            print!("{}", format_activity(&analysis, args.format)?);
            Ok(())
        }
        Command::Efflux30(args) => chart(ChartKind::Efflux30, &args, config),
        Command::Efflux42(args) => chart(ChartKind::Efflux42, &args, config),
        Command::BetaGal(args) => chart(ChartKind::BetaGal, &args, config),
    }
}

/// The two-hybrid pipeline, failing if any pair could not be computed.
fn two_hybrid(config: &AnalysisConfig) -> Result<TwoHybridAnalysis> {
    TwoHybridAnalysis::run(config, PairFailures::Reject).context("computing reporter activity")
}

fn chart(kind: ChartKind, args: &ChartArgs, config: &AnalysisConfig) -> Result<()> {
    let spec = kind
        .build(config)
        .with_context(|| format!("building the {} chart", kind.file_stem()))?;
    if let Some(path) = args.output_path(kind) {
        render_png(&spec, &path)?;
    }
    if args.show {
        run_viewer(spec)?;
    }
    Ok(())
}
