mod processing;

use anyhow::Context;
use chrono_sampler::{
    loader::load_sample_file,
    parameters::{FocusGrid, Mode},
    Sampler, Time,
};
use clap::Parser;
use coupling_common::init_tracer;
use processing::{collect_focus_times, estimate, select_mode, write_estimates, OutputFormat};
use std::path::PathBuf;
use tracing::{info, level_filters::LevelFilter};

// cargo run --bin chrono-sampler -- --samples configs/samples.csv --grid 0,20,0.5 \
//     gauss --cutoff 5 --sigma 2

#[derive(Debug, Parser)]
#[clap(author, version, about)]
struct Cli {
    /// File of `time,value` or `time,sub,value` lines
    #[clap(long)]
    samples: PathBuf,

    /// Focus times at which to estimate the series
    #[clap(long, value_delimiter = ',', allow_hyphen_values = true)]
    focus: Vec<Time>,

    /// Regular grid of focus times, given as `from,to,step`
    #[clap(long, allow_hyphen_values = true)]
    grid: Option<FocusGrid>,

    /// Sub-iteration marker of the focus, used for files with three columns
    #[clap(long, default_value = "0")]
    focus_sub: Time,

    /// If set, the sampler is read from this JSON file instead of the subcommand
    #[clap(long)]
    sampler_config: Option<PathBuf>,

    #[clap(long, value_enum, default_value_t = OutputFormat::Csv)]
    format: OutputFormat,

    #[command(subcommand)]
    mode: Option<Mode>,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    let _tracer = init_tracer!(LevelFilter::INFO);

    let mode = select_mode(args.sampler_config.as_deref(), args.mode)?;
    let sampler = Sampler::try_from(&mode).context("Invalid sampler parameters")?;
    info!("Using {sampler} sampler: {sampler:?}");

    let focus_times = collect_focus_times(args.focus, args.grid.as_ref())?;

    let series = load_sample_file(&args.samples)
        .with_context(|| format!("Cannot load samples from {}", args.samples.display()))?;
    info!("Loaded {} samples", series.len());

    let estimates = estimate(&sampler, &series, &focus_times, args.focus_sub);
    write_estimates(std::io::stdout().lock(), args.format, &estimates)
}
