use std::{io::Write, path::Path};

use anyhow::bail;
use chrono_sampler::{
    loader::SampleSeries,
    parameters::{FocusGrid, Mode},
    ChronoSampler, Real, Sampler, SubIterationTime, Time,
};
use clap::ValueEnum;
use serde::Serialize;
use tracing::debug;

#[derive(Default, Debug, Clone, Copy, PartialEq, ValueEnum)]
pub(crate) enum OutputFormat {
    #[default]
    Csv,
    Json,
}

/// The value reconstructed at one focus time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct Estimate {
    pub(crate) focus: Time,
    pub(crate) value: Real,
    /// Number of samples inside the sampler's window around `focus`.
    pub(crate) in_window: usize,
}

/// A sampler config file takes precedence over the subcommand.
pub(crate) fn select_mode(
    sampler_config: Option<&Path>,
    mode: Option<Mode>,
) -> anyhow::Result<Mode> {
    match (sampler_config, mode) {
        (Some(path), _) => Mode::from_json_file(path),
        (None, Some(mode)) => Ok(mode),
        (None, None) => bail!("Either a sampler subcommand or --sampler-config is required"),
    }
}

/// Explicit focus times first, followed by the grid points.
pub(crate) fn collect_focus_times(
    mut focus: Vec<Time>,
    grid: Option<&FocusGrid>,
) -> anyhow::Result<Vec<Time>> {
    if let Some(grid) = grid {
        focus.extend(grid.times()?);
    }
    if focus.is_empty() {
        bail!("No focus times given, use --focus or --grid");
    }
    Ok(focus)
}

#[tracing::instrument(
    skip_all,
    fields(sampler = %sampler, num_samples = series.len(), num_focus = focus_times.len())
)]
pub(crate) fn estimate(
    sampler: &Sampler,
    series: &SampleSeries,
    focus_times: &[Time],
    focus_sub: Time,
) -> Vec<Estimate> {
    focus_times
        .iter()
        .map(|&focus| {
            let (value, in_window) = match series {
                SampleSeries::Scalar(points) => (
                    sampler.filter(focus, points),
                    sampler.select(focus, points).count(),
                ),
                SampleSeries::SubIteration(points) => (
                    sampler.filter_sub_iteration(SubIterationTime::new(focus, focus_sub), points),
                    sampler.select(focus, points).count(),
                ),
            };
            debug!("Estimated {value} at {focus} from {in_window} samples");
            Estimate {
                focus,
                value,
                in_window,
            }
        })
        .collect()
}

pub(crate) fn write_estimates<W: Write>(
    mut writer: W,
    format: OutputFormat,
    estimates: &[Estimate],
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Csv => {
            for estimate in estimates {
                writeln!(writer, "{},{}", estimate.focus, estimate.value)?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut writer, estimates)?;
            writeln!(writer)?;
        }
    }
    writer.flush()?;
    Ok(())
}
