use std::{fs::File, io::BufReader, path::Path, str::FromStr};

use anyhow::{anyhow, Context, Error};
use clap::{Parser, Subcommand};
use serde::Deserialize;

use crate::{ExactSampler, GaussSampler, MeanSampler, Real, Sampler, SamplerError, Time};

/// Largest number of focus times a grid may produce.
pub const MAX_GRID_POINTS: usize = 1_000_000;

/// Relative slack applied to `(to - from) / step` so that an upper end which is
/// a whole number of steps away is not lost to rounding.
const GRID_TOLERANCE: Time = 1e-9;

/// A regular grid of focus times, written on the command line as `from,to,step`.
/// Both ends are inclusive.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct FocusGrid {
    pub from: Time,
    pub to: Time,
    pub step: Time,
}

impl FocusGrid {
    /// Number of steps between `from` and the last grid point.
    fn steps(&self) -> anyhow::Result<usize> {
        let span = (self.to - self.from) / self.step;
        let steps = (span * (1.0 + GRID_TOLERANCE)).floor();
        if steps.is_finite() && steps >= 0.0 && steps < MAX_GRID_POINTS as Time {
            Ok(steps as usize)
        } else {
            Err(anyhow!(
                "Grid from {} to {} by {} exceeds {MAX_GRID_POINTS} points",
                self.from,
                self.to,
                self.step
            ))
        }
    }

    /// Every grid point, clamped so that none exceeds `to`.
    pub fn times(&self) -> anyhow::Result<Vec<Time>> {
        let steps = self.steps()?;
        Ok((0..=steps)
            .map(|i| (self.from + (i as Time) * self.step).min(self.to))
            .collect())
    }
}

impl FromStr for FocusGrid {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let vals: Vec<_> = s.split(',').map(str::trim).collect();
        if let [from, to, step] = vals.as_slice() {
            let grid = FocusGrid {
                from: Time::from_str(from)?,
                to: Time::from_str(to)?,
                step: Time::from_str(step)?,
            };
            if !(grid.step.is_finite() && grid.step > 0.0) {
                return Err(anyhow!("Grid step must be strictly positive, got '{step}'"));
            }
            if !(grid.from.is_finite() && grid.to.is_finite() && grid.from <= grid.to) {
                return Err(anyhow!("Grid must satisfy from <= to, got '{s}'"));
            }
            grid.steps()?;
            Ok(grid)
        } else {
            Err(anyhow!(
                "Incorrect number of parameters in grid, expected pattern '*,*,*', got '{s}'"
            ))
        }
    }
}

#[derive(Default, Debug, Clone, Parser, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct GaussParameters {
    /// Half-width of the kernel support
    #[clap(long)]
    pub cutoff: Time,

    /// Bandwidth of the kernel
    #[clap(long)]
    pub sigma: Real,
}

#[derive(Default, Debug, Clone, Parser, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ExactParameters {
    #[clap(long, default_value = "0")]
    #[serde(default)]
    pub tolerance: Time,
}

#[derive(Default, Debug, Clone, Parser, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct MeanParameters {
    /// Extent of the window before the focus time
    #[clap(long)]
    pub past: Time,

    /// Extent of the window after the focus time
    #[clap(long, default_value = "0")]
    #[serde(default)]
    pub future: Time,
}

#[derive(Subcommand, Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", tag = "sampler-type")]
pub enum Mode {
    #[clap(
        about = "Symmetric Gaussian-kernel average of the samples strictly inside the cutoff."
    )]
    Gauss(GaussParameters),
    #[clap(about = "Value of the first sample matching the focus time within a tolerance.")]
    Exact(ExactParameters),
    #[clap(about = "Unweighted average of the samples in a past/future window.")]
    Mean(MeanParameters),
}

impl Mode {
    /// Reads a sampler configuration from a JSON file.
    pub fn from_json_file(path: &Path) -> anyhow::Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("Cannot open sampler config {}", path.display()))?;
        serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Cannot parse sampler config {}", path.display()))
    }
}

impl TryFrom<&Mode> for Sampler {
    type Error = SamplerError;

    fn try_from(mode: &Mode) -> Result<Self, Self::Error> {
        Ok(match mode {
            Mode::Gauss(parameters) => {
                GaussSampler::new(parameters.cutoff, parameters.sigma)?.into()
            }
            Mode::Exact(parameters) => ExactSampler::new(parameters.tolerance)?.into(),
            Mode::Mean(parameters) => {
                MeanSampler::new(parameters.past, parameters.future)?.into()
            }
        })
    }
}
