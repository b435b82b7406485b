//! Temporal samplers used to reconstruct a coupled field at a requested
//! coupling time from samples produced at other, possibly non-aligned, times.
//!
//! Typical usage may look like:
//! ```rust
//! use chrono_sampler::{ChronoSampler, GaussSampler};
//!
//! let sampler = GaussSampler::new(5.0, 2.0).unwrap();
//! let points = vec![(8.0, 1.0), (10.0, 2.0), (12.0, 3.0)];
//! let value: f64 = sampler.filter(10.0, &points);
//! assert!((value - 2.0).abs() < 1e-12);
//! ```

pub mod error;
pub mod linear;
pub mod loader;
pub mod parameters;
pub mod samplers;
pub mod time;

pub use coupling_common::{Int, Real, Time};
pub use error::{SamplerError, SamplerResult};
pub use linear::{LinearSpace, ValueArray};
pub use samplers::{ChronoSampler, ExactSampler, GaussSampler, MeanSampler, Sampler};
pub use time::{PrimaryTime, SubIterationTime};
