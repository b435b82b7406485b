pub mod exact;
pub mod gauss;
pub mod mean;

use tracing::trace;

use crate::{LinearSpace, PrimaryTime, Real, SubIterationTime, Time};
pub use exact::ExactSampler;
pub use gauss::GaussSampler;
pub use mean::MeanSampler;

/// The capability set shared by every temporal sampler.
/// A sampler is immutable once constructed, so all methods take `&self`
/// and may be invoked concurrently.
pub trait ChronoSampler: Clone + Send + Sync {
    /// Estimates the value at `focus` from samples keyed by a scalar time.
    fn filter<V: LinearSpace>(&self, focus: Time, points: &[(Time, V)]) -> V;

    /// Estimates the value at `focus` from samples keyed by a primary time
    /// and a sub-iteration marker.
    fn filter_sub_iteration<V: LinearSpace>(
        &self,
        focus: SubIterationTime,
        points: &[(SubIterationTime, V)],
    ) -> V;

    /// Latest time at which a sample can still contribute to `focus`.
    fn get_upper_bound(&self, focus: Time) -> Time;

    /// Earliest time at which a sample can still contribute to `focus`.
    fn get_lower_bound(&self, focus: Time) -> Time;

    /// Largest time difference under which two time-stamps are treated
    /// as the same instant when samples are matched.
    fn tolerance(&self) -> Time;

    /// Iterates over the points whose primary time lies within
    /// `[get_lower_bound(focus), get_upper_bound(focus)]`.
    fn select<'a, K, V>(
        &self,
        focus: Time,
        points: &'a [(K, V)],
    ) -> impl Iterator<Item = &'a (K, V)>
    where
        K: PrimaryTime,
    {
        let window = self.get_lower_bound(focus)..=self.get_upper_bound(focus);
        points
            .iter()
            .filter(move |(time, _)| window.contains(&time.primary()))
    }
}

/// Accumulates `value * w` over every point for which `weight` returns `Some(w)`,
/// and normalises by the total weight.
/// If the total weight does not exceed `Real::EPSILON` the zero value is returned.
pub(crate) fn weighted_average<K, V, F>(points: &[(K, V)], weight: F) -> V
where
    V: LinearSpace,
    F: Fn(&K) -> Option<Real>,
{
    let (vsum, wsum) = points
        .iter()
        .filter_map(|(time, value)| weight(time).map(|w| (value, w)))
        .fold((V::zero(), Real::default()), |(vsum, wsum), (value, w)| {
            (vsum + value.clone() * w, wsum + w)
        });

    if wsum > Real::EPSILON {
        vsum / wsum
    } else {
        trace!("Total weight {wsum} below threshold, returning zero");
        V::zero()
    }
}

/// The family of samplers a coupling channel can be configured with.
#[derive(Debug, Clone, PartialEq, strum::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum Sampler {
    Gauss(GaussSampler),
    Exact(ExactSampler),
    Mean(MeanSampler),
}

impl From<GaussSampler> for Sampler {
    fn from(sampler: GaussSampler) -> Self {
        Self::Gauss(sampler)
    }
}

impl From<ExactSampler> for Sampler {
    fn from(sampler: ExactSampler) -> Self {
        Self::Exact(sampler)
    }
}

impl From<MeanSampler> for Sampler {
    fn from(sampler: MeanSampler) -> Self {
        Self::Mean(sampler)
    }
}

impl ChronoSampler for Sampler {
    fn filter<V: LinearSpace>(&self, focus: Time, points: &[(Time, V)]) -> V {
        match self {
            Sampler::Gauss(sampler) => sampler.filter(focus, points),
            Sampler::Exact(sampler) => sampler.filter(focus, points),
            Sampler::Mean(sampler) => sampler.filter(focus, points),
        }
    }

    fn filter_sub_iteration<V: LinearSpace>(
        &self,
        focus: SubIterationTime,
        points: &[(SubIterationTime, V)],
    ) -> V {
        match self {
            Sampler::Gauss(sampler) => sampler.filter_sub_iteration(focus, points),
            Sampler::Exact(sampler) => sampler.filter_sub_iteration(focus, points),
            Sampler::Mean(sampler) => sampler.filter_sub_iteration(focus, points),
        }
    }

    fn get_upper_bound(&self, focus: Time) -> Time {
        match self {
            Sampler::Gauss(sampler) => sampler.get_upper_bound(focus),
            Sampler::Exact(sampler) => sampler.get_upper_bound(focus),
            Sampler::Mean(sampler) => sampler.get_upper_bound(focus),
        }
    }

    fn get_lower_bound(&self, focus: Time) -> Time {
        match self {
            Sampler::Gauss(sampler) => sampler.get_lower_bound(focus),
            Sampler::Exact(sampler) => sampler.get_lower_bound(focus),
            Sampler::Mean(sampler) => sampler.get_lower_bound(focus),
        }
    }

    fn tolerance(&self) -> Time {
        match self {
            Sampler::Gauss(sampler) => sampler.tolerance(),
            Sampler::Exact(sampler) => sampler.tolerance(),
            Sampler::Mean(sampler) => sampler.tolerance(),
        }
    }
}
