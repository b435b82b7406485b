use super::{weighted_average, ChronoSampler};
use crate::{LinearSpace, PrimaryTime, Real, SamplerError, SamplerResult, SubIterationTime, Time};

/// Unweighted average over the window `[focus - past, focus + future]`.
#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct MeanSampler {
    past: Time,
    future: Time,
}

impl MeanSampler {
    pub fn new(past: Time, future: Time) -> SamplerResult<Self> {
        let valid = |extent: Time| extent.is_finite() && extent >= 0.0;
        if !(valid(past) && valid(future)) {
            return Err(SamplerError::NegativeWindow { past, future });
        }
        Ok(Self { past, future })
    }

    pub fn past(&self) -> Time {
        self.past
    }

    pub fn future(&self) -> Time {
        self.future
    }

    fn unit_weight<K: PrimaryTime>(&self, focus: Time) -> impl Fn(&K) -> Option<Real> + '_ {
        let window = self.get_lower_bound(focus)..=self.get_upper_bound(focus);
        move |time: &K| window.contains(&time.primary()).then_some(1.0)
    }
}

impl ChronoSampler for MeanSampler {
    fn filter<V: LinearSpace>(&self, focus: Time, points: &[(Time, V)]) -> V {
        weighted_average(points, self.unit_weight(focus))
    }

    fn filter_sub_iteration<V: LinearSpace>(
        &self,
        focus: SubIterationTime,
        points: &[(SubIterationTime, V)],
    ) -> V {
        weighted_average(points, self.unit_weight(focus.primary))
    }

    fn get_upper_bound(&self, focus: Time) -> Time {
        focus + self.future
    }

    fn get_lower_bound(&self, focus: Time) -> Time {
        focus - self.past
    }

    fn tolerance(&self) -> Time {
        Time::default()
    }
}
