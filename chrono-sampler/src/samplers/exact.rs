use super::ChronoSampler;
use crate::{LinearSpace, SamplerError, SamplerResult, SubIterationTime, Time};

/// Returns the first sample whose time matches the focus within a tolerance.
#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct ExactSampler {
    tolerance: Time,
}

impl ExactSampler {
    pub fn new(tolerance: Time) -> SamplerResult<Self> {
        if !(tolerance.is_finite() && tolerance >= 0.0) {
            return Err(SamplerError::NegativeTolerance(tolerance));
        }
        Ok(Self { tolerance })
    }

    fn matches(&self, time: Time, focus: Time) -> bool {
        (time - focus).abs() <= self.tolerance
    }
}

impl ChronoSampler for ExactSampler {
    fn filter<V: LinearSpace>(&self, focus: Time, points: &[(Time, V)]) -> V {
        points
            .iter()
            .find(|(time, _)| self.matches(*time, focus))
            .map(|(_, value)| value.clone())
            .unwrap_or_else(V::zero)
    }

    /// The sub-iteration marker must match exactly.
    fn filter_sub_iteration<V: LinearSpace>(
        &self,
        focus: SubIterationTime,
        points: &[(SubIterationTime, V)],
    ) -> V {
        points
            .iter()
            .find(|(time, _)| self.matches(time.primary, focus.primary) && time.sub == focus.sub)
            .map(|(_, value)| value.clone())
            .unwrap_or_else(V::zero)
    }

    fn get_upper_bound(&self, focus: Time) -> Time {
        focus + self.tolerance
    }

    fn get_lower_bound(&self, focus: Time) -> Time {
        focus - self.tolerance
    }

    fn tolerance(&self) -> Time {
        self.tolerance
    }
}
