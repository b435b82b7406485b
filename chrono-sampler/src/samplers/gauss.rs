use std::f64::consts::PI;

use super::{weighted_average, ChronoSampler};
use crate::{LinearSpace, PrimaryTime, Real, SamplerError, SamplerResult, SubIterationTime, Time};

/// Symmetric Gaussian-kernel sampler.
/// Samples on either side of the focus time contribute, provided they lie
/// strictly inside the cutoff radius. The kernel scale is `sigma` itself,
/// not `sigma` squared.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaussSampler {
    cutoff: Time,
    sigma: Real,
}

impl GaussSampler {
    /// Both `cutoff` and `sigma` must be finite and strictly positive.
    pub fn new(cutoff: Time, sigma: Real) -> SamplerResult<Self> {
        if !(cutoff.is_finite() && cutoff > 0.0) {
            return Err(SamplerError::NonPositiveCutoff(cutoff));
        }
        if !(sigma.is_finite() && sigma > 0.0) {
            return Err(SamplerError::NonPositiveSigma(sigma));
        }
        Ok(Self { cutoff, sigma })
    }

    pub fn cutoff(&self) -> Time {
        self.cutoff
    }

    pub fn sigma(&self) -> Real {
        self.sigma
    }

    /// Kernel weight of a sample at distance `dt` from the focus,
    /// regardless of the cutoff.
    pub fn weight(&self, dt: Time) -> Real {
        (2.0 * PI * self.sigma).powf(-0.5) * (-0.5 * dt * dt / self.sigma).exp()
    }

    fn kernel<K: PrimaryTime>(&self, focus: Time) -> impl Fn(&K) -> Option<Real> + '_ {
        move |time: &K| {
            let dt = (time.primary() - focus).abs();
            (dt < self.cutoff).then(|| self.weight(dt))
        }
    }
}

impl ChronoSampler for GaussSampler {
    fn filter<V: LinearSpace>(&self, focus: Time, points: &[(Time, V)]) -> V {
        weighted_average(points, self.kernel(focus))
    }

    fn filter_sub_iteration<V: LinearSpace>(
        &self,
        focus: SubIterationTime,
        points: &[(SubIterationTime, V)],
    ) -> V {
        weighted_average(points, self.kernel(focus.primary))
    }

    fn get_upper_bound(&self, focus: Time) -> Time {
        focus + self.cutoff
    }

    fn get_lower_bound(&self, focus: Time) -> Time {
        focus - self.cutoff
    }

    fn tolerance(&self) -> Time {
        Time::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ValueArray;
    use assert_approx_eq::assert_approx_eq;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    fn reference_weight(dt: Real, sigma: Real) -> Real {
        1.0 / (2.0 * PI * sigma).sqrt() * (-dt * dt / (2.0 * sigma)).exp()
    }

    #[test]
    fn rejects_invalid_parameters() {
        assert_eq!(
            GaussSampler::new(0.0, 1.0),
            Err(SamplerError::NonPositiveCutoff(0.0))
        );
        assert_eq!(
            GaussSampler::new(-1.0, 1.0),
            Err(SamplerError::NonPositiveCutoff(-1.0))
        );
        assert_eq!(
            GaussSampler::new(1.0, 0.0),
            Err(SamplerError::NonPositiveSigma(0.0))
        );
        assert_eq!(
            GaussSampler::new(1.0, -2.0),
            Err(SamplerError::NonPositiveSigma(-2.0))
        );
        assert!(GaussSampler::new(1.0, Real::NAN).is_err());
        assert!(GaussSampler::new(Time::INFINITY, 1.0).is_err());
    }

    #[test]
    fn stores_parameters_verbatim() {
        let sampler = GaussSampler::new(5.0, 2.0).unwrap();
        assert_eq!(sampler.cutoff(), 5.0);
        assert_eq!(sampler.sigma(), 2.0);
    }

    #[test]
    fn weight_uses_sigma_as_scale() {
        let sampler = GaussSampler::new(10.0, 2.0).unwrap();
        for dt in [0.0, 0.5, 1.0, 2.0, 3.7] {
            assert_approx_eq!(sampler.weight(dt), reference_weight(dt, 2.0), 1e-15);
        }
        assert_approx_eq!(sampler.weight(0.0), (4.0 * PI).powf(-0.5), 1e-15);
    }

    #[test]
    fn concrete_scenario() {
        let sampler = GaussSampler::new(5.0, 2.0).unwrap();
        let points = vec![(8.0, 1.0), (10.0, 2.0), (12.0, 3.0)];
        let w0 = reference_weight(0.0, 2.0);
        let w2 = reference_weight(2.0, 2.0);
        let expected = (1.0 * w2 + 2.0 * w0 + 3.0 * w2) / (w2 + w0 + w2);
        assert_approx_eq!(sampler.filter(10.0, &points), expected, 1e-12);
    }

    #[test]
    fn asymmetric_scenario() {
        let sampler = GaussSampler::new(5.0, 2.0).unwrap();
        let points = vec![(7.0, 4.0), (10.5, -1.0), (14.0, 6.0), (20.0, 1000.0)];
        let w = |dt| reference_weight(dt, 2.0);
        let expected = (4.0 * w(3.0) - 1.0 * w(0.5) + 6.0 * w(4.0)) / (w(3.0) + w(0.5) + w(4.0));
        assert_approx_eq!(sampler.filter(10.0, &points), expected, 1e-12);
    }

    #[test]
    fn exact_match_returns_value() {
        let sampler = GaussSampler::new(1.0, 0.5).unwrap();
        let points = vec![(0.0, 10.0), (3.0, 7.25), (6.0, 20.0)];
        assert_approx_eq!(sampler.filter(3.0, &points), 7.25, 1e-12);
    }

    #[test]
    fn symmetric_samples_average() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let mut checked = 0;
        for _ in 0..200 {
            let cutoff: Time = rng.random_range(0.5..10.0);
            let sigma: Real = rng.random_range(0.1..5.0);
            let focus: Time = rng.random_range(-100.0..100.0);
            let d: Time = rng.random_range(0.0..cutoff * 0.9);
            let a: Real = rng.random_range(-10.0..10.0);
            let b: Real = rng.random_range(-10.0..10.0);

            let sampler = GaussSampler::new(cutoff, sigma).unwrap();
            // Keep clear of the zero fallback for the total weight
            if 2.0 * sampler.weight(d) <= 1e3 * Real::EPSILON {
                continue;
            }
            let points = vec![(focus - d, a), (focus + d, b)];
            assert_approx_eq!(sampler.filter(focus, &points), (a + b) / 2.0, 1e-9);
            checked += 1;
        }
        assert!(checked > 50);
    }

    #[test]
    fn underflowing_symmetric_samples_are_zero() {
        let sampler = GaussSampler::new(100.0, 0.1).unwrap();
        assert!(2.0 * sampler.weight(50.0) <= Real::EPSILON);
        let points = vec![(-50.0, 3.0), (50.0, 5.0)];
        assert_eq!(sampler.filter(0.0, &points), 0.0);
    }

    #[test]
    fn weight_decays_monotonically() {
        let sampler = GaussSampler::new(10.0, 1.5).unwrap();
        let distances: Vec<Time> = (0..100).map(|i| i as Time * 0.05).collect();
        for pair in distances.windows(2) {
            if let [near, far] = pair {
                assert!(sampler.weight(*near) > sampler.weight(*far));
            }
        }
    }

    #[test]
    fn boundary_sample_is_excluded() {
        let sampler = GaussSampler::new(2.0, 1.0).unwrap();
        let points = vec![(8.0, 100.0), (10.0, 1.0), (12.0, 100.0)];
        assert_approx_eq!(sampler.filter(10.0, &points), 1.0, 1e-12);

        let boundary_only = vec![(8.0, 100.0), (12.0, 100.0)];
        assert_eq!(sampler.filter(10.0, &boundary_only), 0.0);
    }

    #[test]
    fn empty_or_out_of_range_is_zero() {
        let sampler = GaussSampler::new(1.0, 1.0).unwrap();
        let empty: Vec<(Time, Real)> = vec![];
        assert_eq!(sampler.filter(0.0, &empty), 0.0);

        let far = vec![(5.0, 3.0), (-5.0, 4.0)];
        assert_eq!(sampler.filter(0.0, &far), 0.0);

        let far_vector = vec![(5.0, ValueArray::new([1.0, 2.0]))];
        assert_eq!(sampler.filter(0.0, &far_vector), ValueArray::new([0.0, 0.0]));
    }

    #[test]
    fn vector_values_are_filtered_component_wise() {
        let sampler = GaussSampler::new(5.0, 2.0).unwrap();
        let points = vec![
            (8.0, ValueArray::new([1.0, -1.0])),
            (12.0, ValueArray::new([3.0, -3.0])),
        ];
        let value = sampler.filter(10.0, &points);
        assert_approx_eq!(value[0], 2.0, 1e-12);
        assert_approx_eq!(value[1], -2.0, 1e-12);
    }

    #[test]
    fn window_spans_twice_cutoff() {
        let sampler = GaussSampler::new(2.5, 1.0).unwrap();
        for focus in [-1e3, -1.0, 0.0, 0.3, 42.0, 1e3] {
            let width = sampler.get_upper_bound(focus) - sampler.get_lower_bound(focus);
            assert_approx_eq!(width, 5.0, 1e-9);
            assert_eq!(sampler.get_upper_bound(focus), focus + 2.5);
            assert_eq!(sampler.get_lower_bound(focus), focus - 2.5);
        }
    }

    #[test]
    fn tolerance_is_always_zero() {
        for (cutoff, sigma) in [(1.0, 1.0), (0.01, 100.0), (1e6, 1e-6)] {
            assert_eq!(GaussSampler::new(cutoff, sigma).unwrap().tolerance(), 0.0);
        }
    }

    #[test]
    fn sub_iteration_marker_is_ignored() {
        let sampler = GaussSampler::new(5.0, 2.0).unwrap();
        let focus = SubIterationTime::new(10.0, 0.0);
        let points = vec![
            (SubIterationTime::new(11.0, 0.0), 2.0),
            (SubIterationTime::new(11.0, 3.0), 4.0),
        ];
        // Equal weights give the plain mean
        assert_approx_eq!(sampler.filter_sub_iteration(focus, &points), 3.0, 1e-12);

        let focus_other_sub = SubIterationTime::new(10.0, 9.0);
        assert_eq!(
            sampler.filter_sub_iteration(focus, &points),
            sampler.filter_sub_iteration(focus_other_sub, &points)
        );
    }

    #[test]
    fn sub_iteration_matches_scalar_filter() {
        let sampler = GaussSampler::new(5.0, 2.0).unwrap();
        let scalar = vec![(8.0, 1.0), (10.0, 2.0), (12.0, 3.0), (15.0, 9.0)];
        let compound: Vec<_> = scalar
            .iter()
            .enumerate()
            .map(|(i, &(t, v))| (SubIterationTime::new(t, i as Time), v))
            .collect();
        assert_approx_eq!(
            sampler.filter(10.0, &scalar),
            sampler.filter_sub_iteration(SubIterationTime::new(10.0, 0.0), &compound),
            1e-15
        );
    }
}
