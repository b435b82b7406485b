use std::path::PathBuf;

use assert_approx_eq::assert_approx_eq;
use chrono_sampler::{
    loader::{load_sample_file, SampleSeries},
    parameters::Mode,
    ChronoSampler, GaussSampler, Sampler,
};

fn config_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("configs")
        .join(name)
}

#[test]
fn bundled_gauss_config() {
    let mode = Mode::from_json_file(&config_path("gauss.json")).unwrap();
    let sampler = Sampler::try_from(&mode).unwrap();
    assert_eq!(sampler, Sampler::Gauss(GaussSampler::new(5.0, 2.0).unwrap()));
}

#[test]
fn bundled_samples_reconstruct_midpoint() {
    let series = load_sample_file(&config_path("samples.csv")).unwrap();
    let SampleSeries::Scalar(points) = series else {
        unreachable!("bundled samples have two columns");
    };
    let sampler = GaussSampler::new(5.0, 2.0).unwrap();
    assert_approx_eq!(sampler.filter(10.0, &points), 2.0, 1e-12);
    assert_eq!(sampler.select(10.0, &points).count(), 3);
}

#[test]
fn missing_config_is_an_error() {
    assert!(Mode::from_json_file(&config_path("missing.json")).is_err());
}
