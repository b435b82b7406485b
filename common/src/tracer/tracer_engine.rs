use tracing::{debug, level_filters::LevelFilter};
use tracing_subscriber::{layer::SubscriberExt, EnvFilter, Layer};

pub struct TracerOptions {
    pub default_level: LevelFilter,
}

/// This object initialises the console tracer, given a TracerOptions struct.
/// Log lines are written to stderr.
pub struct TracerEngine {
    service_name: String,
}

impl TracerEngine {
    /// Initialises the console tracer for the crate
    /// #Arguments
    /// * `options` - The caller-specified instance of TracerOptions.
    /// * `service_name` - The name of the binary being traced.
    /// #Returns
    /// An instance of TracerEngine
    pub fn new(options: TracerOptions, service_name: &str) -> Self {
        let console_tracer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

        // This filter is applied to the console tracer
        let log_filter = EnvFilter::builder()
            .with_default_directive(options.default_level.into())
            .from_env_lossy();

        let subscriber =
            tracing_subscriber::Registry::default().with(console_tracer.with_filter(log_filter));

        // A second initialisation (e.g. from tests) keeps the existing subscriber
        if tracing::subscriber::set_global_default(subscriber).is_err() {
            debug!("Global tracing subscriber already set");
        }

        Self {
            service_name: service_name.to_owned(),
        }
    }

    pub fn service_name(&self) -> &str {
        &self.service_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_initialisation_does_not_panic() {
        let first = TracerEngine::new(
            TracerOptions {
                default_level: LevelFilter::INFO,
            },
            "first",
        );
        let second = TracerEngine::new(
            TracerOptions {
                default_level: LevelFilter::TRACE,
            },
            "second",
        );
        assert_eq!(first.service_name(), "first");
        assert_eq!(second.service_name(), "second");
    }
}
