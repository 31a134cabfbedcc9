//! Tracing setup: subscriber initialization and span definitions.

pub mod spans;

use std::sync::Once;

use ecocast_core::config::ObservabilityConfig;
use tracing_subscriber::EnvFilter;

/// Environment variable that overrides the configured log filter.
pub const LOG_ENV: &str = "ECOCAST_LOG";

static INIT: Once = Once::new();

/// Install the global subscriber. Later calls are no-ops.
///
/// `ECOCAST_LOG` wins over `config.log_level`. Output goes to stderr so a
/// caller printing results on stdout is never interleaved with log lines.
pub fn init_tracing(config: &ObservabilityConfig) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV)
            .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_writer(std::io::stderr);

        // Another subscriber may already be installed (tests, embedding hosts).
        let _ = if config.json {
            builder.json().try_init()
        } else {
            builder.try_init()
        };
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_init_is_harmless() {
        let config = ObservabilityConfig::default();
        init_tracing(&config);
        init_tracing(&ObservabilityConfig {
            log_level: "debug".to_string(),
            json: true,
        });
    }

    #[test]
    fn span_names_match_macros() {
        let span = crate::cascade_span!(1u8, "Salones");
        if let Some(meta) = span.metadata() {
            assert_eq!(meta.name(), spans::names::CASCADE);
        }
    }
}
