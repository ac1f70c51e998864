// Copyright 2021-2024 SecureDNA Stiftung (SecureDNA Foundation) <licensing@securedna.org>
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `tracing` setup for the extractor. Everything goes to stderr, since stdout
//! carries nothing but the extracted key.

use tracing_subscriber::{filter::LevelFilter, EnvFilter, FmtSubscriber};

pub const LOG_FILTER_ENV_VAR: &str = "RUST_LOG";

pub type LogInitError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Builds the filter from `RUST_LOG`-style directives. Quiet by default so a
/// successful run leaves stderr empty; unparsable directives are skipped.
pub fn log_filter(directives: Option<&str>) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .parse_lossy(directives.unwrap_or_default())
}

pub fn init_log() -> Result<(), LogInitError> {
    let directives = std::env::var(LOG_FILTER_ENV_VAR).ok();

    FmtSubscriber::builder()
        .with_writer(std::io::stderr)
        .with_env_filter(log_filter(directives.as_deref()))
        .with_target(false)
        .with_ansi(false)
        .try_init()
}

#[cfg(test)]
mod tests {
    use tracing_subscriber::{filter::LevelFilter, EnvFilter, Layer, Registry};

    use super::log_filter;

    fn max_level(filter: EnvFilter) -> Option<LevelFilter> {
        <EnvFilter as Layer<Registry>>::max_level_hint(&filter)
    }

    #[test]
    fn default_filter_only_lets_warnings_through() {
        assert_eq!(max_level(log_filter(None)), Some(LevelFilter::WARN));
        assert_eq!(max_level(log_filter(Some(""))), Some(LevelFilter::WARN));
    }

    #[test]
    fn directives_raise_the_level() {
        assert_eq!(
            max_level(log_filter(Some("debug"))),
            Some(LevelFilter::DEBUG)
        );
        assert_eq!(
            max_level(log_filter(Some("trace"))),
            Some(LevelFilter::TRACE)
        );
    }
}
