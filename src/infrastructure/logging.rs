//! Logging setup
//!
//! Console output always; JSON when configured. With `logging.directory`
//! set, a daily rolling file under that directory receives the same events.

use crate::infrastructure::config::LoggingConfig;
use crate::{Error, Result};
use std::fs;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{
    layer::{Layer, SubscriberExt},
    util::SubscriberInitExt,
    EnvFilter, Registry,
};

const LOG_FILE_PREFIX: &str = "exchange-codes.log";

/// Initialize the global subscriber
///
/// RUST_LOG takes precedence over `config.level`. The returned guard must be
/// held for the life of the program when file logging is enabled.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let filter = build_filter(config)?;

    let console_layer: Box<dyn Layer<Registry> + Send + Sync> = if config.json {
        tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_level(true)
            .json()
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_level(true)
            .boxed()
    };

    let mut guard = None;
    let file_layer = match &config.directory {
        Some(dir) => {
            fs::create_dir_all(dir)?;
            let appender = RollingFileAppender::new(Rotation::DAILY, dir, LOG_FILE_PREFIX);
            let (non_blocking, file_guard) = tracing_appender::non_blocking(appender);
            guard = Some(file_guard);
            Some(
                tracing_subscriber::fmt::layer()
                    .with_writer(non_blocking)
                    .with_ansi(false)
                    .with_target(true)
                    .with_level(true)
                    .json(),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .with(filter)
        .try_init()
        .map_err(|e| Error::Logging(e.to_string()))?;

    tracing::info!(
        level = %config.level,
        json = config.json,
        file = config.directory.is_some(),
        "Logging initialized"
    );
    Ok(guard)
}

fn build_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    parse_filter(rust_log.as_deref(), &config.level)
}

/// A valid RUST_LOG value wins; otherwise the configured level must parse.
fn parse_filter(rust_log: Option<&str>, level: &str) -> Result<EnvFilter> {
    rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .map_or_else(
            || {
                EnvFilter::try_new(level)
                    .map_err(|e| Error::Logging(format!("invalid filter {:?}: {}", level, e)))
            },
            Ok,
        )
}

/// Emit an event under the registry target
#[macro_export]
macro_rules! log_registry {
    ($level:expr, $($arg:tt)+) => {
        tracing::event!(target: "registry", $level, $($arg)+)
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir()
            .join(format!("exchange-codes-{}-{}", name, std::process::id()));
        fs::remove_dir_all(&dir).ok();
        dir
    }

    #[test]
    fn test_filter_from_config_level() {
        let filter = parse_filter(None, "registry=debug,warn").unwrap();
        assert!(filter.to_string().contains("registry=debug"));
    }

    #[test]
    fn test_invalid_config_level_is_logging_error() {
        assert!(matches!(
            parse_filter(None, "registry=notalevel"),
            Err(Error::Logging(_))
        ));
    }

    #[test]
    fn test_rust_log_overrides_config_level() {
        let filter = parse_filter(Some("registry=trace"), "registry=notalevel").unwrap();
        assert!(filter.to_string().contains("registry=trace"));
    }

    #[test]
    fn test_invalid_rust_log_falls_back_to_config() {
        let filter = parse_filter(Some("registry=notalevel"), "warn").unwrap();
        assert_eq!(filter.to_string(), "warn");
    }

    #[test]
    fn test_init_logging_unwritable_directory() {
        let base = scratch_dir("blocked");
        fs::create_dir_all(&base).unwrap();
        let file = base.join("not-a-dir");
        fs::write(&file, b"").unwrap();

        let config = LoggingConfig {
            directory: Some(file.join("logs")),
            ..LoggingConfig::default()
        };
        assert!(matches!(init_logging(&config), Err(Error::Io(_))));

        fs::remove_dir_all(&base).ok();
    }

    // Only test in this binary that installs the global subscriber
    #[test]
    fn test_init_logging_file_layer_then_reinit_fails() {
        let dir = scratch_dir("file-layer");
        let config = LoggingConfig {
            level: "info".to_string(),
            json: true,
            directory: Some(dir.clone()),
        };

        let guard = init_logging(&config).unwrap();
        assert!(guard.is_some());
        assert!(dir.is_dir());

        assert!(matches!(init_logging(&config), Err(Error::Logging(_))));

        drop(guard);
        fs::remove_dir_all(&dir).ok();
    }
}
