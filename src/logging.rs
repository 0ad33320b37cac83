//! Tracing subscriber setup.
//!
//! The UI owns the terminal, so it logs to a file. Headless commands log to
//! stderr. `RUST_LOG` overrides the configured level in both cases.

use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingConfig;

/// Where log events are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// Standard error
    Stderr,
    /// Append to a file, creating parent directories as needed
    File(PathBuf),
}

/// Installs the global tracing subscriber.
///
/// `verbose` forces the `debug` level regardless of the configured one.
pub fn init_logging(config: &LoggingConfig, verbose: bool, target: &LogTarget) -> Result<()> {
    let level = if verbose {
        "debug".to_string()
    } else {
        config.level.to_ascii_lowercase()
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    match target {
        LogTarget::Stderr => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .try_init()
            .context("Failed to initialize logging")?,
        LogTarget::File(path) => {
            if let Some(dir) = path.parent() {
                fs::create_dir_all(dir)
                    .context(format!("Failed to create log directory: {}", dir.display()))?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .context(format!("Failed to open log file: {}", path.display()))?;

            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_ansi(false)
                        .with_writer(Mutex::new(file)),
                )
                .try_init()
                .context("Failed to initialize logging")?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_target_creates_log_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("logs").join("macrohard.log");

        // Another test may already own the global subscriber
        let _ = init_logging(
            &LoggingConfig::default(),
            false,
            &LogTarget::File(path.clone()),
        );
        assert!(path.exists());
    }
}
