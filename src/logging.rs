//! Tracing integration for structured logging.
//!
//! Line-based commands log to stderr. The TUI owns the terminal, so it
//! either logs to a file or keeps stderr quiet until the screen is restored.

use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::error::{Error, Result};

/// Filter directive for a verbosity level (0=error, 1=warn, 2=info, 3=debug, 4+=trace)
#[must_use]
pub fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "error",
        1 => "warn",
        2 => "info",
        3 => "debug",
        _ => "trace",
    }
}

/// Initialize the logging system.
///
/// `RUST_LOG` overrides the level derived from `verbosity`. When `log_file`
/// is given, output is appended there without ANSI colors.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened or a global
/// subscriber is already installed.
pub fn init_logging(verbosity: u8, log_file: Option<&Path>) -> Result<()> {
    let level = level_for(verbosity);
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("sqwordle={level}")));

    let layer = fmt::layer()
        .with_target(true)
        .with_file(verbosity >= 3)
        .with_line_number(verbosity >= 3);

    let installed = match log_file {
        None => tracing_subscriber::registry()
            .with(filter)
            .with(layer.with_writer(std::io::stderr))
            .try_init(),
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)?;
            tracing_subscriber::registry()
                .with(filter)
                .with(layer.with_writer(Mutex::new(file)).with_ansi(false))
                .try_init()
        }
    };

    installed.map_err(|e| Error::Io(std::io::Error::other(e.to_string())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_levels() {
        assert_eq!(level_for(0), "error");
        assert_eq!(level_for(1), "warn");
        assert_eq!(level_for(2), "info");
        assert_eq!(level_for(3), "debug");
        assert_eq!(level_for(4), "trace");
        assert_eq!(level_for(u8::MAX), "trace");
    }

    #[test]
    fn logging_to_file_creates_it() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sqwordle.log");

        // Another test may already own the global subscriber
        let _ = init_logging(3, Some(&path));
        tracing::info!("written to file");
        assert!(path.exists());
    }
}
