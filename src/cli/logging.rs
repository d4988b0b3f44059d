use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Error type for log setup
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[error("could not open log file {path}: {source}")]
    OpenError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid RUST_LOG / log filter: {0}")]
    FilterError(String),
}

/// Default filter for the `-v`/`-q` counts
pub fn default_level(verbose: u8, quiet: u8) -> &'static str {
    if quiet >= 2 {
        "error"
    } else if quiet == 1 {
        "warn"
    } else if verbose >= 3 {
        "trace"
    } else if verbose == 2 {
        "debug"
    } else if verbose == 1 {
        "info"
    } else {
        "warn"
    }
}

/// Send tracing output to `log_path` (the terminal belongs to the UI).
/// `RUST_LOG` overrides the level derived from the flags.
pub fn init_tracing(verbose: u8, quiet: u8, log_path: &Path) -> Result<(), LogError> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level(verbose, quiet)))
        .map_err(|e| LogError::FilterError(e.to_string()))?;

    if let Some(parent) = log_path.parent() {
        fs::create_dir_all(parent).map_err(|source| LogError::OpenError {
            path: log_path.to_path_buf(),
            source,
        })?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)
        .map_err(|source| LogError::OpenError {
            path: log_path.to_path_buf(),
            source,
        })?;

    let init_result = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_level(true)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init();

    if let Err(err) = init_result {
        debug!(error = %err, "tracing subscriber already set, continuing");
    }
    Ok(())
}
