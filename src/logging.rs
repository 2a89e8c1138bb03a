//! Operation log
//!
//! Every run appends `tracing` events to `<cache>/pacwise/pacwise.log`.
//! With `-v` the same events are mirrored to stderr. The filter defaults to
//! `info` (`debug` when verbose) and can be overridden with `PACWISE_LOG`.

use crate::error::{PacwiseError, Result};
use crate::project_identity;
use crate::utils::paths;
use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Install the global subscriber. Returns the log file path when the log
/// file could be opened.
pub fn init(verbose: bool) -> Option<PathBuf> {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = std::env::var(project_identity::env_key("LOG"))
        .ok()
        .and_then(|spec| EnvFilter::try_new(spec).ok())
        .unwrap_or_else(|| EnvFilter::new(default_level));

    let log_file = paths::log_file().ok().and_then(|path| match open_log(&path) {
        Ok(file) => Some((path, file)),
        Err(e) => {
            eprintln!("warning: operation log disabled: {}", e);
            None
        }
    });

    let (path, file_layer) = match log_file {
        Some((path, file)) => (
            Some(path),
            Some(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_target(false)
                    .with_writer(Mutex::new(file)),
            ),
        ),
        None => (None, None),
    };

    let stderr_layer = verbose.then(|| {
        tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_writer(std::io::stderr)
    });

    if let Err(e) = tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(stderr_layer)
        .try_init()
    {
        eprintln!("warning: logging already initialised: {}", e);
    }

    path
}

fn open_log(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| PacwiseError::IoError {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| PacwiseError::IoError {
            path: path.to_path_buf(),
            source: e,
        })
}

/// Last `n` lines of the log at `path`; empty when it does not exist yet.
pub fn tail(path: &Path, n: usize) -> Result<Vec<String>> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let content = fs::read_to_string(path).map_err(|e| PacwiseError::IoError {
        path: path.to_path_buf(),
        source: e,
    })?;
    let lines: Vec<&str> = content.lines().collect();
    let start = lines.len().saturating_sub(n);
    Ok(lines[start..].iter().map(|l| l.to_string()).collect())
}
