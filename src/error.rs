use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PacwiseError {
    /// No package manager backend could be queried for candidates
    #[error("No package source available: {0}")]
    SourceUnavailable(String),

    /// An AUR action was requested but no AUR helper is installed
    #[error("AUR helper '{helper}' is not installed")]
    BackendMissing { helper: String, remedy: String },

    /// External package manager returned a non-zero status
    #[error("{step} failed: '{command}' exited with {}", code.map(|c| c.to_string()).unwrap_or_else(|| "signal".to_string()))]
    ActionFailed {
        step: String,
        command: String,
        code: Option<i32>,
        output: String,
    },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid package name: {0}")]
    InvalidPackageName(String),

    #[error("IO error at '{path}': {source}")]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    StdIoError(#[from] std::io::Error),

    #[error(transparent)]
    JsonError(#[from] serde_json::Error),

    #[error("System command '{command}' failed: {reason}")]
    SystemCommandFailed { command: String, reason: String },

    /// Remote resource fetch error (AUR RPC)
    #[error("Failed to fetch remote resource: {0}")]
    RemoteFetchError(String),

    #[error("Operation interrupted by user")]
    Interrupted,

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, PacwiseError>;
