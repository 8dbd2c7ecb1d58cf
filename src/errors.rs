// errors.rs
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while turning one input file into its sample.
/// None of these abort the batch; the driver reports them and moves on.
#[derive(Debug, Error)]
pub enum SampleError {
    #[error("file not found: {}", .0.display())]
    MissingFile(PathBuf),

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    MalformedJson {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("{} is not a list of listings (expected a top-level JSON array)", .0.display())]
    NotAnArray(PathBuf),

    #[error("failed to serialize sample: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("spreadsheet error: {0}")]
    Xlsx(String),
}

/// Startup failures. These stop the run before any file is touched.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("invalid config: {0}")]
    Invalid(String),
}
