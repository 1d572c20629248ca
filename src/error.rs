// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("fetch failed: HTTP status {status} from {url}")]
    FetchStatus { url: String, status: u16 },

    #[error("fetch failed: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("schema error: {detail} (in {location})")]
    Schema {
        detail: String,
        location: &'static str,
    },

    #[error("input file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },
}

impl ReportError {
    pub(crate) fn missing(field: &str, location: &'static str) -> Self {
        ReportError::Schema {
            detail: format!("missing field `{field}`"),
            location,
        }
    }
}

pub type Result<T> = std::result::Result<T, ReportError>;
