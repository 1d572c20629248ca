// src/source.rs
//! Where the petition document comes from: the petitions site, or a
//! local JSON file. Both produce the same parsed document; the caller
//! picks one at startup.

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use serde_json::Value;

use crate::error::{ReportError, Result};

/// Base URL of the petitions site; the petition id and `.json` suffix
/// are appended.
pub const PETITION_BASE_URL: &str = "https://petition.parliament.uk/petitions";

/// The petition this tool was written for.
pub const DEFAULT_PETITION_ID: u64 = 180_642;

/// Capability: produce the parsed petition document.
pub trait DataSource {
    fn fetch(&self) -> Result<Value>;
}

/// Downloads the petition document with a single blocking GET.
/// No retries; a non-200 status fails the run.
pub struct NetworkSource {
    url: String,
    timeout: Duration,
}

impl NetworkSource {
    #[must_use]
    pub fn new(petition_id: u64, timeout: Duration) -> Self {
        Self {
            url: format!("{PETITION_BASE_URL}/{petition_id}.json"),
            timeout,
        }
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl DataSource for NetworkSource {
    fn fetch(&self) -> Result<Value> {
        let client = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .build()?;
        let response = client.get(&self.url).send()?;

        let status = response.status();
        if status.as_u16() != 200 {
            return Err(ReportError::FetchStatus {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }

        Ok(serde_json::from_str(&response.text()?)?)
    }
}

/// Reads the petition document from a local file.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl DataSource for FileSource {
    fn fetch(&self) -> Result<Value> {
        if !self.path.exists() {
            return Err(ReportError::NotFound {
                path: self.path.clone(),
            });
        }
        let raw = fs::read_to_string(&self.path).map_err(|source| ReportError::Io {
            source,
            path: self.path.clone(),
        })?;
        Ok(serde_json::from_str(&raw)?)
    }
}
