// src/ingest.rs
//! Maps the parsed petition document into typed collections.
//!
//! Expected shape:
//! `{data: {attributes: {signatures_by_country: [...], signatures_by_constituency: [...]}}}`
//!
//! Missing keys surface as schema errors. Malformed upstream data should
//! fail the run, not be coerced.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{ReportError, Result};
use crate::model::{Constituencies, Countries};

/// Builds the country and constituency collections from the document.
pub fn collections(doc: &Value) -> Result<(Countries, Constituencies)> {
    let attributes = doc
        .get("data")
        .ok_or_else(|| ReportError::missing("data", "petition document"))?
        .get("attributes")
        .ok_or_else(|| ReportError::missing("attributes", "data"))?;

    let countries = records(attributes, "signatures_by_country")?;
    let constituencies = records(attributes, "signatures_by_constituency")?;

    Ok((Countries::new(countries), Constituencies::new(constituencies)))
}

fn records<T: DeserializeOwned>(attributes: &Value, key: &'static str) -> Result<Vec<T>> {
    let array = attributes
        .get(key)
        .ok_or_else(|| ReportError::missing(key, "attributes"))?
        .as_array()
        .ok_or_else(|| ReportError::Schema {
            detail: "expected an array".to_string(),
            location: key,
        })?;

    array
        .iter()
        .map(|record| {
            serde_json::from_value(record.clone()).map_err(|e| ReportError::Schema {
                detail: e.to_string(),
                location: key,
            })
        })
        .collect()
}
