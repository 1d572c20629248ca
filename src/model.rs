// src/model.rs
use serde::{Deserialize, Deserializer};

use crate::scotland::is_scottish;

/// Upstream serves `"mp": null` for vacant seats; treat null (and an
/// absent key) as an empty string.
fn null_to_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// One `signatures_by_country` record from the petition feed.
#[derive(Debug, Clone, Deserialize)]
pub struct Country {
    pub name: String,
    pub signature_count: u64,
    pub code: String,
}

/// One `signatures_by_constituency` record from the petition feed.
///
/// `mp` is null upstream for vacant seats; it falls back to an empty
/// string rather than failing ingest.
#[derive(Debug, Clone, Deserialize)]
pub struct Constituency {
    pub name: String,
    pub ons_code: String,
    #[serde(default, deserialize_with = "null_to_empty")]
    pub mp: String,
    pub signature_count: u64,
}

/// Every country record, in upstream order. Built once per run,
/// read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct Countries(Vec<Country>);

impl Countries {
    #[must_use]
    pub fn new(countries: Vec<Country>) -> Self {
        Self(countries)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Country> {
        self.0.iter()
    }

    /// Everything except the single "United Kingdom" entry (exact match).
    #[must_use]
    pub fn rest_of_world(&self) -> Vec<&Country> {
        self.iter().filter(|c| c.name != "United Kingdom").collect()
    }
}

/// Every constituency record, in upstream order. Built once per run,
/// read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct Constituencies(Vec<Constituency>);

impl Constituencies {
    #[must_use]
    pub fn new(constituencies: Vec<Constituency>) -> Self {
        Self(constituencies)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Constituency> {
        self.0.iter()
    }

    /// Constituencies whose name is on the Scottish list.
    #[must_use]
    pub fn in_scotland(&self) -> Vec<&Constituency> {
        self.iter().filter(|c| is_scottish(&c.name)).collect()
    }

    /// Constituencies whose name is not on the Scottish list.
    #[must_use]
    pub fn in_rest_of_uk(&self) -> Vec<&Constituency> {
        self.iter().filter(|c| !is_scottish(&c.name)).collect()
    }
}
