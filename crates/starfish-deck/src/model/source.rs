// crates/starfish-deck/src/model/source.rs

//! Contains model structs for `<sources>` containers.
//!
//! A container mixes `<source>` and `<boundary_source>` elements; both are
//! read in document order through the `SourceEntry` choice.

use super::first;
use serde::{Deserialize, Serialize};

/// A `<sources>` container: the root of `sources.xml` or an inline block.
#[derive(Debug, Serialize, Deserialize, Default)]
#[serde(rename = "sources")]
pub struct SourceList {
    // This captures the element choice in document order
    #[serde(rename = "$value", default, skip_serializing_if = "Vec::is_empty")]
    pub entries: Vec<SourceEntry>,
}

/// The element choice inside `<sources>`.
#[derive(Debug, Serialize, Deserialize)]
pub enum SourceEntry {
    #[serde(rename = "source")]
    Source(SourceElement),
    #[serde(rename = "boundary_source")]
    BoundarySource(SourceElement),
    /// Any other element; skipped on input.
    #[serde(other, skip_serializing)]
    Unknown,
}

/// Represents `<source>` and `<boundary_source>`; both share one field set.
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct SourceElement {
    #[serde(rename = "@name", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(rename = "@type", default, skip_serializing_if = "Option::is_none")]
    pub source_type: Option<String>,

    #[serde(
        rename = "material",
        default,
        deserialize_with = "first",
        skip_serializing_if = "Option::is_none"
    )]
    pub material: Option<String>,

    #[serde(
        rename = "boundary",
        default,
        deserialize_with = "first",
        skip_serializing_if = "Option::is_none"
    )]
    pub boundary: Option<String>,

    #[serde(
        rename = "region",
        default,
        deserialize_with = "first",
        skip_serializing_if = "Option::is_none"
    )]
    pub region: Option<String>,

    #[serde(
        rename = "rate",
        default,
        deserialize_with = "first",
        skip_serializing_if = "Option::is_none"
    )]
    pub rate: Option<String>,

    #[serde(
        rename = "temperature",
        default,
        deserialize_with = "first",
        skip_serializing_if = "Option::is_none"
    )]
    pub temperature: Option<String>,

    #[serde(
        rename = "mdot",
        default,
        deserialize_with = "first",
        skip_serializing_if = "Option::is_none"
    )]
    pub mdot: Option<String>,

    #[serde(
        rename = "v_drift",
        default,
        deserialize_with = "first",
        skip_serializing_if = "Option::is_none"
    )]
    pub v_drift: Option<String>,

    #[serde(
        rename = "enforce",
        default,
        deserialize_with = "first",
        skip_serializing_if = "Option::is_none"
    )]
    pub enforce: Option<String>,

    #[serde(
        rename = "density",
        default,
        deserialize_with = "first",
        skip_serializing_if = "Option::is_none"
    )]
    pub density: Option<String>,

    #[serde(
        rename = "total_pressure",
        default,
        deserialize_with = "first",
        skip_serializing_if = "Option::is_none"
    )]
    pub total_pressure: Option<String>,
}
