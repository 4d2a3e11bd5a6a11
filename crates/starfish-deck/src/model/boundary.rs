// crates/starfish-deck/src/model/boundary.rs

//! Contains model structs for `<boundaries>` containers and `<boundary>` elements.

use super::first;
use serde::{Deserialize, Serialize};

/// A `<boundaries>` container: the root of `boundaries.xml` or an inline
/// block of the primary document.
#[derive(Debug, Serialize, Deserialize, Default)]
#[serde(rename = "boundaries")]
pub struct BoundaryList {
    #[serde(
        rename = "transform",
        default,
        deserialize_with = "first",
        skip_serializing_if = "Option::is_none"
    )]
    pub transform: Option<TransformElement>,

    #[serde(rename = "boundary", default, skip_serializing_if = "Vec::is_empty")]
    pub boundary: Vec<BoundaryElement>,
}

/// Represents `<transform>` (scaling, translation, reverse).
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct TransformElement {
    #[serde(
        rename = "scaling",
        default,
        deserialize_with = "first",
        skip_serializing_if = "Option::is_none"
    )]
    pub scaling: Option<String>,

    #[serde(
        rename = "translation",
        default,
        deserialize_with = "first",
        skip_serializing_if = "Option::is_none"
    )]
    pub translation: Option<String>,

    #[serde(
        rename = "reverse",
        default,
        deserialize_with = "first",
        skip_serializing_if = "Option::is_none"
    )]
    pub reverse: Option<String>,
}

/// Represents `<boundary name="..." type="..." value="..." reverse="...">`.
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct BoundaryElement {
    #[serde(rename = "@name", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(rename = "@type", default, skip_serializing_if = "Option::is_none")]
    pub boundary_type: Option<String>,

    #[serde(rename = "@value", default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    #[serde(rename = "@reverse", default, skip_serializing_if = "Option::is_none")]
    pub reverse: Option<String>,

    #[serde(
        rename = "material",
        default,
        deserialize_with = "first",
        skip_serializing_if = "Option::is_none"
    )]
    pub material: Option<String>,

    #[serde(
        rename = "temp",
        default,
        deserialize_with = "first",
        skip_serializing_if = "Option::is_none"
    )]
    pub temp: Option<String>,

    #[serde(
        rename = "temperature",
        default,
        deserialize_with = "first",
        skip_serializing_if = "Option::is_none"
    )]
    pub temperature: Option<String>,

    /// SVG-style path, kept opaque.
    #[serde(
        rename = "path",
        default,
        deserialize_with = "first",
        skip_serializing_if = "Option::is_none"
    )]
    pub path: Option<String>,

    /// Repeated `<point>x,y</point>`.
    #[serde(rename = "point", default, skip_serializing_if = "Vec::is_empty")]
    pub point: Vec<String>,
}
