// crates/starfish-deck/src/model/domain.rs

//! Contains model structs related to `<domain>`.

use super::first;
use serde::{Deserialize, Serialize};

/// Represents `<domain type="xy">`.
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct DomainElement {
    #[serde(rename = "@type", default, skip_serializing_if = "Option::is_none")]
    pub domain_type: Option<String>,

    /// Comma-separated bounding box.
    #[serde(
        rename = "world_box",
        default,
        deserialize_with = "first",
        skip_serializing_if = "Option::is_none"
    )]
    pub world_box: Option<String>,

    #[serde(
        rename = "mesh",
        default,
        deserialize_with = "first",
        skip_serializing_if = "Option::is_none"
    )]
    pub mesh: Option<MeshElement>,
}

/// Represents `<mesh type="uniform" name="mesh">`.
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct MeshElement {
    #[serde(rename = "@type", default, skip_serializing_if = "Option::is_none")]
    pub mesh_type: Option<String>,

    #[serde(rename = "@name", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(
        rename = "origin",
        default,
        deserialize_with = "first",
        skip_serializing_if = "Option::is_none"
    )]
    pub origin: Option<String>,

    #[serde(
        rename = "spacing",
        default,
        deserialize_with = "first",
        skip_serializing_if = "Option::is_none"
    )]
    pub spacing: Option<String>,

    #[serde(
        rename = "nodes",
        default,
        deserialize_with = "first",
        skip_serializing_if = "Option::is_none"
    )]
    pub nodes: Option<String>,

    #[serde(rename = "mesh-bc", default, skip_serializing_if = "Vec::is_empty")]
    pub mesh_bc: Vec<MeshBcElement>,
}

/// Represents `<mesh-bc wall="left" type="dirichlet" value="0"/>`.
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct MeshBcElement {
    #[serde(rename = "@wall", default, skip_serializing_if = "Option::is_none")]
    pub wall: Option<String>,

    #[serde(rename = "@type", default, skip_serializing_if = "Option::is_none")]
    pub bc_type: Option<String>,

    #[serde(rename = "@value", default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}
