// crates/starfish-deck/src/model/interaction.rs

//! Contains model structs for `<interactions>` containers and `<interaction>` elements.

use super::first;
use serde::{Deserialize, Serialize};

/// An `<interactions>` container: the root of `interactions.xml` or an inline block.
#[derive(Debug, Serialize, Deserialize, Default)]
#[serde(rename = "interactions")]
pub struct InteractionList {
    #[serde(rename = "interaction", default, skip_serializing_if = "Vec::is_empty")]
    pub interaction: Vec<InteractionElement>,
}

/// Represents `<interaction name="..." type="...">`.
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct InteractionElement {
    #[serde(rename = "@name", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(rename = "@type", default, skip_serializing_if = "Option::is_none")]
    pub interaction_type: Option<String>,

    /// Comma-separated participating material names.
    #[serde(
        rename = "materials",
        default,
        deserialize_with = "first",
        skip_serializing_if = "Option::is_none"
    )]
    pub materials: Option<String>,

    #[serde(
        rename = "prob",
        default,
        deserialize_with = "first",
        skip_serializing_if = "Option::is_none"
    )]
    pub prob: Option<String>,

    #[serde(
        rename = "c_accom",
        default,
        deserialize_with = "first",
        skip_serializing_if = "Option::is_none"
    )]
    pub c_accom: Option<String>,

    #[serde(
        rename = "c_rest",
        default,
        deserialize_with = "first",
        skip_serializing_if = "Option::is_none"
    )]
    pub c_rest: Option<String>,

    #[serde(
        rename = "pair",
        default,
        deserialize_with = "first",
        skip_serializing_if = "Option::is_none"
    )]
    pub pair: Option<String>,

    #[serde(
        rename = "sigma",
        default,
        deserialize_with = "first",
        skip_serializing_if = "Option::is_none"
    )]
    pub sigma: Option<String>,

    #[serde(
        rename = "sigma_coeffs",
        default,
        deserialize_with = "first",
        skip_serializing_if = "Option::is_none"
    )]
    pub sigma_coeffs: Option<String>,

    #[serde(
        rename = "sources",
        default,
        deserialize_with = "first",
        skip_serializing_if = "Option::is_none"
    )]
    pub sources: Option<String>,

    #[serde(
        rename = "products",
        default,
        deserialize_with = "first",
        skip_serializing_if = "Option::is_none"
    )]
    pub products: Option<String>,

    #[serde(
        rename = "rate",
        default,
        deserialize_with = "first",
        skip_serializing_if = "Option::is_none"
    )]
    pub rate: Option<String>,
}
