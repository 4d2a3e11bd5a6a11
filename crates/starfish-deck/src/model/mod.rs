//! Internal `serde` data structures that map directly to the deck's XML layout.
//!
//! These structs mirror the dialect element-for-element and are read and
//! written by `quick-xml`. Every leaf is kept as raw text: coercion to numbers
//! and tags happens in the resolver, where errors can name the offending path.
//! Unknown elements and attributes are ignored by `serde` on the way in.

#![allow(clippy::pedantic)] // XML naming conventions differ from Rust

use log::warn;
use serde::{Deserialize, Deserializer, Serialize};

pub mod boundary;
pub mod domain;
pub mod interaction;
pub mod material;
pub mod settings;
pub mod source;

// Re-export key components for internal use
pub use boundary::{BoundaryElement, BoundaryList, TransformElement};
pub use domain::{DomainElement, MeshBcElement, MeshElement};
pub use interaction::{InteractionElement, InteractionList};
pub use material::{MaterialElement, MaterialList};
pub use settings::{
    AnimationElement, AveragingElement, OutputElement, RestartElement, SolverElement,
    StarfishElement, TimeElement,
};
pub use source::{SourceElement, SourceEntry, SourceList};

/// Reads every same-named sibling of a singular element and keeps the first.
///
/// Used as `deserialize_with` on `Option` children so that a repeated element
/// (a second `<mesh>`, two `<temp>` children) is not a duplicate-field error.
pub(crate) fn first<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let all = Vec::<T>::deserialize(deserializer)?;
    if all.len() > 1 {
        warn!(
            "Ignoring {} repeated element(s) read as {}, keeping the first",
            all.len() - 1,
            short_type_name::<T>()
        );
    }
    Ok(all.into_iter().next())
}

fn short_type_name<T>() -> &'static str {
    let full = std::any::type_name::<T>();
    full.rsplit("::").next().unwrap_or(full)
}

/// The root element of the primary document (`starfish.xml`).
///
/// The root name is not checked on input; `<simulation>` is written on output.
/// Fields are declared in the order the generator should emit them. The deck
/// is executed top to bottom: the domain precedes the `<load>` directives,
/// everything configuring the run precedes `<starfish>`, which starts the main
/// loop, and `<output>` files are written once the loop finishes.
#[derive(Debug, Serialize, Deserialize, Default)]
#[serde(rename = "simulation")]
pub struct SimulationDocument {
    #[serde(
        rename = "domain",
        default,
        deserialize_with = "first",
        skip_serializing_if = "Option::is_none"
    )]
    pub domain: Option<DomainElement>,

    /// `<load>file.xml</load>` directives. Informational on input.
    #[serde(rename = "load", default, skip_serializing_if = "Vec::is_empty")]
    pub load: Vec<String>,

    #[serde(
        rename = "solver",
        default,
        deserialize_with = "first",
        skip_serializing_if = "Option::is_none"
    )]
    pub solver: Option<SolverElement>,

    #[serde(
        rename = "time",
        default,
        deserialize_with = "first",
        skip_serializing_if = "Option::is_none"
    )]
    pub time: Option<TimeElement>,

    #[serde(
        rename = "restart",
        default,
        deserialize_with = "first",
        skip_serializing_if = "Option::is_none"
    )]
    pub restart: Option<RestartElement>,

    #[serde(
        rename = "averaging",
        default,
        deserialize_with = "first",
        skip_serializing_if = "Option::is_none"
    )]
    pub averaging: Option<AveragingElement>,

    #[serde(
        rename = "animation",
        default,
        deserialize_with = "first",
        skip_serializing_if = "Option::is_none"
    )]
    pub animation: Option<AnimationElement>,

    #[serde(
        rename = "starfish",
        default,
        deserialize_with = "first",
        skip_serializing_if = "Option::is_none"
    )]
    pub starfish: Option<StarfishElement>,

    #[serde(rename = "output", default, skip_serializing_if = "Vec::is_empty")]
    pub output: Vec<OutputElement>,

    // Inline definitions. Any number of each container is accepted.
    #[serde(rename = "boundaries", default, skip_serializing_if = "Vec::is_empty")]
    pub boundaries: Vec<BoundaryList>,

    #[serde(rename = "materials", default, skip_serializing_if = "Vec::is_empty")]
    pub materials: Vec<MaterialList>,

    #[serde(rename = "sources", default, skip_serializing_if = "Vec::is_empty")]
    pub sources: Vec<SourceList>,

    #[serde(rename = "interactions", default, skip_serializing_if = "Vec::is_empty")]
    pub interactions: Vec<InteractionList>,
}
