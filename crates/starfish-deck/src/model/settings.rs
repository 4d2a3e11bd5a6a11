// crates/starfish-deck/src/model/settings.rs

//! Contains model structs for the run-wide settings of the primary document.

use super::first;
use serde::{Deserialize, Serialize};

/// Represents `<time>`.
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct TimeElement {
    #[serde(
        rename = "num_it",
        default,
        deserialize_with = "first",
        skip_serializing_if = "Option::is_none"
    )]
    pub num_it: Option<String>,

    #[serde(
        rename = "dt",
        default,
        deserialize_with = "first",
        skip_serializing_if = "Option::is_none"
    )]
    pub dt: Option<String>,

    #[serde(
        rename = "steady_state",
        default,
        deserialize_with = "first",
        skip_serializing_if = "Option::is_none"
    )]
    pub steady_state: Option<String>,
}

/// Represents `<solver type="...">` and its parameter children.
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct SolverElement {
    #[serde(rename = "@type", default, skip_serializing_if = "Option::is_none")]
    pub solver_type: Option<String>,

    #[serde(
        rename = "method",
        default,
        deserialize_with = "first",
        skip_serializing_if = "Option::is_none"
    )]
    pub method: Option<String>,

    #[serde(
        rename = "n0",
        default,
        deserialize_with = "first",
        skip_serializing_if = "Option::is_none"
    )]
    pub n0: Option<String>,

    #[serde(
        rename = "Te0",
        default,
        deserialize_with = "first",
        skip_serializing_if = "Option::is_none"
    )]
    pub te0: Option<String>,

    #[serde(
        rename = "phi0",
        default,
        deserialize_with = "first",
        skip_serializing_if = "Option::is_none"
    )]
    pub phi0: Option<String>,

    #[serde(
        rename = "max_it",
        default,
        deserialize_with = "first",
        skip_serializing_if = "Option::is_none"
    )]
    pub max_it: Option<String>,

    #[serde(
        rename = "nl_max_it",
        default,
        deserialize_with = "first",
        skip_serializing_if = "Option::is_none"
    )]
    pub nl_max_it: Option<String>,

    #[serde(
        rename = "tol",
        default,
        deserialize_with = "first",
        skip_serializing_if = "Option::is_none"
    )]
    pub tol: Option<String>,

    #[serde(
        rename = "nl_tol",
        default,
        deserialize_with = "first",
        skip_serializing_if = "Option::is_none"
    )]
    pub nl_tol: Option<String>,

    #[serde(
        rename = "linear",
        default,
        deserialize_with = "first",
        skip_serializing_if = "Option::is_none"
    )]
    pub linear: Option<String>,

    #[serde(
        rename = "initial_only",
        default,
        deserialize_with = "first",
        skip_serializing_if = "Option::is_none"
    )]
    pub initial_only: Option<String>,

    #[serde(
        rename = "comps",
        default,
        deserialize_with = "first",
        skip_serializing_if = "Option::is_none"
    )]
    pub comps: Option<String>,
}

/// Represents `<starfish max_cores="..." randomize="..."/>`.
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct StarfishElement {
    #[serde(rename = "@max_cores", default, skip_serializing_if = "Option::is_none")]
    pub max_cores: Option<String>,

    #[serde(rename = "@randomize", default, skip_serializing_if = "Option::is_none")]
    pub randomize: Option<String>,
}

/// Represents `<restart>`.
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct RestartElement {
    #[serde(
        rename = "it_save",
        default,
        deserialize_with = "first",
        skip_serializing_if = "Option::is_none"
    )]
    pub it_save: Option<String>,

    #[serde(
        rename = "save",
        default,
        deserialize_with = "first",
        skip_serializing_if = "Option::is_none"
    )]
    pub save: Option<String>,

    #[serde(
        rename = "load",
        default,
        deserialize_with = "first",
        skip_serializing_if = "Option::is_none"
    )]
    pub load: Option<String>,

    #[serde(
        rename = "nt_add",
        default,
        deserialize_with = "first",
        skip_serializing_if = "Option::is_none"
    )]
    pub nt_add: Option<String>,
}

/// Represents `<output type="..." file_name="..." format="...">`.
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct OutputElement {
    #[serde(rename = "@type", default, skip_serializing_if = "Option::is_none")]
    pub output_type: Option<String>,

    #[serde(rename = "@file_name", default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,

    #[serde(rename = "@format", default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    #[serde(
        rename = "scalars",
        default,
        deserialize_with = "first",
        skip_serializing_if = "Option::is_none"
    )]
    pub scalars: Option<String>,

    #[serde(
        rename = "vectors",
        default,
        deserialize_with = "first",
        skip_serializing_if = "Option::is_none"
    )]
    pub vectors: Option<String>,
}

/// Represents `<averaging>`.
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct AveragingElement {
    #[serde(
        rename = "frequency",
        default,
        deserialize_with = "first",
        skip_serializing_if = "Option::is_none"
    )]
    pub frequency: Option<String>,

    #[serde(
        rename = "start_it",
        default,
        deserialize_with = "first",
        skip_serializing_if = "Option::is_none"
    )]
    pub start_it: Option<String>,

    #[serde(
        rename = "variables",
        default,
        deserialize_with = "first",
        skip_serializing_if = "Option::is_none"
    )]
    pub variables: Option<String>,
}

/// Represents `<animation start_it="..." frequency="...">` with nested outputs.
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct AnimationElement {
    #[serde(rename = "@start_it", default, skip_serializing_if = "Option::is_none")]
    pub start_it: Option<String>,

    #[serde(rename = "@frequency", default, skip_serializing_if = "Option::is_none")]
    pub frequency: Option<String>,

    #[serde(rename = "output", default, skip_serializing_if = "Vec::is_empty")]
    pub output: Vec<OutputElement>,
}
