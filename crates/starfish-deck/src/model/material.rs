// crates/starfish-deck/src/model/material.rs

//! Contains model structs for `<materials>` containers and `<material>` elements.
//!
//! A `<material>` carries the union of every type's fields. Which of them are
//! meaningful depends on the `type` attribute; the field-name tables below
//! drive both extraction and the side-table of foreign fields.

use super::first;
use serde::{Deserialize, Serialize};

/// Child elements meaningful for `kinetic` materials.
pub const KINETIC_FIELDS: &[&str] = &[
    "molwt",
    "mass",
    "spwt",
    "init",
    "ref_temp",
    "visc_temp_index",
    "vss_alpha",
    "diam",
    "ionization_energy",
];

/// Child elements meaningful for `boltzmann_electrons` materials.
pub const BOLTZMANN_FIELDS: &[&str] = &["model", "kTe0"];

/// Child elements meaningful for `solid` materials.
pub const SOLID_FIELDS: &[&str] = &["density", "thermal_conductivity", "specific_heat"];

/// A `<materials>` container: the root of `materials.xml` or an inline block.
#[derive(Debug, Serialize, Deserialize, Default)]
#[serde(rename = "materials")]
pub struct MaterialList {
    #[serde(rename = "material", default, skip_serializing_if = "Vec::is_empty")]
    pub material: Vec<MaterialElement>,
}

/// Represents `<material name="..." type="...">`.
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct MaterialElement {
    #[serde(rename = "@name", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(rename = "@type", default, skip_serializing_if = "Option::is_none")]
    pub material_type: Option<String>,

    // --- kinetic ---
    #[serde(
        rename = "molwt",
        default,
        deserialize_with = "first",
        skip_serializing_if = "Option::is_none"
    )]
    pub molwt: Option<String>,

    #[serde(
        rename = "mass",
        default,
        deserialize_with = "first",
        skip_serializing_if = "Option::is_none"
    )]
    pub mass: Option<String>,

    #[serde(
        rename = "charge",
        default,
        deserialize_with = "first",
        skip_serializing_if = "Option::is_none"
    )]
    pub charge: Option<String>,

    #[serde(
        rename = "spwt",
        default,
        deserialize_with = "first",
        skip_serializing_if = "Option::is_none"
    )]
    pub spwt: Option<String>,

    #[serde(
        rename = "init",
        default,
        deserialize_with = "first",
        skip_serializing_if = "Option::is_none"
    )]
    pub init: Option<String>,

    #[serde(
        rename = "ref_temp",
        default,
        deserialize_with = "first",
        skip_serializing_if = "Option::is_none"
    )]
    pub ref_temp: Option<String>,

    #[serde(
        rename = "visc_temp_index",
        default,
        deserialize_with = "first",
        skip_serializing_if = "Option::is_none"
    )]
    pub visc_temp_index: Option<String>,

    #[serde(
        rename = "vss_alpha",
        default,
        deserialize_with = "first",
        skip_serializing_if = "Option::is_none"
    )]
    pub vss_alpha: Option<String>,

    #[serde(
        rename = "diam",
        default,
        deserialize_with = "first",
        skip_serializing_if = "Option::is_none"
    )]
    pub diam: Option<String>,

    #[serde(
        rename = "ionization_energy",
        default,
        deserialize_with = "first",
        skip_serializing_if = "Option::is_none"
    )]
    pub ionization_energy: Option<String>,

    // --- boltzmann_electrons ---
    #[serde(
        rename = "model",
        default,
        deserialize_with = "first",
        skip_serializing_if = "Option::is_none"
    )]
    pub model: Option<String>,

    #[serde(
        rename = "kTe0",
        default,
        deserialize_with = "first",
        skip_serializing_if = "Option::is_none"
    )]
    pub kte0: Option<String>,

    // --- solid ---
    #[serde(
        rename = "density",
        default,
        deserialize_with = "first",
        skip_serializing_if = "Option::is_none"
    )]
    pub density: Option<String>,

    #[serde(
        rename = "thermal_conductivity",
        default,
        deserialize_with = "first",
        skip_serializing_if = "Option::is_none"
    )]
    pub thermal_conductivity: Option<String>,

    #[serde(
        rename = "specific_heat",
        default,
        deserialize_with = "first",
        skip_serializing_if = "Option::is_none"
    )]
    pub specific_heat: Option<String>,

    // --- surface properties, any type ---
    #[serde(
        rename = "work_function",
        default,
        deserialize_with = "first",
        skip_serializing_if = "Option::is_none"
    )]
    pub work_function: Option<String>,

    #[serde(
        rename = "secondary_emission_yield",
        default,
        deserialize_with = "first",
        skip_serializing_if = "Option::is_none"
    )]
    pub secondary_emission_yield: Option<String>,
}

impl MaterialElement {
    /// Returns the raw text of a type-specific child by element name.
    pub fn field(&self, name: &str) -> Option<&String> {
        match name {
            "molwt" => self.molwt.as_ref(),
            "mass" => self.mass.as_ref(),
            "spwt" => self.spwt.as_ref(),
            "init" => self.init.as_ref(),
            "ref_temp" => self.ref_temp.as_ref(),
            "visc_temp_index" => self.visc_temp_index.as_ref(),
            "vss_alpha" => self.vss_alpha.as_ref(),
            "diam" => self.diam.as_ref(),
            "ionization_energy" => self.ionization_energy.as_ref(),
            "model" => self.model.as_ref(),
            "kTe0" => self.kte0.as_ref(),
            "density" => self.density.as_ref(),
            "thermal_conductivity" => self.thermal_conductivity.as_ref(),
            "specific_heat" => self.specific_heat.as_ref(),
            _ => None,
        }
    }

    /// Mutable access to a type-specific child by element name.
    /// Returns `None` for names outside the three field tables.
    pub fn field_mut(&mut self, name: &str) -> Option<&mut Option<String>> {
        match name {
            "molwt" => Some(&mut self.molwt),
            "mass" => Some(&mut self.mass),
            "spwt" => Some(&mut self.spwt),
            "init" => Some(&mut self.init),
            "ref_temp" => Some(&mut self.ref_temp),
            "visc_temp_index" => Some(&mut self.visc_temp_index),
            "vss_alpha" => Some(&mut self.vss_alpha),
            "diam" => Some(&mut self.diam),
            "ionization_energy" => Some(&mut self.ionization_energy),
            "model" => Some(&mut self.model),
            "kTe0" => Some(&mut self.kte0),
            "density" => Some(&mut self.density),
            "thermal_conductivity" => Some(&mut self.thermal_conductivity),
            "specific_heat" => Some(&mut self.specific_heat),
            _ => None,
        }
    }

    /// Iterates over every type-specific field name of every group.
    pub fn type_fields() -> impl Iterator<Item = &'static str> {
        KINETIC_FIELDS
            .iter()
            .chain(BOLTZMANN_FIELDS)
            .chain(SOLID_FIELDS)
            .copied()
    }
}
