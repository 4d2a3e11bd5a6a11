// crates/starfish-deck/src/builder/material.rs

use super::format_number;
use crate::model;
use crate::types;
use log::{debug, warn};

/// Builds the `<materials>` document.
pub(super) fn build_model_materials(materials: &[types::Material]) -> model::MaterialList {
    model::MaterialList {
        material: materials.iter().map(build_model_material).collect(),
    }
}

/// Builds one `<material>`: the common fields, the active type group, then
/// whatever the side-table holds for the other groups.
fn build_model_material(material: &types::Material) -> model::MaterialElement {
    let mut element = model::MaterialElement {
        name: Some(material.name.clone()),
        material_type: Some(material.material_type().to_string()),
        charge: Some(format_number(material.charge)),
        work_function: material.work_function.map(format_number),
        secondary_emission_yield: material.secondary_emission_yield.map(format_number),
        ..Default::default()
    };

    match &material.properties {
        types::MaterialProperties::Kinetic(k) => {
            element.molwt = k.molwt.map(format_number);
            element.mass = k.mass.map(format_number);
            element.spwt = k.spwt.map(format_number);
            element.init = k.init.clone();
            element.ref_temp = k.ref_temp.map(format_number);
            element.visc_temp_index = k.visc_temp_index.map(format_number);
            element.vss_alpha = k.vss_alpha.map(format_number);
            element.diam = k.diam.map(format_number);
            element.ionization_energy = k.ionization_energy.map(format_number);
        }
        types::MaterialProperties::BoltzmannElectrons(b) => {
            element.model = b.model.clone();
            element.kte0 = b.kte0.map(format_number);
        }
        types::MaterialProperties::Solid(s) => {
            element.density = s.density.map(format_number);
            element.thermal_conductivity = s.thermal_conductivity.map(format_number);
            element.specific_heat = s.specific_heat.map(format_number);
        }
        types::MaterialProperties::Other(_) => {}
    }

    for (key, value) in &material.foreign {
        match element.field_mut(key) {
            Some(slot) if slot.is_none() => *slot = Some(value.clone()),
            Some(_) => debug!(
                "material {}: {} is set by the active type, dropping side-table value",
                material.name, key
            ),
            None => warn!(
                "material {}: unknown side-table field {}, skipping",
                material.name, key
            ),
        }
    }

    element
}
