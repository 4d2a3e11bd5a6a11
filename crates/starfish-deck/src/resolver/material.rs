// crates/starfish-deck/src/resolver/material.rs

use super::utils::{Scope, owned_text, text};
use crate::error::DeckError;
use crate::model;
use crate::model::material::{BOLTZMANN_FIELDS, KINETIC_FIELDS, SOLID_FIELDS};
use crate::types;
use log::{debug, warn};
use std::collections::BTreeMap;

/// Resolves every `<material>` of a container, in document order.
pub(super) fn resolve_materials(
    list: &model::MaterialList,
    scope: &Scope<'_>,
) -> Result<Vec<types::Material>, DeckError> {
    list.material
        .iter()
        .enumerate()
        .map(|(index, element)| resolve_material(element, index, scope))
        .collect()
}

/// Parses one `model::MaterialElement` into a `types::Material`.
///
/// Only the field group selected by the `type` attribute is coerced. Fields
/// of the other groups are copied verbatim into the `foreign` side-table.
fn resolve_material(
    model: &model::MaterialElement,
    index: usize,
    scope: &Scope<'_>,
) -> Result<types::Material, DeckError> {
    let name = owned_text(model.name.as_ref()).unwrap_or_else(|| {
        let fallback = format!("material_{}", index);
        warn!("{}: unnamed material, using {}", scope.file(), fallback);
        fallback
    });
    let scope = scope.nested(&format!("material[{}]", name));

    let material_type = text(model.material_type.as_ref())
        .map(types::MaterialType::from_tag)
        .unwrap_or_default();

    let (properties, active): (types::MaterialProperties, &[&str]) = match material_type {
        types::MaterialType::Kinetic => (
            types::MaterialProperties::Kinetic(resolve_kinetic(model, &scope)?),
            KINETIC_FIELDS,
        ),
        types::MaterialType::BoltzmannElectrons => (
            types::MaterialProperties::BoltzmannElectrons(resolve_boltzmann(model, &scope)?),
            BOLTZMANN_FIELDS,
        ),
        types::MaterialType::Solid => (
            types::MaterialProperties::Solid(resolve_solid(model, &scope)?),
            SOLID_FIELDS,
        ),
        types::MaterialType::Other(tag) => (types::MaterialProperties::Other(tag), &[]),
    };

    let foreign: BTreeMap<String, String> = model::MaterialElement::type_fields()
        .filter(|field| !active.contains(field))
        .filter_map(|field| text(model.field(field)).map(|v| (field.to_string(), v.to_string())))
        .collect();
    if !foreign.is_empty() {
        debug!(
            "{}: material {} keeps {} field(s) of another type",
            scope.file(),
            name,
            foreign.len()
        );
    }

    Ok(types::Material {
        charge: scope.float("charge", model.charge.as_ref())?.unwrap_or(0.0),
        work_function: scope.float("work_function", model.work_function.as_ref())?,
        secondary_emission_yield: scope
            .float("secondary_emission_yield", model.secondary_emission_yield.as_ref())?,
        properties,
        foreign,
        name,
    })
}

fn resolve_kinetic(
    model: &model::MaterialElement,
    scope: &Scope<'_>,
) -> Result<types::KineticProperties, DeckError> {
    Ok(types::KineticProperties {
        molwt: scope.float("molwt", model.molwt.as_ref())?,
        mass: scope.float("mass", model.mass.as_ref())?,
        spwt: scope.float("spwt", model.spwt.as_ref())?,
        init: owned_text(model.init.as_ref()),
        ref_temp: scope.float("ref_temp", model.ref_temp.as_ref())?,
        visc_temp_index: scope.float("visc_temp_index", model.visc_temp_index.as_ref())?,
        vss_alpha: scope.float("vss_alpha", model.vss_alpha.as_ref())?,
        diam: scope.float("diam", model.diam.as_ref())?,
        ionization_energy: scope.float("ionization_energy", model.ionization_energy.as_ref())?,
    })
}

fn resolve_boltzmann(
    model: &model::MaterialElement,
    scope: &Scope<'_>,
) -> Result<types::BoltzmannProperties, DeckError> {
    Ok(types::BoltzmannProperties {
        model: owned_text(model.model.as_ref()),
        kte0: scope.float("kTe0", model.kte0.as_ref())?,
    })
}

fn resolve_solid(
    model: &model::MaterialElement,
    scope: &Scope<'_>,
) -> Result<types::SolidProperties, DeckError> {
    Ok(types::SolidProperties {
        density: scope.float("density", model.density.as_ref())?,
        thermal_conductivity: scope
            .float("thermal_conductivity", model.thermal_conductivity.as_ref())?,
        specific_heat: scope.float("specific_heat", model.specific_heat.as_ref())?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{MaterialProperties, MaterialType};

    fn list(xml: &str) -> model::MaterialList {
        quick_xml::de::from_str(xml).expect("test document should deserialize")
    }

    #[test]
    fn test_resolve_each_type_group() {
        let list = list(
            r#"<materials>
                 <material name="O" type="kinetic">
                   <molwt>16</molwt><charge>0</charge><spwt>1e10</spwt>
                   <init>nd_back=1e10</init><ref_temp>273.15</ref_temp>
                   <visc_temp_index>0.8</visc_temp_index><vss_alpha>1.0</vss_alpha>
                   <diam>3e-10</diam><ionization_energy>13.6</ionization_energy>
                 </material>
                 <material name="e-" type="boltzmann_electrons">
                   <model>qn</model><kTe0>5</kTe0><charge>-1</charge>
                 </material>
                 <material name="SS" type="solid">
                   <density>8000</density><thermal_conductivity>16.2</thermal_conductivity>
                   <specific_heat>500</specific_heat><work_function>4.5</work_function>
                   <secondary_emission_yield>0.1</secondary_emission_yield>
                 </material>
               </materials>"#,
        );

        let materials = resolve_materials(&list, &Scope::root("materials.xml")).unwrap();
        assert_eq!(materials.len(), 3);

        match &materials[0].properties {
            MaterialProperties::Kinetic(k) => {
                assert_eq!(k.molwt, Some(16.0));
                assert_eq!(k.spwt, Some(1e10));
                assert_eq!(k.init.as_deref(), Some("nd_back=1e10"));
                assert_eq!(k.diam, Some(3e-10));
                assert_eq!(k.ionization_energy, Some(13.6));
                assert_eq!(k.mass, None);
            }
            other => panic!("expected kinetic, got {:?}", other),
        }

        assert_eq!(materials[1].charge, -1.0);
        match &materials[1].properties {
            MaterialProperties::BoltzmannElectrons(b) => {
                assert_eq!(b.model.as_deref(), Some("qn"));
                assert_eq!(b.kte0, Some(5.0));
            }
            other => panic!("expected boltzmann_electrons, got {:?}", other),
        }

        assert_eq!(materials[2].material_type(), MaterialType::Solid);
        assert_eq!(materials[2].work_function, Some(4.5));
        assert_eq!(materials[2].secondary_emission_yield, Some(0.1));
        assert!(materials.iter().all(|m| m.foreign.is_empty()));
    }

    #[test]
    fn test_mixed_fields_go_to_side_table() {
        let list = list(
            r#"<materials>
                 <material name="O">
                   <molwt>16</molwt>
                   <density>1.2</density>
                   <kTe0>oops</kTe0>
                 </material>
               </materials>"#,
        );

        let materials = resolve_materials(&list, &Scope::root("materials.xml")).unwrap();
        let material = &materials[0];
        assert_eq!(material.material_type(), MaterialType::Kinetic);
        assert_eq!(material.charge, 0.0);
        assert_eq!(material.foreign.get("density").map(String::as_str), Some("1.2"));
        // Inactive fields are never coerced, so bad text is not an error.
        assert_eq!(material.foreign.get("kTe0").map(String::as_str), Some("oops"));
    }

    #[test]
    fn test_unknown_type_keeps_everything_foreign() {
        let list = list(
            r#"<materials><material name="X" type="GAS"><mass>1</mass></material></materials>"#,
        );

        let materials = resolve_materials(&list, &Scope::root("materials.xml")).unwrap();
        assert_eq!(
            materials[0].properties,
            MaterialProperties::Other("GAS".to_string())
        );
        assert_eq!(materials[0].foreign.get("mass").map(String::as_str), Some("1"));
    }

    #[test]
    fn test_bad_active_field_is_an_error() {
        let list = list(
            r#"<materials><material name="SS" type="solid"><density>heavy</density></material></materials>"#,
        );

        let err = resolve_materials(&list, &Scope::root("materials.xml")).unwrap_err();
        assert!(matches!(
            err,
            DeckError::MalformedDocument { path: Some(ref p), .. } if p == "material[SS]/density"
        ));
    }
}
