// crates/starfish-deck/src/resolver/domain.rs

use super::utils::{Scope, boolean, owned_text, text};
use crate::error::DeckError;
use crate::model;
use crate::types;

/// Resolves the `<domain>` block. A missing block yields the default domain.
pub(super) fn resolve_domain(
    model: Option<&model::DomainElement>,
    scope: &Scope<'_>,
) -> Result<types::DomainSettings, DeckError> {
    let mut domain = types::DomainSettings::default();
    let Some(model) = model else {
        return Ok(domain);
    };
    let scope = scope.nested("domain");

    if let Some(coordinates) = owned_text(model.domain_type.as_ref()) {
        domain.coordinates = coordinates;
    }
    domain.world_box = scope.float_list("world_box", model.world_box.as_ref())?;

    if let Some(mesh) = &model.mesh {
        let scope = scope.nested("mesh");
        domain.mesh = resolve_mesh(mesh, &scope)?;
        domain.mesh_bcs = mesh.mesh_bc.iter().map(resolve_mesh_bc).collect();
    }

    Ok(domain)
}

/// Parses a `model::MeshElement`, keeping the default for every missing part.
fn resolve_mesh(
    model: &model::MeshElement,
    scope: &Scope<'_>,
) -> Result<types::MeshSettings, DeckError> {
    let defaults = types::MeshSettings::default();
    Ok(types::MeshSettings {
        mesh_type: owned_text(model.mesh_type.as_ref()).unwrap_or(defaults.mesh_type),
        name: owned_text(model.name.as_ref()).unwrap_or(defaults.name),
        origin: scope
            .float_list("origin", model.origin.as_ref())?
            .unwrap_or(defaults.origin),
        spacing: scope
            .float_list("spacing", model.spacing.as_ref())?
            .unwrap_or(defaults.spacing),
        nodes: scope
            .integer_list("nodes", model.nodes.as_ref())?
            .unwrap_or(defaults.nodes),
    })
}

fn resolve_mesh_bc(model: &model::MeshBcElement) -> types::MeshBoundaryCondition {
    types::MeshBoundaryCondition {
        wall: text(model.wall.as_ref()).unwrap_or_default().to_string(),
        bc_type: text(model.bc_type.as_ref()).unwrap_or_default().to_string(),
        value: owned_text(model.value.as_ref()),
    }
}

/// Parses a `<transform>` element found in a boundaries container.
pub(super) fn resolve_transform(
    model: &model::TransformElement,
    scope: &Scope<'_>,
) -> Result<types::BoundaryTransform, DeckError> {
    Ok(types::BoundaryTransform {
        scaling: scope.float_list("scaling", model.scaling.as_ref())?,
        translation: scope.float_list("translation", model.translation.as_ref())?,
        reverse: boolean(model.reverse.as_ref()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_full_domain() {
        let doc: model::SimulationDocument = quick_xml::de::from_str(
            r#"<simulation>
                 <domain type="rz">
                   <world_box>0,0,1,0.5</world_box>
                   <mesh type="uniform" name="mesh1">
                     <origin>0,-0.1</origin>
                     <spacing>0.01,0.01</spacing>
                     <nodes>101,21</nodes>
                     <mesh-bc wall="left" type="dirichlet" value="0"/>
                     <mesh-bc wall="top" type="neumann"/>
                   </mesh>
                 </domain>
               </simulation>"#,
        )
        .unwrap();

        let domain = resolve_domain(doc.domain.as_ref(), &Scope::root("starfish.xml")).unwrap();
        assert_eq!(domain.coordinates, "rz");
        assert_eq!(domain.world_box, Some(vec![0.0, 0.0, 1.0, 0.5]));
        assert_eq!(domain.mesh.name, "mesh1");
        assert_eq!(domain.mesh.origin, vec![0.0, -0.1]);
        assert_eq!(domain.mesh.nodes, vec![101, 21]);
        assert_eq!(domain.mesh_bcs.len(), 2);
        assert_eq!(domain.mesh_bcs[0].wall, "left");
        assert_eq!(domain.mesh_bcs[0].value.as_deref(), Some("0"));
        assert_eq!(domain.mesh_bcs[1].bc_type, "neumann");
        assert_eq!(domain.mesh_bcs[1].value, None);
    }

    #[test]
    fn test_partial_mesh_keeps_defaults() {
        let doc: model::SimulationDocument = quick_xml::de::from_str(
            r#"<simulation><domain><mesh><nodes>41,41</nodes></mesh></domain></simulation>"#,
        )
        .unwrap();

        let domain = resolve_domain(doc.domain.as_ref(), &Scope::root("starfish.xml")).unwrap();
        assert_eq!(domain.coordinates, "xy");
        assert_eq!(domain.mesh.mesh_type, "uniform");
        assert_eq!(domain.mesh.spacing, vec![0.02, 0.02]);
        assert_eq!(domain.mesh.nodes, vec![41, 41]);
        assert_eq!(domain.transform, None);
    }

    #[test]
    fn test_bad_spacing_names_path() {
        let doc: model::SimulationDocument = quick_xml::de::from_str(
            r#"<simulation><domain><mesh><spacing>0.1,wide</spacing></mesh></domain></simulation>"#,
        )
        .unwrap();

        let err = resolve_domain(doc.domain.as_ref(), &Scope::root("starfish.xml")).unwrap_err();
        assert!(matches!(
            err,
            DeckError::MalformedDocument { path: Some(ref p), .. } if p == "domain/mesh/spacing"
        ));
    }
}
