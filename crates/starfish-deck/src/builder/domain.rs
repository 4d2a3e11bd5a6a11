// crates/starfish-deck/src/builder/domain.rs

use super::{format_bool, format_integers, format_list, non_empty};
use crate::model;
use crate::types;

/// Builds `<domain>` with its nested `<mesh>`. The transform is not part of
/// the domain element; it is written into the boundaries document.
pub(super) fn build_model_domain(domain: &types::DomainSettings) -> model::DomainElement {
    model::DomainElement {
        domain_type: Some(domain.coordinates.clone()),
        world_box: domain.world_box.as_deref().and_then(|b| non_empty(b, format_list)),
        mesh: Some(build_model_mesh(&domain.mesh, &domain.mesh_bcs)),
    }
}

fn build_model_mesh(
    mesh: &types::MeshSettings,
    mesh_bcs: &[types::MeshBoundaryCondition],
) -> model::MeshElement {
    model::MeshElement {
        mesh_type: Some(mesh.mesh_type.clone()),
        name: Some(mesh.name.clone()),
        origin: non_empty(&mesh.origin, format_list),
        spacing: non_empty(&mesh.spacing, format_list),
        nodes: non_empty(&mesh.nodes, format_integers),
        mesh_bc: mesh_bcs
            .iter()
            .map(|bc| model::MeshBcElement {
                wall: (!bc.wall.is_empty()).then(|| bc.wall.clone()),
                bc_type: (!bc.bc_type.is_empty()).then(|| bc.bc_type.clone()),
                value: bc.value.clone(),
            })
            .collect(),
    }
}

pub(super) fn build_model_transform(
    transform: &types::BoundaryTransform,
) -> model::TransformElement {
    model::TransformElement {
        scaling: transform.scaling.as_deref().map(format_list),
        translation: transform.translation.as_deref().map(format_list),
        reverse: transform.reverse.map(format_bool),
    }
}
