// crates/starfish-deck/src/builder/boundary.rs

use super::domain::build_model_transform;
use super::{format_bool, format_number};
use crate::model;
use crate::types;

/// Builds the `<boundaries>` document, carrying the domain transform if any.
pub(super) fn build_model_boundaries(
    boundaries: &[types::Boundary],
    transform: Option<&types::BoundaryTransform>,
) -> model::BoundaryList {
    model::BoundaryList {
        transform: transform.map(build_model_transform),
        boundary: boundaries.iter().map(build_model_boundary).collect(),
    }
}

fn build_model_boundary(boundary: &types::Boundary) -> model::BoundaryElement {
    let (path, point) = match &boundary.geometry {
        types::BoundaryGeometry::Path(path) => (Some(path.clone()), Vec::new()),
        types::BoundaryGeometry::Points(points) => (
            None,
            points
                .iter()
                .map(|p| format!("{},{}", format_number(p.x), format_number(p.y)))
                .collect(),
        ),
    };

    model::BoundaryElement {
        name: Some(boundary.name.clone()),
        boundary_type: Some(boundary.boundary_type.to_string()),
        value: boundary.value.clone(),
        reverse: boundary.reverse.map(format_bool),
        material: boundary.material.clone(),
        temp: boundary.temp.map(format_number),
        temperature: boundary.temperature.map(format_number),
        path,
        point,
    }
}
