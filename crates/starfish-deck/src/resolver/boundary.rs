// crates/starfish-deck/src/resolver/boundary.rs

use super::utils::{Scope, boolean, owned_text, text};
use crate::error::DeckError;
use crate::model;
use crate::types;
use log::warn;

/// Resolves every `<boundary>` of a container, in document order.
pub(super) fn resolve_boundaries(
    list: &model::BoundaryList,
    scope: &Scope<'_>,
) -> Result<Vec<types::Boundary>, DeckError> {
    list.boundary
        .iter()
        .enumerate()
        .map(|(index, element)| resolve_boundary(element, index, scope))
        .collect()
}

/// Parses one `model::BoundaryElement` into a `types::Boundary`.
fn resolve_boundary(
    model: &model::BoundaryElement,
    index: usize,
    scope: &Scope<'_>,
) -> Result<types::Boundary, DeckError> {
    let name = owned_text(model.name.as_ref()).unwrap_or_else(|| {
        let fallback = format!("boundary_{}", index);
        warn!("{}: unnamed boundary, using {}", scope.file(), fallback);
        fallback
    });
    let scope = scope.nested(&format!("boundary[{}]", name));

    // The attribute is stored as written; numeric values are already text.
    let value = model.value.as_ref().map(|v| v.trim().to_string());

    Ok(types::Boundary {
        boundary_type: text(model.boundary_type.as_ref())
            .map(types::BoundaryType::from_tag)
            .unwrap_or_default(),
        value,
        reverse: boolean(model.reverse.as_ref()),
        material: owned_text(model.material.as_ref()),
        temp: scope.float("temp", model.temp.as_ref())?,
        temperature: scope.float("temperature", model.temperature.as_ref())?,
        geometry: resolve_geometry(model, &name, &scope)?,
        name,
    })
}

/// Picks the geometry: the path when present, then the points, then the
/// unit square.
fn resolve_geometry(
    model: &model::BoundaryElement,
    name: &str,
    scope: &Scope<'_>,
) -> Result<types::BoundaryGeometry, DeckError> {
    if let Some(path) = owned_text(model.path.as_ref()) {
        return Ok(types::BoundaryGeometry::Path(path));
    }

    let mut points = Vec::with_capacity(model.point.len());
    for raw in &model.point {
        if raw.trim().is_empty() {
            continue;
        }
        match scope.point("point", raw)? {
            Some(point) => points.push(point),
            None => warn!(
                "{}: boundary {} has a point with fewer than two coordinates: {:?}",
                scope.file(),
                name,
                raw
            ),
        }
    }

    if points.is_empty() {
        warn!(
            "{}: boundary {} defines no geometry, using the unit square",
            scope.file(),
            name
        );
        points = types::unit_square();
    }
    Ok(types::BoundaryGeometry::Points(points))
}
