// crates/starfish-deck/src/resolver/source.rs

use super::utils::{Scope, owned_text, text};
use crate::error::DeckError;
use crate::model;
use crate::types;
use log::{trace, warn};

/// Resolves the `<source>` and `<boundary_source>` entries of a container,
/// in document order.
pub(super) fn resolve_sources(
    list: &model::SourceList,
    scope: &Scope<'_>,
) -> Result<Vec<types::Source>, DeckError> {
    let mut sources = Vec::with_capacity(list.entries.len());
    for entry in &list.entries {
        let (element, kind) = match entry {
            model::SourceEntry::Source(element) => (element, types::SourceKind::Volume),
            model::SourceEntry::BoundarySource(element) => (element, types::SourceKind::Boundary),
            model::SourceEntry::Unknown => {
                trace!("{}: skipping unknown element in <sources>", scope.file());
                continue;
            }
        };
        // Unnamed entries are numbered by position among the resolved sources.
        let index = sources.len();
        sources.push(resolve_source(element, kind, index, scope)?);
    }
    Ok(sources)
}

/// Parses one `model::SourceElement` into a `types::Source`.
fn resolve_source(
    model: &model::SourceElement,
    kind: types::SourceKind,
    index: usize,
    scope: &Scope<'_>,
) -> Result<types::Source, DeckError> {
    let name = owned_text(model.name.as_ref()).unwrap_or_else(|| {
        let fallback = format!("{}_{}", kind.element_name(), index);
        warn!(
            "{}: unnamed {}, using {}",
            scope.file(),
            kind.element_name(),
            fallback
        );
        fallback
    });
    let scope = scope.nested(&format!("{}[{}]", kind.element_name(), name));

    Ok(types::Source {
        kind,
        source_type: text(model.source_type.as_ref())
            .map(types::SourceType::from_tag)
            .unwrap_or_else(|| kind.default_type()),
        material: owned_text(model.material.as_ref()),
        boundary: owned_text(model.boundary.as_ref()),
        region: owned_text(model.region.as_ref()),
        rate: scope.float("rate", model.rate.as_ref())?,
        temperature: scope.float("temperature", model.temperature.as_ref())?,
        mdot: scope.float("mdot", model.mdot.as_ref())?,
        v_drift: text(model.v_drift.as_ref()).map(drift_velocity),
        enforce: owned_text(model.enforce.as_ref()),
        density: scope.float("density", model.density.as_ref())?,
        total_pressure: scope.float("total_pressure", model.total_pressure.as_ref())?,
        name,
    })
}

/// A drift velocity is a scalar when it reads as one number, otherwise the
/// expression is kept as written.
fn drift_velocity(raw: &str) -> types::DriftVelocity {
    raw.parse::<f64>()
        .map(types::DriftVelocity::Scalar)
        .unwrap_or_else(|_| types::DriftVelocity::Vector(raw.to_string()))
}
