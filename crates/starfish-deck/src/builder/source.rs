// crates/starfish-deck/src/builder/source.rs

use super::format_number;
use crate::model;
use crate::types;

/// Builds the `<sources>` document, keeping the order of `sources` and each
/// source's element spelling.
pub(super) fn build_model_sources(sources: &[types::Source]) -> model::SourceList {
    model::SourceList {
        entries: sources.iter().map(build_model_entry).collect(),
    }
}

fn build_model_entry(source: &types::Source) -> model::SourceEntry {
    let element = model::SourceElement {
        name: Some(source.name.clone()),
        source_type: Some(source.source_type.to_string()),
        material: source.material.clone(),
        boundary: source.boundary.clone(),
        region: source.region.clone(),
        rate: source.rate.map(format_number),
        temperature: source.temperature.map(format_number),
        mdot: source.mdot.map(format_number),
        v_drift: source.v_drift.as_ref().map(|v| match v {
            types::DriftVelocity::Scalar(speed) => format_number(*speed),
            types::DriftVelocity::Vector(raw) => raw.clone(),
        }),
        enforce: source.enforce.clone(),
        density: source.density.map(format_number),
        total_pressure: source.total_pressure.map(format_number),
    };

    match source.kind {
        types::SourceKind::Volume => model::SourceEntry::Source(element),
        types::SourceKind::Boundary => model::SourceEntry::BoundarySource(element),
    }
}
