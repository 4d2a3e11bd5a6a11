//! Provides functionality to serialize a `Project` back into a deck of XML documents.
//!
//! This module implements the conversion from the public `types` back to the
//! internal `model` structs required by `quick-xml`, using the same element
//! names and placement the resolver reads.

mod boundary;
mod domain;
mod interaction;
mod material;
mod settings;
mod source;

use crate::error::DeckError;
use crate::model;
use crate::types::{
    BOUNDARIES_FILE, DeckFiles, INTERACTIONS_FILE, MATERIALS_FILE, PRIMARY_FILE, Project,
    SECONDARY_FILES, SOURCES_FILE,
};
use log::{debug, info};
use serde::Serialize;

const XML_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";

/// Serializes a `Project` into the five documents of a deck.
///
/// The primary document carries the run settings, the domain and a `<load>`
/// directive for each secondary document. Secondary documents are always
/// produced, even when their list is empty. Out-of-set type tags are written
/// as they are.
///
/// # Errors
/// Returns `DeckError::GenerationFailure` if `quick-xml` cannot serialize a
/// document.
pub fn generate(project: &Project) -> Result<DeckFiles, DeckError> {
    // 1. Convert the public types into the model, one document per file.
    let primary = model::SimulationDocument {
        domain: Some(domain::build_model_domain(&project.domain)),
        load: SECONDARY_FILES.iter().map(|f| f.to_string()).collect(),
        solver: Some(settings::build_model_solver(&project.settings.solver)),
        time: Some(settings::build_model_time(&project.settings)),
        restart: project
            .settings
            .restart
            .as_ref()
            .map(settings::build_model_restart),
        averaging: project
            .settings
            .averaging
            .as_ref()
            .map(settings::build_model_averaging),
        animation: project
            .settings
            .animation
            .as_ref()
            .map(settings::build_model_animation),
        starfish: settings::build_model_starfish(&project.settings),
        output: project
            .settings
            .outputs
            .iter()
            .map(settings::build_model_output)
            .collect(),
        ..Default::default()
    };

    let boundaries = boundary::build_model_boundaries(
        &project.boundaries,
        project.domain.transform.as_ref(),
    );
    let materials = material::build_model_materials(&project.materials);
    let sources = source::build_model_sources(&project.sources);
    let interactions = interaction::build_model_interactions(&project.interactions);

    // 2. Serialize each document.
    let mut files = DeckFiles::new();
    files.insert(PRIMARY_FILE.to_string(), serialize(PRIMARY_FILE, &primary)?);
    files.insert(BOUNDARIES_FILE.to_string(), serialize(BOUNDARIES_FILE, &boundaries)?);
    files.insert(MATERIALS_FILE.to_string(), serialize(MATERIALS_FILE, &materials)?);
    files.insert(SOURCES_FILE.to_string(), serialize(SOURCES_FILE, &sources)?);
    files.insert(
        INTERACTIONS_FILE.to_string(),
        serialize(INTERACTIONS_FILE, &interactions)?,
    );

    info!("Generated deck of {} files", files.len());
    Ok(files)
}

/// Serializes one model document, prefixed with the XML declaration and
/// indented by two spaces.
fn serialize<T: Serialize>(file: &'static str, document: &T) -> Result<Vec<u8>, DeckError> {
    let mut buffer = String::from(XML_DECLARATION);

    let mut serializer = quick_xml::se::Serializer::new(&mut buffer);
    serializer.indent(' ', 2);

    document
        .serialize(serializer)
        .map_err(|e| DeckError::from_se(file, e))?;
    buffer.push('\n');

    debug!("{}: {} bytes", file, buffer.len());
    Ok(buffer.into_bytes())
}

// --- Text formatting ---

/// Formats a float so that `str::parse::<f64>` gives back the same value.
///
/// Magnitudes in `[1e-4, 1e15)` use plain decimal notation, anything else
/// uses exponent notation (`1e-6`, `2.5e20`).
pub(crate) fn format_number(value: f64) -> String {
    let magnitude = value.abs();
    if value == 0.0 || !value.is_finite() || (1e-4..1e15).contains(&magnitude) {
        value.to_string()
    } else {
        format!("{:e}", value)
    }
}

/// Formats a comma-separated list of floats.
pub(crate) fn format_list(values: &[f64]) -> String {
    values
        .iter()
        .map(|v| format_number(*v))
        .collect::<Vec<_>>()
        .join(",")
}

/// Formats a comma-separated list of integers.
pub(crate) fn format_integers(values: &[i64]) -> String {
    values
        .iter()
        .map(i64::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

/// Formats a comma-separated list of names.
pub(crate) fn format_names(values: &[String]) -> String {
    values.join(",")
}

pub(crate) fn format_bool(value: bool) -> String {
    if value { "true" } else { "false" }.to_string()
}

/// `None` for an empty list, otherwise the formatted list.
pub(crate) fn non_empty<T>(values: &[T], format: impl Fn(&[T]) -> String) -> Option<String> {
    if values.is_empty() {
        None
    } else {
        Some(format(values))
    }
}
