// crates/starfish-deck/src/resolver/mod.rs

//! Handles the business logic of resolving values from the deserialized deck.
//!
//! This module contains the `resolve_deck` orchestrator and sub-modules for
//! each entity kind. Every sub-module only reads the `model` and returns
//! freshly built `types`, so a failure anywhere leaves nothing behind.

use crate::error::DeckError;
use crate::model;
use crate::types::{self, BOUNDARIES_FILE, INTERACTIONS_FILE, MATERIALS_FILE, PRIMARY_FILE, SOURCES_FILE};
use log::{debug, warn};

// --- Sub-modules ---

mod boundary;
mod domain;
mod interaction;
mod material;
mod settings;
mod source;
pub(crate) mod utils;

use utils::Scope;

/// The deserialized documents of one deck. Secondary documents are `None`
/// when the file was not supplied.
#[derive(Debug, Default)]
pub(crate) struct DeckDocuments {
    pub primary: model::SimulationDocument,
    pub boundaries: Option<model::BoundaryList>,
    pub materials: Option<model::MaterialList>,
    pub sources: Option<model::SourceList>,
    pub interactions: Option<model::InteractionList>,
}

/// Resolves the final `Project` from the raw deserialized documents.
///
/// Entities from secondary files come first, followed by the inline
/// containers of the primary document in the order they appear. Names are
/// not de-duplicated.
pub(crate) fn resolve_deck(docs: &DeckDocuments) -> Result<types::Project, DeckError> {
    let primary = Scope::root(PRIMARY_FILE);
    let inline = &docs.primary;

    let settings = settings::resolve_settings(inline, &primary)?;
    let mut domain_settings = domain::resolve_domain(inline.domain.as_ref(), &primary)?;

    if !inline.load.is_empty() {
        debug!("{}: ignoring {} <load> directive(s)", PRIMARY_FILE, inline.load.len());
    }

    // --- Boundaries (and the geometric transform carried alongside them) ---
    let mut boundaries = Vec::new();
    let external = docs.boundaries.iter().map(|list| (list, Scope::root(BOUNDARIES_FILE)));
    let embedded = inline
        .boundaries
        .iter()
        .map(|list| (list, primary.nested("boundaries")));
    for (list, scope) in external.chain(embedded) {
        boundaries.extend(boundary::resolve_boundaries(list, &scope)?);
        if let Some(transform) = &list.transform {
            let scope = scope.nested("transform");
            if domain_settings.transform.is_none() {
                domain_settings.transform = Some(domain::resolve_transform(transform, &scope)?);
            } else {
                warn!("{}: ignoring additional <transform>", scope.file());
            }
        }
    }

    // --- Materials ---
    let mut materials = Vec::new();
    let external = docs.materials.iter().map(|list| (list, Scope::root(MATERIALS_FILE)));
    let embedded = inline
        .materials
        .iter()
        .map(|list| (list, primary.nested("materials")));
    for (list, scope) in external.chain(embedded) {
        materials.extend(material::resolve_materials(list, &scope)?);
    }

    // --- Sources ---
    let mut sources = Vec::new();
    let external = docs.sources.iter().map(|list| (list, Scope::root(SOURCES_FILE)));
    let embedded = inline
        .sources
        .iter()
        .map(|list| (list, primary.nested("sources")));
    for (list, scope) in external.chain(embedded) {
        sources.extend(source::resolve_sources(list, &scope)?);
    }

    // --- Interactions ---
    let mut interactions = Vec::new();
    let external = docs
        .interactions
        .iter()
        .map(|list| (list, Scope::root(INTERACTIONS_FILE)));
    let embedded = inline
        .interactions
        .iter()
        .map(|list| (list, primary.nested("interactions")));
    for (list, scope) in external.chain(embedded) {
        interactions.extend(interaction::resolve_interactions(list, &scope)?);
    }

    debug!(
        "resolved {} boundaries, {} materials, {} sources, {} interactions",
        boundaries.len(),
        materials.len(),
        sources.len(),
        interactions.len()
    );

    Ok(types::Project {
        settings,
        domain: domain_settings,
        boundaries,
        materials,
        sources,
        interactions,
    })
}
