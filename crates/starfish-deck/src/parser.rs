// src/parser.rs

use crate::error::DeckError;
use crate::resolver::{self, DeckDocuments};
use crate::types::{
    BOUNDARIES_FILE, DeckFiles, INTERACTIONS_FILE, MATERIALS_FILE, PRIMARY_FILE, Project,
    SOURCES_FILE,
};
use log::{debug, info};
use serde::de::DeserializeOwned;

/// Parses a deck (a set of named XML documents) into a `Project`.
///
/// `starfish.xml` is required. `boundaries.xml`, `materials.xml`,
/// `sources.xml` and `interactions.xml` are read when present; any other
/// entry in `files` is ignored.
///
/// # Errors
/// Returns `DeckError::MissingRequiredFile` when the primary document is
/// absent, and `DeckError::MalformedDocument` when a document is not UTF-8,
/// is not well-formed, or holds text that cannot be coerced. Nothing is
/// returned on failure: the `Project` is only assembled once every document
/// has been read in full.
pub fn parse(files: &DeckFiles) -> Result<Project, DeckError> {
    // 1. Deserialize every supplied document into the internal model.
    let primary_bytes = files
        .get(PRIMARY_FILE)
        .ok_or(DeckError::MissingRequiredFile { file: PRIMARY_FILE })?;

    let docs = DeckDocuments {
        primary: deserialize(PRIMARY_FILE, primary_bytes)?,
        boundaries: deserialize_optional(files, BOUNDARIES_FILE)?,
        materials: deserialize_optional(files, MATERIALS_FILE)?,
        sources: deserialize_optional(files, SOURCES_FILE)?,
        interactions: deserialize_optional(files, INTERACTIONS_FILE)?,
    };

    for name in files.keys() {
        if !is_deck_file(name) {
            debug!("Ignoring unrecognized file {}", name);
        }
    }

    // 2. Resolve the model into the public types.
    let project = resolver::resolve_deck(&docs)?;
    info!(
        "Parsed deck: {} boundaries, {} materials, {} sources, {} interactions",
        project.boundaries.len(),
        project.materials.len(),
        project.sources.len(),
        project.interactions.len()
    );
    Ok(project)
}

fn deserialize_optional<T: DeserializeOwned>(
    files: &DeckFiles,
    file: &str,
) -> Result<Option<T>, DeckError> {
    files
        .get(file)
        .map(|bytes| deserialize(file, bytes))
        .transpose()
}

/// Decodes `bytes` as UTF-8 and deserializes it with `quick-xml`.
fn deserialize<T: DeserializeOwned>(file: &str, bytes: &[u8]) -> Result<T, DeckError> {
    let xml = std::str::from_utf8(bytes).map_err(|e| DeckError::MalformedDocument {
        file: file.to_string(),
        path: None,
        reason: e.to_string(),
    })?;
    // A leading byte order mark is legal in XML but not understood by serde.
    let xml = xml.strip_prefix('\u{feff}').unwrap_or(xml);
    info!("Reading {} ({} bytes)", file, bytes.len());
    quick_xml::de::from_str(xml).map_err(|e| DeckError::from_de(file, e))
}

fn is_deck_file(name: &str) -> bool {
    name == PRIMARY_FILE
        || [BOUNDARIES_FILE, MATERIALS_FILE, SOURCES_FILE, INTERACTIONS_FILE].contains(&name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deck(entries: &[(&str, &str)]) -> DeckFiles {
        entries
            .iter()
            .map(|(name, xml)| (name.to_string(), xml.as_bytes().to_vec()))
            .collect()
    }

    #[test]
    fn test_missing_primary_file() {
        let files = deck(&[(MATERIALS_FILE, "<materials/>")]);
        let err = parse(&files).unwrap_err();
        assert!(matches!(
            err,
            DeckError::MissingRequiredFile { file } if file == PRIMARY_FILE
        ));
        assert!(err.is_client_error());
    }

    #[test]
    fn test_invalid_utf8_is_malformed() {
        let mut files = deck(&[(PRIMARY_FILE, "<simulation/>")]);
        files.insert(SOURCES_FILE.to_string(), vec![0x3c, 0xff, 0xfe, 0x3e]);

        match parse(&files).unwrap_err() {
            DeckError::MalformedDocument { file, path, .. } => {
                assert_eq!(file, SOURCES_FILE);
                assert_eq!(path, None);
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_unclosed_element_is_malformed() {
        let files = deck(&[(PRIMARY_FILE, "<simulation><time><dt>1e-7</dt></simulation>")]);
        let err = parse(&files).unwrap_err();
        assert!(matches!(err, DeckError::MalformedDocument { ref file, .. } if file == PRIMARY_FILE));
    }

    #[test]
    fn test_byte_order_mark_and_extra_files() {
        let files = deck(&[
            (PRIMARY_FILE, "\u{feff}<?xml version=\"1.0\"?><simulation><time><num_it>5</num_it></time></simulation>"),
            ("notes.txt", "not xml at all"),
        ]);
        let project = parse(&files).unwrap();
        assert_eq!(project.settings.iterations, 5);
    }
}
