// src/lib.rs

#![doc = "Parses and generates Starfish simulation input decks."]
#![doc = ""]
#![doc = "A deck is a set of named XML documents: the mandatory `starfish.xml`"]
#![doc = "plus optional `boundaries.xml`, `materials.xml`, `sources.xml` and"]
#![doc = "`interactions.xml`. This library maps a deck to a typed `Project` and back."]
#![doc = ""]
#![doc = "It supports:"]
#![doc = "- `parse`: Reading a deck, merging secondary files and inline definitions."]
#![doc = "- `generate`: Writing a `Project` out as the five documents of a deck."]
#![doc = "- `template`: A `Project` populated entirely from defaults."]
#![doc = "- `Project::validate`: Reporting duplicate names, unknown tags and dangling references."]

// --- Crate Modules ---

mod builder;
mod error;
mod model;
mod parser;
mod resolver;
mod types;
mod validation;

// --- Public API Re-exports ---

pub use builder::generate;
pub use error::DeckError;
pub use parser::parse;
pub use types::*;
pub use validation::ValidationIssue;

/// Returns a `Project` populated entirely from defaults, used to seed a new
/// editing session.
pub fn template() -> Project {
    Project::default()
}
