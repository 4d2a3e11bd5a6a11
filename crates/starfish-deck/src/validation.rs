//! Project validation utilities.
//!
//! Parsing is tolerant: duplicate names, foreign type tags and references to
//! entities that do not exist are all accepted as-is. This module reports them
//! so that an editor can flag them, without ever failing or changing the project.

use crate::types::Project;
use std::collections::HashSet;
use std::fmt;

/// A non-fatal problem found in a `Project`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationIssue {
    /// Two entities of the same kind share a name. Lookups return the first.
    DuplicateName { kind: &'static str, name: String },

    /// A type tag outside the closed set for its kind.
    UnknownTag {
        kind: &'static str,
        name: String,
        tag: String,
    },

    /// A name reference with no matching entity.
    DanglingReference {
        kind: &'static str,
        name: String,
        field: &'static str,
        target: String,
    },
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationIssue::DuplicateName { kind, name } => {
                write!(f, "Duplicate {} name '{}'", kind, name)
            }
            ValidationIssue::UnknownTag { kind, name, tag } => {
                write!(f, "Unknown type '{}' on {} '{}'", tag, kind, name)
            }
            ValidationIssue::DanglingReference {
                kind,
                name,
                field,
                target,
            } => write!(
                f,
                "{} '{}' refers to unknown {} '{}'",
                kind, name, field, target
            ),
        }
    }
}

impl Project {
    /// Checks the project for duplicate names, out-of-set type tags and
    /// dangling name references.
    ///
    /// Issues are reported in a fixed order: solver, boundaries, materials,
    /// sources, interactions.
    pub fn validate(&self) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();

        let solver_type = &self.settings.solver.solver_type;
        if !solver_type.is_known() {
            issues.push(ValidationIssue::UnknownTag {
                kind: "solver",
                name: "solver".to_string(),
                tag: solver_type.to_string(),
            });
        }

        let material_names: HashSet<&str> =
            self.materials.iter().map(|m| m.name.as_str()).collect();
        let boundary_names: HashSet<&str> =
            self.boundaries.iter().map(|b| b.name.as_str()).collect();

        // --- Boundaries ---
        check_duplicates("boundary", self.boundaries.iter().map(|b| &b.name), &mut issues);
        for boundary in &self.boundaries {
            if !boundary.boundary_type.is_known() {
                issues.push(unknown_tag("boundary", &boundary.name, &boundary.boundary_type));
            }
            if let Some(material) = &boundary.material {
                check_reference(
                    "boundary",
                    &boundary.name,
                    "material",
                    material,
                    &material_names,
                    &mut issues,
                );
            }
        }

        // --- Materials ---
        check_duplicates("material", self.materials.iter().map(|m| &m.name), &mut issues);
        for material in &self.materials {
            let material_type = material.material_type();
            if !material_type.is_known() {
                issues.push(unknown_tag("material", &material.name, &material_type));
            }
        }

        // --- Sources ---
        check_duplicates("source", self.sources.iter().map(|s| &s.name), &mut issues);
        for source in &self.sources {
            if !source.source_type.is_known() {
                issues.push(unknown_tag("source", &source.name, &source.source_type));
            }
            if let Some(material) = &source.material {
                check_reference(
                    "source",
                    &source.name,
                    "material",
                    material,
                    &material_names,
                    &mut issues,
                );
            }
            if let Some(boundary) = &source.boundary {
                check_reference(
                    "source",
                    &source.name,
                    "boundary",
                    boundary,
                    &boundary_names,
                    &mut issues,
                );
            }
        }

        // --- Interactions ---
        check_duplicates(
            "interaction",
            self.interactions.iter().map(|i| &i.name),
            &mut issues,
        );
        for interaction in &self.interactions {
            if !interaction.interaction_type.is_known() {
                issues.push(unknown_tag(
                    "interaction",
                    &interaction.name,
                    &interaction.interaction_type,
                ));
            }
            let referenced = interaction
                .materials
                .iter()
                .chain(&interaction.sources)
                .chain(&interaction.products);
            for material in referenced {
                check_reference(
                    "interaction",
                    &interaction.name,
                    "material",
                    material,
                    &material_names,
                    &mut issues,
                );
            }
        }

        issues
    }
}

fn unknown_tag(kind: &'static str, name: &str, tag: &impl fmt::Display) -> ValidationIssue {
    ValidationIssue::UnknownTag {
        kind,
        name: name.to_string(),
        tag: tag.to_string(),
    }
}

/// Reports each repeated name once, at its second occurrence.
fn check_duplicates<'a>(
    kind: &'static str,
    names: impl Iterator<Item = &'a String>,
    issues: &mut Vec<ValidationIssue>,
) {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    for name in names {
        if !seen.insert(name) && reported.insert(name) {
            issues.push(ValidationIssue::DuplicateName {
                kind,
                name: name.clone(),
            });
        }
    }
}

fn check_reference(
    kind: &'static str,
    name: &str,
    field: &'static str,
    target: &str,
    known: &HashSet<&str>,
    issues: &mut Vec<ValidationIssue>,
) {
    if !known.contains(target) {
        issues.push(ValidationIssue::DanglingReference {
            kind,
            name: name.to_string(),
            field,
            target: target.to_string(),
        });
    }
}
