// crates/starfish-deck/src/error.rs

use quick_xml::errors::serialize::DeError;
use quick_xml::errors::serialize::SeError;
use std::fmt;

/// Errors that can occur while parsing or generating a deck.
#[derive(Debug)]
pub enum DeckError {
    /// The primary document was not part of the input set.
    MissingRequiredFile { file: &'static str },

    /// A document is not well-formed markup, is not UTF-8, or holds text
    /// that cannot be coerced to the field's type.
    MalformedDocument {
        file: String,
        /// Element path of the offending field, when known (e.g. `solver/tol`).
        path: Option<String>,
        reason: String,
    },

    /// Emitting a document failed. This is never the caller's fault.
    GenerationFailure { file: &'static str, reason: String },
}

impl DeckError {
    /// Wraps a `quick-xml` deserialization error for the given file.
    pub(crate) fn from_de(file: &str, error: DeError) -> Self {
        DeckError::MalformedDocument {
            file: file.to_string(),
            path: None,
            reason: error.to_string(),
        }
    }

    /// Wraps a `quick-xml` serialization error for the given file.
    pub(crate) fn from_se(file: &'static str, error: SeError) -> Self {
        DeckError::GenerationFailure {
            file,
            reason: error.to_string(),
        }
    }

    /// Returns `true` for errors caused by the supplied input.
    ///
    /// Services map these to a client-side status and everything else to a
    /// server-side one.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            DeckError::MissingRequiredFile { .. } | DeckError::MalformedDocument { .. }
        )
    }

    /// The logical file the error refers to.
    pub fn file(&self) -> &str {
        match self {
            DeckError::MissingRequiredFile { file } => file,
            DeckError::MalformedDocument { file, .. } => file,
            DeckError::GenerationFailure { file, .. } => file,
        }
    }
}

impl fmt::Display for DeckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeckError::MissingRequiredFile { file } => {
                write!(f, "Missing required file: {}", file)
            }
            DeckError::MalformedDocument {
                file,
                path: Some(path),
                reason,
            } => write!(f, "Malformed document {} at {}: {}", file, path, reason),
            DeckError::MalformedDocument {
                file,
                path: None,
                reason,
            } => write!(f, "Malformed document {}: {}", file, reason),
            DeckError::GenerationFailure { file, reason } => {
                write!(f, "Failed to generate {}: {}", file, reason)
            }
        }
    }
}

impl std::error::Error for DeckError {}

#[cfg(test)]
mod tests {
    use super::DeckError;

    #[test]
    fn test_from_de_error() {
        // Create a dummy DeError by failing to parse
        let xml_err =
            quick_xml::de::from_str::<crate::model::SimulationDocument>("<simulation><time></simulation>")
                .unwrap_err();
        let err = DeckError::from_de("starfish.xml", xml_err);
        assert!(matches!(
            err,
            DeckError::MalformedDocument { ref file, path: None, .. } if file == "starfish.xml"
        ));
        assert!(err.is_client_error());
    }

    #[test]
    fn test_from_se_error() {
        let xml_err = quick_xml::errors::serialize::SeError::Custom("test error".to_string());
        let err = DeckError::from_se("materials.xml", xml_err);
        assert!(matches!(
            err,
            DeckError::GenerationFailure {
                file: "materials.xml",
                ..
            }
        ));
        assert!(!err.is_client_error());
        assert_eq!(err.file(), "materials.xml");
    }

    #[test]
    fn test_display_names_path() {
        let err = DeckError::MalformedDocument {
            file: "starfish.xml".to_string(),
            path: Some("solver/tol".to_string()),
            reason: "expected a number, found \"abc\"".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Malformed document starfish.xml at solver/tol: expected a number, found \"abc\""
        );

        let missing = DeckError::MissingRequiredFile {
            file: "starfish.xml",
        };
        assert_eq!(missing.to_string(), "Missing required file: starfish.xml");
    }
}
