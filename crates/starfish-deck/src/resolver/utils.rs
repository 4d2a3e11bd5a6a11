// crates/starfish-deck/src/resolver/utils.rs

//! Text coercion helpers for the resolver.
//!
//! Every helper treats a missing or blank value as absent. Only text that is
//! present but cannot be coerced produces an error, and that error names the
//! file and element path.

use crate::error::DeckError;
use crate::types::Point;

/// Returns the trimmed text, or `None` when it is missing or blank.
pub(super) fn text(raw: Option<&String>) -> Option<&str> {
    raw.map(|s| s.trim()).filter(|s| !s.is_empty())
}

/// Returns the trimmed text as an owned `String`.
pub(super) fn owned_text(raw: Option<&String>) -> Option<String> {
    text(raw).map(str::to_string)
}

/// Parses a comma-separated list of names, dropping empty entries.
pub(super) fn name_list(raw: Option<&String>) -> Vec<String> {
    text(raw)
        .map(|s| {
            s.split(',')
                .map(str::trim)
                .filter(|n| !n.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// Booleans are `true` when the text reads `true` in any case, `false` otherwise.
pub(super) fn boolean(raw: Option<&String>) -> Option<bool> {
    text(raw).map(|s| s.eq_ignore_ascii_case("true"))
}

/// Location of the element currently being resolved, used in error messages.
#[derive(Debug, Clone)]
pub(crate) struct Scope<'a> {
    file: &'a str,
    path: String,
}

impl<'a> Scope<'a> {
    /// A scope rooted at the document element of `file`.
    pub(crate) fn root(file: &'a str) -> Self {
        Self {
            file,
            path: String::new(),
        }
    }

    /// A scope for a child element.
    pub(crate) fn nested(&self, segment: &str) -> Self {
        Self {
            file: self.file,
            path: self.join(segment),
        }
    }

    pub(crate) fn file(&self) -> &'a str {
        self.file
    }

    fn join(&self, field: &str) -> String {
        if self.path.is_empty() {
            field.to_string()
        } else {
            format!("{}/{}", self.path, field)
        }
    }

    /// Builds a `MalformedDocument` error for a field of this scope.
    pub(crate) fn malformed(&self, field: &str, reason: String) -> DeckError {
        DeckError::MalformedDocument {
            file: self.file.to_string(),
            path: Some(self.join(field)),
            reason,
        }
    }

    /// Coerces an optional float field.
    pub(crate) fn float(&self, field: &str, raw: Option<&String>) -> Result<Option<f64>, DeckError> {
        text(raw)
            .map(|s| self.parse_float(field, s))
            .transpose()
    }

    /// Coerces an optional integer field.
    ///
    /// Integral float notation (`1e4`, `200.0`) is accepted, since decks
    /// commonly spell iteration limits that way.
    pub(crate) fn integer(&self, field: &str, raw: Option<&String>) -> Result<Option<i64>, DeckError> {
        text(raw)
            .map(|s| self.parse_integer(field, s))
            .transpose()
    }

    /// Coerces an optional comma-separated list of floats.
    pub(crate) fn float_list(
        &self,
        field: &str,
        raw: Option<&String>,
    ) -> Result<Option<Vec<f64>>, DeckError> {
        text(raw)
            .map(|s| {
                s.split(',')
                    .map(|item| self.parse_float(field, item.trim()))
                    .collect::<Result<Vec<_>, _>>()
            })
            .transpose()
    }

    /// Coerces an optional comma-separated list of integers.
    pub(crate) fn integer_list(
        &self,
        field: &str,
        raw: Option<&String>,
    ) -> Result<Option<Vec<i64>>, DeckError> {
        text(raw)
            .map(|s| {
                s.split(',')
                    .map(|item| self.parse_integer(field, item.trim()))
                    .collect::<Result<Vec<_>, _>>()
            })
            .transpose()
    }

    /// Parses `x,y` into a point. Returns `Ok(None)` when fewer than two
    /// coordinates are given; extra coordinates are ignored.
    pub(crate) fn point(&self, field: &str, raw: &str) -> Result<Option<Point>, DeckError> {
        let coords: Vec<&str> = raw.trim().split(',').map(str::trim).collect();
        if coords.len() < 2 {
            return Ok(None);
        }
        let x = self.parse_float(field, coords[0])?;
        let y = self.parse_float(field, coords[1])?;
        Ok(Some(Point::new(x, y)))
    }

    fn parse_float(&self, field: &str, s: &str) -> Result<f64, DeckError> {
        s.parse::<f64>()
            .map_err(|_| self.malformed(field, format!("expected a number, found \"{}\"", s)))
    }

    fn parse_integer(&self, field: &str, s: &str) -> Result<i64, DeckError> {
        if let Ok(value) = s.parse::<i64>() {
            return Ok(value);
        }
        match s.parse::<f64>() {
            Ok(value)
                if value.is_finite()
                    && value.fract() == 0.0
                    && value.abs() < i64::MAX as f64 =>
            {
                Ok(value as i64)
            }
            _ => Err(self.malformed(field, format!("expected an integer, found \"{}\"", s))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(s: &str) -> Option<String> {
        Some(s.to_string())
    }

    #[test]
    fn test_blank_text_is_absent() {
        let scope = Scope::root("starfish.xml").nested("time");
        assert_eq!(scope.float("dt", None).unwrap(), None);
        assert_eq!(scope.float("dt", raw("   ").as_ref()).unwrap(), None);
        assert_eq!(scope.integer("num_it", raw("").as_ref()).unwrap(), None);
        assert_eq!(text(raw("  x ").as_ref()), Some("x"));
    }

    #[test]
    fn test_numbers_are_trimmed_and_coerced() {
        let scope = Scope::root("starfish.xml").nested("time");
        assert_eq!(scope.float("dt", raw(" 5e-7\n").as_ref()).unwrap(), Some(5e-7));
        assert_eq!(scope.integer("num_it", raw("200").as_ref()).unwrap(), Some(200));
        assert_eq!(scope.integer("num_it", raw("1e4").as_ref()).unwrap(), Some(10000));
        assert_eq!(scope.integer("num_it", raw("-3").as_ref()).unwrap(), Some(-3));
    }

    #[test]
    fn test_coercion_failure_names_path() {
        let scope = Scope::root("starfish.xml").nested("solver");
        let err = scope.float("tol", raw("abc").as_ref()).unwrap_err();
        match err {
            DeckError::MalformedDocument { file, path, .. } => {
                assert_eq!(file, "starfish.xml");
                assert_eq!(path.as_deref(), Some("solver/tol"));
            }
            other => panic!("unexpected error {:?}", other),
        }

        let err = scope.integer("max_it", raw("1.5").as_ref()).unwrap_err();
        assert!(matches!(err, DeckError::MalformedDocument { .. }));
    }

    #[test]
    fn test_lists() {
        let scope = Scope::root("starfish.xml").nested("domain/mesh");
        assert_eq!(
            scope.float_list("origin", raw("0, -0.5").as_ref()).unwrap(),
            Some(vec![0.0, -0.5])
        );
        assert_eq!(
            scope.integer_list("nodes", raw("21,11").as_ref()).unwrap(),
            Some(vec![21, 11])
        );
        assert!(scope.integer_list("nodes", raw("21,x").as_ref()).is_err());
        assert_eq!(
            name_list(raw(" O, O+ ,,e- ").as_ref()),
            vec!["O".to_string(), "O+".to_string(), "e-".to_string()]
        );
        assert!(name_list(None).is_empty());
    }

    #[test]
    fn test_booleans_and_points() {
        assert_eq!(boolean(raw("TRUE").as_ref()), Some(true));
        assert_eq!(boolean(raw("no").as_ref()), Some(false));
        assert_eq!(boolean(None), None);

        let scope = Scope::root("boundaries.xml").nested("boundary[wall]");
        assert_eq!(
            scope.point("point", " 0.1, 0.2 ").unwrap(),
            Some(Point::new(0.1, 0.2))
        );
        assert_eq!(scope.point("point", "0.1").unwrap(), None);
        assert!(scope.point("point", "a,b").is_err());
    }
}
