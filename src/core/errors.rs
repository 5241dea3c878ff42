//! Validation error kinds and the per-control error mapping.
//!
//! Validation never fails in the Rust sense: a validator that rejects a
//! value reports one or more [`ErrorKind`]s, and the form folds everything
//! reported for a control into an [`ErrorMap`].

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// The closed set of validation error kinds.
///
/// Each validator reports only the kinds it is responsible for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorKind {
    Required,
    Pattern,
    #[serde(rename = "minlength")]
    MinLength,
    #[serde(rename = "maxlength")]
    MaxLength,
    Match,
    Range,
}

impl ErrorKind {
    /// Stable key used in serialized error maps and message tables.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::Pattern => "pattern",
            Self::MinLength => "minlength",
            Self::MaxLength => "maxlength",
            Self::Match => "match",
            Self::Range => "range",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Active error kinds of one control, in the order they were reported.
///
/// A kind appears at most once. Serializes as `{"required": true, ...}`.
///
/// # Example
///
/// ```rust
/// use signup_forms::core::{ErrorKind, ErrorMap};
///
/// let errors: ErrorMap = [ErrorKind::Required, ErrorKind::Pattern, ErrorKind::Required]
///     .into_iter()
///     .collect();
///
/// assert_eq!(errors.len(), 2);
/// assert_eq!(serde_json::to_string(&errors).unwrap(), r#"{"required":true,"pattern":true}"#);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ErrorMap {
    kinds: Vec<ErrorKind>,
}

impl ErrorMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a kind; repeats keep their first position.
    pub fn insert(&mut self, kind: ErrorKind) {
        if !self.kinds.contains(&kind) {
            self.kinds.push(kind);
        }
    }

    pub fn contains(&self, kind: ErrorKind) -> bool {
        self.kinds.contains(&kind)
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = ErrorKind> + '_ {
        self.kinds.iter().copied()
    }
}

impl FromIterator<ErrorKind> for ErrorMap {
    fn from_iter<I: IntoIterator<Item = ErrorKind>>(iter: I) -> Self {
        let mut map = Self::new();
        for kind in iter {
            map.insert(kind);
        }
        map
    }
}

impl Extend<ErrorKind> for ErrorMap {
    fn extend<I: IntoIterator<Item = ErrorKind>>(&mut self, iter: I) {
        for kind in iter {
            self.insert(kind);
        }
    }
}

impl Serialize for ErrorMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.kinds.len()))?;
        for kind in &self.kinds {
            map.serialize_entry(kind.key(), &true)?;
        }
        map.end()
    }
}
