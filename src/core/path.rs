//! Dotted control paths such as `emailGroup.email` or `addresses.0.street1`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One step of a [`ControlPath`].
///
/// Numeric segments are kept as text; whether they index an array or name a
/// group member is decided by the control they are applied to.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Segment(String);

impl Segment {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The segment as an array index, if it is one.
    pub fn index(&self) -> Option<usize> {
        self.0.parse().ok()
    }
}

/// Location of a control inside a form tree. The empty path is the root.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct ControlPath {
    segments: Vec<Segment>,
}

/// Returned when a path string contains an empty segment.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("Invalid control path '{0}'")]
pub struct InvalidPath(pub String);

impl ControlPath {
    pub fn root() -> Self {
        Self::default()
    }

    /// Parse a dotted path. Empty input is the root; empty segments are rejected.
    pub fn parse(raw: &str) -> Result<Self, InvalidPath> {
        if raw.is_empty() {
            return Ok(Self::root());
        }
        let segments = raw
            .split('.')
            .map(|s| {
                if s.is_empty() {
                    Err(InvalidPath(raw.to_string()))
                } else {
                    Ok(Segment(s.to_string()))
                }
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { segments })
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Path of a named child.
    pub fn child(&self, name: impl Into<String>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(Segment(name.into()));
        Self { segments }
    }

    /// Path of an array element.
    pub fn index(&self, index: usize) -> Self {
        self.child(index.to_string())
    }

    pub fn parent(&self) -> Option<Self> {
        if self.is_root() {
            return None;
        }
        let mut segments = self.segments.clone();
        segments.pop();
        Some(Self { segments })
    }

    /// Every proper ancestor, nearest first, ending at the root.
    pub fn ancestors(&self) -> Vec<Self> {
        let mut out = Vec::new();
        let mut current = self.parent();
        while let Some(path) = current {
            current = path.parent();
            out.push(path);
        }
        out
    }

    /// True if `self` equals `other` or lies beneath it.
    pub fn starts_with(&self, other: &ControlPath) -> bool {
        self.segments.starts_with(&other.segments)
    }
}

impl fmt::Display for ControlPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined: Vec<&str> = self.segments.iter().map(Segment::as_str).collect();
        f.write_str(&joined.join("."))
    }
}

impl FromStr for ControlPath {
    type Err = InvalidPath;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<ControlPath> for String {
    fn from(path: ControlPath) -> Self {
        path.to_string()
    }
}

impl TryFrom<String> for ControlPath {
    type Error = InvalidPath;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl TryFrom<&str> for ControlPath {
    type Error = InvalidPath;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

/// Anything that names a control: a parsed path or its dotted text.
pub trait IntoPath {
    fn into_path(self) -> Result<ControlPath, InvalidPath>;
}

impl IntoPath for ControlPath {
    fn into_path(self) -> Result<ControlPath, InvalidPath> {
        Ok(self)
    }
}

impl IntoPath for &ControlPath {
    fn into_path(self) -> Result<ControlPath, InvalidPath> {
        Ok(self.clone())
    }
}

impl IntoPath for &str {
    fn into_path(self) -> Result<ControlPath, InvalidPath> {
        ControlPath::parse(self)
    }
}

impl IntoPath for &String {
    fn into_path(self) -> Result<ControlPath, InvalidPath> {
        ControlPath::parse(self)
    }
}
