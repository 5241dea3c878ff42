//! Form runtime errors.

use crate::builder::BuildError;
use crate::config::ConfigError;
use crate::core::{ControlPath, InvalidPath};
use thiserror::Error;

/// Errors raised by form queries and mutations.
///
/// Validation failures are not errors; they are reported through
/// [`ErrorMap`](crate::core::ErrorMap)s.
#[derive(Debug, Error)]
pub enum FormError {
    #[error("No control at path '{0}'")]
    NotFound(ControlPath),

    #[error("Control at '{path}' is a {found}, expected a {expected}")]
    WrongKind {
        path: ControlPath,
        expected: &'static str,
        found: &'static str,
    },

    #[error(transparent)]
    InvalidPath(#[from] InvalidPath),

    #[error(transparent)]
    Build(#[from] BuildError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Form has been torn down")]
    Disposed,
}
