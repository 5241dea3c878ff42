//! Build errors for the schema builders.

use thiserror::Error;

/// Errors that can occur when building a control tree.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Control name must not be empty")]
    EmptyName,

    #[error("Control '{name}' declared twice in the same group")]
    DuplicateName { name: String },

    #[error("Control '{control}' depends on unknown control '{depends_on}'")]
    UnknownDependency { control: String, depends_on: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn unknown_dependency_names_both_controls() {
        let err = BuildError::UnknownDependency {
            control: "phone".to_string(),
            depends_on: "notification".to_string(),
        };

        assert_eq!(
            err.to_string(),
            "Control 'phone' depends on unknown control 'notification'"
        );
        assert!(err.source().is_none());
    }
}
