//! Builders for groups and arrays.

use super::error::BuildError;
use super::field::FieldBuilder;
use crate::form::{ArrayControl, Control, Form, GroupControl};
use crate::validators::{Validator, ValidatorRule, ValidatorSet};
use serde_json::Value;

/// Builder for a named group of controls with optional group validators.
///
/// Children keep their declaration order, which is also the key order of
/// the group's value.
#[derive(Debug, Default)]
pub struct GroupBuilder {
    controls: Vec<(String, Result<Control, BuildError>)>,
    validators: ValidatorSet,
}

impl GroupBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field built from a [`FieldBuilder`].
    pub fn field(self, name: impl Into<String>, field: FieldBuilder) -> Self {
        self.entry(name, Ok(field.build()))
    }

    /// Add a field with an initial value and no validators.
    pub fn value(self, name: impl Into<String>, initial: impl Into<Value>) -> Self {
        self.field(name, FieldBuilder::new(initial))
    }

    /// Add a nested group.
    pub fn group(self, name: impl Into<String>, group: GroupBuilder) -> Self {
        self.entry(name, group.build())
    }

    /// Add an array.
    pub fn array(self, name: impl Into<String>, array: ArrayBuilder) -> Self {
        self.entry(name, array.build())
    }

    /// Add an already-built control.
    pub fn control(self, name: impl Into<String>, control: Control) -> Self {
        self.entry(name, Ok(control))
    }

    /// Attach a group-level validator; it receives the group itself.
    pub fn validator(mut self, validator: Validator) -> Self {
        self.validators.push(ValidatorRule::Fixed(validator));
        self
    }

    fn entry(mut self, name: impl Into<String>, control: Result<Control, BuildError>) -> Self {
        self.controls.push((name.into(), control));
        self
    }

    /// Build the group, rejecting empty or repeated names.
    pub fn build(self) -> Result<Control, BuildError> {
        let mut controls: Vec<(String, Control)> = Vec::with_capacity(self.controls.len());
        for (name, control) in self.controls {
            if name.is_empty() {
                return Err(BuildError::EmptyName);
            }
            if controls.iter().any(|(n, _)| *n == name) {
                return Err(BuildError::DuplicateName { name });
            }
            controls.push((name, control?));
        }

        Ok(Control::Group(GroupControl {
            controls,
            validators: self.validators,
        }))
    }

    /// Build the group as the root of a [`Form`].
    pub fn build_form(self) -> Result<Form, BuildError> {
        Form::new(self.build()?)
    }
}

/// Builder for an ordered array of controls.
#[derive(Debug, Default)]
pub struct ArrayBuilder {
    controls: Vec<Result<Control, BuildError>>,
    validators: ValidatorSet,
}

impl ArrayBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn group(mut self, group: GroupBuilder) -> Self {
        self.controls.push(group.build());
        self
    }

    pub fn control(mut self, control: Control) -> Self {
        self.controls.push(Ok(control));
        self
    }

    pub fn validator(mut self, validator: Validator) -> Self {
        self.validators.push(ValidatorRule::Fixed(validator));
        self
    }

    pub fn build(self) -> Result<Control, BuildError> {
        let controls = self.controls.into_iter().collect::<Result<Vec<_>, _>>()?;
        Ok(Control::Array(ArrayControl {
            controls,
            validators: self.validators,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Condition, ControlPath};
    use crate::validators::required;
    use serde_json::json;

    #[test]
    fn builder_rejects_duplicate_names() {
        let result = GroupBuilder::new().value("a", 1).value("a", 2).build();

        assert!(matches!(result, Err(BuildError::DuplicateName { name }) if name == "a"));
    }

    #[test]
    fn builder_rejects_empty_names() {
        let result = GroupBuilder::new().value("", 1).build();
        assert!(matches!(result, Err(BuildError::EmptyName)));
    }

    #[test]
    fn nested_errors_propagate() {
        let result = GroupBuilder::new()
            .group("inner", GroupBuilder::new().value("x", 1).value("x", 2))
            .build();

        assert!(matches!(result, Err(BuildError::DuplicateName { .. })));
    }

    #[test]
    fn build_form_checks_dependencies() {
        let result = GroupBuilder::new()
            .field(
                "phone",
                FieldBuilder::new("").when(
                    ControlPath::root().child("notification"),
                    Condition::equals("text"),
                    vec![required()],
                ),
            )
            .build_form();

        assert!(matches!(
            result,
            Err(BuildError::UnknownDependency { control, depends_on })
                if control == "phone" && depends_on == "notification"
        ));
    }

    #[test]
    fn array_builder_keeps_order() {
        let array = ArrayBuilder::new()
            .group(GroupBuilder::new().value("n", 1))
            .group(GroupBuilder::new().value("n", 2))
            .build()
            .unwrap();

        assert_eq!(array.value(), json!([{"n": 1}, {"n": 2}]));
    }
}
