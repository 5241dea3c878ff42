//! Builder for scalar fields.

use crate::core::{Condition, ControlPath};
use crate::form::{Control, FieldControl};
use crate::validators::{Validator, ValidatorRule, ValidatorSet};
use serde_json::Value;

/// Builder for a scalar field: an initial value plus ordered validator rules.
#[derive(Clone, Debug)]
pub struct FieldBuilder {
    initial: Value,
    validators: ValidatorSet,
}

impl FieldBuilder {
    /// Start a field with its initial value.
    pub fn new(initial: impl Into<Value>) -> Self {
        Self {
            initial: initial.into(),
            validators: ValidatorSet::new(),
        }
    }

    /// Attach an unconditional validator.
    pub fn validator(mut self, validator: Validator) -> Self {
        self.validators.push(ValidatorRule::Fixed(validator));
        self
    }

    /// Attach several unconditional validators, in order.
    pub fn validators(mut self, validators: impl IntoIterator<Item = Validator>) -> Self {
        for validator in validators {
            self.validators.push(ValidatorRule::Fixed(validator));
        }
        self
    }

    /// Attach validators that apply only while the control at `source`
    /// satisfies `condition`.
    pub fn when(mut self, source: ControlPath, condition: Condition, validators: Vec<Validator>) -> Self {
        self.validators.push(ValidatorRule::Conditional {
            source,
            condition,
            validators,
        });
        self
    }

    pub fn build(self) -> Control {
        Control::Field(FieldControl::new(self.initial, self.validators))
    }
}

impl From<Value> for FieldBuilder {
    fn from(initial: Value) -> Self {
        Self::new(initial)
    }
}
