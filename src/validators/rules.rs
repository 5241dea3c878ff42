//! Tagged validator rules: fixed, or conditional on another control's value.
//!
//! A control's active validators are a pure function of form state. They
//! are resolved every time errors are read, so a validator that stops
//! applying can never leave a stale error behind.

use super::Validator;
use crate::core::{Condition, ControlPath, ErrorMap};
use crate::form::Control;
use serde_json::Value;
use stillwater::validation::Validation;

/// One entry of a control's validator set.
#[derive(Clone, Debug)]
pub enum ValidatorRule {
    /// Always active.
    Fixed(Validator),

    /// Active only while the control at `source` satisfies `condition`.
    Conditional {
        source: ControlPath,
        condition: Condition,
        validators: Vec<Validator>,
    },
}

impl ValidatorRule {
    /// Path this rule depends on, if any.
    pub fn dependency(&self) -> Option<&ControlPath> {
        match self {
            Self::Fixed(_) => None,
            Self::Conditional { source, .. } => Some(source),
        }
    }
}

/// Ordered validator rules attached to one control.
#[derive(Clone, Debug, Default)]
pub struct ValidatorSet {
    rules: Vec<ValidatorRule>,
}

impl ValidatorSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// A set of unconditional validators.
    pub fn fixed(validators: Vec<Validator>) -> Self {
        Self {
            rules: validators.into_iter().map(ValidatorRule::Fixed).collect(),
        }
    }

    pub fn push(&mut self, rule: ValidatorRule) {
        self.rules.push(rule);
    }

    pub fn rules(&self) -> &[ValidatorRule] {
        &self.rules
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Paths whose values decide which of these validators are active.
    pub fn dependencies(&self) -> impl Iterator<Item = &ControlPath> {
        self.rules.iter().filter_map(ValidatorRule::dependency)
    }

    /// Validators active for the current form state, in declaration order.
    ///
    /// `lookup` reads the current value at a path. A missing source reads
    /// as null.
    pub fn resolve<F>(&self, lookup: F) -> Vec<&Validator>
    where
        F: Fn(&ControlPath) -> Option<Value>,
    {
        let mut active = Vec::new();
        for rule in &self.rules {
            match rule {
                ValidatorRule::Fixed(validator) => active.push(validator),
                ValidatorRule::Conditional {
                    source,
                    condition,
                    validators,
                } => {
                    let value = lookup(source).unwrap_or(Value::Null);
                    if condition.check(&value) {
                        active.extend(validators.iter());
                    }
                }
            }
        }
        active
    }

    /// Run every active validator against `control`, accumulating all
    /// reported kinds in report order.
    pub fn validate<F>(&self, control: &Control, lookup: F) -> ErrorMap
    where
        F: Fn(&ControlPath) -> Option<Value>,
    {
        let active = self.resolve(lookup);
        if active.is_empty() {
            return ErrorMap::new();
        }

        let outcomes: Vec<_> = active.iter().map(|v| v.validate(control)).collect();
        match Validation::all_vec(outcomes) {
            Validation::Success(_) => ErrorMap::new(),
            Validation::Failure(kinds) => kinds.iter().copied().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::FieldBuilder;
    use crate::core::ErrorKind;
    use crate::validators::{max_length, min_length, pattern, required};
    use serde_json::json;

    fn notification_lookup(value: &'static str) -> impl Fn(&ControlPath) -> Option<Value> {
        move |path: &ControlPath| {
            if path.to_string() == "notification" {
                Some(json!(value))
            } else {
                None
            }
        }
    }

    fn phone_rules() -> ValidatorSet {
        let mut set = ValidatorSet::new();
        set.push(ValidatorRule::Conditional {
            source: ControlPath::parse("notification").unwrap(),
            condition: Condition::equals("text"),
            validators: vec![required()],
        });
        set
    }

    #[test]
    fn conditional_rule_follows_source_value() {
        let set = phone_rules();

        assert_eq!(set.resolve(notification_lookup("text")).len(), 1);
        assert!(set.resolve(notification_lookup("email")).is_empty());
    }

    #[test]
    fn missing_source_reads_as_null() {
        let set = phone_rules();
        assert!(set.resolve(|_| None).is_empty());
    }

    #[test]
    fn validate_accumulates_all_failures() {
        let set = ValidatorSet::fixed(vec![
            min_length(10),
            pattern("[0-9]+").unwrap(),
            max_length(2),
        ]);
        let control = FieldBuilder::new(json!("abc")).build();

        let errors = set.validate(&control, |_| None);

        let kinds: Vec<_> = errors.iter().collect();
        assert_eq!(
            kinds,
            vec![ErrorKind::MinLength, ErrorKind::Pattern, ErrorKind::MaxLength]
        );
    }

    #[test]
    fn validate_is_idempotent() {
        let set = phone_rules();
        let control = FieldBuilder::new(json!("")).build();

        let first = set.validate(&control, notification_lookup("text"));
        let second = set.validate(&control, notification_lookup("text"));

        assert_eq!(first, second);
        assert!(first.contains(ErrorKind::Required));
    }

    #[test]
    fn dependencies_list_conditional_sources() {
        let mut set = phone_rules();
        set.push(ValidatorRule::Fixed(required()));

        let deps: Vec<_> = set.dependencies().map(|p| p.to_string()).collect();
        assert_eq!(deps, vec!["notification".to_string()]);
    }
}
