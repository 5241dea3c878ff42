//! The control tree: scalar fields, named groups and ordered arrays.

use crate::core::{ControlPath, Segment};
use crate::validators::ValidatorSet;
use serde_json::{Map, Value};

/// A scalar form control.
#[derive(Clone, Debug)]
pub struct FieldControl {
    pub(crate) value: Value,
    pub(crate) initial: Value,
    pub(crate) touched: bool,
    pub(crate) pristine: bool,
    pub(crate) validators: ValidatorSet,
}

impl FieldControl {
    pub fn new(initial: Value, validators: ValidatorSet) -> Self {
        Self {
            value: initial.clone(),
            initial,
            touched: false,
            pristine: true,
            validators,
        }
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn initial(&self) -> &Value {
        &self.initial
    }
}

/// Named controls in declaration order.
#[derive(Clone, Debug, Default)]
pub struct GroupControl {
    pub(crate) controls: Vec<(String, Control)>,
    pub(crate) validators: ValidatorSet,
}

impl GroupControl {
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.controls.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.controls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }
}

/// Variable-length list of controls.
#[derive(Clone, Debug, Default)]
pub struct ArrayControl {
    pub(crate) controls: Vec<Control>,
    pub(crate) validators: ValidatorSet,
}

impl ArrayControl {
    pub fn len(&self) -> usize {
        self.controls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Control> {
        self.controls.iter()
    }
}

/// A node of the form tree.
///
/// Groups and arrays derive their flags from their descendants: touched if
/// any descendant is touched, pristine while every descendant is pristine.
#[derive(Clone, Debug)]
pub enum Control {
    Field(FieldControl),
    Group(GroupControl),
    Array(ArrayControl),
}

impl Control {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Field(_) => "field",
            Self::Group(_) => "group",
            Self::Array(_) => "array",
        }
    }

    /// Current value. Groups become JSON objects in declaration order,
    /// arrays become JSON arrays.
    pub fn value(&self) -> Value {
        match self {
            Self::Field(field) => field.value.clone(),
            Self::Group(group) => {
                let mut map = Map::new();
                for (name, control) in &group.controls {
                    map.insert(name.clone(), control.value());
                }
                Value::Object(map)
            }
            Self::Array(array) => Value::Array(array.controls.iter().map(Control::value).collect()),
        }
    }

    pub fn validators(&self) -> &ValidatorSet {
        match self {
            Self::Field(field) => &field.validators,
            Self::Group(group) => &group.validators,
            Self::Array(array) => &array.validators,
        }
    }

    pub fn is_touched(&self) -> bool {
        match self {
            Self::Field(field) => field.touched,
            Self::Group(group) => group.controls.iter().any(|(_, c)| c.is_touched()),
            Self::Array(array) => array.controls.iter().any(Control::is_touched),
        }
    }

    pub fn is_pristine(&self) -> bool {
        match self {
            Self::Field(field) => field.pristine,
            Self::Group(group) => group.controls.iter().all(|(_, c)| c.is_pristine()),
            Self::Array(array) => array.controls.iter().all(Control::is_pristine),
        }
    }

    /// Dirty once any change has been received, even if the value was
    /// later edited back to its initial one.
    pub fn is_dirty(&self) -> bool {
        !self.is_pristine()
    }

    pub fn as_field(&self) -> Option<&FieldControl> {
        match self {
            Self::Field(field) => Some(field),
            _ => None,
        }
    }

    pub fn as_group(&self) -> Option<&GroupControl> {
        match self {
            Self::Group(group) => Some(group),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&ArrayControl> {
        match self {
            Self::Array(array) => Some(array),
            _ => None,
        }
    }

    /// Direct child by group member name or array index.
    pub fn child(&self, name: &str) -> Option<&Control> {
        match self {
            Self::Field(_) => None,
            Self::Group(group) => group
                .controls
                .iter()
                .find(|(n, _)| n == name)
                .map(|(_, c)| c),
            Self::Array(array) => name.parse::<usize>().ok().and_then(|i| array.controls.get(i)),
        }
    }

    fn child_mut(&mut self, segment: &Segment) -> Option<&mut Control> {
        match self {
            Self::Field(_) => None,
            Self::Group(group) => group
                .controls
                .iter_mut()
                .find(|(n, _)| n == segment.as_str())
                .map(|(_, c)| c),
            Self::Array(array) => segment.index().and_then(|i| array.controls.get_mut(i)),
        }
    }

    /// Descendant at `path`; the empty path is `self`.
    pub fn get(&self, path: &ControlPath) -> Option<&Control> {
        path.segments()
            .iter()
            .try_fold(self, |control, segment| control.child(segment.as_str()))
    }

    pub(crate) fn get_mut(&mut self, path: &ControlPath) -> Option<&mut Control> {
        path.segments()
            .iter()
            .try_fold(self, |control, segment| control.child_mut(segment))
    }

    /// Visit this control and every descendant, parents before children.
    pub fn walk<F>(&self, path: &ControlPath, visit: &mut F)
    where
        F: FnMut(&ControlPath, &Control),
    {
        visit(path, self);
        match self {
            Self::Field(_) => {}
            Self::Group(group) => {
                for (name, control) in &group.controls {
                    control.walk(&path.child(name.clone()), visit);
                }
            }
            Self::Array(array) => {
                for (index, control) in array.controls.iter().enumerate() {
                    control.walk(&path.index(index), visit);
                }
            }
        }
    }

    pub(crate) fn mark_touched(&mut self) {
        match self {
            Self::Field(field) => field.touched = true,
            Self::Group(group) => group.controls.iter_mut().for_each(|(_, c)| c.mark_touched()),
            Self::Array(array) => array.controls.iter_mut().for_each(Control::mark_touched),
        }
    }

    /// Merge `patch` into this subtree, changing only the leaves it names.
    ///
    /// Unknown group members, out-of-range array indexes and shape
    /// mismatches are ignored. Paths of changed fields are appended to
    /// `changed`.
    pub(crate) fn patch(&mut self, path: &ControlPath, patch: &Value, changed: &mut Vec<ControlPath>) {
        match (self, patch) {
            (Self::Field(field), value) => {
                field.value = value.clone();
                field.pristine = false;
                changed.push(path.clone());
            }
            (Self::Group(group), Value::Object(entries)) => {
                for (name, control) in group.controls.iter_mut() {
                    if let Some(value) = entries.get(name.as_str()) {
                        control.patch(&path.child(name.clone()), value, changed);
                    }
                }
            }
            (Self::Array(array), Value::Array(items)) => {
                for (index, (control, value)) in array.controls.iter_mut().zip(items).enumerate() {
                    control.patch(&path.index(index), value, changed);
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{ArrayBuilder, FieldBuilder, GroupBuilder};
    use serde_json::json;

    fn sample() -> Control {
        GroupBuilder::new()
            .value("firstName", "")
            .group(
                "emailGroup",
                GroupBuilder::new().value("email", "").value("confirmEmail", ""),
            )
            .array(
                "addresses",
                ArrayBuilder::new().group(GroupBuilder::new().value("street1", "")),
            )
            .build()
            .unwrap()
    }

    fn path(raw: &str) -> ControlPath {
        ControlPath::parse(raw).unwrap()
    }

    #[test]
    fn value_keeps_declaration_order() {
        let json = serde_json::to_string(&sample().value()).unwrap();
        assert_eq!(
            json,
            r#"{"firstName":"","emailGroup":{"email":"","confirmEmail":""},"addresses":[{"street1":""}]}"#
        );
    }

    #[test]
    fn get_follows_names_and_indexes() {
        let root = sample();
        assert_eq!(root.get(&path("emailGroup.email")).map(Control::kind), Some("field"));
        assert_eq!(root.get(&path("addresses.0")).map(Control::kind), Some("group"));
        assert!(root.get(&path("addresses.1")).is_none());
        assert!(root.get(&path("firstName.nested")).is_none());
    }

    #[test]
    fn group_flags_derive_from_children() {
        let mut root = sample();
        assert!(root.is_pristine());
        assert!(!root.is_touched());

        root.get_mut(&path("emailGroup.email")).unwrap().mark_touched();
        let group = root.get(&path("emailGroup")).unwrap();
        assert!(group.is_touched());
        assert!(group.is_pristine());
    }

    #[test]
    fn patch_changes_only_named_leaves() {
        let mut root = sample();
        let mut changed = Vec::new();
        root.patch(
            &ControlPath::root(),
            &json!({"emailGroup": {"email": "a@b.com"}, "unknown": 1, "addresses": [{}, {}]}),
            &mut changed,
        );

        assert_eq!(changed, vec![path("emailGroup.email")]);
        assert_eq!(root.value()["emailGroup"]["email"], json!("a@b.com"));
        assert_eq!(root.value()["emailGroup"]["confirmEmail"], json!(""));
        assert!(root.get(&path("emailGroup.confirmEmail")).unwrap().is_pristine());
    }

    #[test]
    fn field_stays_dirty_after_edit_back_to_initial() {
        let mut field = FieldBuilder::new(json!("")).build();
        let mut changed = Vec::new();
        field.patch(&ControlPath::root(), &json!("x"), &mut changed);
        assert!(field.is_dirty());

        field.patch(&ControlPath::root(), &json!(""), &mut changed);
        assert_eq!(field.value(), json!(""));
        assert!(!field.is_pristine());
        assert!(field.is_dirty());
    }
}
