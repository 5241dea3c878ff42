//! The form: a control tree plus its dependency graph.

use super::deps::DependencyGraph;
use super::{Control, FormError};
use crate::builder::BuildError;
use crate::core::{ControlPath, ErrorMap, IntoPath};
use crate::validators::Validator;
use serde_json::Value;
use tracing::debug;

/// What a mutation touched.
///
/// `changed` lists the fields whose values were written. `affected` lists
/// every control whose derived state may differ afterwards: the changed
/// fields, their ancestors, and the controls whose validator sets depend
/// on any of them (plus their ancestors).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChangeSet {
    pub changed: Vec<ControlPath>,
    pub affected: Vec<ControlPath>,
}

impl ChangeSet {
    pub fn is_empty(&self) -> bool {
        self.changed.is_empty()
    }

    /// True if the field at `path` was written.
    pub fn wrote(&self, path: &ControlPath) -> bool {
        self.changed.contains(path)
    }

    pub fn affects(&self, path: &ControlPath) -> bool {
        self.affected.contains(path)
    }
}

/// A built form.
///
/// Errors are derived on read: every query resolves the control's active
/// validators against the current form state, so no result can outlive
/// the state it was computed from.
#[derive(Clone, Debug)]
pub struct Form {
    root: Control,
    graph: DependencyGraph,
}

impl Form {
    /// Wrap a built control tree, checking that every conditional rule
    /// reads a control that exists.
    pub fn new(root: Control) -> Result<Self, BuildError> {
        let graph = DependencyGraph::from_root(&root);
        if let Some(edge) = graph.dangling(&root) {
            return Err(BuildError::UnknownDependency {
                control: edge.dependent.to_string(),
                depends_on: edge.source.to_string(),
            });
        }
        Ok(Self { root, graph })
    }

    pub fn root(&self) -> &Control {
        &self.root
    }

    pub fn dependencies(&self) -> &DependencyGraph {
        &self.graph
    }

    pub fn get(&self, path: impl IntoPath) -> Result<&Control, FormError> {
        let path = path.into_path()?;
        self.root.get(&path).ok_or(FormError::NotFound(path))
    }

    /// Value of the whole form.
    pub fn value(&self) -> Value {
        self.root.value()
    }

    pub fn value_at(&self, path: impl IntoPath) -> Result<Value, FormError> {
        Ok(self.get(path)?.value())
    }

    /// Write a single field, clearing its pristine flag.
    pub fn set_value(&mut self, path: impl IntoPath, value: Value) -> Result<ChangeSet, FormError> {
        let path = path.into_path()?;
        let control = self
            .root
            .get_mut(&path)
            .ok_or_else(|| FormError::NotFound(path.clone()))?;
        if !matches!(control, Control::Field(_)) {
            return Err(FormError::WrongKind {
                path,
                expected: "field",
                found: control.kind(),
            });
        }

        let mut changed = Vec::new();
        control.patch(&path, &value, &mut changed);
        debug!(path = %path, value = %value, "field value changed");
        Ok(self.change_set(changed))
    }

    /// Partially merge `patch` into the form; only the leaves it names
    /// change.
    pub fn patch_value(&mut self, patch: &Value) -> ChangeSet {
        let mut changed = Vec::new();
        self.root.patch(&ControlPath::root(), patch, &mut changed);
        debug!(fields = changed.len(), "form patched");
        self.change_set(changed)
    }

    /// Mark the control (and, for groups and arrays, every descendant) as touched.
    pub fn mark_touched(&mut self, path: impl IntoPath) -> Result<(), FormError> {
        let path = path.into_path()?;
        self.root
            .get_mut(&path)
            .ok_or(FormError::NotFound(path))?
            .mark_touched();
        Ok(())
    }

    /// Append a control to the array at `path`.
    pub fn push(&mut self, path: impl IntoPath, control: Control) -> Result<ControlPath, FormError> {
        let path = path.into_path()?;
        let target = self
            .root
            .get_mut(&path)
            .ok_or_else(|| FormError::NotFound(path.clone()))?;
        let found = target.kind();
        let Control::Array(array) = target else {
            return Err(FormError::WrongKind {
                path,
                expected: "array",
                found,
            });
        };
        array.controls.push(control);
        let element = path.index(array.controls.len() - 1);

        let graph = DependencyGraph::from_root(&self.root);
        if let Some(edge) = graph.dangling(&self.root) {
            let err = BuildError::UnknownDependency {
                control: edge.dependent.to_string(),
                depends_on: edge.source.to_string(),
            };
            if let Some(Control::Array(array)) = self.root.get_mut(&path) {
                array.controls.pop();
            }
            return Err(err.into());
        }
        self.graph = graph;
        debug!(path = %element, "control appended");
        Ok(element)
    }

    /// Validators currently active on the control at `path`.
    pub fn active_validators(&self, path: impl IntoPath) -> Result<Vec<&Validator>, FormError> {
        let control = self.get(path)?;
        Ok(control.validators().resolve(|p| self.lookup(p)))
    }

    /// Errors the control at `path` reports itself (not its descendants).
    pub fn errors(&self, path: impl IntoPath) -> Result<ErrorMap, FormError> {
        let control = self.get(path)?;
        Ok(self.errors_of(control))
    }

    /// Every control with at least one active error, parents first.
    pub fn all_errors(&self) -> Vec<(ControlPath, ErrorMap)> {
        let mut out = Vec::new();
        self.root
            .walk(&ControlPath::root(), &mut |path: &ControlPath, control: &Control| {
                let errors = self.errors_of(control);
                if !errors.is_empty() {
                    out.push((path.clone(), errors));
                }
            });
        out
    }

    /// A control is valid when neither it nor any descendant reports errors.
    pub fn is_valid_at(&self, path: impl IntoPath) -> Result<bool, FormError> {
        let path = path.into_path()?;
        let control = self.get(&path)?;
        let mut valid = true;
        control.walk(&path, &mut |_: &ControlPath, c: &Control| {
            if valid && !self.errors_of(c).is_empty() {
                valid = false;
            }
        });
        Ok(valid)
    }

    pub fn is_valid(&self) -> bool {
        self.all_errors().is_empty()
    }

    /// Serialize the full form value.
    pub fn to_json(&self) -> Result<String, FormError> {
        Ok(serde_json::to_string(&self.value())?)
    }

    fn lookup(&self, path: &ControlPath) -> Option<Value> {
        self.root.get(path).map(Control::value)
    }

    fn errors_of(&self, control: &Control) -> ErrorMap {
        control.validators().validate(control, |p| self.lookup(p))
    }

    fn change_set(&self, changed: Vec<ControlPath>) -> ChangeSet {
        let mut affected: Vec<ControlPath> = Vec::new();
        for path in &changed {
            add_with_ancestors(path, &mut affected);
            for dependent in self.graph.dependents_of(path) {
                debug!(source = %path, dependent = %dependent, "re-resolving dependent validators");
                add_with_ancestors(&dependent, &mut affected);
            }
        }

        ChangeSet { changed, affected }
    }
}

fn add_with_ancestors(path: &ControlPath, affected: &mut Vec<ControlPath>) {
    for p in std::iter::once(path.clone()).chain(path.ancestors()) {
        if !affected.contains(&p) {
            affected.push(p);
        }
    }
}
