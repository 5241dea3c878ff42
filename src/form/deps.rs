//! Explicit dependency edges between controls.
//!
//! An edge `dependent <- source` means the validator set of `dependent`
//! depends on the value of `source`. Edges are collected from the
//! conditional rules of every control once the tree is built.

use super::Control;
use crate::core::ControlPath;

/// One declared dependency.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dependency {
    pub dependent: ControlPath,
    pub source: ControlPath,
}

/// All dependency edges of a form.
#[derive(Clone, Debug, Default)]
pub struct DependencyGraph {
    edges: Vec<Dependency>,
}

impl DependencyGraph {
    /// Collect the edges declared anywhere under `root`.
    pub fn from_root(root: &Control) -> Self {
        let mut edges = Vec::new();
        root.walk(&ControlPath::root(), &mut |path: &ControlPath, control: &Control| {
            for source in control.validators().dependencies() {
                let edge = Dependency {
                    dependent: path.clone(),
                    source: source.clone(),
                };
                if !edges.contains(&edge) {
                    edges.push(edge);
                }
            }
        });
        Self { edges }
    }

    pub fn edges(&self) -> &[Dependency] {
        &self.edges
    }

    /// Controls whose validator sets must be re-resolved when the value at
    /// `changed` changes. A change beneath a source changes the source too.
    pub fn dependents_of(&self, changed: &ControlPath) -> Vec<ControlPath> {
        let mut out: Vec<ControlPath> = Vec::new();
        for edge in &self.edges {
            if changed.starts_with(&edge.source) && !out.contains(&edge.dependent) {
                out.push(edge.dependent.clone());
            }
        }
        out
    }

    /// Paths the validator set of `dependent` reads.
    pub fn sources_of(&self, dependent: &ControlPath) -> Vec<&ControlPath> {
        self.edges
            .iter()
            .filter(|e| &e.dependent == dependent)
            .map(|e| &e.source)
            .collect()
    }

    /// First edge whose source does not resolve under `root`.
    pub(crate) fn dangling(&self, root: &Control) -> Option<&Dependency> {
        self.edges.iter().find(|e| root.get(&e.source).is_none())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{FieldBuilder, GroupBuilder};
    use crate::core::Condition;
    use crate::validators::required;

    fn root() -> Control {
        GroupBuilder::new()
            .value("notification", "email")
            .field(
                "phone",
                FieldBuilder::new("").when(
                    ControlPath::root().child("notification"),
                    Condition::equals("text"),
                    vec![required()],
                ),
            )
            .build()
            .unwrap()
    }

    #[test]
    fn collects_conditional_edges() {
        let graph = DependencyGraph::from_root(&root());

        assert_eq!(graph.edges().len(), 1);
        assert_eq!(graph.edges()[0].dependent.to_string(), "phone");
        assert_eq!(graph.edges()[0].source.to_string(), "notification");
    }

    #[test]
    fn dependents_of_matches_source_and_descendants() {
        let graph = DependencyGraph::from_root(&root());
        let notification = ControlPath::root().child("notification");

        assert_eq!(graph.dependents_of(&notification).len(), 1);
        assert!(graph.dependents_of(&ControlPath::root().child("phone")).is_empty());
    }

    #[test]
    fn sources_of_lists_inputs() {
        let graph = DependencyGraph::from_root(&root());
        let sources = graph.sources_of(&ControlPath::root().child("phone"));
        assert_eq!(sources.len(), 1);
    }

    #[test]
    fn dangling_reports_missing_sources() {
        let control = GroupBuilder::new()
            .field(
                "phone",
                FieldBuilder::new("").when(
                    ControlPath::root().child("missing"),
                    Condition::equals("text"),
                    vec![required()],
                ),
            )
            .build()
            .unwrap();
        let graph = DependencyGraph::from_root(&control);
        assert!(graph.dangling(&control).is_some());
    }
}
