//! The finished tag tree

use serde::Serialize;

use super::tag::Tag;
use crate::query::QueryPath;

/// A completely built document.
///
/// The root is absent only when the document had no markup lines at all, in
/// which case every query resolves to nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TagTree {
    root: Option<Tag>,
}

impl TagTree {
    pub fn new(root: Tag) -> Self {
        Self { root: Some(root) }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn root(&self) -> Option<&Tag> {
        self.root.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Total number of tags, root included.
    pub fn node_count(&self) -> usize {
        self.root
            .as_ref()
            .map_or(0, |root| 1 + root.descendant_count())
    }

    /// Resolve a path expression such as `root.child~attr`.
    pub fn resolve(&self, expression: &str) -> Option<&str> {
        QueryPath::parse(expression).resolve(self)
    }
}
