//! Query resolution
//!
//! Steps are applied left to right in a single pass:
//!
//! - the first segment must equal the root's own name (anchor check);
//! - every later segment selects the first direct child with that name;
//! - a `~` step additionally looks up the rest of the expression as an
//!   attribute on the tag just reached. The outcome of the last lookup,
//!   found or not, is the result.
//!
//! Any failed match ends resolution with no result. There is no backtracking
//! and no search outside the current tag's direct children.

use tracing::trace;

use super::path::{Delimiter, QueryPath};
use crate::ast::{Tag, TagTree};

impl QueryPath {
    /// Resolve against a built tree. `None` means "not found" for any reason.
    pub fn resolve<'t>(&self, tree: &'t TagTree) -> Option<&'t str> {
        let root = tree.root()?;
        let mut current: Option<&'t Tag> = None;
        let mut result: Option<&'t str> = None;

        for step in self.steps() {
            let next = match current {
                None if step.segment == root.name() => root,
                None => {
                    trace!(query = %self, segment = %step.segment, "anchor mismatch");
                    return None;
                }
                Some(tag) => match tag.child(&step.segment) {
                    Some(child) => child,
                    None => {
                        trace!(
                            query = %self,
                            parent = tag.name(),
                            segment = %step.segment,
                            "no such child"
                        );
                        return None;
                    }
                },
            };
            current = Some(next);

            if step.delimiter == Delimiter::Lookup {
                result = next.attribute(&step.remainder);
                trace!(
                    query = %self,
                    tag = next.name(),
                    attribute = %step.remainder,
                    found = result.is_some(),
                    "attribute lookup"
                );
            }
        }

        result
    }
}

/// Resolve a path expression against a tree in one call.
pub fn resolve<'t>(tree: &'t TagTree, expression: &str) -> Option<&'t str> {
    QueryPath::parse(expression).resolve(tree)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::building::parse_lines;

    fn sample() -> TagTree {
        parse_lines([
            r#"<tag1 value="HelloWorld" v~w="tilde">"#,
            r#"<tag2 name="Name1">"#,
            "</tag2>",
            r#"<tag2 name="Second">"#,
            "</tag2>",
            r#"<tag3 x="1" y="y~z">"#,
            r#"<tag4 deep="yes">"#,
            "</tag4>",
            "</tag3>",
            "</tag1>",
        ])
        .unwrap()
    }

    #[test]
    fn test_root_attribute() {
        assert_eq!(resolve(&sample(), "tag1~value"), Some("HelloWorld"));
    }

    #[test]
    fn test_child_attribute() {
        assert_eq!(resolve(&sample(), "tag1.tag2~name"), Some("Name1"));
        assert_eq!(resolve(&sample(), "tag1.tag3.tag4~deep"), Some("yes"));
    }

    #[test]
    fn test_missing_attribute() {
        assert_eq!(resolve(&sample(), "tag1~name"), None);
    }

    #[test]
    fn test_anchor_must_match_root() {
        assert_eq!(resolve(&sample(), "tag2~name"), None);
        assert_eq!(resolve(&sample(), "tag9.tag2~name"), None);
    }

    #[test]
    fn test_no_skipping_levels() {
        assert_eq!(resolve(&sample(), "tag1.tag4~deep"), None);
        assert_eq!(resolve(&sample(), "tag3.tag4~deep"), None);
    }

    #[test]
    fn test_path_without_lookup() {
        assert_eq!(resolve(&sample(), "tag1"), None);
        assert_eq!(resolve(&sample(), "tag1.tag2"), None);
        assert_eq!(resolve(&sample(), ""), None);
    }

    #[test]
    fn test_empty_segments_fail_descent() {
        assert_eq!(resolve(&sample(), "tag1..tag2~name"), None);
        assert_eq!(resolve(&sample(), ".tag1~value"), None);
        assert_eq!(resolve(&sample(), "tag1.~value"), None);
    }

    #[test]
    fn test_empty_attribute_name() {
        assert_eq!(resolve(&sample(), "tag1~"), None);
    }

    #[test]
    fn test_repeated_tilde_uses_last_lookup() {
        // The first `~` looks up "tag3~x" on the root and misses; the second
        // descends into tag3 and finds x.
        assert_eq!(resolve(&sample(), "tag1~tag3~x"), Some("1"));
    }

    #[test]
    fn test_failed_descent_after_lookup_discards_result() {
        // "v~w" is found on the root, then descending into "v" fails.
        assert_eq!(resolve(&sample(), "tag1~v~w"), None);
        assert_eq!(resolve(&sample(), "tag1~value.x"), None);
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let tree = sample();
        let path = QueryPath::parse("tag1.tag2~name");
        assert_eq!(path.resolve(&tree), path.resolve(&tree));
        assert_eq!(tree.resolve("tag1.tag2~name"), Some("Name1"));
    }

    #[test]
    fn test_empty_tree() {
        assert_eq!(resolve(&TagTree::empty(), "a~x"), None);
    }
}
