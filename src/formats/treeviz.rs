//! Treeviz formatter for tag trees

use super::registry::Formatter;
use crate::ast::{Tag, TagTree};
use crate::error::FormatError;

pub struct TreevizFormatter;

impl Formatter for TreevizFormatter {
    fn name(&self) -> &str {
        "treeviz"
    }

    fn serialize(&self, tree: &TagTree) -> Result<String, FormatError> {
        Ok(to_treeviz_str(tree))
    }

    fn description(&self) -> &str {
        "Box-drawing outline of the tag tree"
    }
}

fn label(tag: &Tag) -> String {
    let mut label = tag.name().to_string();
    for (key, value) in tag.attributes() {
        label.push_str(&format!(" {}=\"{}\"", key, value));
    }
    label
}

pub fn to_treeviz_str(tree: &TagTree) -> String {
    let mut result = String::new();
    if let Some(root) = tree.root() {
        result.push_str(&label(root));
        result.push('\n');
        append_children(&mut result, root.children(), "");
    }
    result
}

fn append_children(result: &mut String, children: &[Tag], prefix: &str) {
    for (i, child) in children.iter().enumerate() {
        let is_last = i == children.len() - 1;
        let connector = if is_last { "└─" } else { "├─" };
        result.push_str(&format!("{}{} {}\n", prefix, connector, label(child)));

        let new_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
        append_children(result, child.children(), &new_prefix);
    }
}
