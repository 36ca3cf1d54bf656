//! Tree building
//!
//!     The builder consumes classified lines in document order and grows the tag
//!     tree. It keeps a stack of the tags that are currently open; the bottom of
//!     the stack is the root and the top is the cursor.
//!
//!         - An opening tag becomes the root if nothing has been opened yet,
//!           otherwise a new child of the cursor. Either way it becomes the new
//!           cursor.
//!         - A closing tag must name the cursor. The cursor is then popped and
//!           appended to its parent's children. Closing the root leaves it in
//!           place: it is the result, and any later opening tag nests under it.
//!
//!     At the end of input every tag, the root included, must have been closed.
//!
//!     Children are moved into their parent when they close, so tags never hold
//!     a reference to their parent and the finished tree is a plain owned value.
//!     The stack lives only for the duration of one build.

use tracing::{debug, trace};

use crate::ast::{Tag, TagTree};
use crate::error::ParseError;
use crate::lexing::{tokenize_line, LineToken};

/// Incremental tree builder driven by [`LineToken`]s.
#[derive(Debug, Default)]
pub struct TreeBuilder {
    open: Vec<Tag>,
    root_closed: bool,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Name of the tag that is currently open, if any.
    pub fn cursor(&self) -> Option<&str> {
        self.open.last().map(Tag::name)
    }

    /// Number of tags currently open, root included.
    pub fn depth(&self) -> usize {
        self.open.len()
    }

    /// Apply one token. `line` is the 1-based markup line it came from.
    pub fn push(&mut self, token: LineToken, line: usize) -> Result<(), ParseError> {
        match token {
            LineToken::Open { name, attributes } => {
                let mut tag = Tag::new(name);
                for (key, value) in attributes {
                    tag.set_attribute(key, value);
                }
                trace!(line, tag = tag.name(), depth = self.open.len(), "open");
                self.open.push(tag);
                Ok(())
            }
            LineToken::Close { name } => self.close(name, line),
        }
    }

    fn close(&mut self, name: String, line: usize) -> Result<(), ParseError> {
        let open = self.cursor().map(str::to_string);
        if open.as_deref() != Some(name.as_str()) {
            return Err(ParseError::MismatchedClose { line, name, open });
        }

        if self.open.len() > 1 {
            if let Some(child) = self.open.pop() {
                trace!(line, tag = child.name(), "close");
                if let Some(parent) = self.open.last_mut() {
                    parent.push_child(child);
                }
            }
        } else {
            trace!(line, tag = %name, "close root");
            self.root_closed = true;
        }
        Ok(())
    }

    /// Tokenize and apply one raw markup line.
    pub fn push_line(&mut self, line: &str, line_number: usize) -> Result<(), ParseError> {
        let token = tokenize_line(line, line_number)?;
        self.push(token, line_number)
    }

    /// Finish the build. Every tag, the root included, must have been closed.
    pub fn finish(mut self) -> Result<TagTree, ParseError> {
        if self.open.len() > 1 {
            let name = self.cursor().unwrap_or_default().to_string();
            return Err(ParseError::UnclosedTag { name });
        }
        match self.open.pop() {
            Some(root) if !self.root_closed => Err(ParseError::UnclosedTag {
                name: root.name().to_string(),
            }),
            Some(root) => {
                debug!(
                    root = root.name(),
                    nodes = 1 + root.descendant_count(),
                    "tag tree built"
                );
                Ok(TagTree::new(root))
            }
            None => {
                debug!("no markup lines, tag tree is empty");
                Ok(TagTree::empty())
            }
        }
    }
}

/// Build a tree from markup lines, stopping at the first error.
pub fn parse_lines<I, S>(lines: I) -> Result<TagTree, ParseError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut builder = TreeBuilder::new();
    for (index, line) in lines.into_iter().enumerate() {
        builder.push_line(line.as_ref(), index + 1)?;
    }
    builder.finish()
}

/// Build a tree from a markup document, one tag per line.
pub fn parse_document(source: &str) -> Result<TagTree, ParseError> {
    parse_lines(source.lines())
}
