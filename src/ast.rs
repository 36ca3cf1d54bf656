//! Tag tree
//!
//! The tree produced by the [building](crate::building) module. Every [`Tag`]
//! owns its children outright and carries no link back to its parent, so the
//! finished tree is a plain value: built once, then only read.

pub mod tag;
pub mod tree;

pub use tag::Tag;
pub use tree::TagTree;
