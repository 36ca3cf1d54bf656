//! Path queries
//!
//! A query such as `a.b.c~attr` names the root tag, descends through direct
//! children by name, and finishes with an attribute lookup after `~`.
//! [path](path) splits the expression into steps; [resolver](resolver) walks
//! those steps over a built [`TagTree`](crate::ast::TagTree).

pub mod path;
pub mod resolver;

pub use path::{Delimiter, QueryPath, Step};
pub use resolver::resolve;
