//! # tagquery
//!
//! Parses a small line-oriented tag markup into a tree and answers dotted path
//! queries against it.
//!
//! ```text
//! <tag1 value="HelloWorld">
//! <tag2 name="Name1">
//! </tag2>
//! </tag1>
//! ```
//!
//! `tag1.tag2~name` yields `Name1`; `tag1~value` yields `HelloWorld`.
//!
//! Data flows through the modules in order: [lexing] classifies each line,
//! [building] assembles the [ast], and [query] resolves paths over it.
//! [processor] handles the `N Q` input format, [formats] dumps whole trees.

pub mod ast;
pub mod building;
pub mod config;
pub mod error;
pub mod formats;
pub mod lexing;
pub mod logging;
pub mod processor;
pub mod query;

pub use ast::{Tag, TagTree};
pub use building::{parse_document, parse_lines, TreeBuilder};
pub use error::{AppError, ParseError};
pub use query::QueryPath;
