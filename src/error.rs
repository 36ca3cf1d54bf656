//! Error types for parsing, input reading, formatting and configuration
//!
//! A query that finds nothing is not an error: resolution returns `None` and
//! the caller renders its not-found text. Only structural problems with the
//! markup (and problems reading the input itself) surface here.

use thiserror::Error;

/// Fatal problems found while tokenizing or building the tag tree.
///
/// Line numbers are 1-based and count markup lines only.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The line is neither an opening nor a closing tag.
    #[error("line {line}: syntax error")]
    Syntax { line: usize },

    /// A closing tag does not match the tag that is currently open.
    #[error("line {line}: closing a tag that is not open: `{name}`{}", describe_open(.open))]
    MismatchedClose {
        line: usize,
        name: String,
        open: Option<String>,
    },

    /// The document ended while a tag other than the root was still open.
    #[error("missing closing tag for `{name}`")]
    UnclosedTag { name: String },
}

fn describe_open(open: &Option<String>) -> String {
    match open {
        Some(name) => format!(" (currently open: `{name}`)"),
        None => " (no tag is open)".to_string(),
    }
}

impl ParseError {
    /// The markup line the error points at, if it has one.
    pub fn line(&self) -> Option<usize> {
        match self {
            ParseError::Syntax { line } | ParseError::MismatchedClose { line, .. } => Some(*line),
            ParseError::UnclosedTag { .. } => None,
        }
    }
}

/// Problems reading the `N Q` header and the lines that follow it.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("malformed header `{0}`: expected a markup line count and a query count")]
    MalformedHeader(String),

    #[error("expected {expected} {section} line(s), found {found}")]
    MissingLines {
        section: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised by the tree dump formatters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("format '{0}' not found")]
    FormatNotFound(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Errors raised while loading settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("unknown log level '{0}', expected one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),
}

/// Everything the command-line front end can fail with.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Format(#[from] FormatError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
