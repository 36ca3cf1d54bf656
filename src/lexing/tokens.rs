//! Token definitions for tag lines

use std::fmt;

/// One classified markup line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineToken {
    /// `<name key="value" ...>`. Pairs are kept in line order, duplicates
    /// included; the tree builder applies them so the last one wins.
    Open {
        name: String,
        attributes: Vec<(String, String)>,
    },
    /// `</name>`
    Close { name: String },
}

impl LineToken {
    /// The tag name carried by the token.
    pub fn name(&self) -> &str {
        match self {
            LineToken::Open { name, .. } | LineToken::Close { name } => name,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, LineToken::Open { .. })
    }
}

impl fmt::Display for LineToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineToken::Open { name, attributes } => {
                write!(f, "<{}", name)?;
                for (key, value) in attributes {
                    write!(f, " {}=\"{}\"", key, value)?;
                }
                write!(f, ">")
            }
            LineToken::Close { name } => write!(f, "</{}>", name),
        }
    }
}
