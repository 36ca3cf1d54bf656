//! Path expression lexing
//!
//! The expression is lexed with logos into delimiters and segments, then
//! grouped into [`Step`]s. Every delimiter closes a step; the segment before it
//! may be empty (`a..b`, `.a`), and text after the last delimiter only matters
//! as part of an attribute name.

use logos::Logos;
use std::fmt;

/// Tokens of a path expression.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum PathToken {
    #[token(".")]
    Dot,

    #[token("~")]
    Tilde,

    // Everything else, including whitespace
    #[regex(r"[^.~]+")]
    Segment,
}

/// The delimiter that ends a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    /// `.`: descend and keep going
    Descend,
    /// `~`: descend, then look up the rest of the expression as an attribute
    Lookup,
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Delimiter::Descend => write!(f, "."),
            Delimiter::Lookup => write!(f, "~"),
        }
    }
}

/// A tag-name segment together with the delimiter that ended it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    /// Tag name to match; the first step matches the root itself.
    pub segment: String,
    pub delimiter: Delimiter,
    /// Everything after the delimiter. For a lookup this is the attribute
    /// name.
    pub remainder: String,
}

/// A parsed path expression, reusable across resolutions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryPath {
    expression: String,
    steps: Vec<Step>,
}

impl QueryPath {
    pub fn parse(expression: &str) -> Self {
        let mut steps = Vec::new();
        let mut segment = String::new();
        let mut lexer = PathToken::lexer(expression);

        while let Some(token) = lexer.next() {
            let delimiter = match token {
                Ok(PathToken::Dot) => Delimiter::Descend,
                Ok(PathToken::Tilde) => Delimiter::Lookup,
                Ok(PathToken::Segment) | Err(_) => {
                    segment.push_str(lexer.slice());
                    continue;
                }
            };
            steps.push(Step {
                segment: std::mem::take(&mut segment),
                delimiter,
                remainder: lexer.remainder().to_string(),
            });
        }

        Self {
            expression: expression.to_string(),
            steps,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.expression
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Whether any step performs an attribute lookup. Paths without one never
    /// produce a value.
    pub fn has_lookup(&self) -> bool {
        self.steps
            .iter()
            .any(|step| step.delimiter == Delimiter::Lookup)
    }
}

impl fmt::Display for QueryPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.expression)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(segment: &str, delimiter: Delimiter, remainder: &str) -> Step {
        Step {
            segment: segment.to_string(),
            delimiter,
            remainder: remainder.to_string(),
        }
    }

    #[test]
    fn test_tokens() {
        let tokens: Vec<_> = PathToken::lexer("a.bc~d")
            .filter_map(|result| result.ok())
            .collect();
        assert_eq!(
            tokens,
            vec![
                PathToken::Segment,
                PathToken::Dot,
                PathToken::Segment,
                PathToken::Tilde,
                PathToken::Segment,
            ]
        );
    }

    #[test]
    fn test_typical_path() {
        let path = QueryPath::parse("tag1.tag2~name");
        assert_eq!(
            path.steps(),
            &[
                step("tag1", Delimiter::Descend, "tag2~name"),
                step("tag2", Delimiter::Lookup, "name"),
            ]
        );
        assert!(path.has_lookup());
        assert_eq!(path.to_string(), "tag1.tag2~name");
    }

    #[test]
    fn test_no_delimiter_has_no_steps() {
        let path = QueryPath::parse("tag1");
        assert!(path.steps().is_empty());
        assert!(!path.has_lookup());
    }

    #[test]
    fn test_empty_segments() {
        let path = QueryPath::parse("a..b~x");
        assert_eq!(
            path.steps(),
            &[
                step("a", Delimiter::Descend, ".b~x"),
                step("", Delimiter::Descend, "b~x"),
                step("b", Delimiter::Lookup, "x"),
            ]
        );
    }

    #[test]
    fn test_repeated_lookup_keeps_full_remainder() {
        let path = QueryPath::parse("a~b~c");
        assert_eq!(
            path.steps(),
            &[
                step("a", Delimiter::Lookup, "b~c"),
                step("b", Delimiter::Lookup, "c"),
            ]
        );
    }

    #[test]
    fn test_whitespace_is_part_of_segments() {
        let path = QueryPath::parse(" a ~ x");
        assert_eq!(path.steps(), &[step(" a ", Delimiter::Lookup, " x")]);
    }
}
