//! Line Classification
//!
//! Combinator grammar for a single markup line. A line is either
//!
//!   <NAME key="value" key="value">
//!   </NAME>
//!
//! Surrounding whitespace on the line is ignored. Each attribute pair must be
//! preceded by whitespace; whitespace may surround `=`, and may appear before
//! the `>` of an opening tag. Quoted values hold at least one character and
//! are stored trimmed. Closing tags take no attributes and no inner whitespace.

use chumsky::prelude::*;
use tracing::{debug, trace};

use crate::error::ParseError;
use crate::lexing::tokens::LineToken;

/// Type alias for the combinator error over characters
type LineError = Simple<char>;

fn is_name_char(c: &char) -> bool {
    !c.is_whitespace() && *c != '>'
}

fn is_key_char(c: &char) -> bool {
    !c.is_whitespace() && !matches!(c, '=' | '"' | '>')
}

/// Zero or more whitespace characters
fn whitespace() -> impl Parser<char, (), Error = LineError> + Clone {
    filter(|c: &char| c.is_whitespace()).repeated().ignored()
}

/// Name of an opening tag. It cannot start with `/`, so `</x ...>` never
/// reads as an opening tag.
fn open_name() -> impl Parser<char, String, Error = LineError> + Clone {
    filter(|c: &char| is_name_char(c) && *c != '/')
        .chain(filter(is_name_char).repeated())
        .collect::<String>()
}

/// `key = "value"` with optional whitespace around `=`
fn attribute() -> impl Parser<char, (String, String), Error = LineError> + Clone {
    let key = filter(is_key_char).repeated().at_least(1).collect::<String>();
    let value = filter(|c: &char| *c != '"')
        .repeated()
        .at_least(1)
        .collect::<String>()
        .delimited_by(just('"'), just('"'));

    key.then_ignore(whitespace())
        .then_ignore(just('='))
        .then_ignore(whitespace())
        .then(value)
        .map(|(key, value)| (key, value.trim().to_string()))
}

fn opening_tag() -> impl Parser<char, LineToken, Error = LineError> + Clone {
    let separated_attribute = filter(|c: &char| c.is_whitespace())
        .repeated()
        .at_least(1)
        .ignore_then(attribute());

    just('<')
        .ignore_then(open_name())
        .then(separated_attribute.repeated())
        .then_ignore(whitespace())
        .then_ignore(just('>'))
        .map(|(name, attributes)| LineToken::Open { name, attributes })
}

fn closing_tag() -> impl Parser<char, LineToken, Error = LineError> + Clone {
    just('<')
        .ignore_then(just('/'))
        .ignore_then(filter(is_name_char).repeated().at_least(1).collect::<String>())
        .then_ignore(just('>'))
        .map(|name| LineToken::Close { name })
}

/// The whole-line grammar: one tag and nothing else
fn tag_line() -> impl Parser<char, LineToken, Error = LineError> + Clone {
    closing_tag().or(opening_tag()).then_ignore(end())
}

/// Classify one markup line.
///
/// `line_number` is 1-based and only used for the error report.
pub fn tokenize_line(line: &str, line_number: usize) -> Result<LineToken, ParseError> {
    let trimmed = line.trim();
    match tag_line().parse(trimmed) {
        Ok(token) => {
            trace!(line = line_number, token = %token, "classified line");
            Ok(token)
        }
        Err(errors) => {
            for error in &errors {
                debug!(
                    line = line_number,
                    span = ?error.span(),
                    found = ?error.found(),
                    reason = ?error.reason(),
                    "line does not match the tag grammar"
                );
            }
            Err(ParseError::Syntax { line: line_number })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open(name: &str, attributes: &[(&str, &str)]) -> LineToken {
        LineToken::Open {
            name: name.to_string(),
            attributes: attributes
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    fn close(name: &str) -> LineToken {
        LineToken::Close {
            name: name.to_string(),
        }
    }

    #[test]
    fn test_open_without_attributes() {
        assert_eq!(tokenize_line("<a>", 1), Ok(open("a", &[])));
    }

    #[test]
    fn test_open_with_attributes_in_order() {
        assert_eq!(
            tokenize_line(r#"<tag1 value = "HelloWorld" size="3">"#, 1),
            Ok(open("tag1", &[("value", "HelloWorld"), ("size", "3")]))
        );
    }

    #[test]
    fn test_duplicate_keys_are_all_reported() {
        assert_eq!(
            tokenize_line(r#"<a x="1" x="2">"#, 1),
            Ok(open("a", &[("x", "1"), ("x", "2")]))
        );
    }

    #[test]
    fn test_value_is_trimmed() {
        assert_eq!(
            tokenize_line(r#"<a x="  spaced out  ">"#, 1),
            Ok(open("a", &[("x", "spaced out")]))
        );
    }

    #[test]
    fn test_value_may_contain_markup_characters() {
        assert_eq!(
            tokenize_line(r#"<a expr="a.b~c <d> = e">"#, 1),
            Ok(open("a", &[("expr", "a.b~c <d> = e")]))
        );
    }

    #[test]
    fn test_whitespace_before_closing_bracket() {
        assert_eq!(
            tokenize_line(r#"<a x="1"   >"#, 1),
            Ok(open("a", &[("x", "1")]))
        );
    }

    #[test]
    fn test_surrounding_line_whitespace_is_ignored() {
        assert_eq!(tokenize_line("  <a>\r", 1), Ok(open("a", &[])));
        assert_eq!(tokenize_line("\t</a>  ", 1), Ok(close("a")));
    }

    #[test]
    fn test_close() {
        assert_eq!(tokenize_line("</tag1>", 1), Ok(close("tag1")));
    }

    #[test]
    fn test_missing_quotes_is_syntax_error() {
        assert_eq!(
            tokenize_line("<tag value=novalue>", 7),
            Err(ParseError::Syntax { line: 7 })
        );
    }

    #[test]
    fn test_rejected_lines() {
        let rejected = [
            "",
            "plain text",
            "<>",
            "</>",
            "< a>",
            "</a >",
            r#"</a x="1">"#,
            r#"<a x="">"#,
            r#"<a x="1"y="2">"#,
            r#"<a x="1>"#,
            "<a",
            "<a> trailing",
            "<a b>",
        ];
        for line in rejected {
            assert_eq!(
                tokenize_line(line, 2),
                Err(ParseError::Syntax { line: 2 }),
                "expected `{}` to be rejected",
                line
            );
        }
    }
}
