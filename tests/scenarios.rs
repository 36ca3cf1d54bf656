//! End-to-end scenarios for parsing and querying
//!
//! Each case feeds markup lines and one query through the processor and
//! checks the rendered answer or the fatal error.

use rstest::{fixture, rstest};
use tagquery::processor::{answer_queries, Problem};
use tagquery::{parse_lines, ParseError, TagTree};

const NOT_FOUND: &str = "Not Found!";

fn problem(markup: &[&str], queries: &[&str]) -> Problem {
    Problem::new(
        markup.iter().map(|l| l.to_string()).collect(),
        queries.iter().map(|q| q.to_string()).collect(),
    )
}

#[fixture]
fn sample() -> TagTree {
    parse_lines([
        r#"<tag1 value = "HelloWorld">"#,
        r#"<tag2 name = "Name1">"#,
        "</tag2>",
        "</tag1>",
    ])
    .expect("sample markup parses")
}

#[rstest]
#[case::single_tag(&[r#"<tag1 value="value">"#, "</tag1>"], "tag1~value", "value")]
#[case::nested(&["<a>", r#"<b value="hello">"#, "</b>", "</a>"], "a.b~value", "hello")]
#[case::attribute_on_wrong_level(&["<a>", r#"<b value="hello">"#, "</b>", "</a>"], "a~value", NOT_FOUND)]
#[case::missing_child(&[r#"<a x="1">"#, r#"<b x="2">"#, "</b>", "</a>"], "a.c~x", NOT_FOUND)]
#[case::child_shadows_parent(&[r#"<a x="1">"#, r#"<b x="2">"#, "</b>", "</a>"], "a.b~x", "2")]
#[case::no_attributes(&["<a>", "</a>"], "a~x", NOT_FOUND)]
#[case::no_lookup(&[r#"<a x="1">"#, "</a>"], "a", NOT_FOUND)]
#[case::last_write_wins(&[r#"<a x="1" x="2">"#, "</a>"], "a~x", "2")]
fn answers_single_query(#[case] markup: &[&str], #[case] query: &str, #[case] expected: &str) {
    let answers = problem(markup, &[query]).solve(NOT_FOUND).unwrap();
    assert_eq!(answers, vec![expected.to_string()]);
}

#[rstest]
#[case::root("tag1~value", Some("HelloWorld"))]
#[case::child("tag1.tag2~name", Some("Name1"))]
#[case::wrong_level("tag1~name", None)]
#[case::anchor_is_child("tag2~name", None)]
#[case::anchor_mismatch("tag3.tag2~name", None)]
#[case::trailing_dot("tag1.tag2.~name", None)]
fn resolves_against_sample(sample: TagTree, #[case] query: &str, #[case] expected: Option<&str>) {
    assert_eq!(sample.resolve(query), expected);
}

#[rstest]
fn answers_keep_query_order(sample: TagTree) {
    let queries = ["tag1.tag2~name", "tag1~name", "tag1~value"];
    assert_eq!(
        answer_queries(&sample, &queries, NOT_FOUND),
        vec!["Name1", NOT_FOUND, "HelloWorld"]
    );
}

#[rstest]
#[case::missing_quotes(&["<tag value=novalue>", "</tag>"], ParseError::Syntax { line: 1 })]
#[case::syntax_later_line(&["<a>", "text", "</a>"], ParseError::Syntax { line: 2 })]
#[case::mismatched_close(
    &["<a>", "<b>", "</a>"],
    ParseError::MismatchedClose { line: 3, name: "a".to_string(), open: Some("b".to_string()) }
)]
#[case::unclosed(&["<a>", "<b>", "<c>", "</c>"], ParseError::UnclosedTag { name: "b".to_string() })]
#[case::unclosed_root(&[r#"<a x="1">"#], ParseError::UnclosedTag { name: "a".to_string() })]
#[case::unclosed_root_with_closed_child(&["<a>", "<b>", "</b>"], ParseError::UnclosedTag { name: "a".to_string() })]
fn fatal_markup_errors(#[case] markup: &[&str], #[case] expected: ParseError) {
    let result = problem(markup, &["a~x"]).solve(NOT_FOUND);
    assert_eq!(result, Err(expected));
}
