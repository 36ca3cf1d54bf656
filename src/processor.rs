//! Problem input and answer output
//!
//! The input is line-based:
//!
//!   N Q
//!   <N markup lines>
//!   <Q query lines>
//!
//! All markup is parsed before any query is answered, and answers are only
//! written once the tree is complete, so a parse failure produces no output.
//! Each answer is the attribute value, or the configured not-found text.

use std::io::{BufRead, Write};
use tracing::{debug, info};

use crate::ast::TagTree;
use crate::building::parse_lines;
use crate::config::Settings;
use crate::error::{AppError, InputError, ParseError};
use crate::query::QueryPath;

/// One complete input: markup lines plus the queries to run against them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Problem {
    markup: Vec<String>,
    queries: Vec<String>,
}

impl Problem {
    pub fn new(markup: Vec<String>, queries: Vec<String>) -> Self {
        Self { markup, queries }
    }

    /// Read the header, the markup lines and the query lines.
    pub fn read<R: BufRead>(reader: R) -> Result<Self, InputError> {
        let mut lines = reader.lines();

        let header = loop {
            match lines.next() {
                Some(line) => {
                    let line = line?;
                    if !line.trim().is_empty() {
                        break line;
                    }
                }
                None => return Err(InputError::MalformedHeader(String::new())),
            }
        };
        let (markup_count, query_count) = parse_header(&header)?;
        debug!(markup_count, query_count, "read header");

        let markup = take_lines(&mut lines, markup_count, "markup")?;
        let queries = take_lines(&mut lines, query_count, "query")?;
        Ok(Self { markup, queries })
    }

    pub fn markup(&self) -> &[String] {
        &self.markup
    }

    pub fn queries(&self) -> &[String] {
        &self.queries
    }

    pub fn build_tree(&self) -> Result<TagTree, ParseError> {
        parse_lines(&self.markup)
    }

    /// Parse the markup, then answer every query in order.
    pub fn solve(&self, not_found: &str) -> Result<Vec<String>, ParseError> {
        let tree = self.build_tree()?;
        Ok(answer_queries(&tree, &self.queries, not_found))
    }
}

fn parse_header(header: &str) -> Result<(usize, usize), InputError> {
    let malformed = || InputError::MalformedHeader(header.trim().to_string());
    let mut fields = header.split_whitespace();
    let markup_count = fields
        .next()
        .and_then(|f| f.parse().ok())
        .ok_or_else(malformed)?;
    let query_count = fields
        .next()
        .and_then(|f| f.parse().ok())
        .ok_or_else(malformed)?;
    if fields.next().is_some() {
        return Err(malformed());
    }
    Ok((markup_count, query_count))
}

fn take_lines<I>(lines: &mut I, expected: usize, section: &'static str) -> Result<Vec<String>, InputError>
where
    I: Iterator<Item = std::io::Result<String>>,
{
    let mut taken = Vec::with_capacity(expected);
    while taken.len() < expected {
        match lines.next() {
            Some(line) => taken.push(line?),
            None => {
                return Err(InputError::MissingLines {
                    section,
                    expected,
                    found: taken.len(),
                })
            }
        }
    }
    Ok(taken)
}

/// Render one answer per query.
pub fn answer_queries<S: AsRef<str>>(tree: &TagTree, queries: &[S], not_found: &str) -> Vec<String> {
    queries
        .iter()
        .map(|query| {
            QueryPath::parse(query.as_ref())
                .resolve(tree)
                .unwrap_or(not_found)
                .to_string()
        })
        .collect()
}

/// Read a problem, solve it and write the answers, one per line.
pub fn run<R: BufRead, W: Write>(reader: R, mut writer: W, settings: &Settings) -> Result<(), AppError> {
    let problem = Problem::read(reader)?;
    let answers = problem.solve(&settings.output.not_found)?;
    for answer in &answers {
        writeln!(writer, "{}", answer)?;
    }
    writer.flush()?;
    info!(
        markup_lines = problem.markup().len(),
        queries = answers.len(),
        "answered queries"
    );
    Ok(())
}
