//! Line tokenizer
//!
//!     Every markup line carries exactly one tag. This module turns a single line
//!     into a [`LineToken`]: an opening tag with its attribute pairs, or a closing
//!     tag. Anything else is a syntax error naming the line.
//!
//!     Lines are classified with parser combinators (see
//!     [line_classification](line_classification)); the tree builder consumes the
//!     resulting tokens in document order.

pub mod line_classification;
pub mod tokens;

pub use line_classification::tokenize_line;
pub use tokens::LineToken;
