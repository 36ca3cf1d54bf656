//! Output formats for dumping a tag tree
//!
//! - treeviz: box-drawing outline, one tag per line
//! - json / yaml: serde serialization of the tree

pub mod registry;
pub mod serialized;
pub mod treeviz;

pub use registry::{FormatRegistry, Formatter};
pub use serialized::{JsonFormatter, YamlFormatter};
pub use treeviz::{to_treeviz_str, TreevizFormatter};
