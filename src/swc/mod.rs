//! # SWC Reader
//!
//! Line-oriented SWC parser producing a [`Graph`].
//! Works on a complete in-memory buffer; see [`crate::io`] for files and readers.

pub mod parser;
pub(crate) mod scanner;

pub use parser::{Field, Parser};

use crate::model::Graph;
use crate::Result;

/// Parse an SWC document into a fresh graph.
///
/// Shorthand for a one-off [`Parser`]; use a `Parser` directly to keep the
/// partial graph or the diagnostic text on failure.
pub fn parse(input: impl AsRef<[u8]>) -> Result<Graph> {
    let mut graph = Graph::new();
    Parser::new().parse(input, &mut graph)?;
    Ok(graph)
}
