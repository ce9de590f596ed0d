//! Text input formats that produce a [`Graph`].

pub mod edge_list;

pub use edge_list::EdgeListParser;

use crate::error::Result;
use crate::layout::graph::Graph;

/// Trait for graph input parsers.
pub trait Parser {
    /// Parse the input source string into a Graph.
    fn parse(&self, src: &str) -> Result<Graph>;
}

/// Parse `src` with the edge-list format.
pub fn parse(src: &str) -> Result<Graph> {
    EdgeListParser.parse(src)
}
