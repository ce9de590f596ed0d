//! ascii-graphs: layered layout of directed graphs, drawn as ASCII/Unicode boxes
//! and arrows.
//!
//! ```
//! use ascii_graphs::{GraphBuilder, LayoutPrefs, render_graph};
//!
//! let mut builder = GraphBuilder::new();
//! builder.add_edge("A", "B");
//! let text = render_graph(&builder.build(), &LayoutPrefs::default()).unwrap();
//! assert!(text.contains('▼'));
//! ```

pub mod config;
pub mod error;
pub mod layout;
pub mod parsers;
pub mod renderers;

pub use config::LayoutPrefs;
pub use error::{Error, GraphError, LayoutError, Result};
pub use layout::{Drawing, Edge, Graph, GraphBuilder, SugiyamaLayout, Vertex};

use renderers::{Renderer, TextRenderer};

/// Lay out `graph` and render it to text.
///
/// Output lines carry no trailing whitespace and there is no final newline. An
/// empty graph renders as an empty string.
pub fn render_graph(graph: &Graph, prefs: &LayoutPrefs) -> Result<String> {
    let drawing = SugiyamaLayout::layout(graph, prefs)?;
    Ok(TextRenderer::new(*prefs).render(&drawing))
}

/// Parse an edge list (see [`parsers::edge_list`]) and render it.
pub fn render_edge_list(src: &str, prefs: &LayoutPrefs) -> Result<String> {
    let graph = parsers::parse(src)?;
    render_graph(&graph, prefs)
}

/// Holds a set of preferences and lays out graphs with them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GraphLayouter {
    prefs: LayoutPrefs,
}

impl GraphLayouter {
    pub fn new(prefs: LayoutPrefs) -> Self {
        Self { prefs }
    }

    pub fn prefs(&self) -> &LayoutPrefs {
        &self.prefs
    }

    pub fn prefs_mut(&mut self) -> &mut LayoutPrefs {
        &mut self.prefs
    }

    pub fn layout(&self, graph: &Graph) -> Result<String> {
        render_graph(graph, &self.prefs)
    }
}
